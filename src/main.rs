//! Memoboard, a small desktop shell.
//!
//! A clock on the home page, a notes page, and a sliding sidebar that
//! navigates between them. The sidebar opens on hover, on a manual toggle,
//! or on a rightward swipe starting at the left window edge, and closes on
//! the opposite inputs.

mod clock;
mod config;
mod pages;
mod sidebar;
mod viewport;

use std::time::Duration;

use iced::{event, time, window};
use iced::{Element, Event, Size, Subscription, Task};
use tracing_subscriber::EnvFilter;

use crate::clock::Clock;
use crate::config::{ClockConfig, Config};
use crate::sidebar::Sidebar;
use crate::viewport::Viewport;

const WINDOW_SIZE: Size = Size::new(1024.0, 768.0);

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("memoboard=info")),
        )
        .init();

    tracing::info!("starting memoboard v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().unwrap_or_else(|error| {
        tracing::warn!("using default configuration: {error}");
        Config::default()
    });

    iced::application("Memoboard", App::update, App::view)
        .subscription(App::subscription)
        .window_size(WINDOW_SIZE)
        .run_with(move || App::new(config))
}

// =============================================================================
// Pages
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Notes,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Notes];

    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Notes => "Notes",
        }
    }

    /// The route path the visibility policy matches against.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Notes => "/notes",
        }
    }
}

// =============================================================================
// Application State
// =============================================================================

struct App {
    page: Page,
    clock: Clock,
    sidebar: Sidebar,
    viewport: Viewport,
    clock_config: ClockConfig,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
    ClockTick,
    ViewportChanged(Size),
    Sidebar(sidebar::Event),
}

impl App {
    fn new(config: Config) -> (Self, Task<Message>) {
        let page = Page::default();
        let viewport = Viewport::new(WINDOW_SIZE.width);

        let mut sidebar = Sidebar::new(&config.sidebar);
        sidebar.route_changed(page.path(), &viewport);

        let app = Self {
            page,
            clock: Clock::new(),
            sidebar,
            viewport,
            clock_config: config.clock,
        };

        // The configured launch size stands in until the real one arrives.
        let measure = window::get_latest()
            .and_then(window::get_size)
            .map(Message::ViewportChanged);

        (app, measure)
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Navigate(page) => {
                tracing::debug!("navigating to {}", page.path());
                self.page = page;
                self.sidebar.route_changed(page.path(), &self.viewport);
            }
            Message::ClockTick => {
                self.clock.tick();
            }
            Message::ViewportChanged(size) => {
                self.viewport.resize(size.width);
                self.sidebar.route_changed(self.page.path(), &self.viewport);
            }
            Message::Sidebar(event) => {
                self.sidebar.update(event);
                tracing::trace!(open = self.sidebar.is_open(), "sidebar input handled");
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = match self.page {
            Page::Home => pages::view_home(&self.clock, &self.clock_config),
            Page::Notes => pages::view_notes(),
        };

        self.sidebar.view(self.page, content)
    }

    fn subscription(&self) -> Subscription<Message> {
        let runtime = event::listen_with(runtime_events);

        // The clock only ticks while its page is showing.
        let clock = match self.page {
            Page::Home => time::every(Duration::from_secs(1)).map(|_| Message::ClockTick),
            Page::Notes => Subscription::none(),
        };

        Subscription::batch([runtime, clock])
    }
}

/// Routes raw runtime events to the app.
///
/// Touch events carry their widget-capture status so the sidebar's
/// document-level site can skip gestures the panel already handled.
fn runtime_events(
    event: Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        Event::Touch(touch) => Some(Message::Sidebar(sidebar::Event::DocumentTouch(
            touch, status,
        ))),
        Event::Window(window::Event::Resized(size)) => Some(Message::ViewportChanged(size)),
        _ => None,
    }
}
