//! The sliding navigation panel.
//!
//! The panel opens and closes through four input channels: pointer hover,
//! edge swipes captured at the document level, swipes captured on the panel
//! itself, and a manual toggle button. A route/viewport policy can hide the
//! toggle and push the panel shut on mobile-sized windows.

mod gesture;
mod policy;
mod touch_region;

use iced::event;
use iced::touch;
use iced::widget::{button, column, container, horizontal_space, mouse_area, opaque, stack, text};
use iced::{Color, Element, Fill, Theme};

use crate::config::SidebarConfig;
use crate::viewport::Viewport;
use crate::{Message, Page};

use gesture::{Swipe, TouchTrack};
use touch_region::touch_region;

const OPEN_WIDTH: f32 = 220.0;
const RAIL_WIDTH: f32 = 48.0;

/// Input handled by the [`Sidebar`].
#[derive(Debug, Clone)]
pub enum Event {
    /// The pointer entered the panel region.
    HoverEntered,
    /// The pointer left the panel region.
    HoverLeft,
    /// The manual toggle button was pressed.
    Toggled,
    /// The dismissal overlay was pressed.
    Dismissed,
    /// A finger landed on the panel.
    TouchBegan(f32),
    /// A captured finger moved.
    TouchMoved(f32),
    /// A captured finger lifted.
    TouchEnded,
    /// A raw touch event observed at the document level, together with
    /// whether some widget already captured it.
    DocumentTouch(touch::Event, event::Status),
}

/// Open/closed state of the panel plus the gesture track feeding it.
pub struct Sidebar {
    is_open: bool,
    hide_toggle: bool,
    track: TouchTrack,
    swipe_threshold: f32,
    edge_zone: f32,
}

impl Sidebar {
    /// Creates a closed panel with a visible toggle.
    pub fn new(config: &SidebarConfig) -> Self {
        Self {
            is_open: false,
            hide_toggle: false,
            track: TouchTrack::default(),
            swipe_threshold: config.swipe_threshold,
            edge_zone: config.edge_zone,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn begin_touch(&mut self, x: f32) {
        self.track.begin(x);
    }

    pub fn track_touch(&mut self, x: f32) {
        self.track.track(x);
    }

    /// Evaluates the gesture in progress and clears the track.
    ///
    /// A rightward swipe opens a closed panel; a leftward swipe closes an
    /// open one. Anything else leaves the state alone.
    pub fn end_touch(&mut self) {
        match self.track.finish(self.swipe_threshold) {
            Some(Swipe::Right) if !self.is_open => self.open(),
            Some(Swipe::Left) if self.is_open => self.close(),
            _ => {}
        }
    }

    /// Reapplies the toggle-visibility policy for the given path.
    pub fn route_changed(&mut self, path: &str, viewport: &Viewport) {
        let visibility = policy::recompute(path, viewport);

        self.hide_toggle = visibility.hidden;

        if visibility.force_closed {
            self.close();
        }
    }

    pub fn update(&mut self, event: Event) {
        match event {
            Event::HoverEntered => self.open(),
            Event::HoverLeft => self.close(),
            Event::Toggled => self.toggle(),
            Event::Dismissed => self.close(),
            Event::TouchBegan(x) => self.begin_touch(x),
            Event::TouchMoved(x) => self.track_touch(x),
            Event::TouchEnded => self.end_touch(),
            Event::DocumentTouch(touch, status) => self.document_touch(touch, status),
        }
    }

    /// The document-level capture site.
    ///
    /// Touches already captured by the panel are skipped, so each physical
    /// gesture is evaluated exactly once. A document gesture only starts
    /// while the panel is closed and the press lands in the left edge zone.
    fn document_touch(&mut self, touch: touch::Event, status: event::Status) {
        if status == event::Status::Captured {
            return;
        }

        match touch {
            touch::Event::FingerPressed { position, .. } => {
                if !self.is_open && position.x < self.edge_zone {
                    self.begin_touch(position.x);
                }
            }
            touch::Event::FingerMoved { position, .. } => {
                if self.track.in_progress() {
                    self.track_touch(position.x);
                }
            }
            touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. } => {
                self.end_touch();
            }
        }
    }

    /// Lays the panel (and, while open, the dismissal overlay) over `content`.
    pub fn view<'a>(
        &'a self,
        current: Page,
        content: Element<'a, Message>,
    ) -> Element<'a, Message> {
        let mut layers = stack![content].width(Fill).height(Fill);

        if self.is_open {
            layers = layers.push(backdrop());
        }

        layers.push(self.panel(current)).into()
    }

    fn panel(&self, current: Page) -> Element<'_, Message> {
        let mut entries = column![].spacing(4).padding(8).width(Fill);

        if !self.hide_toggle {
            let label = if self.is_open { "Close" } else { "Open" };

            entries = entries.push(
                button(text(label).size(14))
                    .on_press(Message::Sidebar(Event::Toggled))
                    .style(button::secondary),
            );
        }

        if self.is_open {
            for page in Page::ALL {
                let style: fn(&Theme, button::Status) -> button::Style = if page == current {
                    button::primary
                } else {
                    button::text
                };

                entries = entries.push(
                    button(text(page.name()).size(14))
                        .on_press(Message::Navigate(page))
                        .width(Fill)
                        .style(style),
                );
            }
        }

        let width = if self.is_open { OPEN_WIDTH } else { RAIL_WIDTH };

        let body = container(entries)
            .width(width)
            .height(Fill)
            .style(panel_style);

        touch_region(body)
            .on_enter(Message::Sidebar(Event::HoverEntered))
            .on_exit(Message::Sidebar(Event::HoverLeft))
            .on_touch_begin(|x| Message::Sidebar(Event::TouchBegan(x)))
            .on_touch_track(|x| Message::Sidebar(Event::TouchMoved(x)))
            .on_touch_end(Message::Sidebar(Event::TouchEnded))
            .into()
    }
}

fn panel_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        ..container::Style::default()
    }
}

fn backdrop() -> Element<'static, Message> {
    let scrim = container(horizontal_space())
        .width(Fill)
        .height(Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Color { a: 0.32, ..Color::BLACK }.into()),
            ..container::Style::default()
        });

    opaque(mouse_area(scrim).on_press(Message::Sidebar(Event::Dismissed)))
}
