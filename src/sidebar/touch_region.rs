//! A wrapper widget that reports pointer hover and touch gestures over its
//! content.
//!
//! This is the panel-local capture site: finger gestures that start inside
//! the region keep reporting to it until the finger lifts, even if they
//! wander off the widget, and every touch event it handles is captured so
//! the document-level listener does not process the same gesture twice.

use iced::advanced::layout;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{tree, Operation, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::event::{self, Event};
use iced::{mouse, touch};
use iced::{Element, Length, Rectangle, Size, Vector};

/// Emits messages for hover enter/exit and for touch begin/track/end over
/// the bounds of its content.
pub struct TouchRegion<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_enter: Option<Message>,
    on_exit: Option<Message>,
    on_touch_begin: Option<Box<dyn Fn(f32) -> Message + 'a>>,
    on_touch_track: Option<Box<dyn Fn(f32) -> Message + 'a>>,
    on_touch_end: Option<Message>,
}

/// Wraps `content` in a [`TouchRegion`].
pub fn touch_region<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> TouchRegion<'a, Message, Theme, Renderer> {
    TouchRegion {
        content: content.into(),
        on_enter: None,
        on_exit: None,
        on_touch_begin: None,
        on_touch_track: None,
        on_touch_end: None,
    }
}

impl<'a, Message, Theme, Renderer> TouchRegion<'a, Message, Theme, Renderer> {
    /// Sets the message produced when the pointer enters the region.
    pub fn on_enter(mut self, message: Message) -> Self {
        self.on_enter = Some(message);
        self
    }

    /// Sets the message produced when the pointer leaves the region.
    pub fn on_exit(mut self, message: Message) -> Self {
        self.on_exit = Some(message);
        self
    }

    /// Sets the message produced when a finger lands inside the region,
    /// given its horizontal position.
    pub fn on_touch_begin(mut self, message: impl Fn(f32) -> Message + 'a) -> Self {
        self.on_touch_begin = Some(Box::new(message));
        self
    }

    /// Sets the message produced while a captured finger moves, given its
    /// horizontal position.
    pub fn on_touch_track(mut self, message: impl Fn(f32) -> Message + 'a) -> Self {
        self.on_touch_track = Some(Box::new(message));
        self
    }

    /// Sets the message produced when a captured finger lifts.
    pub fn on_touch_end(mut self, message: Message) -> Self {
        self.on_touch_end = Some(message);
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct State {
    hovered: bool,
    tracking: bool,
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for TouchRegion<'a, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        self.content
            .as_widget()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) -> event::Status {
        let status = self.content.as_widget_mut().on_event(
            &mut tree.children[0],
            event.clone(),
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        if status == event::Status::Captured {
            return status;
        }

        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match event {
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if bounds.contains(position) {
                    state.tracking = true;

                    if let Some(on_touch_begin) = &self.on_touch_begin {
                        shell.publish(on_touch_begin(position.x));
                    }

                    return event::Status::Captured;
                }
            }
            Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                if state.tracking {
                    if let Some(on_touch_track) = &self.on_touch_track {
                        shell.publish(on_touch_track(position.x));
                    }

                    return event::Status::Captured;
                }
            }
            Event::Touch(
                touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. },
            ) => {
                if state.tracking {
                    state.tracking = false;

                    if let Some(on_touch_end) = &self.on_touch_end {
                        shell.publish(on_touch_end.clone());
                    }

                    return event::Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let hovered = cursor.is_over(bounds);

                if hovered != state.hovered {
                    state.hovered = hovered;

                    let message = if hovered { &self.on_enter } else { &self.on_exit };

                    if let Some(message) = message {
                        shell.publish(message.clone());
                    }
                }
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                if state.hovered {
                    state.hovered = false;

                    if let Some(on_exit) = &self.on_exit {
                        shell.publish(on_exit.clone());
                    }
                }
            }
            _ => {}
        }

        event::Status::Ignored
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content
            .as_widget_mut()
            .overlay(&mut tree.children[0], layout, renderer, translation)
    }
}

impl<'a, Message, Theme, Renderer> From<TouchRegion<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(region: TouchRegion<'a, Message, Theme, Renderer>) -> Self {
        Self::new(region)
    }
}
