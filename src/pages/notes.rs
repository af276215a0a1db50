//! The notes page.

use iced::widget::{column, container, text};
use iced::{Element, Fill};

use crate::Message;

pub fn view_notes<'a>() -> Element<'a, Message> {
    let body = column![
        text("Notes").size(32),
        text("Nothing here yet. Swipe from the left edge to navigate.").size(14),
    ]
    .spacing(12);

    container(body).center_x(Fill).padding(24).into()
}
