//! The home page: a header and the clock.

use iced::widget::{column, container, text};
use iced::{Element, Fill};

use crate::clock::Clock;
use crate::config::ClockConfig;
use crate::Message;

pub fn view_home<'a>(clock: &'a Clock, config: &'a ClockConfig) -> Element<'a, Message> {
    let header = container(text("Memoboard").size(32)).center_x(Fill).padding(24);

    let face = container(clock.view(config)).center_x(Fill).padding(24);

    column![header, face].width(Fill).into()
}
