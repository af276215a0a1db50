//! The clock widget.
//!
//! Holds the last observed local time and redraws it once per second while
//! the home page keeps its tick subscription alive.

use chrono::{DateTime, Local};
use iced::widget::{column, text};
use iced::{Center, Element};

use crate::config::{ClockConfig, TimeFormat};
use crate::Message;

pub struct Clock {
    now: DateTime<Local>,
}

impl Clock {
    pub fn new() -> Self {
        Self { now: Local::now() }
    }

    /// Refreshes the displayed time.
    pub fn tick(&mut self) {
        self.now = Local::now();
    }

    pub fn view(&self, config: &ClockConfig) -> Element<'_, Message> {
        let mut face = column![].spacing(4).align_x(Center);

        if config.show_date {
            face = face.push(text(format_date(&self.now)).size(16));
        }

        face.push(text(format_time(&self.now, config)).size(40))
            .into()
    }
}

fn format_time(now: &DateTime<Local>, config: &ClockConfig) -> String {
    let pattern = match (config.time_format, config.show_seconds) {
        (TimeFormat::TwelveHour, true) => "%I:%M:%S %p",
        (TimeFormat::TwelveHour, false) => "%I:%M %p",
        (TimeFormat::TwentyFourHour, true) => "%H:%M:%S",
        (TimeFormat::TwentyFourHour, false) => "%H:%M",
    };

    now.format(pattern).to_string()
}

fn format_date(now: &DateTime<Local>) -> String {
    now.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn afternoon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 3, 15, 4, 5).unwrap()
    }

    #[test]
    fn twelve_hour_face_with_seconds() {
        let config = ClockConfig {
            show_seconds: true,
            show_date: false,
            time_format: TimeFormat::TwelveHour,
        };

        assert_eq!(format_time(&afternoon(), &config), "03:04:05 PM");
    }

    #[test]
    fn twenty_four_hour_face_without_seconds() {
        let config = ClockConfig {
            show_seconds: false,
            show_date: false,
            time_format: TimeFormat::TwentyFourHour,
        };

        assert_eq!(format_time(&afternoon(), &config), "15:04");
    }

    #[test]
    fn date_line_uses_the_short_month() {
        assert_eq!(format_date(&afternoon()), "Jun 3, 2024");
    }
}
