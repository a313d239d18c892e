mod console_status;
mod map_view;

use crate::domain::Position;
use std::fmt::Debug;

pub use console_status::ConsoleStatus;
pub use map_view::MapView;

pub const POSITION_PREFIX: &str = "현재 위치";
pub const FAILURE_PREFIX: &str = "위치 확인 실패";
pub const UNSUPPORTED_MESSAGE: &str = "이 브라우저는 위치 정보를 지원하지 않습니다.";

/// Renders the user's position. Display only, never fed back into tracking.
pub trait MapDisplay: Debug + Send {
    fn set_view(&mut self, position: &Position, zoom: u8);

    fn move_marker(&mut self, position: &Position);
}

/// A single line of user facing text.
pub trait StatusDisplay: Debug + Send {
    fn show(&mut self, text: &str);

    /// A blocking notice, used once when positioning is unavailable altogether.
    fn alert(&mut self, text: &str);
}

pub fn position_text(position: &Position) -> String {
    format!("{}: {}", POSITION_PREFIX, position)
}

pub fn failure_text(message: impl AsRef<str>) -> String {
    format!("{}: {}", FAILURE_PREFIX, message.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn position_text_uses_six_decimals() {
        assert_eq!(position_text(&Position::new(37.597212, 126.7046)), "현재 위치: 37.597212, 126.704600");
    }

    #[test]
    fn failure_text_prefixes_the_message() {
        assert_eq!(failure_text("timeout expired"), "위치 확인 실패: timeout expired");
    }
}
