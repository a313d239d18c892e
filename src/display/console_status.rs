use crate::display::StatusDisplay;
use std::io::Write;
use tracing::{error, info, warn};

/// Prints the status line to stdout and remembers the last one.
#[derive(Debug, Default)]
pub struct ConsoleStatus {
    last: Option<String>,
}

#[cfg(test)]
impl ConsoleStatus {
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl StatusDisplay for ConsoleStatus {
    fn show(&mut self, text: &str) {
        if self.last.as_deref() == Some(text) {
            return;
        }

        info!("📟 {}", text);
        write_line(&mut std::io::stdout().lock(), text);
        self.last = Some(text.to_string());
    }

    fn alert(&mut self, text: &str) {
        error!("🚨 {}", text);
        eprintln!("{}", text);
        self.last = Some(text.to_string());
    }
}

/// Returns false if the line could not be written.
fn write_line(out: &mut impl Write, text: &str) -> bool {
    match writeln!(out, "{}", text) {
        Ok(()) => true,
        Err(e) => {
            warn!("⚠️ Unable to write status '{}': {}", text, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_the_last_text() {
        let mut status = ConsoleStatus::default();

        status.show("현재 위치: 1.000000, 2.000000");
        status.show("위치 확인 실패: timeout expired");

        assert_eq!(status.last(), Some("위치 확인 실패: timeout expired"));
    }

    #[derive(Debug)]
    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_line_appends_a_newline() {
        let mut out = Vec::new();

        assert!(write_line(&mut out, "현재 위치: 1.000000, 2.000000"));
        assert_eq!(String::from_utf8(out).unwrap(), "현재 위치: 1.000000, 2.000000\n");
    }

    #[test]
    fn write_line_reports_a_failed_write() {
        assert!(!write_line(&mut ClosedOutput, "현재 위치: 1.000000, 2.000000"));
    }

    #[test]
    fn alert_replaces_the_status() {
        let mut status = ConsoleStatus::default();

        status.alert("unsupported");

        assert_eq!(status.last(), Some("unsupported"));
    }
}
