//! Start and exit lines printed around the TUI session

const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
const COLOR_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
}

impl MessageKind {
    fn tag(self) -> String {
        match self {
            MessageKind::Info => format!("{}[INFO]{}", COLOR_INFO, COLOR_RESET),
            MessageKind::Success => format!("{}[SUCCESS]{}", COLOR_SUCCESS, COLOR_RESET),
        }
    }
}

/// One tagged line on stdout.
pub fn session_line(kind: MessageKind, msg: &str) -> String {
    format!("{} {}", kind.tag(), msg)
}

/// Printed before the terminal switches to the alternate screen.
pub fn print_session_starting(source: &str) {
    println!(
        "{}",
        session_line(MessageKind::Info, &format!("Opening dashboard for {}", source))
    );
}

/// Printed once the terminal has been restored.
pub fn print_session_exit_success() {
    println!(
        "{}",
        session_line(MessageKind::Success, "Churn dashboard closed")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_tagged_by_kind() {
        let line = session_line(MessageKind::Info, "Opening dashboard for built-in report");
        assert!(line.contains("[INFO]"));
        assert!(line.ends_with("Opening dashboard for built-in report"));
        assert!(session_line(MessageKind::Success, "done").contains("[SUCCESS]"));
    }
}
