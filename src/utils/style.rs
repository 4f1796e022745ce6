//! ANSI colouring for terminal output.

pub const RESET: &str = "\x1b[0m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const RED: &str = "\x1b[31m";
pub const CYAN: &str = "\x1b[36m";

pub fn paint(color: &str, text: impl std::fmt::Display) -> String {
    format!("{color}{text}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_wraps_in_reset() {
        assert_eq!(paint(RED, "Cancelled."), "\x1b[31mCancelled.\x1b[0m");
    }
}
