//! Terminal output utilities.
//!
//! Box drawing, status lines, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const BOLD: &str = "\x1b[1m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any active color.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_success(msg: &str) {
    println!("{GREEN}{msg}{RESET}");
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// Checkbox marker for a boolean option.
pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

// ============================================================================
// Box Drawing (56 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 56;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Print box top with optional title: ┌─ Title ──────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content          │
pub fn box_line(content: &str) {
    println!("{}", padded_line(content, false));
}

/// Print centered box content line: │    content    │
pub fn box_line_center(content: &str) {
    println!("{}", padded_line(content, true));
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description.
pub fn box_opt(flag: &str, desc: &str) {
    let flag_col = 24;
    let flag_padded = format!("{:<width$}", flag, width = flag_col);
    box_line(&format!("{flag_padded}{desc}"));
}

fn padded_line(content: &str, center: bool) -> String {
    let display_len = console_width(content);
    if display_len > INNER_WIDTH {
        return format!("│ {} │", content);
    }

    let padding = INNER_WIDTH - display_len;
    let (left, right) = if center {
        (padding / 2, padding - padding / 2)
    } else {
        (0, padding)
    };
    format!("│ {}{}{} │", " ".repeat(left), content, " ".repeat(right))
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_escapes() {
        assert_eq!(console_width("abc"), 3);
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(console_width("│─"), 2);
    }

    #[test]
    fn lines_fill_box() {
        let line = padded_line("hello", false);
        assert_eq!(line.chars().count(), BOX_WIDTH);
        assert!(line.starts_with("│ hello "));

        let centered = padded_line(&format!("{BOLD}mid{RESET}"), true);
        assert_eq!(console_width(&centered), BOX_WIDTH);
    }

    #[test]
    fn overlong_lines_are_not_truncated() {
        let long = "x".repeat(INNER_WIDTH + 10);
        assert!(padded_line(&long, false).contains(&long));
    }

    #[test]
    fn checkbox_markers() {
        assert_eq!(checkbox(true), "[x]");
        assert_eq!(checkbox(false), "[ ]");
    }
}
