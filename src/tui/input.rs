use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Outcome of one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<T> {
    Value(T),
    /// Esc / Ctrl+Q: drop this edit, keep the form open.
    Cancelled,
    /// Ctrl+C, no terminal, or the key stream failed: leave the form.
    Closed,
}

/// Source of user input for the form.
pub trait Prompt {
    fn line(&mut self, prompt: &str, initial: &str) -> Input<String>;
    fn number(&mut self, prompt: &str, initial: usize) -> Input<usize>;
}

/// Raw-mode line editing on the controlling terminal.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn line(&mut self, prompt: &str, initial: &str) -> Input<String> {
        get_editable_input(prompt, initial)
    }

    fn number(&mut self, prompt: &str, initial: usize) -> Input<usize> {
        get_numeric_input(prompt, initial)
    }
}

/// Read one edited line in raw mode.
///
/// Only characters passing `accept` are inserted.
fn read_line(prompt: &str, initial: &str, accept: impl Fn(char) -> bool) -> Input<String> {
    let mut input: Vec<char> = initial.chars().collect();
    let mut cursor = input.len();

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Input::Closed,
    };

    print!("{}: {}", prompt, initial);
    flush();
    let mut drawn_len = input.len();

    loop {
        let key = match read() {
            Ok(Event::Key(key)) => key,
            Ok(_) => continue,
            Err(_) => return leave(Input::Closed),
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => return leave(Input::Closed),
            KeyCode::Char('q') if ctrl => return leave(Input::Cancelled),
            KeyCode::Esc => return leave(Input::Cancelled),
            KeyCode::Char('u') if ctrl => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace if cursor > 0 => {
                cursor -= 1;
                input.remove(cursor);
            }
            KeyCode::Delete if cursor < input.len() => {
                input.remove(cursor);
            }
            KeyCode::Left if cursor > 0 => cursor -= 1,
            KeyCode::Right if cursor < input.len() => cursor += 1,
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if !ctrl && accept(c) => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        let text: String = input.iter().collect();
        print!("\r{}: {}", prompt, " ".repeat(drawn_len + 1));
        print!("\r{}: {}", prompt, text);
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
        flush();
        drawn_len = input.len();
    }

    drop(_guard);
    println!();
    Input::Value(input.into_iter().collect())
}

fn leave(outcome: Input<String>) -> Input<String> {
    reset_terminal();
    println!();
    outcome
}

/// Free-text input, prefilled with `initial_value`.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Input<String> {
    read_line(prompt, initial_value, |_| true)
}

/// Digits-only input. Empty input keeps `initial_value`.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Input<usize> {
    match read_line(prompt, &initial_value.to_string(), |c| c.is_ascii_digit()) {
        Input::Value(digits) => Input::Value(parse_number(&digits).unwrap_or(initial_value)),
        Input::Cancelled => Input::Cancelled,
        Input::Closed => Input::Closed,
    }
}

fn parse_number(digits: &str) -> Option<usize> {
    let digits = digits.trim();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_accepts_digits() {
        assert_eq!(parse_number("42"), Some(42));
        assert_eq!(parse_number(" 7 "), Some(7));
    }

    #[test]
    fn parse_number_rejects_empty_and_overflow() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("99999999999999999999999999"), None);
    }
}
