//! The interactive password form: generate, copy, exit.

use copypasta::{ClipboardContext, ClipboardProvider};
use log::{info, warn};
use passform::pass::{self, charset::Class};
use passform::rng::Source;
use rand::rngs::StdRng;
use zeroize::Zeroize;

use super::{Input, Prompt, Status, enter_prompt, print_form};
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};
use crate::terminal::{clear, reset_terminal};

use LoopAction::*;
#[derive(Debug, PartialEq, Eq)]
pub enum LoopAction {
    Break,
    Continue,
}

pub struct Form {
    pub settings: Settings,
    password: String,
    status: Option<Status>,
    source: Source,
    rng: StdRng,
    clipboard: Option<ClipboardContext>,
}

impl Form {
    pub fn new(source: Source) -> Self {
        Self {
            settings: Settings::default(),
            password: String::new(),
            status: None,
            rng: source.rng(),
            source,
            clipboard: None,
        }
    }

    /// Draw the form and handle input until exit or until input is closed.
    /// The displayed password is wiped on the way out.
    pub fn run<P: Prompt>(&mut self, prompt: &mut P) {
        loop {
            print_form(
                &self.settings,
                &self.password,
                &self.source,
                self.status.as_ref(),
            );
            self.status = None;

            let input = match prompt.line(enter_prompt(), "") {
                Input::Value(s) => s,
                Input::Cancelled => continue,
                Input::Closed => break,
            };

            if let Break = self.handle(input.trim(), prompt) {
                break;
            }
        }
        self.password.zeroize();
        clear();
        reset_terminal();
    }

    /// Apply one menu choice.
    pub fn handle<P: Prompt>(&mut self, choice: &str, prompt: &mut P) -> LoopAction {
        match choice {
            "" | "g" => self.generate(),
            "1" => {
                let label = format!("Password length ({MIN_LENGTH}-{MAX_LENGTH})");
                match prompt.number(&label, self.settings.pass_length) {
                    Input::Value(len) => self.settings.set_length(len),
                    Input::Cancelled => {}
                    Input::Closed => return Break,
                }
            }
            "2" => self.settings.toggle(Class::Lowercase),
            "3" => self.settings.toggle(Class::Uppercase),
            "4" => self.settings.toggle(Class::Digits),
            "5" => self.settings.toggle(Class::Special),
            "c" => self.copy(),
            "e" | "q" => return Break,
            _ => self.status = Some(Status::Error("Invalid option.".to_string())),
        }
        Continue
    }

    /// Generate a password from the current settings. A failed request keeps
    /// the previous password.
    pub fn generate(&mut self) {
        match pass::generate(&self.settings.request(), &mut self.rng) {
            Ok(password) => {
                self.password.zeroize();
                self.password = password;
            }
            Err(e) => {
                warn!("password request rejected: {e}");
                self.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    pub fn copy(&mut self) {
        if self.password.is_empty() {
            self.status = Some(Status::Error("No password generated to copy!".to_string()));
            return;
        }

        if self.clipboard.is_none() {
            match ClipboardContext::new() {
                Ok(ctx) => self.clipboard = Some(ctx),
                Err(e) => {
                    warn!("clipboard unavailable: {e}");
                    self.status = Some(Status::Error(format!("Clipboard unavailable: {e}")));
                    return;
                }
            }
        }

        let Some(ctx) = self.clipboard.as_mut() else {
            return;
        };
        match ctx.set_contents(self.password.clone()) {
            Ok(()) => {
                info!("password copied to clipboard");
                self.status = Some(Status::Info("Password copied to clipboard!".to_string()));
            }
            Err(e) => {
                warn!("clipboard write failed: {e}");
                self.status = Some(Status::Error(format!("Clipboard error: {e}")));
            }
        }
    }
}

impl Drop for Form {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Replays scripted answers, then reports the input as closed.
    #[derive(Default)]
    struct Scripted {
        lines: VecDeque<&'static str>,
        numbers: VecDeque<usize>,
        asked: usize,
    }

    impl Scripted {
        fn lines(lines: &[&'static str]) -> Self {
            Self {
                lines: lines.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl Prompt for Scripted {
        fn line(&mut self, _prompt: &str, _initial: &str) -> Input<String> {
            self.asked += 1;
            match self.lines.pop_front() {
                Some("<esc>") => Input::Cancelled,
                Some(line) => Input::Value(line.to_string()),
                None => Input::Closed,
            }
        }

        fn number(&mut self, _prompt: &str, _initial: usize) -> Input<usize> {
            self.asked += 1;
            self.numbers.pop_front().map_or(Input::Closed, Input::Value)
        }
    }

    fn form() -> Form {
        Form::new(Source::Seeded(3))
    }

    fn no_input() -> Scripted {
        Scripted::default()
    }

    #[test]
    fn generate_uses_settings() {
        let mut form = form();
        form.handle("4", &mut no_input());
        form.handle("5", &mut no_input());
        form.generate();
        assert_eq!(form.password.len(), 10);
        assert!(form.password.chars().all(|c| c.is_ascii_alphabetic()));
        assert!(form.status.as_ref().is_none());
    }

    #[test]
    fn enter_generates() {
        let mut form = form();
        assert_eq!(form.handle("", &mut no_input()), Continue);
        assert_eq!(form.password.len(), 10);
    }

    #[test]
    fn length_option_reads_number() {
        let mut form = form();
        let mut prompt = Scripted {
            numbers: VecDeque::from([250]),
            ..Default::default()
        };
        assert_eq!(form.handle("1", &mut prompt), Continue);
        assert_eq!(form.settings.pass_length, MAX_LENGTH);
        form.generate();
        assert_eq!(form.password.len(), MAX_LENGTH);
    }

    #[test]
    fn closed_during_length_prompt_leaves() {
        let mut form = form();
        assert_eq!(form.handle("1", &mut no_input()), Break);
        assert_eq!(form.settings.pass_length, 10);
    }

    #[test]
    fn run_stops_when_input_is_closed() {
        let mut form = form();
        let mut prompt = no_input();
        form.run(&mut prompt);
        assert_eq!(prompt.asked, 1);
        assert!(form.password.is_empty());
    }

    #[test]
    fn run_wipes_password_on_exit() {
        let mut form = form();
        let mut prompt = Scripted::lines(&["g", "<esc>", "2", "g"]);
        form.run(&mut prompt);
        // four scripted answers, then the closed input ends the loop
        assert_eq!(prompt.asked, 5);
        assert!(!form.settings.lowercase);
        assert!(form.password.is_empty());
    }

    #[test]
    fn run_exits_on_choice() {
        let mut form = form();
        let mut prompt = Scripted::lines(&["g", "e", "g"]);
        form.run(&mut prompt);
        assert_eq!(prompt.asked, 2);
        assert!(form.password.is_empty());
    }

    #[test]
    fn no_class_keeps_previous_password() {
        let mut form = form();
        form.generate();
        let previous = form.password.clone();

        for choice in ["2", "3", "4", "5"] {
            form.handle(choice, &mut no_input());
        }
        form.handle("g", &mut no_input());

        assert_eq!(form.password, previous);
        assert_eq!(
            form.status.as_ref(),
            Some(&Status::Error(
                "at least one character type must be selected".to_string()
            ))
        );
    }

    #[test]
    fn copy_without_password_reports() {
        let mut form = form();
        form.copy();
        assert_eq!(
            form.status.as_ref(),
            Some(&Status::Error("No password generated to copy!".to_string()))
        );
    }

    #[test]
    fn seeded_forms_agree() {
        let mut a = form();
        let mut b = form();
        a.generate();
        b.generate();
        assert_eq!(a.password, b.password);
    }

    #[test]
    fn exit_and_invalid_choices() {
        let mut form = form();
        assert_eq!(form.handle("e", &mut no_input()), Break);
        assert_eq!(form.handle("q", &mut no_input()), Break);
        assert_eq!(form.handle("zz", &mut no_input()), Continue);
        assert_eq!(
            form.status.as_ref(),
            Some(&Status::Error("Invalid option.".to_string()))
        );
    }
}
