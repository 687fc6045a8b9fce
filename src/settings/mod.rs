//! Form settings: password length and character-class selection.
//!
//! Held in memory for one session only.

use passform::pass::GenerationRequest;
use passform::pass::charset::Class;

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 100;
pub const DEFAULT_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
}

impl Settings {
    /// Set the length, clamped to the form's range.
    pub fn set_length(&mut self, length: usize) {
        self.pass_length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    }

    pub fn includes(&self, class: Class) -> bool {
        self.request().includes(class)
    }

    pub fn toggle(&mut self, class: Class) {
        let flag = match class {
            Class::Lowercase => &mut self.lowercase,
            Class::Uppercase => &mut self.uppercase,
            Class::Digits => &mut self.digits,
            Class::Special => &mut self.special,
        };
        *flag = !*flag;
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.pass_length)
            .lowercase(self.lowercase)
            .uppercase(self.uppercase)
            .digits(self.digits)
            .special(self.special)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            lowercase: true,
            uppercase: true,
            digits: true,
            special: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form() {
        let settings = Settings::default();
        assert_eq!(settings.pass_length, 10);
        assert_eq!(settings.request(), GenerationRequest::new(10));
    }

    #[test]
    fn length_is_clamped() {
        let mut settings = Settings::default();
        settings.set_length(0);
        assert_eq!(settings.pass_length, MIN_LENGTH);
        settings.set_length(250);
        assert_eq!(settings.pass_length, MAX_LENGTH);
        settings.set_length(42);
        assert_eq!(settings.pass_length, 42);
    }

    #[test]
    fn toggle_round_trips() {
        let mut settings = Settings::default();
        settings.toggle(Class::Special);
        assert!(!settings.includes(Class::Special));
        assert!(!settings.request().include_special);
        settings.toggle(Class::Special);
        assert!(settings.includes(Class::Special));
    }
}
