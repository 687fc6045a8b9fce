//! Character classes and alphabet building for password generation.

use super::GenerationRequest;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = r#"!@#$%^&*()_+=-{}[]\|:;"'<>,.?/"#;

/// One of the four fixed character classes offered as an inclusion option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Lowercase,
    Uppercase,
    Digits,
    Special,
}

impl Class {
    /// Alphabet order: lowercase, uppercase, digits, special.
    pub const ALL: [Class; 4] = [
        Class::Lowercase,
        Class::Uppercase,
        Class::Digits,
        Class::Special,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            Class::Lowercase => LOWERCASE,
            Class::Uppercase => UPPERCASE,
            Class::Digits => DIGITS,
            Class::Special => SPECIAL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Class::Lowercase => "Lowercase",
            Class::Uppercase => "Uppercase",
            Class::Digits => "Digits",
            Class::Special => "Special Characters",
        }
    }
}

/// Build the alphabet for a request.
pub fn build(request: &GenerationRequest) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::with_capacity(size(request));

    for class in Class::ALL {
        if request.includes(class) {
            chars.extend_from_slice(class.chars().as_bytes());
        }
    }

    chars
}

/// Alphabet size without building it (for entropy calculation).
pub fn size(request: &GenerationRequest) -> usize {
    Class::ALL
        .iter()
        .filter(|class| request.includes(**class))
        .map(|class| class.chars().len())
        .sum()
}
