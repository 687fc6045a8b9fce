//! Generation parameters.

use super::InvalidRequest;
use super::charset::Class;

/// Length plus the four character-class inclusion flags for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
}

impl GenerationRequest {
    /// Request with every character class selected.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            include_lowercase: true,
            include_uppercase: true,
            include_digits: true,
            include_special: true,
        }
    }

    pub fn lowercase(mut self, include: bool) -> Self {
        self.include_lowercase = include;
        self
    }

    pub fn uppercase(mut self, include: bool) -> Self {
        self.include_uppercase = include;
        self
    }

    pub fn digits(mut self, include: bool) -> Self {
        self.include_digits = include;
        self
    }

    pub fn special(mut self, include: bool) -> Self {
        self.include_special = include;
        self
    }

    pub fn includes(&self, class: Class) -> bool {
        match class {
            Class::Lowercase => self.include_lowercase,
            Class::Uppercase => self.include_uppercase,
            Class::Digits => self.include_digits,
            Class::Special => self.include_special,
        }
    }

    pub fn set(&mut self, class: Class, include: bool) {
        match class {
            Class::Lowercase => self.include_lowercase = include,
            Class::Uppercase => self.include_uppercase = include,
            Class::Digits => self.include_digits = include,
            Class::Special => self.include_special = include,
        }
    }

    pub fn any_class(&self) -> bool {
        Class::ALL.iter().any(|class| self.includes(*class))
    }

    /// Check the request invariants: a class is selected and length is at least 1.
    pub fn validate(&self) -> Result<(), InvalidRequest> {
        if !self.any_class() {
            return Err(InvalidRequest::no_character_types());
        }
        if self.length == 0 {
            return Err(InvalidRequest::zero_length());
        }
        Ok(())
    }
}
