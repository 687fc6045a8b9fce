use passform::pass::GenerationRequest;

use crate::settings::Settings;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub clipboard: bool,
    pub quiet: bool,
    pub no_lower: bool,
    pub no_upper: bool,
    pub no_digits: bool,
    pub no_special: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
}

impl CliFlags {
    /// Form defaults overridden by the given flags. Length is not clamped here.
    pub fn request(&self) -> GenerationRequest {
        let defaults = Settings::default();
        GenerationRequest::new(self.length.unwrap_or(defaults.pass_length))
            .lowercase(defaults.lowercase && !self.no_lower)
            .uppercase(defaults.uppercase && !self.no_upper)
            .digits(defaults.digits && !self.no_digits)
            .special(defaults.special && !self.no_special)
    }

    pub fn count(&self) -> usize {
        self.number.unwrap_or(1)
    }
}
