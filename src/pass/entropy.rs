//! Entropy estimate for a generation request.

use super::{GenerationRequest, charset};

/// Password entropy in bits: `length * log2(alphabet size)`.
pub fn bits(request: &GenerationRequest) -> f64 {
    let alphabet = charset::size(request);
    if alphabet == 0 {
        return 0.0;
    }
    request.length as f64 * (alphabet as f64).log2()
}

pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_bits() {
        let request = GenerationRequest::new(10)
            .lowercase(false)
            .uppercase(false)
            .special(false);
        let expected = 10.0 * 10f64.log2();
        assert!((bits(&request) - expected).abs() < 1e-9);
    }

    #[test]
    fn empty_alphabet_has_no_entropy() {
        let request = GenerationRequest::new(10)
            .lowercase(false)
            .uppercase(false)
            .digits(false)
            .special(false);
        assert_eq!(bits(&request), 0.0);
    }

    #[test]
    fn strength_buckets() {
        assert_eq!(strength(0.0), "Weak");
        assert_eq!(strength(35.9), "Weak");
        assert_eq!(strength(36.0), "Fair");
        assert_eq!(strength(65.5), "Strong");
        assert_eq!(strength(128.0), "Very Strong");
    }

    #[test]
    fn default_form_request_is_strong() {
        // 10 chars over 92 symbols
        let bits = bits(&GenerationRequest::new(10));
        assert!(bits > 65.0 && bits < 66.0);
        assert_eq!(strength(bits), "Strong");
    }
}
