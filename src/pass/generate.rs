//! Password generation.

use log::debug;
use rand::Rng;

use super::{GenerationRequest, InvalidRequest, charset};

/// Generate a single password for a request, drawing from the given random source.
pub fn generate<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<String, InvalidRequest> {
    request.validate()?;
    let chars = charset::build(request);
    debug!(
        "generating password: length={}, alphabet={}",
        request.length,
        chars.len()
    );
    Ok(generate_from_charset(&chars, request.length, rng))
}

/// Generate `count` passwords sharing one validated alphabet.
pub fn generate_batch<R: Rng + ?Sized>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, InvalidRequest> {
    Ok(passwords(request, rng)?.take(count).collect())
}

/// Endless stream of passwords for one validated request.
///
/// The alphabet is built once; each `next` draws a fresh password, so callers
/// can write passwords out one at a time instead of collecting them.
pub fn passwords<'a, R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &'a mut R,
) -> Result<Passwords<'a, R>, InvalidRequest> {
    request.validate()?;
    let chars = charset::build(request);
    debug!(
        "password stream: length={}, alphabet={}",
        request.length,
        chars.len()
    );
    Ok(Passwords {
        chars,
        length: request.length,
        rng,
    })
}

pub struct Passwords<'a, R: ?Sized> {
    chars: Vec<u8>,
    length: usize,
    rng: &'a mut R,
}

impl<R: Rng + ?Sized> Iterator for Passwords<'_, R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(generate_from_charset(&self.chars, self.length, self.rng))
    }
}

/// Draw `length` characters uniformly and with replacement from a non-empty charset.
fn generate_from_charset<R: Rng + ?Sized>(chars: &[u8], length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| random_char(chars, rng))
        .collect()
}

#[inline]
fn random_char<R: Rng + ?Sized>(chars: &[u8], rng: &mut R) -> char {
    chars[rng.gen_range(0..chars.len())] as char
}
