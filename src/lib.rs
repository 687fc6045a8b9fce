//! Random password generation from selectable character classes.
//!
//! ```
//! use passform::pass::{GenerationRequest, generate};
//! use passform::rng::Source;
//!
//! let request = GenerationRequest::new(16).special(false);
//! let password = generate(&request, &mut Source::Os.rng()).unwrap();
//! assert_eq!(password.len(), 16);
//! ```

pub mod pass;
pub mod rng;
