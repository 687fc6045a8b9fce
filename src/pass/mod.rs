//! Password generation.

pub mod charset;
pub mod entropy;
mod error;
mod generate;
mod request;

pub use error::InvalidRequest;
pub use generate::{Passwords, generate, generate_batch, passwords};
pub use request::GenerationRequest;
