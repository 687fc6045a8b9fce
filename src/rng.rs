//! Random sources handed to the password generator.
//!
//! Nothing here is global: callers build an RNG from a [`Source`] and pass it
//! into [`crate::pass::generate`] by mutable reference.

use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Source {
    /// `StdRng` seeded from the operating system.
    #[default]
    Os,
    /// `StdRng` seeded from a fixed value. Output is reproducible.
    Seeded(u64),
}

impl Source {
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Source::Os, Source::Seeded)
    }

    pub fn rng(&self) -> StdRng {
        match *self {
            Source::Os => StdRng::from_entropy(),
            Source::Seeded(seed) => StdRng::seed_from_u64(seed),
        }
    }

    pub fn is_reproducible(&self) -> bool {
        matches!(self, Source::Seeded(_))
    }

    pub fn describe(&self) -> String {
        match self {
            Source::Os => "OS entropy (StdRng)".to_string(),
            Source::Seeded(seed) => format!("fixed seed {seed} (reproducible)"),
        }
    }
}
