//! One-shot command-line mode.

mod context;
mod flags;
mod parse;
mod prompts;

pub use context::{Context, Exit};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run CLI mode and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::usage_hint();
            return 2;
        }
    };

    match ctx.run() {
        Ok(()) | Err(Exit::Done) => 0,
        Err(Exit::Failed(code)) => code,
    }
}
