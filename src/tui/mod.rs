//! Interactive password form.

mod form;
mod input;
mod text;

pub use form::*;
pub use input::*;
pub use text::*;

use passform::rng::Source;

use crate::terminal::{print_error, reset_terminal};

/// Message shown under the form after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Error(String),
    Info(String),
}

/// Run TUI interactive mode and return the process exit code.
/// Needs a terminal on stdin and stdout.
pub fn run() -> i32 {
    let interactive = unsafe { libc::isatty(0) == 1 && libc::isatty(1) == 1 };
    if !interactive {
        print_error("The interactive form needs a terminal. Pass flags to generate (see --help).");
        return 2;
    }

    reset_terminal();
    Form::new(Source::Os).run(&mut TerminalPrompt);
    0
}
