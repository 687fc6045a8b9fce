//! CLI context - bundles flags, random source and clipboard state.

use std::io::{self, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use log::{debug, info, warn};
use passform::pass::{self, entropy};
use passform::rng::Source;
use zeroize::{Zeroize, Zeroizing};

use super::{CliFlags, ParseError, prompts};
use crate::tui::print_help;

/// Why a run stopped before completing normally.
#[derive(Debug, PartialEq, Eq)]
pub enum Exit {
    /// Early exit, not an error (help, version).
    Done,
    /// Exit with the given status code.
    Failed(i32),
}

pub struct Context {
    pub flags: CliFlags,
    source: Source,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;
        debug!("parsed flags: {:?}", flags);
        Ok(Self {
            source: Source::from_seed(flags.seed),
            flags,
            clipboard: None,
        })
    }

    /// Run CLI. Returns `Err(Exit::Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Exit> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Run CLI, printing passwords to `out` instead of stdout.
    pub fn run_to<W: Write>(&mut self, out: &mut W) -> Result<(), Exit> {
        self.handle_info_flags()?;
        prompts::set_quiet(self.flags.quiet);
        self.handle_clipboard()?;
        self.generate_output(out)
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            print_help();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("passform {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    fn handle_clipboard(&mut self) -> Result<(), Exit> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                Ok(())
            }
            Err(e) => {
                warn!("clipboard unavailable: {e}");
                if prompts::clipboard_fallback_prompt() {
                    Ok(())
                } else {
                    Err(Exit::Done)
                }
            }
        }
    }

    /// Generate passwords and print or copy them.
    ///
    /// The request is validated before anything is written. Printed passwords
    /// are streamed one at a time and wiped after each write.
    fn generate_output<W: Write>(&mut self, out: &mut W) -> Result<(), Exit> {
        let request = self.flags.request();
        let count = self.flags.count();
        let mut rng = self.source.rng();

        let passwords = pass::passwords(&request, &mut rng).map_err(|e| {
            prompts::error(&e.to_string());
            Exit::Failed(2)
        })?;

        if self.source.is_reproducible() {
            prompts::warn("Warning: fixed seed in use, output is reproducible.");
        }
        let bits = entropy::bits(&request);
        prompts::summary(bits, entropy::strength(bits), &self.source.describe());

        match self.clipboard.as_mut() {
            Some(ctx) => {
                let joined = join_lines(passwords.take(count));
                let copied = ctx.set_contents(joined.as_str().to_owned());
                drop(joined);
                match copied {
                    Ok(()) => {
                        info!("{count} password(s) copied to clipboard");
                        prompts::clipboard_copied(count);
                        Ok(())
                    }
                    Err(e) => {
                        prompts::clipboard_error(&e.to_string());
                        Err(Exit::Failed(1))
                    }
                }
            }
            None => write_lines(out, passwords.take(count)),
        }
    }
}

/// Write each password on its own line, wiping it once written.
fn write_lines<W: Write>(out: &mut W, passwords: impl Iterator<Item = String>) -> Result<(), Exit> {
    for mut password in passwords {
        let written = writeln!(out, "{password}");
        password.zeroize();
        match written {
            Ok(()) => {}
            // reader went away (`| head`)
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
            Err(e) => {
                prompts::error(&format!("Failed to write output: {e}"));
                return Err(Exit::Failed(1));
            }
        }
    }
    out.flush().map_err(|_| Exit::Failed(1))
}

/// Newline-joined clipboard text with no trailing newline. Each password is
/// wiped after it is appended; the joined text is wiped on drop.
fn join_lines(passwords: impl Iterator<Item = String>) -> Zeroizing<String> {
    let mut joined = Zeroizing::new(String::new());
    for mut password in passwords {
        if !joined.is_empty() {
            joined.push('\n');
        }
        joined.push_str(&password);
        password.zeroize();
    }
    joined
}
