use passform::pass::charset::Class;
use passform::pass::entropy;
use passform::rng::Source;

use super::Status;
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};
use crate::terminal::{
    BOLD, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top, checkbox,
    clear, flush, print_error, print_rule, print_success,
};

pub fn enter_prompt() -> &'static str {
    "Enter option (or press Enter to generate)"
}

pub fn print_form(settings: &Settings, password: &str, source: &Source, status: Option<&Status>) {
    clear();
    box_top("Random Password Generator");
    box_line_center("Esc/CTRL+Q: cancel input | CTRL+U: clear input");
    box_line("");

    box_line(&format!("{UNDERLINE}Password{RESET}:"));
    if password.is_empty() {
        box_line("  (none generated)");
    } else {
        box_line(&format!("  {BOLD}{password}{RESET}"));
    }

    box_line("");
    box_line(&format!("{UNDERLINE}Options{RESET}:"));
    box_line(&format!(
        "  1) Length: {} ({}-{})",
        settings.pass_length, MIN_LENGTH, MAX_LENGTH
    ));
    for (n, class) in Class::ALL.iter().enumerate() {
        box_line(&format!(
            "  {}) {} {}",
            n + 2,
            checkbox(settings.includes(*class)),
            class.label()
        ));
    }

    let bits = entropy::bits(&settings.request());
    box_line("");
    box_line(&format!(
        "Entropy: {:.1} bits ({})",
        bits,
        entropy::strength(bits)
    ));
    box_line(&format!("Source: {}", source.describe()));

    box_line("");
    print_rule();
    box_line_center("g) generate  |  c) copy to clipboard  |  e) exit");
    box_bottom();

    match status {
        Some(Status::Error(msg)) => print_error(msg),
        Some(Status::Info(msg)) => print_success(msg),
        None => println!(),
    }
    flush();
}

pub fn print_help() {
    box_top("Passform");
    box_line_center("Random password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments to open the");
    box_line("     password form.");
    box_line("  2) Client: pass flags (e.g. -l 20 -n 5) to print");
    box_line("     passwords without the form.");
    box_line("");
    box_line("USAGE:");
    box_line("  passform [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_opt("  -l, --length <N>", "Characters (default: 10)");
    box_opt("  -n, --number <N>", "How many (default: 1)");
    box_opt("      --no-lower", "Exclude a-z");
    box_opt("      --no-upper", "Exclude A-Z");
    box_opt("      --no-digits", "Exclude 0-9");
    box_opt("      --no-special", "Exclude special chars");
    box_opt("      --seed <N>", "Reproducible output");
    box_opt("  -b, --board", "Copy to clipboard");
    box_opt("  -q, --quiet", "Only print passwords");
    box_opt("  -h, --help", "Display this help");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passform -l 16            One 16-char password");
    box_line("  passform -l 20 -n 3       Three 20-char passwords");
    box_line("  passform --no-special     Alphanumeric only");
    box_line("  passform -b               Copy one to clipboard");
    box_line("");
    box_line("Logging: set RUST_LOG=debug for diagnostics.");
    box_bottom();
    println!();
}
