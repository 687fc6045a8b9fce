use std::str::FromStr;

use thiserror::Error;

use super::CliFlags;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

/// Parse command-line arguments. `args[0]` is the program name.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut args = args.iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "--no-special" => flags.no_special = true,
            "-l" | "--length" => flags.length = Some(value(arg, args.next())?),
            "-n" | "--number" => flags.number = Some(value(arg, args.next())?),
            "--seed" => flags.seed = Some(value(arg, args.next())?),
            other => return Err(ParseError::UnknownArg(other.to_string())),
        }
    }

    Ok(flags)
}

fn value<T: FromStr>(flag: &str, next: Option<&String>) -> Result<T, ParseError> {
    let raw = next.ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    raw.trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber(raw.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passform")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_values_and_switches() {
        let flags = parse(&args(&[
            "-l", "16", "-n", "3", "--no-special", "--no-digits", "-b", "-q", "--seed", "99",
        ]))
        .unwrap();
        assert_eq!(flags.length, Some(16));
        assert_eq!(flags.number, Some(3));
        assert_eq!(flags.seed, Some(99));
        assert!(flags.no_special && flags.no_digits);
        assert!(!flags.no_lower && !flags.no_upper);
        assert!(flags.clipboard && flags.quiet);
    }

    #[test]
    fn long_forms() {
        let flags = parse(&args(&["--length", "8", "--number", "2", "--help", "--version"])).unwrap();
        assert_eq!(flags.length, Some(8));
        assert_eq!(flags.number, Some(2));
        assert!(flags.help && flags.version);
    }

    #[test]
    fn no_args_is_default() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn bad_number() {
        assert_eq!(
            parse(&args(&["-l", "ten"])),
            Err(ParseError::InvalidNumber("ten".to_string()))
        );
        assert_eq!(
            parse(&args(&["-n", "-1"])),
            Err(ParseError::InvalidNumber("-1".to_string()))
        );
    }

    #[test]
    fn missing_value() {
        assert_eq!(
            parse(&args(&["-l"])),
            Err(ParseError::MissingValue("-l".to_string()))
        );
    }

    #[test]
    fn unknown_arg() {
        let err = parse(&args(&["--hex"])).unwrap_err();
        assert_eq!(err.to_string(), "Unknown argument: --hex");
    }
}
