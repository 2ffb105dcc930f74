use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "--hex" => flags.hex = true,
            "-u" | "--upper" => flags.upper_hex = true,
            "-b" | "--board" => flags.clipboard = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "--no-special" => flags.no_special = true,
            "-c" | "--charset" => flags.charset = Some(take_value(args, &mut i)?),
            "--len" => flags.length = Some(take_int(args, &mut i)?),
            "--min" => flags.min_length = Some(take_int(args, &mut i)?),
            "--max" => flags.max_length = Some(take_int(args, &mut i)?),
            "--min-lower" => flags.min_lower = Some(take_int(args, &mut i)?),
            "--min-upper" => flags.min_upper = Some(take_int(args, &mut i)?),
            "--min-digits" => flags.min_digits = Some(take_int(args, &mut i)?),
            "--min-special" => flags.min_special = Some(take_int(args, &mut i)?),
            "--min-shuffle" => flags.min_shuffle = Some(take_int(args, &mut i)?),
            "--max-shuffle" => flags.max_shuffle = Some(take_int(args, &mut i)?),
            "-n" | "--number" => {
                let value = take_value(args, &mut i)?;
                flags.number =
                    Some(value.parse().map_err(|_| ParseError::InvalidNumber(value))?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn take_value(args: &[String], i: &mut usize) -> Result<String, ParseError> {
    *i += 1;
    if *i < args.len() {
        Ok(args[*i].clone())
    } else {
        Err(ParseError::MissingValue(args[*i - 1].clone()))
    }
}

fn take_int(args: &[String], i: &mut usize) -> Result<i32, ParseError> {
    let value = take_value(args, i)?;
    value.parse().map_err(|_| ParseError::InvalidNumber(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("strongpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_composition_flags() {
        let flags = parse(&args(&[
            "--min", "12", "--max", "16", "--min-digits", "2", "--no-special",
        ]))
        .unwrap();
        assert_eq!(flags.min_length, Some(12));
        assert_eq!(flags.max_length, Some(16));
        assert_eq!(flags.min_digits, Some(2));
        assert!(flags.no_special);
    }

    #[test]
    fn parses_hex_flags() {
        let flags = parse(&args(&["--hex", "--len", "16", "-u"])).unwrap();
        assert!(flags.hex);
        assert!(flags.upper_hex);
        assert_eq!(flags.length, Some(16));
    }

    #[test]
    fn negative_values_parse_for_clamping() {
        let flags = parse(&args(&["--min-lower", "-3"])).unwrap();
        assert_eq!(flags.min_lower, Some(-3));
    }

    #[test]
    fn unknown_argument_is_an_error() {
        let err = parse(&args(&["--bogus"])).unwrap_err();
        assert_eq!(err, ParseError::UnknownArg("--bogus".to_string()));
    }

    #[test]
    fn malformed_number_is_an_error() {
        let err = parse(&args(&["--len", "abc"])).unwrap_err();
        assert_eq!(err, ParseError::InvalidNumber("abc".to_string()));
    }

    #[test]
    fn missing_value_is_an_error() {
        let err = parse(&args(&["--min"])).unwrap_err();
        assert_eq!(err, ParseError::MissingValue("--min".to_string()));
    }
}
