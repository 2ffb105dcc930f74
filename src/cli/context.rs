//! CLI dispatch: flags to Config to generated output.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use strongpass::pass::{Config, Generator};

use super::{CliFlags, hex, parse, print_help, warn};

const DEFAULT_HEX_BYTES: usize = 32;

pub fn run(args: &[String]) -> Result<(), String> {
    let flags = parse(args).map_err(|e| e.to_string())?;

    if flags.help {
        print_help();
        return Ok(());
    }
    if flags.version {
        println!("strongpass {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if flags.hex {
        return run_hex(&flags);
    }

    let mut generator = Generator::new(config_from_flags(&flags)).map_err(|e| e.to_string())?;

    let count = flags.number.unwrap_or(1).max(1);
    let mut passwords = String::new();
    for _ in 0..count {
        let mut pass = generator.generate();
        passwords.push_str(&pass);
        passwords.push('\n');
        pass.zeroize();
    }

    deliver(&flags, passwords);
    Ok(())
}

fn run_hex(flags: &CliFlags) -> Result<(), String> {
    let bytes = match flags.length {
        Some(n) if n <= 0 => return Err(format!("The length must be over zero (got {})", n)),
        Some(n) => n as usize,
        None => DEFAULT_HEX_BYTES,
    };

    let count = flags.number.unwrap_or(1).max(1);
    let mut passwords = String::new();
    for _ in 0..count {
        let mut pass = hex::generate(bytes, flags.upper_hex);
        passwords.push_str(&pass);
        passwords.push('\n');
        pass.zeroize();
    }

    deliver(flags, passwords);
    Ok(())
}

/// Send generated passwords to the clipboard or stdout, zeroizing every
/// intermediate copy.
fn deliver(flags: &CliFlags, mut passwords: String) {
    if flags.clipboard {
        match ClipboardContext::new() {
            Ok(mut ctx) => match ctx.set_contents(passwords.clone()) {
                Ok(()) => {
                    // Some providers only commit on read-back.
                    if let Ok(mut echoed) = ctx.get_contents() {
                        echoed.zeroize();
                    }
                    eprintln!("*** -COPIED TO CLIPBOARD- ***");
                    passwords.zeroize();
                    return;
                }
                Err(e) => warn(&format!("Clipboard error: {}, printing instead", e)),
            },
            Err(_) => warn("Clipboard unavailable, printing instead"),
        }
    }

    print!("{}", passwords);
    passwords.zeroize();
}

fn config_from_flags(flags: &CliFlags) -> Config {
    let mut config = Config {
        char_pool: flags.charset.as_deref().unwrap_or("").chars().collect(),
        allow_lowercase: !flags.no_lower,
        allow_uppercase: !flags.no_upper,
        allow_digits: !flags.no_digits,
        allow_specials: !flags.no_special,
        ..Config::default()
    };

    if let Some(n) = flags.min_length {
        config.min_length = n;
    }
    if let Some(n) = flags.max_length {
        config.max_length = n;
    }
    if let Some(n) = flags.min_lower {
        config.min_lowercase = n;
    }
    if let Some(n) = flags.min_upper {
        config.min_uppercase = n;
    }
    if let Some(n) = flags.min_digits {
        config.min_digits = n;
    }
    if let Some(n) = flags.min_special {
        config.min_specials = n;
    }
    if let Some(n) = flags.min_shuffle {
        config.min_shuffle = n;
    }
    if let Some(n) = flags.max_shuffle {
        config.max_shuffle = n;
    }

    // --len pins both bounds, overriding --min/--max
    if let Some(n) = flags.length
        && n > 0
    {
        config.min_length = n;
        config.max_length = n;
    }

    config
}
