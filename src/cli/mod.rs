//! Command-line front end.

mod context;
mod flags;
mod hex;
mod parse;

pub use context::run;
pub use flags::CliFlags;
pub use parse::parse;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow).
pub fn warn(msg: &str) {
    eprintln!("{YELLOW}{msg}{RESET}");
}

/// Print an error message to stderr (red).
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn print_help() {
    println!(
        "strongpass {} - strong password generator

USAGE:
    strongpass [OPTIONS]

OPTIONS:
    -h, --help              Show this help
    -v, --version           Show version
    -n, --number <n>        Number of passwords to generate (default 1)
    -b, --board             Copy output to the clipboard instead of printing
    -c, --charset <chars>   Custom character pool (replaces class pools)
        --no-lower          Exclude lower-case letters from the pool
        --no-upper          Exclude upper-case letters from the pool
        --no-digits         Exclude digits from the pool
        --no-special        Exclude special symbols from the pool
        --len <n>           Exact password length (overrides --min/--max)
        --min <n>           Minimum password length (default 20)
        --max <n>           Maximum password length (default 26)
        --min-lower <n>     Minimum lower-case letters (default 1)
        --min-upper <n>     Minimum upper-case letters (default 1)
        --min-digits <n>    Minimum digits (default 1)
        --min-special <n>   Minimum special symbols (default 1)
        --min-shuffle <n>   Minimum shuffle passes (default 4)
        --max-shuffle <n>   Maximum shuffle passes (default 10)
        --hex               Hex mode: --len random bytes as hex (default 32)
    -u, --upper             Hex mode: upper-case the output",
        env!("CARGO_PKG_VERSION")
    );
}
