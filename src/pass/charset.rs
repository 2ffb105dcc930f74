//! Fixed character-class alphabets.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SPECIALS: &str = "§½!#¤%&/()[]{}=?+-*\\£$~^.,:;_<>|@";

pub fn is_lowercase(c: char) -> bool {
    LOWERCASE.contains(c)
}

pub fn is_uppercase(c: char) -> bool {
    UPPERCASE.contains(c)
}

pub fn is_digit(c: char) -> bool {
    DIGITS.contains(c)
}

pub fn is_special(c: char) -> bool {
    SPECIALS.contains(c)
}

/// Class alphabet as an indexable sequence for uniform sampling.
pub fn chars(class: &str) -> Vec<char> {
    class.chars().collect()
}
