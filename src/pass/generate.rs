//! Password composition: validated configuration plus generation.

use std::fmt;

use rand::TryRngCore;
use rand::rngs::OsRng;

use super::charset;
use crate::rng::SecureRng;

/// Password generator configuration.
///
/// Fields are plain integers so out-of-range values can be supplied and
/// repaired by [`Config::normalized`] rather than rejected at the type level.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Explicit character pool. When empty, the pool is derived from the
    /// `allow_*` class flags instead.
    pub char_pool: Vec<char>,

    pub allow_lowercase: bool,
    pub allow_uppercase: bool,
    pub allow_digits: bool,
    pub allow_specials: bool,

    pub min_length: i32,
    pub max_length: i32,
    pub min_lowercase: i32,
    pub min_uppercase: i32,
    pub min_digits: i32,
    pub min_specials: i32,

    pub min_shuffle: i32,
    pub max_shuffle: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            char_pool: Vec::new(),
            allow_lowercase: true,
            allow_uppercase: true,
            allow_digits: true,
            allow_specials: true,
            min_length: 20,
            max_length: 26,
            min_lowercase: 1,
            min_uppercase: 1,
            min_digits: 1,
            min_specials: 1,
            min_shuffle: 4,
            max_shuffle: 10,
        }
    }
}

impl Config {
    /// Validate and repair the configuration.
    ///
    /// Out-of-range but sensible values are clamped silently; unusable ones
    /// are errors. The result is stable: normalizing an already-normalized
    /// configuration changes nothing.
    pub fn normalized(mut self) -> Result<Self, ConfigError> {
        if self.min_length <= 0 {
            return Err(ConfigError::NonPositiveMinLength(self.min_length));
        }

        self.min_lowercase = self.min_lowercase.max(0);
        self.min_uppercase = self.min_uppercase.max(0);
        self.min_digits = self.min_digits.max(0);
        self.min_specials = self.min_specials.max(0);

        // Zero shuffles would leak which class each position came from.
        self.min_shuffle = self.min_shuffle.max(1);
        self.max_shuffle = self.max_shuffle.max(self.min_shuffle);

        // Never truncate required characters: grow the length bounds to fit.
        let required = self.min_lowercase + self.min_uppercase + self.min_digits + self.min_specials;
        self.min_length = self.min_length.max(required);
        self.max_length = self.max_length.max(self.min_length);

        Ok(self)
    }
}

/// Rejected configuration. Clamping handles everything repairable, so only
/// genuinely unusable configurations end up here.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    NonPositiveMinLength(i32),
    EmptyCharPool,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveMinLength(n) => {
                write!(f, "minimum password length must be positive (got {})", n)
            }
            ConfigError::EmptyCharPool => {
                write!(
                    f,
                    "no characters available: every character class is disabled and no custom pool was supplied"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Password generator built from a normalized [`Config`].
///
/// All invariants are established at construction; [`Generator::generate`]
/// cannot fail afterwards. Owns its random source, which is injectable for
/// deterministic tests.
pub struct Generator<R: TryRngCore = OsRng> {
    rng: SecureRng<R>,
    pool: Vec<char>,
    lowercase: Vec<char>,
    uppercase: Vec<char>,
    digits: Vec<char>,
    specials: Vec<char>,
    min_length: usize,
    max_length: usize,
    min_lowercase: usize,
    min_uppercase: usize,
    min_digits: usize,
    min_specials: usize,
    min_shuffle: usize,
    max_shuffle: usize,
}

impl Generator {
    /// Build a generator backed by the operating system CSPRNG.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_rng(config, SecureRng::new())
    }
}

impl<R: TryRngCore> Generator<R> {
    /// Build a generator with an explicit random source.
    pub fn with_rng(config: Config, mut rng: SecureRng<R>) -> Result<Self, ConfigError> {
        let config = config.normalized()?;

        let mut pool: Vec<char> = if config.char_pool.is_empty() {
            let mut pool = Vec::new();
            if config.allow_lowercase {
                pool.extend(charset::LOWERCASE.chars());
            }
            if config.allow_uppercase {
                pool.extend(charset::UPPERCASE.chars());
            }
            if config.allow_digits {
                pool.extend(charset::DIGITS.chars());
            }
            if config.allow_specials {
                pool.extend(charset::SPECIALS.chars());
            }
            pool
        } else {
            config.char_pool.clone()
        };

        if pool.is_empty() {
            return Err(ConfigError::EmptyCharPool);
        }

        let min_shuffle = config.min_shuffle as usize;
        let max_shuffle = config.max_shuffle as usize;

        // Cosmetic scramble of the pool ordering; final passwords are
        // shuffled again per call.
        let passes = min_shuffle + rng.int_n(max_shuffle - min_shuffle + 1);
        for _ in 0..passes {
            rng.shuffle_slice(&mut pool);
        }

        Ok(Self {
            rng,
            pool,
            lowercase: charset::chars(charset::LOWERCASE),
            uppercase: charset::chars(charset::UPPERCASE),
            digits: charset::chars(charset::DIGITS),
            specials: charset::chars(charset::SPECIALS),
            min_length: config.min_length as usize,
            max_length: config.max_length as usize,
            min_lowercase: config.min_lowercase as usize,
            min_uppercase: config.min_uppercase as usize,
            min_digits: config.min_digits as usize,
            min_specials: config.min_specials as usize,
            min_shuffle,
            max_shuffle,
        })
    }

    /// Generate one password.
    ///
    /// Class minima are satisfied first, the remaining length is filled from
    /// the effective pool, and the assembled sequence is run through several
    /// full shuffle passes so the final ordering carries no trace of that
    /// construction order.
    pub fn generate(&mut self) -> String {
        let span = self.max_length - self.min_length;
        let length = self.min_length + self.rng.int_n(span + 1);

        let mut chars: Vec<char> = Vec::with_capacity(length);
        append_random(&mut self.rng, &mut chars, self.min_lowercase, &self.lowercase);
        append_random(&mut self.rng, &mut chars, self.min_uppercase, &self.uppercase);
        append_random(&mut self.rng, &mut chars, self.min_digits, &self.digits);
        append_random(&mut self.rng, &mut chars, self.min_specials, &self.specials);

        let remaining = length.saturating_sub(chars.len());
        append_random(&mut self.rng, &mut chars, remaining, &self.pool);

        let passes = self.min_shuffle + self.rng.int_n(self.max_shuffle - self.min_shuffle + 1);
        for _ in 0..passes {
            self.rng.shuffle_slice(&mut chars);
        }

        chars.into_iter().collect()
    }
}

fn append_random<R: TryRngCore>(
    rng: &mut SecureRng<R>,
    buf: &mut Vec<char>,
    count: usize,
    alphabet: &[char],
) {
    if alphabet.is_empty() {
        return;
    }
    for _ in 0..count {
        buf.push(alphabet[rng.int_n(alphabet.len())]);
    }
}
