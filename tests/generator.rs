//! End-to-end properties of the password generator.

use std::collections::HashSet;

use strongpass::pass::{Config, ConfigError, Generator, charset};

#[test]
fn length_stays_within_bounds() {
    let config = Config {
        min_length: 12,
        max_length: 20,
        ..Config::default()
    };
    let mut generator = Generator::new(config).unwrap();
    for _ in 0..200 {
        let pass = generator.generate();
        let len = pass.chars().count();
        assert!((12..=20).contains(&len), "length {} out of bounds", len);
    }
}

#[test]
fn class_minima_are_honored() {
    let config = Config {
        min_length: 16,
        max_length: 16,
        min_lowercase: 2,
        min_uppercase: 3,
        min_digits: 4,
        min_specials: 1,
        ..Config::default()
    };
    let mut generator = Generator::new(config).unwrap();
    for _ in 0..100 {
        let pass = generator.generate();
        assert!(pass.chars().filter(|&c| charset::is_lowercase(c)).count() >= 2);
        assert!(pass.chars().filter(|&c| charset::is_uppercase(c)).count() >= 3);
        assert!(pass.chars().filter(|&c| charset::is_digit(c)).count() >= 4);
        assert!(pass.chars().filter(|&c| charset::is_special(c)).count() >= 1);
    }
}

#[test]
fn lowercase_only_fixed_length() {
    let config = Config {
        allow_lowercase: true,
        allow_uppercase: false,
        allow_digits: false,
        allow_specials: false,
        min_length: 10,
        max_length: 10,
        min_lowercase: 0,
        min_uppercase: 0,
        min_digits: 0,
        min_specials: 0,
        min_shuffle: 1,
        max_shuffle: 1,
        ..Config::default()
    };
    let mut generator = Generator::new(config).unwrap();
    for _ in 0..50 {
        let pass = generator.generate();
        assert_eq!(pass.chars().count(), 10);
        assert!(pass.chars().all(charset::is_lowercase));
    }
}

#[test]
fn one_of_each_class_at_length_four() {
    let config = Config {
        min_length: 4,
        max_length: 4,
        min_lowercase: 1,
        min_uppercase: 1,
        min_digits: 1,
        min_specials: 1,
        ..Config::default()
    };
    let mut generator = Generator::new(config).unwrap();
    for _ in 0..100 {
        let pass = generator.generate();
        assert_eq!(pass.chars().count(), 4);
        assert_eq!(pass.chars().filter(|&c| charset::is_lowercase(c)).count(), 1);
        assert_eq!(pass.chars().filter(|&c| charset::is_uppercase(c)).count(), 1);
        assert_eq!(pass.chars().filter(|&c| charset::is_digit(c)).count(), 1);
        assert_eq!(pass.chars().filter(|&c| charset::is_special(c)).count(), 1);
    }
}

#[test]
fn custom_pool_is_the_only_source() {
    let pool: Vec<char> = "abc123".chars().collect();
    let config = Config {
        char_pool: pool.clone(),
        min_length: 24,
        max_length: 24,
        min_lowercase: 0,
        min_uppercase: 0,
        min_digits: 0,
        min_specials: 0,
        ..Config::default()
    };
    let allowed: HashSet<char> = pool.into_iter().collect();
    let mut generator = Generator::new(config).unwrap();
    for _ in 0..50 {
        let pass = generator.generate();
        assert!(pass.chars().all(|c| allowed.contains(&c)));
    }
}

#[test]
fn minima_above_requested_length_grow_the_password() {
    // 3+3+3+3 = 12 required, caller asked for 5..6
    let config = Config {
        min_length: 5,
        max_length: 6,
        min_lowercase: 3,
        min_uppercase: 3,
        min_digits: 3,
        min_specials: 3,
        ..Config::default()
    };
    let mut generator = Generator::new(config).unwrap();
    for _ in 0..50 {
        assert_eq!(generator.generate().chars().count(), 12);
    }
}

#[test]
fn shuffling_erases_construction_order() {
    // Without shuffling, the two forced lowercase characters would always
    // occupy positions 0 and 1.
    let config = Config {
        allow_lowercase: true,
        allow_uppercase: false,
        allow_digits: true,
        allow_specials: false,
        min_length: 4,
        max_length: 4,
        min_lowercase: 2,
        min_uppercase: 0,
        min_digits: 2,
        min_specials: 0,
        ..Config::default()
    };
    let mut generator = Generator::new(config).unwrap();
    let leading_digit = (0..200).any(|_| {
        generator
            .generate()
            .chars()
            .next()
            .is_some_and(charset::is_digit)
    });
    assert!(leading_digit, "first position never left the first class");
}

#[test]
fn disabled_class_with_minimum_is_still_forced() {
    // Digits are excluded from the fill pool, but the minimum still applies.
    let config = Config {
        allow_lowercase: true,
        allow_uppercase: false,
        allow_digits: false,
        allow_specials: false,
        min_length: 12,
        max_length: 12,
        min_lowercase: 0,
        min_uppercase: 0,
        min_digits: 2,
        min_specials: 0,
        ..Config::default()
    };
    let mut generator = Generator::new(config).unwrap();
    for _ in 0..50 {
        let pass = generator.generate();
        assert_eq!(pass.chars().filter(|&c| charset::is_digit(c)).count(), 2);
        assert!(
            pass.chars()
                .all(|c| charset::is_lowercase(c) || charset::is_digit(c))
        );
    }
}

#[test]
fn construction_fails_before_generation() {
    let config = Config {
        min_length: 0,
        ..Config::default()
    };
    assert!(matches!(
        Generator::new(config),
        Err(ConfigError::NonPositiveMinLength(0))
    ));

    let config = Config {
        allow_lowercase: false,
        allow_uppercase: false,
        allow_digits: false,
        allow_specials: false,
        ..Config::default()
    };
    assert!(matches!(
        Generator::new(config),
        Err(ConfigError::EmptyCharPool)
    ));
}

#[test]
fn generations_are_independent() {
    let mut generator = Generator::new(Config::default()).unwrap();
    let a = generator.generate();
    let b = generator.generate();
    // 20+ characters over a 95-character pool, collision is unreal
    assert_ne!(a, b);
}
