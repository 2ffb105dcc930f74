//! Strong password generation with composition constraints.
//!
//! [`pass::Generator`] produces passwords that honor minimum counts per
//! character class and length bounds, drawing all randomness from
//! [`rng::SecureRng`].

pub mod pass;
pub mod rng;
