//! Public order references.

use std::fmt::{self, Display};

use rand::{Rng, seq::SliceRandom};

const PREFIX: &str = "ORD-";
const LENGTH: usize = 10;

/// Uppercase letters and digits without the easily confused `I`, `O`, `0` and `1`.
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Opaque public identifier of an order, e.g. `ORD-7KQ2M9XH4P`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderReference(String);

impl OrderReference {
    /// Draw a fresh reference from `rng`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut reference = String::with_capacity(PREFIX.len() + LENGTH);

        reference.push_str(PREFIX);

        for _ in 0..LENGTH {
            if let Some(&byte) = ALPHABET.choose(rng) {
                reference.push(char::from(byte));
            }
        }

        Self(reference)
    }

    /// Wrap a reference read from storage or a request path without validation.
    #[must_use]
    pub fn from_string(reference: String) -> Self {
        Self(reference)
    }

    /// Whether `raw` has the shape of a generated reference.
    pub fn is_well_formed(raw: &str) -> bool {
        raw.strip_prefix(PREFIX).is_some_and(|body| {
            body.len() == LENGTH && body.bytes().all(|byte| ALPHABET.contains(&byte))
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for OrderReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OrderReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn generated_references_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let reference = OrderReference::generate(&mut rng);

            assert!(
                OrderReference::is_well_formed(reference.as_str()),
                "malformed reference {reference}"
            );
        }
    }

    #[test]
    fn generated_references_differ() {
        let mut rng = StdRng::seed_from_u64(7);

        let first = OrderReference::generate(&mut rng);
        let second = OrderReference::generate(&mut rng);

        assert_ne!(first, second);
    }

    #[test]
    fn ambiguous_characters_are_rejected() {
        assert!(!OrderReference::is_well_formed("ORD-0000000000"));
        assert!(!OrderReference::is_well_formed("ORD-ABCDEFGHJI"));
    }

    #[test]
    fn wrong_prefix_or_length_is_rejected() {
        assert!(!OrderReference::is_well_formed("ABCDEFGHJK"));
        assert!(!OrderReference::is_well_formed("ORD-ABC"));
        assert!(!OrderReference::is_well_formed("ORD-ABCDEFGHJKL"));
        assert!(OrderReference::is_well_formed("ORD-ABCDEFGHJK"));
    }
}
