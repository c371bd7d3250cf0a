use crate::error::ConfigError;
use std::fmt::{self, Write as _};

/// Characters used for encoding unless another alphabet is configured.
pub const DEFAULT_ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_-";

/// Number of symbols addressable by a 6-bit lookup index.
pub(crate) const ALPHABET_LEN: usize = 64;

/// Modulus of the seeded shuffle generator.
const LCG_MODULUS: u64 = 233280;

/// An ordered set of at least 64 distinct characters, before shuffling.
///
/// # Examples
///
/// ```rust
/// use shortid::Alphabet;
///
/// assert!(Alphabet::new("0123456789").is_err());
/// assert_eq!(Alphabet::default().len(), 64);
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Alphabet(Vec<char>);

impl Default for Alphabet {
    fn default() -> Self {
        Self(DEFAULT_ALPHABET.chars().collect())
    }
}

impl Alphabet {
    /// Creates an alphabet from a string of distinct characters.
    ///
    /// Returns an error if the string holds fewer than 64 characters or repeats a character.
    pub fn new(chars: &str) -> Result<Self, ConfigError> {
        let chars: Vec<char> = chars.chars().collect();
        if chars.len() < ALPHABET_LEN {
            return Err(ConfigError::alphabet_too_short(chars.len()));
        }
        for (position, chr) in chars.iter().enumerate() {
            if chars[..position].contains(chr) {
                return Err(ConfigError::duplicate_char(*chr, position));
            }
        }
        Ok(Self(chars))
    }

    /// Returns the characters in their configured order.
    pub fn as_chars(&self) -> &[char] {
        &self.0
    }

    /// Returns the number of characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the alphabet holds no characters, which a validated alphabet never does.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Permutes the alphabet with a linear congruential generator seeded by `seed`.
    ///
    /// The permutation depends on nothing but the seed and the alphabet, so processes sharing
    /// both agree on it. The generator is trivially predictable; it only scrambles the symbol
    /// order and adds no secrecy to the identifiers.
    pub fn shuffle(&self, seed: u64) -> ShuffledAlphabet {
        let mut lcg = Lcg::new(seed);
        let mut source = self.0.clone();
        let mut target = Vec::with_capacity(source.len());

        // the first draw is skipped to keep permutations compatible with existing identifiers
        lcg.next_value();

        while !source.is_empty() {
            let index = (lcg.next_value() * source.len() as f64).floor() as usize;
            target.push(source.remove(index));
        }
        ShuffledAlphabet(target)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| f.write_char(*c))
    }
}

/// A seeded permutation of an [`Alphabet`], used as the digit lookup table.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ShuffledAlphabet(Vec<char>);

impl ShuffledAlphabet {
    /// Returns the symbol for a 6-bit lookup index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 64 or greater.
    pub(crate) fn lookup(&self, index: usize) -> char {
        assert!(index < ALPHABET_LEN, "lookup index out of 6-bit range");
        self.0[index]
    }

    /// Returns the lookup index of `chr`, or `None` if no 6-bit index maps to it.
    pub(crate) fn position(&self, chr: char) -> Option<usize> {
        self.0[..ALPHABET_LEN].iter().position(|c| *c == chr)
    }

    /// Returns the permuted characters.
    pub fn as_chars(&self) -> &[char] {
        &self.0
    }
}

impl fmt::Display for ShuffledAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| f.write_char(*c))
    }
}

/// Seeded generator after The Central Randomizer 1.3 by Paul Houle.
struct Lcg(u64);

impl Lcg {
    const fn new(seed: u64) -> Self {
        // reducing up front keeps the recurrence in range for any seed without changing its output
        Self(seed % LCG_MODULUS)
    }

    /// Advances the state and returns a value in `[0, 1)`.
    fn next_value(&mut self) -> f64 {
        self.0 = (self.0 * 9301 + 49297) % LCG_MODULUS;
        self.0 as f64 / LCG_MODULUS as f64
    }
}
