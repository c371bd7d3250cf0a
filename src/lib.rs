//! # shortid: short, worker-aware unique identifiers
//!
//! ```rust
//! let mut e = shortid::Encoder::with_worker_id(6)?;
//! e.set_seed(12345);
//!
//! let x = e.generate()?; // e.g., "0nbXwOU6sk"
//! let y = e.generate()?; // e.g., "0nqbXwOU6sk"
//! assert_ne!(x, y);
//! assert_eq!(e.decode(&y)?, (shortid::VERSION, 6));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! An ID is the concatenation of four variable-length fields, each written as base-16 digits,
//! least significant digit first:
//!
//! ```text
//! version | worker id | counter (omitted while zero) | seconds since REDUCE_TIME
//! ```
//!
//! Every digit is looked up in a seeded permutation of a 64-character alphabet after OR'ing two
//! random high bits into its 4-bit value. The permutation hides the digit order of the alphabet
//! and the salt makes equal fields look different, but neither makes IDs unguessable: the
//! permutation is a plain linear congruential shuffle and the fields can be recovered by anyone
//! who knows the seed.
//!
//! IDs from one [`Encoder`] are unique as long as calls are serialized and the clock does not
//! move backwards. IDs from separate processes are unique as long as each process runs with its
//! own worker id.
//!
//! ## Crate features
//!
//! Default features:
//!
//! - `global_gen` enables the process-wide [`generate`] function.
//!
//! Optional features:
//!
//! - `log` reports permutation setup and clock regressions through the `log` facade.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod alphabet;
mod encoder;
mod error;
mod global_gen;

pub use alphabet::{Alphabet, ShuffledAlphabet, DEFAULT_ALPHABET};
pub use encoder::{Adapter, DefaultRng, Encoder, RandSource, StdSystemTime, TimeSource};
pub use error::{ConfigError, DecodeError, RandError};

#[cfg(feature = "global_gen")]
pub use global_gen::generate;

/// Unix time in seconds subtracted from the clock to keep the seconds field short
/// (2015-11-24 22:18:26+00:00).
///
/// Changing this value makes new IDs collide with old ones unless [`VERSION`] is bumped along
/// with it on every generator.
pub const REDUCE_TIME: u64 = 1448403506;

/// Version of the ID layout, embedded as the first character of every ID.
///
/// Bump it whenever [`REDUCE_TIME`] or the encoding changes. Must fit in 4 bits.
pub const VERSION: u8 = 1;

/// Seed of the alphabet permutation unless another seed is configured.
pub const DEFAULT_SEED: u64 = 1;

/// Maximum worker id that fits in the 4-bit worker field.
pub const MAX_WORKER_ID: u8 = 0x0f;

const _: () = assert!(VERSION <= 0x0f, "VERSION must fit in 4 bits");
