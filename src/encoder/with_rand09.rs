//! Integration with `rand` (v0.9) crate.

use super::{Encoder, RandSource};
use crate::error::RandError;
use rand09::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn next_u8(&mut self) -> Result<u8, RandError> {
        Ok(self.0.next_u32() as u8)
    }
}

impl<T: RngCore> Encoder<Adapter<T>> {
    /// Creates an encoder with a specified random number generator that implements [`RngCore`]
    /// from `rand` (v0.9) crate. The specified random number generator should be
    /// cryptographically strong and securely seeded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand09::{rngs::StdRng, SeedableRng as _};
    /// use shortid::Encoder;
    ///
    /// let mut e = Encoder::with_rand09(StdRng::from_os_rng());
    /// println!("{}", e.generate()?);
    /// # Ok::<(), shortid::RandError>(())
    /// ```
    pub fn with_rand09(rng: T) -> Self {
        Self::with_rng(Adapter(rng))
    }
}
