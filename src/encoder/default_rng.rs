use rand09::{rngs::OsRng, TryRngCore as _};

use super::{DefaultRng, RandSource};
use crate::error::RandError;

pub(super) const BUFFER_LEN: usize = 32;

impl RandSource for DefaultRng {
    fn next_u8(&mut self) -> Result<u8, RandError> {
        if self.cursor == BUFFER_LEN {
            OsRng
                .try_fill_bytes(&mut self.buffer)
                .map_err(RandError::new)?;
            self.cursor = 0;
        }
        let byte = self.buffer[self.cursor];
        self.cursor += 1;
        Ok(byte)
    }
}

impl Default for DefaultRng {
    /// Creates an instance of the default random source.
    ///
    /// The buffer starts out drained, so the first byte request reaches the operating system and
    /// reports its failure, if any.
    fn default() -> Self {
        Self {
            buffer: [0; BUFFER_LEN],
            cursor: BUFFER_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DefaultRng, RandSource};

    /// Generates unbiased salt bits
    ///
    /// This test may fail at a very low probability.
    #[test]
    fn generates_unbiased_salt_bits() {
        let mut rng = DefaultRng::default();

        // test if each bit is set to 1 at ~50% probability
        let mut counts = [0u32; 8];

        const N_LOOPS: usize = 200_000;
        for _ in 0..N_LOOPS {
            let mut x = rng.next_u8().unwrap();
            for e in counts.iter_mut().rev() {
                *e += (x & 1) as u32;
                x >>= 1;
            }
        }

        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_LOOPS as f64).sqrt();
        assert!(counts
            .iter()
            .all(|e| (*e as f64 / N_LOOPS as f64 - 0.5).abs() < margin));
    }

    /// Refills the buffer once drained
    #[test]
    fn refills_the_buffer_once_drained() {
        let mut rng = DefaultRng::default();
        let first: Vec<u8> = (0..super::BUFFER_LEN)
            .map(|_| rng.next_u8().unwrap())
            .collect();
        let second: Vec<u8> = (0..super::BUFFER_LEN)
            .map(|_| rng.next_u8().unwrap())
            .collect();
        assert_ne!(first, second);
    }
}
