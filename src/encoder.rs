use crate::alphabet::{Alphabet, ShuffledAlphabet};
use crate::error::{ConfigError, DecodeError, RandError};
use crate::{DEFAULT_SEED, MAX_WORKER_ID, REDUCE_TIME, VERSION};
use std::cell::OnceCell;
use std::time::{SystemTime, UNIX_EPOCH};

mod default_rng;
mod with_rand09;

pub use with_rand09::Adapter;


/// Mask selecting the two random high bits of a 6-bit lookup index.
const SALT_MASK: u8 = 0x30;

/// Represents a short ID encoder bound to a worker id and an alphabet permutation.
///
/// The encoder is not [`Sync`]; concurrent callers must serialize access (e.g., through a
/// [`std::sync::Mutex`]) or run one encoder per worker id. Calls racing on the same instance
/// could otherwise emit the same counter twice within a second.
///
/// # Examples
///
/// ```rust
/// use shortid::Encoder;
///
/// let mut e = Encoder::new();
/// e.set_seed(12345);
/// e.set_worker_id(6)?;
///
/// let x = e.generate()?;
/// assert_eq!(e.decode(&x)?, (shortid::VERSION, 6));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Encoder<R = DefaultRng, T = StdSystemTime> {
    worker_id: u8,
    counter: u64,
    prev_seconds: Option<u64>,
    seed: u64,
    alphabet: Alphabet,
    shuffled: OnceCell<ShuffledAlphabet>,
    rand_source: R,
    time_source: T,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    /// Creates an encoder with worker id 0, seed 1, the default alphabet, the operating system's
    /// random number generator, and the system clock.
    pub fn new() -> Self {
        Self::with_rand_and_time_sources(DefaultRng::default(), StdSystemTime)
    }

    /// Creates a default encoder for the specified worker id.
    pub fn with_worker_id(worker_id: u8) -> Result<Self, ConfigError> {
        let mut encoder = Self::new();
        encoder.set_worker_id(worker_id)?;
        Ok(encoder)
    }
}

impl<R: RandSource> Encoder<R> {
    /// Creates an encoder with a specified random source and the system clock.
    ///
    /// The random source supplies the high bits of every character, which are the only
    /// unpredictable part of an ID, so it should be cryptographically strong.
    pub fn with_rng(rand_source: R) -> Self {
        Self::with_rand_and_time_sources(rand_source, StdSystemTime)
    }
}

impl<R, T> Encoder<R, T> {
    /// Creates an encoder with specified random and time sources.
    pub fn with_rand_and_time_sources(rand_source: R, time_source: T) -> Self {
        Self {
            worker_id: 0,
            counter: 0,
            prev_seconds: None,
            seed: DEFAULT_SEED,
            alphabet: Alphabet::default(),
            shuffled: OnceCell::new(),
            rand_source,
            time_source,
        }
    }

    /// Sets the seed of the alphabet permutation, discarding the cached permutation.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.shuffled = OnceCell::new();
    }

    /// Sets the worker id embedded in subsequent IDs.
    ///
    /// Returns an error if `worker_id` does not fit in 4 bits.
    pub fn set_worker_id(&mut self, worker_id: u8) -> Result<(), ConfigError> {
        if worker_id > MAX_WORKER_ID {
            return Err(ConfigError::worker_id_out_of_range(worker_id));
        }
        self.worker_id = worker_id;
        Ok(())
    }

    /// Replaces the alphabet, discarding the cached permutation.
    ///
    /// Returns an error if `chars` holds fewer than 64 characters or repeats one.
    pub fn set_alphabet(&mut self, chars: &str) -> Result<(), ConfigError> {
        self.alphabet = Alphabet::new(chars)?;
        self.shuffled = OnceCell::new();
        Ok(())
    }

    /// Returns the configured worker id.
    pub fn worker_id(&self) -> u8 {
        self.worker_id
    }

    /// Returns the configured permutation seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the unshuffled alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the permuted alphabet, computing it on first use.
    pub fn shuffled_alphabet(&self) -> &ShuffledAlphabet {
        self.shuffled
            .get_or_init(|| shuffle_alphabet(&self.alphabet, self.seed))
    }

    /// Recovers the version and worker id from the first two characters of an ID.
    ///
    /// Only the low 4 bits of each character carry data, so this works for any ID generated
    /// with the same alphabet and seed. The counter and timestamp are not decoded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let mut e = shortid::Encoder::with_worker_id(15)?;
    /// let x = e.generate()?;
    /// assert_eq!(e.decode(&x)?, (shortid::VERSION, 15));
    /// assert!(e.decode("").is_err());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn decode(&self, id: &str) -> Result<(u8, u8), DecodeError> {
        let shuffled = self.shuffled_alphabet();
        let mut chars = id.chars();
        let mut fields = [0u8; 2];
        for (position, field) in fields.iter_mut().enumerate() {
            let chr = chars
                .next()
                .ok_or_else(|| DecodeError::too_short(id.chars().count()))?;
            let index = shuffled
                .position(chr)
                .ok_or(DecodeError::invalid_digit(chr, position))?;
            *field = index as u8 & 0x0f;
        }
        Ok((fields[0], fields[1]))
    }
}

impl<R: RandSource, T: TimeSource> Encoder<R, T> {
    /// Generates a new ID from the current time.
    ///
    /// Returns an error if the random source fails. The counter state is advanced regardless,
    /// so a retry never repeats the fields of a previous ID.
    pub fn generate(&mut self) -> Result<String, RandError> {
        let unix_ts_secs = self.time_source.unix_ts_secs();
        self.generate_with_ts(unix_ts_secs)
    }
}

impl<R: RandSource, T> Encoder<R, T> {
    /// Generates a new ID from a Unix timestamp in seconds.
    ///
    /// The ID consists of the digit runs of the version, the worker id, the intra-second
    /// counter (omitted while zero), and the seconds elapsed since [`REDUCE_TIME`].
    /// Timestamps before `REDUCE_TIME` are encoded as zero seconds.
    pub fn generate_with_ts(&mut self, unix_ts_secs: u64) -> Result<String, RandError> {
        let seconds = unix_ts_secs.saturating_sub(REDUCE_TIME);

        // update counter
        match self.prev_seconds {
            Some(prev) if prev == seconds => self.counter += 1,
            _prev => {
                #[cfg(feature = "log")]
                if _prev.is_some_and(|prev| seconds < prev) {
                    log::warn!("shortid: clock moved backwards; counter reset may repeat IDs");
                }
                self.counter = 0;
                self.prev_seconds = Some(seconds);
            }
        }

        let shuffled = self
            .shuffled
            .get_or_init(|| shuffle_alphabet(&self.alphabet, self.seed));
        let rng = &mut self.rand_source;

        let mut dst = String::new();
        encode_digits(VERSION as u64, shuffled, rng, &mut dst)?;
        encode_digits(self.worker_id as u64, shuffled, rng, &mut dst)?;
        if self.counter > 0 {
            encode_digits(self.counter, shuffled, rng, &mut dst)?;
        }
        encode_digits(seconds, shuffled, rng, &mut dst)?;
        Ok(dst)
    }
}

/// Appends the base-16 digits of `number` to `dst`, least significant first.
///
/// Each digit is salted with two fresh random high bits before the lookup, so equal numbers
/// rarely encode to equal strings. Zero still takes one digit.
fn encode_digits(
    number: u64,
    shuffled: &ShuffledAlphabet,
    rand_source: &mut impl RandSource,
    dst: &mut String,
) -> Result<(), RandError> {
    let mut remaining = number;
    loop {
        let salt = rand_source.next_u8()? & SALT_MASK;
        let index = (remaining & 0x0f) as u8 | salt;
        dst.push(shuffled.lookup(index as usize));
        remaining >>= 4;
        if remaining == 0 {
            return Ok(());
        }
    }
}

fn shuffle_alphabet(alphabet: &Alphabet, seed: u64) -> ShuffledAlphabet {
    #[cfg(feature = "log")]
    log::debug!("shortid: shuffling alphabet with seed {}", seed);
    alphabet.shuffle(seed)
}

/// A trait that defines the random number generator used by [`Encoder`].
pub trait RandSource {
    /// Returns the next random byte, or an error if the source is unavailable.
    fn next_u8(&mut self) -> Result<u8, RandError>;
}

/// A trait that defines the time source used by [`Encoder`].
pub trait TimeSource {
    /// Returns the current Unix timestamp in seconds.
    fn unix_ts_secs(&mut self) -> u64;
}

/// The default random source, backed by the operating system's random number generator.
///
/// Bytes are fetched in small batches to avoid a system call per character.
#[derive(Clone, Debug)]
pub struct DefaultRng {
    buffer: [u8; default_rng::BUFFER_LEN],
    cursor: usize,
}

/// The default time source that calls [`std::time::SystemTime`].
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn unix_ts_secs(&mut self) -> u64 {
        // a clock set before 1970 reads as zero and saturates like any pre-offset timestamp
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }
}
