#![cfg(feature = "global_gen")]

use crate::{Encoder, RandError};
use std::sync::{Mutex, OnceLock};

#[cfg(unix)]
type GlobalGenInner = unix_fork_safety::ProcessLocalEncoder;

#[cfg(not(unix))]
type GlobalGenInner = Encoder;

/// Generates a new ID using the global encoder (worker id 0, seed 1, default alphabet).
///
/// This function is thread-safe; calls from multiple threads are serialized through a shared
/// state, so they never reuse a counter value within a second. On Unix, this function resets
/// the encoder state when the process ID changes (i.e., upon forks). Processes that run side by
/// side still need their own [`Encoder`] with distinct worker ids.
///
/// # Examples
///
/// ```rust
/// let x = shortid::generate()?; // e.g., "yOuqi05f6L"
///
/// assert!(regex::Regex::new(r"^[0-9a-zA-Z_-]+$").unwrap().is_match(&x));
/// # Ok::<(), shortid::RandError>(())
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn generate() -> Result<String, RandError> {
    static G: OnceLock<Mutex<GlobalGenInner>> = OnceLock::new();

    G.get_or_init(|| {
        #[cfg(feature = "log")]
        log::debug!("shortid: initialized global encoder");
        Default::default()
    })
    .lock()
    .unwrap_or_else(|err| err.into_inner())
    .generate()
}

#[cfg(unix)]
mod unix_fork_safety {
    use crate::{Encoder, RandError};
    use std::process;

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon process forks).
    #[derive(Debug)]
    pub struct ProcessLocalEncoder {
        encoder: Encoder,
        pid: u32,
    }

    impl Default for ProcessLocalEncoder {
        fn default() -> Self {
            Self {
                encoder: Default::default(),
                pid: process::id(),
            }
        }
    }

    impl ProcessLocalEncoder {
        pub fn generate(&mut self) -> Result<String, RandError> {
            let pid = process::id();
            if pid != self.pid {
                #[cfg(feature = "log")]
                log::debug!("shortid: process id changed; reset global encoder");
                self.encoder = Default::default();
                self.pid = pid;
            }
            self.encoder.generate()
        }
    }
}
