use crate::alphabet::ALPHABET_LEN;
use crate::MAX_WORKER_ID;
use std::{error, fmt};

/// An error rejecting an invalid encoder configuration.
#[derive(Clone, Debug)]
pub struct ConfigError {
    kind: ConfigErrorKind,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) enum ConfigErrorKind {
    WorkerIdOutOfRange { worker_id: u8 },
    AlphabetTooShort { n_chars: usize },
    DuplicateChar { chr: char, position: usize },
}

impl ConfigError {
    /// Creates a `WorkerIdOutOfRange` variant.
    pub(crate) const fn worker_id_out_of_range(worker_id: u8) -> Self {
        Self {
            kind: ConfigErrorKind::WorkerIdOutOfRange { worker_id },
        }
    }

    /// Creates an `AlphabetTooShort` variant from the number of characters supplied.
    pub(crate) const fn alphabet_too_short(n_chars: usize) -> Self {
        Self {
            kind: ConfigErrorKind::AlphabetTooShort { n_chars },
        }
    }

    /// Creates a `DuplicateChar` variant from the repeated character and its second position.
    pub(crate) const fn duplicate_char(chr: char, position: usize) -> Self {
        Self {
            kind: ConfigErrorKind::DuplicateChar { chr, position },
        }
    }

    #[cfg(test)]
    pub(crate) fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid shortid configuration: ")?;
        match self.kind {
            ConfigErrorKind::WorkerIdOutOfRange { worker_id } => {
                write!(
                    f,
                    "worker id {} out of range (expected 0..={})",
                    worker_id, MAX_WORKER_ID
                )
            }
            ConfigErrorKind::AlphabetTooShort { n_chars } => {
                write!(
                    f,
                    "alphabet has {} characters (expected at least {})",
                    n_chars, ALPHABET_LEN
                )
            }
            ConfigErrorKind::DuplicateChar { chr, position } => {
                write!(
                    f,
                    "duplicate character '{}' at {}",
                    chr.escape_debug(),
                    position
                )
            }
        }
    }
}

impl error::Error for ConfigError {}

/// An error reporting that the random source could not supply bytes.
#[derive(Debug)]
pub struct RandError {
    source: Box<dyn error::Error + Send + Sync + 'static>,
}

impl RandError {
    /// Wraps the error returned by a failing random source.
    pub fn new<E>(source: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync + 'static>>,
    {
        Self {
            source: source.into(),
        }
    }
}

impl fmt::Display for RandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not read from random source: {}", self.source)
    }
}

impl error::Error for RandError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// An error decoding the leading fields of an identifier.
#[derive(Clone, Debug)]
pub struct DecodeError {
    kind: DecodeErrorKind,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) enum DecodeErrorKind {
    TooShort { n_chars: usize },
    InvalidDigit { chr: char, position: usize },
}

impl DecodeError {
    /// Creates a `TooShort` variant from the number of characters supplied.
    pub(crate) const fn too_short(n_chars: usize) -> Self {
        Self {
            kind: DecodeErrorKind::TooShort { n_chars },
        }
    }

    /// Creates an `InvalidDigit` variant from the unknown character and its position.
    pub(crate) const fn invalid_digit(chr: char, position: usize) -> Self {
        Self {
            kind: DecodeErrorKind::InvalidDigit { chr, position },
        }
    }

    #[cfg(test)]
    pub(crate) fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not decode shortid: ")?;
        match self.kind {
            DecodeErrorKind::TooShort { n_chars } => {
                write!(f, "too short: {} characters (expected at least 2)", n_chars)
            }
            DecodeErrorKind::InvalidDigit { chr, position } => {
                write!(f, "invalid digit '{}' at {}", chr.escape_debug(), position)
            }
        }
    }
}

impl error::Error for DecodeError {}
