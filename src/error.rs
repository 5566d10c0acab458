// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use alloc::boxed::Box;
use alloc::string::String;
use displaydoc::Display;

/// An error produced by caller-supplied locale values or compare arguments
/// while they are being coerced. It is propagated back out verbatim.
pub type HostError = Box<dyn core::error::Error + Send + Sync>;

/// The class of an error, mirroring which exception a host environment
/// would surface it as.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A malformed value, such as an invalid language tag.
    Range,
    /// A value of the wrong type, such as a non-string locale entry.
    Type,
    /// An error raised by a caller-supplied value; see [`HostError`].
    Host,
}

/// List of errors produced while constructing or using a
/// [`Collator`](crate::Collator).
#[derive(Display, Debug)]
#[non_exhaustive]
pub enum CollatorError {
    /// invalid language tag: {tag}
    InvalidLanguageTag {
        /// The offending tag, exactly as the caller supplied it.
        tag: String,
    },
    /// locale value must be a string or object
    LocaleValueNotStringOrObject,
    /// {method} called on value that's not an object initialized as a Collator
    UninitializedCollator {
        /// The method that was invoked on the foreign receiver.
        method: &'static str,
    },
    /// {0}
    Host(HostError),
}

impl core::error::Error for CollatorError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Host(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

impl CollatorError {
    /// The class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLanguageTag { .. } => ErrorKind::Range,
            Self::LocaleValueNotStringOrObject | Self::UninitializedCollator { .. } => {
                ErrorKind::Type
            }
            Self::Host(_) => ErrorKind::Host,
        }
    }

    pub(crate) fn invalid_tag(tag: &str) -> Self {
        Self::InvalidLanguageTag { tag: tag.into() }
    }
}

impl From<HostError> for CollatorError {
    fn from(error: HostError) -> Self {
        Self::Host(error)
    }
}
