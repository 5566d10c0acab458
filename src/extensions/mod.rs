// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Extensions carry the `-u-`, `-a-` .. `-z-` singleton sequences and the
//! `-x-` private-use sequence of a [`LanguageTag`].
//!
//! This crate treats every non-private singleton as a generic key to an
//! ordered sequence of subtags; the collator facade interprets the Unicode
//! (`u`) sequence's `kn` and `kf` keywords during option resolution, and
//! everything else is a pass-through that survives canonicalization.
//!
//! # Examples
//!
//! ```
//! use intl_collator::LanguageTag;
//!
//! let tag: LanguageTag = "en-US-u-kn-true-x-foo"
//!     .parse()
//!     .expect("Failed to parse.");
//!
//! assert_eq!(tag.language.as_ref().map(|l| l.as_str()), Some("en"));
//! assert_eq!(tag.extensions.unicode_keyword("kn").map(|v| v.is_some()), Some(true));
//! assert!(!tag.extensions.private.is_empty());
//! ```
//!
//! [`LanguageTag`]: crate::LanguageTag
pub mod private;

pub use private::Private;

use crate::parser::{ParseError, SubtagIterator};
use crate::subtags::Subtag;

use alloc::vec::Vec;
use core::cmp::Ordering;
use smallvec::SmallVec;

pub(crate) const PRIVATE_EXT_CHAR: char = 'x';
pub(crate) const PRIVATE_EXT_STR: &str = "x";
pub(crate) const UNICODE_EXT_CHAR: char = 'u';

/// Defines the type of extension introduced by a singleton subtag.
#[derive(Debug, PartialEq, Eq, Clone, Hash, PartialOrd, Ord, Copy)]
#[non_exhaustive]
pub enum ExtensionType {
    /// Private Extension Type marked as `x`.
    Private,
    /// Any other singleton extension type, keyed by its (lowercased) letter.
    Singleton(u8),
}

impl ExtensionType {
    pub(crate) const fn try_from_byte(key: u8) -> Result<Self, ParseError> {
        let key = key.to_ascii_lowercase();
        match key as char {
            PRIVATE_EXT_CHAR => Ok(Self::Private),
            'a'..='z' => Ok(Self::Singleton(key)),
            _ => Err(ParseError::InvalidExtension),
        }
    }

    pub(crate) const fn try_from_utf8(code_units: &[u8]) -> Result<Self, ParseError> {
        let &[first] = code_units else {
            return Err(ParseError::InvalidExtension);
        };

        Self::try_from_byte(first)
    }
}

/// A single singleton extension sequence: one key letter and the ordered
/// subtags that followed it.
///
/// # Examples
///
/// ```
/// use intl_collator::LanguageTag;
///
/// let tag: LanguageTag = "und-a-foo-bar".parse().expect("Parsing failed.");
/// let ext = tag.extensions.sequences().next().unwrap();
///
/// assert_eq!(ext.key(), 'a');
/// assert_eq!(ext.to_string(), "a-foo-bar");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Extension {
    // Invariant: lowercase ASCII letter, not `x`
    key: u8,
    subtags: SmallVec<[Subtag; 2]>,
}

impl Extension {
    /// The singleton key introducing this sequence.
    pub fn key(&self) -> char {
        self.key as char
    }

    /// The subtags of this sequence, in source order.
    pub fn subtags(&self) -> &[Subtag] {
        &self.subtags
    }

    pub(crate) fn try_from_iter(key: u8, iter: &mut SubtagIterator) -> Result<Self, ParseError> {
        debug_assert!(matches!(
            ExtensionType::try_from_byte(key),
            Ok(ExtensionType::Singleton(_)),
        ));

        let mut subtags = SmallVec::<[Subtag; 2]>::new();
        while let Some(peeked) = iter.peek() {
            if peeked.len() == 1 {
                break;
            }
            subtags.push(Subtag::try_from_utf8(peeked)?);
            iter.next();
        }

        // A bare singleton (`"en-u"`) is structurally incomplete.
        if subtags.is_empty() {
            return Err(ParseError::InvalidExtension);
        }

        Ok(Self { key, subtags })
    }

    pub(crate) fn for_each_subtag_str<E, F>(&self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        let key = [self.key];
        // key is a lowercase ASCII letter by the field invariant
        #[allow(clippy::unwrap_used)]
        f(core::str::from_utf8(&key).unwrap())?;
        self.subtags.iter().map(|t| t.as_str()).try_for_each(f)
    }
}

impl_writeable_for_each_subtag_str_no_test!(Extension);

/// The set of extension sequences attached to a [`LanguageTag`], kept in
/// canonical ascending singleton order with private-use last.
///
/// [`LanguageTag`]: crate::LanguageTag
#[derive(Debug, Default, PartialEq, Eq, Clone, Hash)]
#[non_exhaustive]
pub struct Extensions {
    // Invariant: sorted by key, no duplicate keys
    sequences: Vec<Extension>,
    /// A representation of the data for a private-use extension, when present
    /// in the language tag.
    pub private: Private,
}

impl Extensions {
    /// Returns a new empty set of extensions. Same as
    /// [`default()`](Default::default()).
    #[inline]
    pub fn new() -> Self {
        Self {
            sequences: Vec::new(),
            private: Private::new(),
        }
    }

    pub(crate) fn from_private(private: Private) -> Self {
        Self {
            sequences: Vec::new(),
            private,
        }
    }

    /// Returns whether there are no extensions present.
    ///
    /// # Examples
    ///
    /// ```
    /// use intl_collator::LanguageTag;
    ///
    /// let tag: LanguageTag = "en-US-u-foo".parse().expect("Parsing failed.");
    ///
    /// assert!(!tag.extensions.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty() && self.private.is_empty()
    }

    /// The singleton sequences, in ascending key order, private-use excluded.
    pub fn sequences(&self) -> impl Iterator<Item = &Extension> {
        self.sequences.iter()
    }

    /// Looks up a keyword of the Unicode (`u`) extension sequence.
    ///
    /// Returns `None` when the tag carries no `u` sequence or the keyword is
    /// absent; returns `Some(None)` for a bare keyword (e.g. `-u-kn`), which
    /// BCP-47 defines as the value `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use intl_collator::subtags::subtag;
    /// use intl_collator::LanguageTag;
    ///
    /// let tag: LanguageTag = "en-u-kf-upper-kn".parse().unwrap();
    ///
    /// assert_eq!(tag.extensions.unicode_keyword("kf"), Some(Some(subtag!("upper"))));
    /// assert_eq!(tag.extensions.unicode_keyword("kn"), Some(None));
    /// assert_eq!(tag.extensions.unicode_keyword("ko"), None);
    /// ```
    pub fn unicode_keyword(&self, key: &str) -> Option<Option<Subtag>> {
        let unicode = self
            .sequences
            .iter()
            .find(|e| e.key() == UNICODE_EXT_CHAR)?;
        let mut subtags = unicode.subtags.iter().peekable();
        while let Some(subtag) = subtags.next() {
            if subtag.len() == 2 && subtag.as_str() == key {
                let value = subtags.peek().filter(|v| v.len() > 2).map(|v| **v);
                return Some(value);
            }
        }
        None
    }

    pub(crate) fn try_from_iter(iter: &mut SubtagIterator) -> Result<Self, ParseError> {
        let mut sequences = Vec::new();
        let mut private = None;

        while let Some(subtag) = iter.next() {
            let &[key] = subtag else {
                return Err(ParseError::InvalidExtension);
            };

            match ExtensionType::try_from_byte(key)? {
                ExtensionType::Private => {
                    if private.is_some() {
                        return Err(ParseError::DuplicatedExtension);
                    }
                    private = Some(Private::try_from_iter(iter)?);
                }
                ExtensionType::Singleton(key) => {
                    if sequences.iter().any(|e: &Extension| e.key == key) {
                        return Err(ParseError::DuplicatedExtension);
                    }
                    let parsed = Extension::try_from_iter(key, iter)?;
                    match sequences.binary_search(&parsed) {
                        Err(idx) => sequences.insert(idx, parsed),
                        Ok(_) => return Err(ParseError::InvalidExtension),
                    }
                }
            }
        }

        Ok(Self {
            sequences,
            private: private.unwrap_or_default(),
        })
    }

    pub(crate) fn as_tuple(&self) -> (&[Extension], &Private) {
        (&self.sequences, &self.private)
    }

    /// Returns an ordering suitable for use in a
    /// [`BTreeSet`](alloc::collections::BTreeSet).
    ///
    /// The ordering may or may not be equivalent to string ordering.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.as_tuple().cmp(&other.as_tuple())
    }

    pub(crate) fn for_each_subtag_str<E, F>(&self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        // Alphabetic by singleton.
        self.sequences
            .iter()
            .try_for_each(|ext| ext.for_each_subtag_str(f))?;

        // Private must be written last, since it allows single character
        // subtags that would otherwise read as singleton keys.
        self.private.for_each_subtag_str(f, true)?;
        Ok(())
    }
}

impl_writeable_for_each_subtag_str_no_test!(Extensions);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LanguageTag;

    #[test]
    fn test_writeable() {
        use writeable::assert_writeable_eq;
        assert_writeable_eq!(Extensions::new(), "");
        assert_writeable_eq!(
            "ar-SA-u-ca-islamic".parse::<LanguageTag>().unwrap().extensions,
            "u-ca-islamic",
        );
        assert_writeable_eq!(
            "en-001-x-foo-bar".parse::<LanguageTag>().unwrap().extensions,
            "x-foo-bar",
        );
        assert_writeable_eq!(
            "und-a-foo-u-foo-w-foo-z-foo-x-foo"
                .parse::<LanguageTag>()
                .unwrap()
                .extensions,
            "a-foo-u-foo-w-foo-z-foo-x-foo",
        );
    }

    #[test]
    fn test_singleton_sorting() {
        let tag: LanguageTag = "en-U-ko-tRue-A-aa-aaa".parse().unwrap();
        assert_eq!(tag.extensions.to_string(), "a-aa-aaa-u-ko-true");
    }

    #[test]
    fn test_duplicate_singleton_rejected() {
        assert_eq!(
            "en-u-kn-true-u-ko-true".parse::<LanguageTag>(),
            Err(ParseError::DuplicatedExtension)
        );
    }

    #[test]
    fn test_bare_singleton_rejected() {
        assert_eq!(
            "en-u".parse::<LanguageTag>(),
            Err(ParseError::InvalidExtension)
        );
        assert_eq!(
            "en-x".parse::<LanguageTag>(),
            Err(ParseError::InvalidExtension)
        );
    }
}
