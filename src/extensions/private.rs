// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Private Use Extensions is a list of extensions intended for
//! private use.
//!
//! Those extensions are treated as a pass-through: they survive
//! canonicalization verbatim (lowercased) at the end of the tag, and no
//! collation behavior depends on them.
//!
//! # Examples
//!
//! ```
//! use intl_collator::extensions::private::subtag;
//! use intl_collator::LanguageTag;
//!
//! let mut tag: LanguageTag = "en-US-x-foo-faa".parse().expect("Parsing failed.");
//!
//! assert!(tag.extensions.private.contains(&subtag!("foo")));
//! assert_eq!(tag.extensions.private.iter().next(), Some(&subtag!("foo")));
//!
//! tag.extensions.private.clear();
//!
//! assert!(tag.extensions.private.is_empty());
//! ```

use crate::parser::{ParseError, SubtagIterator};

use super::PRIVATE_EXT_STR;

use alloc::vec::Vec;
use core::ops::Deref;
use smallvec::SmallVec;

impl_tinystr_subtag!(
    /// A single subtag of a private-use sequence.
    ///
    /// Unlike the generic extension subtag, a private-use subtag may be a
    /// single character (`"x-a"` is a well-formed tag).
    Subtag,
    extensions::private,
    subtag,
    extensions_private_subtag,
    1..=8,
    s,
    s.is_ascii_alphanumeric(),
    s.to_ascii_lowercase(),
    InvalidExtension,
    ["foo12", "a"],
    ["toolooong"],
);

/// A list of private-use subtags, as in `"x-some-thing"`.
///
/// # Examples
///
/// ```
/// use intl_collator::extensions::private::{Private, Subtag};
///
/// let subtag1: Subtag = "foo".parse().expect("Failed to parse a Subtag.");
/// let subtag2: Subtag = "bar".parse().expect("Failed to parse a Subtag.");
///
/// let private = Private::from_vec_unchecked(vec![subtag1, subtag2]);
/// assert_eq!(&private.to_string(), "x-foo-bar");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, PartialOrd, Ord)]
pub struct Private(SmallVec<[Subtag; 2]>);

impl Private {
    /// Returns a new empty list of private-use extensions. Same as
    /// [`default()`](Default::default()).
    #[inline]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// A constructor which takes a list of [`Subtag`]s.
    pub fn from_vec_unchecked(input: Vec<Subtag>) -> Self {
        Self(input.into_iter().collect())
    }

    /// Empties the [`Private`] list.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub(crate) fn try_from_iter(iter: &mut SubtagIterator) -> Result<Self, ParseError> {
        let keys = iter
            .map(Subtag::try_from_utf8)
            .collect::<Result<SmallVec<_>, _>>()?;

        if keys.is_empty() {
            Err(ParseError::InvalidExtension)
        } else {
            Ok(Self(keys))
        }
    }

    pub(crate) fn for_each_subtag_str<E, F>(&self, f: &mut F, with_ext: bool) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        if self.is_empty() {
            return Ok(());
        }
        if with_ext {
            f(PRIVATE_EXT_STR)?;
        }
        self.deref().iter().map(|t| t.as_str()).try_for_each(f)
    }
}

impl core::str::FromStr for Private {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut iter = SubtagIterator::new(s.as_bytes());

        let ext = iter.next().ok_or(ParseError::InvalidExtension)?;
        if !matches!(ext, b"x" | b"X") {
            return Err(ParseError::InvalidExtension);
        }
        Self::try_from_iter(&mut iter)
    }
}

impl Deref for Private {
    type Target = [Subtag];

    fn deref(&self) -> &[Subtag] {
        self.0.deref()
    }
}

writeable::impl_display_with_writeable!(Private);

impl writeable::Writeable for Private {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        sink.write_str(PRIVATE_EXT_STR)?;
        for key in self.iter() {
            sink.write_char('-')?;
            writeable::Writeable::write_to(key, sink)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> writeable::LengthHint {
        if self.is_empty() {
            return writeable::LengthHint::exact(0);
        }
        let mut result = writeable::LengthHint::exact(1);
        for key in self.iter() {
            result += writeable::Writeable::writeable_length_hint(key) + 1;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_extension_fromstr() {
        let pe: Private = "x-foo-bar-baz-foobar".parse().expect("Failed to parse Private");
        assert_eq!(pe.to_string(), "x-foo-bar-baz-foobar");

        let pe: Result<Private, _> = "x".parse();
        assert!(pe.is_err());
    }

    #[test]
    fn test_private_single_char_subtags() {
        let pe: Private = "x-a-b-c".parse().expect("Failed to parse Private");
        assert_eq!(pe.len(), 3);
    }
}
