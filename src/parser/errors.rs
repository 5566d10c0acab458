// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use displaydoc::Display;

/// List of parser errors that can be generated
/// while parsing [`LanguageTag`](crate::LanguageTag),
/// [`subtags`](crate::subtags) or [`extensions`](crate::extensions).
///
/// These carry no source text; the facade wraps them together with the
/// offending tag into a [`CollatorError`](crate::CollatorError).
#[derive(Display, Debug, PartialEq, Copy, Clone)]
#[non_exhaustive]
pub enum ParseError {
    /// Invalid language subtag.
    ///
    /// # Examples
    ///
    /// ```
    /// use intl_collator::subtags::Language;
    /// use intl_collator::ParseError;
    ///
    /// assert_eq!("x2".parse::<Language>(), Err(ParseError::InvalidLanguage));
    /// ```
    #[displaydoc("The given language subtag is invalid")]
    InvalidLanguage,

    /// Invalid script, region or variant subtag.
    ///
    /// # Examples
    ///
    /// ```
    /// use intl_collator::subtags::Region;
    /// use intl_collator::ParseError;
    ///
    /// assert_eq!("#@2X".parse::<Region>(), Err(ParseError::InvalidSubtag));
    /// ```
    #[displaydoc("Invalid subtag")]
    InvalidSubtag,

    /// Invalid extension subtag, including a singleton key with no
    /// following subtags (e.g. `"en-u"`).
    #[displaydoc("Invalid extension")]
    InvalidExtension,

    /// The same singleton key appeared twice (e.g. `"en-u-kn-true-u-ko-true"`).
    #[displaydoc("Duplicated extension")]
    DuplicatedExtension,
}

impl core::error::Error for ParseError {}
