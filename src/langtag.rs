// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use core::cmp::Ordering;
use core::str::FromStr;

use crate::data;
use crate::extensions;
use crate::parser;
use crate::subtags;
use crate::ParseError;
use alloc::borrow::Cow;

/// A parsed BCP-47 language tag, including extensions.
///
/// # Parsing
///
/// Parsing normalizes a well-formed tag, adjusting subtag casing to the
/// canonical form: lowercase language, titlecase script, uppercase region,
/// lowercase variants and extension subtags. Legacy (grandfathered) tags such
/// as `"no-bok"` are replaced by their modern equivalents before the grammar
/// is applied.
///
/// Any syntactically invalid subtag causes parsing to fail with an error.
///
/// Syntax normalization does not replace deprecated subtags; for that, see
/// [`canonicalize`](crate::canonicalizer::canonicalize).
///
/// # Ordering
///
/// This type deliberately does not implement `Ord` or `PartialOrd` because
/// there are multiple possible orderings. For a struct ordering suitable for
/// a `BTreeSet`, see [`LanguageTag::total_cmp`]; for a string ordering, see
/// [`LanguageTag::strict_cmp`].
///
/// # Examples
///
/// ```
/// use intl_collator::{
///     subtags::{language, region, script},
///     LanguageTag,
/// };
///
/// let tag: LanguageTag = "eN-latn-Us-Valencia".parse().unwrap();
///
/// assert_eq!(tag.language, Some(language!("en")));
/// assert_eq!(tag.script, Some(script!("Latn")));
/// assert_eq!(tag.region, Some(region!("US")));
/// assert_eq!(tag.variants.first().map(|v| v.as_str()), Some("valencia"));
/// ```
#[derive(PartialEq, Eq, Clone, Hash, Default)] // no Ord or PartialOrd: see docs
#[allow(clippy::exhaustive_structs)] // stable
pub struct LanguageTag {
    /// Language subtag of the tag. `None` only for private-use-only tags
    /// such as `"x-some-thing"`.
    pub language: Option<subtags::Language>,
    /// Script subtag of the tag.
    pub script: Option<subtags::Script>,
    /// Region subtag of the tag.
    pub region: Option<subtags::Region>,
    /// Variant subtags of the tag, in source order.
    pub variants: subtags::Variants,
    /// Extension sequences attached to the tag.
    pub extensions: extensions::Extensions,
}

impl LanguageTag {
    /// A constructor which takes a str slice, parses it and
    /// produces a well-formed [`LanguageTag`].
    ///
    /// # Examples
    ///
    /// ```
    /// use intl_collator::LanguageTag;
    ///
    /// LanguageTag::try_from_str("en-US").expect("Parsing failed");
    /// ```
    #[inline]
    pub fn try_from_str(s: &str) -> Result<Self, ParseError> {
        Self::try_from_utf8(s.as_bytes())
    }

    /// See [`Self::try_from_str`]
    pub fn try_from_utf8(code_units: &[u8]) -> Result<Self, ParseError> {
        if let Some(replacement) = data::legacy_replacement(code_units) {
            return parser::parse_language_tag(replacement.as_bytes());
        }
        parser::parse_language_tag(code_units)
    }

    /// Whether this tag consists of a private-use sequence alone.
    ///
    /// Such tags are well-formed but carry no language, and never match any
    /// available locale.
    ///
    /// # Examples
    ///
    /// ```
    /// use intl_collator::LanguageTag;
    ///
    /// let tag: LanguageTag = "x-some-thing".parse().unwrap();
    /// assert!(tag.is_private_use_only());
    /// ```
    pub fn is_private_use_only(&self) -> bool {
        self.language.is_none()
    }

    /// Normalize a language tag (operating on UTF-8 formatted byte slices).
    ///
    /// This operation will normalize casing and replace legacy tags, but
    /// does not touch deprecated subtags.
    ///
    /// # Examples
    ///
    /// ```
    /// use intl_collator::LanguageTag;
    ///
    /// assert_eq!(
    ///     LanguageTag::normalize_utf8(b"pL-latn-pl").as_deref(),
    ///     Ok("pl-Latn-PL")
    /// );
    /// ```
    pub fn normalize_utf8(input: &[u8]) -> Result<Cow<str>, ParseError> {
        let tag = Self::try_from_utf8(input)?;
        Ok(writeable::to_string_or_borrow(&tag, input))
    }

    /// Normalize a language tag (operating on strings).
    ///
    /// # Examples
    ///
    /// ```
    /// use intl_collator::LanguageTag;
    ///
    /// assert_eq!(
    ///     LanguageTag::normalize("pL-latn-pl").as_deref(),
    ///     Ok("pl-Latn-PL")
    /// );
    /// ```
    pub fn normalize(input: &str) -> Result<Cow<str>, ParseError> {
        Self::normalize_utf8(input.as_bytes())
    }

    /// Compare this [`LanguageTag`] with BCP-47 bytes.
    ///
    /// The return value is equivalent to what would happen if you first
    /// converted this [`LanguageTag`] to a BCP-47 string and then performed a
    /// byte comparison.
    ///
    /// This function is case-sensitive and results in a *total order*, so it
    /// is appropriate for binary search.
    pub fn strict_cmp(&self, other: &[u8]) -> Ordering {
        writeable::cmp_utf8(self, other)
    }

    #[allow(clippy::type_complexity)]
    pub(crate) fn as_tuple(
        &self,
    ) -> (
        Option<subtags::Language>,
        Option<subtags::Script>,
        Option<subtags::Region>,
        &subtags::Variants,
        (&[extensions::Extension], &extensions::Private),
    ) {
        (
            self.language,
            self.script,
            self.region,
            &self.variants,
            self.extensions.as_tuple(),
        )
    }

    /// Compare this [`LanguageTag`] with another field-by-field.
    /// The result is a total ordering sufficient for use in a
    /// [`BTreeSet`](alloc::collections::BTreeSet).
    ///
    /// Unlike [`LanguageTag::strict_cmp`], the ordering may or may not be
    /// equivalent to string ordering.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.as_tuple().cmp(&other.as_tuple())
    }

    // Runs `f` over the language/script/region/variant subtags, skipping
    // extensions. The matcher truncates this form when negotiating.
    pub(crate) fn for_each_identifier_subtag_str<E, F>(&self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        if let Some(ref language) = self.language {
            f(language.as_str())?;
        }
        if let Some(ref script) = self.script {
            f(script.as_str())?;
        }
        if let Some(ref region) = self.region {
            f(region.as_str())?;
        }
        self.variants.for_each_subtag_str(f)?;
        Ok(())
    }

    pub(crate) fn for_each_subtag_str<E, F>(&self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        self.for_each_identifier_subtag_str(f)?;
        self.extensions.for_each_subtag_str(f)?;
        Ok(())
    }
}

impl core::fmt::Debug for LanguageTag {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

impl FromStr for LanguageTag {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s)
    }
}

impl From<subtags::Language> for LanguageTag {
    fn from(language: subtags::Language) -> Self {
        Self {
            language: Some(language),
            ..Default::default()
        }
    }
}

impl_writeable_for_each_subtag_str_no_test!(LanguageTag, selff, selff.script.is_none() && selff.region.is_none() && selff.variants.is_empty() && selff.extensions.is_empty() && selff.language.is_some() => alloc::borrow::Cow::Borrowed(selff.language.as_ref().unwrap().as_str()));
