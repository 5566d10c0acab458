// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Locale list intake and lookup negotiation.
//!
//! Requested locales arrive from a host environment whose values may be
//! strings, stringifiable objects, array-likes with holes, or junk; the
//! types here model that boundary. Negotiation itself is the lookup
//! algorithm: each canonicalized request is truncated subtag by subtag
//! until it hits an available locale.

use crate::canonicalizer;
use crate::data;
use crate::error::{CollatorError, HostError};
use crate::LanguageTag;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

/// A caller-supplied value that stands for a locale list entry.
#[non_exhaustive]
pub enum LocaleValue {
    /// A plain string.
    String(String),
    /// An object that converts itself to a tag string on demand.
    Stringify(Box<dyn Stringify>),
    /// Anything else. Rejected with a type error.
    Other,
}

impl core::fmt::Debug for LocaleValue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Stringify(_) => f.write_str("Stringify"),
            Self::Other => f.write_str("Other"),
        }
    }
}

/// An object that produces a tag string when asked, possibly failing.
/// Failures propagate back to the caller verbatim.
pub trait Stringify {
    /// Returns the tag string this object stands for.
    fn stringify(&self) -> Result<String, HostError>;
}

/// An indexed collection of locale values, possibly with holes, whose
/// length and elements are produced on demand and may fail.
pub trait ArrayLike {
    /// The number of slots. An error propagates back to the caller.
    fn len(&self) -> Result<usize, HostError>;

    /// The value in slot `index`, or `None` for a hole.
    fn get(&self, index: usize) -> Result<Option<LocaleValue>, HostError>;
}

/// The `locales` argument of the [`Collator`](crate::Collator) entry
/// points.
#[non_exhaustive]
pub enum LocalesArg {
    /// No locales given; the default locale applies.
    Undefined,
    /// A single tag string.
    Tag(String),
    /// An array-like collection of locale values.
    List(Box<dyn ArrayLike>),
    /// A scalar that coerces to an object with no entries, such as a bare
    /// number. Treated as an empty list.
    Ignored,
}

impl core::fmt::Debug for LocalesArg {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Undefined => f.write_str("Undefined"),
            Self::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            Self::List(_) => f.write_str("List"),
            Self::Ignored => f.write_str("Ignored"),
        }
    }
}

impl LocalesArg {
    /// Builds a list argument from plain tag strings.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = tags.into_iter().map(Into::into).collect();
        Self::List(Box::new(StringList(entries)))
    }
}

impl From<&str> for LocalesArg {
    fn from(tag: &str) -> Self {
        Self::Tag(tag.into())
    }
}

impl From<String> for LocalesArg {
    fn from(tag: String) -> Self {
        Self::Tag(tag)
    }
}

impl From<&[&str]> for LocalesArg {
    fn from(tags: &[&str]) -> Self {
        Self::from_tags(tags.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for LocalesArg {
    fn from(tags: [&str; N]) -> Self {
        Self::from_tags(tags)
    }
}

struct StringList(Vec<String>);

impl ArrayLike for StringList {
    fn len(&self) -> Result<usize, HostError> {
        Ok(self.0.len())
    }

    fn get(&self, index: usize) -> Result<Option<LocaleValue>, HostError> {
        Ok(self.0.get(index).cloned().map(LocaleValue::String))
    }
}

fn canonicalize_tag(input: &str) -> Result<LanguageTag, CollatorError> {
    let mut tag = LanguageTag::try_from_str(input)
        .map_err(|_| CollatorError::invalid_tag(input))?;
    canonicalizer::canonicalize(&mut tag);
    Ok(tag)
}

/// Canonicalizes a locale argument into an ordered, duplicate-free list of
/// parsed tags.
///
/// Holes in array-likes are skipped; the first occurrence of a duplicate
/// wins; invalid tags are a range error carrying the offending input
/// verbatim; non-string non-object entries are a type error.
pub(crate) fn canonicalize_locale_tags(
    locales: &LocalesArg,
) -> Result<Vec<LanguageTag>, CollatorError> {
    let mut seen = Vec::new();
    let mut result = Vec::new();

    let mut push = |tag: LanguageTag| {
        let canonical = tag.to_string();
        if !seen.contains(&canonical) {
            seen.push(canonical);
            result.push(tag);
        }
    };

    match locales {
        LocalesArg::Undefined | LocalesArg::Ignored => {}
        LocalesArg::Tag(input) => push(canonicalize_tag(input)?),
        LocalesArg::List(list) => {
            let len = list.len().map_err(CollatorError::Host)?;
            for index in 0..len {
                let Some(value) = list.get(index).map_err(CollatorError::Host)? else {
                    continue;
                };
                let input = match value {
                    LocaleValue::String(s) => s,
                    LocaleValue::Stringify(object) => {
                        object.stringify().map_err(CollatorError::Host)?
                    }
                    LocaleValue::Other => {
                        return Err(CollatorError::LocaleValueNotStringOrObject)
                    }
                };
                push(canonicalize_tag(&input)?);
            }
        }
    }

    Ok(result)
}

/// Canonicalizes a locale argument into an ordered, duplicate-free list of
/// canonical tag strings.
///
/// # Examples
///
/// ```
/// use intl_collator::matcher::{canonicalize_locale_list, LocalesArg};
///
/// let list = canonicalize_locale_list(&["EN-us", "no-bok", "en-US"].into()).unwrap();
/// assert_eq!(list, ["en-US", "nb"]);
/// assert!(canonicalize_locale_list(&LocalesArg::Undefined).unwrap().is_empty());
/// ```
pub fn canonicalize_locale_list(locales: &LocalesArg) -> Result<Vec<String>, CollatorError> {
    Ok(canonicalize_locale_tags(locales)?
        .iter()
        .map(|tag| tag.to_string())
        .collect())
}

// The language-script-region-variants prefix of a tag, extensions dropped.
fn identifier_string(tag: &LanguageTag) -> String {
    let mut out = String::new();
    #[allow(clippy::unwrap_used)] // the closure is infallible
    tag.for_each_identifier_subtag_str::<core::convert::Infallible, _>(&mut |subtag| {
        if !out.is_empty() {
            out.push('-');
        }
        out.push_str(subtag);
        Ok(())
    })
    .unwrap();
    out
}

/// The most specific available locale the tag can be truncated to, if any.
/// Private-use-only tags never match.
pub(crate) fn best_available(tag: &LanguageTag) -> Option<String> {
    if tag.is_private_use_only() {
        return None;
    }
    let mut candidate = identifier_string(tag);
    loop {
        if data::is_available(&candidate) {
            return Some(candidate);
        }
        let pos = candidate.rfind('-')?;
        // Never leave a trailing single-character subtag behind.
        let pos = match pos.checked_sub(2) {
            Some(prev) if candidate.as_bytes().get(prev) == Some(&b'-') => prev,
            _ => pos,
        };
        candidate.truncate(pos);
    }
}

/// The result of lookup negotiation over a requested locale list.
pub(crate) struct LookupResult {
    /// The available locale that will drive collation.
    pub(crate) available: String,
    /// The index of the request that matched, when one did.
    pub(crate) matched: Option<usize>,
}

/// Picks the first requested locale with an available match; the default
/// locale when none has one.
pub(crate) fn lookup_matcher(requested: &[LanguageTag]) -> LookupResult {
    for (index, tag) in requested.iter().enumerate() {
        if let Some(available) = best_available(tag) {
            return LookupResult {
                available,
                matched: Some(index),
            };
        }
    }
    LookupResult {
        available: data::DEFAULT_LOCALE.into(),
        matched: None,
    }
}

/// The subset of the requested locales that lookup can serve, as full
/// canonical tags in request order.
///
/// # Examples
///
/// ```
/// use intl_collator::matcher::supported_locales;
///
/// let supported = supported_locales(&["en-GB-u-co-phonebk", "tlh", "x-some-thing"].into()).unwrap();
/// assert_eq!(supported, ["en-GB-u-co-phonebk"]);
/// ```
pub fn supported_locales(locales: &LocalesArg) -> Result<Vec<String>, CollatorError> {
    Ok(canonicalize_locale_tags(locales)?
        .iter()
        .filter(|tag| best_available(tag).is_some())
        .map(|tag| tag.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tag() {
        assert_eq!(
            canonicalize_locale_list(&"EN-us".into()).unwrap(),
            ["en-US"]
        );
    }

    #[test]
    fn test_dedup_keeps_first() {
        let list =
            canonicalize_locale_list(&["en", "pt", "en-US", "es", "EN", "en-us"].into()).unwrap();
        assert_eq!(list, ["en", "pt", "en-US", "es"]);
    }

    #[test]
    fn test_invalid_tag_reported_verbatim() {
        let err = canonicalize_locale_list(&["en", "en--US"].into()).unwrap_err();
        assert_eq!(err.to_string(), "invalid language tag: en--US");
    }

    #[test]
    fn test_best_available_truncates() {
        let tag: LanguageTag = "en-Latn-GB-scouse".parse().unwrap();
        assert_eq!(best_available(&tag).as_deref(), Some("en"));

        let tag: LanguageTag = "de-CH-1901".parse().unwrap();
        assert_eq!(best_available(&tag).as_deref(), Some("de-CH"));

        let tag: LanguageTag = "tlh".parse().unwrap();
        assert_eq!(best_available(&tag), None);

        let tag: LanguageTag = "x-some-thing".parse().unwrap();
        assert_eq!(best_available(&tag), None);
    }

    #[test]
    fn test_lookup_falls_back() {
        let requested = [
            "tlh".parse().unwrap(),
            "sv-SE".parse::<LanguageTag>().unwrap(),
        ];
        let result = lookup_matcher(&requested);
        assert_eq!(result.available, "sv");
        assert_eq!(result.matched, Some(1));

        let result = lookup_matcher(&[]);
        assert_eq!(result.available, "en");
        assert_eq!(result.matched, None);
    }

    #[test]
    fn test_supported_keeps_extensions() {
        let supported = supported_locales(&["de-u-kn-true"].into()).unwrap();
        assert_eq!(supported, ["de-u-kn-true"]);
    }
}
