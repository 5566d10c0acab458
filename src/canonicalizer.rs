// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Canonicalization of language tags beyond syntax normalization.
//!
//! Parsing already normalizes casing and replaces whole legacy tags; this
//! module rewrites deprecated subtags to their modern equivalents, so that
//! e.g. `"iw-YU"` and `"he-RS"` canonicalize to the same tag.

use crate::data;
use crate::LanguageTag;
use crate::ParseError;
use alloc::string::String;

/// Used to track the result of a canonicalization operation that potentially
/// modifies its argument in place.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[allow(clippy::exhaustive_enums)] // this enum is stable
pub enum TransformResult {
    /// The canonicalization operation modified the tag.
    Modified,
    /// The canonicalization operation did not modify the tag.
    Unmodified,
}

/// Replaces deprecated language and region subtags in place.
///
/// # Examples
///
/// ```
/// use intl_collator::canonicalizer::{self, TransformResult};
/// use intl_collator::LanguageTag;
///
/// let mut tag: LanguageTag = "iw-BU".parse().unwrap();
///
/// assert_eq!(canonicalizer::canonicalize(&mut tag), TransformResult::Modified);
/// assert_eq!(tag.to_string(), "he-MM");
/// assert_eq!(canonicalizer::canonicalize(&mut tag), TransformResult::Unmodified);
/// ```
pub fn canonicalize(tag: &mut LanguageTag) -> TransformResult {
    let mut result = TransformResult::Unmodified;

    if let Some(replacement) = tag.language.and_then(data::language_alias) {
        tag.language = Some(replacement);
        result = TransformResult::Modified;
    }
    if let Some(replacement) = tag.region.and_then(data::region_alias) {
        tag.region = Some(replacement);
        result = TransformResult::Modified;
    }

    result
}

/// Parses and fully canonicalizes a tag in one step: syntax normalization,
/// legacy tag replacement, then deprecated subtag replacement.
///
/// The operation is idempotent: feeding the output back in returns it
/// unchanged.
///
/// # Examples
///
/// ```
/// use intl_collator::canonicalizer;
///
/// assert_eq!(canonicalizer::canonicalize_str("No-Bok").as_deref(), Ok("nb"));
/// assert_eq!(canonicalizer::canonicalize_str("tl-tp").as_deref(), Ok("fil-TL"));
/// ```
pub fn canonicalize_str(input: &str) -> Result<String, ParseError> {
    let mut tag = LanguageTag::try_from_str(input)?;
    canonicalize(&mut tag);
    Ok(tag.to_string())
}
