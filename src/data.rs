// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Static alias and availability tables.
//!
//! The alias tables are extracted from the CLDR supplemental alias data,
//! restricted to the whole-tag legacy replacements and the deprecated
//! language and region codes that canonicalization must rewrite.

use crate::subtags::{language, region, Language, Region};

// Whole-tag replacements for legacy (grandfathered) tags. These do not fit
// the BCP-47 grammar, so they are looked up before parsing, against the
// lowercased input. Sorted by key.
static LEGACY: &[(&str, &str)] = &[
    ("art-lojban", "jbo"),
    ("cel-gaulish", "xtg-x-cel-gaulish"),
    ("en-gb-oed", "en-GB-oxendict"),
    ("i-ami", "ami"),
    ("i-bnn", "bnn"),
    ("i-default", "en-x-i-default"),
    ("i-enochian", "und-x-i-enochian"),
    ("i-hak", "hak"),
    ("i-klingon", "tlh"),
    ("i-lux", "lb"),
    ("i-mingo", "see-x-i-mingo"),
    ("i-navajo", "nv"),
    ("i-pwn", "pwn"),
    ("i-tao", "tao"),
    ("i-tay", "tay"),
    ("i-tsu", "tsu"),
    ("no-bok", "nb"),
    ("no-nyn", "nn"),
    ("sgn-be-fr", "sfb"),
    ("sgn-be-nl", "vgt"),
    ("sgn-ch-de", "sgg"),
    ("zh-guoyu", "cmn"),
    ("zh-hakka", "hak"),
    ("zh-min", "nan-x-zh-min"),
    ("zh-min-nan", "nan"),
    ("zh-xiang", "hsn"),
];

// Length of the longest LEGACY key, "cel-gaulish".
const LEGACY_MAX_LEN: usize = 11;

/// Returns the modern replacement for a legacy tag, if the input (compared
/// case-insensitively, as a whole) is one.
pub(crate) fn legacy_replacement(code_units: &[u8]) -> Option<&'static str> {
    if code_units.is_empty() || code_units.len() > LEGACY_MAX_LEN {
        return None;
    }
    let mut buf = [0u8; LEGACY_MAX_LEN];
    #[allow(clippy::indexing_slicing)] // len checked above
    let lower = &mut buf[..code_units.len()];
    for (dst, src) in lower.iter_mut().zip(code_units.iter()) {
        *dst = src.to_ascii_lowercase();
    }
    LEGACY
        .binary_search_by(|(key, _)| key.as_bytes().cmp(lower))
        .ok()
        .and_then(|idx| LEGACY.get(idx))
        .map(|(_, replacement)| *replacement)
}

// Deprecated ISO 639 codes with a single modern replacement. Sorted by key.
static LANGUAGE_ALIASES: &[(Language, Language)] = &[
    (language!("in"), language!("id")),
    (language!("iw"), language!("he")),
    (language!("ji"), language!("yi")),
    (language!("jw"), language!("jv")),
    (language!("mo"), language!("ro")),
    (language!("tl"), language!("fil")),
];

pub(crate) fn language_alias(language: Language) -> Option<Language> {
    LANGUAGE_ALIASES
        .binary_search_by(|(key, _)| key.cmp(&language))
        .ok()
        .and_then(|idx| LANGUAGE_ALIASES.get(idx))
        .map(|(_, replacement)| *replacement)
}

// Deprecated ISO 3166 codes with a single modern replacement. Sorted by key.
static REGION_ALIASES: &[(Region, Region)] = &[
    (region!("BU"), region!("MM")),
    (region!("DD"), region!("DE")),
    (region!("FX"), region!("FR")),
    (region!("TP"), region!("TL")),
    (region!("YD"), region!("YE")),
    (region!("YU"), region!("RS")),
    (region!("ZR"), region!("CD")),
];

pub(crate) fn region_alias(region: Region) -> Option<Region> {
    REGION_ALIASES
        .binary_search_by(|(key, _)| key.cmp(&region))
        .ok()
        .and_then(|idx| REGION_ALIASES.get(idx))
        .map(|(_, replacement)| *replacement)
}

/// The locales collation tailorings exist for, as canonical tags.
/// Sorted by byte order so lookup can binary search.
pub(crate) static AVAILABLE_LOCALES: &[&str] = &[
    "ar", "da", "de", "de-AT", "de-CH", "el", "en", "en-AU", "en-CA", "en-GB", "en-US", "es",
    "es-419", "es-ES", "fi", "fr", "fr-CA", "fr-FR", "he", "hi", "it", "ja", "ko", "nb", "nl",
    "nn", "pl", "pt", "pt-BR", "pt-PT", "ru", "sv", "th", "tr", "uk", "zh", "zh-Hans", "zh-Hant",
];

/// The locale used when negotiation produces no match.
pub(crate) const DEFAULT_LOCALE: &str = "en";

pub(crate) fn is_available(candidate: &str) -> bool {
    AVAILABLE_LOCALES.binary_search(&candidate).is_ok()
}
