// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Collation elements: the per-character weight triples comparison walks.

use core::cmp::Ordering;
use smallvec::SmallVec;

// Letters decomposing to an accent-free base, sorted by char. The base may
// expand to several letters ("ae", "ss"). Covers Latin-1 Supplement and
// Latin Extended-A; anything outside collates by code point.
static DECOMPOSITIONS: &[(char, &str)] = &[
    ('\u{df}', "ss"), // ß
    ('\u{e0}', "a"),  // à
    ('\u{e1}', "a"),  // á
    ('\u{e2}', "a"),  // â
    ('\u{e3}', "a"),  // ã
    ('\u{e4}', "a"),  // ä
    ('\u{e5}', "a"),  // å
    ('\u{e6}', "ae"), // æ
    ('\u{e7}', "c"),  // ç
    ('\u{e8}', "e"),  // è
    ('\u{e9}', "e"),  // é
    ('\u{ea}', "e"),  // ê
    ('\u{eb}', "e"),  // ë
    ('\u{ec}', "i"),  // ì
    ('\u{ed}', "i"),  // í
    ('\u{ee}', "i"),  // î
    ('\u{ef}', "i"),  // ï
    ('\u{f0}', "d"),  // ð
    ('\u{f1}', "n"),  // ñ
    ('\u{f2}', "o"),  // ò
    ('\u{f3}', "o"),  // ó
    ('\u{f4}', "o"),  // ô
    ('\u{f5}', "o"),  // õ
    ('\u{f6}', "o"),  // ö
    ('\u{f8}', "o"),  // ø
    ('\u{f9}', "u"),  // ù
    ('\u{fa}', "u"),  // ú
    ('\u{fb}', "u"),  // û
    ('\u{fc}', "u"),  // ü
    ('\u{fd}', "y"),  // ý
    ('\u{fe}', "th"), // þ
    ('\u{ff}', "y"),  // ÿ
    ('\u{101}', "a"), // ā
    ('\u{103}', "a"), // ă
    ('\u{105}', "a"), // ą
    ('\u{107}', "c"), // ć
    ('\u{109}', "c"), // ĉ
    ('\u{10b}', "c"), // ċ
    ('\u{10d}', "c"), // č
    ('\u{10f}', "d"), // ď
    ('\u{111}', "d"), // đ
    ('\u{113}', "e"), // ē
    ('\u{115}', "e"), // ĕ
    ('\u{117}', "e"), // ė
    ('\u{119}', "e"), // ę
    ('\u{11b}', "e"), // ě
    ('\u{11d}', "g"), // ĝ
    ('\u{11f}', "g"), // ğ
    ('\u{121}', "g"), // ġ
    ('\u{123}', "g"), // ģ
    ('\u{125}', "h"), // ĥ
    ('\u{127}', "h"), // ħ
    ('\u{129}', "i"), // ĩ
    ('\u{12b}', "i"), // ī
    ('\u{12d}', "i"), // ĭ
    ('\u{12f}', "i"), // į
    ('\u{131}', "i"), // ı
    ('\u{133}', "ij"), // ĳ
    ('\u{135}', "j"), // ĵ
    ('\u{137}', "k"), // ķ
    ('\u{13a}', "l"), // ĺ
    ('\u{13c}', "l"), // ļ
    ('\u{13e}', "l"), // ľ
    ('\u{140}', "l"), // ŀ
    ('\u{142}', "l"), // ł
    ('\u{144}', "n"), // ń
    ('\u{146}', "n"), // ņ
    ('\u{148}', "n"), // ň
    ('\u{14b}', "n"), // ŋ
    ('\u{14d}', "o"), // ō
    ('\u{14f}', "o"), // ŏ
    ('\u{151}', "o"), // ő
    ('\u{153}', "oe"), // œ
    ('\u{155}', "r"), // ŕ
    ('\u{157}', "r"), // ŗ
    ('\u{159}', "r"), // ř
    ('\u{15b}', "s"), // ś
    ('\u{15d}', "s"), // ŝ
    ('\u{15f}', "s"), // ş
    ('\u{161}', "s"), // š
    ('\u{163}', "t"), // ţ
    ('\u{165}', "t"), // ť
    ('\u{167}', "t"), // ŧ
    ('\u{169}', "u"), // ũ
    ('\u{16b}', "u"), // ū
    ('\u{16d}', "u"), // ŭ
    ('\u{16f}', "u"), // ů
    ('\u{171}', "u"), // ű
    ('\u{173}', "u"), // ų
    ('\u{175}', "w"), // ŵ
    ('\u{177}', "y"), // ŷ
    ('\u{17a}', "z"), // ź
    ('\u{17c}', "z"), // ż
    ('\u{17e}', "z"), // ž
];

/// Accent-free base letters of `c`, when `c` (already lowercased) is an
/// accented or composed form.
pub(crate) fn decompose(c: char) -> Option<&'static str> {
    DECOMPOSITIONS
        .binary_search_by(|(key, _)| key.cmp(&c))
        .ok()
        .and_then(|idx| DECOMPOSITIONS.get(idx))
        .map(|(_, base)| *base)
}

// Primary weights are code points shifted left, leaving room for letters a
// tailoring inserts between two code points.
pub(crate) const fn letter_weight(c: char) -> u32 {
    (c as u32) << 8
}

/// The primary weight of an element: either a letter weight or the
/// significant digits of a numeric run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Primary {
    Letter(u32),
    // Invariant: non-empty, no leading zero unless the run is exactly "0"
    Numeric(SmallVec<[u8; 8]>),
}

impl Primary {
    /// Orders numeric runs by value (length, then digits) and interleaves
    /// them with letters at the position of the digit `0`.
    pub(crate) fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Letter(a), Self::Letter(b)) => a.cmp(b),
            (Self::Numeric(a), Self::Numeric(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Self::Numeric(_), Self::Letter(b)) => {
                letter_weight('0').cmp(b).then(Ordering::Less)
            }
            (Self::Letter(a), Self::Numeric(_)) => {
                a.cmp(&letter_weight('0')).then(Ordering::Greater)
            }
        }
    }
}

/// One collation element. Comparison walks all elements at the primary
/// level, then again at each weaker level the sensitivity keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    pub(crate) primary: Primary,
    // 0 for accent-free letters, else the accented form's code point
    pub(crate) secondary: u16,
    // 0 for the case that sorts first, 1 for the other
    pub(crate) tertiary: u8,
}
