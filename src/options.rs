// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Options bag and resolved-options snapshot for [`Collator`](crate::Collator).

use alloc::string::String;

/// Whether the comparison is for sorting or for searching for matching
/// strings.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[non_exhaustive]
pub enum Usage {
    /// Comparison for sorting a list of strings.
    #[default]
    Sort,
    /// Comparison for testing whether strings match.
    Search,
}

impl Usage {
    /// The option value as its conventional string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sort => "sort",
            Self::Search => "search",
        }
    }
}

/// Which character differences are significant during comparison.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[non_exhaustive]
pub enum Sensitivity {
    /// Only base letters differ: `a != b`, `a == á`, `a == A`.
    Base,
    /// Base letters and accents differ: `a != á`, `a == A`.
    Accent,
    /// Base letters and case differ: `a == á`, `a != A`.
    Case,
    /// Base letters, accents and case all differ.
    #[default]
    Variant,
}

impl Sensitivity {
    /// The option value as its conventional string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Accent => "accent",
            Self::Case => "case",
            Self::Variant => "variant",
        }
    }
}

/// Whether upper case or lower case sorts first.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[non_exhaustive]
pub enum CaseFirst {
    /// Upper case sorts before lower case.
    Upper,
    /// Lower case sorts before upper case.
    Lower,
    /// No explicit preference; the tailoring's default applies.
    #[default]
    False,
}

impl CaseFirst {
    /// The option value as its conventional string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::False => "false",
        }
    }
}

/// The options a [`Collator`](crate::Collator) is constructed with.
///
/// Fields left as `None` take the locale-aware defaults during construction;
/// `numeric` and `case_first` may instead be supplied through the locale's
/// `-u-kn` and `-u-kf` keywords, with the explicit option winning when both
/// are present.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct CollatorOptions {
    /// Sorting or searching. Defaults to [`Usage::Sort`].
    pub usage: Option<Usage>,
    /// Significant character differences. Defaults to
    /// [`Sensitivity::Variant`].
    pub sensitivity: Option<Sensitivity>,
    /// Whether punctuation is ignored. Defaults to `false`.
    pub ignore_punctuation: Option<bool>,
    /// Whether sequences of decimal digits compare by numeric value.
    /// Defaults to `false`.
    pub numeric: Option<bool>,
    /// Whether upper or lower case sorts first. Defaults to
    /// [`CaseFirst::False`].
    pub case_first: Option<CaseFirst>,
}

impl CollatorOptions {
    /// Returns a new options bag with every field unset. Same as
    /// [`default()`](Default::default()).
    pub fn new() -> Self {
        Self::default()
    }
}

/// A snapshot of the options a [`Collator`](crate::Collator) ended up with
/// after locale negotiation and defaulting.
///
/// [`Collator`]: crate::Collator
#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub struct ResolvedOptions {
    /// The canonical tag of the locale actually in use, including any
    /// honored `-u-` keywords.
    pub locale: String,
    /// Sorting or searching.
    pub usage: Usage,
    /// Significant character differences.
    pub sensitivity: Sensitivity,
    /// Whether punctuation is ignored.
    pub ignore_punctuation: bool,
    /// The collation type in use. Always `"default"`; other named
    /// collations are never selected.
    pub collation: String,
    /// Whether sequences of decimal digits compare by numeric value.
    pub numeric: bool,
    /// Whether upper or lower case sorts first.
    pub case_first: CaseFirst,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CollatorOptions::new();
        assert_eq!(options.usage, None);
        assert_eq!(Usage::default(), Usage::Sort);
        assert_eq!(Sensitivity::default(), Sensitivity::Variant);
        assert_eq!(CaseFirst::default(), CaseFirst::False);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Usage::Search.as_str(), "search");
        assert_eq!(Sensitivity::Base.as_str(), "base");
        assert_eq!(CaseFirst::Upper.as_str(), "upper");
        assert_eq!(CaseFirst::False.as_str(), "false");
    }
}
