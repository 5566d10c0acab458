// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

impl_tinystr_subtag!(
    /// A language subtag (examples: `"en"`, `"csb"`, `"zh"`, `"und"`, etc.)
    ///
    /// [`Language`] represents the primary language subtag of a BCP-47
    /// language tag, between two and eight ASCII letters, stored lowercase.
    ///
    /// # Examples
    ///
    /// ```
    /// use intl_collator::subtags::Language;
    ///
    /// let language: Language =
    ///     "En".parse().expect("Failed to parse a language subtag.");
    /// assert_eq!(language.as_str(), "en");
    /// ```
    ///
    /// If the [`Language`] has no value assigned, it serializes to a string `"und"`, which
    /// can be then parsed back to an empty [`Language`] field.
    ///
    /// # Examples
    ///
    /// ```
    /// use intl_collator::subtags::Language;
    ///
    /// assert_eq!(Language::UNKNOWN.as_str(), "und");
    /// ```
    Language,
    subtags,
    language,
    subtags_language,
    2..=8,
    s,
    s.is_ascii_alphabetic(),
    s.to_ascii_lowercase(),
    InvalidLanguage,
    ["en", "foo"],
    ["419", "german-x", "en1", "a", "abcdefghi"],
);

impl Language {
    /// The unknown language "und".
    pub const UNKNOWN: Self = language!("und");

    /// Whether this [`Language`] equals [`Language::UNKNOWN`].
    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::UNKNOWN)
    }
}
