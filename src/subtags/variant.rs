// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

impl_tinystr_subtag!(
    /// A variant subtag (examples: `"macos"`, `"posix"`, `"1996"` etc.)
    ///
    /// [`Variant`] represents a variant subtag of a BCP-47 language tag:
    /// five to eight ASCII alphanumerics, or four beginning with a digit,
    /// stored lowercase.
    ///
    /// # Examples
    ///
    /// ```
    /// use intl_collator::subtags::Variant;
    ///
    /// let variant: Variant =
    ///     "MacOS".parse().expect("Failed to parse a variant subtag.");
    /// assert_eq!(variant.as_str(), "macos");
    /// ```
    Variant,
    subtags,
    variant,
    subtags_variant,
    4..=8,
    s,
    s.is_ascii_alphanumeric() && (s.len() != 4 || s.all_bytes()[0].is_ascii_digit()),
    s.to_ascii_lowercase(),
    InvalidSubtag,
    ["posix", "1996"],
    ["yes", "abcd", "toolooong"],
);
