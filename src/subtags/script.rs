// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

impl_tinystr_subtag!(
    /// A script subtag (examples: `"Latn"`, `"Arab"`, etc.)
    ///
    /// [`Script`] represents the script subtag of a BCP-47 language tag,
    /// four ASCII letters, stored titlecase.
    ///
    /// # Examples
    ///
    /// ```
    /// use intl_collator::subtags::Script;
    ///
    /// let script: Script =
    ///     "laTn".parse().expect("Failed to parse a script subtag.");
    /// assert_eq!(script.as_str(), "Latn");
    /// ```
    Script,
    subtags,
    script,
    subtags_script,
    4..=4,
    s,
    s.is_ascii_alphabetic(),
    s.to_ascii_titlecase(),
    InvalidSubtag,
    ["Latn"],
    ["Latin"],
);
