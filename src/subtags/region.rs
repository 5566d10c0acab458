// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

impl_tinystr_subtag!(
    /// A region subtag (examples: `"US"`, `"CN"`, `"AR"` etc.)
    ///
    /// [`Region`] represents the region subtag of a BCP-47 language tag,
    /// either two ASCII letters (stored uppercase) or three ASCII digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use intl_collator::subtags::Region;
    ///
    /// let region: Region =
    ///     "de".parse().expect("Failed to parse a region subtag.");
    /// assert_eq!(region.as_str(), "DE");
    /// ```
    Region,
    subtags,
    region,
    subtags_region,
    2..=3,
    s,
    if s.len() == 2 {
        s.is_ascii_alphabetic()
    } else {
        s.is_ascii_numeric()
    },
    if s.len() == 2 {
        s.to_ascii_uppercase()
    } else {
        s
    },
    InvalidSubtag,
    ["FR", "123"],
    ["12", "FRA", "b2"],
);

impl Region {
    /// Returns true if the Region has an alphabetic code.
    ///
    /// # Examples
    ///
    /// ```
    /// use intl_collator::subtags::region;
    ///
    /// assert!(region!("us").is_alphabetic());
    /// ```
    pub fn is_alphabetic(&self) -> bool {
        self.0.len() == 2
    }
}
