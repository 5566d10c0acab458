// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use serde::Deserialize;

/// One canonicalization case: `output` is the canonical form, or absent
/// when the input must be rejected.
#[derive(Debug, Deserialize)]
pub struct CanonicalizeTest {
    pub input: String,
    #[serde(default)]
    pub output: Option<String>,
}

/// One negotiation case over a requested locale list.
#[derive(Debug, Deserialize)]
pub struct SupportedTest {
    pub requested: Vec<String>,
    pub supported: Vec<String>,
}
