// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Locale-aware string comparison.
//!
//! This crate provides a [`Collator`] that compares strings according to
//! the conventions of a negotiated locale, together with the machinery the
//! negotiation rests on: [BCP-47](https://tools.ietf.org/html/bcp47)
//! language tag parsing and canonicalization ([`LanguageTag`]) and lookup
//! matching against the available locales ([`matcher`]).
//!
//! # Examples
//!
//! ```
//! use intl_collator::{Collator, CollatorOptions};
//!
//! let collator = Collator::new(&"en-US".into(), CollatorOptions::new())
//!     .expect("locale list is valid");
//!
//! let mut fruits = ["cherry", "apple", "banana"];
//! let compare = collator.compare_fn();
//! fruits.sort_by(|a, b| compare.order(a, b));
//!
//! assert_eq!(fruits, ["apple", "banana", "cherry"]);
//! assert_eq!(collator.resolved_options().locale, "en-US");
//! ```
//!
//! Language tags can be parsed and canonicalized on their own:
//!
//! ```
//! use intl_collator::LanguageTag;
//!
//! let tag: LanguageTag = "eN-lAtN-uS".parse().expect("well-formed tag");
//! assert_eq!(tag.to_string(), "en-Latn-US");
//! ```

// https://github.com/unicode-org/icu4x/blob/main/documents/process/boilerplate.md#library-annotations
#![cfg_attr(not(any(test, doc)), no_std)]
#![cfg_attr(
    not(test),
    deny(
        clippy::indexing_slicing,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::exhaustive_structs,
        clippy::exhaustive_enums,
        clippy::trivially_copy_pass_by_ref,
        missing_debug_implementations,
    )
)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod helpers;

pub mod canonicalizer;
mod collation;
mod collator;
mod data;
mod error;
pub mod extensions;
mod langtag;
pub mod matcher;
pub mod options;
mod parser;
pub mod subtags;

pub use canonicalizer::TransformResult;
pub use collator::{Collate, Collator, CompareFn};
pub use error::{CollatorError, ErrorKind, HostError};
pub use langtag::LanguageTag;
pub use matcher::LocalesArg;
pub use options::{CaseFirst, CollatorOptions, ResolvedOptions, Sensitivity, Usage};
pub use parser::ParseError;
