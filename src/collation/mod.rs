// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! The comparison engine behind [`Collator`](crate::Collator).
//!
//! Strings are mapped to sequences of collation elements, which are walked
//! once per significance level: primary (base letters), secondary (accents)
//! and tertiary (case). The configured sensitivity decides which of the
//! weaker levels participate.

mod elements;
mod tailor;

use crate::options::{CaseFirst, ResolvedOptions, Sensitivity, Usage};
use alloc::vec::Vec;
use core::cmp::Ordering;
use elements::{decompose, letter_weight, Element, Primary};
use smallvec::SmallVec;
use tailor::Tailoring;

// Characters skipped under ignorePunctuation.
fn is_ignorable(c: char) -> bool {
    c.is_ascii_punctuation() || c.is_whitespace()
}

/// A fully resolved comparison function over strings.
#[derive(Debug, Clone)]
pub(crate) struct Comparator {
    usage: Usage,
    sensitivity: Sensitivity,
    ignore_punctuation: bool,
    numeric: bool,
    case_first: CaseFirst,
    tailoring: Tailoring,
}

impl Comparator {
    pub(crate) fn new(resolved: &ResolvedOptions) -> Self {
        let language = resolved.locale.split('-').next().unwrap_or_default();
        Self {
            usage: resolved.usage,
            sensitivity: resolved.sensitivity,
            ignore_punctuation: resolved.ignore_punctuation,
            numeric: resolved.numeric,
            case_first: resolved.case_first,
            tailoring: Tailoring::for_language(language),
        }
    }

    /// Compares two strings under this comparator's settings.
    ///
    /// For sort usage, strings that agree on every significant level are
    /// ordered by code point so that the result is a total order; for
    /// search usage they compare equal.
    pub(crate) fn compare(&self, a: &str, b: &str) -> Ordering {
        let left = self.elements(a);
        let right = self.elements(b);

        let primary = cmp_level(&left, &right, |x, y| x.primary.cmp(&y.primary));
        if primary != Ordering::Equal {
            return primary;
        }

        // After primary equality the element sequences have equal length,
        // so the weaker levels compare index by index.
        if matches!(self.sensitivity, Sensitivity::Accent | Sensitivity::Variant) {
            let secondary = cmp_level(&left, &right, |x, y| x.secondary.cmp(&y.secondary));
            if secondary != Ordering::Equal {
                return secondary;
            }
        }
        if matches!(self.sensitivity, Sensitivity::Case | Sensitivity::Variant) {
            let tertiary = cmp_level(&left, &right, |x, y| x.tertiary.cmp(&y.tertiary));
            if tertiary != Ordering::Equal {
                return tertiary;
            }
        }

        match self.usage {
            Usage::Sort => a.cmp(b),
            Usage::Search => Ordering::Equal,
        }
    }

    fn elements(&self, input: &str) -> Vec<Element> {
        let mut out = Vec::with_capacity(input.len());
        let mut chars = input.chars().peekable();
        while let Some(c) = chars.next() {
            if self.numeric && c.is_ascii_digit() {
                let mut digits = SmallVec::<[u8; 8]>::new();
                digits.push(c as u8);
                while let Some(&d) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    digits.push(d as u8);
                    chars.next();
                }
                let significant = digits
                    .iter()
                    .position(|&d| d != b'0')
                    .unwrap_or(digits.len() - 1);
                digits.drain(..significant);
                out.push(Element {
                    primary: Primary::Numeric(digits),
                    secondary: 0,
                    tertiary: 0,
                });
                continue;
            }
            if self.ignore_punctuation && is_ignorable(c) {
                continue;
            }
            self.push_letter(c, &mut out);
        }
        out
    }

    fn push_letter(&self, c: char, out: &mut Vec<Element>) {
        let lower = c.to_lowercase().next().unwrap_or(c);
        let tertiary = self.case_rank(c);

        if let Some(primary) = self.tailoring.primary(lower) {
            out.push(Element {
                primary: Primary::Letter(primary),
                secondary: 0,
                tertiary,
            });
            return;
        }

        match decompose(lower) {
            Some(base) => {
                let mut bases = base.chars();
                if let Some(first) = bases.next() {
                    out.push(Element {
                        primary: Primary::Letter(letter_weight(first)),
                        // The code points decompose covers all fit in u16.
                        secondary: lower as u16,
                        tertiary,
                    });
                }
                for rest in bases {
                    out.push(Element {
                        primary: Primary::Letter(letter_weight(rest)),
                        secondary: 0,
                        tertiary,
                    });
                }
            }
            None => out.push(Element {
                primary: Primary::Letter(letter_weight(lower)),
                secondary: 0,
                tertiary,
            }),
        }
    }

    // 0 sorts first. Caseless characters take the same rank as upper case.
    fn case_rank(&self, c: char) -> u8 {
        let lower_first = self.case_first == CaseFirst::Lower;
        if c.is_lowercase() == lower_first {
            0
        } else {
            1
        }
    }
}

fn cmp_level<F>(left: &[Element], right: &[Element], weight: F) -> Ordering
where
    F: Fn(&Element, &Element) -> Ordering,
{
    for (x, y) in left.iter().zip(right.iter()) {
        let ord = weight(x, y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    left.len().cmp(&right.len())
}
