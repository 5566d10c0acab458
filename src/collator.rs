// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! The collator facade: locale negotiation, option resolution, and the
//! comparison entry points.

use crate::collation::Comparator;
use crate::error::CollatorError;
use crate::matcher::{self, LocalesArg, Stringify};
use crate::options::{CaseFirst, CollatorOptions, ResolvedOptions};
use crate::LanguageTag;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;
use core::cmp::Ordering;

// The state a collator and its bound compare functions share.
#[derive(Debug)]
struct CollatorInner {
    resolved: ResolvedOptions,
    comparator: Comparator,
}

/// A locale-aware string comparator.
///
/// Construction negotiates the requested locales against the available
/// ones, resolves the option bag and any `-u-kn`/`-u-kf` keywords the
/// matched request carried, and fixes the comparison behavior for the
/// lifetime of the instance.
///
/// # Examples
///
/// ```
/// use intl_collator::{Collator, CollatorOptions};
///
/// let collator = Collator::new(&"de".into(), CollatorOptions::new()).unwrap();
///
/// assert_eq!(collator.compare("a", "b"), -1);
/// assert_eq!(collator.resolved_options().locale, "de");
/// ```
#[derive(Debug, Clone)]
pub struct Collator {
    inner: Arc<CollatorInner>,
}

impl Collator {
    /// Constructs a collator for the given locales and options.
    ///
    /// Locale negotiation uses lookup matching; when no requested locale
    /// can be served, the default locale applies. Explicit options win
    /// over the matched locale's `-u-kn` and `-u-kf` keywords.
    pub fn new(locales: &LocalesArg, options: CollatorOptions) -> Result<Self, CollatorError> {
        let requested = matcher::canonicalize_locale_tags(locales)?;
        let lookup = matcher::lookup_matcher(&requested);
        let matched = lookup.matched.and_then(|index| requested.get(index));

        let kn = matched.and_then(keyword_numeric);
        let kf = matched.and_then(keyword_case_first);

        let numeric = options.numeric.or(kn).unwrap_or(false);
        let case_first = options.case_first.or(kf).unwrap_or_default();

        // Keywords the matched tag supplied and the options bag did not
        // override are reflected back in the resolved locale.
        let mut locale = lookup.available;
        let honored_kf = kf.filter(|_| options.case_first.is_none());
        let honored_kn = kn.filter(|_| options.numeric.is_none());
        if honored_kf.is_some() || honored_kn.is_some() {
            locale.push_str("-u");
            if let Some(value) = honored_kf {
                locale.push_str("-kf-");
                locale.push_str(value.as_str());
            }
            if let Some(value) = honored_kn {
                locale.push_str(if value { "-kn-true" } else { "-kn-false" });
            }
        }

        let resolved = ResolvedOptions {
            locale,
            usage: options.usage.unwrap_or_default(),
            sensitivity: options.sensitivity.unwrap_or_default(),
            ignore_punctuation: options.ignore_punctuation.unwrap_or(false),
            collation: "default".into(),
            numeric,
            case_first,
        };
        let comparator = Comparator::new(&resolved);

        Ok(Self {
            inner: Arc::new(CollatorInner {
                resolved,
                comparator,
            }),
        })
    }

    /// Compares two strings, returning exactly `-1`, `0` or `1`.
    pub fn compare(&self, x: &str, y: &str) -> i32 {
        match self.inner.comparator.compare(x, y) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Compares two caller-supplied values, coercing each to a string
    /// first.
    ///
    /// Coercion runs left to right and short-circuits: if the first value
    /// fails to coerce, the second is never touched, and the failure is
    /// propagated verbatim.
    pub fn compare_values(
        &self,
        x: &dyn Stringify,
        y: &dyn Stringify,
    ) -> Result<i32, CollatorError> {
        let x = x.stringify().map_err(CollatorError::Host)?;
        let y = y.stringify().map_err(CollatorError::Host)?;
        Ok(self.compare(&x, &y))
    }

    /// A bound compare function for this instance.
    ///
    /// Every handle returned for the same instance compares
    /// [`instance_eq`](CompareFn::instance_eq); handles from different
    /// instances never do, even when the instances were constructed with
    /// identical arguments.
    pub fn compare_fn(&self) -> CompareFn {
        CompareFn {
            inner: Arc::clone(&self.inner),
        }
    }

    /// A fresh snapshot of the locale and options this instance resolved
    /// to. Mutating the snapshot has no effect on the instance.
    pub fn resolved_options(&self) -> ResolvedOptions {
        self.inner.resolved.clone()
    }

    /// The subset of the requested locales a collator could serve without
    /// falling back to the default locale, in request order.
    ///
    /// # Examples
    ///
    /// ```
    /// use intl_collator::Collator;
    ///
    /// let supported = Collator::supported_locales_of(&["en-US", "tlh"].into()).unwrap();
    /// assert_eq!(supported, ["en-US"]);
    /// ```
    pub fn supported_locales_of(locales: &LocalesArg) -> Result<Vec<String>, CollatorError> {
        matcher::supported_locales(locales)
    }

    /// Recovers a collator from a dynamically typed method receiver.
    ///
    /// Returns a type error naming `method` when the receiver is absent or
    /// is some other type, mirroring a method being torn off and invoked
    /// on a foreign object.
    pub fn from_receiver<'a>(
        receiver: Option<&'a dyn Any>,
        method: &'static str,
    ) -> Result<&'a Self, CollatorError> {
        receiver
            .and_then(|r| r.downcast_ref::<Self>())
            .ok_or(CollatorError::UninitializedCollator { method })
    }
}

/// String comparison backed by a collator-like object. The seam for
/// wrapping or substituting a [`Collator`].
pub trait Collate {
    /// See [`Collator::compare`].
    fn compare(&self, x: &str, y: &str) -> i32;

    /// See [`Collator::resolved_options`].
    fn resolved_options(&self) -> ResolvedOptions;
}

impl Collate for Collator {
    fn compare(&self, x: &str, y: &str) -> i32 {
        Self::compare(self, x, y)
    }

    fn resolved_options(&self) -> ResolvedOptions {
        Self::resolved_options(self)
    }
}

/// A compare function bound to one [`Collator`] instance.
///
/// # Examples
///
/// ```
/// use intl_collator::{Collator, CollatorOptions};
///
/// let collator = Collator::new(&"en".into(), CollatorOptions::new()).unwrap();
/// let compare = collator.compare_fn();
///
/// let mut words = ["banana", "apple", "cherry"];
/// words.sort_by(|a, b| compare.order(a, b));
/// assert_eq!(words, ["apple", "banana", "cherry"]);
/// ```
#[derive(Debug, Clone)]
pub struct CompareFn {
    inner: Arc<CollatorInner>,
}

impl CompareFn {
    /// Compares two strings, returning exactly `-1`, `0` or `1`.
    pub fn call(&self, x: &str, y: &str) -> i32 {
        match self.inner.comparator.compare(x, y) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Compares two strings as an [`Ordering`], for use with sort APIs.
    pub fn order(&self, x: &str, y: &str) -> Ordering {
        self.inner.comparator.compare(x, y)
    }

    /// Whether two handles are bound to the same collator instance.
    pub fn instance_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

fn keyword_numeric(tag: &LanguageTag) -> Option<bool> {
    match tag.extensions.unicode_keyword("kn")? {
        None => Some(true),
        Some(value) => match value.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
    }
}

fn keyword_case_first(tag: &LanguageTag) -> Option<CaseFirst> {
    match tag.extensions.unicode_keyword("kf")??.as_str() {
        "upper" => Some(CaseFirst::Upper),
        "lower" => Some(CaseFirst::Lower),
        "false" => Some(CaseFirst::False),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Sensitivity, Usage};

    fn collator(locales: &LocalesArg, options: CollatorOptions) -> Collator {
        Collator::new(locales, options).expect("constructible")
    }

    #[test]
    fn test_default_locale_fallback() {
        let c = collator(&LocalesArg::Undefined, CollatorOptions::new());
        assert_eq!(c.resolved_options().locale, "en");

        let c = collator(&"tlh".into(), CollatorOptions::new());
        assert_eq!(c.resolved_options().locale, "en");
    }

    #[test]
    fn test_resolved_defaults() {
        let resolved = collator(&"en".into(), CollatorOptions::new()).resolved_options();
        assert_eq!(resolved.usage, Usage::Sort);
        assert_eq!(resolved.sensitivity, Sensitivity::Variant);
        assert!(!resolved.ignore_punctuation);
        assert_eq!(resolved.collation, "default");
        assert!(!resolved.numeric);
        assert_eq!(resolved.case_first, CaseFirst::False);
    }

    #[test]
    fn test_keywords_from_tag() {
        let resolved = collator(&"de-u-kn-true".into(), CollatorOptions::new()).resolved_options();
        assert!(resolved.numeric);
        assert_eq!(resolved.locale, "de-u-kn-true");

        let resolved = collator(&"de-u-kn".into(), CollatorOptions::new()).resolved_options();
        assert!(resolved.numeric);

        let resolved =
            collator(&"de-u-kf-upper-kn-false".into(), CollatorOptions::new()).resolved_options();
        assert!(!resolved.numeric);
        assert_eq!(resolved.case_first, CaseFirst::Upper);
        assert_eq!(resolved.locale, "de-u-kf-upper-kn-false");
    }

    #[test]
    fn test_options_win_over_keywords() {
        let options = CollatorOptions {
            numeric: Some(false),
            ..Default::default()
        };
        let resolved = collator(&"de-u-kn-true".into(), options).resolved_options();
        assert!(!resolved.numeric);
        // An overridden keyword is not reflected in the resolved locale.
        assert_eq!(resolved.locale, "de");
    }

    #[test]
    fn test_compare_range() {
        let c = collator(&"en".into(), CollatorOptions::new());
        assert_eq!(c.compare("a", "b"), -1);
        assert_eq!(c.compare("b", "a"), 1);
        assert_eq!(c.compare("a", "a"), 0);
    }

    #[test]
    fn test_compare_fn_identity() {
        let a = collator(&"en".into(), CollatorOptions::new());
        let b = collator(&"en".into(), CollatorOptions::new());

        assert!(a.compare_fn().instance_eq(&a.compare_fn()));
        assert!(!a.compare_fn().instance_eq(&b.compare_fn()));

        let bound = a.compare_fn();
        drop(a);
        assert_eq!(bound.call("x", "y"), -1);
    }

    #[test]
    fn test_resolved_options_snapshot() {
        let c = collator(&"en".into(), CollatorOptions::new());
        let mut first = c.resolved_options();
        first.locale = "zz".into();
        assert_eq!(c.resolved_options().locale, "en");
    }

    #[test]
    fn test_from_receiver() {
        let c = collator(&"en".into(), CollatorOptions::new());
        let recovered = Collator::from_receiver(Some(&c), "Collator.compare").unwrap();
        assert_eq!(recovered.compare("a", "b"), -1);

        let not_a_collator = 42_u32;
        let err = Collator::from_receiver(Some(&not_a_collator), "Collator.compare").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Collator.compare called on value that's not an object initialized as a Collator"
        );
        assert!(Collator::from_receiver(None, "Collator.resolvedOptions").is_err());
    }
}
