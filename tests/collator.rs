// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use core::cell::Cell;
use core::fmt;

use intl_collator::matcher::{ArrayLike, LocaleValue, LocalesArg, Stringify};
use intl_collator::{
    CaseFirst, Collate, Collator, CollatorError, CollatorOptions, ErrorKind, HostError,
    Sensitivity, Usage,
};

#[derive(Debug)]
struct Boom(&'static str);

impl fmt::Display for Boom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for Boom {}

fn boom(message: &'static str) -> HostError {
    Box::new(Boom(message))
}

/// A host value that counts how often it is coerced to a string.
struct CountedValue {
    value: &'static str,
    fail: Option<&'static str>,
    coercions: Cell<usize>,
}

impl CountedValue {
    fn ok(value: &'static str) -> Self {
        Self {
            value,
            fail: None,
            coercions: Cell::new(0),
        }
    }

    fn failing(message: &'static str) -> Self {
        Self {
            value: "",
            fail: Some(message),
            coercions: Cell::new(0),
        }
    }
}

impl Stringify for CountedValue {
    fn stringify(&self) -> Result<String, HostError> {
        self.coercions.set(self.coercions.get() + 1);
        match self.fail {
            Some(message) => Err(boom(message)),
            None => Ok(self.value.into()),
        }
    }
}

/// An array-like with holes: slots 0, 1 and 3 hold locales, slot 2 is empty.
struct HoleyList;

impl ArrayLike for HoleyList {
    fn len(&self) -> Result<usize, HostError> {
        Ok(4)
    }

    fn get(&self, index: usize) -> Result<Option<LocaleValue>, HostError> {
        Ok(match index {
            0 => Some(LocaleValue::String("es".into())),
            1 => Some(LocaleValue::String("en".into())),
            3 => Some(LocaleValue::String("de".into())),
            _ => None,
        })
    }
}

struct ThrowingLength;

impl ArrayLike for ThrowingLength {
    fn len(&self) -> Result<usize, HostError> {
        Err(boom("length failed"))
    }

    fn get(&self, _index: usize) -> Result<Option<LocaleValue>, HostError> {
        Ok(None)
    }
}

struct ThrowingElement;

impl ArrayLike for ThrowingElement {
    fn len(&self) -> Result<usize, HostError> {
        Ok(2)
    }

    fn get(&self, index: usize) -> Result<Option<LocaleValue>, HostError> {
        match index {
            0 => Ok(Some(LocaleValue::String("en".into()))),
            _ => Err(boom("element failed")),
        }
    }
}

struct NumberEntry;

impl ArrayLike for NumberEntry {
    fn len(&self) -> Result<usize, HostError> {
        Ok(1)
    }

    fn get(&self, _index: usize) -> Result<Option<LocaleValue>, HostError> {
        Ok(Some(LocaleValue::Other))
    }
}

fn collator(locales: &LocalesArg, options: CollatorOptions) -> Collator {
    Collator::new(locales, options).expect("constructible")
}

#[test]
fn test_compare_is_ternary() {
    let c = collator(&"en".into(), CollatorOptions::new());
    assert_eq!(c.compare("a", "b"), -1);
    assert_eq!(c.compare("b", "a"), 1);
    assert_eq!(c.compare("a", "a"), 0);
    assert_eq!(c.compare("", ""), 0);
}

#[test]
fn test_base_sensitivity_case_order() {
    let options = CollatorOptions {
        sensitivity: Some(Sensitivity::Base),
        ..Default::default()
    };
    let c = collator(&"en".into(), options);
    assert_eq!(c.compare("A", "a"), -1);
    assert_eq!(c.compare("a", "A"), 1);
}

#[test]
fn test_search_usage_equates_variants() {
    let options = CollatorOptions {
        usage: Some(Usage::Search),
        sensitivity: Some(Sensitivity::Base),
        ..Default::default()
    };
    let c = collator(&"en".into(), options);
    assert_eq!(c.compare("A", "a"), 0);
    assert_eq!(c.compare("a", "á"), 0);
    assert_eq!(c.compare("a", "b"), -1);
}

#[test]
fn test_numeric_option() {
    let options = CollatorOptions {
        numeric: Some(true),
        ..Default::default()
    };
    let c = collator(&"en".into(), options);
    assert_eq!(c.compare("2", "10"), -1);
    assert_eq!(c.compare("file10", "file2"), 1);

    let plain = collator(&"en".into(), CollatorOptions::new());
    assert_eq!(plain.compare("2", "10"), 1);
}

#[test]
fn test_numeric_via_extension() {
    let c = collator(&"en-u-kn-true".into(), CollatorOptions::new());
    assert_eq!(c.compare("2", "10"), -1);
    assert_eq!(c.resolved_options().locale, "en-u-kn-true");
}

#[test]
fn test_ignore_punctuation() {
    let options = CollatorOptions {
        ignore_punctuation: Some(true),
        usage: Some(Usage::Search),
        ..Default::default()
    };
    let c = collator(&"en".into(), options);
    assert_eq!(c.compare("co-op", "coop"), 0);
}

#[test]
fn test_danish_tailoring_applies() {
    let da = collator(&"da".into(), CollatorOptions::new());
    assert_eq!(da.compare("z", "æ"), -1);
    assert_eq!(da.compare("æ", "ø"), -1);
    assert_eq!(da.compare("ø", "å"), -1);

    let en = collator(&"en".into(), CollatorOptions::new());
    assert_eq!(en.compare("æ", "z"), -1);
}

#[test]
fn test_case_first() {
    let options = CollatorOptions {
        case_first: Some(CaseFirst::Lower),
        ..Default::default()
    };
    let c = collator(&"en".into(), options);
    assert_eq!(c.compare("a", "A"), -1);

    let c = collator(&"en-u-kf-upper".into(), CollatorOptions::new());
    assert_eq!(c.compare("A", "a"), -1);
    assert_eq!(c.resolved_options().locale, "en-u-kf-upper");
    assert_eq!(c.resolved_options().case_first, CaseFirst::Upper);
}

#[test]
fn test_compare_fn_per_instance() {
    let a = collator(&"en".into(), CollatorOptions::new());
    let b = collator(&"en".into(), CollatorOptions::new());

    // Handles from the same instance are the same bound function; handles
    // from equal but distinct instances are not.
    assert!(a.compare_fn().instance_eq(&a.compare_fn()));
    assert!(!a.compare_fn().instance_eq(&b.compare_fn()));

    let bound = a.compare_fn();
    drop(a);
    assert_eq!(bound.call("apple", "banana"), -1);
}

#[test]
fn test_compare_fn_sorts() {
    let c = collator(&"en".into(), CollatorOptions::new());
    let compare = c.compare_fn();
    let mut words = ["cherry", "apple", "banana"];
    words.sort_by(|a, b| compare.order(a, b));
    assert_eq!(words, ["apple", "banana", "cherry"]);
}

#[test]
fn test_coercion_order_and_short_circuit() {
    let c = collator(&"en".into(), CollatorOptions::new());

    let x = CountedValue::ok("a");
    let y = CountedValue::ok("b");
    assert_eq!(c.compare_values(&x, &y).unwrap(), -1);
    assert_eq!(x.coercions.get(), 1);
    assert_eq!(y.coercions.get(), 1);

    let x = CountedValue::failing("first argument failed");
    let y = CountedValue::ok("b");
    let err = c.compare_values(&x, &y).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Host);
    assert_eq!(err.to_string(), "first argument failed");
    assert_eq!(x.coercions.get(), 1);
    // The failure short-circuits before the second value is touched.
    assert_eq!(y.coercions.get(), 0);
}

#[test]
fn test_resolved_options_is_fresh_snapshot() {
    let c = collator(&"en".into(), CollatorOptions::new());
    let mut snapshot = c.resolved_options();
    snapshot.locale = "zz".into();
    snapshot.numeric = true;
    assert_eq!(c.resolved_options().locale, "en");
    assert!(!c.resolved_options().numeric);
}

#[test]
fn test_collate_trait_object() {
    let c = collator(&"en".into(), CollatorOptions::new());
    let dyn_collate: &dyn Collate = &c;
    assert_eq!(dyn_collate.compare("a", "b"), -1);
    assert_eq!(dyn_collate.resolved_options().locale, "en");
}

#[test]
fn test_receiver_recovery() {
    let c = collator(&"en".into(), CollatorOptions::new());
    assert_eq!(
        Collator::from_receiver(Some(&c), "Collator.compare")
            .unwrap()
            .compare("a", "b"),
        -1
    );

    let foreign = String::from("not a collator");
    let err = Collator::from_receiver(Some(&foreign), "Collator.compare").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(
        err.to_string(),
        "Collator.compare called on value that's not an object initialized as a Collator"
    );

    let err = Collator::from_receiver(None, "Collator.resolvedOptions").unwrap_err();
    assert!(matches!(
        err,
        CollatorError::UninitializedCollator {
            method: "Collator.resolvedOptions"
        }
    ));
}

#[test]
fn test_array_like_with_holes() {
    let locales = LocalesArg::List(Box::new(HoleyList));
    let supported = Collator::supported_locales_of(&locales).unwrap();
    assert_eq!(supported, ["es", "en", "de"]);
}

#[test]
fn test_array_like_failures_propagate() {
    let err = Collator::supported_locales_of(&LocalesArg::List(Box::new(ThrowingLength)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Host);
    assert_eq!(err.to_string(), "length failed");

    let err = Collator::supported_locales_of(&LocalesArg::List(Box::new(ThrowingElement)))
        .unwrap_err();
    assert_eq!(err.to_string(), "element failed");
}

#[test]
fn test_non_string_entry_is_type_error() {
    let err =
        Collator::supported_locales_of(&LocalesArg::List(Box::new(NumberEntry))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(err.to_string(), "locale value must be a string or object");
}

#[test]
fn test_stringified_locale_entry() {
    struct TagObject;
    impl Stringify for TagObject {
        fn stringify(&self) -> Result<String, HostError> {
            Ok("de-CH".into())
        }
    }

    struct SingleObject;
    impl ArrayLike for SingleObject {
        fn len(&self) -> Result<usize, HostError> {
            Ok(1)
        }
        fn get(&self, _index: usize) -> Result<Option<LocaleValue>, HostError> {
            Ok(Some(LocaleValue::Stringify(Box::new(TagObject))))
        }
    }

    let supported =
        Collator::supported_locales_of(&LocalesArg::List(Box::new(SingleObject))).unwrap();
    assert_eq!(supported, ["de-CH"]);
}

#[test]
fn test_supported_locales_of_scalars() {
    assert!(Collator::supported_locales_of(&LocalesArg::Undefined)
        .unwrap()
        .is_empty());
    // A bare number coerces to an object with no entries.
    assert!(Collator::supported_locales_of(&LocalesArg::Ignored)
        .unwrap()
        .is_empty());
}
