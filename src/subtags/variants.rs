// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use super::Variant;

use alloc::vec::Vec;
use core::ops::Deref;
use smallvec::SmallVec;

/// A list of variants (examples: `["macos", "posix"]`, etc.)
///
/// [`Variants`] stores a list of [`Variant`] subtags in the order they
/// appeared in the source tag. Duplicates are rejected at parse time, so a
/// well-formed list never contains the same variant twice.
///
/// # Examples
///
/// ```
/// use intl_collator::subtags::{variant, Variants};
///
/// let variants = Variants::from_vec_unchecked(vec![
///     variant!("posix"),
///     variant!("macos"),
/// ]);
/// assert_eq!(variants.to_string(), "posix-macos");
/// ```
#[derive(Default, Debug, PartialEq, Eq, Clone, Hash, PartialOrd, Ord)]
pub struct Variants(SmallVec<[Variant; 1]>);

impl Variants {
    /// Returns a new empty list of variants. Same as [`default()`](Default::default()).
    #[inline]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Creates a new [`Variants`] set from a single [`Variant`].
    ///
    /// # Examples
    ///
    /// ```
    /// use intl_collator::subtags::{variant, Variants};
    ///
    /// let variants = Variants::from_variant(variant!("posix"));
    /// ```
    #[inline]
    pub fn from_variant(variant: Variant) -> Self {
        let mut v = SmallVec::new();
        v.push(variant);
        Self(v)
    }

    /// Creates a new [`Variants`] list from a [`Vec`].
    /// The caller is expected to provide a deduplicated vector as an input.
    pub fn from_vec_unchecked(input: Vec<Variant>) -> Self {
        Self(input.into_iter().collect())
    }

    pub(crate) fn from_small_vec_unchecked(input: SmallVec<[Variant; 1]>) -> Self {
        Self(input)
    }

    /// Empties the [`Variants`] list.
    ///
    /// Returns the old list.
    pub fn clear(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Whether the list of variants is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn for_each_subtag_str<E, F>(&self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        self.deref().iter().map(|t| t.as_str()).try_for_each(f)
    }
}

impl_writeable_for_subtag_list!(Variants, "posix", "macos");

impl Deref for Variants {
    type Target = [Variant];

    fn deref(&self) -> &[Variant] {
        self.0.deref()
    }
}
