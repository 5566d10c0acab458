// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

pub mod errors;
mod langtag;

pub use errors::ParseError;
pub use langtag::*;

// Returns the prefix of `slice` up to, but not including, the first
// separator byte.
fn skip_before_separator(slice: &[u8]) -> &[u8] {
    let end = slice
        .iter()
        .position(|b| matches!(b, b'-'))
        .unwrap_or(slice.len());
    // Notice: this slice may be empty for cases like `"en-"` or `"en--US"`
    #[allow(clippy::indexing_slicing)] // end <= slice.len() by construction
    &slice[..end]
}

// `SubtagIterator` is a helper iterator for [`LanguageTag`] parsing.
//
// It is eager and fallible, allowing the parser to reject invalid slices
// such as `"-"`, `"-en"`, `"en-"` etc.
//
// Alongside the typical `Iterator` API it provides `peek`, which the
// position-machine parser leans on heavily.
#[derive(Copy, Clone, Debug)]
pub struct SubtagIterator<'a> {
    remaining: &'a [u8],
    // Invariant: current is a prefix of remaining
    current: Option<&'a [u8]>,
}

impl<'a> SubtagIterator<'a> {
    pub fn new(rest: &'a [u8]) -> Self {
        Self {
            remaining: rest,
            current: Some(skip_before_separator(rest)),
        }
    }

    pub fn peek(&self) -> Option<&'a [u8]> {
        self.current
    }
}

impl<'a> Iterator for SubtagIterator<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.current?;

        self.current = if result.len() < self.remaining.len() {
            // There is more after `result`, which by the invariant starts
            // with a separator.
            #[allow(clippy::indexing_slicing)] // result is a proper prefix
            {
                self.remaining = &self.remaining[result.len() + 1..];
            }
            Some(skip_before_separator(self.remaining))
        } else {
            None
        };
        Some(result)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn slice_to_str(input: &[u8]) -> &str {
        core::str::from_utf8(input).unwrap()
    }

    #[test]
    fn subtag_iterator_peek_test() {
        let slice = "de-at-u-ca-foobar";
        let mut si = SubtagIterator::new(slice.as_bytes());

        assert_eq!(si.peek().map(slice_to_str), Some("de"));
        assert_eq!(si.peek().map(slice_to_str), Some("de"));
        assert_eq!(si.next().map(slice_to_str), Some("de"));

        assert_eq!(si.peek().map(slice_to_str), Some("at"));
        assert_eq!(si.peek().map(slice_to_str), Some("at"));
        assert_eq!(si.next().map(slice_to_str), Some("at"));
    }

    #[test]
    fn subtag_iterator_test() {
        let slice = "";
        let mut si = SubtagIterator::new(slice.as_bytes());
        assert_eq!(si.next().map(slice_to_str), Some(""));

        let slice = "-";
        let mut si = SubtagIterator::new(slice.as_bytes());
        assert_eq!(si.next().map(slice_to_str), Some(""));

        let slice = "-en";
        let mut si = SubtagIterator::new(slice.as_bytes());
        assert_eq!(si.next().map(slice_to_str), Some(""));
        assert_eq!(si.next().map(slice_to_str), Some("en"));
        assert_eq!(si.next(), None);

        let slice = "en";
        let si = SubtagIterator::new(slice.as_bytes());
        assert_eq!(si.map(slice_to_str).collect::<Vec<_>>(), vec!["en",]);

        let slice = "en-";
        let si = SubtagIterator::new(slice.as_bytes());
        assert_eq!(si.map(slice_to_str).collect::<Vec<_>>(), vec!["en", "",]);

        let slice = "--";
        let mut si = SubtagIterator::new(slice.as_bytes());
        assert_eq!(si.next().map(slice_to_str), Some(""));
        assert_eq!(si.next().map(slice_to_str), Some(""));
        assert_eq!(si.next().map(slice_to_str), Some(""));
        assert_eq!(si.next(), None);

        let slice = "en--US";
        let si = SubtagIterator::new(slice.as_bytes());
        assert_eq!(
            si.map(slice_to_str).collect::<Vec<_>>(),
            vec!["en", "", "US",]
        );
    }

    #[test]
    fn skip_before_separator_test() {
        assert_eq!(skip_before_separator(b""), b"");
        assert_eq!(skip_before_separator(b"en"), b"en");
        assert_eq!(skip_before_separator(b"en-"), b"en");
        assert_eq!(skip_before_separator(b"en--US"), b"en");
        assert_eq!(skip_before_separator(b"-US"), b"");
        assert_eq!(skip_before_separator(b"US"), b"US");
        assert_eq!(skip_before_separator(b"-"), b"");
    }
}
