// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Locale tailorings: letters a locale orders differently from code point
//! order, expressed as primary weights inserted after `z`.

use super::elements::letter_weight;

/// The per-locale reordering applied on top of the root order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Tailoring {
    /// Code point order with accent decomposition; no reordering.
    #[default]
    Root,
    /// Danish and Norwegian: `æ`, `ø`, `å` sort after `z`, in that order.
    Danish,
    /// Swedish and Finnish: `å`, `ä`, `ö` sort after `z`, in that order.
    Swedish,
}

impl Tailoring {
    pub(crate) fn for_language(language: &str) -> Self {
        match language {
            "da" | "nb" | "nn" | "no" => Self::Danish,
            "sv" | "fi" => Self::Swedish,
            _ => Self::Root,
        }
    }

    /// The tailored primary weight for `c` (already lowercased), when this
    /// tailoring gives it one. Tailored letters do not decompose.
    pub(crate) fn primary(self, c: char) -> Option<u32> {
        let after_z: &[char] = match self {
            Self::Root => return None,
            Self::Danish => &['æ', 'ø', 'å'],
            Self::Swedish => &['å', 'ä', 'ö'],
        };
        after_z
            .iter()
            .position(|&t| t == c)
            .map(|rank| letter_weight('z') + rank as u32 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_selection() {
        assert_eq!(Tailoring::for_language("da"), Tailoring::Danish);
        assert_eq!(Tailoring::for_language("nb"), Tailoring::Danish);
        assert_eq!(Tailoring::for_language("sv"), Tailoring::Swedish);
        assert_eq!(Tailoring::for_language("fi"), Tailoring::Swedish);
        assert_eq!(Tailoring::for_language("en"), Tailoring::Root);
    }

    #[test]
    fn test_after_z() {
        let z = letter_weight('z');
        let ae = Tailoring::Danish.primary('æ').unwrap();
        let o_stroke = Tailoring::Danish.primary('ø').unwrap();
        let a_ring = Tailoring::Danish.primary('å').unwrap();
        assert!(z < ae && ae < o_stroke && o_stroke < a_ring);
        assert!(a_ring < letter_weight('{'));

        assert_eq!(Tailoring::Root.primary('æ'), None);
        assert_eq!(Tailoring::Swedish.primary('æ'), None);
    }
}
