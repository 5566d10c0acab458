// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

pub use super::errors::ParseError;
use crate::extensions::{Extensions, Private};
use crate::parser::SubtagIterator;
use crate::subtags;
use crate::LanguageTag;

use smallvec::SmallVec;

#[derive(PartialEq, Clone, Copy)]
enum ParserPosition {
    Script,
    Region,
    Variant,
}

// Parses the `language["-"script]["-"region]("-"variant)*` prefix of a tag,
// stopping at the first singleton subtag.
fn parse_identifier_from_iter(
    iter: &mut SubtagIterator,
) -> Result<
    (
        subtags::Language,
        Option<subtags::Script>,
        Option<subtags::Region>,
        subtags::Variants,
    ),
    ParseError,
> {
    let mut script = None;
    let mut region = None;
    let mut variants = SmallVec::<[subtags::Variant; 1]>::new();

    let language = if let Some(subtag) = iter.next() {
        subtags::Language::try_from_utf8(subtag)?
    } else {
        return Err(ParseError::InvalidLanguage);
    };

    let mut position = ParserPosition::Script;

    while let Some(subtag) = iter.peek() {
        if subtag.len() == 1 {
            break;
        }

        if position == ParserPosition::Script {
            if let Ok(s) = subtags::Script::try_from_utf8(subtag) {
                script = Some(s);
                position = ParserPosition::Region;
            } else if let Ok(r) = subtags::Region::try_from_utf8(subtag) {
                region = Some(r);
                position = ParserPosition::Variant;
            } else if let Ok(v) = subtags::Variant::try_from_utf8(subtag) {
                variants.push(v);
                position = ParserPosition::Variant;
            } else {
                return Err(ParseError::InvalidSubtag);
            }
        } else if position == ParserPosition::Region {
            if let Ok(r) = subtags::Region::try_from_utf8(subtag) {
                region = Some(r);
                position = ParserPosition::Variant;
            } else if let Ok(v) = subtags::Variant::try_from_utf8(subtag) {
                variants.push(v);
                position = ParserPosition::Variant;
            } else {
                return Err(ParseError::InvalidSubtag);
            }
        } else if let Ok(v) = subtags::Variant::try_from_utf8(subtag) {
            if variants.contains(&v) {
                // A repeated variant makes the tag ill-formed.
                return Err(ParseError::InvalidSubtag);
            }
            variants.push(v);
        } else {
            return Err(ParseError::InvalidSubtag);
        }
        iter.next();
    }

    Ok((
        language,
        script,
        region,
        subtags::Variants::from_small_vec_unchecked(variants),
    ))
}

pub fn parse_language_tag(t: &[u8]) -> Result<LanguageTag, ParseError> {
    let mut iter = SubtagIterator::new(t);

    // A tag may consist of a private-use sequence alone; such tags carry no
    // language and never match an available locale.
    if matches!(iter.peek(), Some(b"x") | Some(b"X")) {
        iter.next();
        let private = Private::try_from_iter(&mut iter)?;
        return Ok(LanguageTag {
            language: None,
            script: None,
            region: None,
            variants: subtags::Variants::new(),
            extensions: Extensions::from_private(private),
        });
    }

    let (language, script, region, variants) = parse_identifier_from_iter(&mut iter)?;
    let extensions = if iter.peek().is_some() {
        Extensions::try_from_iter(&mut iter)?
    } else {
        Extensions::default()
    };
    Ok(LanguageTag {
        language: Some(language),
        script,
        region,
        variants,
        extensions,
    })
}
