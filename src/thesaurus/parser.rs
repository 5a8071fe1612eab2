//! Line parser for the relation-database data files.
//!
//! Each data line carries, at fixed offsets, an 8-digit zero-padded synset id
//! and a two-digit numeric category code, followed by a counted list of
//! member word-forms and a counted list of pointer relations
//! (`symbol offset pos source/target`). A trailing gloss is separated by
//! ` | `.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{GlossaError, Result};
use crate::thesaurus::synset::{PartOfSpeech, RelationKind, Synset};

/// Number of header lines at the top of a data file, skipped before parsing.
pub const DATA_HEADER_LINES: usize = 29;

lazy_static! {
    /// An alphabetic word-form run as it appears in the source format.
    static ref WORD_TOKEN: Regex = Regex::new(r"^[A-Za-z][A-Za-z_\-'./]*$").unwrap();
    /// An 8-digit zero-padded synset id.
    static ref SYNSET_ID: Regex = Regex::new(r"^[0-9]{8}$").unwrap();
}

/// Normalize a member word-form: lowercase, underscores to spaces, any
/// trailing parenthesized syntactic marker dropped.
fn normalize_word(raw: &str) -> String {
    let raw = match raw.find('(') {
        Some(index) => &raw[..index],
        None => raw,
    };
    raw.replace('_', " ").to_lowercase()
}

/// Parse one data line into a synset, retaining only relation kinds in
/// `allowed`.
///
/// A malformed line yields a parse error; the loader skips it and continues.
pub fn parse_data_line(
    line: &str,
    pos: PartOfSpeech,
    allowed: &[RelationKind],
) -> Result<Synset> {
    if line.len() < 12 {
        return Err(GlossaError::parse(format!("data line too short: {line:?}")));
    }
    // Indexed with `get`: a multi-byte character straddling a field boundary
    // is a malformed line, not a panic.
    let id_field = line
        .get(0..8)
        .ok_or_else(|| GlossaError::parse(format!("malformed synset id in {line:?}")))?;
    if !SYNSET_ID.is_match(id_field) {
        return Err(GlossaError::parse(format!(
            "malformed synset id {id_field:?}"
        )));
    }
    let id: u32 = id_field
        .parse()
        .map_err(|_| GlossaError::parse(format!("unparseable synset id {id_field:?}")))?;
    let category_code: u8 = line
        .get(9..11)
        .and_then(|field| field.trim().parse().ok())
        .ok_or_else(|| GlossaError::parse(format!("malformed category code in {line:?}")))?;

    // The gloss plays no part in synonym propagation.
    let body = match line.split_once(" | ") {
        Some((body, _gloss)) => body,
        None => line,
    };
    let mut tokens = body
        .get(11..)
        .filter(|rest| !rest.is_empty())
        .ok_or_else(|| GlossaError::parse(format!("data line too short: {line:?}")))?
        .split_whitespace();

    let type_letter = tokens
        .next()
        .ok_or_else(|| GlossaError::parse("missing synset type"))?;
    if type_letter.len() != 1 || type_letter.chars().next() != Some(pos.type_letter()) {
        return Err(GlossaError::parse(format!(
            "unexpected synset type {type_letter:?} for a {pos:?} file"
        )));
    }

    let mut synset = Synset::new(id, pos.category(category_code));

    let word_count = tokens
        .next()
        .and_then(|t| usize::from_str_radix(t, 16).ok())
        .ok_or_else(|| GlossaError::parse("missing or malformed word count"))?;
    for _ in 0..word_count {
        let word = tokens
            .next()
            .ok_or_else(|| GlossaError::parse("truncated word list"))?;
        if !WORD_TOKEN.is_match(word) {
            return Err(GlossaError::parse(format!("malformed word-form {word:?}")));
        }
        // Each word-form carries a lexical id we have no use for.
        tokens
            .next()
            .ok_or_else(|| GlossaError::parse("truncated word list"))?;
        synset.words.insert(normalize_word(word));
    }

    let pointer_count: usize = tokens
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| GlossaError::parse("missing or malformed pointer count"))?;
    for _ in 0..pointer_count {
        let symbol = tokens
            .next()
            .ok_or_else(|| GlossaError::parse("truncated pointer list"))?;
        let target = tokens
            .next()
            .ok_or_else(|| GlossaError::parse("truncated pointer list"))?;
        if !SYNSET_ID.is_match(target) {
            return Err(GlossaError::parse(format!(
                "malformed pointer target {target:?}"
            )));
        }
        // Pointer part-of-speech and source/target fields.
        tokens.next();
        tokens.next();
        let Some(kind) = RelationKind::from_symbol(symbol) else {
            // Unknown symbol: skip the pointer, not the line.
            continue;
        };
        if allowed.contains(&kind) {
            let target_id: u32 = target
                .parse()
                .map_err(|_| GlossaError::parse(format!("unparseable pointer id {target:?}")))?;
            synset.relations.insert((kind, target_id));
        }
    }

    Ok(synset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thesaurus::synset::VERB_SYNONYM_RELATIONS;

    #[test]
    fn test_parse_simple_line() {
        let line = "00000002 29 v 01 run 0 001 @ 00000001 v 0000 | move fast";
        let synset =
            parse_data_line(line, PartOfSpeech::Verb, VERB_SYNONYM_RELATIONS).unwrap();
        assert_eq!(synset.id, 2);
        assert!(synset.words.contains("run"));
        assert!(synset.relations.contains(&(RelationKind::Hypernym, 1)));
    }

    #[test]
    fn test_underscores_become_spaces() {
        let line = "00000005 29 v 01 run_away 0 000";
        let synset =
            parse_data_line(line, PartOfSpeech::Verb, VERB_SYNONYM_RELATIONS).unwrap();
        assert!(synset.words.contains("run away"));
    }

    #[test]
    fn test_disallowed_relation_filtered() {
        // Antonym is not in the verb allow-list.
        let line = "00000002 29 v 01 run 0 002 ! 00000009 v 0000 $ 00000003 v 0000";
        let synset =
            parse_data_line(line, PartOfSpeech::Verb, VERB_SYNONYM_RELATIONS).unwrap();
        assert_eq!(synset.relations.len(), 1);
        assert!(synset.relations.contains(&(RelationKind::VerbGroup, 3)));
    }

    #[test]
    fn test_malformed_lines_are_errors() {
        for line in [
            "",
            "garbage",
            "0000000x 29 v 01 run 0 000",
            "00000002 29 n 01 run 0 000", // wrong type letter for a verb file
            "00000002 29 v 05 run 0 000", // truncated word list
            "aaaaaaa\u{e9} 29 v 01 walk 0 000", // multi-byte char across the id field
            "00000002 2\u{e9} v 01 walk 0 000", // multi-byte char across the category field
            "00000002 29\u{e9}v 01 walk 0 000", // multi-byte synset type letter
        ] {
            assert!(
                parse_data_line(line, PartOfSpeech::Verb, VERB_SYNONYM_RELATIONS).is_err(),
                "expected parse error for {line:?}"
            );
        }
    }

    #[test]
    fn test_word_count_is_hexadecimal() {
        let line = "00000007 29 v 0a a 0 b 0 c 0 d 0 e 0 f 0 g 0 h 0 i 0 j 0 000";
        let synset =
            parse_data_line(line, PartOfSpeech::Verb, VERB_SYNONYM_RELATIONS).unwrap();
        assert_eq!(synset.words.len(), 10);
    }
}
