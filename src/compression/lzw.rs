//! Dictionary compressor for share-code payloads.
//!
//! Single-pass adaptive scheme over `char`s: codes 0-255 stand for literal
//! characters, dictionary codes start at 256 and grow by one per inserted
//! phrase, and every code is emitted as the `char` with that numeric value.
//! The code space is unbounded, so input characters at or above U+0100 share
//! it with dictionary entries, and a long enough input can push a code into
//! the surrogate gap where no `char` exists; `compress` reports that as an
//! error instead of producing an invalid string.

use std::collections::HashMap;

use crate::errors::{AppError, AppResult};

const FIRST_DICT_CODE: u32 = 256;

/// Compresses `input` so that [`decompress`] restores it exactly.
pub fn compress(input: &str) -> AppResult<String> {
    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return Ok(String::new());
    };

    let mut dict: HashMap<String, u32> = HashMap::new();
    let mut next_code = FIRST_DICT_CODE;
    let mut phrase = first.to_string();
    let mut out = String::new();

    for curr in chars {
        let mut extended = phrase.clone();
        extended.push(curr);
        if dict.contains_key(&extended) {
            phrase = extended;
        } else {
            push_code(&mut out, &phrase, &dict)?;
            dict.insert(extended, next_code);
            next_code += 1;
            phrase = curr.to_string();
        }
    }
    push_code(&mut out, &phrase, &dict)?;

    Ok(out)
}

/// Emits the code for a finished phrase: the literal character value for
/// single-character phrases, the dictionary code otherwise.
fn push_code(out: &mut String, phrase: &str, dict: &HashMap<String, u32>) -> AppResult<()> {
    let mut phrase_chars = phrase.chars();
    let code = match (phrase_chars.next(), phrase_chars.next()) {
        (Some(only), None) => only as u32,
        _ => *dict
            .get(phrase)
            .ok_or_else(|| AppError::EncodeFailure("phrase missing from dictionary".into()))?,
    };

    match char::from_u32(code) {
        Some(symbol) => {
            out.push(symbol);
            Ok(())
        }
        None => Err(AppError::EncodeFailure(format!(
            "dictionary code {code} has no character representation"
        ))),
    }
}

/// Inverse of [`compress`], rebuilding the dictionary from previously decoded
/// output alone. Input that was not produced by the paired compressor yields
/// garbage rather than an error; callers validate the reconstructed text.
pub fn decompress(input: &str) -> String {
    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut dict: HashMap<u32, String> = HashMap::new();
    let mut next_code = FIRST_DICT_CODE;
    let mut curr_char = first;
    let mut old_phrase = first.to_string();
    let mut out = old_phrase.clone();

    for symbol in chars {
        let code = symbol as u32;
        let phrase = if code < FIRST_DICT_CODE {
            symbol.to_string()
        } else {
            match dict.get(&code) {
                Some(known) => known.clone(),
                // The code being defined right now: previous phrase plus its
                // own first character.
                None => {
                    let mut pending = old_phrase.clone();
                    pending.push(curr_char);
                    pending
                }
            }
        };

        out.push_str(&phrase);
        curr_char = phrase.chars().next().unwrap_or(curr_char);

        let mut entry = old_phrase.clone();
        entry.push(curr_char);
        dict.insert(next_code, entry);
        next_code += 1;

        old_phrase = phrase;
    }

    out
}
