//! Query encoder: turns search terms into the line sent to the engine.
//!
//! cmigemo treats a capital letter as the start of a new word segment, so
//! each term is capitalised and the terms are glued together without
//! separators: `["app", "store"]` becomes `"AppStore"`.

use crate::types::SearchTerms;

/// Encode terms into the engine's wire format.
pub fn encode(terms: &SearchTerms) -> String {
    encode_words(terms.as_slice().iter().map(String::as_str))
}

/// Like [`encode`] but over any sequence of words. A word containing
/// whitespace is split first so each part is capitalised.
pub fn encode_words<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for word in words.into_iter().flat_map(str::split_whitespace) {
        push_capitalised(&mut out, word);
    }
    out
}

fn push_capitalised(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        // to_uppercase can expand ('ß' -> "SS"); caseless chars map to themselves
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}
