//! Embedding-model input text for a palette.

use crate::tags::{emojis, tags_array, PaletteTags};

/// Joins emojis, tags and themes into one space-separated token stream.
///
/// Each distinct token appears once, at its first position.
pub fn assemble_embed_text<S: AsRef<str>>(emojis: &[S], tags: &[S], themes: &[S]) -> String {
    let mut tokens: Vec<&str> = Vec::with_capacity(emojis.len() + tags.len() + themes.len());
    for token in emojis.iter().chain(tags).chain(themes) {
        let token = token.as_ref();
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}

/// Embed text for analyzed tags plus the palette's themes.
pub fn embed_text(tags: &PaletteTags, themes: &[String]) -> String {
    assemble_embed_text(&emojis(tags), &tags_array(tags), themes)
}
