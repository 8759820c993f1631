//! Separator-based notation tokenizer.
//!
//! A single left-to-right scan; separator glyphs end the current token and are
//! discarded. Runs in linear time on any input.

use crate::grammar::is_separator;

/// Splits a notation body into trimmed, non-empty tokens.
pub fn tokenize(body: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (index, c) in body.char_indices() {
        if is_separator(c) {
            push_trimmed(&mut tokens, &body[start..index]);
            start = index + c.len_utf8();
        }
    }
    push_trimmed(&mut tokens, &body[start..]);

    tokens
}

fn push_trimmed<'a>(tokens: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        tokens.push(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn splits_on_every_separator_glyph() {
        assert_eq!(
            tokenize("a>b<c=d/e.f:g|h&i^j_k"),
            vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"]
        );
    }

    #[test]
    fn drops_empty_and_whitespace_pieces() {
        assert_eq!(tokenize(">>a..  b //"), vec!["a", "b"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize(" / ").is_empty());
    }

    #[test]
    fn keeps_non_separator_operators_inside_tokens() {
        assert_eq!(tokenize("Ik!co?#x"), vec!["Ik!co?#x"]);
    }

    #[test]
    fn inner_whitespace_is_not_a_separator() {
        assert_eq!(tokenize(" ta ct / re "), vec!["ta ct", "re"]);
    }

    #[test]
    fn handles_multibyte_text() {
        assert_eq!(tokenize("λ>ça"), vec!["λ", "ça"]);
    }
}
