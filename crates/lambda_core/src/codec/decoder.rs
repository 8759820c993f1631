//! Notation to gloss decoder.
//!
//! # Responsibility
//! - Label a leading domain prefix and message-type operator.
//! - Resolve each token through the symbol table, prefixed symbols, pronouns.
//!
//! # Invariants
//! - At most one domain label and one operator label are emitted, in that order.
//! - Unresolved tokens pass through unchanged.
//! - Empty meanings are dropped so glosses stay single-space separated.
//! - `decode` never fails.

use super::tokenizer::tokenize;
use crate::grammar::{pronoun_gloss, strip_domain_prefix, LeadingOperator};
use crate::vocab::SymbolTable;
use log::debug;

/// Decoder over a borrowed symbol table.
pub struct Decoder<'a, T: SymbolTable + ?Sized> {
    table: &'a T,
}

impl<'a, T: SymbolTable + ?Sized> Decoder<'a, T> {
    pub fn new(table: &'a T) -> Self {
        Self { table }
    }

    /// Translates notation into a human-readable gloss.
    ///
    /// # Contract
    /// - Empty input returns an empty string.
    /// - Output is `(<domain>) (<operator>) <token glosses>`, each part optional,
    ///   trimmed of surrounding whitespace.
    pub fn decode(&self, notation: &str) -> String {
        if notation.is_empty() {
            return String::new();
        }

        let mut result = String::new();
        let mut body = notation;

        if let Some((domain, rest)) = strip_domain_prefix(body) {
            result.push_str(&format!("({}) ", domain.name));
            body = rest;
        }

        if let Some(op) = body.chars().next().and_then(LeadingOperator::from_char) {
            result.push_str(&format!("({}) ", op.label()));
            body = &body[op.glyph().len_utf8()..];
        }

        let tokens = tokenize(body);
        let mut unresolved = 0usize;
        let glosses: Vec<&str> = tokens
            .iter()
            .map(|&token| {
                self.resolve_token(token).unwrap_or_else(|| {
                    unresolved += 1;
                    token
                })
            })
            .filter(|gloss| !gloss.is_empty())
            .collect();

        result.push_str(&glosses.join(" "));
        debug!(
            "event=decode module=codec tokens={} unresolved={}",
            tokens.len(),
            unresolved
        );

        result.trim().to_string()
    }

    /// Resolves one token; `None` means it should pass through verbatim.
    fn resolve_token<'t>(&'t self, token: &str) -> Option<&'t str> {
        if let Some(meaning) = self.table.meaning_of(token) {
            return Some(meaning);
        }

        if let Some((_, base)) = strip_domain_prefix(token) {
            if let Some(meaning) = self.table.meaning_of(base) {
                return Some(meaning);
            }
        }

        pronoun_gloss(token)
    }
}

#[cfg(test)]
mod tests {
    use super::Decoder;
    use crate::model::atom::Atom;
    use crate::vocab::Vocabulary;

    fn vocab() -> Vocabulary {
        Vocabulary::from_atoms(vec![
            Atom::new("co", "consciousness"),
            Atom::new("fx", "fix"),
            Atom::new("It", "insight"),
        ])
    }

    #[test]
    fn token_with_domain_prefix_resolves_base_symbol() {
        let vocab = vocab();
        let decoder = Decoder::new(&vocab);
        assert_eq!(decoder.resolve_token("c:fx"), Some("fix"));
        assert_eq!(decoder.resolve_token("c:zz"), None);
    }

    #[test]
    fn atoms_take_precedence_over_pronouns() {
        let vocab = vocab();
        let decoder = Decoder::new(&vocab);
        assert_eq!(decoder.resolve_token("It"), Some("insight"));
        assert_eq!(decoder.resolve_token("Ik"), Some("I know"));
    }

    #[test]
    fn only_one_domain_prefix_is_labelled() {
        let vocab = vocab();
        let decoder = Decoder::new(&vocab);
        assert_eq!(decoder.decode("c:c:fx"), "(code) c fix");
    }

    #[test]
    fn only_one_leading_operator_is_labelled() {
        let vocab = vocab();
        let decoder = Decoder::new(&vocab);
        assert_eq!(decoder.decode("!?co"), "(assertion) ?co");
        assert_eq!(decoder.decode(".co"), "(action) consciousness");
    }

    #[test]
    fn bare_operator_yields_label_only() {
        let vocab = vocab();
        let decoder = Decoder::new(&vocab);
        assert_eq!(decoder.decode("~"), "(possibility)");
        assert_eq!(decoder.decode("v:"), "(voidborne)");
    }
}
