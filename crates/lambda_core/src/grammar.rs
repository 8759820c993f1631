//! Compiled-in notation grammar: operator glyphs, domain prefixes, pronouns.
//!
//! # Invariants
//! - Tables are fixed at compile time and never loaded from data.
//! - Slices are scanned in declared order; the first match wins.
//! - Domain prefixes are mutually exclusive two-character strings. A new prefix
//!   must keep that property or be placed ahead of any prefix it could shadow.

/// One operator glyph and its human label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    pub glyph: &'static str,
    pub label: &'static str,
}

const fn op(glyph: &'static str, label: &'static str) -> Operator {
    Operator { glyph, label }
}

/// Every operator glyph recognized by the notation.
pub const OPERATORS: &[Operator] = &[
    op("!", "assertion/fact"),
    op("?", "query/question"),
    op(".", "action/command"),
    op("~", "possibility/maybe"),
    op("&", "conjunction/and"),
    op("|", "disjunction/or"),
    op("^", "confidence high"),
    op("_", "confidence low"),
    op(">", "implies/causes"),
    op("<", "caused by"),
    op("=", "equals/is"),
    op("/", "about/regarding"),
    op(":", "context/in domain"),
    op("@", "at/location"),
    op("#", "reference/tag"),
    op("[]", "list/group"),
    op("()", "sub-expression"),
    op("{}", "metadata"),
];

/// Returns the label for an operator glyph.
pub fn operator_label(glyph: &str) -> Option<&'static str> {
    OPERATORS
        .iter()
        .find(|op| op.glyph == glyph)
        .map(|op| op.label)
}

/// Glyphs that separate tokens inside a notation body.
pub const SEPARATOR_GLYPHS: &[char] = &['>', '<', '=', '/', '.', ':', '|', '&', '^', '_'];

pub fn is_separator(c: char) -> bool {
    SEPARATOR_GLYPHS.contains(&c)
}

/// Message-type operator allowed at the very start of a notation body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadingOperator {
    Assertion,
    Query,
    Action,
    Possibility,
}

impl LeadingOperator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '!' => Some(Self::Assertion),
            '?' => Some(Self::Query),
            '.' => Some(Self::Action),
            '~' => Some(Self::Possibility),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Assertion => '!',
            Self::Query => '?',
            Self::Action => '.',
            Self::Possibility => '~',
        }
    }

    /// Short label emitted by the decoder, without parentheses.
    pub fn label(self) -> &'static str {
        match self {
            Self::Assertion => "assertion",
            Self::Query => "query",
            Self::Action => "action",
            Self::Possibility => "possibility",
        }
    }
}

/// One domain prefix and the domain it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    pub prefix: &'static str,
    pub name: &'static str,
}

const fn domain(prefix: &'static str, name: &'static str) -> Domain {
    Domain { prefix, name }
}

pub const DOMAINS: &[Domain] = &[
    domain("v:", "voidborne"),
    domain("c:", "code"),
    domain("s:", "science"),
    domain("e:", "emotion"),
    domain("o:", "social"),
];

/// Splits a leading domain prefix off `text`.
///
/// Only the first matching table entry is applied.
pub fn strip_domain_prefix(text: &str) -> Option<(&'static Domain, &str)> {
    DOMAINS.iter().find_map(|domain| {
        text.strip_prefix(domain.prefix).map(|rest| (domain, rest))
    })
}

/// Pronoun and pronoun-verb contractions resolved after the vocabulary.
pub const PRONOUNS: &[(&str, &str)] = &[
    ("I", "I"),
    ("U", "you"),
    ("It", "I think"),
    ("Ie", "I exist"),
    ("Iu", "I understand"),
    ("Ik", "I know"),
    ("Uk", "you know"),
    ("Ut", "you think"),
];

/// Exact, case-sensitive pronoun lookup.
pub fn pronoun_gloss(token: &str) -> Option<&'static str> {
    PRONOUNS
        .iter()
        .find(|(contraction, _)| *contraction == token)
        .map(|(_, gloss)| *gloss)
}
