//! Semantic primitive model for the compressed notation.
//!
//! # Responsibility
//! - Define the canonical atom record shared by vocabulary, encoder and decoder.
//!
//! # Invariants
//! - An atom is identified by its `symbol`; no other identity exists.
//! - Atoms are plain data and carry no lookup state of their own.

pub mod atom;
