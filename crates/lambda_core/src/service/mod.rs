//! Core use-case services.
//!
//! # Responsibility
//! - Combine vocabulary, codecs and envelope into caller-facing entry points.
//! - Keep process-wide wiring out of the codec modules.

pub mod codec_service;
pub mod default_codec;
