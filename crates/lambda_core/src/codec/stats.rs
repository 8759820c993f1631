//! Size comparison between natural text and its notation.

/// Character counts of one encoding.
///
/// Counts are Unicode scalar values, so multi-byte glyphs count once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    pub natural_chars: usize,
    pub notation_chars: usize,
}

impl CompressionStats {
    pub fn measure(natural: &str, notation: &str) -> Self {
        Self {
            natural_chars: natural.chars().count(),
            notation_chars: notation.chars().count(),
        }
    }

    /// Natural length divided by notation length; `0.0` for empty notation.
    pub fn ratio(&self) -> f64 {
        if self.notation_chars == 0 {
            return 0.0;
        }
        self.natural_chars as f64 / self.notation_chars as f64
    }

    /// Characters saved by the notation; negative when the notation is longer.
    pub fn saved_chars(&self) -> isize {
        self.natural_chars as isize - self.notation_chars as isize
    }
}
