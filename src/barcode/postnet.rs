//! POSTNET symbologies
//!
//! Encodes to fixed physical dimensions: bars on a 3.6pt pitch, full bars
//! 9pt tall, half bars 3.6pt. The requested size is ignored.

use super::base::{is_numeric_length_valid, Primitive, Symbology, Vectorized};

/// Five-bar digit patterns, '1' = full bar, '0' = half bar.
const PATTERNS: [&str; 10] = [
    "11000", "00011", "00101", "00110", "01001", "01010", "01100", "10001", "10010", "10100",
];

const BAR_WIDTH: f64 = 1.44;
const BAR_PITCH: f64 = 3.6;
const FULL_HEIGHT: f64 = 9.0;
const HALF_HEIGHT: f64 = 3.6;

/// POSTNET. Digit-count variants: ZIP (5), ZIP+4 (9), delivery point (11);
/// the plain style accepts any of the three.
#[derive(Debug, Clone, Copy)]
pub struct Postnet {
    min_digits: usize,
    max_digits: usize,
}

impl Postnet {
    /// Any of ZIP, ZIP+4, or delivery point lengths.
    pub fn any() -> Self {
        Postnet {
            min_digits: 5,
            max_digits: 11,
        }
    }

    /// Exactly `n` digits.
    pub fn exact(n: usize) -> Self {
        Postnet {
            min_digits: n,
            max_digits: n,
        }
    }

    fn check_digit(cooked: &str) -> usize {
        let sum: usize = cooked.bytes().map(|b| (b - b'0') as usize).sum();
        (10 - sum % 10) % 10
    }
}

impl Symbology for Postnet {
    fn validate(&self, raw: &str) -> bool {
        let cooked = self.preprocess(raw);
        // 5, 9 and 11 are the only meaningful digit counts
        matches!(cooked.len(), 5 | 9 | 11)
            && is_numeric_length_valid(&cooked, self.min_digits, self.max_digits)
    }

    fn preprocess(&self, raw: &str) -> String {
        raw.chars()
            .filter(|c| !matches!(c, '-' | ' '))
            .collect()
    }

    fn encode(&self, cooked: &str, _checksum: bool) -> String {
        // Frame bars and checksum are structural.
        let mut out = String::from("1");
        for b in cooked.bytes() {
            out.push_str(PATTERNS[(b - b'0') as usize]);
        }
        out.push_str(PATTERNS[Self::check_digit(cooked)]);
        out.push('1');
        out
    }

    fn display_text(&self, _cooked: &str, _checksum: bool) -> String {
        // POSTNET never renders a text line
        String::new()
    }

    fn vectorize(
        &self,
        encoded: &str,
        _text: &str,
        _show_text: bool,
        _w: f64,
        _h: f64,
    ) -> Vectorized {
        let mut primitives = Vec::new();
        for (i, bar) in encoded.chars().enumerate() {
            let bar_height = if bar == '1' { FULL_HEIGHT } else { HALF_HEIGHT };
            primitives.push(Primitive::Box {
                x: i as f64 * BAR_PITCH,
                y: FULL_HEIGHT - bar_height,
                w: BAR_WIDTH,
                h: bar_height,
            });
        }
        let bars = encoded.len();
        Vectorized {
            width: if bars == 0 {
                0.0
            } else {
                (bars - 1) as f64 * BAR_PITCH + BAR_WIDTH
            },
            height: FULL_HEIGHT,
            primitives,
        }
    }
}
