//! Code 39 symbology

use super::base::Symbology;

/// Symbol alphabet in checksum-value order.
const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";

/// Nine-element wide/narrow patterns (bar space bar ... bar), indexed to
/// match [`ALPHABET`]; the start/stop symbol `*` is last.
const PATTERNS: [&str; 44] = [
    "NNNWWNWNN", // 0
    "WNNWNNNNW", // 1
    "NNWWNNNNW", // 2
    "WNWWNNNNN", // 3
    "NNNWWNNNW", // 4
    "WNNWWNNNN", // 5
    "NNWWWNNNN", // 6
    "NNNWNNWNW", // 7
    "WNNWNNWNN", // 8
    "NNWWNNWNN", // 9
    "WNNNNWNNW", // A
    "NNWNNWNNW", // B
    "WNWNNWNNN", // C
    "NNNNWWNNW", // D
    "WNNNWWNNN", // E
    "NNWNWWNNN", // F
    "NNNNNWWNW", // G
    "WNNNNWWNN", // H
    "NNWNNWWNN", // I
    "NNNNWWWNN", // J
    "WNNNNNNWW", // K
    "NNWNNNNWW", // L
    "WNWNNNNWN", // M
    "NNNNWNNWW", // N
    "WNNNWNNWN", // O
    "NNWNWNNWN", // P
    "NNNNNNWWW", // Q
    "WNNNNNWWN", // R
    "NNWNNNWWN", // S
    "NNNNWNWWN", // T
    "WWNNNNNNW", // U
    "NWWNNNNNW", // V
    "WWWNNNNNN", // W
    "NWNNWNNNW", // X
    "WWNNWNNNN", // Y
    "NWWNWNNNN", // Z
    "NWNNNNWNW", // -
    "WWNNNNWNN", // .
    "NWWNNNWNN", // space
    "NWNWNWNNN", // $
    "NWNWNNNWN", // /
    "NWNNNWNWN", // +
    "NNNWNWNWN", // %
    "NWNNWNWNN", // *
];

const START_STOP: usize = 43;

/// Code 39. Alphanumeric charset, optional mod-43 checksum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Code39;

impl Code39 {
    fn symbol_value(c: char) -> Option<usize> {
        ALPHABET.find(c)
    }

    fn append_symbol(out: &mut String, index: usize) {
        // Elements alternate bar/space starting with a bar; narrow = one
        // module, wide = two. A single narrow space separates symbols.
        for (i, element) in PATTERNS[index].chars().enumerate() {
            let module = if i % 2 == 0 { '1' } else { '0' };
            out.push(module);
            if element == 'W' {
                out.push(module);
            }
        }
        out.push('0');
    }

    fn checksum(cooked: &str) -> char {
        let sum: usize = cooked.chars().filter_map(Self::symbol_value).sum();
        ALPHABET
            .chars()
            .nth(sum % 43)
            .expect("mod 43 is in range")
    }
}

impl Symbology for Code39 {
    fn validate(&self, raw: &str) -> bool {
        // Lowercase letters are accepted; preprocessing folds them to the
        // uppercase symbol set.
        !raw.is_empty()
            && raw
                .chars()
                .all(|c| Self::symbol_value(c.to_ascii_uppercase()).is_some())
    }

    fn preprocess(&self, raw: &str) -> String {
        raw.to_ascii_uppercase()
    }

    fn encode(&self, cooked: &str, checksum: bool) -> String {
        let mut out = String::new();
        Self::append_symbol(&mut out, START_STOP);
        for c in cooked.chars() {
            if let Some(index) = Self::symbol_value(c) {
                Self::append_symbol(&mut out, index);
            }
        }
        if checksum {
            if let Some(index) = Self::symbol_value(Self::checksum(cooked)) {
                Self::append_symbol(&mut out, index);
            }
        }
        Self::append_symbol(&mut out, START_STOP);
        out.pop(); // no gap after the stop symbol
        out
    }
}
