//! Shared barcode machinery
//!
//! A symbology validates raw input, encodes validated input into a module
//! pattern, and vectorizes the pattern into physical geometry. `validate`
//! and `encode` are pure; `vectorize` computes output geometry without
//! touching logical state.

/// Smallest module width, points.
pub const MIN_MODULE: f64 = 1.0;
/// Smallest bar height, points.
pub const MIN_HEIGHT: f64 = 10.0;
/// Size of the optional text line, points.
pub const TEXT_SIZE: f64 = 8.0;

/// A drawable piece of barcode geometry
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A filled bar
    Box { x: f64, y: f64, w: f64, h: f64 },
    /// A centered text run
    Text {
        x: f64,
        y: f64,
        size: f64,
        value: String,
    },
}

/// Physical barcode geometry: overall size plus drawable primitives.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vectorized {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<Primitive>,
}

/// A barcode symbology backend.
pub trait Symbology {
    /// Is `raw` acceptable for this symbology? Pure and side-effect free.
    fn validate(&self, raw: &str) -> bool;

    /// Normalize raw input before encoding (strip separators etc.).
    fn preprocess(&self, raw: &str) -> String {
        raw.to_string()
    }

    /// Encode validated input into a module pattern of `'1'` (bar) and
    /// `'0'` (space) characters. Pure given validated input.
    fn encode(&self, cooked: &str, checksum: bool) -> String;

    /// Text line rendered under the bars.
    fn display_text(&self, cooked: &str, _checksum: bool) -> String {
        cooked.to_string()
    }

    /// Convert a module pattern into physical geometry targeting the
    /// requested size. The result never shrinks below the symbology's
    /// minimum legible size.
    fn vectorize(&self, encoded: &str, text: &str, show_text: bool, w: f64, h: f64) -> Vectorized {
        vectorize_modules(encoded, text, show_text, w, h)
    }
}

/// Default 1D vectorizer: scale modules to fill the requested width, stack
/// an optional text line under the bars.
pub fn vectorize_modules(
    encoded: &str,
    text: &str,
    show_text: bool,
    w: f64,
    h: f64,
) -> Vectorized {
    let modules = encoded.len();
    if modules == 0 {
        return Vectorized::default();
    }

    let module_w = (w / modules as f64).max(MIN_MODULE);
    let width = module_w * modules as f64;
    let height = h.max(MIN_HEIGHT);
    let text_band = if show_text && !text.is_empty() {
        TEXT_SIZE + 1.0
    } else {
        0.0
    };
    let bar_height = (height - text_band).max(MIN_HEIGHT / 2.0);

    let mut primitives = Vec::new();
    let mut run_start: Option<usize> = None;
    for (i, module) in encoded.chars().chain(std::iter::once('0')).enumerate() {
        match (module, run_start) {
            ('1', None) => run_start = Some(i),
            ('1', Some(_)) => {}
            (_, Some(start)) => {
                primitives.push(Primitive::Box {
                    x: start as f64 * module_w,
                    y: 0.0,
                    w: (i - start) as f64 * module_w,
                    h: bar_height,
                });
                run_start = None;
            }
            (_, None) => {}
        }
    }

    if text_band > 0.0 {
        primitives.push(Primitive::Text {
            x: width / 2.0,
            y: height - TEXT_SIZE / 2.0,
            size: TEXT_SIZE,
            value: text.to_string(),
        });
    }

    Vectorized {
        width,
        height,
        primitives,
    }
}

/// Is `data` entirely ASCII digits (and non-empty)?
pub fn is_numeric(data: &str) -> bool {
    !data.is_empty() && data.bytes().all(|b| b.is_ascii_digit())
}

/// Is `data` numeric with a length in `[min, max]`?
pub fn is_numeric_length_valid(data: &str, min: usize, max: usize) -> bool {
    is_numeric(data) && data.len() >= min && data.len() <= max
}
