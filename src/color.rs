//! Color resolution: CSS color strings to RGBA quadruples.
//!
//! Theme files and draw calls carry colors as strings ("black",
//! "#ff8800", "hsl(210, 100%, 50%)"). They are normalized to an
//! [`Rgba`] once per stroke/fill operation; an unparseable string
//! resolves to transparent black with a warning instead of an error.

/// An RGBA color, 8 bits per channel, alpha 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the sentinel for cleared pixels,
    /// out-of-bounds reads, and unparseable color strings.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Resolve a CSS color string to an RGBA quadruple.
///
/// Accepts anything `csscolorparser` understands: named colors, hex,
/// `rgb()`/`rgba()`, `hsl()`/`hsla()`. Invalid input resolves to
/// [`Rgba::TRANSPARENT`] and logs a warning on stderr.
pub fn parse(s: &str) -> Rgba {
    match csscolorparser::parse(s) {
        Ok(color) => {
            let [r, g, b, a] = color.to_rgba8();
            Rgba::new(r, g, b, a)
        },
        Err(e) => {
            eprintln!("Invalid color {:?}: {}", s, e);
            Rgba::TRANSPARENT
        },
    }
}
