//! Minimal CSS colour handling.
//!
//! Style values arrive as strings (`"#ef4444"`, `"rgb(255,0,0)"`, `"white"`).
//! They are normalised to the `rgb(r, g, b)` form a browser would report and
//! parsed into [`Rgb`] so the terminal renderer can paint them.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SwipeError};

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend toward `other`.  `t = 0` keeps `self`, `t = 1` gives `other`.
    pub fn mix(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = SwipeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

const NAMED: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 128, 0)),
    ("lime", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("orange", Rgb::new(255, 165, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("gray", Rgb::new(128, 128, 128)),
    ("grey", Rgb::new(128, 128, 128)),
    ("silver", Rgb::new(192, 192, 192)),
    ("navy", Rgb::new(0, 0, 128)),
    ("teal", Rgb::new(0, 128, 128)),
    ("purple", Rgb::new(128, 0, 128)),
];

fn invalid(value: &str, reason: &str) -> SwipeError {
    SwipeError::InvalidColor {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse `#rgb`, `#rrggbb`, `rgb(..)`, `rgba(..)` (alpha ignored) or a basic
/// named colour.
pub fn parse_color(value: &str) -> Result<Rgb> {
    let s = value.trim().to_ascii_lowercase();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(value, hex);
    }

    if let Some(args) = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(invalid(value, "expected 3 or 4 components"));
        }
        let mut ch = [0u8; 3];
        for (slot, part) in ch.iter_mut().zip(&parts) {
            *slot = part
                .parse::<u8>()
                .map_err(|_| invalid(value, "component out of range 0-255"))?;
        }
        return Ok(Rgb::new(ch[0], ch[1], ch[2]));
    }

    NAMED
        .iter()
        .find(|(name, _)| *name == s)
        .map(|(_, rgb)| *rgb)
        .ok_or_else(|| invalid(value, "unknown colour name"))
}

fn parse_hex(value: &str, hex: &str) -> Result<Rgb> {
    let digit = |c: char| c.to_digit(16).map(|d| d as u8);
    let digits: Option<Vec<u8>> = hex.chars().map(digit).collect();
    let digits = digits.ok_or_else(|| invalid(value, "non-hex digit"))?;
    match digits.as_slice() {
        [r, g, b] => Ok(Rgb::new(r * 17, g * 17, b * 17)),
        [r1, r2, g1, g2, b1, b2] => Ok(Rgb::new(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
        _ => Err(invalid(value, "expected 3 or 6 hex digits")),
    }
}

/// Normalise a colour value for the style map.  Values that do not parse
/// are passed through untouched.
pub fn normalize_color(value: &str) -> String {
    match parse_color(value) {
        Ok(rgb) => rgb.to_string(),
        Err(_) => value.to_string(),
    }
}
