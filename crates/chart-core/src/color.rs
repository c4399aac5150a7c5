// File: crates/chart-core/src/color.rs
// Summary: CSS-style color parsing and alpha conversion for option color strings.

use crate::error::{ChartError, Result};

/// 8-bit RGB with a fractional alpha, the way CSS `rgba()` spells it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    /// Alpha as a 0..=255 channel.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// `rgba(r, g, b, a)` with the alpha trimmed of trailing zeros.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, fmt_alpha(self.a))
    }
}

fn fmt_alpha(a: f32) -> String {
    let s = format!("{:.3}", a.clamp(0.0, 1.0));
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() { "0".to_string() } else { s.to_string() }
}

const NAMED: &[(&str, Rgba)] = &[
    ("black", Rgba::opaque(0, 0, 0)),
    ("white", Rgba::opaque(255, 255, 255)),
    ("red", Rgba::opaque(255, 0, 0)),
    ("green", Rgba::opaque(0, 128, 0)),
    ("blue", Rgba::opaque(0, 0, 255)),
    ("yellow", Rgba::opaque(255, 255, 0)),
    ("orange", Rgba::opaque(255, 165, 0)),
    ("purple", Rgba::opaque(128, 0, 128)),
    ("gray", Rgba::opaque(128, 128, 128)),
    ("grey", Rgba::opaque(128, 128, 128)),
    ("transparent", Rgba { r: 0, g: 0, b: 0, a: 0.0 }),
];

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(...)`, `rgba(...)` or a basic CSS name.
pub fn parse_color(input: &str) -> Result<Rgba> {
    let s = input.trim();
    let invalid = || ChartError::InvalidColor(input.to_string());

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower.strip_prefix("rgba(").or_else(|| lower.strip_prefix("rgb(")) {
        return parse_functional(args).ok_or_else(invalid);
    }

    NAMED
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, c)| *c)
        .ok_or_else(invalid)
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    match hex.len() {
        3 => Some(Rgba::opaque(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(Rgba::opaque(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba::opaque(byte(0)?, byte(2)?, byte(4)?).with_alpha(byte(6)? as f32 / 255.0)),
        _ => None,
    }
}

fn parse_functional(args: &str) -> Option<Rgba> {
    let body = args.strip_suffix(')')?;
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let channel = |s: &str| s.parse::<f32>().ok().map(|v| v.clamp(0.0, 255.0).round() as u8);
    let a = match parts.get(3) {
        Some(a) => a.parse::<f32>().ok()?,
        None => 1.0,
    };
    Some(Rgba::opaque(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?).with_alpha(a))
}

/// Re-express `color` as `rgba(r, g, b, alpha)`.
/// Unparseable input comes back unchanged.
pub fn with_alpha(color: &str, alpha: f32) -> String {
    match parse_color(color) {
        Ok(c) => c.with_alpha(alpha).to_css(),
        Err(_) => {
            tracing::debug!(color, "leaving unparseable color untouched");
            color.to_string()
        }
    }
}
