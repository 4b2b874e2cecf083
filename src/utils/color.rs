use crate::data::Tone;
use eframe::egui::Color32;

pub trait ColorExt {
    fn from_hex(hex: &str) -> Option<Self>
    where
        Self: Sized;
}

impl ColorExt for Color32 {
    fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color32::from_rgb(r, g, b))
    }
}

// Brand palette: crude-oil amber primary on slate.
pub const PRIMARY: &str = "#d97706";
pub const SECONDARY: &str = "#475569";
pub const DESTRUCTIVE: &str = "#dc2626";
pub const SUCCESS: &str = "#16a34a";
pub const MUTED: &str = "#94a3b8";

fn palette(hex: &str) -> Color32 {
    <Color32 as ColorExt>::from_hex(hex).unwrap_or(Color32::GRAY)
}

pub fn primary() -> Color32 {
    palette(PRIMARY)
}

pub fn success() -> Color32 {
    palette(SUCCESS)
}

pub fn destructive() -> Color32 {
    palette(DESTRUCTIVE)
}

pub fn muted() -> Color32 {
    palette(MUTED)
}

/// Fill and text colors of a badge.
pub fn tone_colors(tone: Tone) -> (Color32, Color32) {
    match tone {
        Tone::Default => (palette(PRIMARY), Color32::WHITE),
        Tone::Secondary => (palette(SECONDARY), Color32::WHITE),
        Tone::Destructive => (palette(DESTRUCTIVE), Color32::WHITE),
        Tone::Outline => (Color32::TRANSPARENT, palette(MUTED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(<Color32 as ColorExt>::from_hex("#d97706"), Some(Color32::from_rgb(0xd9, 0x77, 0x06)));
        assert_eq!(<Color32 as ColorExt>::from_hex("16a34a"), Some(Color32::from_rgb(0x16, 0xa3, 0x4a)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(<Color32 as ColorExt>::from_hex("#fff"), None);
        assert_eq!(<Color32 as ColorExt>::from_hex("#zzzzzz"), None);
        assert_eq!(<Color32 as ColorExt>::from_hex("a€bc"), None);
        assert_eq!(<Color32 as ColorExt>::from_hex("#€€"), None);
    }
}
