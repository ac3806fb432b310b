//! Static name to display-color lookup for the palette variant

use std::fmt;

/// Display color as 0xRRGGBB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorToken(u32);

impl ColorToken {
    /// Swatch used for every name missing from the table
    pub const NEUTRAL: ColorToken = ColorToken(0x9ca3af);

    pub const fn new(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }

    pub fn hex(&self) -> String {
        format!("#{:06x}", self.0)
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// Rough perceived brightness, used to pick readable text on a swatch
    pub fn is_light(&self) -> bool {
        let (r, g, b) = self.rgb();
        let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
        luma > 150_000
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

const NAMED_COLORS: &[(&str, ColorToken)] = &[
    ("red", ColorToken::new(0xef4444)),
    ("orange", ColorToken::new(0xf97316)),
    ("amber", ColorToken::new(0xf59e0b)),
    ("yellow", ColorToken::new(0xeab308)),
    ("lime", ColorToken::new(0x84cc16)),
    ("green", ColorToken::new(0x22c55e)),
    ("emerald", ColorToken::new(0x10b981)),
    ("teal", ColorToken::new(0x14b8a6)),
    ("cyan", ColorToken::new(0x06b6d4)),
    ("sky", ColorToken::new(0x0ea5e9)),
    ("blue", ColorToken::new(0x3b82f6)),
    ("indigo", ColorToken::new(0x6366f1)),
    ("violet", ColorToken::new(0x8b5cf6)),
    ("purple", ColorToken::new(0xa855f7)),
    ("fuchsia", ColorToken::new(0xd946ef)),
    ("pink", ColorToken::new(0xec4899)),
    ("rose", ColorToken::new(0xf43f5e)),
    ("slate", ColorToken::new(0x64748b)),
    ("gray", ColorToken::new(0x6b7280)),
    ("grey", ColorToken::new(0x6b7280)),
    ("zinc", ColorToken::new(0x71717a)),
    ("stone", ColorToken::new(0x78716c)),
    ("black", ColorToken::new(0x000000)),
    ("white", ColorToken::new(0xffffff)),
    ("brown", ColorToken::new(0x92400e)),
    ("beige", ColorToken::new(0xf5f5dc)),
    ("navy", ColorToken::new(0x1e3a8a)),
    ("maroon", ColorToken::new(0x7f1d1d)),
    ("olive", ColorToken::new(0x808000)),
    ("gold", ColorToken::new(0xd4af37)),
    ("silver", ColorToken::new(0xc0c0c0)),
    ("coral", ColorToken::new(0xff7f50)),
    ("lavender", ColorToken::new(0xe6e6fa)),
    ("mint", ColorToken::new(0x98ff98)),
    ("turquoise", ColorToken::new(0x40e0d0)),
    ("burgundy", ColorToken::new(0x800020)),
    ("cream", ColorToken::new(0xfffdd0)),
    ("khaki", ColorToken::new(0xc3b091)),
    ("charcoal", ColorToken::new(0x36454f)),
];

/// Every known name with its token, in table order
pub fn named_colors() -> &'static [(&'static str, ColorToken)] {
    NAMED_COLORS
}

/// Resolve a color name, trimmed and case-insensitive
///
/// Total over all strings: unknown names get `ColorToken::NEUTRAL`.
pub fn color_for(name: &str) -> ColorToken {
    let key = name.trim().to_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, token)| *token)
        .unwrap_or(ColorToken::NEUTRAL)
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod palette_tests;
