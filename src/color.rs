// Simple color struct, created from an unsigned 32 representing RRGGBB

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// First accent of the hero palette.
pub const ACCENT_CYAN: Color = Color::from_u32(0x00f3ff);

/// Second accent of the hero palette.
pub const ACCENT_PURPLE: Color = Color::from_u32(0xbc13fe);

/// Connection lines are always white, faded by distance.
pub const LINK_WHITE: Color = Color::from_u32(0xffffff);

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b }
    }

    /// CSS `rgba()` string for canvas fill/stroke styles.
    pub fn to_css_rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}
