// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

// Lime 500 equivalent, the page accent.
pub const ACCENT: Color = Color::from_u32(0x84cc16ff);

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = (num >> 0) as u8;

        Color { r, g, b, a }
    }

    // CSS color string with an explicit alpha, for canvas fill/stroke styles.
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_unpacks_to_lime() {
        assert_eq!(
            ACCENT,
            Color {
                r: 132,
                g: 204,
                b: 22,
                a: 0xff,
            }
        );
    }

    #[test]
    fn rgba_string_carries_the_alpha() {
        assert_eq!(ACCENT.rgba(0.5), "rgba(132, 204, 22, 0.5)");
        assert_eq!(ACCENT.rgba(1.0), "rgba(132, 204, 22, 1)");
    }
}
