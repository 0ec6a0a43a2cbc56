#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error(transparent)]
    Digits(#[from] std::num::ParseIntError),
    #[error("expected six or eight hex digits")]
    BadLength,
}

/// A packed ARGB color, eight bits per channel, alpha in the top byte.
///
/// This is the packed-integer layout pointer sources hand us. Alpha rides
/// along for preview purposes only; the [`Display`](std::fmt::Display) impl
/// writes the six-digit uppercase `#RRGGBB` form used for `stroke` and
/// `fill` attributes, with alpha masked off.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Color(pub u32);
impl Color {
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// The classic signing-pen green.
    pub const GREEN: Self = Self(0xFF00_FF00);

    /// An opaque color from channels.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }
    #[must_use]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }
    /// The low 24 bits, alpha stripped.
    #[must_use]
    pub const fn rgb(self) -> u32 {
        self.0 & 0xFF_FFFF
    }
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06X}", self.rgb())
    }
}
impl std::str::FromStr for Color {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        match digits.len() {
            // No alpha given - opaque.
            6 => Ok(Self(0xFF00_0000 | u32::from_str_radix(digits, 16)?)),
            8 => Ok(Self(u32::from_str_radix(digits, 16)?)),
            _ => Err(ColorParseError::BadLength),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Color, ColorParseError};
    #[test]
    fn alpha_masked() {
        // Same rgb, wildly different alpha.
        assert_eq!(Color(0xFFAA_BBCC).to_string(), "#AABBCC");
        assert_eq!(Color(0x11AA_BBCC).to_string(), "#AABBCC");
    }
    #[test]
    fn zero_padded() {
        assert_eq!(Color::GREEN.to_string(), "#00FF00");
        assert_eq!(Color::BLACK.to_string(), "#000000");
        assert_eq!(Color(0xFF00_0001).to_string(), "#000001");
        assert_eq!(Color::WHITE.to_string(), "#FFFFFF");
    }
    #[test]
    fn channels() {
        let color = Color::from_argb(0x11, 0xAA, 0xBB, 0xCC);
        assert_eq!(color, Color(0x11AA_BBCC));
        assert_eq!(color.alpha(), 0x11);
        assert_eq!(Color::from_rgb(0xAA, 0xBB, 0xCC), Color(0xFFAA_BBCC));
    }
    #[test]
    fn parse() {
        assert_eq!("#00FF00".parse(), Ok(Color::GREEN));
        assert_eq!("00ff00".parse(), Ok(Color::GREEN));
        assert_eq!("#11AABBCC".parse(), Ok(Color(0x11AA_BBCC)));
        // Six digits parse opaque.
        assert_eq!("#AABBCC".parse(), Ok(Color(0xFFAA_BBCC)));
        assert_eq!("#F00".parse::<Color>(), Err(ColorParseError::BadLength));
        assert!("#GGGGGG".parse::<Color>().is_err());
    }
}
