use std::str::FromStr;

/// Represents a color in the sRGB space (alpha is linear)
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red value
    pub r: f32,
    /// Green value
    pub g: f32,
    /// Blue value
    pub b: f32,
    /// Alpha value
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0, 1.0);
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5, 1.0);
    pub const ORANGE: Color = Color::new(1.0, 0.647, 0.0, 1.0);
    pub const PINK: Color = Color::new(1.0, 0.753, 0.796, 1.0);

    #[inline(always)]
    /// Create a new color from red, green, blue and alpha values
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline(always)]
    /// Create a new color from red, green and blue values
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline(always)]
    /// Create a new color from hexadecimal number like 0x000000ff (0xRRGGBBAA)
    pub const fn hex(hex: u32) -> Self {
        let [r, g, b, a] = hex_to_rgba(hex);
        Self { r, g, b, a }
    }

    #[inline(always)]
    /// Create a new color from rgba bytes
    pub const fn rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    #[inline(always)]
    /// Returns the same color with the alpha passed
    pub const fn with_alpha(&self, alpha: f32) -> Color {
        Self::new(self.r, self.g, self.b, alpha)
    }

    #[inline(always)]
    /// Returns byte representation of the color
    pub const fn to_rgba_u8(&self) -> [u8; 4] {
        let r = (self.r * 255.0) as _;
        let g = (self.g * 255.0) as _;
        let b = (self.b * 255.0) as _;
        let a = (self.a * 255.0) as _;
        [r, g, b, a]
    }

    /// Returns the color as a css string like `rgba(255, 0, 0, 0.5)`
    pub fn to_css(&self) -> String {
        let [r, g, b, _] = self.to_rgba_u8();
        format!("rgba({r}, {g}, {b}, {})", self.a)
    }
}

impl From<u32> for Color {
    fn from(color: u32) -> Self {
        Color::hex(color)
    }
}

impl From<[u8; 4]> for Color {
    fn from(color: [u8; 4]) -> Self {
        Color::rgba_u8(color[0], color[1], color[2], color[3])
    }
}

impl From<[f32; 4]> for Color {
    fn from(color: [f32; 4]) -> Self {
        Color::new(color[0], color[1], color[2], color[3])
    }
}

/// Parses css hex notation: `#RGB`, `#RRGGBB` or `#RRGGBBAA`
impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Invalid color '{s}': missing '#' prefix"))?;

        let parse = |hex: &str| {
            u32::from_str_radix(hex, 16).map_err(|e| format!("Invalid color '{s}': {e}"))
        };

        match digits.len() {
            3 => {
                let short = parse(digits)?;
                let expand = |n: u32| (n & 0xF) * 0x11;
                let rgb = (expand(short >> 8) << 16) | (expand(short >> 4) << 8) | expand(short);
                Ok(Color::hex((rgb << 8) | 0xFF))
            }
            6 => Ok(Color::hex((parse(digits)? << 8) | 0xFF)),
            8 => Ok(Color::hex(parse(digits)?)),
            n => Err(format!(
                "Invalid color '{s}': expected 3, 6 or 8 hex digits, found {n}"
            )),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Color {{ r: {}, g: {}, b: {}, a: {}}}",
            self.r, self.g, self.b, self.a
        )
    }
}

#[inline(always)]
/// Converts an hexadecimal value to a rgba values
pub const fn hex_to_rgba(hex: u32) -> [f32; 4] {
    [
        ((hex >> 24) & 0xFF) as f32 / 255.0,
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_rgba_u8() {
        let color = Color::rgb(0.5, 0.4, 0.3);
        assert_eq!(color.to_rgba_u8(), [127, 102, 76, 255]);
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::hex(0xFF0000FF), Color::RED);
        assert_eq!(Color::from(0x00FF00FF), Color::GREEN);
    }

    #[test]
    fn test_parse_css_hex() {
        assert_eq!("#ff0000".parse::<Color>(), Ok(Color::RED));
        assert_eq!("#0000ffff".parse::<Color>(), Ok(Color::BLUE));
        assert_eq!("#fff".parse::<Color>(), Ok(Color::WHITE));
        assert_eq!(
            "#00000000".parse::<Color>(),
            Ok(Color::TRANSPARENT)
        );
    }

    #[test]
    fn test_parse_css_hex_errors() {
        assert!("ff0000".parse::<Color>().is_err());
        assert!("#ff00".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Color::RED.to_css(), "rgba(255, 0, 0, 1)");
        assert_eq!(Color::BLACK.with_alpha(0.5).to_css(), "rgba(0, 0, 0, 0.5)");
    }
}
