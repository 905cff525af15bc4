//! Color parsing and interpolation.
//!
//! The parameter layer hands the backend raw hex strings. [`Rgb::parse`]
//! surfaces malformed input as an error; [`Rgb::parse_or_black`] is the
//! single, named best-effort policy for callers that must accept loosely
//! validated UI input, preserving the reference behavior of degrading
//! malformed colors to black.

use thiserror::Error;

/// Error returned when a string is not a 6-digit hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a 6-digit hex color")]
pub struct ColorParseError(pub String);

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parse a 6-digit hex color, case-insensitive, with optional leading `#`.
    pub fn parse(s: &str) -> Result<Rgb, ColorParseError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorParseError(s.to_string()))
        };

        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Parse a hex color, falling back to black on malformed input.
    ///
    /// This is the best-effort policy used by the composer; callers that
    /// want to reject malformed input use [`Rgb::parse`] instead.
    pub fn parse_or_black(s: &str) -> Rgb {
        Rgb::parse(s).unwrap_or(Rgb::BLACK)
    }

    /// Format as a lowercase `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear per-channel blend at fraction `t` (0 = self, 1 = other).
    ///
    /// `t` is not clamped; callers pass `i / max(quantity - 1, 1)`, which is
    /// always within `[0, 1]`. Channels are rounded and clamped to 8 bits.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let blend = |a: u8, b: u8| -> u8 {
            (a as f64 + (b as f64 - a as f64) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };

        Rgb {
            r: blend(self.r, other.r),
            g: blend(self.g, other.g),
            b: blend(self.b, other.b),
        }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        let expected = Rgb {
            r: 0x58,
            g: 0x47,
            b: 0xeb,
        };
        assert_eq!(Rgb::parse("#5847eb").unwrap(), expected);
        assert_eq!(Rgb::parse("5847eb").unwrap(), expected);
        assert_eq!(Rgb::parse("#5847EB").unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Rgb::parse("#12345").is_err());
        assert!(Rgb::parse("#1234567").is_err());
        assert!(Rgb::parse("#gg0000").is_err());
        assert!(Rgb::parse("").is_err());
    }

    #[test]
    fn test_parse_or_black_fallback() {
        assert_eq!(Rgb::parse_or_black("not-a-color"), Rgb::BLACK);
        assert_eq!(Rgb::parse_or_black("#ffffff"), Rgb::WHITE);
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        let c = Rgb {
            r: 0xAB,
            g: 0xCD,
            b: 0xEF,
        };
        assert_eq!(c.to_hex(), "#abcdef");
    }

    #[test]
    fn test_lerp_identity() {
        let c = Rgb {
            r: 10,
            g: 20,
            b: 30,
        };
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(c.lerp(c, t), c);
        }
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgb::parse("#ff0000").unwrap();
        let b = Rgb::parse("#0000ff").unwrap();
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = Rgb::BLACK;
        let b = Rgb::WHITE;
        let mid = a.lerp(b, 0.5);
        assert_eq!(
            mid,
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }
}
