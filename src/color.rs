//! Named colors carrying both their sRGB value and their CIE L*
//! lightness.

use std::fmt;
use rgb::RGB8;
use crate::error::{Error, Result};

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0;

/// An immutable named color.
///
/// `lab_l` is the CIE L*a*b* lightness (D50 reference white) in the
/// range 0. to 100.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    name: String,
    srgb: RGB8,
    lab_l: f64,
}

/// Linearize an 8 bits sRGB component to \[0, 1\].
fn linear(c: u8) -> f64 {
    let c = c as f64 / 255.;
    if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

/// CIE L* of an sRGB color.
fn lab_lightness(c: RGB8) -> f64 {
    // Luminance row of the sRGB → XYZ (D50, Bradford adapted) matrix.
    // See https://github.com/dbuenzli/gg/blob/b8704687d669d139bb4ac7a54115afc7e5caaa55/src/gg.ml#L2926
    const C0: f64 = 1. / 3.;
    const C1: f64 = 841. / 108.;
    const C2: f64 = 4. / 29.;
    let yr = 0.2225105 * linear(c.r) + 0.7168863 * linear(c.g)
        + 0.0606032 * linear(c.b);
    let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
    (116. * fy - 16.).clamp(0., 100.)
}

fn hex_digit(name: &str, s: &str, d: u8) -> Result<u8> {
    match d {
        b'0' ..= b'9' => Ok(d - b'0'),
        b'a' ..= b'f' => Ok(d - b'a' + 10),
        b'A' ..= b'F' => Ok(d - b'A' + 10),
        _ => Err(Error::MalformedColor(
            format!("{name}: “{s}” is not a hexadecimal color"))),
    }
}

impl Color {
    /// Create a color from its sRGB value and its CIE L* lightness.
    /// Fails if `lab_l` is not a number in \[0, 100\].
    pub fn new(name: impl Into<String>, srgb: RGB8, lab_l: f64)
               -> Result<Self> {
        let name = name.into();
        if !lab_l.is_finite() || !(0. ..= 100.).contains(&lab_l) {
            return Err(Error::MalformedColor(
                format!("{name}: lightness {lab_l} not in [0, 100]")))
        }
        Ok(Color { name, srgb, lab_l })
    }

    /// Create a color from its sRGB value, computing its lightness.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use palette_diagram::Color;
    /// let white = Color::from_srgb("white", RGB8::new(255, 255, 255));
    /// assert_eq!(white.luminance(), 100);
    /// ```
    pub fn from_srgb(name: impl Into<String>, srgb: RGB8) -> Self {
        Color { name: name.into(), srgb, lab_l: lab_lightness(srgb) }
    }

    /// Parse a CSS hexadecimal color such as `"#103c48"` or `"#fff"`
    /// (the leading `#` is optional).
    pub fn parse(name: impl Into<String>, s: &str) -> Result<Self> {
        let name = name.into();
        let hex = s.trim().trim_start_matches('#').as_bytes();
        let mut d = Vec::with_capacity(6);
        for &b in hex { d.push(hex_digit(&name, s, b)?) }
        let srgb = match d[..] {
            [r, g, b] => RGB8::new(17 * r, 17 * g, 17 * b),
            [r1, r0, g1, g0, b1, b0] =>
                RGB8::new(16 * r1 + r0, 16 * g1 + g0, 16 * b1 + b0),
            _ => return Err(Error::MalformedColor(
                format!("{name}: “{s}” is not a hexadecimal color"))),
        };
        Ok(Self::from_srgb(name, srgb))
    }

    /// Human readable name of the color.
    pub fn name(&self) -> &str { &self.name }

    /// The sRGB value.
    pub fn srgb(&self) -> RGB8 { self.srgb }

    /// The CIE L* lightness in \[0, 100\].
    pub fn lab_l(&self) -> f64 { self.lab_l }

    /// Lightness rounded to an integer (ties to even).
    pub fn luminance(&self) -> u8 {
        self.lab_l.round_ties_even().clamp(0., 100.) as u8
    }

    /// The sRGB value as a CSS string `#rrggbb`.
    pub fn srgb_string(&self) -> String {
        let c = self.srgb;
        format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, L* = {:.1})", self.name, self.srgb_string(),
               self.lab_l)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lightness_extremes() {
        assert_eq!(Color::from_srgb("k", RGB8::new(0, 0, 0)).lab_l(), 0.);
        let w = Color::from_srgb("w", RGB8::new(255, 255, 255));
        assert!((w.lab_l() - 100.).abs() < 1e-4, "{} ≉ 100", w.lab_l());
    }

    #[test]
    fn lightness_mid_gray() {
        // sRGB #777777 is about L* = 50.
        let c = Color::parse("gray", "#777").unwrap();
        assert!((c.lab_l() - 50.0).abs() < 0.5, "{}", c.lab_l());
        assert_eq!(c.srgb(), RGB8::new(0x77, 0x77, 0x77));
    }

    #[test]
    fn parse_hex() {
        let c = Color::parse("bg_0", "#103c48").unwrap();
        assert_eq!(c.srgb(), RGB8::new(0x10, 0x3c, 0x48));
        assert_eq!(c.srgb_string(), "#103c48");
        assert_eq!(Color::parse("x", "ADBCBC").unwrap().srgb_string(),
                   "#adbcbc");
        assert!(matches!(Color::parse("x", "#12345"),
                         Err(Error::MalformedColor(_))));
        assert!(matches!(Color::parse("x", "#gg0000"),
                         Err(Error::MalformedColor(_))));
    }

    #[test]
    fn new_checks_lightness() {
        let c = RGB8::new(1, 2, 3);
        assert!(Color::new("a", c, 42.).is_ok());
        assert!(Color::new("a", c, -1.).is_err());
        assert!(Color::new("a", c, 100.5).is_err());
        assert!(Color::new("a", c, f64::NAN).is_err());
    }

    #[test]
    fn luminance_rounds_ties_to_even() {
        let c = RGB8::new(0, 0, 0);
        assert_eq!(Color::new("a", c, 50.5).unwrap().luminance(), 50);
        assert_eq!(Color::new("a", c, 51.5).unwrap().luminance(), 52);
        assert_eq!(Color::new("a", c, 49.6).unwrap().luminance(), 50);
        assert_eq!(Color::new("a", c, 99.9).unwrap().luminance(), 100);
    }
}
