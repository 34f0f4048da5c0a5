//! Choice of a text color readable on a surface of given lightness.

use crate::color::Color;

/// Return whichever of `bg` and `fg` reads better on a surface of
/// lightness `luminance`: `bg` when `luminance` is strictly above the
/// mid-point of the two (rounded) lightnesses, `fg` otherwise.
///
/// The rule assumes `bg` is the darker of the two.
pub fn contrasting<'a>(luminance: u8, (bg, fg): (&'a Color, &'a Color))
                       -> &'a Color {
    let mid = (fg.luminance() as f64 + bg.luminance() as f64) / 2.;
    if luminance as f64 > mid { bg } else { fg }
}

/// Same as [`contrasting`] but returns the CSS sRGB string of the
/// chosen color.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use palette_diagram::{Color, pick_contrast};
/// let bg = Color::new("bg_0", RGB8::new(0, 0, 0), 10.).unwrap();
/// let fg = Color::new("fg_0", RGB8::new(255, 255, 255), 90.).unwrap();
/// assert_eq!(pick_contrast(80, (&bg, &fg)), "#000000");
/// assert_eq!(pick_contrast(50, (&bg, &fg)), "#ffffff");
/// ```
pub fn pick_contrast(luminance: u8, pair: (&Color, &Color)) -> String {
    contrasting(luminance, pair).srgb_string()
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;

    fn pair(l0: f64, l1: f64) -> (Color, Color) {
        (Color::new("bg", RGB8::new(1, 1, 1), l0).unwrap(),
         Color::new("fg", RGB8::new(2, 2, 2), l1).unwrap())
    }

    #[test]
    fn threshold() {
        let (bg, fg) = pair(10., 90.);
        assert_eq!(contrasting(0, (&bg, &fg)).name(), "fg");
        assert_eq!(contrasting(49, (&bg, &fg)).name(), "fg");
        // Ties go to `fg`.
        assert_eq!(contrasting(50, (&bg, &fg)).name(), "fg");
        assert_eq!(contrasting(51, (&bg, &fg)).name(), "bg");
        assert_eq!(contrasting(100, (&bg, &fg)).name(), "bg");
    }

    #[test]
    fn half_mid_point() {
        // Mid-point 50.5: 50 → fg, 51 → bg.
        let (bg, fg) = pair(10., 91.);
        assert_eq!(pick_contrast(50, (&bg, &fg)), "#020202");
        assert_eq!(pick_contrast(51, (&bg, &fg)), "#010101");
    }

    #[test]
    fn uses_rounded_lightness() {
        // 10.4 and 89.6 round to 10 and 90.
        let (bg, fg) = pair(10.4, 89.6);
        assert_eq!(contrasting(50, (&bg, &fg)).name(), "fg");
    }
}
