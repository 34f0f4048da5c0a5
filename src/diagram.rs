//! Luminance diagram of a palette, written as SVG.
//!
//! Every color is placed vertically according to its lightness (0 at
//! the bottom, 100 at the top).  The two background colors fill the
//! canvas from the top down to their own lightness; the other colors
//! are drawn as labelled squares spread from left to right.

use std::{f64::consts::PI, io::Write};
use crate::{color::Color, contrast::pick_contrast, palette::Palette,
            error::Result};

const AXIS_COLOR: &str = "#777";

const FONT_FACES: &str = "    <style>
        @font-face {
            font-family: 'Signika';
            font-style: normal;
            font-weight: 400;
            src: local('Signika'), local('Signika-Regular'),
              url(https://fonts.gstatic.com/s/signika/v6/q41y_9MUP_N8ipOH4ORRvw.woff2) format('woff2');
            unicode-range: U+0000-00FF, U+0131, U+0152-0153, U+02C6, U+02DA, U+02DC,
              U+2000-206F, U+2074, U+20AC, U+2212, U+2215, U+E0FF, U+EFFD, U+F000;
        }
        @font-face {
            font-family: 'Signika';
            font-style: normal;
            font-weight: 700;
            src: local('Signika-Bold'),
              url(https://fonts.gstatic.com/s/signika/v6/7M5kxD4eGxuhgFaIk95pBfk_vArhqVIZ0nv9q090hN8.woff2) format('woff2');
            unicode-range: U+0000-00FF, U+0131, U+0152-0153, U+02C6, U+02DA, U+02DC,
              U+2000-206F, U+2074, U+20AC, U+2212, U+2215, U+E0FF, U+EFFD, U+F000;
        }
    </style>";

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Geometry of the diagram.  The same value can render any number of
/// palettes.
///
/// # Example
///
/// ```
/// use palette_diagram::{Diagram, palettes};
/// let svg = Diagram::new().width(800).to_svg(&palettes::SELENIZED_DARK)
///     .unwrap();
/// assert!(svg.contains("selenized-dark"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diagram {
    width: u32,
    height: u32,
    square_size: u32,
    line_width: u32,
    margin: u32,
    adjust_alignment: bool,
}

impl Default for Diagram {
    fn default() -> Self {
        Diagram { width: 1000, height: 600, square_size: 48, line_width: 3,
                  margin: 125, adjust_alignment: false }
    }
}

/// # Configuration
impl Diagram {
    /// Diagram with the default geometry: a 1000 × 600 canvas, 48px
    /// squares, 3px lines and a 125px margin.
    pub fn new() -> Self { Self::default() }

    /// Width of the canvas (without margins).
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Height of the canvas, i.e. the length of the lightness axis.
    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Side of the color squares.  Also sets the font size.
    pub fn square_size(mut self, size: u32) -> Self {
        self.square_size = size;
        self
    }

    pub fn line_width(mut self, width: u32) -> Self {
        self.line_width = width;
        self
    }

    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Shift text baselines to compensate for renderers ignoring
    /// `dominant-baseline`.
    pub fn adjust_alignment(mut self, adjust: bool) -> Self {
        self.adjust_alignment = adjust;
        self
    }
}

/// # Layout
impl Diagram {
    /// Width of the whole image.
    pub fn image_width(&self) -> f64 {
        self.width as f64 + self.margin as f64 + self.line_width as f64
    }

    /// Height of the whole image (the title lives in the top margin).
    pub fn image_height(&self) -> f64 {
        self.height as f64 + self.margin as f64 * 1.5
    }

    pub fn square_half(&self) -> f64 { self.square_size as f64 / 2. }

    /// Horizontal text offset.
    pub fn adj_x(&self) -> f64 {
        if self.adjust_alignment { self.line_width as f64 } else { 0. }
    }

    /// Vertical text offset.
    pub fn adj_y(&self) -> f64 {
        if self.adjust_alignment { self.square_half() * 0.4 } else { 0. }
    }

    /// Radius of the background markers: their area is the one of a
    /// square.
    pub fn circle_radius(&self) -> f64 {
        (4. / PI).sqrt() * self.square_half()
    }

    /// Abscissa of the lightness axis.
    pub fn axis_x(&self) -> f64 { -(self.square_size as f64) }

    /// Ordinate (from the top of the canvas) of the lower edge of the
    /// band of a background color with lightness `luminance`.
    pub fn band_y(&self, luminance: u8) -> f64 {
        (100. - luminance as f64) / 100. * self.height as f64
    }

    /// Center of the `i`-th of `n` swatches.  The ordinate grows with
    /// `luminance`, from the bottom of the canvas.
    pub fn swatch_center(&self, i: usize, n: usize, luminance: u8)
                         -> (f64, f64) {
        let x = (i as f64 + 1.7) * self.width as f64 / (n as f64 + 1.5);
        let y = luminance as f64 * self.height as f64 / 100.;
        (x, y)
    }
}

/// # Output
impl Diagram {
    /// Write the SVG diagram of `palette` to `out`.
    ///
    /// The palette is classified before anything is written, so a
    /// palette lacking a background color leaves `out` untouched.
    /// An I/O error however may leave a truncated document.
    pub fn write(&self, palette: &Palette, out: &mut impl Write)
                 -> Result<()> {
        let [bg, fg] = palette.background_colors()?;
        // Darkest first.  For light palettes (`bg_0` lighter than
        // `fg_0`) this reverses the `bg_0`, `fg_0` order so that swatch
        // numerals are drawn in the contrasting color.
        let backgrounds =
            if fg.luminance() < bg.luminance() { (fg, bg) } else { (bg, fg) };
        let accents = palette.accent_colors();
        self.write_header(palette.name(), out)?;
        self.draw_axis(out)?;
        self.draw_background(backgrounds, out)?;
        self.draw_swatches(&accents, backgrounds, out)?;
        writeln!(out, "    </g>\n\
                       </svg>")?;
        Ok(())
    }

    /// Return the SVG diagram of `palette` as a string.
    pub fn to_svg(&self, palette: &Palette) -> Result<String> {
        let mut buf = Vec::new();
        self.write(palette, &mut buf)?;
        // Only `str` are written.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_header(&self, name: &str, out: &mut impl Write) -> Result<()> {
        let w = self.width as f64;
        let h = self.height as f64;
        let lw = self.line_width as f64;
        let sq = self.square_size as f64;
        let margin = self.margin;
        writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                       <svg version=\"1.1\"\n     \
                       xmlns=\"http://www.w3.org/2000/svg\"\n     \
                       xmlns:svg=\"http://www.w3.org/2000/svg\"\n     \
                       width=\"{:.0}\"\n     \
                       height=\"{:.0}\"\n     \
                       font-family=\"Signika, sans\"\n     \
                       font-size=\"{:.1}px\" >",
                 self.image_width(), self.image_height(), 0.65 * sq)?;
        writeln!(out, "{FONT_FACES}")?;
        writeln!(out, "    <g transform=\"translate({margin},{margin})\" >\n        \
                       <text x=\"{:.1}\" y=\"{:.1}\"\n              \
                       text-anchor=\"middle\" dominant-baseline=\"central\"\n              \
                       font-size=\"{sq:.1}px\" fill=\"{AXIS_COLOR}\" >\n            \
                       {}\n        \
                       </text>",
                 w * 0.5, self.adj_y() / 0.65 - margin as f64 * 0.5,
                 escape_xml(name))?;
        writeln!(out, "        <rect x=\"{:.1}\" y=\"{:.1}\"\n              \
                       width=\"{:.1}\" height=\"{:.1}\"\n              \
                       fill=\"{AXIS_COLOR}\" />\n        \
                       <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" \
                       fill=\"#000\" />",
                 -lw / 2., -lw / 2., w + lw, h + lw,
                 self.width, self.height)?;
        Ok(())
    }

    fn draw_axis(&self, out: &mut impl Write) -> Result<()> {
        let h = self.height as f64;
        let lw = self.line_width as f64;
        let margin = self.margin as f64;
        let x = self.axis_x();
        let notch_half = self.square_half() / 2.;
        writeln!(out, "<defs>\n    \
                       <marker id=\"arrowhead\" markerWidth=\"10\" \
                       markerHeight=\"10\" refX=\"0\" refY=\"3\" \
                       orient=\"auto\" markerUnits=\"strokeWidth\">\n      \
                       <path d=\"M0,0 L0,6 L9,3 z\" fill=\"{AXIS_COLOR}\" />\n    \
                       </marker>\n\
                       </defs>\n")?;
        writeln!(out, "<g stroke=\"{AXIS_COLOR}\" stroke-width=\"{lw:.1}\" >\n    \
                       <line x1=\"{x:.1}\" y1=\"{:.1}\"\n          \
                       x2=\"{x:.1}\" y2=\"{:.1}\"\n          \
                       marker-end=\"url(#arrowhead)\" />\n    \
                       <line x1=\"{:.1}\" y1=\"0\"\n          \
                       x2=\"{:.1}\" y2=\"0\" />\n    \
                       <line x1=\"{:.1}\" y1=\"{}\"\n          \
                       x2=\"{:.1}\" y2=\"{}\" />\n\
                       </g>\n",
                 h + margin / 4., -margin / 4.,
                 x - notch_half, x + notch_half,
                 x - notch_half, self.height, x + notch_half, self.height)?;
        let label_x = x - 1.5 * notch_half;
        writeln!(out, "<text x=\"{label_x:.1}\" y=\"{:.1}\"\n      \
                       text-anchor=\"end\" dominant-baseline=\"central\"\n      \
                       fill=\"{AXIS_COLOR}\" > 0 </text>\n\
                       <text x=\"{label_x:.1}\" y=\"{:.1}\"\n      \
                       text-anchor=\"end\" dominant-baseline=\"central\"\n      \
                       fill=\"{AXIS_COLOR}\" > 100 </text>\n\
                       <g transform=\"translate({:.1},{:.1})\" >\n    \
                       <text x=\"0\" y=\"0\"\n          \
                       text-anchor=\"middle\"\n          \
                       transform=\"rotate(-90)\"\n          \
                       fill=\"{AXIS_COLOR}\" > luminance </text>\n\
                       </g>",
                 h + self.adj_y(), self.adj_y(), x - notch_half, h / 2.)?;
        Ok(())
    }

    /// Draw the two background colors, `(darkest, lightest)`.
    fn draw_background(&self, (dark, light): (&Color, &Color),
                       out: &mut impl Write) -> Result<()> {
        let radius = self.circle_radius();
        let lw = self.line_width as f64;
        for color in [dark, light] {
            let luminance = color.luminance();
            let contrast = pick_contrast(luminance, (dark, light));
            let srgb = color.srgb_string();
            let y = self.band_y(luminance);
            writeln!(out, "        <rect x=\"0\" y=\"0\"\n              \
                           width=\"{}\"\n              \
                           height=\"{y:.1}\"\n              \
                           fill=\"{srgb}\" />\n        \
                           <circle cx=\"0\" cy=\"{y:.1}\"\n                \
                           r=\"{radius:.1}\"\n                \
                           fill=\"{srgb}\"\n                \
                           stroke=\"{AXIS_COLOR}\"\n                \
                           stroke-width=\"{lw:.1}\" />",
                     self.width)?;
            writeln!(out, "        <text x=\"{:.1}\" y=\"{:.1}\"\n              \
                           fill=\"{contrast}\"\n              \
                           text-anchor=\"middle\" dominant-baseline=\"central\" >\n            \
                           {luminance}\n        \
                           </text>\n        \
                           <text x=\"{:.1}\" y=\"{:.1}\"\n              \
                           fill=\"{contrast}\"\n              \
                           text-anchor=\"start\" >\n            \
                           {}\n        \
                           </text>",
                     self.adj_x(), y + self.adj_y(),
                     radius * 1.3, (98. - luminance as f64) / 100. * self.height as f64,
                     escape_xml(color.name()))?;
        }
        Ok(())
    }

    /// Draw the color squares.  `backgrounds` is `(darkest, lightest)`.
    fn draw_swatches(&self, colors: &[&Color],
                     backgrounds: (&Color, &Color),
                     out: &mut impl Write) -> Result<()> {
        let h = self.height as f64;
        let sq = self.square_size as f64;
        let sqhalf = self.square_half();
        let lw = self.line_width as f64;
        let outline = backgrounds.0.srgb_string();
        writeln!(out, "      <g>")?;
        for (i, color) in colors.iter().enumerate() {
            let luminance = color.luminance();
            let contrast = pick_contrast(luminance, backgrounds);
            let srgb = color.srgb_string();
            let (x, y) = self.swatch_center(i, colors.len(), luminance);
            // SVG ordinates grow downwards.
            writeln!(out, "            <g transform=\"translate({x:.1},{:.1})\" >\n                \
                           <g stroke=\"{outline}\" stroke-width=\"{lw:.1}\" >\n                    \
                           <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{sq:.1}\" height=\"{sq:.1}\"\n                          \
                           fill=\"{srgb}\" stroke=\"{outline}\"\n                          \
                           stroke-width=\"{lw:.1}\" />\n                \
                           </g>\n",
                     h - y, -sqhalf, -sqhalf)?;
            writeln!(out, "                <text x=\"{:.1}\" y=\"{:.1}\" fill=\"{contrast}\"\n                      \
                           text-anchor=\"middle\" dominant-baseline=\"central\" >\n                    \
                           {luminance}\n                \
                           </text>\n",
                     self.adj_x(), self.adj_y())?;
            writeln!(out, "                <text x=\"{:.1}\" y=\"{:.1}\"\n                      \
                           fill=\"{srgb}\"\n                      \
                           text-anchor=\"end\"\n                      \
                           dominant-baseline=\"central\"\n                      \
                           font-weight=\"bold\"\n                      \
                           transform=\"rotate(-90)\" >\n                    \
                           {}\n                \
                           </text>\n            \
                           </g>",
                     -sq * 0.8, self.adj_y(), escape_xml(color.name()))?;
        }
        writeln!(out, "      </g>")?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Role;
    use crate::error::Error;
    use rgb::RGB8;

    fn color(name: &str, l: f64) -> Color {
        let v = (l * 2.55) as u8;
        Color::new(name, RGB8::new(v, v, v), l).unwrap()
    }

    fn palette() -> Palette {
        Palette::new("demo")
            .with(Role::Bg0, color("bg_0", 10.))
            .with(Role::Fg0, color("fg_0", 90.))
            .with(Role::Red, color("red", 50.))
    }

    #[test]
    fn derived_geometry() {
        let d = Diagram::new();
        assert_eq!(d.image_width(), 1128.);
        assert_eq!(d.image_height(), 787.5);
        assert_eq!(d.square_half(), 24.);
        assert_eq!((d.adj_x(), d.adj_y()), (0., 0.));
        let d = d.adjust_alignment(true);
        assert_eq!(d.adj_x(), 3.);
        assert!((d.adj_y() - 9.6).abs() < 1e-12);
    }

    #[test]
    fn huge_geometry_does_not_overflow() {
        let d = Diagram::new().width(u32::MAX).margin(u32::MAX);
        assert_eq!(d.image_width(), 2. * u32::MAX as f64 + 3.);
    }

    #[test]
    fn circle_has_square_area() {
        let d = Diagram::new();
        let r = d.circle_radius();
        assert!((r - 27.08).abs() < 0.01, "r = {r}");
        assert!((PI * r * r - 48. * 48.).abs() < 1e-9);
        assert_eq!(format!("{r:.1}"), "27.1");
    }

    #[test]
    fn layout_positions() {
        let d = Diagram::new();
        assert_eq!(d.swatch_center(0, 1, 50).1, 300.);
        assert!((d.band_y(10) - 540.).abs() < 1e-9);
        assert!((d.band_y(90) - 60.).abs() < 1e-9);
        assert_eq!(d.band_y(100), 0.);
        let (x, _) = d.swatch_center(0, 1, 50);
        assert!((x - 680.).abs() < 1e-9);
    }

    #[test]
    fn writes_every_part() {
        let svg = Diagram::new().to_svg(&palette()).unwrap();
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                                 <svg version=\"1.1\"\n"));
        assert!(svg.ends_with("    </g>\n</svg>\n"));
        assert!(svg.contains("width=\"1128\""));
        assert!(svg.contains("font-size=\"31.2px\""));
        assert!(svg.contains("<g transform=\"translate(125,125)\" >"));
        assert!(svg.contains("            demo\n"));
        assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"1000\" \
                              height=\"600\" fill=\"#000\" />"));
        assert_eq!(svg.matches("@font-face").count(), 2);
        // Swatches: bg_0, red, fg_0 (translated to the SVG frame).
        assert_eq!(svg.matches("<circle").count(), 2);
        assert_eq!(svg.matches("rotate(-90)").count(), 4);
        assert!(svg.contains("translate(600.0,300.0)"));
        assert!(svg.contains("r=\"27.1\""));
        assert!(svg.contains("height=\"540.0\""));
    }

    #[test]
    fn sections_in_order() {
        let svg = Diagram::new().to_svg(&palette()).unwrap();
        let axis = svg.find("<defs>").unwrap();
        let bands = svg.find("<circle").unwrap();
        let swatches = svg.find("      <g>").unwrap();
        assert!(axis < bands && bands < swatches);
        // Darkest band first.
        let dark = svg.find("fill=\"#191919\" />").unwrap();
        let light = svg.find("fill=\"#e5e5e5\" />").unwrap();
        assert!(dark < light);
    }

    #[test]
    fn swatch_text_contrast() {
        let svg = Diagram::new().to_svg(&palette()).unwrap();
        // red has L* 50, on the mid-point: light text.
        let red = svg.find("translate(600.0,300.0)").unwrap();
        let group = &svg[red ..];
        let group = &group[.. group.find("rotate(-90)").unwrap()];
        assert!(group.contains("fill=\"#e5e5e5\""));
        assert!(!group.contains("fill=\"#191919\""));
    }

    #[test]
    fn band_numerals_contrast() {
        let svg = Diagram::new().to_svg(&palette()).unwrap();
        // Dark band (L* 10) ends at 540, light band (L* 90) at 60.
        let numeral = |cy: &str| {
            let start = svg.find(&format!("<circle cx=\"0\" cy=\"{cy}\""))
                .unwrap();
            let rest = &svg[start ..];
            rest[.. rest.find("</text>").unwrap()].to_string()
        };
        let dark = numeral("540.0");
        assert!(dark.contains("fill=\"#e5e5e5\""));
        assert!(dark.contains("            10\n"));
        let light = numeral("60.0");
        assert!(light.contains("fill=\"#191919\""));
        assert!(light.contains("            90\n"));
    }

    #[test]
    fn lighter_swatches_sit_higher() {
        let p = Palette::new("up")
            .with(Role::Bg0, color("bg_0", 10.))
            .with(Role::Fg0, color("fg_0", 90.))
            .with(Role::Red, color("red", 80.));
        let svg = Diagram::new().to_svg(&p).unwrap();
        assert!(svg.contains("translate(377.8,540.0)"));
        assert!(svg.contains("translate(600.0,120.0)"));
        assert!(svg.contains("translate(822.2,60.0)"));
        assert!(!svg.contains("translate(600.0,480.0)"));
        // L* 80 is above the mid-point: dark numeral.
        let red = &svg[svg.find("translate(600.0,120.0)").unwrap() ..];
        let red = &red[.. red.find("rotate(-90)").unwrap()];
        assert!(red.contains("fill=\"#191919\""));
    }

    #[test]
    fn missing_background_writes_nothing() {
        let p = Palette::new("x").with(Role::Bg0, color("bg_0", 10.));
        let mut out = Vec::new();
        let e = Diagram::new().write(&p, &mut out);
        assert!(matches!(e, Err(Error::MissingKey(Role::Fg0))));
        assert!(out.is_empty());
    }

    #[test]
    fn names_are_escaped() {
        let p = palette().with(Role::Blue, color("<b&w>", 40.));
        let svg = Diagram::new().to_svg(&p).unwrap();
        assert!(svg.contains("&lt;b&amp;w&gt;"));
        assert!(!svg.contains("<b&w>"));
    }

    #[test]
    fn light_palette_outline_is_darkest() {
        let p = Palette::new("light")
            .with(Role::Bg0, color("bg_0", 90.))
            .with(Role::Fg0, color("fg_0", 10.))
            .with(Role::Red, color("red", 70.));
        let svg = Diagram::new().to_svg(&p).unwrap();
        assert!(svg.contains("<g stroke=\"#191919\" stroke-width=\"3.0\" >"));
        assert!(!svg.contains("<g stroke=\"#e5e5e5\""));
    }
}
