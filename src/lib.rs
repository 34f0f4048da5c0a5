//! Luminance diagrams of color palettes.
//!
//! - [`Color`]: a named sRGB color with its CIE L* lightness.
//! - [`Palette`]: colors indexed by [`Role`].
//! - [`Diagram`]: writes the SVG diagram of a palette.
//!
//! The diagram shows every color at the height given by its
//! lightness, the two background colors (`bg_0` and `fg_0`) as bands
//! behind them, and picks for each label the background color that
//! contrasts best ([`pick_contrast`]).
//!
//! Built-in palettes are in [`palettes`]; palette files can be read
//! with [`load`].
//!
//! ```
//! use palette_diagram::{Diagram, palettes};
//! let diagram = Diagram::new();
//! for p in palettes::all() {
//!     let mut out = Vec::new();
//!     diagram.write(p, &mut out).unwrap();
//!     assert!(!out.is_empty());
//! }
//! ```

mod color;
mod contrast;
mod diagram;
mod error;
pub mod load;
mod palette;
pub mod palettes;

pub use color::Color;
pub use contrast::{contrasting, pick_contrast};
pub use diagram::Diagram;
pub use error::{Error, Result};
pub use palette::{Palette, Role};
