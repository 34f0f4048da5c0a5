//! Built-in palettes: the four variants of
//! [Selenized](https://github.com/jan-warchol/selenized).

use std::ops::Deref;
use lazy_static::lazy_static;
use rgb::RGB8;
use crate::{color::Color, palette::{Palette, Role}};

mod selenized;

fn palette(name: &str, colors: &[(Role, u32)]) -> Palette {
    let mut p = Palette::new(name);
    for &(role, hex) in colors {
        let srgb = RGB8::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8);
        p.insert(role, Color::from_srgb(role.key(), srgb));
    }
    p
}

lazy_static! {
    /// Selenized black: dark variant on a neutral black.
    pub static ref SELENIZED_BLACK: Palette =
        palette("selenized-black", &selenized::BLACK);
    /// Selenized dark: dark variant on a blue-green background.
    pub static ref SELENIZED_DARK: Palette =
        palette("selenized-dark", &selenized::DARK);
    /// Selenized light: light variant on a beige background.
    pub static ref SELENIZED_LIGHT: Palette =
        palette("selenized-light", &selenized::LIGHT);
    /// Selenized white: light variant on a neutral white.
    pub static ref SELENIZED_WHITE: Palette =
        palette("selenized-white", &selenized::WHITE);

    static ref ALL: [&'static Palette; 4] =
        [SELENIZED_BLACK.deref(), SELENIZED_DARK.deref(),
         SELENIZED_LIGHT.deref(), SELENIZED_WHITE.deref()];
}

/// Return an iterator on all built-in palettes.
pub fn all() -> impl Iterator<Item = &'static Palette> {
    ALL.iter().copied()
}

/// Return the built-in palette called `name`, if any.
pub fn find(name: &str) -> Option<&'static Palette> {
    all().find(|p| p.name() == name)
}
