//! Palettes and the split of their colors into diagram roles.

use std::{collections::BTreeMap, fmt, str::FromStr};
use crate::{color::Color, error::{Error, Result}};

/// The roles a palette color may play.
///
/// Variants are declared in the order swatches are drawn, so that the
/// derived `Ord` is that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Bg0, Bg1, Bg2,
    Red, Orange, Yellow, Green, Cyan, Blue, Violet, Magenta,
    Dim0,
    Fg0, Fg1,
}

impl Role {
    /// All roles, in swatch order.
    pub const ALL: [Role; 14] = {
        use Role::*;
        [Bg0, Bg1, Bg2, Red, Orange, Yellow, Green, Cyan, Blue, Violet,
         Magenta, Dim0, Fg0, Fg1]
    };

    /// The two roles making up the diagram background: the darkest
    /// and the lightest canvas colors (for a dark palette).
    pub const BACKGROUND: [Role; 2] = [Role::Bg0, Role::Fg0];

    /// The key naming this role in palette documents.
    pub fn key(self) -> &'static str {
        use Role::*;
        match self {
            Bg0 => "bg_0", Bg1 => "bg_1", Bg2 => "bg_2",
            Red => "red", Orange => "orange", Yellow => "yellow",
            Green => "green", Cyan => "cyan", Blue => "blue",
            Violet => "violet", Magenta => "magenta",
            Dim0 => "dim_0",
            Fg0 => "fg_0", Fg1 => "fg_1",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Role::ALL.into_iter().find(|r| r.key() == s)
            .ok_or_else(|| Error::UnknownRole(s.to_string()))
    }
}

/// A named set of colors indexed by their [`Role`].
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    name: String,
    colors: BTreeMap<Role, Color>,
}

impl Palette {
    /// Return an empty palette called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Palette { name: name.into(), colors: BTreeMap::new() }
    }

    /// Add (or replace) the color playing `role`.
    pub fn insert(&mut self, role: Role, color: Color) -> &mut Self {
        self.colors.insert(role, color);
        self
    }

    /// Builder flavor of [`Palette::insert`].
    pub fn with(mut self, role: Role, color: Color) -> Self {
        self.colors.insert(role, color);
        self
    }

    /// The display name of the palette.
    pub fn name(&self) -> &str { &self.name }

    pub fn get(&self, role: Role) -> Option<&Color> { self.colors.get(&role) }

    /// Number of roles with a color.
    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// The colors at `bg_0` and `fg_0`, in that order.
    pub fn background_colors(&self) -> Result<[&Color; 2]> {
        let [bg, fg] = Role::BACKGROUND;
        let get = |r| self.get(r).ok_or(Error::MissingKey(r));
        Ok([get(bg)?, get(fg)?])
    }

    /// The colors drawn as swatches: every present role, in
    /// [`Role::ALL`] order.
    pub fn accent_colors(&self) -> Vec<&Color> {
        // `BTreeMap` iterates in `Role` order which is the swatch order.
        self.colors.values().collect()
    }
}
