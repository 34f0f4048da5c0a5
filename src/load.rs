//! Read palettes from HJSON (or JSON) documents.
//!
//! A palette document looks like
//!
//! ```text
//! {
//!   name: selenized-dark
//!   colors: {
//!     bg_0: "#103c48"
//!     fg_0: {
//!       srgb: "#adbcbc"
//!       lab_l: 75
//!     }
//!     red: "#fa5750"
//!   }
//! }
//! ```
//!
//! The roles may also sit next to `name` without the `colors` object.
//! When `lab_l` is not given, it is computed from the sRGB value.
//! Keys that are not a [`Role`] are ignored.

use std::{fs::File, io::{BufReader, Read}, path::Path};
use serde_hjson::Value::{self, *};
use crate::{color::Color, palette::{Palette, Role},
            error::{Error, Result}};

fn number(v: &Value) -> Option<f64> {
    match *v {
        F64(x) => Some(x),
        I64(i) => Some(i as f64),
        U64(u) => Some(u as f64),
        _ => None,
    }
}

fn color_of_value(role: Role, v: &Value) -> Result<Color> {
    let name = role.key();
    match v {
        String(s) => Color::parse(name, s),
        Object(m) => {
            let srgb = match m.get("srgb") {
                Some(String(s)) => Color::parse(name, s)?,
                _ => return Err(Error::MalformedColor(
                    format!("{name}: no `srgb` string"))),
            };
            match m.get("lab_l") {
                None => Ok(srgb),
                Some(l) => match number(l) {
                    Some(l) => Color::new(name, srgb.srgb(), l),
                    None => Err(Error::MalformedColor(
                        format!("{name}: `lab_l` is not a number"))),
                },
            }
        }
        _ => Err(Error::MalformedColor(
            format!("{name}: expected a string or an object, got {v:?}"))),
    }
}

fn palette_of_value(v: Value) -> Result<Palette> {
    let doc = match v {
        Object(m) => m,
        _ => return Err(Error::Parse("a palette must be an object".into())),
    };
    let name = match doc.get("name") {
        Some(String(n)) => n.clone(),
        Some(_) => return Err(Error::Parse("`name` must be a string".into())),
        None => return Err(Error::MissingField("name")),
    };
    let colors = match doc.get("colors") {
        Some(Object(c)) => c,
        Some(_) => return Err(Error::Parse("`colors` must be an object".into())),
        None => &doc,
    };
    let mut palette = Palette::new(name);
    for (key, v) in colors.iter() {
        if let Ok(role) = key.parse::<Role>() {
            palette.insert(role, color_of_value(role, v)?);
        }
    }
    Ok(palette)
}

/// Parse a palette document.
pub fn from_str(s: &str) -> Result<Palette> {
    let v: Value = serde_hjson::from_str(s)
        .map_err(|e| Error::Parse(e.to_string()))?;
    palette_of_value(v)
}

/// Read a palette document from `rd`.
pub fn from_reader(rd: impl Read) -> Result<Palette> {
    let v: Value = serde_hjson::from_reader(rd)
        .map_err(|e| Error::Parse(e.to_string()))?;
    palette_of_value(v)
}

/// Read the palette document at `path`.
pub fn from_path(path: impl AsRef<Path>) -> Result<Palette> {
    let path = path.as_ref();
    let fh = File::open(path)?;
    from_reader(BufReader::new(fh)).map_err(|e| match e {
        Error::Parse(msg) => Error::Parse(format!("{}: {msg}", path.display())),
        e => e,
    })
}
