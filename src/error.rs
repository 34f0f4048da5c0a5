//! Errors raised while classifying, loading or rendering palettes.

use std::io;
use thiserror::Error;
use crate::palette::Role;

/// Errors that can occur when building a palette or writing its diagram.
#[derive(Debug, Error)]
pub enum Error {
    /// A background role (`bg_0` or `fg_0`) is absent from the palette.
    #[error("palette has no color for the required role `{0}`")]
    MissingKey(Role),

    /// A color value has no usable sRGB or lightness representation.
    #[error("malformed color: {0}")]
    MalformedColor(String),

    /// A role key that is not part of the palette taxonomy.
    #[error("unknown palette role `{0}`")]
    UnknownRole(String),

    /// A palette document lacks a mandatory field.
    #[error("palette document has no `{0}` field")]
    MissingField(&'static str),

    /// The palette document could not be parsed.
    #[error("cannot parse palette: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result type for palette operations.
pub type Result<T> = std::result::Result<T, Error>;
