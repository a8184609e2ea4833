//! Drawable stage entities.
//!
//! An entity owns its native-space draw attributes ([`DrawState`]) and
//! exposes them in stage semantics through the [`Anchored`] adapter: Y-up
//! positions, counter-clockwise degrees, the 0-50 transparency scale and a
//! centered pivot. The raylib layer reads the `DrawState` back verbatim
//! when issuing draw calls.
//!
//! Submodules:
//! - [`drawable`] – shared draw attributes and the stage-space adapter
//! - [`actor`] – image-backed sprite entity
//! - [`text`] – measured, center-pivoted text entity

pub mod actor;
pub mod drawable;
pub mod text;

pub use actor::Actor;
pub use drawable::{Anchored, DrawState};
pub use text::{Text, TextMeasurer};

/// Handle to a loaded image: the texture key the render layer resolves,
/// plus the pixel dimensions every piece of sub-rectangle math needs.
///
/// Handles are cheap to clone and share; the texture itself lives in the
/// render layer's store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    pub key: String,
    pub width: u32,
    pub height: u32,
}

impl ImageHandle {
    pub fn new(key: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }
}
