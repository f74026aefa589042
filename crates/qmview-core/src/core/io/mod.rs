//! Hand-off of display models to and from files.
//!
//! The rendering surface only depends on the two model shapes, so the JSON encoding
//! here is the whole external interface of the library. Drawn scenes (SVG) live in
//! [`render::svg`](crate::render::svg).

pub mod json;
pub mod traits;
