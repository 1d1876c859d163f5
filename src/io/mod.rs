//! Input helpers.
//!
//! - page text acquisition from the transcript PDF (`pages`)

pub mod pages;

pub use pages::*;
