//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the parsed course record (`CourseRecord`) and its field types
//!   (`CourseCode`, `Grade`, `Frequency`, `CourseStatus`)
//! - the fallible-conversion error for numeric fields (`FieldError`)
//! - the resolved run configuration (`RunConfig`)

pub mod types;

pub use types::*;
