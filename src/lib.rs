//! `transcript-gpa` library crate.
//!
//! The binary (`tgpa`) is a thin wrapper around this library so that:
//!
//! - the extraction pipeline is testable without a PDF or a spawned process
//! - the page-text source can be swapped (see `io::PageSource`)

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod extract;
pub mod io;
pub mod report;
