//! Rubric Core Library
//!
//! Derives weighted grading rubrics from inline annotations in assignment
//! sources, plus the seams for fetching sources and persisting rubrics.

pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod logging;
pub mod records;
pub mod rubric;
pub mod source;
pub mod store;
pub mod update;
