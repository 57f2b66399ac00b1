//! Terminal output for sift
//!
//! Provides shared CLI functionality:
//! - Status messages and summary formatting
//! - ANSI rendering of match highlights

#![warn(missing_docs)]

pub mod output;
pub mod render;
