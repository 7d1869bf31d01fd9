//! Core types shared by the streamhist crates
//!
//! Every member crate reports failures through the single [`Error`] enum
//! defined here, so callers can mix histogram queries, exports and rendering
//! under one `Result` type.

pub mod error;

pub use error::{Error, Result};
