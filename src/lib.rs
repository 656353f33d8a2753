//! Interactive console gallery of the 23 Gang of Four design patterns.
//!
//! The crate is split into a catalog (discovery and grouping of pattern
//! demos), a menu controller (the interactive read-loop), and the demo
//! implementations themselves.

pub mod catalog;
pub mod cli;
pub mod demos;
pub mod error;
pub mod menu;

pub use error::{GalleryError, Result};
