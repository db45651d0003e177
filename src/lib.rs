//! Deep Space Eye - Solar System Explorer
//!
//! A library crate providing the scene, shell and enrichment components of
//! the explorer for testing and integration purposes.

pub mod camera;
pub mod catalog;
pub mod config;
pub mod enrichment;
pub mod scene;
pub mod shell;
pub mod time;
pub mod types;
pub mod ui;
