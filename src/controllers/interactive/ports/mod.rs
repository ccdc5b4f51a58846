//! Port definitions for the interactive controller.
//!
//! The controller pushes frames, zoom feedback and render errors out through
//! these traits; drawing surfaces implement them.

pub mod presenter;
