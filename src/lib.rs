//! ascii-grid library crate.
//!
//! Converts a decoded image into a grid of per-cell luminance and color
//! values sized for a terminal. See [`ascii::convert_to_ascii_pixels`].

pub mod ascii;
pub mod cli;
pub mod config;
pub mod terminal;
