//! Server-side HTML rendering of the home and details views.

pub mod grid;
pub mod html;
pub mod pages;

pub use grid::{layout, render_grid, Columns};
