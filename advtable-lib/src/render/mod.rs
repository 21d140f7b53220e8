//! Table rendering.
//!
//! Rendering is outside the sorting core: a renderer reads
//! [`AdvancedTable::header`](crate::table::AdvancedTable::header) and
//! [`AdvancedTable::body`](crate::table::AdvancedTable::body) and turns each
//! row into cells with a caller-supplied function. This module ships a plain
//! text renderer.

mod text;

pub use text::{ASC_INDICATOR, DESC_INDICATOR, default_cells, fit, render_text};
