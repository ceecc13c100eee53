//! Kanban board grouping
//!
//! Arranges tasks into the five-column layout shared by the board page and
//! the CLI's grouped listing.

mod model;

pub use model::*;
