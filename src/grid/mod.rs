//! Character grids and the searches run over them
//!
//! A `Grid` owns its `Node`s; each node refers to its neighbours by
//! `Position`, never by pointer.

mod direction;
mod graph;
mod node;
mod pattern;
mod search;

pub use direction::Direction;
pub use graph::Grid;
pub use node::{Node, Position};
pub use pattern::{complement, is_cross_match};
pub use search::{FoundPaths, search_all, search_all_parallel, search_anchor, search_direction};
