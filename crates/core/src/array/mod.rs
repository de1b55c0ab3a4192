//! Grid storage, element traits, and structuring-element machinery

mod element;
mod grid;
pub mod position;
mod structuring;

pub use element::GridElement;
pub use grid::Grid;
pub use structuring::{box_element, cross, NeighborOffset, Neighborhood};
