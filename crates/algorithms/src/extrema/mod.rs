//! Local and regional extrema detection

mod local;
mod regional;

pub use local::{locmax, locmin, locmin_max};
pub use regional::{regmax, regmin, regmin_max};
