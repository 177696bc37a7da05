mod mat;
mod snf;
mod hnf;
mod echelon;
mod det;
mod charpoly;
mod eigen;

pub mod config;

pub use mat::*;
pub use snf::{snf, snf_in_place, SnfFlags, SnfResult};
pub use hnf::{hnf, hnf_in_place, HnfResult};
