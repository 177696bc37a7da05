mod abst;
mod error;

pub mod num;
pub mod lc;
pub mod poly;
pub mod algo;
pub mod util;

pub use abst::*;
pub use error::Error;
