mod gen;
mod lc;

pub use gen::*;
pub use lc::*;
