mod sign;
mod int_ext;
mod ratio;
mod ff;

pub use sign::*;
pub use int_ext::*;
pub use ratio::*;
pub use ff::*;
