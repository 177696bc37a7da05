pub mod snf;
pub mod hnf;
pub mod mat;
pub mod eigen;
pub mod poly;
