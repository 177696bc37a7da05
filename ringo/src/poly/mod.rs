mod mono;
mod mdeg;
mod var;
mod mvar;
mod poly;
mod univar;
mod resultant;
mod roots;

pub use mono::*;
pub use mdeg::MultiDeg;
pub use var::Var;
pub use mvar::VarN;
pub use poly::*;
pub use roots::RootField;
