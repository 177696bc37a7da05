mod groebner;
mod ideal;

pub use ringo::poly::MonoOrd;
pub use groebner::{monic, reduce, s_poly, groebner, reduced_groebner};
pub use ideal::Ideal;
