use std::cmp::Ordering;
use std::ops::{Mul, Div};
use derive_more::Display;
use num_traits::One;
use crate::lc::Gen;

/// Monomial orders.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Display)]
pub enum MonoOrd { 
    #[display("lex")]
    Lex, 
    #[display("grlex")]
    GrLex, 
    #[default]
    #[display("grevlex")]
    GrevLex
}

pub trait Mono: 
    From<Self::Deg> +
    One + 
    Mul<Output = Self> + 
    Div<Output = Self> + 
    Gen
{
    type Deg;

    fn deg(&self) -> Self::Deg;
    fn total_deg(&self) -> usize;
    fn divides(&self, other: &Self) -> bool;
    fn lcm(&self, other: &Self) -> Self;
    fn cmp_by(&self, other: &Self, ord: MonoOrd) -> Ordering;

    fn is_unit(&self) -> bool { 
        self.is_one()
    }
}
