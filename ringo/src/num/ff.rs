#![allow(non_upper_case_globals)]

use std::ops::{Add, Neg, Sub, Mul, Div, Rem, AddAssign, SubAssign, MulAssign, DivAssign, RemAssign};
use std::str::FromStr;
use derive_more::{Display, Debug};
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;

use crate::{Elem, AddMonOps, AddGrpOps, MonOps, RingOps, FieldOps, EucRingOps, AddMon, AddGrp, Mon, Ring, EucRing, Field};
use crate::Error;

type I = i32;

/// The prime field `Z/pZ`, represented by `0 <= a < p`.
///
/// `p` is assumed to be prime; this is not checked.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, Debug)]
#[display("{}", _0)]
#[debug("{}", _0)]
pub struct FF<const p: I>(I);

impl<const p: I> FF<p> {
    pub fn new(a: I) -> Self {
        assert!(p > 1);
        Self(a.rem_euclid(p))
    }

    fn reduce(a: i64) -> Self {
        Self(a.rem_euclid(p as i64) as I)
    }

    /// All `p` elements, `0, 1, ..., p - 1`.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..p).map(Self)
    }

    // square and multiply
    fn pow_u(&self, mut e: u32) -> Self {
        let mut base = *self;
        let mut res = Self::one();
        while e > 0 {
            if e & 1 == 1 {
                res *= base;
            }
            base *= base;
            e >>= 1;
        }
        res
    }
}

impl<const p: I> From<I> for FF<p> {
    fn from(a: I) -> Self {
        Self::new(a)
    }
}

impl<const p: I> FromStr for FF<p> {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<I>() {
            Ok(a) => Ok(Self::new(a)),
            Err(_) => Err(Error::Parse(s.to_string()))
        }
    }
}

impl<const p: I> Zero for FF<p> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const p: I> One for FF<p> {
    fn one() -> Self {
        Self(1)
    }

    fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl<const p: I> Neg for FF<p> {
    type Output = Self;
    fn neg(self) -> Self {
        if self.0 == 0 { self } else { Self(p - self.0) }
    }
}

impl<const p: I> Neg for &FF<p> {
    type Output = FF<p>;
    fn neg(self) -> FF<p> {
        -*self
    }
}

#[auto_ops]
impl<const p: I> AddAssign<&FF<p>> for FF<p> {
    fn add_assign(&mut self, rhs: &FF<p>) {
        *self = Self::reduce(self.0 as i64 + rhs.0 as i64)
    }
}

#[auto_ops]
impl<const p: I> SubAssign<&FF<p>> for FF<p> {
    fn sub_assign(&mut self, rhs: &FF<p>) {
        *self = Self::reduce(self.0 as i64 - rhs.0 as i64)
    }
}

// products of representatives fit in i64.
#[auto_ops]
impl<const p: I> MulAssign<&FF<p>> for FF<p> {
    fn mul_assign(&mut self, rhs: &FF<p>) {
        *self = Self::reduce(self.0 as i64 * rhs.0 as i64)
    }
}

#[auto_ops]
impl<const p: I> DivAssign<&FF<p>> for FF<p> {
    fn div_assign(&mut self, rhs: &FF<p>) {
        let Some(r) = rhs.inv() else {
            panic!("division by zero")
        };
        *self *= r
    }
}

#[auto_ops]
impl<const p: I> RemAssign<&FF<p>> for FF<p> {
    fn rem_assign(&mut self, rhs: &FF<p>) {
        assert!(!rhs.is_zero(), "division by zero");
        *self = Self::zero()
    }
}

macro_rules! impl_alg_ops {
    ($($trait:ident),*) => { $(
        impl<const p: I> $trait for FF<p> {}
        impl<const p: I> $trait<FF<p>> for &FF<p> {}
    )* };
}

impl_alg_ops!(AddMonOps, AddGrpOps, MonOps, RingOps, EucRingOps, FieldOps);

impl<const p: I> Elem for FF<p> {
    fn math_symbol() -> String {
        format!("F{}", crate::util::format::subscript(p))
    }
}

impl<const p: I> AddMon for FF<p> {}
impl<const p: I> AddGrp for FF<p> {}
impl<const p: I> Mon for FF<p> {}

impl<const p: I> Ring for FF<p> {
    // a^(p-2) = a^-1 by Fermat.
    fn inv(&self) -> Option<Self> {
        (!self.is_zero()).then(|| self.pow_u((p - 2) as u32))
    }

    fn is_unit(&self) -> bool {
        !self.is_zero()
    }

    fn normalizing_unit(&self) -> Self {
        self.inv().unwrap_or_else(Self::one)
    }
}

impl<const p: I> EucRing for FF<p> {}

impl<const p: I> Field for FF<p> {
    fn characteristic() -> usize {
        p as usize
    }

    // a^p = a on the prime field.
    fn pth_root(&self) -> Option<Self> {
        Some(*self)
    }
}
