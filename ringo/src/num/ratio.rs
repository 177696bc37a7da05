use std::cmp::Ordering;
use std::fmt::{Display, Debug};
use std::str::FromStr;
use std::ops::{Mul, Add, Sub, Neg, AddAssign, SubAssign, MulAssign, Div, DivAssign, Rem, RemAssign};
use num_bigint::BigInt;
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;
use crate::{EucRing, EucRingOps, Elem, Mon, AddMon, AddGrp, AddMonOps, AddGrpOps, MonOps, RingOps, Ring, FieldOps, Field};
use crate::num::{Integer, IntOps};
use crate::util::format::paren_expr;
use crate::Error;

/// Fractions `p / q` over a Euclidean ring `T`.
///
/// Always kept reduced: `gcd(p, q) = 1` and `q` normalized, so that
/// equal fractions have equal representatives.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ratio<T> {
    numer: T,
    denom: T,
}

/// Arbitrary precision rationals.
pub type Rational = Ratio<BigInt>;

impl<T> Ratio<T> {
    pub fn numer(&self) -> &T {
        &self.numer
    }

    pub fn denom(&self) -> &T {
        &self.denom
    }

    pub fn into_parts(self) -> (T, T) {
        (self.numer, self.denom)
    }
}

impl<T> Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    /// `numer / denom` in lowest terms. Panics if `denom` is zero.
    pub fn new(numer: T, denom: T) -> Self {
        assert!(!denom.is_zero(), "zero denominator");
        let mut r = Self { numer, denom };
        r.reduce();
        r
    }

    pub fn from_numer(numer: T) -> Self {
        Self { numer, denom: T::one() }
    }

    fn is_integral(&self) -> bool {
        self.denom.is_one()
    }

    fn reduce(&mut self) {
        if self.numer.is_zero() {
            self.denom = T::one();
            return
        }

        let g = T::gcd(&self.numer, &self.denom);
        if !g.is_one() {
            self.numer /= &g;
            self.denom /= &g;
        }

        let u = self.denom.normalizing_unit();
        if !u.is_one() {
            self.numer *= &u;
            self.denom *= &u;
        }
    }

    // a/b ± c/d over the common denominator lcm(b, d).
    fn add_or_sub(&mut self, rhs: &Self, sub: bool) {
        let c = if sub { -&rhs.numer } else { rhs.numer.clone() };

        if self.denom == rhs.denom {
            self.numer += c;
        } else {
            let l = T::lcm(&self.denom, &rhs.denom);
            let a = &self.numer * (&l / &self.denom);
            self.numer = a + c * (&l / &rhs.denom);
            self.denom = l;
        }

        self.reduce();
    }
}

impl<T> From<i32> for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn from(i: i32) -> Self {
        Self::from_numer(T::from(i))
    }
}

/// Parses `"a"` or `"a/b"`.
impl<T> FromStr for Ratio<T>
where T: EucRing + FromStr, for<'x> &'x T: EucRingOps<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |t: &str| t.trim().parse::<T>().map_err(|_| Error::Parse(s.to_string()));

        let (p, q) = match s.split_once('/') {
            Some((p, q)) => (parse(p)?, parse(q)?),
            None => (parse(s)?, T::one())
        };

        if q.is_zero() {
            return Err(Error::Parse(s.to_string()))
        }

        Ok(Self::new(p, q))
    }
}

impl<T> Default for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T> Display for Ratio<T>
where T: Display + One + PartialEq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = paren_expr(&self.numer);
        if self.denom.is_one() {
            write!(f, "{p}")
        } else {
            write!(f, "{p}/{}", paren_expr(&self.denom))
        }
    }
}

impl<T> Debug for Ratio<T>
where T: Display + One + PartialEq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<T> Zero for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn zero() -> Self {
        Self::from_numer(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T> One for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn one() -> Self {
        Self::from_numer(T::one())
    }

    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }
}

#[auto_ops]
impl<T> AddAssign<&Ratio<T>> for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn add_assign(&mut self, rhs: &Ratio<T>) {
        self.add_or_sub(rhs, false)
    }
}

#[auto_ops]
impl<T> SubAssign<&Ratio<T>> for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn sub_assign(&mut self, rhs: &Ratio<T>) {
        self.add_or_sub(rhs, true)
    }
}

impl<T> Neg for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self { numer: -self.numer, denom: self.denom }
    }
}

impl<T> Neg for &Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    type Output = Ratio<T>;
    fn neg(self) -> Ratio<T> {
        -self.clone()
    }
}

// (a/b)(c/d) = (a/g)(c/h) / (b/h)(d/g) with g = gcd(a, d), h = gcd(b, c),
// which is already reduced.
#[auto_ops]
impl<T> MulAssign<&Ratio<T>> for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn mul_assign(&mut self, rhs: &Ratio<T>) {
        if self.is_zero() || rhs.is_zero() {
            *self = Self::zero();
            return
        }
        if rhs.is_integral() && self.is_integral() {
            self.numer *= &rhs.numer;
            return
        }

        let g = T::gcd(&self.numer, &rhs.denom);
        let h = T::gcd(&self.denom, &rhs.numer);

        self.numer = (&self.numer / &g) * (&rhs.numer / &h);
        self.denom = (&self.denom / &h) * (&rhs.denom / &g);
        self.reduce();
    }
}

#[auto_ops]
impl<T> DivAssign<&Ratio<T>> for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn div_assign(&mut self, rhs: &Ratio<T>) {
        let Some(r) = rhs.inv() else {
            panic!("division by zero")
        };
        *self *= r
    }
}

// every nonzero element divides exactly.
#[auto_ops]
impl<'a, 'b, T> Rem<&'b Ratio<T>> for &'a Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    type Output = Ratio<T>;
    fn rem(self, rhs: &'b Ratio<T>) -> Ratio<T> {
        assert!(!rhs.is_zero(), "division by zero");
        Ratio::zero()
    }
}

macro_rules! impl_alg_ops {
    ($($trait:ident),*) => { $(
        impl<T> $trait for Ratio<T>
        where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

        impl<T> $trait<Ratio<T>> for &Ratio<T>
        where T: EucRing, for<'x> &'x T: EucRingOps<T> {}
    )* };
}

impl_alg_ops!(AddMonOps, AddGrpOps, MonOps, RingOps, EucRingOps, FieldOps);

impl<T> Elem for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn math_symbol() -> String {
        match T::math_symbol().as_str() {
            "Z" => "Q".to_string(),
            t => format!("Frac({t})")
        }
    }
}

impl<T> AddMon for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

impl<T> AddGrp for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

impl<T> Mon for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

impl<T> Ring for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn inv(&self) -> Option<Self> {
        (!self.is_zero()).then(|| Self::new(self.denom.clone(), self.numer.clone()))
    }

    fn is_unit(&self) -> bool {
        !self.is_zero()
    }

    fn normalizing_unit(&self) -> Self {
        self.inv().unwrap_or_else(Self::one)
    }
}

impl<T> EucRing for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

impl<T> Field for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

// Denominators are positive, so p/q < r/s iff ps < rq.
impl<T> Ord for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denom == other.denom {
            self.numer.cmp(&other.numer)
        } else {
            Ord::cmp(&(&self.numer * &other.denom), &(&other.numer * &self.denom))
        }
    }
}

impl<T> PartialOrd for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
