use std::cmp::Ordering;
use std::fmt::{Display, Debug};
use std::ops::{AddAssign, Mul, MulAssign, DivAssign, SubAssign, Div};
use std::str::FromStr;
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;

use crate::{Elem, Ring, RingOps, Error};
use crate::lc::{Gen, OrdForDisplay};
use crate::util::format::superscript;
use super::{Mono, MonoOrd};

// `Var<X, I>` : monomials X^d (univar, I = usize) 
// or ΠX_i^{d_i} (multivar, I = MultiDeg).

#[derive(Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Var<const X: char, I>(
    pub(crate) I
);

impl<const X: char, I> Var<X, I> {
    pub fn var_symbol() -> char { 
        X
    }
}

impl<const X: char, I> From<I> for Var<X, I> {
    fn from(d: I) -> Self {
        Self(d)
    }
}

impl<const X: char, I> One for Var<X, I>
where I: for<'x> AddAssign<&'x I> + Zero {
    fn one() -> Self {
        Self::from(I::zero()) // x^0 = 1.
    }
}

#[auto_ops]
impl<const X: char, I> MulAssign<&Var<X, I>> for Var<X, I>
where I: for<'x> AddAssign<&'x I> {
    fn mul_assign(&mut self, rhs: &Var<X, I>) {
        self.0 += &rhs.0 // x^i * x^j = x^{i+j}
    }
}

// panics unless `rhs` divides `self`.
#[auto_ops]
impl<const X: char, I> DivAssign<&Var<X, I>> for Var<X, I>
where I: for<'x> SubAssign<&'x I> {
    fn div_assign(&mut self, rhs: &Var<X, I>) {
        self.0 -= &rhs.0
    }
}

impl<const X: char> Var<X, usize> {
    pub fn eval<R>(&self, x: &R) -> R
    where R: Ring, for<'x> &'x R: RingOps<R> {
        x.pow_n(self.0)
    }
}

impl<const X: char> Display for Var<X, usize> { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&fmt_mono(&X.to_string(), self.0, true))
    }
}

impl<const X: char> Debug for Var<X, usize> { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<const X: char> FromStr for Var<X, usize> {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mono(&X.to_string(), s).map(Self)
    }
}

#[cfg(feature = "serde")]
impl<const X: char> serde::Serialize for Var<X, usize> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        serializer.serialize_str(&fmt_mono(&X.to_string(), self.0, false))
    }
}

#[cfg(feature = "serde")]
impl<'de, const X: char> serde::Deserialize<'de> for Var<X, usize> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: serde::Deserializer<'de> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl<const X: char> Elem for Var<X, usize> { 
    fn math_symbol() -> String {
        format!("{X}")
    }
}

impl<const X: char> OrdForDisplay for Var<X, usize> { 
    fn cmp_for_display(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl<const X: char> Gen for Var<X, usize> {}

impl<const X: char> Mono for Var<X, usize> {
    type Deg = usize;

    fn deg(&self) -> usize {
        self.0
    }

    fn total_deg(&self) -> usize {
        self.0
    }

    fn divides(&self, other: &Self) -> bool { 
        self.0 <= other.0
    }

    fn lcm(&self, other: &Self) -> Self {
        Self(usize::max(self.0, other.0))
    }

    fn cmp_by(&self, other: &Self, _ord: MonoOrd) -> Ordering {
        self.cmp(other)
    }
}

pub(crate) fn fmt_mono(x: &str, d: usize, unicode: bool) -> String {
    if d == 0 { 
        "1".to_string()
    } else if d == 1 { 
        x.to_string()
    } else if unicode {
        let e = superscript(d); 
        format!("{x}{e}")
    } else { 
        format!("{x}^{d}")
    }
}

pub(crate) fn parse_mono(x: &str, s: &str) -> Result<usize, Error> {
    let s = s.trim();
    if s == "1" { 
        Ok(0)
    } else if s == x { 
        Ok(1)
    } else if let Some(d) = s.strip_prefix(&format!("{x}^")) { 
        d.parse().map_err(|_| Error::Parse(s.to_string()))
    } else { 
        Err(Error::Parse(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type M = Var<'x', usize>;

    #[test]
    fn init() { 
        let d = M::from(2);
        assert_eq!(d.0, 2);
        assert_eq!(d.deg(), 2);
        assert_eq!(M::var_symbol(), 'x');
    }

    #[test]
    fn from_str() { 
        assert_eq!(M::from_str("1"), Ok(M::one()));
        assert_eq!(M::from_str("x"), Ok(M::from(1)));
        assert_eq!(M::from_str("x^2"), Ok(M::from(2)));
        assert!(M::from_str("2").is_err());
        assert!(M::from_str("y").is_err());
    }

    #[test]
    fn display() { 
        assert_eq!(M::from(0).to_string(), "1");
        assert_eq!(M::from(1).to_string(), "x");
        assert_eq!(M::from(2).to_string(), "x²");
        assert_eq!(M::from(12).to_string(), "x¹²");
    }

    #[test]
    fn mul_div() { 
        let x = M::from;
        assert_eq!(x(2) * x(3), x(5));
        assert_eq!(x(5) / x(3), x(2));
        assert!(x(2).divides(&x(3)));
        assert!(!x(3).divides(&x(2)));
        assert_eq!(x(2).lcm(&x(3)), x(3));
    }

    #[test]
    fn eval() { 
        assert_eq!(M::from(0).eval(&2), 1);
        assert_eq!(M::from(1).eval(&2), 2);
        assert_eq!(M::from(10).eval(&2), 1024);
    }

    #[test]
    fn ord() { 
        assert!(M::from(0) < M::from(1));
        assert!(M::from(1) < M::from(2));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serialize() { 
        let d = M::from(2);
        let ser = serde_json::to_string(&d).unwrap();
        let des = serde_json::from_str::<M>(&ser).unwrap();
        
        assert_eq!(&ser, "\"x^2\"");
        assert_eq!(d, des);
    }
}
