use std::cmp::Ordering;
use std::fmt::{Display, Debug};
use std::str::FromStr;
use itertools::Itertools;
use num_traits::One;
use regex::Regex;

use crate::{Elem, Error};
use crate::lc::{Gen, OrdForDisplay};
use crate::util::format::subscript;
use super::{Mono, MonoOrd, MultiDeg, Var};
use super::var::{fmt_mono, parse_mono};

pub type VarN<const X: char> = Var<X, MultiDeg>;

impl<const X: char> VarN<X> {
    pub fn deg_for(&self, i: usize) -> usize {
        self.0[i]
    }

    pub fn eval<R>(&self, xs: &[R]) -> R
    where R: crate::Ring, for<'x> &'x R: crate::RingOps<R> {
        R::product(self.0.iter().map(|(&i, &d)| {
            assert!(i < xs.len(), "no value given for {X}{}", subscript(i));
            xs[i].pow_n(d)
        }))
    }

    fn fmt_impl(&self, unicode: bool) -> String { 
        let s = self.0.iter().map(|(&i, &d)| {
            let x = if unicode { 
                format!("{X}{}", subscript(i))
            } else { 
                format!("{X}_{}", i)
            };
            fmt_mono(&x, d, unicode)
        }).join("");

        if s.is_empty() { 
            "1".to_string()
        } else { 
            s
        }
    }
}

impl<const X: char> From<(usize, usize)> for VarN<X> {
    fn from(value: (usize, usize)) -> Self {
        Self::from_iter([value])
    }
}

impl<const X: char, const N: usize> From<[usize; N]> for VarN<X> {
    fn from(degs: [usize; N]) -> Self {
        Self::from(MultiDeg::from(degs))
    }
}

impl<const X: char> FromIterator<(usize, usize)> for VarN<X> {
    fn from_iter<T: IntoIterator<Item = (usize, usize)>>(iter: T) -> Self {
        Self::from(MultiDeg::from_iter(iter))
    }
}

impl<const X: char> Display for VarN<X> { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.fmt_impl(true))
    }
}

impl<const X: char> Debug for VarN<X> { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<const X: char> FromStr for VarN<X> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "1" { 
            return Ok(Var::one())
        }

        let err = |_| Error::Other(format!("bad pattern for '{X}'"));
        let p = format!(r"({X}_([0-9]+))(\^[0-9]+)?");
        let p_all = Regex::new(&format!(r"^({p}\s?)+$")).map_err(err)?;

        if !p_all.is_match(s) { 
            return Err(Error::Parse(s.to_string()))
        }

        let r = Regex::new(&p).map_err(err)?;
        let mut degs = vec![];
        
        for c in r.captures_iter(s) {
            let x = &c[1];
            let i = c[2].parse::<usize>().map_err(|_| Error::Parse(s.to_string()))?;
            let d = parse_mono(x, &c[0])?;
            degs.push((i, d));
        };

        Ok(VarN::from_iter(degs))
    }
}

#[cfg(feature = "serde")]
impl<const X: char> serde::Serialize for VarN<X> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        serializer.serialize_str(&self.fmt_impl(false))
    }
}

#[cfg(feature = "serde")]
impl<'de, const X: char> serde::Deserialize<'de> for VarN<X> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: serde::Deserializer<'de> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}        

impl<const X: char> Elem for VarN<X> { 
    fn math_symbol() -> String {
        format!("{X}")
    }
}

impl<const X: char> OrdForDisplay for VarN<X> { 
    fn cmp_for_display(&self, other: &Self) -> Ordering {
        self.0.cmp_grlex(&other.0)
    }
}

impl<const X: char> Gen for VarN<X> {}

impl<const X: char> Mono for VarN<X> {
    type Deg = MultiDeg;

    fn deg(&self) -> Self::Deg {
        self.0.clone()
    }

    fn total_deg(&self) -> usize {
        self.0.total()
    }

    fn divides(&self, other: &Self) -> bool { 
        self.0.divides(&other.0)
    }

    fn lcm(&self, other: &Self) -> Self {
        Self(self.0.lcm(&other.0))
    }

    fn cmp_by(&self, other: &Self, ord: MonoOrd) -> Ordering {
        match ord { 
            MonoOrd::Lex     => self.0.cmp_lex(&other.0),
            MonoOrd::GrLex   => self.0.cmp_grlex(&other.0),
            MonoOrd::GrevLex => self.0.cmp_grevlex(&other.0),
        }
    }
}
