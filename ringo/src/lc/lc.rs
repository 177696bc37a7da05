use std::collections::hash_map::Entry;
use std::fmt::{Display, Debug};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign, Mul, MulAssign};
use ahash::AHashMap;
use itertools::Itertools;
use num_traits::Zero;
use auto_impl_ops::auto_ops;
use crate::{Elem, AddMon, AddMonOps, AddGrp, AddGrpOps, Ring, RingOps};
use crate::util::format;

use super::gen::*;

/// A finitely supported map `X -> R`, i.e. a formal sum `Σ r_i x_i`.
///
/// Terms with zero coefficient are dropped as soon as they appear, so two
/// combinations are equal iff their term maps are.
#[derive(PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    terms: AHashMap<X, R>,
    #[cfg_attr(feature = "serde", serde(skip))]
    zero: R
}

// Iteration order depends only on the inserted terms.
fn fixed_state() -> ahash::RandomState {
    ahash::RandomState::with_seeds(0, 0, 0, 0)
}

impl<X, R> Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    pub fn nterms(&self) -> usize {
        self.terms.len()
    }

    pub fn gens(&self) -> impl Iterator<Item = &X> {
        self.terms.keys()
    }

    pub fn coeff(&self, x: &X) -> &R {
        self.terms.get(x).unwrap_or(&self.zero)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&X, &R)> {
        self.terms.iter()
    }

    /// The term whose generator is maximal with respect to `cmp`.
    pub fn max_term_by<F>(&self, cmp: F) -> Option<(&X, &R)>
    where F: Fn(&X, &X) -> std::cmp::Ordering {
        self.iter().max_by(|s, t| cmp(s.0, t.0))
    }

    pub fn map_coeffs<S, F>(&self, f: F) -> Lc<X, S>
    where S: Ring, for<'x> &'x S: RingOps<S>, F: Fn(&R) -> S {
        self.iter().map(|(x, r)| (x.clone(), f(r))).collect()
    }

    /// Generators mapped to the same `Y` are summed up.
    pub fn map_gens<Y, F>(&self, f: F) -> Lc<Y, R>
    where Y: Gen, F: Fn(&X) -> Y {
        self.iter().map(|(x, r)| (f(x), r.clone())).collect()
    }

    pub fn filter_gens<F>(&self, pred: F) -> Self
    where F: Fn(&X) -> bool {
        let terms = self.terms.iter()
            .filter(|(x, _)| pred(x))
            .map(|(x, r)| (x.clone(), r.clone()));
        let mut res = Self::zero();
        res.terms.extend(terms);
        res
    }

    /// Writes the terms sorted by `cmp_for_display`, in ascending or descending order.
    pub fn fmt_sorted(&self, f: &mut std::fmt::Formatter<'_>, descending: bool) -> std::fmt::Result {
        let mut terms = self.iter().collect_vec();
        terms.sort_by(|s, t| s.0.cmp_for_display(t.0));
        if descending {
            terms.reverse();
        }
        f.write_str(&format::lc(terms.into_iter()))
    }

    fn add_term(&mut self, x: X, r: R) {
        if r.is_zero() {
            return
        }
        match self.terms.entry(x) {
            Entry::Vacant(e) => {
                e.insert(r);
            },
            Entry::Occupied(mut e) => {
                *e.get_mut() += r;
                if e.get().is_zero() {
                    e.remove();
                }
            }
        }
    }
}

impl<X, R> Default for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<X, R> From<X> for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(x: X) -> Self {
        Self::from((x, R::one()))
    }
}

impl<X, R> From<(X, R)> for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn from((x, r): (X, R)) -> Self {
        let mut res = Self::zero();
        res.add_term(x, r);
        res
    }
}

impl<X, R> FromIterator<(X, R)> for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn from_iter<T: IntoIterator<Item = (X, R)>>(iter: T) -> Self {
        iter.into_iter().fold(Self::zero(), |mut res, (x, r)| {
            res.add_term(x, r);
            res
        })
    }
}

impl<X, R> IntoIterator for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    type Item = (X, R);
    type IntoIter = std::collections::hash_map::IntoIter<X, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<X, R> Display for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_sorted(f, false)
    }
}

impl<X, R> Debug for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<X, R> Zero for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn zero() -> Self {
        Self {
            terms: AHashMap::with_hasher(fixed_state()),
            zero: R::zero()
        }
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<X, R> Neg for &Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Lc<X, R>;

    fn neg(self) -> Self::Output {
        self.map_coeffs(|r| -r)
    }
}

impl<X, R> Neg for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.terms.values_mut().for_each(|r| *r = -&*r);
        self
    }
}

#[auto_ops]
impl<X, R> AddAssign<&Lc<X, R>> for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn add_assign(&mut self, rhs: &Self) {
        for (x, r) in rhs.iter() {
            self.add_term(x.clone(), r.clone());
        }
    }
}

#[auto_ops]
impl<X, R> SubAssign<&Lc<X, R>> for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn sub_assign(&mut self, rhs: &Self) {
        for (x, r) in rhs.iter() {
            self.add_term(x.clone(), -r);
        }
    }
}

#[auto_ops]
impl<X, R> MulAssign<&R> for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn mul_assign(&mut self, rhs: &R) {
        self.terms.values_mut().for_each(|r| *r *= rhs);
        self.terms.retain(|_, r| !r.is_zero());
    }
}

// (Σ r_i x_i)(Σ s_j y_j) = Σ r_i s_j x_i y_j, when generators multiply.
#[auto_ops]
impl<X, R> Mul for &Lc<X, R>
where X: Gen + Mul<Output = X>, R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Lc<X, R>;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut res = Lc::zero();
        res.terms.reserve(self.nterms() * rhs.nterms());

        for ((x, r), (y, s)) in self.iter().cartesian_product(rhs.terms.iter()) {
            res.add_term(x.clone() * y.clone(), r * s);
        }
        res
    }
}

macro_rules! impl_alg_ops {
    ($($trait:ident),*) => { $(
        impl<X, R> $trait<Self> for Lc<X, R>
        where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {}

        impl<X, R> $trait<Lc<X, R>> for &Lc<X, R>
        where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {}
    )* };
}

impl_alg_ops!(AddMonOps, AddGrpOps);

impl<X, R> Elem for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {
    fn math_symbol() -> String {
        format!("{}<{}>", R::math_symbol(), X::math_symbol())
    }
}

impl<X, R> AddMon for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {}

impl<X, R> AddGrp for Lc<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {}
