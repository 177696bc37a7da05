use std::fmt::{Display, Debug};
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg};
use delegate::delegate;
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;

use crate::{Elem, AddMon, AddMonOps, AddGrp, AddGrpOps, Mon, MonOps, Ring, RingOps};
use crate::lc::Lc;
use super::{Var, VarN, MultiDeg, Mono, MonoOrd};

/// Univariate polynomials in `X`.
pub type Poly <const X: char, R> = PolyBase<Var<X, usize>, R>;

/// Polynomials in the variables `X₀, X₁, ...`.
pub type PolyN<const X: char, R> = PolyBase<VarN<X>, R>;

/// A linear combination of monomials `X` over `R`.
#[derive(Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    terms: Lc<X, R>,
    // returned as the leading term of zero.
    #[cfg_attr(feature = "serde", serde(skip))]
    zero_term: (X, R)
}

impl<X, R> PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    pub fn from_const(r: R) -> Self {
        Self::from((X::one(), r))
    }

    delegate! {
        to self.terms {
            pub fn nterms(&self) -> usize;
            pub fn coeff(&self, x: &X) -> &R;
            pub fn iter(&self) -> impl Iterator<Item = (&X, &R)>;
        }
    }

    pub fn coeff_for(&self, d: X::Deg) -> &R {
        self.coeff(&X::from(d))
    }

    pub fn is_const(&self) -> bool {
        self.iter().all(|(x, _)| x.is_one())
    }

    pub fn const_term(&self) -> &R {
        self.coeff(&X::one())
    }

    /// The leading term in the display order; `(1, 0)` for the zero polynomial.
    pub fn lead_term(&self) -> (&X, &R) {
        self.max_term(|x, y| x.cmp_for_display(y))
    }

    /// The leading term with respect to `ord`; `(1, 0)` for the zero polynomial.
    pub fn lead_term_by(&self, ord: MonoOrd) -> (&X, &R) {
        self.max_term(|x, y| x.cmp_by(y, ord))
    }

    pub fn lead_coeff(&self) -> &R {
        self.lead_term().1
    }

    pub fn total_deg(&self) -> usize {
        self.iter().map(|(x, _)| x.total_deg()).max().unwrap_or(0)
    }

    /// At most two terms.
    pub fn is_binomial(&self) -> bool {
        self.nterms() <= 2
    }

    pub fn map_coeffs<S, F>(&self, f: F) -> PolyBase<X, S>
    where S: Ring, for<'x> &'x S: RingOps<S>, F: Fn(&R) -> S {
        self.terms.map_coeffs(f).into()
    }

    fn max_term<F>(&self, cmp: F) -> (&X, &R)
    where F: Fn(&X, &X) -> std::cmp::Ordering {
        match self.terms.max_term_by(cmp) {
            Some(t) => t,
            None => (&self.zero_term.0, &self.zero_term.1)
        }
    }
}

impl<const X: char, R> PolyN<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    /// `X_i`.
    pub fn variable(i: usize) -> Self {
        VarN::from(MultiDeg::from((i, 1))).into()
    }

    pub fn mono<const N: usize>(degs: [usize; N]) -> VarN<X> {
        VarN::from(degs)
    }

    /// The value at `X_i = xs[i]`.
    pub fn eval(&self, xs: &[R]) -> R {
        self.iter().fold(R::zero(), |res, (x, r)| res + r * x.eval(xs))
    }

    /// Whether no `X_i` with `i` in `vars` occurs.
    pub fn is_free_of(&self, vars: &[usize]) -> bool {
        vars.iter().all(|&i|
            self.iter().all(|(x, _)| x.deg_for(i) == 0)
        )
    }
}

impl<X, R> From<Lc<X, R>> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(terms: Lc<X, R>) -> Self {
        Self { terms, zero_term: (X::one(), R::zero()) }
    }
}

impl<X, R> From<X> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(x: X) -> Self {
        Lc::from(x).into()
    }
}

impl<X, R> From<(X, R)> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(term: (X, R)) -> Self {
        Lc::from(term).into()
    }
}

impl<X, R> From<i32> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(i: i32) -> Self {
        Self::from_const(R::from(i))
    }
}

impl<X, R> FromIterator<(X, R)> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn from_iter<T: IntoIterator<Item = (X, R)>>(iter: T) -> Self {
        Lc::from_iter(iter).into()
    }
}

impl<X, R> IntoIterator for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    type Item = (X, R);
    type IntoIter = <Lc<X, R> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

// highest degree first.
impl<X, R> Display for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.terms.fmt_sorted(f, true)
    }
}

impl<X, R> Debug for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<X, R> Zero for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn zero() -> Self {
        Lc::zero().into()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_zero()
    }
}

impl<X, R> One for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn one() -> Self {
        Self::from_const(R::one())
    }

    fn is_one(&self) -> bool {
        self.nterms() == 1 && self.is_const() && self.const_term().is_one()
    }
}

impl<X, R> Neg for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;
    fn neg(self) -> Self {
        (-self.terms).into()
    }
}

impl<X, R> Neg for &PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = PolyBase<X, R>;
    fn neg(self) -> Self::Output {
        (-&self.terms).into()
    }
}

#[auto_ops]
impl<X, R> AddAssign<&PolyBase<X, R>> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn add_assign(&mut self, rhs: &PolyBase<X, R>) {
        self.terms += &rhs.terms
    }
}

#[auto_ops]
impl<X, R> SubAssign<&PolyBase<X, R>> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn sub_assign(&mut self, rhs: &PolyBase<X, R>) {
        self.terms -= &rhs.terms
    }
}

// scalar multiplication
#[auto_ops]
impl<X, R> MulAssign<&R> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn mul_assign(&mut self, rhs: &R) {
        self.terms *= rhs
    }
}

#[auto_ops]
impl<X, R> MulAssign<&PolyBase<X, R>> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn mul_assign(&mut self, rhs: &PolyBase<X, R>) {
        match (self.is_const(), rhs.is_const()) {
            (_, true) => self.terms *= rhs.const_term(),
            (true, false) => {
                let a = self.const_term().clone();
                self.terms = &rhs.terms * &a;
            },
            (false, false) => self.terms = &self.terms * &rhs.terms
        }
    }
}

macro_rules! impl_alg_ops {
    ($($trait:ident),*) => { $(
        impl<X, R> $trait<Self> for PolyBase<X, R>
        where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {}

        impl<X, R> $trait<PolyBase<X, R>> for &PolyBase<X, R>
        where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {}
    )* };
}

impl_alg_ops!(AddMonOps, AddGrpOps, MonOps, RingOps);

impl<X, R> Elem for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn math_symbol() -> String {
        format!("{}[{}]", R::math_symbol(), X::math_symbol())
    }
}

impl<X, R> AddMon for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {}

impl<X, R> AddGrp for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {}

impl<X, R> Mon for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {}

// Units are the constant units of R, as R is assumed to be a domain.
impl<X, R> Ring for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() || !self.is_const() {
            return None
        }
        self.const_term().inv().map(Self::from_const)
    }

    fn is_unit(&self) -> bool {
        !self.is_zero() && self.is_const() && self.const_term().is_unit()
    }

    /// The constant that normalizes the leading coefficient.
    fn normalizing_unit(&self) -> Self {
        Self::from_const(self.lead_coeff().normalizing_unit())
    }
}
