use std::fmt::Display;

use itertools::Itertools;
use log::debug;
use num_traits::{One, Zero};
use ringo::{Field, FieldOps};
use ringo::poly::{Mono, MonoOrd, PolyN, VarN};

use crate::groebner::{reduce, reduced_groebner};

/// An ideal of `R[x₀, x₁, ...]` over a field `R`, stored together with its
/// reduced Gröbner basis for the monomial order `ord`.
#[derive(Clone, Debug)]
pub struct Ideal<const X: char, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    gens: Vec<PolyN<X, R>>,
    basis: Vec<PolyN<X, R>>,
    ord: MonoOrd,
}

impl<const X: char, R> Ideal<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    pub fn new<I>(gens: I, ord: MonoOrd) -> Self
    where I: IntoIterator<Item = PolyN<X, R>> {
        let gens = gens.into_iter().filter(|f| !f.is_zero()).collect_vec();
        let basis = reduced_groebner(&gens, ord);
        Self { gens, basis, ord }
    }

    pub fn zero(ord: MonoOrd) -> Self {
        Self::new([], ord)
    }

    pub fn whole(ord: MonoOrd) -> Self {
        Self::new([PolyN::one()], ord)
    }

    pub fn gens(&self) -> &[PolyN<X, R>] {
        &self.gens
    }

    /// The reduced Gröbner basis.
    pub fn groebner(&self) -> &[PolyN<X, R>] {
        &self.basis
    }

    pub fn ord(&self) -> MonoOrd {
        self.ord
    }

    /// The same ideal with its basis recomputed for `ord`.
    pub fn with_ord(&self, ord: MonoOrd) -> Self {
        Self::new(self.gens.clone(), ord)
    }

    pub fn is_zero(&self) -> bool {
        self.basis.is_empty()
    }

    pub fn is_whole(&self) -> bool {
        self.basis.iter().any(|f| f.is_const())
    }

    /// The normal form of `f` modulo the ideal.
    pub fn reduce(&self, f: &PolyN<X, R>) -> PolyN<X, R> {
        reduce(f, &self.basis, self.ord)
    }

    pub fn contains(&self, f: &PolyN<X, R>) -> bool {
        self.reduce(f).is_zero()
    }

    pub fn contains_ideal(&self, other: &Self) -> bool {
        other.gens.iter().all(|f| self.contains(f))
    }

    /// Whether the ideal is generated by binomials. This holds iff its
    /// reduced Gröbner basis consists of binomials.
    pub fn is_binomial(&self) -> bool {
        self.basis.iter().all(|f| f.is_binomial())
    }

    pub fn sum(&self, other: &Self) -> Self {
        let gens = self.gens.iter().chain(other.gens.iter()).cloned();
        Self::new(gens, self.ord)
    }

    pub fn product(&self, other: &Self) -> Self {
        let gens = self.gens.iter().cartesian_product(other.gens.iter()).map(|(f, g)| f * g);
        Self::new(gens, self.ord)
    }

    /// `I ∩ J` as `(t I + (1 - t) J) ∩ R[x]` with an auxiliary variable `t`.
    pub fn intersection(&self, other: &Self) -> Self {
        let t = PolyN::<X, R>::variable(0);
        let s = PolyN::one() - &t;

        let gens = Iterator::chain(
            self.gens.iter().map(|f| &t * shift(f, 1)),
            other.gens.iter().map(|g| &s * shift(g, 1)),
        ).collect_vec();

        let gens = eliminate(&gens, &[0]).into_iter().map(|f| shift_down(&f, 1));
        let res = Self::new(gens, self.ord);

        debug!("intersection: {self} ∩ {other} = {res}");

        res
    }

    /// The elimination ideal `I ∩ R[x_j : j ∉ vars]`.
    pub fn eliminate(&self, vars: &[usize]) -> Self {
        let gens = eliminate(&self.gens, vars);
        let res = Self::new(gens, self.ord);

        debug!("eliminate {vars:?}: {self} -> {res}");

        res
    }

    /// The ideal quotient `I : f = { g | g f ∈ I }`, 
    /// computed from `I ∩ (f)` by dividing out `f`.
    pub fn quotient_by(&self, f: &PolyN<X, R>) -> Self {
        if f.is_zero() {
            return Self::whole(self.ord)
        }

        let j = self.intersection(&Self::new([f.clone()], self.ord));
        let gens = j.gens.iter().map(|g| div_exact(g, f, self.ord));

        Self::new(gens, self.ord)
    }

    /// `I : J`, the intersection of `I : g` over the generators `g` of `J`.
    pub fn quotient(&self, other: &Self) -> Self {
        other.gens.iter()
            .map(|g| self.quotient_by(g))
            .reduce(|a, b| a.intersection(&b))
            .unwrap_or_else(|| Self::whole(self.ord))
    }

    /// `I : f^∞`, as `(I + (1 - t f)) ∩ R[x]` with an auxiliary variable `t`.
    pub fn saturation(&self, f: &PolyN<X, R>) -> Self {
        let t = PolyN::<X, R>::variable(0);
        let gens = Iterator::chain(
            self.gens.iter().map(|g| shift(g, 1)),
            [PolyN::one() - &t * shift(f, 1)],
        ).collect_vec();

        let gens = eliminate(&gens, &[0]).into_iter().map(|g| shift_down(&g, 1));
        let res = Self::new(gens, self.ord);

        debug!("saturation: {self} : ({f})^∞ = {res}");

        res
    }

    /// `I : (∏_{i ∈ vars} x_i)^∞`.
    pub fn saturation_by_vars(&self, vars: &[usize]) -> Self {
        let f = vars.iter().fold(PolyN::one(), |f, &i| f * PolyN::variable(i));
        self.saturation(&f)
    }

    /// Splits the ideal into cellular ideals whose intersection is `self`.
    ///
    /// Each component comes with its cell variables `Δ`: modulo the component,
    /// `x_i` is a non-zerodivisor for `i ∈ Δ` and nilpotent otherwise. Only 
    /// the variables occurring in the generators are considered. The components 
    /// are binomial when `self` is, and none contains another.
    pub fn cellular_decomposition(&self) -> Vec<(Self, Vec<usize>)> {
        let n = self.gens.iter()
            .filter_map(|f| max_index(f))
            .max()
            .map(|i| i + 1)
            .unwrap_or(0);

        let mut res: Vec<(Self, Vec<usize>)> = vec![];

        for (c, d) in self.cells(n) {
            if res.iter().any(|(c1, _)| c.contains_ideal(c1)) {
                continue
            }
            res.retain(|(c1, _)| !c1.contains_ideal(&c));
            res.push((c, d));
        }

        debug!("cellular decomposition of {self}: {} components.", res.len());

        res
    }

    // I = (I : x^∞) ∩ (I + (x^e)) for any zerodivisor x that is not nilpotent,
    // where I : x^e = I : x^∞.
    fn cells(&self, n: usize) -> Vec<(Self, Vec<usize>)> {
        if self.is_whole() {
            return vec![]
        }

        let mut delta = vec![];

        for i in 0 .. n {
            let x = PolyN::variable(i);
            let sat = self.saturation(&x);

            if self.contains_ideal(&sat) {
                delta.push(i);
                continue
            }
            if sat.is_whole() {
                continue
            }

            let xe = self.stable_power(&x, &sat);
            let rest = self.sum(&Self::new([xe], self.ord));

            debug!("split {self} by x{i}: {sat}, {rest}");

            return [sat.cells(n), rest.cells(n)].concat()
        }

        vec![(self.clone(), delta)]
    }

    // the least power x^e with x^e (I : x^∞) ⊂ I.
    fn stable_power(&self, x: &PolyN<X, R>, sat: &Self) -> PolyN<X, R> {
        let mut xe = PolyN::one();
        while !sat.gens.iter().all(|g| self.contains(&(&xe * g))) {
            xe *= x;
        }
        xe
    }
}

impl<const X: char, R> PartialEq for Ideal<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn eq(&self, other: &Self) -> bool {
        if self.ord == other.ord {
            self.basis == other.basis
        } else {
            self.contains_ideal(other) && other.contains_ideal(self)
        }
    }
}

impl<const X: char, R> Eq for Ideal<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {}

impl<const X: char, R> Display for Ideal<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.gens.iter().join(", "))
    }
}

// Computed by a lex Gröbner basis with the variables in `vars` moved to the front.
fn eliminate<const X: char, R>(gens: &[PolyN<X, R>], vars: &[usize]) -> Vec<PolyN<X, R>>
where R: Field, for<'x> &'x R: FieldOps<R> {
    let vars = vars.iter().cloned().unique().collect_vec();
    let k = vars.len();
    let n = Iterator::chain(
        gens.iter().filter_map(|f| max_index(f)),
        vars.iter().cloned()
    ).max().map(|i| i + 1).unwrap_or(0);

    let perm = vars.iter().cloned().chain(
        (0 .. n).filter(|i| !vars.contains(i))
    ).collect_vec();

    let to = |i: usize| perm.iter().position(|&j| j == i).unwrap_or(i);
    let from = |i: usize| perm[i];

    let gens = gens.iter().map(|f| rename(f, to)).collect_vec();
    let basis = reduced_groebner(&gens, MonoOrd::Lex);
    let front = (0 .. k).collect_vec();

    basis.iter().filter(|f| f.is_free_of(&front)).map(|f| rename(f, from)).collect()
}

// `g / f`, assuming `f` divides `g`.
fn div_exact<const X: char, R>(g: &PolyN<X, R>, f: &PolyN<X, R>, ord: MonoOrd) -> PolyN<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    let (n, b) = f.lead_term_by(ord);
    let Some(binv) = b.inv() else {
        panic!("leading coefficient {b} is not invertible.")
    };

    let mut p = g.clone();
    let mut q = PolyN::zero();

    while !p.is_zero() {
        let (m, a) = p.lead_term_by(ord);
        assert!(n.divides(m), "{f} does not divide {g}.");

        let t = PolyN::from((m / n, a * &binv));
        p -= &t * f;
        q += t;
    }

    q
}

fn max_index<const X: char, R>(f: &PolyN<X, R>) -> Option<usize>
where R: Field, for<'x> &'x R: FieldOps<R> {
    f.iter().filter_map(|(x, _)| x.deg().max_index()).max()
}

fn rename<const X: char, R, F>(f: &PolyN<X, R>, map: F) -> PolyN<X, R>
where R: Field, for<'x> &'x R: FieldOps<R>, F: Fn(usize) -> usize {
    f.iter().map(|(x, r)| {
        let y = VarN::<X>::from_iter(x.deg().iter().map(|(&i, &d)| (map(i), d)));
        (y, r.clone())
    }).collect()
}

fn shift<const X: char, R>(f: &PolyN<X, R>, k: usize) -> PolyN<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    rename(f, |i| i + k)
}

fn shift_down<const X: char, R>(f: &PolyN<X, R>, k: usize) -> PolyN<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    rename(f, |i| {
        assert!(i >= k, "x{i} must not occur.");
        i - k
    })
}

#[cfg(test)]
mod tests {
    use ringo::num::{Ratio, FF};
    use super::*;

    type R = Ratio<i64>;
    type P = PolyN<'x', R>;
    type I = Ideal<'x', R>;

    fn vars() -> (P, P, P) {
        (P::variable(0), P::variable(1), P::variable(2))
    }

    #[test]
    fn contains() {
        let (x, y, _) = vars();
        let i = I::new([&x * &x - &y, &x * &y - P::one()], MonoOrd::GrevLex);

        assert!(i.contains(&(&x * &x - &y)));
        assert!(i.contains(&((&x * &x - &y) * &y + (&x * &y - P::one()) * &x)));
        assert!(!i.contains(&x));
        assert!(!i.is_whole());
        assert!(!i.is_zero());
    }

    #[test]
    fn whole() {
        let (x, y, _) = vars();
        let i = I::new([&x * &y - P::one(), x.clone()], MonoOrd::GrLex);

        assert!(i.is_whole());
        assert_eq!(i, I::whole(MonoOrd::GrLex));
        assert!(i.contains(&y));
    }

    #[test]
    fn zero() {
        let (x, _, _) = vars();
        let i = I::new([P::zero()], MonoOrd::Lex);

        assert!(i.is_zero());
        assert!(i.gens().is_empty());
        assert!(i.contains(&P::zero()));
        assert!(!i.contains(&x));
    }

    #[test]
    fn eq_by_basis() {
        let (x, y, _) = vars();
        let i = I::new([&x + &y, &x - &y], MonoOrd::Lex);
        let j = I::new([x.clone(), y.clone()], MonoOrd::Lex);
        let k = I::new([x.clone()], MonoOrd::Lex);

        assert_eq!(i, j);
        assert_ne!(i, k);
        assert_eq!(i, j.with_ord(MonoOrd::GrevLex));
        assert!(i.contains_ideal(&k));
        assert!(!k.contains_ideal(&i));
    }

    #[test]
    fn sum_product() {
        let (x, y, _) = vars();
        let i = I::new([x.clone()], MonoOrd::GrLex);
        let j = I::new([y.clone()], MonoOrd::GrLex);

        assert_eq!(i.sum(&j), I::new([x.clone(), y.clone()], MonoOrd::GrLex));
        assert_eq!(i.product(&j), I::new([&x * &y], MonoOrd::GrLex));
        assert_eq!(i.product(&i), I::new([&x * &x], MonoOrd::GrLex));
    }

    #[test]
    fn intersection() {
        let (x, y, _) = vars();

        // (x) ∩ (y) = (xy)
        let i = I::new([x.clone()], MonoOrd::GrLex);
        let j = I::new([y.clone()], MonoOrd::GrLex);
        assert_eq!(i.intersection(&j), I::new([&x * &y], MonoOrd::GrLex));

        // (x²) ∩ (x y) = (x² y)
        let i = I::new([&x * &x], MonoOrd::GrevLex);
        let j = I::new([&x * &y], MonoOrd::GrevLex);
        assert_eq!(i.intersection(&j), I::new([&x * &x * &y], MonoOrd::GrevLex));
    }

    #[test]
    fn intersection_non_monomial() {
        let (x, y, _) = vars();

        // (x - 1) ∩ (x + 1) = (x² - 1)
        let i = I::new([&x - P::one()], MonoOrd::Lex);
        let j = I::new([&x + P::one()], MonoOrd::Lex);
        let k = i.intersection(&j);

        assert_eq!(k, I::new([&x * &x - P::one()], MonoOrd::Lex));
        assert!(k.contains_ideal(&i.product(&j)));
        assert!(!k.contains(&y));
    }

    #[test]
    fn eliminate() {
        let (x, y, z) = vars();

        // twisted cubic: (y - x², z - x³) ∩ R[y, z] = (y³ - z², ...)
        let i = I::new([&y - &x * &x, &z - &x * &x * &x], MonoOrd::GrevLex);
        let e = i.eliminate(&[0]);

        assert!(e.gens().iter().all(|f| f.is_free_of(&[0])));
        assert!(e.contains(&(&y * &y * &y - &z * &z)));
        assert!(!e.contains(&(&y - &z)));
        assert!(i.contains_ideal(&e));
    }

    #[test]
    fn eliminate_middle() {
        let (x, y, z) = vars();

        // x = y, y = z  =>  x = z
        let i = I::new([&x - &y, &y - &z], MonoOrd::GrLex);
        let e = i.eliminate(&[1]);

        assert_eq!(e, I::new([&x - &z], MonoOrd::GrLex));
    }

    #[test]
    fn binomial() {
        let (x, y, z) = vars();

        let i = I::new([&x * &x - &y, &x * &y - &z], MonoOrd::GrevLex);
        assert!(i.is_binomial());

        let j = I::new([&x + &y + &z], MonoOrd::GrevLex);
        assert!(!j.is_binomial());

        // generated by binomials only after cancellation
        let k = I::new([&x + &y + &z, z.clone()], MonoOrd::Lex);
        assert!(k.is_binomial());
    }

    #[test]
    fn quotient() {
        let (x, y, _) = vars();

        // (x², xy) : x = (x, y)
        let i = I::new([&x * &x, &x * &y], MonoOrd::GrevLex);
        assert_eq!(i.quotient_by(&x), I::new([x.clone(), y.clone()], MonoOrd::GrevLex));
        assert_eq!(i.quotient_by(&y), I::new([x.clone()], MonoOrd::GrevLex));
        assert!(i.quotient_by(&P::zero()).is_whole());

        // (x², xy) : (x, y) = (x)
        let m = I::new([x.clone(), y.clone()], MonoOrd::GrevLex);
        assert_eq!(i.quotient(&m), I::new([x.clone()], MonoOrd::GrevLex));

        // (x² - 1) : (x - 1) = (x + 1)
        let i = I::new([&x * &x - P::one()], MonoOrd::Lex);
        assert_eq!(i.quotient_by(&(&x - P::one())), I::new([&x + P::one()], MonoOrd::Lex));
    }

    #[test]
    fn saturation() {
        let (x, y, z) = vars();

        // x(y - 1) : x^∞ = (y - 1)
        let i = I::new([&x * &y - &x], MonoOrd::GrevLex);
        assert_eq!(i.saturation(&x), I::new([&y - P::one()], MonoOrd::GrevLex));
        assert_eq!(i.saturation(&y), i);

        // (x²y, xz) : (xyz)^∞ = whole
        let i = I::new([&x * &x * &y, &x * &z], MonoOrd::GrevLex);
        assert!(i.saturation_by_vars(&[0, 1, 2]).is_whole());

        // (x²y, xz) : (yz)^∞ = (x)
        assert_eq!(i.saturation_by_vars(&[1, 2]), I::new([x.clone()], MonoOrd::GrevLex));
    }

    #[test]
    fn cellular_prime() {
        let (x, y, z) = vars();

        // toric ideal of t ↦ (t, t², t³) is already cellular.
        let i = I::new([&y - &x * &x, &z - &x * &y], MonoOrd::GrevLex);
        assert_eq!(i.cellular_decomposition(), vec![(i.clone(), vec![0, 1, 2])]);
    }

    #[test]
    fn cellular_decomposition() {
        let (x, y, _) = vars();

        // xy² - xy = xy(y - 1)
        let i = I::new([&x * &y * &y - &x * &y], MonoOrd::GrevLex);
        let cells = i.cellular_decomposition();

        assert_eq!(cells, vec![
            (I::new([&y - P::one()], MonoOrd::GrevLex), vec![0, 1]),
            (I::new([y.clone()], MonoOrd::GrevLex), vec![0]),
            (I::new([x.clone()], MonoOrd::GrevLex), vec![1]),
        ]);

        let j = cells.iter().map(|(c, _)| c.clone()).reduce(|a, b| a.intersection(&b));
        assert_eq!(j, Some(i));

        for (c, _) in cells.iter() {
            assert!(c.is_binomial());
        }
    }

    #[test]
    fn cellular_nilpotent() {
        let (x, y, _) = vars();

        // x² - xy = x(x - y)
        let i = I::new([&x * &x - &x * &y], MonoOrd::GrevLex);
        let cells = i.cellular_decomposition();

        assert_eq!(cells, vec![
            (I::new([&x - &y], MonoOrd::GrevLex), vec![0, 1]),
            (I::new([x.clone()], MonoOrd::GrevLex), vec![1]),
        ]);
    }

    #[test]
    fn display() {
        let (x, y, _) = vars();
        let i = I::new([x.clone(), y.clone()], MonoOrd::Lex);
        assert_eq!(i.to_string(), "(x₀, x₁)");
    }

    #[test]
    fn over_ff() {
        type P = PolyN<'x', FF<3>>;
        let x = P::variable(0);

        // x³ - x = x(x - 1)(x + 1) over F₃
        let i = Ideal::new([&x * &x * &x - &x], MonoOrd::Lex);
        let j = Ideal::new([&x * &x - P::one()], MonoOrd::Lex);
        assert!(j.contains(&(&x * &x * &x - &x)));
        assert!(!i.contains(&(&x * &x - P::one())));
        assert_eq!(i.intersection(&j), i);
    }
}
