use itertools::Itertools;
use log::{debug, trace};
use num_traits::{One, Zero};
use ringo::{Field, FieldOps, Ring};
use ringo::poly::{Mono, MonoOrd, PolyN, VarN};

/// Makes `f` monic with respect to `ord`. The zero polynomial is returned as is.
pub fn monic<const X: char, R>(f: &PolyN<X, R>, ord: MonoOrd) -> PolyN<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    if f.is_zero() {
        return f.clone()
    }
    let a = f.lead_term_by(ord).1;
    let Some(u) = a.inv() else {
        panic!("leading coefficient {a} is not invertible.")
    };
    f * &u
}

/// Multivariate division of `f` by `basis`, returning the remainder.
///
/// Every term of the result is divisible by no leading monomial of `basis`.
/// The remainder depends on the order of `basis` unless it is a Gröbner basis.
pub fn reduce<const X: char, R>(f: &PolyN<X, R>, basis: &[PolyN<X, R>], ord: MonoOrd) -> PolyN<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    let leads = basis.iter().filter(|g| !g.is_zero()).map(|g| {
        let (m, a) = g.lead_term_by(ord);
        let Some(u) = a.inv() else {
            panic!("leading coefficient {a} is not invertible.")
        };
        (m.clone(), u, g)
    }).collect_vec();

    let mut p = f.clone();
    let mut r = PolyN::zero();

    while !p.is_zero() {
        let (m, a) = p.lead_term_by(ord);
        let (m, a) = (m.clone(), a.clone());

        if let Some((n, u, g)) = leads.iter().find(|(n, _, _)| n.divides(&m)) {
            let q = PolyN::from((&m / n, &a * u));
            p -= q * *g;
        } else {
            let t = PolyN::from((m, a));
            p -= &t;
            r += t;
        }
    }

    r
}

/// `lcm / lt(f) * f - lcm / lt(g) * g` where `lcm` is the lcm of the leading monomials.
pub fn s_poly<const X: char, R>(f: &PolyN<X, R>, g: &PolyN<X, R>, ord: MonoOrd) -> PolyN<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    assert!(!f.is_zero() && !g.is_zero());

    let (m, a) = f.lead_term_by(ord);
    let (n, b) = g.lead_term_by(ord);
    let l = m.lcm(n);

    let (Some(ainv), Some(binv)) = (a.inv(), b.inv()) else {
        panic!("leading coefficients {a}, {b} must be invertible.")
    };

    let p = PolyN::from((&l / m, ainv)) * f;
    let q = PolyN::from((&l / n, binv)) * g;

    p - q
}

/// A Gröbner basis of the ideal generated by `gens` (Buchberger's algorithm).
///
/// Pairs whose leading monomials are coprime are skipped, since their
/// S-polynomials always reduce to zero.
pub fn groebner<const X: char, R>(gens: &[PolyN<X, R>], ord: MonoOrd) -> Vec<PolyN<X, R>>
where R: Field, for<'x> &'x R: FieldOps<R> {
    let mut basis = gens.iter().filter(|f| !f.is_zero()).cloned().collect_vec();
    let mut pairs = (0 .. basis.len()).tuple_combinations::<(_, _)>().collect_vec();

    debug!("groebner: {} gens, ord = {ord}.", basis.len());

    while let Some((i, j)) = pairs.pop() {
        let m = basis[i].lead_term_by(ord).0;
        let n = basis[j].lead_term_by(ord).0;

        if is_coprime(m, n) {
            continue
        }

        let s = s_poly(&basis[i], &basis[j], ord);
        let r = reduce(&s, &basis, ord);

        if r.is_zero() {
            continue
        }

        trace!("  S({i}, {j}) -> {r}");

        if r.is_const() {
            debug!("groebner: found a unit.");
            return vec![PolyN::one()]
        }

        let k = basis.len();
        pairs.extend((0 .. k).map(|i| (i, k)));
        basis.push(r);

        debug!("groebner: {} elems, {} pairs remaining.", basis.len(), pairs.len());
    }

    basis
}

/// The reduced Gröbner basis: monic, inter-reduced, sorted by
/// leading monomial in ascending order.
///
/// It is uniquely determined by the ideal and `ord`.
pub fn reduced_groebner<const X: char, R>(gens: &[PolyN<X, R>], ord: MonoOrd) -> Vec<PolyN<X, R>>
where R: Field, for<'x> &'x R: FieldOps<R> {
    let mut basis = groebner(gens, ord);
    basis.sort_by(|f, g| {
        let m = f.lead_term_by(ord).0;
        let n = g.lead_term_by(ord).0;
        m.cmp_by(n, ord)
    });

    // minimal basis
    let mut minimal: Vec<PolyN<X, R>> = vec![];
    for f in basis {
        let m = f.lead_term_by(ord).0;
        if minimal.iter().all(|g| !g.lead_term_by(ord).0.divides(m)) {
            minimal.push(monic(&f, ord));
        }
    }

    // inter-reduce
    let n = minimal.len();
    for i in 0 .. n {
        let others = minimal.iter().enumerate().filter(|(j, _)| *j != i).map(|(_, g)| g.clone()).collect_vec();
        minimal[i] = reduce(&minimal[i], &others, ord);
    }

    debug!("reduced groebner: {} elems.", minimal.len());

    minimal
}

fn is_coprime<const X: char>(m: &VarN<X>, n: &VarN<X>) -> bool {
    m.lcm(n) == m.clone() * n.clone()
}

#[cfg(test)]
mod tests {
    use ringo::num::{Ratio, FF};
    use super::*;

    type R = Ratio<i64>;
    type P = PolyN<'x', R>;

    fn r(a: i32) -> R {
        R::from(a)
    }

    fn vars() -> (P, P, P) {
        (P::variable(0), P::variable(1), P::variable(2))
    }

    #[test]
    fn monic_() {
        let (x, y, _) = vars();
        let f = &x * &r(2) + &y * &r(4);
        assert_eq!(monic(&f, MonoOrd::Lex), &x + &y * &r(2));
        assert_eq!(monic(&P::zero(), MonoOrd::Lex), P::zero());
    }

    #[test]
    fn reduce_by_single() {
        let (x, y, _) = vars();

        // x²y + xy² + y² ÷ (xy - 1)
        let f = &x * &x * &y + &x * &y * &y + &y * &y;
        let g = &x * &y - P::one();
        let r = reduce(&f, &[g], MonoOrd::Lex);

        assert_eq!(r, &x + &y + &y * &y);
    }

    #[test]
    fn reduce_to_zero() {
        let (x, y, _) = vars();
        let g = &x * &x - &y;
        let f = (&x + &y) * &g;
        assert!(reduce(&f, &[g], MonoOrd::GrevLex).is_zero());
    }

    #[test]
    fn s_poly_() {
        let (x, y, _) = vars();

        // f = x³ - 2xy, g = x²y - 2y² + x
        let f = &x * &x * &x - &x * &y * &r(2);
        let g = &x * &x * &y - &y * &y * &r(2) + &x;
        let s = s_poly(&f, &g, MonoOrd::GrLex);

        assert_eq!(s, -(&x * &x));
    }

    #[test]
    fn groebner_unit() {
        let (x, _, _) = vars();
        let f = &x - P::one();
        let g = x.clone();
        assert_eq!(reduced_groebner(&[f, g], MonoOrd::Lex), vec![P::one()]);
    }

    #[test]
    fn groebner_grlex() {
        let (x, y, _) = vars();

        // Cox–Little–O'Shea, Ch.2 §7
        let f = &x * &x * &x - &x * &y * &r(2);
        let g = &x * &x * &y - &y * &y * &r(2) + &x;
        let gb = reduced_groebner(&[f.clone(), g.clone()], MonoOrd::GrLex);

        assert_eq!(gb, vec![
            &y * &y - &x * &R::new(1, 2),
            &x * &y,
            &x * &x,
        ]);

        for h in [f, g] {
            assert!(reduce(&h, &gb, MonoOrd::GrLex).is_zero());
        }
    }

    #[test]
    fn groebner_lex_twisted_cubic() {
        let (x, y, z) = vars();

        // leading monomials x₀ and x₁ are coprime,
        // so the generators already form a reduced basis.
        let f = &x - &z * &z;
        let g = &y - &z * &z * &z;
        let gb = reduced_groebner(&[f, g], MonoOrd::Lex);

        assert_eq!(gb, vec![
            &y - &z * &z * &z,
            &x - &z * &z,
        ]);
    }

    #[test]
    fn groebner_is_closed() {
        let (x, y, z) = vars();
        let gens = [
            &x * &y - &z,
            &y * &z - &x,
            &z * &x - &y,
        ];
        let gb = groebner(&gens, MonoOrd::GrevLex);

        for (f, g) in gb.iter().tuple_combinations() {
            let s = s_poly(f, g, MonoOrd::GrevLex);
            assert!(reduce(&s, &gb, MonoOrd::GrevLex).is_zero());
        }
        for f in gens.iter() {
            assert!(reduce(f, &gb, MonoOrd::GrevLex).is_zero());
        }
    }

    #[test]
    fn groebner_ff() {
        type P = PolyN<'x', FF<2>>;
        let x = P::variable(0);
        let y = P::variable(1);

        // over F₂, x² + y² = (x + y)².
        let f = &x * &x + &y * &y;
        let g = &x + &y;
        let gb = reduced_groebner(&[f, g], MonoOrd::Lex);

        assert_eq!(gb, vec![&x + &y]);
    }
}
