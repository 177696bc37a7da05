#![allow(non_upper_case_globals)]

use itertools::Itertools;
use num_traits::Zero;

use crate::{Field, FieldOps, EucRing};
use crate::num::{FF, Ratio, Integer, IntOps};
use super::Poly;

/// Fields whose univariate polynomials have a finite, computable 
/// set of candidate roots.
pub trait RootField: Field
where for<'x> &'x Self: FieldOps<Self> {
    /// A finite set containing every root of `f`, possibly more.
    fn root_candidates<const X: char>(f: &Poly<X, Self>) -> Vec<Self>;
}

impl<const X: char, R> Poly<X, R>
where R: RootField, for<'x> &'x R: FieldOps<R> {
    /// Roots in `R` with their multiplicities. 
    /// Empty for the zero polynomial and for nonzero constants.
    pub fn roots(&self) -> Vec<(R, usize)> { 
        if self.is_zero() || self.is_const() { 
            return vec![]
        }

        let mut f = self.clone();
        let mut res = vec![];

        for a in R::root_candidates(self) { 
            if f.deg() == 0 { 
                break
            }

            let l = Self::from_coeffs([-&a, R::one()]);
            let mut m = 0;

            loop { 
                let (q, r) = f.div_rem(&l);
                if !r.is_zero() { 
                    break
                }
                f = q;
                m += 1;
            }

            if m > 0 { 
                res.push((a, m));
            }
        }

        res
    }
}

impl<const p: i32> RootField for FF<p> {
    fn root_candidates<const X: char>(_f: &Poly<X, Self>) -> Vec<Self> {
        Self::all().collect()
    }
}

// rational root theorem: a root p/q of a primitive integer 
// polynomial has p | a_k and q | a_n.
impl<T> RootField for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn root_candidates<const X: char>(f: &Poly<X, Self>) -> Vec<Self> {
        if f.is_zero() { 
            return vec![]
        }

        let l = f.iter().fold(T::one(), |l, (_, a)| EucRing::lcm(&l, a.denom()));
        let coeffs = f.coeffs().into_iter().map(|a| {
            let (n, d) = a.into_parts();
            n * (&l / d)
        }).collect_vec();

        let Some(k) = coeffs.iter().position(|a| !a.is_zero()) else { 
            return vec![]
        };
        let (a0, an) = (&coeffs[k], &coeffs[coeffs.len() - 1]);

        let ps = divisors(a0);
        let qs = divisors(an);

        let mut cands = ps.iter().cartesian_product(qs.iter()).flat_map(|(p, q)| {
            let r = Ratio::new(p.clone(), q.clone());
            [-&r, r]
        }).collect_vec();

        if k > 0 { 
            cands.push(Ratio::zero());
        }

        cands.sort();
        cands.dedup();
        cands
    }
}

// Positive divisors of `a` by trial division up to `√|a|`, so this is only 
// practical for constants of moderate size. Divisors that do not fit in `T` 
// (`|i64::MIN|` itself) are left out.
fn divisors<T>(a: &T) -> Vec<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    // -|a| is always representable.
    let n = if a.is_positive() { -a } else { a.clone() };
    let mut res = vec![];
    let mut d = T::one();

    while &n / &d <= -&d { 
        if (&n % &d).is_zero() { 
            // e = |n| / d
            let e = (-(&n / &d + T::one())).checked_add(&T::one());
            if let Some(e) = e { 
                if e != d { 
                    res.push(e);
                }
            }
            res.push(d.clone());
        }
        d += T::one();
    }

    res
}
