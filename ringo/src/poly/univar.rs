use std::ops::{Div, Rem, DivAssign, RemAssign};
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;

use crate::{Ring, RingOps, EucRing, EucRingOps, Field, FieldOps};
use super::{Poly, Var};

impl<const X: char, R> Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    pub fn variable() -> Self { 
        Self::from(Self::mono(1))
    }

    pub fn mono(i: usize) -> Var<X, usize> {
        Var::from(i)
    }

    /// Coefficients in ascending order of degree. 
    pub fn from_coeffs<I>(coeffs: I) -> Self
    where I: IntoIterator<Item = R> {
        coeffs.into_iter().enumerate().map(|(i, a)| 
            (Self::mono(i), a)
        ).collect()
    }

    /// The degree, with `deg(0) = 0`.
    pub fn deg(&self) -> usize { 
        self.iter().map(|(x, _)| x.0).max().unwrap_or(0)
    }

    /// Dense coefficients in ascending order, empty for the zero polynomial.
    pub fn coeffs(&self) -> Vec<R> { 
        if self.is_zero() { 
            return vec![]
        }
        (0..=self.deg()).map(|i| self.coeff_for(i).clone()).collect()
    }

    pub fn derivative(&self) -> Self { 
        self.iter().filter(|(x, _)| x.0 > 0).map(|(x, a)| { 
            let n = from_usize::<R>(x.0);
            (Self::mono(x.0 - 1), a * n)
        }).collect()
    }

    pub fn eval(&self, x: &R) -> R { 
        self.coeffs().into_iter().rev().fold(R::zero(), |res, a| 
            res * x + a
        )
    }

    /// `f(g)`.
    pub fn compose(&self, g: &Self) -> Self { 
        self.coeffs().into_iter().rev().fold(Self::zero(), |res, a| 
            res * g + Self::from_const(a)
        )
    }

    /// Returns `(q, r)` with `lc(g)^e f = q g + r` and `deg r < deg g`,
    /// where `e = max(deg f - deg g + 1, 0)`.
    pub fn pseudo_div_rem(&self, g: &Self) -> (Self, Self) { 
        assert!(!g.is_zero(), "division by zero");

        let (m, n) = (self.deg(), g.deg());
        if self.is_zero() || m < n { 
            return (Self::zero(), self.clone())
        }

        let b = g.lead_coeff().clone();
        let mut e = m - n + 1;
        let mut q = Self::zero();
        let mut r = self.clone();

        while !r.is_zero() && r.deg() >= n {
            let d = r.deg();
            let t = Self::from((Self::mono(d - n), r.lead_coeff().clone()));
            q = &q * &b + &t;
            r = &r * &b - &t * g;
            e -= 1;
        }

        let s = b.pow_n(e);
        (q * &s, r * &s)
    }
}

fn from_usize<R>(n: usize) -> R
where R: Ring, for<'x> &'x R: RingOps<R> {
    match i32::try_from(n) { 
        Ok(i) => R::from(i),
        Err(_) => { 
            // binary expansion
            let two = R::from(2);
            let (q, r) = (n / 2, n % 2);
            from_usize::<R>(q) * two + R::from(r as i32)
        }
    }
}

// Univariate polynomials over a field form a Euclidean ring.

impl<const X: char, R> Poly<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    pub fn div_rem(&self, g: &Self) -> (Self, Self) { 
        assert!(!g.is_zero(), "division by zero");

        let n = g.deg();
        let Some(b) = g.lead_coeff().inv() else { 
            panic!("leading coefficient {} is not invertible", g.lead_coeff())
        };

        let mut q = Self::zero();
        let mut r = self.clone();
        
        while !r.is_zero() && r.deg() >= n {
            let d = r.deg();
            let t = Self::from((Self::mono(d - n), r.lead_coeff() * &b));
            r -= &t * g;
            q += t;
        }

        (q, r)
    }

    pub fn is_monic(&self) -> bool { 
        self.lead_coeff().is_one()
    }

    pub fn is_squarefree(&self) -> bool { 
        !self.is_zero() && Self::gcd(self, &self.derivative()).deg() == 0
    }

    /// The monic product of the distinct irreducible factors.
    /// 
    /// In characteristic `p`, factors whose multiplicity is divisible by `p` 
    /// vanish from `f / gcd(f, f')`. They are recovered from the `p`-th root 
    /// of what remains of the gcd.
    pub fn squarefree_part(&self) -> Self { 
        if self.is_zero() { 
            return Self::zero()
        }
        if self.deg() == 0 { 
            return Self::one()
        }

        let d = self.derivative();
        if d.is_zero() { 
            return self.pth_root().squarefree_part()
        }

        let mut c = Self::gcd(self, &d);
        let w = (self / &c).normalized();

        loop { 
            let y = Self::gcd(&c, &w);
            if y.deg() == 0 { 
                break
            }
            c /= y;
        }

        if c.deg() == 0 { 
            w
        } else { 
            w * c.pth_root().squarefree_part()
        }
    }

    // `h` with `h^p = f`, for `f` in `R[x^p]` where `p = char R > 0`.
    fn pth_root(&self) -> Self { 
        let p = R::characteristic();
        assert!(p > 0, "p-th root in characteristic 0");

        self.iter().map(|(x, a)| { 
            assert_eq!(x.0 % p, 0);
            let Some(b) = a.pth_root() else { 
                panic!("no p-th root of {a} in {}", R::math_symbol())
            };
            (Self::mono(x.0 / p), b)
        }).collect()
    }
}

#[auto_ops]
impl<'a, 'b, const X: char, R> Div<&'b Poly<X, R>> for &'a Poly<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    type Output = Poly<X, R>;

    fn div(self, rhs: &'b Poly<X, R>) -> Self::Output {
        self.div_rem(rhs).0
    }
}

#[auto_ops]
impl<'a, 'b, const X: char, R> Rem<&'b Poly<X, R>> for &'a Poly<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    type Output = Poly<X, R>;

    fn rem(self, rhs: &'b Poly<X, R>) -> Self::Output {
        self.div_rem(rhs).1
    }
}

impl<const X: char, R> EucRingOps<Poly<X, R>> for Poly<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {}

impl<const X: char, R> EucRingOps<Poly<X, R>> for &Poly<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {}

impl<const X: char, R> EucRing for Poly<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {}

// Over a Euclidean coefficient ring, e.g. Z[x].

impl<const X: char, R> Poly<X, R>
where R: EucRing, for<'x> &'x R: EucRingOps<R> {
    /// The normalized gcd of the coefficients.
    pub fn content(&self) -> R { 
        self.iter().fold(R::zero(), |c, (_, a)| R::gcd(&c, a))
    }

    pub fn primitive_part(&self) -> Self { 
        let c = self.content();
        if c.is_zero() || c.is_one() { 
            return self.clone()
        }
        self.map_coeffs(|a| a / &c)
    }

    /// The normalized gcd computed by the primitive PRS. 
    /// Unlike `EucRing::gcd`, this does not require a field of coefficients.
    pub fn gcd_primitive(f: &Self, g: &Self) -> Self { 
        if f.is_zero() { return g.normalized() }
        if g.is_zero() { return f.normalized() }

        let c = R::gcd(&f.content(), &g.content());
        let (mut a, mut b) = (f.primitive_part(), g.primitive_part());

        if a.deg() < b.deg() { 
            std::mem::swap(&mut a, &mut b);
        }

        while !b.is_zero() { 
            let (_, r) = a.pseudo_div_rem(&b);
            a = b;
            b = r.primitive_part();
        }

        (a.primitive_part() * c).normalized()
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use crate::num::{Ratio, FF};
    use super::*;

    type P = Poly::<'x', i64>;
    type Q = Poly::<'x', Ratio<i64>>;

    fn q(v: &[i64]) -> Q { 
        Q::from_coeffs(v.iter().map(|&a| Ratio::from_numer(a)))
    }

    #[test]
    fn from_coeffs() { 
        let f = P::from_coeffs([1, 0, -2]);
        assert_eq!(f.to_string(), "-2x² + 1");
        assert_eq!(f.deg(), 2);
        assert_eq!(f.coeffs(), vec![1, 0, -2]);
        assert_eq!(P::zero().coeffs(), Vec::<i64>::new());
        assert_eq!(P::zero().deg(), 0);
    }

    #[test]
    fn derivative() { 
        let f = P::from_coeffs([1, 2, 3, 4]);
        assert_eq!(f.derivative(), P::from_coeffs([2, 6, 12]));
        assert_eq!(P::from_const(5).derivative(), P::zero());
    }

    #[test]
    fn derivative_char_p() { 
        type F = Poly<'x', FF<3>>;
        let f = F::from_coeffs([1, 0, 0, 1].map(FF::new)); // x³ + 1
        assert_eq!(f.derivative(), F::zero());
    }

    #[test]
    fn eval() { 
        let f = P::from_coeffs([1, 2, 3]);
        assert_eq!(f.eval(&0), 1);
        assert_eq!(f.eval(&2), 17);
        assert_eq!(f.eval(&-1), 2);
    }

    #[test]
    fn compose() { 
        let f = P::from_coeffs([1, 0, 1]);  // x² + 1
        let g = P::from_coeffs([-1, 1]);    // x - 1
        assert_eq!(f.compose(&g), P::from_coeffs([2, -2, 1]));
    }

    #[test]
    fn pseudo_div_rem() { 
        let f = P::from_coeffs([1, 0, 1]); // x² + 1
        let g = P::from_coeffs([1, 2]);    // 2x + 1
        let (q, r) = f.pseudo_div_rem(&g);

        assert_eq!(q, P::from_coeffs([-1, 2]));
        assert_eq!(r, P::from_const(5));
        assert_eq!(&f * 4, &q * &g + &r);
    }

    #[test]
    fn pseudo_div_rem_small() { 
        let f = P::from_coeffs([1, 2]);
        let g = P::from_coeffs([1, 0, 1]);
        let (q, r) = f.pseudo_div_rem(&g);

        assert_eq!(q, P::zero());
        assert_eq!(r, f);
    }

    #[test]
    fn div_rem() { 
        let f = q(&[-1, 0, 0, 1]); // x³ - 1
        let g = q(&[-1, 1]);       // x - 1
        let (d, r) = f.div_rem(&g);
        assert_eq!(d, q(&[1, 1, 1]));
        assert!(r.is_zero());

        let f = q(&[1, 0, 1]);
        let g = q(&[0, 2]);
        let (d, r) = f.div_rem(&g);
        assert_eq!(d, Q::from_coeffs([Ratio::zero(), Ratio::new(1, 2)]));
        assert_eq!(r, q(&[1]));
        assert_eq!(&d * &g + &r, f);
    }

    #[test]
    fn gcd_field() { 
        let f = q(&[-1, 0, 1]);     // x² - 1
        let g = q(&[1, 2, 1]);      // (x + 1)²
        assert_eq!(Q::gcd(&f, &g), q(&[1, 1]));

        let (d, s, t) = Q::gcdx(&f, &g);
        assert_eq!(d, q(&[1, 1]));
        assert_eq!(&s * &f + &t * &g, d);

        assert_eq!(Q::lcm(&f, &g), q(&[-1, -1, 1, 1]));
    }

    #[test]
    fn squarefree() { 
        let f = q(&[1, 2, 1]);                  // (x + 1)²
        assert!(!f.is_squarefree());
        assert_eq!(f.squarefree_part(), q(&[1, 1]));

        let f = q(&[-2, 0, 2]);                 // 2(x² - 1)
        assert!(f.is_squarefree());
        assert_eq!(f.squarefree_part(), q(&[-1, 0, 1]));
    }

    #[test]
    fn squarefree_char_p() { 
        type F = Poly<'x', FF<3>>;
        let f = |v: &[i32]| F::from_coeffs(v.iter().map(|&a| FF::new(a)));

        // x³
        let g = f(&[0, 0, 0, 1]);
        assert!(!g.is_squarefree());
        assert_eq!(g.squarefree_part(), f(&[0, 1]));

        // (x + 1)³(x + 2) = x⁴ + 2x³ + x + 2
        let g = f(&[2, 1, 0, 2, 1]);
        assert!(!g.is_squarefree());
        assert_eq!(g.squarefree_part(), f(&[2, 0, 1]));

        // x³(x + 1)² = x⁵ + 2x⁴ + x³
        let g = f(&[0, 0, 0, 1, 2, 1]);
        assert_eq!(g.squarefree_part(), f(&[0, 1, 1]));

        let g = f(&[2, 0, 1]);
        assert!(g.is_squarefree());
        assert_eq!(g.squarefree_part(), g);
    }

    #[test]
    fn content() { 
        let f = P::from_coeffs([6, -4, 2]);
        assert_eq!(f.content(), 2);
        assert_eq!(f.primitive_part(), P::from_coeffs([3, -2, 1]));
        assert_eq!(P::zero().content(), 0);
    }

    #[test]
    fn gcd_primitive() { 
        // 2(x + 1)(x - 2) and 4(x + 1)(x + 3)
        let f = P::from_coeffs([-4, -2, 2]);
        let g = P::from_coeffs([12, 16, 4]);
        assert_eq!(P::gcd_primitive(&f, &g), P::from_coeffs([2, 2]));

        let f = P::from_coeffs([1, 0, 1]);
        let g = P::from_coeffs([-1, 1]);
        assert_eq!(P::gcd_primitive(&f, &g), P::one());

        assert_eq!(P::gcd_primitive(&P::zero(), &(-&g)), g);
    }

    #[test]
    fn gcd_primitive_bigint() { 
        type B = Poly<'x', BigInt>;
        let f = B::from_coeffs([-1, 0, 0, 1].map(BigInt::from)); // x³ - 1
        let g = B::from_coeffs([-1, 0, 1].map(BigInt::from));    // x² - 1
        assert_eq!(B::gcd_primitive(&f, &g), B::from_coeffs([-1, 1].map(BigInt::from)));
    }
}
