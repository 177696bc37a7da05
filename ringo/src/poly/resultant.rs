use num_traits::Zero;

use crate::{EucRing, EucRingOps};
use crate::num::Sign;
use crate::algo::det_bareiss;
use super::Poly;

impl<const X: char, R> Poly<X, R>
where R: EucRing, for<'x> &'x R: EucRingOps<R> {
    /// The `(m + n) × (m + n)` Sylvester matrix of `f` (degree `m`) and `g` 
    /// (degree `n`) in row-major order. The first `n` rows hold shifts of 
    /// the coefficients of `f` in descending order, the last `m` rows those of `g`.
    pub fn sylvester(f: &Self, g: &Self) -> (usize, Vec<R>) { 
        let (m, n) = (f.deg(), g.deg());
        let size = m + n;
        let mut data = vec![R::zero(); size * size];

        let cf = f.coeffs();
        let cg = g.coeffs();

        for i in 0..n { 
            for (j, a) in cf.iter().rev().enumerate() { 
                data[i * size + i + j] = a.clone();
            }
        }

        for i in 0..m { 
            for (j, b) in cg.iter().rev().enumerate() { 
                data[(n + i) * size + i + j] = b.clone();
            }
        }

        (size, data)
    }

    /// `res(f, g) = det Syl(f, g)`. Zero if either is zero.
    pub fn resultant(f: &Self, g: &Self) -> R { 
        if f.is_zero() || g.is_zero() { 
            return R::zero()
        }

        let (n, data) = Self::sylvester(f, g);
        det_bareiss(n, &data)
    }

    /// `disc(f) = (-1)^{n(n-1)/2} res(f, f') / lc(f)`.
    pub fn discriminant(&self) -> R { 
        if self.is_zero() { 
            return R::zero()
        }

        let n = self.deg();
        let r = Self::resultant(self, &self.derivative());
        let e = R::from_sign(Sign::from_parity(n * (n.saturating_sub(1)) / 2));

        e * r / self.lead_coeff()
    }
}
