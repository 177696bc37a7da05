use std::cmp::min;
use ringo::{Ring, RingOps};
use ringo::num::Sign;
use ringo::poly::Poly;
use crate::Mat;

impl<R> Mat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    pub fn trace(&self) -> R { 
        assert!(self.is_square(), "not a square matrix: {:?}", self.shape());
        R::sum((0..self.nrows()).map(|i| &self[(i, i)]))
    }

    /// `det(xI - M)`, computed without division.
    pub fn charpoly(&self) -> Poly<'x', R> { 
        let c = self.berkowitz();
        Poly::from_coeffs(c.into_iter().rev())
    }

    /// The determinant as `(-1)ⁿ χ(0)`. Works over any commutative ring.
    pub fn det_berkowitz(&self) -> R { 
        let n = self.nrows();
        let mut c = self.berkowitz();
        let c_n = c.swap_remove(n);
        R::from_sign(Sign::from_parity(n)) * c_n
    }

    // Coefficients of det(xI - M) in descending order, obtained as a product 
    // of Toeplitz matrices built from the leading principal submatrices.
    fn berkowitz(&self) -> Vec<R> { 
        assert!(self.is_square(), "not a square matrix: {:?}", self.shape());

        let n = self.nrows();
        let mut v = vec![R::one()];

        for r in 0..n { 
            let a = self.submat(0..r, 0..r);
            let row = self.submat(r..r + 1, 0..r);
            let mut col = self.submat(0..r, r..r + 1);

            // t = [1, -a_rr, -R C, -R A C, ..., -R A^{r-1} C]
            let mut t = Vec::with_capacity(r + 2);
            t.push(R::one());
            t.push(-&self[(r, r)]);

            for _ in 0..r { 
                let rc = &row * &col;
                t.push(-&rc[(0, 0)]);
                col = &a * &col;
            }

            v = (0..r + 2).map(|i| 
                R::sum((0..=min(i, r)).map(|j| &t[i - j] * &v[j]))
            ).collect();
        }

        v
    }
}
