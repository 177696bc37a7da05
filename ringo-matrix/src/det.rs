use ringo::{EucRing, EucRingOps, Error};
use ringo::algo::det_bareiss;
use crate::Mat;

impl<R> Mat<R>
where R: EucRing, for<'x> &'x R: EucRingOps<R> {
    /// The determinant by fraction-free elimination. Panics unless square.
    pub fn det(&self) -> R { 
        assert!(self.is_square(), "not a square matrix: {:?}", self.shape());

        let n = self.nrows();
        let data = self.array().iter().cloned().collect::<Vec<_>>();
        det_bareiss(n, &data)
    }

    pub fn try_det(&self) -> Result<R, Error> { 
        if self.is_square() { 
            Ok(self.det())
        } else { 
            Err(Error::NotSquare(self.shape()))
        }
    }
}
