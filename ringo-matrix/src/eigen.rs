use ringo::FieldOps;
use ringo::poly::RootField;
use crate::Mat;

impl<R> Mat<R>
where R: RootField, for<'x> &'x R: FieldOps<R> {
    /// Eigenvalues in `R` with their algebraic multiplicities.
    pub fn eigenvalues(&self) -> Vec<(R, usize)> { 
        self.charpoly().roots()
    }

    /// Each eigenvalue with a basis of its eigenspace as columns.
    pub fn eigenspaces(&self) -> Vec<(R, Self)> { 
        let n = self.nrows();
        self.eigenvalues().into_iter().map(|(e, _)| { 
            let a = self - Self::id(n) * &e;
            let v = a.nullspace();
            (e, v)
        }).collect()
    }
}
