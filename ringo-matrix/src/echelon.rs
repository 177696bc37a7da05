use itertools::Itertools;
use log::trace;
use ringo::{Field, FieldOps};
use crate::Mat;

impl<R> Mat<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    /// The reduced row echelon form and its pivot columns.
    pub fn rref(&self) -> (Self, Vec<usize>) { 
        let mut a = self.clone();
        let (m, n) = a.shape();
        let mut pivots = vec![];
        let mut i = 0;

        for j in 0..n { 
            if i >= m { break }

            let Some(k) = (i..m).find(|&k| !a[(k, j)].is_zero()) else { 
                continue
            };

            a.swap_rows(i, k);

            let Some(u) = a[(i, j)].inv() else { 
                panic!("{} is not invertible.", a[(i, j)])
            };
            a.mul_row(i, &u);

            for k in 0..m { 
                if k == i || a[(k, j)].is_zero() { continue }
                let c = -&a[(k, j)];
                a.add_row_to(i, k, &c);
            }

            trace!("rref: pivot ({i}, {j})\n{a}");

            pivots.push(j);
            i += 1;
        }

        (a, pivots)
    }

    /// A basis of `{ v | M v = 0 }` as columns, one for each free variable.
    pub fn nullspace(&self) -> Self { 
        let n = self.ncols();
        let (a, pivots) = self.rref();

        let free = (0..n).filter(|j| !pivots.contains(j)).collect_vec();
        if free.is_empty() { 
            return Self::zero((n, 0))
        }

        let cols = free.iter().map(|&f| { 
            let mut v = vec![R::zero(); n];
            v[f] = R::one();
            for (i, &p) in pivots.iter().enumerate() { 
                v[p] = -&a[(i, f)];
            }
            v
        });

        Self::from_cols(cols)
    }

    /// A solution `x` of `M x = b`, if any. `b` may have several columns.
    pub fn solve(&self, b: &Self) -> Option<Self> { 
        assert_eq!(self.nrows(), b.nrows(), "dimension mismatch");

        let (n, k) = (self.ncols(), b.ncols());
        let (a, pivots) = self.concat(b).rref();

        if pivots.iter().any(|&p| p >= n) { 
            return None
        }

        let mut x = Self::zero((n, k));
        for (i, &p) in pivots.iter().enumerate() { 
            for l in 0..k { 
                x[(p, l)] = a[(i, n + l)].clone();
            }
        }

        Some(x)
    }
}

#[cfg(test)]
mod tests {
    use ringo::num::{Ratio, FF};
    use super::*;

    type Q = Ratio<i64>;

    fn q(shape: (usize, usize), data: &[i64]) -> Mat<Q> { 
        Mat::from_data(shape, data.iter().map(|&x| Q::from_numer(x)))
    }

    #[test]
    fn rref() { 
        let a = q((3, 3), &[1,2,3,4,5,6,7,8,9]);
        let (r, pivots) = a.rref();

        assert_eq!(r, q((3, 3), &[1,0,-1,0,1,2,0,0,0]));
        assert_eq!(pivots, vec![0, 1]);
    }

    #[test]
    fn rref_skip() { 
        let a = q((2, 4), &[0,0,2,4,0,1,1,1]);
        let (r, pivots) = a.rref();

        assert_eq!(r, q((2, 4), &[0,1,0,-1,0,0,1,2]));
        assert_eq!(pivots, vec![1, 2]);
    }

    #[test]
    fn rref_zero() { 
        let a = q((2, 2), &[0,0,0,0]);
        let (r, pivots) = a.rref();
        assert!(r.is_zero());
        assert!(pivots.is_empty());
    }

    #[test]
    fn nullspace() { 
        let a = q((3, 3), &[1,2,3,4,5,6,7,8,9]);
        let n = a.nullspace();

        assert_eq!(n, q((3, 1), &[1,-2,1]));
        assert!((&a * &n).is_zero());
    }

    #[test]
    fn nullspace_dim() { 
        let a = q((2, 5), &[
            1, 0, 2, 0, 1,
            0, 1, 1, 3, 0
        ]);
        let n = a.nullspace();
        assert_eq!(n.shape(), (5, 3));
        assert!((&a * &n).is_zero());
        assert_eq!(n.rank(), 3);

        let n = Mat::<Q>::id(3).nullspace();
        assert_eq!(n.shape(), (3, 0));

        let n = Mat::<Q>::zero((2, 2)).nullspace();
        assert!(n.is_id());
    }

    #[test]
    fn nullspace_ff() { 
        // rank 1 over F2
        let a = Mat::from_data((2, 2), [1, 1, 1, 1].map(FF::<2>::new));
        let n = a.nullspace();
        assert_eq!(n, Mat::from_data((2, 1), [1, 1].map(FF::<2>::new)));
    }

    #[test]
    fn solve() { 
        let a = q((2, 2), &[1, 2, 3, 4]);
        let b = q((2, 1), &[5, 6]);
        let x = a.solve(&b).unwrap();

        assert_eq!(x, Mat::from_data((2, 1), [Q::from_numer(-4), Q::new(9, 2)]));
        assert_eq!(&a * &x, b);
    }

    #[test]
    fn solve_underdetermined() { 
        let a = q((1, 3), &[1, 1, 1]);
        let b = q((1, 1), &[3]);
        let x = a.solve(&b).unwrap();
        assert_eq!(&a * &x, b);
    }

    #[test]
    fn solve_inconsistent() { 
        let a = q((2, 2), &[1, 2, 2, 4]);
        let b = q((2, 1), &[1, 1]);
        assert_eq!(a.solve(&b), None);
    }

    #[test]
    fn solve_multi() { 
        let a = q((2, 2), &[2, 1, 1, 1]);
        let x = a.solve(&Mat::id(2)).unwrap();
        assert_eq!(x, q((2, 2), &[1, -1, -1, 2]));
        assert_eq!(Some(x), a.inv());
    }
}
