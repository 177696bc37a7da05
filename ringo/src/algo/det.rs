use log::trace;
use crate::{Ring, RingOps, EucRing, EucRingOps};

/// Determinant of the `n × n` row-major `matrix` by the fraction-free 
/// Bareiss elimination. Every division is exact, so `R` only needs 
/// to be an integral domain with exact division.
pub fn det_bareiss<R>(n: usize, matrix: &[R]) -> R 
where R: EucRing, for<'x> &'x R: EucRingOps<R> {
    assert_eq!(matrix.len(), n * n);

    if n == 0 { 
        return R::one()
    }

    let mut a: Vec<Vec<R>> = matrix.chunks(n).map(|r| r.to_vec()).collect();
    let mut neg = false;
    let mut prev = R::one();

    for k in 0 .. n - 1 { 
        if a[k][k].is_zero() { 
            let Some(i) = (k + 1 .. n).find(|&i| !a[i][k].is_zero()) else { 
                return R::zero()
            };
            a.swap(i, k);
            neg = !neg;
        }

        let p = a[k][k].clone();

        for i in k + 1 .. n { 
            let b = a[i][k].clone();
            for j in k + 1 .. n { 
                let c = &a[i][j] * &p - &b * &a[k][j];
                a[i][j] = c / &prev;
            }
        }

        trace!("bareiss step {k}: pivot = {p}");
        prev = p;
    }

    let d = a[n - 1][n - 1].clone();
    if neg { -d } else { d }
}

/// Determinant by cofactor expansion. Exponential, for small matrices and tests.
pub fn det_naive<R>(n: usize, matrix: &[R]) -> R 
where R: Ring, for<'x> &'x R: RingOps<R> {
    assert_eq!(matrix.len(), n * n);

    fn det_rec<R>(n: usize, matrix: &[R], used: &mut Vec<bool>, i: usize) -> R
    where R: Ring, for<'x> &'x R: RingOps<R> {
        if i == n { 
            return R::one();
        }

        let mut res = R::zero();
        let mut e = R::one();

        for j in 0..n { 
            if used[j] { 
                continue
            }

            let a = &matrix[n * i + j];
            if !a.is_zero() { 
                used[j] = true;
                res += &e * a * det_rec(n, matrix, used, i + 1);
                used[j] = false;
            }

            e = -e;
        }

        res
    }

    det_rec(n, matrix, &mut vec![false; n], 0)
}
