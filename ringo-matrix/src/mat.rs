use std::fmt::{Display, Debug};
use std::ops::{Neg, Add, Sub, Mul, AddAssign, SubAssign, MulAssign, Index, IndexMut, Range};
use itertools::Itertools;
use ndarray::{Array2, Zip, s};
use auto_impl_ops::auto_ops;
use delegate::delegate;
use ringo::{Ring, RingOps, Error};
use ringo::util::format::grid;

/// A dense `m × n` matrix over `R`.
#[derive(Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat<R> {
    array: Array2<R>
}

impl<R> From<Array2<R>> for Mat<R> {
    fn from(array: Array2<R>) -> Self {
        Self { array }
    }
}

impl<R> Mat<R> {
    pub fn shape(&self) -> (usize, usize) { 
        (self.nrows(), self.ncols())
    }

    delegate! { 
        to self.array { 
            pub fn nrows(&self) -> usize;
            pub fn ncols(&self) -> usize;
        }
    }

    pub fn is_square(&self) -> bool { 
        self.nrows() == self.ncols()
    }

    pub fn array(&self) -> &Array2<R> {
        &self.array
    }

    /// Entries `(i, j, a)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &R)> { 
        self.array.indexed_iter().map(|((i, j), a)| (i, j, a))
    }

    pub fn map<R2, F>(&self, f: F) -> Mat<R2>
    where F: FnMut(&R) -> R2 { 
        Mat::from(self.array.map(f))
    }

    fn is_valid_row_index(&self, i: usize) -> bool { 
        (0..self.nrows()).contains(&i)
    }

    fn is_valid_col_index(&self, j: usize) -> bool { 
        (0..self.ncols()).contains(&j)
    }
}

impl<R> Mat<R>
where R: Clone {
    /// Entries are given in row-major order.
    pub fn from_data<I>(shape: (usize, usize), data: I) -> Self
    where I: IntoIterator<Item = R> { 
        let data = data.into_iter().collect_vec();
        assert_eq!(data.len(), shape.0 * shape.1, "data does not fit shape {shape:?}");

        let array = Array2::from_shape_vec(shape, data).unwrap_or_else(|e| panic!("{e}"));
        Self::from(array)
    }

    pub fn from_rows<I, J>(rows: I) -> Self
    where I: IntoIterator<Item = J>, J: IntoIterator<Item = R> { 
        let rows = rows.into_iter().map(|r| r.into_iter().collect_vec()).collect_vec();
        let m = rows.len();
        let n = rows.first().map(|r| r.len()).unwrap_or(0);

        assert!(rows.iter().all(|r| r.len() == n), "rows have different lengths");

        Self::from_data((m, n), rows.into_iter().flatten())
    }

    pub fn from_cols<I, J>(cols: I) -> Self
    where I: IntoIterator<Item = J>, J: IntoIterator<Item = R> { 
        Self::from_rows(cols).transpose()
    }

    pub fn row(&self, i: usize) -> Vec<R> { 
        assert!(self.is_valid_row_index(i));
        self.array.row(i).to_vec()
    }

    pub fn col(&self, j: usize) -> Vec<R> { 
        assert!(self.is_valid_col_index(j));
        self.array.column(j).to_vec()
    }

    pub fn transpose(&self) -> Self { 
        Self::from(self.array.t().to_owned())
    }

    pub fn submat(&self, rows: Range<usize>, cols: Range<usize>) -> Self { 
        let (i0, i1) = (rows.start, rows.end);
        let (j0, j1) = (cols.start, cols.end);

        assert!(i0 <= i1 && i1 <= self.nrows());
        assert!(j0 <= j1 && j1 <= self.ncols());

        Self::from(self.array.slice(s![i0..i1, j0..j1]).to_owned())
    }

    pub fn submat_cols(&self, cols: Range<usize>) -> Self { 
        self.submat(0 .. self.nrows(), cols)
    }

    /// `[self | other]`.
    pub fn concat(&self, other: &Self) -> Self { 
        assert_eq!(self.nrows(), other.nrows());

        let (m, n0, n1) = (self.nrows(), self.ncols(), other.ncols());
        let array = Array2::from_shape_fn((m, n0 + n1), |(i, j)| 
            if j < n0 { 
                self.array[(i, j)].clone()
            } else { 
                other.array[(i, j - n0)].clone()
            }
        );
        Self::from(array)
    }

    /// `[self; other]`, placing `other` below `self`.
    pub fn stack(&self, other: &Self) -> Self { 
        self.transpose().concat(&other.transpose()).transpose()
    }
}

impl<R> Mat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    pub fn zero(shape: (usize, usize)) -> Self { 
        Self::from(Array2::zeros(shape))
    }

    pub fn is_zero(&self) -> bool {
        self.array.iter().all(|a| a.is_zero())
    }

    pub fn id(size: usize) -> Self { 
        Self::from(Array2::from_diag_elem(size, R::one()))
    }

    pub fn is_id(&self) -> bool { 
        self.is_square() && self.iter().all(|(i, j, a)| 
            i == j && a.is_one() || i != j && a.is_zero()
        )
    }

    pub fn diag<I>(shape: (usize, usize), entries: I) -> Self
    where I: IntoIterator<Item = R> {
        let mut mat = Self::zero(shape);
        for (i, a) in entries.into_iter().enumerate() {
            assert!(i < shape.0 && i < shape.1, "too many diagonal entries for {shape:?}");
            mat[(i, i)] = a;
        }
        mat
    }

    pub fn is_diag(&self) -> bool { 
        self.iter().all(|(i, j, a)| 
            i == j || a.is_zero()
        )
    }

    pub fn is_upper_tri(&self) -> bool { 
        self.iter().all(|(i, j, a)| 
            i <= j || a.is_zero()
        )
    }

    pub fn pow(&self, n: usize) -> Self { 
        assert!(self.is_square(), "not a square matrix: {:?}", self.shape());

        let mut res = Self::id(self.nrows());
        let mut base = self.clone();
        let mut n = n;

        while n > 0 { 
            if n & 1 == 1 { 
                res = &res * &base;
            }
            n >>= 1;
            if n > 0 { 
                base = &base * &base;
            }
        }

        res
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, Error> { 
        if self.shape() != other.shape() { 
            return Err(Error::DimensionMismatch(self.shape(), other.shape()))
        }
        Ok(self + other)
    }

    pub fn try_mul(&self, other: &Self) -> Result<Self, Error> { 
        if self.ncols() != other.nrows() { 
            return Err(Error::DimensionMismatch(self.shape(), other.shape()))
        }
        Ok(self * other)
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) {
        assert!(self.is_valid_row_index(i));
        assert!(self.is_valid_row_index(j));

        if i == j { return }

        let (row_i, row_j) = self.array.multi_slice_mut((s![i, ..], s![j, ..]));
        Zip::from(row_i).and(row_j).for_each(std::mem::swap);
    }

    pub fn swap_cols(&mut self, i: usize, j: usize) {
        assert!(self.is_valid_col_index(i));
        assert!(self.is_valid_col_index(j));

        if i == j { return }

        let (col_i, col_j) = self.array.multi_slice_mut((s![.., i], s![.., j]));
        Zip::from(col_i).and(col_j).for_each(std::mem::swap);
    }

    pub fn mul_row(&mut self, i: usize, r: &R) {
        assert!(self.is_valid_row_index(i));
        for a in self.array.row_mut(i).iter_mut() {
            *a *= r;
        }
    }

    pub fn mul_col(&mut self, j: usize, r: &R) {
        assert!(self.is_valid_col_index(j));
        for a in self.array.column_mut(j).iter_mut() {
            *a *= r;
        }
    }

    /// row_j += r * row_i.
    pub fn add_row_to(&mut self, i: usize, j: usize, r: &R) { 
        assert!(self.is_valid_row_index(i));
        assert!(self.is_valid_row_index(j));
        assert_ne!(i, j);

        let (row_i, row_j) = self.array.multi_slice_mut((s![i, ..], s![j, ..]));
        Zip::from(row_i).and(row_j).for_each(|x, y| { 
            *y += r * &*x;
        });
    }

    /// col_j += col_i * r.
    pub fn add_col_to(&mut self, i: usize, j: usize, r: &R) { 
        assert!(self.is_valid_col_index(i));
        assert!(self.is_valid_col_index(j));
        assert_ne!(i, j);

        let (col_i, col_j) = self.array.multi_slice_mut((s![.., i], s![.., j]));
        Zip::from(col_i).and(col_j).for_each(|x, y| { 
            *y += &*x * r;
        });
    }

    // Multiply [a, b; c, d] from left. 
    pub fn left_elementary(&mut self, comps: [&R; 4], i: usize, j: usize) { 
        assert!(self.is_valid_row_index(i));
        assert!(self.is_valid_row_index(j));
        assert_ne!(i, j);

        let [a, b, c, d] = comps;
        let (row_i, row_j) = self.array.multi_slice_mut((s![i, ..], s![j, ..]));
        Zip::from(row_i).and(row_j).for_each(|x_mut, y_mut| { 
            let (x, y) = (x_mut as &R, y_mut as &R);
            (*x_mut, *y_mut) = (
                a * x + b * y,
                c * x + d * y
            )
        });
    }

    // Multiply [a, c; b, d] from right. 
    pub fn right_elementary(&mut self, comps: [&R; 4], i: usize, j: usize) { 
        assert!(self.is_valid_col_index(i));
        assert!(self.is_valid_col_index(j));
        assert_ne!(i, j);

        let [a, b, c, d] = comps;
        let (col_i, col_j) = self.array.multi_slice_mut((s![.., i], s![.., j]));
        Zip::from(col_i).and(col_j).for_each(|x_mut, y_mut| { 
            let (x, y) = (x_mut as &R, y_mut as &R);
            (*x_mut, *y_mut) = (
                x * a + y * b,
                x * c + y * d
            )
        });
    }
}

impl<R> Index<(usize, usize)> for Mat<R> {
    type Output = R;
    fn index(&self, index: (usize, usize)) -> &R {
        &self.array[index]
    }
}

impl<R> IndexMut<(usize, usize)> for Mat<R> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut R {
        &mut self.array[index]
    }
}

impl<R> Display for Mat<R>
where R: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (m, n) = self.shape();
        if m == 0 || n == 0 { 
            return write!(f, "[{m} × {n}]")
        }
        let str = grid(m, n, |i, j| &self.array[(i, j)]);
        f.write_str(str.trim_end())
    }
}

impl<R> Debug for Mat<R>
where R: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<R> Neg for Mat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<R> Neg for &Mat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Mat<R>;
    fn neg(self) -> Self::Output {
        self.map(|a| -a)
    }
}

#[auto_ops]
impl<R> AddAssign<&Mat<R>> for Mat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn add_assign(&mut self, rhs: &Self) {
        assert_eq!(self.shape(), rhs.shape(), "dimension mismatch");
        Zip::from(&mut self.array).and(&rhs.array).for_each(|a, b| *a += b);
    }
}

#[auto_ops]
impl<R> SubAssign<&Mat<R>> for Mat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn sub_assign(&mut self, rhs: &Self) {
        assert_eq!(self.shape(), rhs.shape(), "dimension mismatch");
        Zip::from(&mut self.array).and(&rhs.array).for_each(|a, b| *a -= b);
    }
}

#[auto_ops]
impl<R> MulAssign<&R> for Mat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn mul_assign(&mut self, rhs: &R) {
        self.array.iter_mut().for_each(|a| *a *= rhs);
    }
}

#[auto_ops]
impl<'a, 'b, R> Mul<&'b Mat<R>> for &'a Mat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Mat<R>;
    fn mul(self, rhs: &'b Mat<R>) -> Self::Output {
        assert_eq!(self.ncols(), rhs.nrows(), "dimension mismatch");

        let (l, m, n) = (self.nrows(), self.ncols(), rhs.ncols());
        let entry = |k: usize| { 
            let (i, j) = (k / n, k % n);
            R::sum((0..m).map(|t| &self[(i, t)] * &rhs[(t, j)]))
        };

        cfg_if::cfg_if! { 
            if #[cfg(feature = "multithread")] { 
                use rayon::prelude::*;
                if crate::config::use_multithread(l * m * n) { 
                    let data: Vec<_> = (0 .. l * n).into_par_iter().map(entry).collect();
                    return Mat::from_data((l, n), data)
                }
            }
        }

        Mat::from_data((l, n), (0 .. l * n).map(entry))
    }
}
