use std::cmp::min;
use log::{debug, trace};
use ringo::{EucRing, EucRingOps, Error};
use crate::Mat;

/// Which of `[p, pinv, q, qinv]` to compute.
pub type SnfFlags = [bool; 4];

/// `S = P M Q` with `S` diagonal, each nonzero diagonal entry normalized
/// and dividing the next.
#[derive(Debug)]
pub struct SnfResult<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    result: Mat<R>,
    trans: [Option<Mat<R>>; 4]
}

impl<R> SnfResult<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    pub fn result(&self) -> &Mat<R> {
        &self.result
    }

    pub fn p(&self) -> Option<&Mat<R>> {
        self.trans[0].as_ref()
    }

    pub fn pinv(&self) -> Option<&Mat<R>> {
        self.trans[1].as_ref()
    }

    pub fn q(&self) -> Option<&Mat<R>> {
        self.trans[2].as_ref()
    }

    pub fn qinv(&self) -> Option<&Mat<R>> {
        self.trans[3].as_ref()
    }

    pub fn destruct(self) -> (Mat<R>, [Option<Mat<R>>; 4]) {
        (self.result, self.trans)
    }

    pub fn rank(&self) -> usize {
        self.factors().len()
    }

    /// The nonzero diagonal entries.
    pub fn factors(&self) -> Vec<&R> {
        let n = min(self.result.nrows(), self.result.ncols());
        (0..n).map(|i| &self.result[(i, i)]).take_while(|a| !a.is_zero()).collect()
    }
}

pub fn snf<R>(target: &Mat<R>, flags: SnfFlags) -> SnfResult<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    snf_in_place(target.clone(), flags)
}

pub fn snf_in_place<R>(target: Mat<R>, flags: SnfFlags) -> SnfResult<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    debug!("snf: {:?}, flags: {:?}", target.shape(), flags);
    trace!("\n{target}");

    let mut d = Diagonalizer::new(target, flags);
    let r = d.diagonalize();
    d.fix_divisibility(r);

    debug!("snf: rank = {r}");
    trace!("\n{}", d.target);

    SnfResult { result: d.target, trans: [d.p, d.pinv, d.q, d.qinv] }
}

// An invertible transformation acting on a pair of rows or columns `(i, j)`.
#[derive(Clone, Debug)]
enum Step<R> {
    Swap,
    Scale(R),              // row / col i by a unit
    Unimod([R; 4])         // [a, b; c, d] with ad - bc = 1
}

impl<R> Step<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    fn inv(&self) -> Self {
        match self {
            Step::Swap => Step::Swap,
            Step::Scale(u) => match u.inv() {
                Some(v) => Step::Scale(v),
                None => panic!("{u} is not a unit")
            },
            Step::Unimod([a, b, c, d]) => Step::Unimod([d.clone(), -b, -c, a.clone()])
        }
    }

    // M <- E M
    fn apply_left(&self, m: &mut Mat<R>, i: usize, j: usize) {
        match self {
            Step::Swap => m.swap_rows(i, j),
            Step::Scale(u) => m.mul_row(i, u),
            Step::Unimod([a, b, c, d]) => m.left_elementary([a, b, c, d], i, j)
        }
    }

    // M <- M E
    fn apply_right(&self, m: &mut Mat<R>, i: usize, j: usize) {
        match self {
            Step::Swap => m.swap_cols(i, j),
            Step::Scale(u) => m.mul_col(i, u),
            Step::Unimod([a, b, c, d]) => m.right_elementary([a, c, b, d], i, j)
        }
    }
}

struct Diagonalizer<R> {
    target: Mat<R>,
    p:    Option<Mat<R>>,
    pinv: Option<Mat<R>>,
    q:    Option<Mat<R>>,
    qinv: Option<Mat<R>>
}

impl<R> Diagonalizer<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    fn new(target: Mat<R>, flags: SnfFlags) -> Self {
        let (m, n) = target.shape();
        let id = |k: usize, f: bool| f.then(|| Mat::id(k));
        Self {
            p:    id(m, flags[0]),
            pinv: id(m, flags[1]),
            q:    id(n, flags[2]),
            qinv: id(n, flags[3]),
            target
        }
    }

    // P <- E P and P⁻¹ <- P⁻¹ E⁻¹.
    fn row_step(&mut self, e: Step<R>, i: usize, j: usize) {
        trace!("row {e:?} on ({i}, {j})");
        e.apply_left(&mut self.target, i, j);
        if let Some(p) = &mut self.p {
            e.apply_left(p, i, j);
        }
        if let Some(pinv) = &mut self.pinv {
            e.inv().apply_right(pinv, i, j);
        }
    }

    // Q <- Q E and Q⁻¹ <- E⁻¹ Q⁻¹.
    fn col_step(&mut self, e: Step<R>, i: usize, j: usize) {
        trace!("col {e:?} on ({i}, {j})");
        e.apply_right(&mut self.target, i, j);
        if let Some(q) = &mut self.q {
            e.apply_right(q, i, j);
        }
        if let Some(qinv) = &mut self.qinv {
            e.inv().apply_left(qinv, i, j);
        }
    }

    /// Moves pivots to `(0, 0), (1, 1), ...` and clears their rows and
    /// columns. Returns the number of pivots.
    fn diagonalize(&mut self) -> usize {
        let (m, n) = self.target.shape();

        for k in 0..min(m, n) {
            let Some((i, j)) = self.find_pivot(k) else {
                return k
            };
            if i != k {
                self.row_step(Step::Swap, k, i);
            }
            if j != k {
                self.col_step(Step::Swap, k, j);
            }
            self.clear_cross(k);
        }

        min(m, n)
    }

    // In the first nonzero column of the lower-right block from `k`, a unit
    // entry if there is one, otherwise the entry with the sparsest row.
    fn find_pivot(&self, k: usize) -> Option<(usize, usize)> {
        let (m, n) = self.target.shape();
        let a = &self.target;

        let j = (k..n).find(|&j| (k..m).any(|i| !a[(i, j)].is_zero()))?;
        let rows = (k..m).filter(|&i| !a[(i, j)].is_zero());
        let nnz = |i: usize| (k..n).filter(|&l| !a[(i, l)].is_zero()).count();

        let i = rows.clone().find(|&i| a[(i, j)].is_unit())
            .or_else(|| rows.min_by_key(|&i| nnz(i)))?;

        Some((i, j))
    }

    // Repeats column then row elimination against `(k, k)` until both are
    // clear. The pivot only ever gets replaced by a proper divisor.
    fn clear_cross(&mut self, k: usize) {
        let (m, n) = self.target.shape();

        loop {
            let mut changed = false;

            for i in k + 1 .. m {
                if self.target[(i, k)].is_zero() { continue }

                let (d, s, t) = elem_gcdx(&self.target[(k, k)], &self.target[(i, k)]);
                let a = &self.target[(k, k)] / &d;
                let b = &self.target[(i, k)] / &d;

                // [s t; -b a][x; y] = [d; 0]
                self.row_step(Step::Unimod([s, t, -b, a]), k, i);
                changed = true;
            }

            for j in k + 1 .. n {
                if self.target[(k, j)].is_zero() { continue }

                let (d, s, t) = elem_gcdx(&self.target[(k, k)], &self.target[(k, j)]);
                let a = &self.target[(k, k)] / &d;
                let b = &self.target[(k, j)] / &d;

                // [x y][s -b; t a] = [d 0]
                self.col_step(Step::Unimod([s, -b, t, a]), k, j);
                changed = true;
            }

            if !changed { break }
        }
    }

    // For i < j, replaces (x, y) = (s_i, s_j) by (gcd, lcm) until s_i | s_j,
    // then normalizes each entry.
    fn fix_divisibility(&mut self, r: usize) {
        for i in 0..r {
            for j in i + 1 .. r {
                let x = &self.target[(i, i)];
                let y = &self.target[(j, j)];
                if x.divides(y) { continue }

                // [1 1; -tb sa] diag(x, y) [s -b; t a] = diag(d, xy/d)
                let (d, s, t) = elem_gcdx(x, y);
                let (a, b) = (x / &d, y / &d);
                let (tb, sa) = (&t * &b, &s * &a);

                self.row_step(Step::Unimod([R::one(), R::one(), -tb, sa]), i, j);
                self.col_step(Step::Unimod([s, -b, t, a]), i, j);
            }

            let u = self.target[(i, i)].normalizing_unit();
            if !u.is_one() {
                self.row_step(Step::Scale(u), i, i);
            }
        }
    }
}

// `d = sx + ty` as in `EucRing::gcdx`, preferring `(s, t) = (1/a, 0)`
// when `x = ad` with `a` a unit.
pub(crate) fn elem_gcdx<R>(x: &R, y: &R) -> (R, R, R)
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    let (d, s, t) = EucRing::gcdx(x, y);

    match (x / &d).inv() {
        Some(ainv) => (d, ainv, R::zero()),
        None       => (d, s, t)
    }
}

impl<R> Mat<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    pub fn rank(&self) -> usize {
        snf(self, [false; 4]).rank()
    }

    /// The inverse, if `self` is invertible over `R`.
    pub fn inv(&self) -> Option<Self> {
        if !self.is_square() {
            return None
        }

        // P M Q = I, hence M⁻¹ = Q P.
        let (s, [p, _, q, _]) = snf(self, [true, false, true, false]).destruct();
        match (s.is_id(), p, q) {
            (true, Some(p), Some(q)) => Some(q * p),
            _ => None
        }
    }

    pub fn try_inv(&self) -> Result<Self, Error> {
        if !self.is_square() {
            return Err(Error::NotSquare(self.shape()))
        }
        self.inv().ok_or(Error::NotInvertible)
    }

    /// A basis of `{ v | M v = 0 }` as columns. Over `Z` this is a
    /// basis of the kernel lattice.
    pub fn kernel(&self) -> Self {
        let n = self.ncols();
        let res = snf(self, [false, false, true, false]);
        let r = res.rank();

        match res.q() {
            Some(q) => q.submat_cols(r..n),
            None => Mat::zero((n, 0))
        }
    }
}
