use log::{debug, trace};
use ringo::{EucRing, EucRingOps};
use crate::Mat;
use crate::snf::elem_gcdx;

/// Row-style Hermite normal form `H = U M` with `U` unimodular.
pub fn hnf<R>(target: &Mat<R>, with_trans: bool) -> HnfResult<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    let copy = target.clone();
    hnf_in_place(copy, with_trans)
}

pub fn hnf_in_place<R>(target: Mat<R>, with_trans: bool) -> HnfResult<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    debug!("start hnf: {:?}, trans: {with_trans}.", target.shape());
    trace!("\n{}", target);

    let mut calc = HnfCalc::new(target, with_trans);

    calc.process();

    debug!("hnf done, rank: {}.", calc.pivots.len());
    trace!("\n{}", calc.target);

    calc.result()
}

#[derive(Debug)]
pub struct HnfResult<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> { 
    result: Mat<R>,
    u:    Option<Mat<R>>,
    uinv: Option<Mat<R>>,
    pivots: Vec<usize>
}

impl<R> HnfResult<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> { 
    pub fn result(&self) -> &Mat<R> { 
        &self.result
    }

    pub fn u(&self) -> Option<&Mat<R>> {
        self.u.as_ref()
    }

    pub fn uinv(&self) -> Option<&Mat<R>> {
        self.uinv.as_ref()
    }

    /// The pivot column of each nonzero row.
    pub fn pivots(&self) -> &[usize] { 
        &self.pivots
    }

    pub fn rank(&self) -> usize { 
        self.pivots.len()
    }

    pub fn destruct(self) -> (Mat<R>, Option<Mat<R>>, Option<Mat<R>>) { 
        (self.result, self.u, self.uinv)
    }
}

struct HnfCalc<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    target: Mat<R>,
    u:    Option<Mat<R>>,
    uinv: Option<Mat<R>>,
    pivots: Vec<usize>
}

impl<R> HnfCalc<R>
where R: EucRing, for<'a> &'a R: EucRingOps<R> {
    fn new(target: Mat<R>, with_trans: bool) -> Self { 
        let m = target.nrows();
        let (u, uinv) = if with_trans { 
            (Some(Mat::id(m)), Some(Mat::id(m)))
        } else { 
            (None, None)
        };
        HnfCalc { target, u, uinv, pivots: vec![] }
    }

    fn result(self) -> HnfResult<R> { 
        HnfResult { 
            result: self.target, 
            u: self.u, 
            uinv: self.uinv, 
            pivots: self.pivots 
        }
    }

    fn process(&mut self) { 
        let (m, n) = self.target.shape();
        let mut i = 0;

        for j in 0..n { 
            if i >= m { break }
            if self.process_col(i, j) { 
                self.pivots.push(j);
                i += 1;
            }
        }
    }

    fn process_col(&mut self, i: usize, j: usize) -> bool { 
        let m = self.target.nrows();
        let Some(k) = (i..m).find(|&k| !self.target[(k, j)].is_zero()) else { 
            return false
        };

        if k > i { 
            self.swap_rows(i, k);
        }

        // collect the gcd of column j into (i, j).
        for k in i + 1 .. m { 
            if self.target[(k, j)].is_zero() { continue }

            let x = &self.target[(i, j)];
            let y = &self.target[(k, j)];

            let (d, s, t) = elem_gcdx(x, y);
            let (a, b) = (x / &d, y / &d);

            self.left_elementary([&s, &t, &-b, &a], i, k);
        }

        let u = self.target[(i, j)].normalizing_unit();
        if !u.is_one() { 
            self.mul_row(i, &u);
        }

        self.reduce_above(i, j);

        true
    }

    fn reduce_above(&mut self, i: usize, j: usize) { 
        let p = self.target[(i, j)].clone();

        for k in 0..i { 
            let x = &self.target[(k, j)];
            let r = x.rem_normalized(&p);
            if &r == x { continue }

            let q = (x - r) / &p;
            self.add_row_to(i, k, &-q);
        }
    }

    fn swap_rows(&mut self, i: usize, j: usize) {
        self.target.swap_rows(i, j);
        if let Some(u) = self.u.as_mut() { 
            u.swap_rows(i, j) 
        }
        if let Some(uinv) = self.uinv.as_mut() { 
            uinv.swap_cols(i, j) 
        }

        trace!("swap-rows: ({i}, {j})\n{}", self.target);
    }

    fn mul_row(&mut self, i: usize, r: &R) {
        self.target.mul_row(i, r);
        if let Some(u) = self.u.as_mut() { 
            u.mul_row(i, r) 
        }
        if let Some(uinv) = self.uinv.as_mut() {
            let Some(rinv) = &r.inv() else { panic!("{r} is not invertible.") };
            uinv.mul_col(i, rinv) 
        }

        trace!("mul-row: {i} by {r}\n{}", self.target);
    }

    // row_j += r * row_i.
    fn add_row_to(&mut self, i: usize, j: usize, r: &R) { 
        self.target.add_row_to(i, j, r);
        if let Some(u) = self.u.as_mut() { 
            u.add_row_to(i, j, r) 
        }
        if let Some(uinv) = self.uinv.as_mut() { 
            uinv.add_col_to(j, i, &-r) 
        }

        trace!("add-row: {i} to {j} by {r}\n{}", self.target);
    }

    // Multiply [a, b; c, d] from left, assuming det = 1.
    fn left_elementary(&mut self, comps: [&R; 4], i: usize, j: usize) { 
        let [a, b, c, d] = comps;
        debug_assert!((a * d - b * c).is_one());

        self.target.left_elementary(comps, i, j);
        if let Some(u) = self.u.as_mut() {
            u.left_elementary(comps, i, j) 
        } 
        if let Some(uinv) = self.uinv.as_mut() { 
            let inv_t = [d, &-c, &-b, a];
            uinv.right_elementary(inv_t, i, j) 
        }

        trace!("left-elem: [{a}, {b}; {c}, {d}] for rows ({i}, {j})\n{}", self.target);
    }
}
