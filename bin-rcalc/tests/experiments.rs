use num_bigint::BigInt;
use num_traits::{One, Zero};

use ringo::{Ring, EucRing};
use ringo::num::Rational;
use ringo::poly::{Poly, PolyN};
use ringo_matrix::{hnf, snf, Mat};
use ringo_ideal::{Ideal, MonoOrd};

type Z = BigInt;
type Q = Rational;

fn z_mat<const N: usize>(shape: (usize, usize), data: [i64; N]) -> Mat<Z> {
    Mat::from_data(shape, data.map(Z::from))
}

fn q_mat<const N: usize>(shape: (usize, usize), data: [i32; N]) -> Mat<Q> {
    Mat::from_data(shape, data.map(Q::from))
}

fn init_logger() {
    use ringo::util::log::init_simple_logger;
    let _ = init_simple_logger(log::LevelFilter::Info);
}

#[test]
fn snf_recovers_matrix() {
    init_logger();

    let m = z_mat((3, 4), [
         2,  4,   4,  8,
        -6,  6,  12, 10,
        10, -4, -16, 12,
    ]);

    let res = snf(&m, [true; 4]);
    let s = res.result();
    let (Some(p), Some(pinv), Some(q), Some(qinv)) = (res.p(), res.pinv(), res.q(), res.qinv()) else {
        panic!()
    };

    assert!(s.is_diag());
    assert_eq!(&(p * &m) * q, s.clone());
    assert_eq!(&(pinv * s) * qinv, m);
    assert!((p * pinv).is_id());
    assert!((q * qinv).is_id());

    let d = res.factors();
    for i in 1 .. d.len() {
        assert!(d[i - 1].divides(d[i]));
    }
}

#[test]
fn hnf_is_unimodular() {
    let m = z_mat((3, 4), [
        3, 3, 1,  4,
        0, 1, 0,  0,
        0, 0, 19, 16,
    ]);

    let res = hnf(&m, true);
    let h = res.result();
    let Some(u) = res.u() else {
        panic!()
    };

    assert_eq!(u * &m, h.clone());
    assert!(u.det().is_pm_one());
    assert_eq!(res.rank(), 3);

    for (k, &j) in res.pivots().iter().enumerate() {
        let a = &h[(k, j)];
        assert!(a > &Z::zero());
        for i in 0 .. k {
            let b = &h[(i, j)];
            assert!(b >= &Z::zero() && b < a);
        }
    }
}

#[test]
fn nullspace_dimension() {
    let m = q_mat((3, 5), [
        1, 2, 0, -1, 3,
        2, 4, 1,  0, 1,
        3, 6, 1, -1, 4,
    ]);

    let n = m.nullspace();
    assert_eq!(n.ncols(), m.ncols() - m.rank());
    assert!((&m * &n).is_zero());

    let k = m.map(|a| a.numer().clone()).kernel();
    assert_eq!(k.ncols(), n.ncols());
    assert!((&m.map(|a| a.numer().clone()) * &k).is_zero());
}

#[test]
fn eigenvectors() {
    let m = q_mat((3, 3), [
        2, 0, 0,
        0, 3, 4,
        0, 4, 9,
    ]);

    let vals = m.eigenvalues();
    assert_eq!(vals, vec![(Q::from(1), 1), (Q::from(2), 1), (Q::from(11), 1)]);

    for (l, v) in m.eigenspaces() {
        assert_eq!(v.ncols(), 1);
        assert_eq!(&m * &v, v.clone() * &l);
    }
}

#[test]
fn charpoly_det() {
    let m = z_mat((3, 3), [
        1, 2, 3,
        4, 5, 6,
        7, 8, 10,
    ]);

    let p = m.charpoly();
    assert_eq!(p.deg(), 3);
    assert_eq!(p.lead_coeff(), &Z::one());
    assert_eq!(m.det(), Z::from(-3));
    assert_eq!(p.const_term(), &-m.det());
}

#[test]
fn resultant_bigint() {
    type P = Poly<'x', Z>;

    // res(x² - 2, x² - 3) = 1
    let f = P::from_coeffs([-2, 0, 1].map(Z::from));
    let g = P::from_coeffs([-3, 0, 1].map(Z::from));
    assert_eq!(P::resultant(&f, &g), Z::one());

    // disc(x³ - x) = 4
    let h = P::from_coeffs([0, -1, 0, 1].map(Z::from));
    assert_eq!(h.discriminant(), Z::from(4));
}

#[test]
fn binomial_ideal() {
    type P = PolyN<'x', Q>;
    let x = P::variable(0);
    let y = P::variable(1);
    let z = P::variable(2);

    // toric ideal of t ↦ (t, t², t³)
    let i = Ideal::new([&y - &x * &x, &z - &x * &y], MonoOrd::GrevLex);

    assert!(i.is_binomial());
    assert!(i.contains(&(&x * &z - &y * &y)));
    assert!(!i.is_whole());
}
