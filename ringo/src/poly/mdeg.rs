use std::cmp::Ordering;
use std::collections::btree_map::{self, BTreeMap};
use std::ops::{Add, AddAssign, SubAssign, Sub, Index};

use auto_impl_ops::auto_ops;
use derive_more::{Display, Debug};
use itertools::{Itertools, EitherOrBoth};
use num_traits::Zero;

/// Exponents `{ i => d_i }` of a monomial `Π x_i^{d_i}`, storing only
/// `d_i > 0`.
#[derive(Clone, Default, PartialEq, Eq, Hash, Display, Debug)]
#[display("{:?}", _0)]
#[debug("{:?}", _0)]
pub struct MultiDeg(BTreeMap<usize, usize>);

impl MultiDeg {
    pub fn iter(&self) -> btree_map::Iter<'_, usize, usize> {
        self.0.iter()
    }

    pub fn max_index(&self) -> Option<usize> {
        self.0.keys().next_back().copied()
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    // (i, d_i, e_i) over indices where either side is nonzero, ascending.
    fn zip<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = (usize, usize, usize)> + 'a {
        self.0.iter().merge_join_by(other.0.iter(), |a, b| a.0.cmp(b.0)).map(|e| match e {
            EitherOrBoth::Both((&i, &d), (_, &e)) => (i, d, e),
            EitherOrBoth::Left((&i, &d))  => (i, d, 0),
            EitherOrBoth::Right((&i, &e)) => (i, 0, e),
        })
    }

    /// `d_i <= e_i` for every `i`.
    pub fn divides(&self, other: &Self) -> bool {
        self.0.iter().all(|(&i, &d)| d <= other[i])
    }

    /// Entrywise max.
    pub fn lcm(&self, other: &Self) -> Self {
        self.zip(other).map(|(i, d, e)| (i, d.max(e))).collect()
    }

    /// Compared at the first differing index, the larger exponent wins.
    pub fn cmp_lex(&self, other: &Self) -> Ordering {
        self.zip(other)
            .map(|(_, d, e)| d.cmp(&e))
            .find(|c| c.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    pub fn cmp_grlex(&self, other: &Self) -> Ordering {
        self.total().cmp(&other.total())
            .then_with(|| self.cmp_lex(other))
    }

    /// Total degree first, then the smaller exponent at the last differing
    /// index wins.
    pub fn cmp_grevlex(&self, other: &Self) -> Ordering {
        self.total().cmp(&other.total()).then_with(||
            self.zip(other).collect_vec().into_iter().rev()
                .map(|(_, d, e)| e.cmp(&d))
                .find(|c| c.is_ne())
                .unwrap_or(Ordering::Equal)
        )
    }
}

impl PartialOrd for MultiDeg {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MultiDeg {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_grlex(other)
    }
}

impl From<(usize, usize)> for MultiDeg {
    fn from(value: (usize, usize)) -> Self {
        Self::from_iter([value])
    }
}

impl<const N: usize> From<[usize; N]> for MultiDeg {
    fn from(degs: [usize; N]) -> Self {
        degs.into_iter().enumerate().collect()
    }
}

impl FromIterator<(usize, usize)> for MultiDeg {
    fn from_iter<T: IntoIterator<Item = (usize, usize)>>(iter: T) -> Self {
        let mut res = BTreeMap::new();
        for (i, d) in iter {
            *res.entry(i).or_insert(0) += d;
        }
        res.retain(|_, d| *d > 0);
        Self(res)
    }
}

impl Index<usize> for MultiDeg {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        self.0.get(&i).unwrap_or(&0)
    }
}

impl Zero for MultiDeg {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }
}

#[auto_ops]
impl AddAssign<&MultiDeg> for MultiDeg {
    fn add_assign(&mut self, rhs: &MultiDeg) {
        for (&i, &d) in rhs.iter() {
            *self.0.entry(i).or_insert(0) += d;
        }
    }
}

// panics unless `rhs` divides `self`.
#[auto_ops]
impl SubAssign<&MultiDeg> for MultiDeg {
    fn sub_assign(&mut self, rhs: &MultiDeg) {
        for (&i, &d) in rhs.iter() {
            let e = self[i];
            assert!(d <= e, "x{i}^{d} does not divide x{i}^{e}");
            if d == e {
                self.0.remove(&i);
            } else {
                self.0.insert(i, e - d);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d<const N: usize>(degs: [usize; N]) -> MultiDeg {
        MultiDeg::from(degs)
    }

    #[test]
    fn zeros_are_dropped() {
        let a = MultiDeg::from_iter([(4, 0), (1, 2), (0, 0), (1, 1)]);
        assert_eq!(a, MultiDeg::from((1, 3)));
        assert_eq!(a.iter().count(), 1);
        assert_eq!(a[1], 3);
        assert_eq!(a[0], 0);
        assert_eq!(a.max_index(), Some(1));
        assert!(d([0, 0]).is_zero());
        assert_eq!(d([0, 0]).max_index(), None);
    }

    #[test]
    fn display() {
        assert_eq!(d([2, 0, 1]).to_string(), "{0: 2, 2: 1}");
    }

    #[test]
    fn divides_lcm() {
        assert!(d([]).divides(&d([1, 2])));
        assert!(d([0, 2, 1]).divides(&d([1, 2, 3])));
        assert!(!d([1, 3]).divides(&d([1, 2, 3])));
        assert!(!d([0, 0, 1]).divides(&d([5, 5])));
        assert_eq!(d([1, 0, 3]).lcm(&d([0, 2, 1, 1])), d([1, 2, 3, 1]));
    }

    #[test]
    fn orders() {
        let (a, b) = (d([1, 0, 1]), d([0, 2]));
        assert!(a.cmp_lex(&b).is_gt());
        assert!(a.cmp_grlex(&b).is_gt());
        assert!(a.cmp_grevlex(&b).is_lt());

        let (a, b) = (d([0, 0, 3]), d([2]));
        assert!(a.cmp_lex(&b).is_lt());
        assert!(a.cmp_grlex(&b).is_gt());
        assert!(a.cmp_grevlex(&b).is_gt());

        assert!(d([2, 1]).cmp_grevlex(&d([2, 1])).is_eq());
        assert!(d([3]) > d([1, 1]));
    }

    #[test]
    fn add_sub() {
        let a = d([1, 2, 0, 4]);
        let b = d([0, 2, 1]);
        assert_eq!(&a + &b, d([1, 4, 1, 4]));
        assert_eq!(&a - &d([1, 2]), d([0, 0, 0, 4]));
        assert_eq!(a - d([]), d([1, 2, 0, 4]));
    }

    #[test]
    #[should_panic]
    fn sub_not_divisible() {
        let _ = d([1, 2]) - d([0, 3]);
    }
}
