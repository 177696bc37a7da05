use std::ops::{Mul, MulAssign};
use num_traits::One;
use crate::Elem;

// Monoids (multiplicative)

pub trait MonOps<T = Self>: 
    Sized + 
    Mul<T, Output = T> + 
    for<'a> Mul<&'a T, Output = T> 
{}

pub trait Mon: 
    Elem + 
    One +
    MonOps + 
    MulAssign + 
    for<'a> MulAssign<&'a Self>
where
    for<'a> &'a Self: MonOps<Self>
{
    fn product<A, I>(itr: I) -> Self 
    where 
        Self: MulAssign<A>,
        I: IntoIterator<Item = A> 
    { 
        itr.into_iter().fold(Self::one(), |mut res, a| { 
            res *= a;
            res
        })
    }

    fn pow_n(&self, n: usize) -> Self { 
        let mut res = Self::one();
        let mut base = self.clone();
        let mut n = n;

        while n > 0 { 
            if n & 1 == 1 { 
                res *= &base;
            }
            n >>= 1;
            if n > 0 { 
                base = &base * &base;
            }
        }

        res
    }
}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn product() { 
        let a = i64::product([4,5,6]);
        assert_eq!(a, 120);
    }

    #[test]
    fn pow_n() { 
        assert_eq!(3i64.pow_n(0), 1);
        assert_eq!(3i64.pow_n(1), 3);
        assert_eq!(3i64.pow_n(5), 243);
        assert_eq!((-2i64).pow_n(3), -8);
    }
}
