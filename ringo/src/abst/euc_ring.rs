// Euclidean Rings

use std::ops::{Div, DivAssign, Rem, RemAssign};
use crate::{Ring, RingOps};

pub trait EucRingOps<T = Self>: 
    RingOps<T> + 
    Div<T, Output = T> +
    for<'a> Div<&'a T, Output = T> +
    Rem<T, Output = T> +
    for<'a> Rem<&'a T, Output = T>
{}

pub trait EucRing: 
    Ring + 
    EucRingOps + 
    DivAssign +
    for<'a> DivAssign<&'a Self> +
    RemAssign + 
    for<'a> RemAssign<&'a Self>
where 
    for<'a> &'a Self: EucRingOps<Self>,
{
    fn divides(&self, y: &Self) -> bool { 
        !self.is_zero() && (y % self).is_zero()
    }

    fn gcd(x: &Self, y: &Self) -> Self {
        if x.is_zero() && y.is_zero() { return Self::zero() }
        if x.divides(y) { return x.normalized() }
        if y.divides(x) { return y.normalized() }

        let (mut x, mut y) = (x.clone(), y.clone());

        while !y.is_zero() {
            let r = &x % &y;
            (x, y) = (y, r);
        }

        x.normalized()
    }

    fn gcdx(x: &Self, y: &Self) -> (Self, Self, Self) {
        if x.is_zero() && y.is_zero() { return (Self::zero(), Self::zero(), Self::zero()) }

        let (mut x,  mut y)  = (x.clone(), y.clone());
        let (mut s0, mut s1) = (Self::one(),  Self::zero());
        let (mut t0, mut t1) = (Self::zero(), Self::one() );

        while !y.is_zero() {
            let q = &x / &y;
            let r = &x % &y;

            (x, y) = (y, r);
            (s1, s0) = (s0 - &q * &s1, s1);
            (t1, t0) = (t0 - &q * &t1, t1);
        }

        // normalize so that d = sx + ty holds with d normalized.
        let u = x.normalizing_unit();
        if u.is_one() { 
            (x, s0, t0)
        } else { 
            (x * &u, s0 * &u, t0 * &u)
        }
    }

    fn lcm(x: &Self, y: &Self) -> Self { 
        if x.is_zero() || y.is_zero() { return Self::zero() }
        let g = Self::gcd(x, y);
        (x * (y / g)).normalized()
    }

    // canonical representative of `self` modulo `m`.
    fn rem_normalized(&self, m: &Self) -> Self { 
        self % m
    }
}
