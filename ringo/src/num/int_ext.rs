use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, FromPrimitive, CheckedAdd};
use num_integer::{Integer as NumInteger, ExtendedGcd};
use crate::{Elem, AddMon, AddMonOps, AddGrp, AddGrpOps, Mon, MonOps, Ring, RingOps, EucRing, EucRingOps};

pub trait IntOps<T = Self>: EucRingOps<T> {}

/// Signed integer types used as the ring `Z`.
///
/// Units are `±1` and the normal form of `a` is `|a|`.
pub trait Integer: EucRing + IntOps + Signed + PartialOrd + Ord + FromPrimitive + ToPrimitive + CheckedAdd
where for<'a> &'a Self: EucRingOps<Self> {}

macro_rules! impl_integer {
    ($($t:ty),*) => { $(
        impl AddMonOps for $t {}
        impl AddGrpOps for $t {}
        impl MonOps for $t {}
        impl RingOps for $t {}
        impl EucRingOps for $t {}
        impl IntOps for $t {}

        impl AddMonOps<$t> for &$t {}
        impl AddGrpOps<$t> for &$t {}
        impl MonOps<$t> for &$t {}
        impl RingOps<$t> for &$t {}
        impl EucRingOps<$t> for &$t {}
        impl IntOps<$t> for &$t {}

        impl Elem for $t {
            fn math_symbol() -> String {
                "Z".to_string()
            }
        }

        impl AddMon for $t {}
        impl AddGrp for $t {}
        impl Mon for $t {}

        impl Ring for $t {
            fn inv(&self) -> Option<Self> {
                self.is_unit().then(|| self.clone())
            }

            fn is_unit(&self) -> bool {
                self.abs().is_one()
            }

            fn normalizing_unit(&self) -> Self {
                if self.is_negative() { -<$t>::one() } else { <$t>::one() }
            }
        }

        // gcd and lcm are non-negative; the gcdx triple is flipped to match.
        impl EucRing for $t {
            fn gcd(x: &Self, y: &Self) -> Self {
                NumInteger::gcd(x, y)
            }

            fn gcdx(x: &Self, y: &Self) -> (Self, Self, Self) {
                let ExtendedGcd { gcd, x: s, y: t, .. } = NumInteger::extended_gcd(x, y);
                match gcd.is_negative() {
                    true  => (-gcd, -s, -t),
                    false => (gcd, s, t)
                }
            }

            fn lcm(x: &Self, y: &Self) -> Self {
                NumInteger::lcm(x, y)
            }

            fn rem_normalized(&self, m: &Self) -> Self {
                self.mod_floor(m)
            }
        }

        impl Integer for $t {}
    )* };
}

impl_integer!(i32, i64, i128, BigInt);
