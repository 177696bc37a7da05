use std::ops::{Mul, Neg};
use derive_more::Display;

/// `+1` or `-1`, as in the sign of a permutation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Display, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    #[default]
    #[display("+")]
    Pos,
    #[display("-")]
    Neg
}

impl Sign {
    /// The sign of a product of `n` transpositions.
    pub fn from_parity(n: usize) -> Self {
        [Sign::Pos, Sign::Neg][n % 2]
    }

    pub fn to_i32(self) -> i32 {
        match self {
            Sign::Pos => 1,
            Sign::Neg => -1
        }
    }
}

impl Neg for Sign {
    type Output = Self;
    fn neg(self) -> Self {
        self * Sign::Neg
    }
}

impl Mul for Sign {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Sign::from_parity(self as usize + rhs as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity() {
        let signs = (0..5).map(Sign::from_parity).map(Sign::to_i32).collect::<Vec<_>>();
        assert_eq!(signs, vec![1, -1, 1, -1, 1]);
    }

    #[test]
    fn group() {
        assert_eq!(Sign::Neg * Sign::Neg, Sign::Pos);
        assert_eq!(Sign::Pos * Sign::Neg, Sign::Neg);
        assert_eq!(-Sign::Neg, Sign::Pos);
        assert_eq!(-Sign::default(), Sign::Neg);
        assert_eq!(format!("{}{}", Sign::Pos, Sign::Neg), "+-");
    }
}
