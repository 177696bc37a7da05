use crate::{EucRing, EucRingOps};

// Fields

pub trait FieldOps<T = Self>: 
    EucRingOps<T>
{}

pub trait Field: 
    EucRing + 
    FieldOps
where 
    for<'a> &'a Self: FieldOps<Self> 
{
    /// The characteristic, `0` unless overridden.
    fn characteristic() -> usize { 
        0
    }

    /// The unique `b` with `b^p = self` where `p` is the characteristic, 
    /// if it can be computed.
    fn pth_root(&self) -> Option<Self> { 
        None
    }
}
