mod elem;
mod add_mon;
mod add_grp;
mod mon;
mod ring;
mod euc_ring;
mod field;

pub use elem::{Elem, ElemBase};
pub use add_mon::{AddMon, AddMonOps};
pub use add_grp::{AddGrp, AddGrpOps};
pub use mon::{Mon, MonOps};
pub use ring::{Ring, RingOps};
pub use euc_ring::{EucRing, EucRingOps};
pub use field::{Field, FieldOps};
