use std::marker::PhantomData;
use std::str::FromStr;
use ringo::{EucRing, EucRingOps};
use crate::app::utils::*;
use crate::app::err::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Op { 
    #[default]
    Det, 
    Rank, 
    Inv, 
    Nullspace, 
    Charpoly
}

pub fn dispatch(args: &Args, op: Op) -> CmdResult<String> {
    let args = Args { op, ..args.clone() };
    dispatch_eucring!(App, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub matrix: String,

    #[arg(short = 't', long, default_value = "Z")]
    pub c_type: CType,

    #[arg(long, default_value = "off")]
    pub log: String,

    #[arg(skip)]
    pub op: Op,
}

pub struct App<R>
where
    R: EucRing + FromStr,
    for<'x> &'x R: EucRingOps<R>,
{
    args: Args,
    _ring: PhantomData<R>
}

impl<R> App<R>
where
    R: EucRing + FromStr,
    for<'x> &'x R: EucRingOps<R>,
{
    pub fn new(args: Args) -> Self { 
        App { args, _ring: PhantomData }
    }

    pub fn run(&mut self) -> CmdResult<String> { 
        let a = parse_mat::<R>(&self.args.matrix)?;

        let res = match self.args.op { 
            Op::Det => { 
                a.try_det()?.to_string()
            },
            Op::Rank => { 
                a.rank().to_string()
            },
            Op::Inv => { 
                a.try_inv()?.to_string()
            },
            Op::Nullspace => { 
                let k = a.kernel();
                if k.ncols() == 0 { 
                    "0".to_string()
                } else { 
                    k.to_string()
                }
            },
            Op::Charpoly => { 
                ensure!(a.is_square(), "not a square matrix: {:?}", a.shape());
                a.charpoly().to_string()
            }
        };

        Ok(res)
    }
}
