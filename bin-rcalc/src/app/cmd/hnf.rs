use std::marker::PhantomData;
use std::str::FromStr;
use itertools::Itertools;
use ringo::{EucRing, EucRingOps};
use ringo_matrix::hnf;
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> CmdResult<String> {
    dispatch_eucring!(App, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub matrix: String,

    #[arg(short = 't', long, default_value = "Z")]
    pub c_type: CType,

    /// Also print the unimodular matrix `U` with `U A = H`.
    #[arg(long)]
    pub trans: bool,

    #[arg(long, default_value = "off")]
    pub log: String,
}

pub struct App<R>
where
    R: EucRing + FromStr,
    for<'x> &'x R: EucRingOps<R>,
{
    args: Args,
    buff: String,
    _ring: PhantomData<R>
}

impl<R> App<R>
where
    R: EucRing + FromStr,
    for<'x> &'x R: EucRingOps<R>,
{
    pub fn new(args: Args) -> Self { 
        let buff = String::with_capacity(1024);
        App { args, buff, _ring: PhantomData }
    }

    pub fn run(&mut self) -> CmdResult<String> { 
        let a = parse_mat::<R>(&self.args.matrix)?;
        let res = hnf(&a, self.args.trans);

        self.out(&format!("H =\n{}", res.result()));
        self.out(&format!("pivots: [{}]", res.pivots().iter().join(", ")));

        if let Some(u) = res.u() { 
            self.out(&format!("U =\n{u}"));
        }

        Ok(self.flush())
    }

    fn out(&mut self, str: &str) { 
        self.buff.push_str(str);
        self.buff.push('\n');
    }

    fn flush(&mut self) -> String { 
        let res = std::mem::take(&mut self.buff);
        res.trim().to_string()
    }
}
