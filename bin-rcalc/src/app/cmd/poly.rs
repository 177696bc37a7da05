use std::marker::PhantomData;
use std::str::FromStr;
use ringo::{EucRing, EucRingOps};
use ringo::poly::Poly;
use crate::app::utils::*;
use crate::app::err::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Op { 
    #[default]
    Gcd, 
    Res
}

pub fn dispatch(args: &Args, op: Op) -> CmdResult<String> {
    let args = Args { op, ..args.clone() };
    dispatch_eucring!(App, args)
}

/// Polynomials are given by their coefficients in ascending order, e.g. `[-1,0,1]` for `x² - 1`.
#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub f: String,
    pub g: String,

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
        let f = parse_poly::<R>(&self.args.f)?;
        let g = parse_poly::<R>(&self.args.g)?;

        let res = match self.args.op { 
            Op::Gcd => Poly::gcd_primitive(&f, &g).to_string(),
            Op::Res => Poly::resultant(&f, &g).to_string(),
        };

        Ok(res)
    }
}

#[cfg(test)]
mod tests { 
    use super::*;

    fn run(f: &str, g: &str, c_type: CType, op: Op) -> CmdResult<String> { 
        let args = Args { 
            f: f.to_string(), 
            g: g.to_string(), 
            c_type,
            ..Default::default()
        };
        dispatch(&args, op)
    }

    #[test]
    fn gcd_z() { 
        // (x - 1)(x + 2), (x - 1)(x - 3)
        let res = run("[-2, 1, 1]", "[3, -4, 1]", CType::Z, Op::Gcd);
        assert_eq!(res.unwrap(), "x - 1");
    }

    #[test]
    fn gcd_content() { 
        // 2(x + 1), 4(x + 1)(x - 1)
        let res = run("[2, 2]", "[-4, 0, 4]", CType::Z, Op::Gcd);
        assert_eq!(res.unwrap(), "2x + 2");
    }

    #[test]
    fn gcd_q() { 
        let res = run("[\"-1/2\", 0, 2]", "[1, 2]", CType::Q, Op::Gcd);
        assert_eq!(res.unwrap(), "x + 1/2");
    }

    #[test]
    fn res_z() { 
        // res(x - 3, x - 7) = -4
        let res = run("[-3, 1]", "[-7, 1]", CType::Z, Op::Res);
        assert_eq!(res.unwrap(), "-4");

        let res = run("[0]", "[-7, 1]", CType::Z, Op::Res);
        assert_eq!(res.unwrap(), "0");
    }

    #[test]
    fn res_ff() { 
        // x² + 1 and x + 2 share the root 3 over F₅
        let res = run("[1, 0, 1]", "[2, 1]", CType::F5, Op::Res);
        assert_eq!(res.unwrap(), "0");
    }

    #[test]
    fn bad_input() { 
        let res = run("[1, \"y\"]", "[1]", CType::Z, Op::Res);
        assert!(res.is_err());
    }
}
