use std::marker::PhantomData;
use std::str::FromStr;
use itertools::Itertools;
use ringo::{EucRing, EucRingOps};
use ringo_matrix::snf;
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

    /// Also print the transformation matrices `P`, `Q` with `P A Q = S`.
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
        let t = self.args.trans;
        let res = snf(&a, [t, false, t, false]);

        self.out(&format!("S =\n{}", res.result()));
        self.out(&format!("factors: [{}]", res.factors().iter().join(", ")));

        if let (Some(p), Some(q)) = (res.p(), res.q()) { 
            self.out(&format!("P =\n{p}"));
            self.out(&format!("Q =\n{q}"));
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

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn snf_z() { 
        let args = Args { 
            matrix: "[[2, 4, 4], [-6, 6, 12], [10, -4, -16]]".to_string(), 
            ..Default::default()
        };
        let res = dispatch(&args);
        assert!(res.is_ok());
        assert!(res.unwrap().contains("factors: [2, 6, 12]"));
    }

    #[test]
    fn snf_trans() { 
        let args = Args { 
            matrix: "[[1, 2], [3, 4]]".to_string(), 
            trans: true,
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert!(res.contains("factors: [1, 2]"));
        assert!(res.contains("P ="));
        assert!(res.contains("Q ="));
    }

    #[test]
    fn snf_field() { 
        let args = Args { 
            matrix: "[[1, 2], [3, 4]]".to_string(), 
            c_type: CType::F2,
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert!(res.contains("factors: [1]"));
    }

    #[test]
    fn snf_bad_input() { 
        let args = Args { 
            matrix: "[[1, 2], [3]]".to_string(), 
            ..Default::default()
        };
        assert!(dispatch(&args).is_err());
    }
}
