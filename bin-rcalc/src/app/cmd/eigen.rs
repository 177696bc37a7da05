use std::marker::PhantomData;
use std::str::FromStr;
use ringo::FieldOps;
use ringo::poly::RootField;
use ringo::util::format::table;
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> CmdResult<String> {
    dispatch_field!(App, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub matrix: String,

    #[arg(short = 't', long, default_value = "Q")]
    pub c_type: CType,

    #[arg(long, default_value = "off")]
    pub log: String,
}

pub struct App<R>
where
    R: RootField + FromStr,
    for<'x> &'x R: FieldOps<R>,
{
    args: Args,
    buff: String,
    _ring: PhantomData<R>
}

impl<R> App<R>
where
    R: RootField + FromStr,
    for<'x> &'x R: FieldOps<R>,
{
    pub fn new(args: Args) -> Self { 
        let buff = String::with_capacity(1024);
        App { args, buff, _ring: PhantomData }
    }

    pub fn run(&mut self) -> CmdResult<String> { 
        let a = parse_mat::<R>(&self.args.matrix)?;
        ensure!(a.is_square(), "not a square matrix: {:?}", a.shape());

        let values = a.eigenvalues();
        if values.is_empty() { 
            self.out(&format!("no eigenvalues in {}.", R::math_symbol()));
            return Ok(self.flush())
        }

        let spaces = a.eigenspaces();
        let table = table("λ", values.iter().map(|(e, _)| e), ["mult", "dim"].into_iter(), |e, j| {
            let Some(i) = values.iter().position(|(f, _)| f == *e) else {
                unreachable!()
            };
            match *j {
                "mult" => values[i].1,
                _      => spaces[i].1.ncols()
            }
        });
        self.out(&table);

        for (e, v) in spaces.iter() { 
            self.out(&format!("E(λ = {e}) =\n{v}\n"));
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

    fn has_row(res: &str, row: [&str; 3]) -> bool { 
        res.lines().any(|l| l.split_whitespace().eq(row))
    }

    #[test]
    fn eigen_q() { 
        let args = Args { 
            matrix: "[[2, 1], [1, 2]]".to_string(), 
            c_type: CType::Q,
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert!(has_row(&res, ["1", "1", "1"]));
        assert!(has_row(&res, ["3", "1", "1"]));
        assert!(res.contains("E(λ = 1) ="));
        assert!(res.contains("E(λ = 3) ="));
    }

    #[test]
    fn eigen_multiple() { 
        let args = Args { 
            matrix: "[[1, 1], [0, 1]]".to_string(), 
            c_type: CType::F5,
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert!(has_row(&res, ["1", "2", "1"]));
    }

    #[test]
    fn eigen_none() { 
        let args = Args { 
            matrix: "[[0, -1], [1, 0]]".to_string(), 
            c_type: CType::Q,
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert!(res.starts_with("no eigenvalues"));
    }

    #[test]
    fn eigen_over_z() { 
        let args = Args { 
            matrix: "[[2, 1], [1, 2]]".to_string(), 
            c_type: CType::Z,
            ..Default::default()
        };
        assert!(dispatch(&args).is_err());
    }
}
