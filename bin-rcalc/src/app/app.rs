use log::info;
use clap::{Parser, Subcommand};

use super::cmd::{snf, hnf, mat, eigen, poly};
use super::utils::*;
use super::err::CmdResult;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    Snf(snf::Args),
    Hnf(hnf::Args),
    Det(mat::Args),
    Rank(mat::Args),
    Inv(mat::Args),
    Nullspace(mat::Args),
    Charpoly(mat::Args),
    Eigen(eigen::Args),
    Gcd(poly::Args),
    Res(poly::Args),
}

impl CliArgs { 
    fn log_level(&self) -> log::LevelFilter { 
        let level = match &self.command { 
            Cmd::Snf(args)   => &args.log,
            Cmd::Hnf(args)   => &args.log,
            Cmd::Eigen(args) => &args.log,
            Cmd::Det(args)       |
            Cmd::Rank(args)      |
            Cmd::Inv(args)       |
            Cmd::Nullspace(args) |
            Cmd::Charpoly(args)  => &args.log,
            Cmd::Gcd(args) |
            Cmd::Res(args) => &args.log,
        };
        ringo::util::log::level_from_str(level)
    }
}

pub struct App {
    pub args: CliArgs
}

impl App { 
    pub fn new() -> Self { 
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> CmdResult<String> { 
        self.init_logger()?;

        info!("args: {:?}", self.args);
        info!("int-type: {}", std::any::type_name::<super::utils::dispatch::Int>());

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) -> Result<(), log::SetLoggerError> {
        let l = self.args.log_level();
        ringo::util::log::init_simple_logger(l)
    }

    fn dispatch(&self) -> CmdResult<String> { 
        use mat::Op::*;
        use poly::Op::{Gcd, Res};

        guard_panic(||
            match &self.args.command { 
                Cmd::Snf(args)       => snf::dispatch(args),
                Cmd::Hnf(args)       => hnf::dispatch(args),
                Cmd::Det(args)       => mat::dispatch(args, Det),
                Cmd::Rank(args)      => mat::dispatch(args, Rank),
                Cmd::Inv(args)       => mat::dispatch(args, Inv),
                Cmd::Nullspace(args) => mat::dispatch(args, Nullspace),
                Cmd::Charpoly(args)  => mat::dispatch(args, Charpoly),
                Cmd::Eigen(args)     => eigen::dispatch(args),
                Cmd::Gcd(args)       => poly::dispatch(args, Gcd),
                Cmd::Res(args)       => poly::dispatch(args, Res),
            }
        )
    }
}
