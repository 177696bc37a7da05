/// A failure reported to the user as `error: <msg>`.
#[derive(Debug, derive_more::Display)]
#[display("{}", _0)]
pub struct CliError(pub String);

impl std::error::Error for CliError {}

pub type CmdResult<T> = Result<T, Box<dyn std::error::Error>>;

macro_rules! err {
    ($($arg:tt)*) => {
        Err($crate::app::err::CliError(format!($($arg)*)).into())
    }
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            return err!($($arg)*)
        }
    }
}

pub(crate) use {err, ensure};
