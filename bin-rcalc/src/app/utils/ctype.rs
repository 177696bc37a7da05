use clap::ValueEnum;
use derive_more::Display;

/// Coefficient ring selected by `-t`.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="verbatim")]
pub enum CType { 
    #[default] Z, 
    Q, F2, F3, F5, F7
}
