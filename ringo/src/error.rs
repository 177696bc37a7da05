use derive_more::Display;

#[derive(Clone, PartialEq, Eq, Debug, Display)]
pub enum Error { 
    #[display("dimension mismatch: {_0:?} and {_1:?}")]
    DimensionMismatch((usize, usize), (usize, usize)),

    #[display("not a square matrix: {_0:?}")]
    NotSquare((usize, usize)),

    #[display("not invertible")]
    NotInvertible,

    #[display("cannot parse '{_0}'")]
    Parse(String),

    #[display("{_0}")]
    Other(String),
}

impl std::error::Error for Error {}
