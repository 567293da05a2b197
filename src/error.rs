use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
  #[error("invalid argument: {0}")]
  InvalidArgument(String),
  #[error("arithmetic overflow")]
  ArithmeticOverflow,
  #[error("can't parse rational: {0}")]
  Parse(String),
}
