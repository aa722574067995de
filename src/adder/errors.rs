use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddError {
    #[error("Overflow: {a} + {b} is not representable as an i64")]
    Overflow { a: i64, b: i64 },
}
