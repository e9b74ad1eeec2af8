use thiserror::Error;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathkitCoreError {
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    #[error("Matrix shapes not equal: {0}")]
    ShapeMismatch(String),

    #[error("Matrix inner dimensions do not match: {0}")]
    DimensionMismatch(String),

    #[error("Invalid initialization data: {0}")]
    InvalidInitializer(String),

    #[error("Unsupported operand type: {0}")]
    TypeMismatch(String),

    #[error("Matrix is singular")]
    SingularMatrix,
}

pub type Result<T> = core::result::Result<T, MathkitCoreError>;

#[cfg(feature = "wasm")]
impl From<MathkitCoreError> for JsValue {
    fn from(err: MathkitCoreError) -> Self {
        Self::from_str(&err.to_string())
    }
}
