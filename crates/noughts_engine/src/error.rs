//! Engine error types.

use derive_more::{Display, Error};

/// Errors raised while constructing engine values.
///
/// Move rejection is not an error; see [`crate::Rejection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Requested board dimension is unsupported.
    #[display("Board size {} is unsupported (expected 3..=9)", _0)]
    InvalidBoardSize(#[error(not(source))] usize),
}
