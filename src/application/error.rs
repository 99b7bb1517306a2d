use thiserror::Error;

use crate::domain::ValidationError;
use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    /// Bad field input. Recoverable: the caller asks for the value again.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Malformed data file or I/O failure. A malformed record is fatal to
    /// load; a failed save leaves the in-memory ledger intact.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Out-of-range position selection. Recoverable: the caller asks again.
    #[error("no transaction at position {index} (the ledger holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
