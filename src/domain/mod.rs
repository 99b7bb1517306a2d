mod summary;
mod transaction;
mod validate;

pub use summary::*;
pub use transaction::*;
pub use validate::*;
