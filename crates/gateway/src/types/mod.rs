//! Response envelopes.

mod response;

pub use response::{ApiResponse, Created};
