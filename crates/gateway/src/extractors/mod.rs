//! Request extractors.

mod filter_query;
mod validated_json;

pub use filter_query::FilterQuery;
pub use validated_json::ValidatedJson;
