mod query;

pub use query::{encode_query, QueryParams};
