pub mod response_decoder;

pub use response_decoder::{decode, decode_query_types, decode_summary};
