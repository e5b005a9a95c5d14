//! `captiond-media` — parse requests, subtitle segments, and the parser
//! access contract.

pub mod error;
pub mod parser;
pub mod request;
pub mod segment;

pub use error::MediaError;
pub use parser::MediaParser;
pub use request::ParseRequest;
pub use segment::{SubtitleSegment, ordered_by_start};
