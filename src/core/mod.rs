pub mod carrier;
pub mod check_digit;
pub mod classify;
pub mod normalize;
pub mod parser;
pub mod prefix;

pub use crate::domain::model::{Carrier, Gtin, GtinKind, GtinReport};
pub use crate::utils::error::Result;
