mod error;

pub mod client;
pub mod config;
pub mod module;
pub mod network;
pub mod product;
pub mod proto;
pub mod util;

pub use error::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;
