pub mod chan;
pub(crate) mod macros;
