pub mod control;
pub mod media;
pub mod stream;
pub mod wake;

pub(self) mod util;
use util::impl_module;
