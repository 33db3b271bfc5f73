#[cfg(feature = "random")]
pub mod random;

pub mod prelude;

#[doc(inline)]
pub use corelib::*;

#[doc(inline)]
pub use draw;

#[cfg(all(feature = "logs", not(target_arch = "wasm32")))]
pub use corelib::app::{LogConfig, init_logs};
