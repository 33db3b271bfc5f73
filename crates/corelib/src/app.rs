#[cfg(all(feature = "logs", not(target_arch = "wasm32")))]
pub mod logger;
#[cfg(all(feature = "logs", not(target_arch = "wasm32")))]
pub use logger::{LogConfig, init_logs};
