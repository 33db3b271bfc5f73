pub mod animation;
pub mod app;
pub mod frame;
pub mod gfx;
pub mod math;
#[doc(hidden)]
pub mod utils;
