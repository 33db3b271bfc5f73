#[cfg(all(feature = "logs", not(target_arch = "wasm32")))]
pub use crate::{LogConfig, init_logs};

#[cfg(feature = "random")]
pub use crate::random::{Rng, random};

pub use corelib::animation::{Animation, AnimationControl};
pub use corelib::frame::{FrameScheduler, IntervalScheduler};
pub use corelib::gfx::Color;
pub use corelib::math::{
    IntoVector, TAU, Vector, constrain, to_cartesian, to_deg, to_polar, to_rad,
};
pub use draw::{
    Canvas, HeadlessImage, HeadlessSurface, RasterSurface, TextAlign, TextBaseline, TextOptions,
};
