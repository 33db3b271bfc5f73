mod m2d;

pub use m2d::*;
