mod canvas;
mod headless;
mod image;
mod matrix_stack;
mod paths;
mod surface;
mod text;

pub use canvas::*;
pub use headless::*;
pub use matrix_stack::*;
pub use surface::*;
pub use text::*;
