use corelib::gfx::Color;
use corelib::math::{DAffine2, DVec2, Rect};

/// Horizontal alignment used when drawing text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
}

/// Vertical anchor used when drawing text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    #[default]
    Alphabetic,
    Ideographic,
    Bottom,
}

/// Immediate mode 2D raster surface.
///
/// This is the set of primitives [`Canvas`](crate::Canvas) drives. Transform
/// calls post-multiply the current matrix, so `translate` followed by
/// `rotate` rotates around the translated origin.
pub trait RasterSurface {
    /// Whatever the surface can blit
    type Image;

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_size(&mut self, width: u32, height: u32);

    /// Pushes the whole surface state (transform, styles, text settings)
    fn save(&mut self);
    /// Pops the state saved by the last [`save`](Self::save)
    fn restore(&mut self);

    fn translate(&mut self, x: f64, y: f64);
    fn scale(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    /// Sets the current matrix back to identity
    fn reset_transform(&mut self);
    /// Replaces the current matrix
    fn set_transform(&mut self, transform: DAffine2);
    fn transform(&self) -> DAffine2;

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    );
    /// Fills the current path with the current fill style
    fn fill(&mut self);
    /// Strokes the current path with the current stroke style and line width
    fn stroke(&mut self);
    fn clear_rect(&mut self, rect: Rect);

    fn fill_style(&self) -> Color;
    fn set_fill_style(&mut self, color: Color);
    fn stroke_style(&self) -> Color;
    fn set_stroke_style(&mut self, color: Color);
    fn line_width(&self) -> f64;
    fn set_line_width(&mut self, width: f64);

    fn font(&self) -> String;
    fn set_font(&mut self, font: &str);
    fn text_align(&self) -> TextAlign;
    fn set_text_align(&mut self, align: TextAlign);
    fn text_baseline(&self) -> TextBaseline;
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: Option<f64>);
    fn stroke_text(&mut self, text: &str, x: f64, y: f64, max_width: Option<f64>);

    /// Draws `image` at `x, y`, stretched to `size` or at its natural size when `None`
    fn draw_image(&mut self, image: &Self::Image, x: f64, y: f64, size: Option<DVec2>);
}
