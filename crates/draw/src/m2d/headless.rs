use super::surface::{RasterSurface, TextAlign, TextBaseline};
use corelib::gfx::Color;
use corelib::math::{DAffine2, DMat2, DVec2, Rect, dvec2};

const DEFAULT_FONT: &str = "10px sans-serif";

/// One piece of the current path
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    MoveTo(DVec2),
    LineTo(DVec2),
    Rect(Rect),
    Arc {
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    },
    Close,
}

/// Operation recorded by [`HeadlessSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Save,
    Restore,
    Translate(DVec2),
    Scale(DVec2),
    Rotate(f64),
    ResetTransform,
    SetTransform(DAffine2),
    BeginPath,
    Path(PathSegment),
    Fill {
        style: Color,
        segments: usize,
    },
    Stroke {
        style: Color,
        width: f64,
        segments: usize,
    },
    ClearRect(Rect),
    FillText(TextCommand),
    StrokeText(TextCommand),
    DrawImage {
        label: String,
        rect: Rect,
    },
    Resize {
        width: u32,
        height: u32,
    },
}

/// Text ink operation along with the state it was drawn with
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub text: String,
    pub position: DVec2,
    pub max_width: Option<f64>,
    pub style: Color,
    pub font: String,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Image type understood by [`HeadlessSurface`]
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessImage {
    pub label: String,
    pub size: DVec2,
}

impl HeadlessImage {
    pub fn new(label: &str, width: f64, height: f64) -> Self {
        Self {
            label: label.to_string(),
            size: dvec2(width, height),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct SurfaceState {
    transform: DAffine2,
    fill_style: Color,
    stroke_style: Color,
    line_width: f64,
    font: String,
    text_align: TextAlign,
    text_baseline: TextBaseline,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            transform: DAffine2::IDENTITY,
            fill_style: Color::BLACK,
            stroke_style: Color::BLACK,
            line_width: 1.0,
            font: DEFAULT_FONT.to_string(),
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
        }
    }
}

/// In-memory surface that keeps the full drawing state and records every call.
///
/// Nothing is rasterized, it's meant for tests, offscreen recording and as
/// a reference of how a surface is expected to behave.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    width: u32,
    height: u32,
    state: SurfaceState,
    saved: Vec<SurfaceState>,
    path: Vec<PathSegment>,
    commands: Vec<SurfaceCommand>,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(300, 150)
    }
}

impl HeadlessSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            state: SurfaceState::default(),
            saved: vec![],
            path: vec![],
            commands: vec![],
        }
    }

    /// Every call recorded so far
    #[inline]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Returns the recorded commands, leaving the log empty
    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Segments of the path being built
    #[inline]
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Depth of the [`save`](RasterSurface::save) stack
    #[inline]
    pub fn saved_states(&self) -> usize {
        self.saved.len()
    }

    /// Maps a point from the current user space to device pixels
    #[inline]
    pub fn to_device(&self, point: DVec2) -> DVec2 {
        self.state.transform.transform_point2(point)
    }

    fn push_segment(&mut self, segment: PathSegment) {
        self.commands.push(SurfaceCommand::Path(segment.clone()));
        self.path.push(segment);
    }

    fn text_command(
        &self,
        text: &str,
        x: f64,
        y: f64,
        max_width: Option<f64>,
        style: Color,
    ) -> TextCommand {
        TextCommand {
            text: text.to_string(),
            position: dvec2(x, y),
            max_width,
            style,
            font: self.state.font.clone(),
            align: self.state.text_align,
            baseline: self.state.text_baseline,
        }
    }
}

impl RasterSurface for HeadlessSurface {
    type Image = HeadlessImage;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.push(SurfaceCommand::Resize { width, height });
    }

    fn save(&mut self) {
        self.saved.push(self.state.clone());
        self.commands.push(SurfaceCommand::Save);
    }

    fn restore(&mut self) {
        // restoring without a save is ignored, like on html canvases
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
        self.commands.push(SurfaceCommand::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.state.transform = self.state.transform * DAffine2::from_translation(dvec2(x, y));
        self.commands.push(SurfaceCommand::Translate(dvec2(x, y)));
    }

    fn scale(&mut self, x: f64, y: f64) {
        // from_diagonal accepts zero factors, from_scale asserts on them
        let scale = DAffine2::from_mat2(DMat2::from_diagonal(dvec2(x, y)));
        self.state.transform = self.state.transform * scale;
        self.commands.push(SurfaceCommand::Scale(dvec2(x, y)));
    }

    fn rotate(&mut self, angle: f64) {
        self.state.transform = self.state.transform * DAffine2::from_angle(angle);
        self.commands.push(SurfaceCommand::Rotate(angle));
    }

    fn reset_transform(&mut self) {
        self.state.transform = DAffine2::IDENTITY;
        self.commands.push(SurfaceCommand::ResetTransform);
    }

    fn set_transform(&mut self, transform: DAffine2) {
        self.state.transform = transform;
        self.commands.push(SurfaceCommand::SetTransform(transform));
    }

    fn transform(&self) -> DAffine2 {
        self.state.transform
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.commands.push(SurfaceCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.push_segment(PathSegment::Close);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push_segment(PathSegment::MoveTo(dvec2(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push_segment(PathSegment::LineTo(dvec2(x, y)));
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push_segment(PathSegment::Rect(Rect::new(
            dvec2(x, y),
            dvec2(width, height),
        )));
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) {
        self.push_segment(PathSegment::Arc {
            center: dvec2(x, y),
            radius,
            start_angle,
            end_angle,
            counterclockwise,
        });
    }

    fn fill(&mut self) {
        self.commands.push(SurfaceCommand::Fill {
            style: self.state.fill_style,
            segments: self.path.len(),
        });
    }

    fn stroke(&mut self) {
        self.commands.push(SurfaceCommand::Stroke {
            style: self.state.stroke_style,
            width: self.state.line_width,
            segments: self.path.len(),
        });
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(SurfaceCommand::ClearRect(rect));
    }

    fn fill_style(&self) -> Color {
        self.state.fill_style
    }

    fn set_fill_style(&mut self, color: Color) {
        self.state.fill_style = color;
    }

    fn stroke_style(&self) -> Color {
        self.state.stroke_style
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.state.stroke_style = color;
    }

    fn line_width(&self) -> f64 {
        self.state.line_width
    }

    fn set_line_width(&mut self, width: f64) {
        // html canvases ignore zero, negative and non finite widths
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    fn font(&self) -> String {
        self.state.font.clone()
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_string();
    }

    fn text_align(&self) -> TextAlign {
        self.state.text_align
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    fn text_baseline(&self) -> TextBaseline {
        self.state.text_baseline
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: Option<f64>) {
        let cmd = self.text_command(text, x, y, max_width, self.state.fill_style);
        self.commands.push(SurfaceCommand::FillText(cmd));
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64, max_width: Option<f64>) {
        let cmd = self.text_command(text, x, y, max_width, self.state.stroke_style);
        self.commands.push(SurfaceCommand::StrokeText(cmd));
    }

    fn draw_image(&mut self, image: &Self::Image, x: f64, y: f64, size: Option<DVec2>) {
        let size = size.unwrap_or(image.size);
        self.commands.push(SurfaceCommand::DrawImage {
            label: image.label.clone(),
            rect: Rect::new(dvec2(x, y), size),
        });
    }
}
