use super::canvas::Canvas;
use super::surface::{RasterSurface, TextAlign, TextBaseline};
use corelib::gfx::Color;

/// Settings for a single [`Canvas::text`] call, anything left as `None`
/// uses the surface's current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextOptions {
    pub font: Option<String>,
    pub align: Option<TextAlign>,
    pub baseline: Option<TextBaseline>,
    pub max_width: Option<f64>,
}

impl TextOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// CSS font shorthand, like `"bold 24px serif"`
    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub fn max_width(mut self, width: f64) -> Self {
        self.max_width = Some(width);
        self
    }
}

struct TextState {
    font: String,
    align: TextAlign,
    baseline: TextBaseline,
}

impl TextState {
    fn read<S: RasterSurface>(surface: &S) -> Self {
        Self {
            font: surface.font(),
            align: surface.text_align(),
            baseline: surface.text_baseline(),
        }
    }

    fn apply<S: RasterSurface>(&self, surface: &mut S) {
        surface.set_font(&self.font);
        surface.set_text_align(self.align);
        surface.set_text_baseline(self.baseline);
    }
}

/// Text waiting to be filled or stroked.
///
/// The options are only applied while inking, then the font, alignment
/// and baseline go back to what they were. Dropping the handle unused
/// leaves the surface untouched.
pub struct TextDrawing<'a, S: RasterSurface> {
    canvas: &'a mut Canvas<S>,
    text: String,
    x: f64,
    y: f64,
    options: TextOptions,
}

impl<'a, S: RasterSurface> TextDrawing<'a, S> {
    /// Fills the text, `color` defaults to the current fill style
    pub fn fill(self, color: impl Into<Option<Color>>) -> &'a mut Canvas<S> {
        let color = color.into();
        self.ink(|surface, text, x, y, max_width| {
            let previous = surface.fill_style();
            surface.set_fill_style(color.unwrap_or(previous));
            surface.fill_text(text, x, y, max_width);
            surface.set_fill_style(previous);
        })
    }

    /// Strokes the text, `color` defaults to the current stroke style
    pub fn stroke(self, color: impl Into<Option<Color>>) -> &'a mut Canvas<S> {
        let color = color.into();
        self.ink(|surface, text, x, y, max_width| {
            let previous = surface.stroke_style();
            surface.set_stroke_style(color.unwrap_or(previous));
            surface.stroke_text(text, x, y, max_width);
            surface.set_stroke_style(previous);
        })
    }

    fn ink<F>(self, draw: F) -> &'a mut Canvas<S>
    where
        F: FnOnce(&mut S, &str, f64, f64, Option<f64>),
    {
        let Self {
            canvas,
            text,
            x,
            y,
            options,
        } = self;

        let TextOptions {
            font,
            align,
            baseline,
            max_width,
        } = options;

        let surface = canvas.surface_mut();
        let previous = TextState::read(surface);
        if let Some(font) = font {
            surface.set_font(&font);
        }
        surface.set_text_align(align.unwrap_or(previous.align));
        surface.set_text_baseline(baseline.unwrap_or(previous.baseline));

        draw(surface, &text, x, y, max_width);

        previous.apply(surface);
        canvas
    }
}

impl<S: RasterSurface> Canvas<S> {
    pub fn set_font(&mut self, font: &str) -> &mut Self {
        self.surface_mut().set_font(font);
        self
    }

    pub fn set_text_align(&mut self, align: TextAlign) -> &mut Self {
        self.surface_mut().set_text_align(align);
        self
    }

    pub fn set_text_baseline(&mut self, baseline: TextBaseline) -> &mut Self {
        self.surface_mut().set_text_baseline(baseline);
        self
    }

    /// Configures `text` at `x, y`, call `fill` or `stroke` on the result to draw it
    pub fn text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        options: TextOptions,
    ) -> TextDrawing<'_, S> {
        TextDrawing {
            canvas: self,
            text: text.to_string(),
            x,
            y,
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HeadlessSurface, SurfaceCommand, TextCommand};
    use corelib::math::dvec2;

    fn canvas() -> Canvas<HeadlessSurface> {
        Canvas::new(HeadlessSurface::default())
    }

    fn last_text(canvas: &Canvas<HeadlessSurface>) -> TextCommand {
        match canvas.surface().commands().last() {
            Some(SurfaceCommand::FillText(cmd)) | Some(SurfaceCommand::StrokeText(cmd)) => {
                cmd.clone()
            }
            other => panic!("Expected a text command, found {other:?}"),
        }
    }

    #[test]
    fn test_text_options_builder() {
        let options = TextOptions::new()
            .font("12px mono")
            .align(TextAlign::Center)
            .baseline(TextBaseline::Top)
            .max_width(80.0);

        assert_eq!(options.font.as_deref(), Some("12px mono"));
        assert_eq!(options.align, Some(TextAlign::Center));
        assert_eq!(options.baseline, Some(TextBaseline::Top));
        assert_eq!(options.max_width, Some(80.0));
    }

    #[test]
    fn test_text_fill_uses_options_then_restores() {
        let mut canvas = canvas();
        canvas.set_font("16px serif").set_fill(Color::BLUE);

        canvas
            .text(
                "hello",
                10.0,
                20.0,
                TextOptions::new()
                    .font("32px mono")
                    .align(TextAlign::Right)
                    .max_width(100.0),
            )
            .fill(Color::RED);

        let cmd = last_text(&canvas);
        assert!(matches!(
            canvas.surface().commands().last(),
            Some(SurfaceCommand::FillText(_))
        ));
        assert_eq!(cmd.text, "hello");
        assert_eq!(cmd.position, dvec2(10.0, 20.0));
        assert_eq!(cmd.max_width, Some(100.0));
        assert_eq!(cmd.style, Color::RED);
        assert_eq!(cmd.font, "32px mono");
        assert_eq!(cmd.align, TextAlign::Right);
        assert_eq!(cmd.baseline, TextBaseline::Alphabetic);

        let surface = canvas.surface();
        assert_eq!(surface.font(), "16px serif");
        assert_eq!(surface.text_align(), TextAlign::Start);
        assert_eq!(surface.fill_style(), Color::BLUE);
    }

    #[test]
    fn test_text_fill_defaults_to_fill_style() {
        let mut canvas = canvas();
        canvas.set_fill(Color::GREEN).set_stroke(Color::RED);
        canvas
            .text("a", 0.0, 0.0, TextOptions::default())
            .fill(None);

        assert_eq!(last_text(&canvas).style, Color::GREEN);
    }

    #[test]
    fn test_text_stroke_restores_style() {
        let mut canvas = canvas();
        canvas.set_stroke(Color::WHITE);
        canvas
            .text("b", 1.0, 2.0, TextOptions::new().baseline(TextBaseline::Middle))
            .stroke(Color::YELLOW)
            .set_fill(Color::RED);

        let cmd = last_text(&canvas);
        assert!(matches!(
            canvas.surface().commands().last(),
            Some(SurfaceCommand::StrokeText(_))
        ));
        assert_eq!(cmd.style, Color::YELLOW);
        assert_eq!(cmd.baseline, TextBaseline::Middle);
        assert_eq!(canvas.surface().stroke_style(), Color::WHITE);
        assert_eq!(canvas.surface().text_baseline(), TextBaseline::Alphabetic);
    }

    #[test]
    fn test_dropped_text_leaves_state() {
        let mut canvas = canvas();
        {
            let _text = canvas.text(
                "unused",
                0.0,
                0.0,
                TextOptions::new().font("8px mono").align(TextAlign::End),
            );
        }

        assert_eq!(canvas.surface().font(), "10px sans-serif");
        assert_eq!(canvas.surface().text_align(), TextAlign::Start);
        assert!(canvas.surface().commands().is_empty());
    }

    #[test]
    fn test_each_text_starts_from_the_canvas_state() {
        let mut canvas = canvas();
        canvas.set_text_align(TextAlign::Left);
        canvas
            .text("one", 0.0, 0.0, TextOptions::new().align(TextAlign::Right))
            .fill(None)
            .text("two", 0.0, 10.0, TextOptions::new().font("9px mono"))
            .stroke(None);

        let commands = canvas.surface().commands();
        let aligns: Vec<_> = commands
            .iter()
            .filter_map(|cmd| match cmd {
                SurfaceCommand::FillText(cmd) | SurfaceCommand::StrokeText(cmd) => {
                    Some((cmd.align, cmd.font.clone()))
                }
                _ => None,
            })
            .collect();

        assert_eq!(
            aligns,
            vec![
                (TextAlign::Right, "10px sans-serif".to_string()),
                (TextAlign::Left, "9px mono".to_string()),
            ]
        );
        assert_eq!(canvas.surface().text_align(), TextAlign::Left);
        assert_eq!(canvas.surface().font(), "10px sans-serif");
    }

    #[test]
    fn test_text_setters() {
        let mut canvas = canvas();
        canvas
            .set_font("20px serif")
            .set_text_align(TextAlign::Center)
            .set_text_baseline(TextBaseline::Bottom);

        let surface = canvas.surface();
        assert_eq!(surface.font(), "20px serif");
        assert_eq!(surface.text_align(), TextAlign::Center);
        assert_eq!(surface.text_baseline(), TextBaseline::Bottom);
    }
}
