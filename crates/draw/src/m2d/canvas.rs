use super::matrix_stack::{MatrixStack, TransformSnapshot};
use super::surface::RasterSurface;
use corelib::gfx::Color;
use corelib::math::{DVec2, Rect, Vector, dvec2};

/// Fluent immediate mode facade over a [`RasterSurface`].
///
/// Besides driving the surface it keeps its own bookkeeping of the
/// accumulated translation, scale and rotation, which is what
/// [`push_matrix`](Self::push_matrix) and [`pop_matrix`](Self::pop_matrix)
/// save and restore.
#[derive(Debug, Clone)]
pub struct Canvas<S: RasterSurface> {
    surface: S,
    pub(crate) connect_paths: bool,
    translation: Vector,
    scaled: Vector,
    rotation: f64,
    matrix_stack: MatrixStack,
}

impl<S: RasterSurface> Canvas<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            connect_paths: false,
            translation: Vector::ZERO,
            scaled: Vector::ONE,
            rotation: 0.0,
            matrix_stack: MatrixStack::default(),
        }
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[inline]
    pub fn into_surface(self) -> S {
        self.surface
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        dvec2(self.width() as f64, self.height() as f64)
    }

    pub fn resize_canvas(&mut self, width: u32, height: u32) -> &mut Self {
        self.surface.set_size(width, height);
        self
    }

    /// When enabled shape calls append to the open path instead of starting a new one
    pub fn set_connect_paths(&mut self, connect: bool) -> &mut Self {
        self.connect_paths = connect;
        self
    }

    #[inline]
    pub fn connect_paths(&self) -> bool {
        self.connect_paths
    }

    /// Clears the visible area, taking the accumulated translation into account
    pub fn clear(&mut self) -> &mut Self {
        let origin = dvec2(-self.translation.x, -self.translation.y);
        self.surface.clear_rect(Rect::new(origin, self.size()));
        self.new_path()
    }

    pub fn save(&mut self) -> &mut Self {
        self.surface.save();
        self
    }

    pub fn restore(&mut self) -> &mut Self {
        self.surface.restore();
        self
    }

    // - Transform

    #[inline]
    pub fn translation(&self) -> Vector {
        self.translation
    }

    #[inline]
    pub fn scaled(&self) -> Vector {
        self.scaled
    }

    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn translate(&mut self, x: f64, y: f64) -> &mut Self {
        self.surface.translate(x, y);
        self.translation.add(&Vector::new(x, y));
        self
    }

    /// Scales the surface, `y` falls back to `x` when missing, zero or NaN.
    ///
    /// The factors are summed into [`scaled`](Self::scaled) instead of
    /// multiplied.
    pub fn scale(&mut self, x: f64, y: impl Into<Option<f64>>) -> &mut Self {
        let y = y.into().filter(|y| *y != 0.0 && !y.is_nan()).unwrap_or(x);
        self.surface.scale(x, y);
        self.scaled.add(&Vector::new(x, y));
        self
    }

    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.surface.rotate(angle);
        self.rotation += angle;
        self
    }

    /// Current bookkeeping and surface matrix as a snapshot
    pub fn snapshot(&self) -> TransformSnapshot {
        TransformSnapshot {
            translation: self.translation,
            scale: self.scaled,
            rotation: self.rotation,
            matrix: self.surface.transform(),
        }
    }

    /// Number of saved snapshots, the initial identity included
    #[inline]
    pub fn matrix_depth(&self) -> usize {
        self.matrix_stack.depth()
    }

    /// Saves the accumulated transform, the surface is not touched
    pub fn push_matrix(&mut self) -> &mut Self {
        let snapshot = self.snapshot();
        self.matrix_stack.push(snapshot);
        self
    }

    /// Restores the last pushed transform on both the surface and the bookkeeping.
    ///
    /// Does nothing when only the initial snapshot is left.
    pub fn pop_matrix(&mut self) -> &mut Self {
        let Some(snapshot) = self.matrix_stack.pop() else {
            log::trace!("pop_matrix ignored: nothing was pushed");
            return self;
        };

        let TransformSnapshot {
            translation,
            scale,
            rotation,
            matrix,
        } = snapshot;

        // fields come back as pushed, the surface gets the saved matrix
        self.surface.set_transform(matrix);
        self.translation = translation;
        self.scaled = scale;
        self.rotation = rotation;
        self
    }

    /// Sets the surface matrix to identity.
    ///
    /// The scale bookkeeping is left at `(0, 0)`, a follow up `scale` call
    /// sets it to exactly the factors given.
    pub fn reset_matrix(&mut self) -> &mut Self {
        self.surface.reset_transform();
        self.translation = Vector::ZERO;
        self.scaled = Vector::ZERO;
        self.rotation = 0.0;
        self
    }

    /// Maps a point from the current user space to surface pixels
    pub fn local_to_screen(&self, point: DVec2) -> DVec2 {
        self.surface.transform().transform_point2(point)
    }

    /// Maps a surface pixel to the current user space, `None` when the
    /// current matrix collapses the plane (like after a zero scale)
    pub fn screen_to_local(&self, point: DVec2) -> Option<DVec2> {
        let matrix = self.surface.transform();
        let det = matrix.matrix2.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        Some(matrix.inverse().transform_point2(point))
    }

    // - Style

    pub fn set_fill(&mut self, color: Color) -> &mut Self {
        self.surface.set_fill_style(color);
        self
    }

    pub fn set_stroke(&mut self, color: Color) -> &mut Self {
        self.surface.set_stroke_style(color);
        self
    }

    pub fn set_stroke_width(&mut self, width: f64) -> &mut Self {
        self.surface.set_line_width(width);
        self
    }

    /// Strokes the current path, `color` and `width` only last for this call
    pub fn stroke(
        &mut self,
        color: impl Into<Option<Color>>,
        width: impl Into<Option<f64>>,
    ) -> &mut Self {
        let previous_stroke = self.surface.stroke_style();
        let previous_width = self.surface.line_width();

        self.surface.set_line_width(width.into().unwrap_or(previous_width));
        self.surface.set_stroke_style(color.into().unwrap_or(previous_stroke));
        self.surface.stroke();

        self.surface.set_line_width(previous_width);
        self.surface.set_stroke_style(previous_stroke);
        self
    }

    /// Fills the current path, `color` only lasts for this call
    pub fn fill(&mut self, color: impl Into<Option<Color>>) -> &mut Self {
        let previous = self.surface.fill_style();

        self.surface.set_fill_style(color.into().unwrap_or(previous));
        self.surface.fill();

        self.surface.set_fill_style(previous);
        self
    }
}
