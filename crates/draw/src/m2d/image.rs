use super::canvas::Canvas;
use super::surface::RasterSurface;
use corelib::math::dvec2;

impl<S: RasterSurface> Canvas<S> {
    /// Draws `img` with its top-left corner at `x, y`.
    ///
    /// The image is stretched to `size` only when both sides are non-zero,
    /// otherwise it keeps its natural size.
    pub fn image(
        &mut self,
        img: &S::Image,
        x: f64,
        y: f64,
        size: impl Into<Option<(f64, f64)>>,
    ) -> &mut Self {
        let size = size
            .into()
            .filter(|(w, h)| *w != 0.0 && *h != 0.0)
            .map(|(w, h)| dvec2(w, h));
        self.surface_mut().draw_image(img, x, y, size);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::{Canvas, HeadlessImage, HeadlessSurface, SurfaceCommand};
    use corelib::math::{Rect, dvec2};

    fn drawn_rect(canvas: &Canvas<HeadlessSurface>) -> Option<Rect> {
        match canvas.surface().commands().last() {
            Some(SurfaceCommand::DrawImage { rect, .. }) => Some(*rect),
            _ => None,
        }
    }

    #[test]
    fn test_image_sizes() {
        let img = HeadlessImage::new("logo", 64.0, 32.0);
        let mut canvas = Canvas::new(HeadlessSurface::default());

        canvas.image(&img, 5.0, 6.0, None);
        assert_eq!(
            drawn_rect(&canvas),
            Some(Rect::new(dvec2(5.0, 6.0), dvec2(64.0, 32.0)))
        );

        canvas.image(&img, 0.0, 0.0, (128.0, 16.0));
        assert_eq!(
            drawn_rect(&canvas),
            Some(Rect::new(dvec2(0.0, 0.0), dvec2(128.0, 16.0)))
        );

        // a zero side means natural size
        canvas.image(&img, 0.0, 0.0, (128.0, 0.0));
        assert_eq!(
            drawn_rect(&canvas),
            Some(Rect::new(dvec2(0.0, 0.0), dvec2(64.0, 32.0)))
        );
    }
}
