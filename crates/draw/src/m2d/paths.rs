use super::canvas::Canvas;
use super::surface::RasterSurface;
use corelib::math::{IntoVector, TAU};

impl<S: RasterSurface> Canvas<S> {
    pub fn new_path(&mut self) -> &mut Self {
        self.surface_mut().begin_path();
        self
    }

    pub fn close_path(&mut self) -> &mut Self {
        self.surface_mut().close_path();
        self
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.surface_mut().move_to(x, y);
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.surface_mut().line_to(x, y);
        self
    }

    fn begin_shape(&mut self) {
        if !self.connect_paths {
            self.surface_mut().begin_path();
        }
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.begin_shape();
        self.surface_mut().rect(x, y, width, height);
        self
    }

    /// Closed polyline through the three vertices
    pub fn triangle(
        &mut self,
        p1: impl IntoVector,
        p2: impl IntoVector,
        p3: impl IntoVector,
    ) -> &mut Self {
        let (p1, p2, p3) = (p1.into_vector(), p2.into_vector(), p3.into_vector());

        self.begin_shape();
        let surface = self.surface_mut();
        surface.move_to(p1.x, p1.y);
        surface.line_to(p2.x, p2.y);
        surface.line_to(p3.x, p3.y);
        surface.line_to(p1.x, p1.y);
        self
    }

    pub fn circle(&mut self, x: f64, y: f64, radius: f64) -> &mut Self {
        self.begin_shape();
        self.surface_mut().arc(x, y, radius, 0.0, TAU, false);
        self
    }

    pub fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) -> &mut Self {
        self.begin_shape();
        self.surface_mut()
            .arc(x, y, radius, start_angle, end_angle, counterclockwise);
        self
    }

    /// Polyline over a flat list of coordinates, `[x0, y0, x1, y1, ...]`.
    ///
    /// At least two points are needed and the list length must be even,
    /// otherwise nothing is drawn and an error is returned.
    pub fn line(&mut self, points: &[f64]) -> Result<&mut Self, String> {
        if points.len() % 2 != 0 {
            let err = format!(
                "Line needs pairs of coordinates but got {} values",
                points.len()
            );
            log::warn!("{err}");
            return Err(err);
        }

        if points.len() < 4 {
            let err = format!("Line needs at least 2 points but got {}", points.len() / 2);
            log::warn!("{err}");
            return Err(err);
        }

        self.begin_shape();
        let surface = self.surface_mut();
        let mut coords = points.chunks_exact(2);
        if let Some(&[x, y]) = coords.next() {
            surface.move_to(x, y);
        }
        coords.for_each(|p| surface.line_to(p[0], p[1]));
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Canvas, HeadlessSurface, PathSegment, SurfaceCommand};
    use corelib::math::{TAU, dvec2};

    fn canvas() -> Canvas<HeadlessSurface> {
        Canvas::new(HeadlessSurface::default())
    }

    fn begin_paths(canvas: &Canvas<HeadlessSurface>) -> usize {
        canvas
            .surface()
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, SurfaceCommand::BeginPath))
            .count()
    }

    #[test]
    fn test_each_shape_starts_a_path() {
        let mut canvas = canvas();
        canvas
            .rect(0.0, 0.0, 10.0, 10.0)
            .circle(5.0, 5.0, 2.0)
            .arc(1.0, 1.0, 1.0, 0.0, 1.0, true);

        assert_eq!(begin_paths(&canvas), 3);
        assert_eq!(
            canvas.surface().path(),
            &[PathSegment::Arc {
                center: dvec2(1.0, 1.0),
                radius: 1.0,
                start_angle: 0.0,
                end_angle: 1.0,
                counterclockwise: true,
            }]
        );
    }

    #[test]
    fn test_connect_paths_appends() {
        let mut canvas = canvas();
        canvas
            .set_connect_paths(true)
            .rect(0.0, 0.0, 10.0, 10.0)
            .circle(5.0, 5.0, 2.0);

        assert_eq!(begin_paths(&canvas), 0);
        assert_eq!(canvas.surface().path().len(), 2);
    }

    #[test]
    fn test_circle_is_full_arc() {
        let mut canvas = canvas();
        canvas.circle(3.0, 4.0, 5.0);

        assert_eq!(
            canvas.surface().path(),
            &[PathSegment::Arc {
                center: dvec2(3.0, 4.0),
                radius: 5.0,
                start_angle: 0.0,
                end_angle: TAU,
                counterclockwise: false,
            }]
        );
    }

    #[test]
    fn test_line_segments() {
        let mut canvas = canvas();
        canvas.line(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0]).unwrap();

        assert_eq!(
            canvas.surface().path(),
            &[
                PathSegment::MoveTo(dvec2(0.0, 0.0)),
                PathSegment::LineTo(dvec2(10.0, 0.0)),
                PathSegment::LineTo(dvec2(10.0, 10.0)),
            ]
        );
    }

    #[test]
    fn test_line_rejects_bad_input() {
        let mut canvas = canvas();
        assert!(canvas.line(&[0.0, 0.0, 1.0]).is_err());
        assert!(canvas.line(&[0.0, 0.0]).is_err());
        assert!(canvas.line(&[]).is_err());
        assert!(canvas.surface().commands().is_empty());
    }

    #[test]
    fn test_line_can_be_chained() {
        let mut canvas = canvas();
        canvas
            .line(&[0.0, 0.0, 5.0, 5.0])
            .unwrap()
            .stroke(None, None);

        assert_eq!(
            canvas.surface().commands().last(),
            Some(&SurfaceCommand::Stroke {
                style: corelib::gfx::Color::BLACK,
                width: 1.0,
                segments: 2
            })
        );
    }

    #[test]
    fn test_triangle_closes_on_first_vertex() {
        let mut canvas = canvas();
        canvas.triangle((0.0, 0.0), (4.0, 0.0), (0.0, 3.0));

        assert_eq!(begin_paths(&canvas), 1);
        assert_eq!(
            canvas.surface().path(),
            &[
                PathSegment::MoveTo(dvec2(0.0, 0.0)),
                PathSegment::LineTo(dvec2(4.0, 0.0)),
                PathSegment::LineTo(dvec2(0.0, 3.0)),
                PathSegment::LineTo(dvec2(0.0, 0.0)),
            ]
        );
    }

    #[test]
    fn test_manual_path() {
        let mut canvas = canvas();
        canvas
            .new_path()
            .move_to(1.0, 1.0)
            .line_to(2.0, 2.0)
            .close_path();

        assert_eq!(
            canvas.surface().path(),
            &[
                PathSegment::MoveTo(dvec2(1.0, 1.0)),
                PathSegment::LineTo(dvec2(2.0, 2.0)),
                PathSegment::Close,
            ]
        );
    }
}
