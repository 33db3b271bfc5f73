use sketchkit::prelude::*;

// Draws a small flower using nested push/pop blocks and prints where each petal landed
fn main() -> Result<(), String> {
    #[cfg(feature = "logs")]
    init_logs(LogConfig::trace().level_for("sketchkit", log::LevelFilter::Info))?;

    let petals = 8;
    let mut canvas = Canvas::new(HeadlessSurface::new(400, 400));
    canvas.translate(200.0, 200.0).set_stroke_width(2.0);

    for i in 0..petals {
        canvas
            .push_matrix()
            .rotate(TAU * i as f64 / petals as f64)
            .translate(60.0, 0.0)
            .scale(1.5, 0.5)
            .circle(0.0, 0.0, 20.0)
            .fill(Color::PINK)
            .stroke(Color::MAGENTA, None);

        let tip = canvas.local_to_screen(sketchkit::math::dvec2(20.0, 0.0));
        println!("petal {i}: tip at ({:.1}, {:.1})", tip.x, tip.y);

        canvas.pop_matrix();
    }

    canvas
        .circle(0.0, 0.0, 25.0)
        .fill(Color::YELLOW)
        .text(
            "flower",
            0.0,
            60.0,
            TextOptions::new()
                .font("16px sans-serif")
                .align(TextAlign::Center)
                .baseline(TextBaseline::Top),
        )
        .fill(Color::BLACK);

    canvas
        .line(&[-100.0, 120.0, 0.0, 140.0, 100.0, 120.0])?
        .stroke(Color::GREEN, 3.0);

    // nothing left to pop, this is ignored
    canvas.pop_matrix();

    println!(
        "depth {}, translation {}, {} commands",
        canvas.matrix_depth(),
        canvas.translation(),
        canvas.surface().commands().len()
    );
    Ok(())
}
