use sketchkit::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

const RADIUS: f64 = 12.0;
const FRAMES: usize = 180;

struct Ball {
    pos: Vector,
    vel: Vector,
}

impl Ball {
    fn update(&mut self, width: f64, height: f64) {
        self.pos.add(&self.vel);

        if self.pos.x < RADIUS || self.pos.x > width - RADIUS {
            self.vel.x *= -1.0;
        }
        if self.pos.y < RADIUS || self.pos.y > height - RADIUS {
            self.vel.y *= -1.0;
        }

        self.pos.x = constrain(self.pos.x, RADIUS, width - RADIUS);
        self.pos.y = constrain(self.pos.y, RADIUS, height - RADIUS);
    }
}

fn main() -> Result<(), String> {
    init_logs(LogConfig::debug())?;

    let mut rng = Rng::new();
    let canvas = Rc::new(RefCell::new(Canvas::new(HeadlessSurface::new(640, 360))));
    let mut ball = Ball {
        pos: Vector::new(320.0, 180.0),
        vel: to_cartesian(rng.random(6.0, 2.0)?, rng.random(TAU, None)?),
    };

    let scheduler = IntervalScheduler::with_fps(120.0);
    let animation = Animation::new(scheduler.clone());
    let control = animation.control();

    let frame_canvas = canvas.clone();
    let mut frames = 0;
    animation.set_callback(move |timestamp| {
        let mut canvas = frame_canvas.borrow_mut();
        let size = canvas.size();
        ball.update(size.x, size.y);

        canvas
            .clear()
            .circle(ball.pos.x, ball.pos.y, RADIUS)
            .fill(Color::ORANGE)
            .stroke(Color::BLACK, 2.0);

        frames += 1;
        if frames % 60 == 0 {
            log::info!("frame {frames} at {timestamp:.0}ms, ball at {}", ball.pos);
        }

        if frames >= FRAMES {
            control.stop();
        }
    });

    animation.start();
    scheduler.run();

    let commands = canvas.borrow().surface().commands().len();
    log::info!("Recorded {commands} surface commands in {FRAMES} frames");
    Ok(())
}
