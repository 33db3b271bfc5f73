use crate::option_usize_env;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use web_time::Instant;

/// Frames per second used by [`IntervalScheduler::new`]
pub const DEFAULT_FPS: usize = option_usize_env!("SK_DEFAULT_FPS", 60);

/// Callback invoked once with the frame timestamp in milliseconds
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Identifies a frame request so it can be cancelled before it fires
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl FrameHandle {
    #[inline]
    pub const fn id(&self) -> u64 {
        self.0
    }
}

/// Host primitive that calls back once per display refresh.
///
/// Implementations are cheap handles with interior mutability, a callback
/// fired by the scheduler is allowed to request the next frame on it.
pub trait FrameScheduler {
    /// Schedules `callback` for the next frame
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle;

    /// Best-effort cancellation of a request that has not fired yet
    fn cancel_frame(&self, handle: FrameHandle);
}

impl<S: FrameScheduler> FrameScheduler for Rc<S> {
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle {
        (**self).request_frame(callback)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        (**self).cancel_frame(handle)
    }
}

struct Inner {
    period: Duration,
    started: Instant,
    next_id: Cell<u64>,
    queue: RefCell<Vec<(FrameHandle, FrameCallback)>>,
}

/// Fixed interval scheduler.
///
/// Requests are queued and fired together on the next [`tick`](Self::tick).
/// Requests made while a tick is running wait for the following tick.
#[derive(Clone)]
pub struct IntervalScheduler {
    inner: Rc<Inner>,
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::with_fps(DEFAULT_FPS as f64)
    }

    pub fn with_fps(fps: f64) -> Self {
        let fps = if fps.is_finite() && fps > 0.0 {
            fps
        } else {
            log::warn!("Invalid fps '{fps}', using {DEFAULT_FPS}");
            DEFAULT_FPS as f64
        };

        let period = Duration::from_secs_f64(1.0 / fps);
        log::debug!("IntervalScheduler period set to {period:?}");

        Self {
            inner: Rc::new(Inner {
                period,
                started: Instant::now(),
                next_id: Cell::new(0),
                queue: RefCell::new(vec![]),
            }),
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.inner.period
    }

    /// Number of requests waiting for the next tick
    #[inline]
    pub fn pending(&self) -> usize {
        self.inner.queue.borrow().len()
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending() > 0
    }

    /// Milliseconds elapsed since the scheduler was created
    #[inline]
    pub fn now(&self) -> f64 {
        self.inner.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Fires every request queued before this call, returns how many fired
    pub fn tick(&self) -> usize {
        let timestamp = self.now();
        self.tick_at(timestamp)
    }

    /// Same as [`tick`](Self::tick) with an explicit timestamp
    pub fn tick_at(&self, timestamp: f64) -> usize {
        // the queue is swapped out so callbacks can request frames again
        let callbacks = std::mem::take(&mut *self.inner.queue.borrow_mut());
        let fired = callbacks.len();
        callbacks.into_iter().for_each(|(_, cb)| cb(timestamp));
        fired
    }

    /// Ticks once per period until nothing is left to fire
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run(&self) {
        let mut interval = spin_sleep_util::interval(self.inner.period);
        while self.has_pending() {
            interval.tick();
            self.tick();
        }
    }

    /// Ticks once per period at most `frames` times, returns the ticks done
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run_frames(&self, frames: usize) -> usize {
        let mut interval = spin_sleep_util::interval(self.inner.period);
        let mut count = 0;
        while count < frames && self.has_pending() {
            interval.tick();
            self.tick();
            count += 1;
        }
        count
    }
}

impl FrameScheduler for IntervalScheduler {
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let handle = FrameHandle(id);
        self.inner.queue.borrow_mut().push((handle, callback));
        handle
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.inner.queue.borrow_mut().retain(|(h, _)| *h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_default_period() {
        let scheduler = IntervalScheduler::new();
        let expected = 1.0 / DEFAULT_FPS as f64;
        assert!((scheduler.period().as_secs_f64() - expected).abs() < EPS);
    }

    #[test]
    fn test_invalid_fps_falls_back() {
        let scheduler = IntervalScheduler::with_fps(0.0);
        let expected = 1.0 / DEFAULT_FPS as f64;
        assert!((scheduler.period().as_secs_f64() - expected).abs() < EPS);
    }

    #[test]
    fn test_request_fires_once() {
        let scheduler = IntervalScheduler::with_fps(30.0);
        let count = Rc::new(Cell::new(0));

        let c = count.clone();
        scheduler.request_frame(Box::new(move |_| c.set(c.get() + 1)));
        assert_eq!(scheduler.pending(), 1);

        assert_eq!(scheduler.tick(), 1);
        assert_eq!(scheduler.tick(), 0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_timestamp_is_passed() {
        let scheduler = IntervalScheduler::new();
        let seen = Rc::new(Cell::new(0.0));

        let s = seen.clone();
        scheduler.request_frame(Box::new(move |ts| s.set(ts)));
        scheduler.tick_at(16.5);
        assert_eq!(seen.get(), 16.5);
    }

    #[test]
    fn test_cancel_pending_request() {
        let scheduler = IntervalScheduler::new();
        let fired = Rc::new(Cell::new(false));

        let f = fired.clone();
        let handle = scheduler.request_frame(Box::new(move |_| f.set(true)));
        scheduler.cancel_frame(handle);

        assert!(!scheduler.has_pending());
        scheduler.tick();
        assert!(!fired.get());
    }

    #[test]
    fn test_request_inside_callback_waits_next_tick() {
        let scheduler = IntervalScheduler::new();
        let count = Rc::new(Cell::new(0));

        let s = scheduler.clone();
        let c = count.clone();
        scheduler.request_frame(Box::new(move |_| {
            c.set(c.get() + 1);
            let c = c.clone();
            s.request_frame(Box::new(move |_| c.set(c.get() + 1)));
        }));

        assert_eq!(scheduler.tick(), 1);
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.pending(), 1);

        assert_eq!(scheduler.tick(), 1);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_run_frames_stops_when_idle() {
        let scheduler = IntervalScheduler::with_fps(1000.0);
        scheduler.request_frame(Box::new(|_| {}));
        assert_eq!(scheduler.run_frames(5), 1);
        assert!(!scheduler.has_pending());
    }
}
