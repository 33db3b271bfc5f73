use crate::frame::{FrameHandle, FrameScheduler};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type AnimationCallback = Box<dyn FnMut(f64)>;

struct State<S: FrameScheduler> {
    scheduler: S,
    running: Cell<bool>,
    pending: Cell<Option<FrameHandle>>,
    callback: RefCell<Option<AnimationCallback>>,
    // bumped on every set/clear of the callback
    version: Cell<u64>,
}

/// Start/stop wrapper around a [`FrameScheduler`] calling one per-frame callback.
///
/// Stopping never cancels the frame already scheduled: it still fires once,
/// sees the loop is stopped and ends it without calling the callback.
pub struct Animation<S: FrameScheduler + 'static> {
    state: Rc<State<S>>,
}

impl<S: FrameScheduler + 'static> Animation<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            state: Rc::new(State {
                scheduler,
                running: Cell::new(false),
                pending: Cell::new(None),
                callback: RefCell::new(None),
                version: Cell::new(0),
            }),
        }
    }

    pub fn with_callback<F>(scheduler: S, callback: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        let animation = Self::new(scheduler);
        animation.set_callback(callback);
        animation
    }

    /// Sets the function called on each frame with the frame timestamp
    pub fn set_callback<F>(&self, callback: F)
    where
        F: FnMut(f64) + 'static,
    {
        self.state.callback.replace(Some(Box::new(callback)));
        self.state.version.set(self.state.version.get() + 1);
    }

    /// Removes the callback, a running loop stops on its next frame
    pub fn clear_callback(&self) {
        self.state.callback.replace(None);
        self.state.version.set(self.state.version.get() + 1);
    }

    #[inline]
    pub fn has_callback(&self) -> bool {
        self.state.callback.borrow().is_some()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state.running.get()
    }

    #[inline]
    pub fn scheduler(&self) -> &S {
        &self.state.scheduler
    }

    /// Weak control handle, meant to be moved into the frame callback
    pub fn control(&self) -> AnimationControl<S> {
        AnimationControl {
            state: Rc::downgrade(&self.state),
        }
    }

    pub fn start(&self) {
        if self.state.running.get() {
            return;
        }

        self.state.running.set(true);
        log::debug!("Animation started");

        // a grace frame from a previous stop is still queued, it picks the loop up
        if self.state.pending.get().is_some() {
            return;
        }

        schedule(&self.state);
    }

    pub fn stop(&self) {
        if self.state.running.replace(false) {
            log::debug!("Animation stopped");
        }
    }

    pub fn toggle(&self) {
        if self.is_animating() {
            self.stop();
        } else {
            self.start();
        }
    }
}

impl<S: FrameScheduler + 'static> Drop for Animation<S> {
    fn drop(&mut self) {
        self.state.running.set(false);
        if let Some(handle) = self.state.pending.take() {
            self.state.scheduler.cancel_frame(handle);
        }
    }
}

/// Lets a frame callback query or stop the loop that runs it
pub struct AnimationControl<S: FrameScheduler> {
    state: Weak<State<S>>,
}

impl<S: FrameScheduler> Clone for AnimationControl<S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<S: FrameScheduler> AnimationControl<S> {
    /// Returns false once the [`Animation`] is stopped or dropped
    pub fn is_animating(&self) -> bool {
        self.state
            .upgrade()
            .is_some_and(|state| state.running.get())
    }

    pub fn stop(&self) {
        if let Some(state) = self.state.upgrade() {
            if state.running.replace(false) {
                log::debug!("Animation stopped");
            }
        }
    }
}

fn schedule<S: FrameScheduler + 'static>(state: &Rc<State<S>>) {
    let frame_state = state.clone();
    let handle = state
        .scheduler
        .request_frame(Box::new(move |timestamp| on_frame(&frame_state, timestamp)));
    state.pending.set(Some(handle));
}

fn on_frame<S: FrameScheduler + 'static>(state: &Rc<State<S>>, timestamp: f64) {
    state.pending.set(None);

    if !state.running.get() {
        return;
    }

    // taken out while it runs so it can replace or clear itself
    let Some(mut callback) = state.callback.borrow_mut().take() else {
        log::debug!("Animation stopped: missing callback");
        state.running.set(false);
        return;
    };

    let version = state.version.get();
    callback(timestamp);

    if state.version.get() == version {
        state.callback.replace(Some(callback));
    }

    schedule(state);
}
