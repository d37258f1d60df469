use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::{Result, SiteError};

pub type FrameCallback = Box<dyn FnOnce(f64)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Something that can run a callback on the next animation frame.
pub trait FrameScheduler {
    fn request(&self, callback: FrameCallback) -> Result<FrameHandle>;
    fn cancel(&self, handle: FrameHandle);
}

#[derive(Clone, Default, Debug)]
pub struct CancellationToken(Rc<Cell<bool>>);

impl CancellationToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

struct LoopState {
    scheduler: Rc<dyn FrameScheduler>,
    token: CancellationToken,
    pending: Cell<Option<FrameHandle>>,
    tick: RefCell<Box<dyn FnMut(f64)>>,
}

/// A tick that reschedules itself every frame until its token is cancelled.
///
/// Dropping the loop cancels it, which also withdraws the pending frame request.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start(
        scheduler: Rc<dyn FrameScheduler>,
        tick: impl FnMut(f64) + 'static,
    ) -> Result<Self> {
        let state = Rc::new(LoopState {
            scheduler,
            token: CancellationToken::default(),
            pending: Cell::new(None),
            tick: RefCell::new(Box::new(tick)),
        });
        schedule(&state)?;
        Ok(Self { state })
    }

    #[cfg(test)]
    pub fn token(&self) -> CancellationToken {
        self.state.token.clone()
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        !self.state.token.is_cancelled()
    }

    pub fn cancel(&self) {
        self.state.token.cancel();
        if let Some(handle) = self.state.pending.take() {
            self.state.scheduler.cancel(handle);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule(state: &Rc<LoopState>) -> Result<()> {
    let weak: Weak<LoopState> = Rc::downgrade(state);
    let handle = state.scheduler.request(Box::new(move |timestamp: f64| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        state.pending.set(None);
        if state.token.is_cancelled() {
            return;
        }
        {
            let mut tick = state.tick.borrow_mut();
            (*tick)(timestamp);
        }
        if state.token.is_cancelled() {
            return;
        }
        if let Err(e) = schedule(&state) {
            error!("Animation loop stopped: {}", e);
            state.token.cancel();
        }
    }))?;
    state.pending.set(Some(handle));
    Ok(())
}

/// `requestAnimationFrame` on the browser window.
///
/// Closures stay alive until the frame after they fired, or until cancelled.
pub struct BrowserFrames {
    window: Window,
    live: RefCell<Vec<(FrameHandle, Closure<dyn FnMut(f64)>)>>,
    fired: Rc<RefCell<Vec<FrameHandle>>>,
}

impl BrowserFrames {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        Ok(Self {
            window,
            live: RefCell::new(Vec::new()),
            fired: Rc::new(RefCell::new(Vec::new())),
        })
    }

    fn collect_fired(&self) {
        let fired: Vec<FrameHandle> = self.fired.borrow_mut().drain(..).collect();
        if !fired.is_empty() {
            self.live
                .borrow_mut()
                .retain(|(handle, _)| !fired.contains(handle));
        }
    }
}

impl FrameScheduler for BrowserFrames {
    fn request(&self, callback: FrameCallback) -> Result<FrameHandle> {
        self.collect_fired();

        let id = Rc::new(Cell::new(None::<FrameHandle>));
        let fired = self.fired.clone();
        let own_id = id.clone();
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            if let Some(callback) = callback.take() {
                callback(timestamp);
            }
            // Marked last so a request made from inside the callback can't free us mid-call.
            if let Some(handle) = own_id.get() {
                fired.borrow_mut().push(handle);
            }
        }) as Box<dyn FnMut(f64)>);

        let handle = FrameHandle(
            self.window
                .request_animation_frame(closure.as_ref().unchecked_ref())?,
        );
        id.set(Some(handle));
        self.live.borrow_mut().push((handle, closure));
        Ok(handle)
    }

    fn cancel(&self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            error!("cancelAnimationFrame failed: {:?}", e);
        }
        self.live.borrow_mut().retain(|(live, _)| *live != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::testing::ManualFrames;

    fn counting_loop(frames: &Rc<ManualFrames>) -> (FrameLoop, Rc<Cell<u32>>) {
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let scheduler: Rc<dyn FrameScheduler> = frames.clone();
        let frame_loop = FrameLoop::start(scheduler, move |_| counter.set(counter.get() + 1)).unwrap();
        (frame_loop, ticks)
    }

    #[test]
    fn loop_keeps_one_request_outstanding() {
        let frames = Rc::new(ManualFrames::default());
        let (frame_loop, ticks) = counting_loop(&frames);

        assert_eq!(frames.pending(), 1);
        frames.advance(5);

        assert_eq!(ticks.get(), 5);
        assert_eq!(frames.pending(), 1);
        assert!(frame_loop.is_running());
    }

    #[test]
    fn cancel_withdraws_pending_frame_and_stops_ticks() {
        let frames = Rc::new(ManualFrames::default());
        let (frame_loop, ticks) = counting_loop(&frames);
        frames.advance(2);

        frame_loop.cancel();

        assert_eq!(frames.pending(), 0);
        assert_eq!(frames.cancelled(), 1);
        frames.advance(3);
        assert_eq!(ticks.get(), 2);
        assert!(!frame_loop.is_running());
    }

    #[test]
    fn dropping_the_loop_cancels_it() {
        let frames = Rc::new(ManualFrames::default());
        let (frame_loop, ticks) = counting_loop(&frames);

        drop(frame_loop);

        assert_eq!(frames.pending(), 0);
        frames.advance(1);
        assert_eq!(ticks.get(), 0);
    }

    #[test]
    fn token_cancelled_from_inside_a_tick_stops_rescheduling() {
        let frames = Rc::new(ManualFrames::default());
        let token_slot: Rc<RefCell<Option<CancellationToken>>> = Rc::default();
        let slot = token_slot.clone();
        let scheduler: Rc<dyn FrameScheduler> = frames.clone();
        let frame_loop = FrameLoop::start(scheduler, move |_| {
            if let Some(token) = slot.borrow().as_ref() {
                token.cancel();
            }
        })
        .unwrap();
        *token_slot.borrow_mut() = Some(frame_loop.token());

        frames.advance(1);

        assert_eq!(frames.pending(), 0);
        assert!(!frame_loop.is_running());
    }
}
