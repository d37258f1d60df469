//! In-memory stand-ins for the browser window and frame clock.

use std::cell::{Cell, RefCell};

use crate::effects::events::{EventKind, EventSource, Handler, ListenerId, PageEvent};
use crate::effects::frame::{FrameCallback, FrameHandle, FrameScheduler};
use crate::error::Result;

#[derive(Default)]
pub struct FakeEvents {
    next_id: Cell<u32>,
    listeners: RefCell<Vec<(ListenerId, EventKind, Handler)>>,
}

impl FakeEvents {
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn emit(&self, event: PageEvent) {
        let handlers: Vec<Handler> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, kind, _)| *kind == event.kind())
            .map(|(_, _, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(event);
        }
    }
}

impl EventSource for FakeEvents {
    fn listen(&self, kind: EventKind, handler: Handler) -> Result<ListenerId> {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, kind, handler));
        Ok(id)
    }

    fn unlisten(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(listener, _, _)| *listener != id);
    }
}

#[derive(Default)]
pub struct ManualFrames {
    next_id: Cell<i32>,
    queue: RefCell<Vec<(FrameHandle, FrameCallback)>>,
    cancelled: Cell<usize>,
    fired: Cell<usize>,
    clock: Cell<f64>,
}

impl ManualFrames {
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn cancelled(&self) -> usize {
        self.cancelled.get()
    }

    pub fn fired(&self) -> usize {
        self.fired.get()
    }

    /// Runs `frames` frames; each one fires whatever was queued before it began.
    pub fn advance(&self, frames: usize) {
        for _ in 0..frames {
            let due: Vec<(FrameHandle, FrameCallback)> = self.queue.borrow_mut().drain(..).collect();
            self.clock.set(self.clock.get() + 16.0);
            for (_, callback) in due {
                self.fired.set(self.fired.get() + 1);
                callback(self.clock.get());
            }
        }
    }
}

impl FrameScheduler for ManualFrames {
    fn request(&self, callback: FrameCallback) -> Result<FrameHandle> {
        let handle = FrameHandle(self.next_id.get());
        self.next_id.set(handle.0 + 1);
        self.queue.borrow_mut().push((handle, callback));
        Ok(handle)
    }

    fn cancel(&self, handle: FrameHandle) {
        let mut queue = self.queue.borrow_mut();
        let before = queue.len();
        queue.retain(|(queued, _)| *queued != handle);
        if queue.len() != before {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }
}
