use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::effects::events::{EventKind, EventSource, PageEvent, Subscription};
use crate::effects::frame::{FrameLoop, FrameScheduler};
use crate::effects::pointer::{Damping, Point, PointerState};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFrame {
    pub position: Point,
    pub hover: bool,
}

/// Trailing cursor: pointer events feed a target, the frame loop eases toward it.
///
/// Everything is registered in [`CursorAnimator::mount`] and released when the
/// animator is dropped.
pub struct CursorAnimator {
    _frames: FrameLoop,
    _subscriptions: Vec<Subscription>,
}

impl CursorAnimator {
    pub fn mount(
        events: Rc<dyn EventSource>,
        scheduler: Rc<dyn FrameScheduler>,
        damping: Damping,
        on_frame: impl Fn(CursorFrame) + 'static,
    ) -> Result<Self> {
        let pointer = Rc::new(RefCell::new(PointerState::default()));
        let hover = Rc::new(Cell::new(false));

        let subscriptions = vec![
            Subscription::new(&events, EventKind::PointerMove, {
                let pointer = pointer.clone();
                Rc::new(move |event: PageEvent| {
                    if let PageEvent::PointerMove { position, .. } = event {
                        pointer.borrow_mut().aim(position);
                    }
                })
            })?,
            Subscription::new(&events, EventKind::PointerOver, {
                let hover = hover.clone();
                Rc::new(move |event: PageEvent| {
                    if let PageEvent::PointerOver { interactive: true } = event {
                        hover.set(true);
                    }
                })
            })?,
            Subscription::new(&events, EventKind::PointerOut, {
                let hover = hover.clone();
                Rc::new(move |event: PageEvent| {
                    if let PageEvent::PointerOut { interactive: true } = event {
                        hover.set(false);
                    }
                })
            })?,
        ];

        let frames = FrameLoop::start(scheduler, move |_| {
            let position = pointer.borrow_mut().step(damping);
            on_frame(CursorFrame {
                position,
                hover: hover.get(),
            });
        })?;

        Ok(Self {
            _frames: frames,
            _subscriptions: subscriptions,
        })
    }
}
