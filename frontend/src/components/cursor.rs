use std::cell::Cell;
use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::effects::cursor::{CursorAnimator, CursorFrame};
use crate::effects::events::{EventSource, WindowEvents};
use crate::effects::frame::{BrowserFrames, FrameScheduler};
use crate::effects::pointer::{Damping, RingStyle, DOT_OFFSET, PARKED};
use crate::error::Result;

fn mount_animator(frame: UseStateHandle<CursorFrame>) -> Result<CursorAnimator> {
    let events: Rc<dyn EventSource> = Rc::new(WindowEvents::new()?);
    let scheduler: Rc<dyn FrameScheduler> = Rc::new(BrowserFrames::new()?);
    let shown = Cell::new(None);
    CursorAnimator::mount(events, scheduler, Damping::default(), move |next| {
        // A settled cursor produces identical frames; skip those re-renders.
        if shown.get() != Some(next) {
            shown.set(Some(next));
            frame.set(next);
        }
    })
}

#[function_component(CursorFx)]
pub fn cursor_fx() -> Html {
    let frame = use_state(|| CursorFrame {
        position: PARKED,
        hover: false,
    });

    {
        let frame = frame.clone();
        use_effect_with_deps(
            move |_| {
                let animator = match mount_animator(frame) {
                    Ok(animator) => Some(animator),
                    Err(e) => {
                        error!("Cursor effect disabled: {}", e);
                        None
                    }
                };
                move || drop(animator)
            },
            (),
        );
    }

    let CursorFrame { position, hover } = *frame;
    let ring = RingStyle::for_hover(hover);
    let dot_style = format!(
        "transform: translate({}px, {}px);",
        position.x - DOT_OFFSET,
        position.y - DOT_OFFSET
    );
    let ring_style = format!(
        "transform: translate({}px, {}px); width: {size}px; height: {size}px; opacity: {};",
        position.x - ring.offset(),
        position.y - ring.offset(),
        ring.opacity,
        size = ring.size,
    );

    html! {
        <div class="cursor-fx">
            <style>
                {r#"
                    .cursor-fx {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        z-index: 9999;
                        mix-blend-mode: screen;
                    }

                    .cursor-dot {
                        position: absolute;
                        height: 12px;
                        width: 12px;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.9);
                        box-shadow: 0 0 20px 6px rgba(34, 211, 238, 0.45);
                    }

                    .cursor-ring {
                        position: absolute;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        background: rgba(255, 255, 255, 0.05);
                        transition: width 150ms, height 150ms, opacity 150ms, border-color 150ms;
                    }

                    .cursor-ring.hover {
                        border-color: rgb(103, 232, 249);
                        background: rgba(103, 232, 249, 0.1);
                    }
                "#}
            </style>
            <div class="cursor-dot" style={dot_style} />
            <div class={classes!("cursor-ring", hover.then(|| "hover"))} style={ring_style} />
        </div>
    }
}
