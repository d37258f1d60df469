use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, Window};

use crate::effects::pointer::{Point, Viewport};
use crate::error::{Result, SiteError};

/// Elements that make the cursor ring swell when hovered.
pub const INTERACTIVE_SELECTOR: &str = ".cursor-hover, a, button, input, select, textarea";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PointerMove,
    PointerOver,
    PointerOut,
    Scroll,
}

impl EventKind {
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::PointerMove => "mousemove",
            EventKind::PointerOver => "mouseover",
            EventKind::PointerOut => "mouseout",
            EventKind::Scroll => "scroll",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    PointerMove { position: Point, viewport: Viewport },
    PointerOver { interactive: bool },
    PointerOut { interactive: bool },
    Scroll { offset: f64 },
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::PointerMove { .. } => EventKind::PointerMove,
            PageEvent::PointerOver { .. } => EventKind::PointerOver,
            PageEvent::PointerOut { .. } => EventKind::PointerOut,
            PageEvent::Scroll { .. } => EventKind::Scroll,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u32);

pub type Handler = Rc<dyn Fn(PageEvent)>;

/// Page-level event registration.
pub trait EventSource {
    fn listen(&self, kind: EventKind, handler: Handler) -> Result<ListenerId>;
    fn unlisten(&self, id: ListenerId);
}

/// Keeps one listener registered for as long as it lives.
pub struct Subscription {
    source: Rc<dyn EventSource>,
    id: ListenerId,
}

impl Subscription {
    pub fn new(source: &Rc<dyn EventSource>, kind: EventKind, handler: Handler) -> Result<Self> {
        let id = source.listen(kind, handler)?;
        Ok(Self {
            source: source.clone(),
            id,
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.source.unlisten(self.id);
    }
}

struct Registered {
    id: ListenerId,
    kind: EventKind,
    closure: Closure<dyn FnMut(Event)>,
}

/// Listeners attached to the browser `window`.
pub struct WindowEvents {
    window: Window,
    next_id: Cell<u32>,
    registered: RefCell<Vec<Registered>>,
}

impl WindowEvents {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        Ok(Self {
            window,
            next_id: Cell::new(0),
            registered: RefCell::new(Vec::new()),
        })
    }

    fn translate(window: &Window, kind: EventKind, event: &Event) -> Option<PageEvent> {
        match kind {
            EventKind::PointerMove => {
                let mouse = event.dyn_ref::<MouseEvent>()?;
                Some(PageEvent::PointerMove {
                    position: Point::new(mouse.client_x() as f64, mouse.client_y() as f64),
                    viewport: Viewport {
                        width: window.inner_width().ok()?.as_f64()?,
                        height: window.inner_height().ok()?.as_f64()?,
                    },
                })
            }
            EventKind::PointerOver => Some(PageEvent::PointerOver {
                interactive: targets_interactive(event),
            }),
            EventKind::PointerOut => Some(PageEvent::PointerOut {
                interactive: targets_interactive(event),
            }),
            EventKind::Scroll => Some(PageEvent::Scroll {
                offset: window.scroll_y().unwrap_or(0.0),
            }),
        }
    }
}

fn targets_interactive(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

impl EventSource for WindowEvents {
    fn listen(&self, kind: EventKind, handler: Handler) -> Result<ListenerId> {
        let window = self.window.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            if let Some(page_event) = WindowEvents::translate(&window, kind, &event) {
                handler(page_event);
            }
        }) as Box<dyn FnMut(Event)>);

        self.window
            .add_event_listener_with_callback(kind.dom_name(), closure.as_ref().unchecked_ref())?;

        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.registered.borrow_mut().push(Registered { id, kind, closure });
        Ok(id)
    }

    fn unlisten(&self, id: ListenerId) {
        let removed = {
            let mut registered = self.registered.borrow_mut();
            registered
                .iter()
                .position(|r| r.id == id)
                .map(|index| registered.remove(index))
        };
        if let Some(listener) = removed {
            if let Err(e) = self.window.remove_event_listener_with_callback(
                listener.kind.dom_name(),
                listener.closure.as_ref().unchecked_ref(),
            ) {
                error!("Failed to remove {} listener: {:?}", listener.kind.dom_name(), e);
            }
        }
    }
}
