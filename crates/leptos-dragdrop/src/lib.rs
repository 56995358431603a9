//! Leptos DragDrop Utilities
//!
//! Free-placement drag for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.

use std::fmt::Debug;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: f64 = 5.0;

/// How long a click is ignored after a drag ends
const CLICK_SUPPRESS_MS: i32 = 100;

/// A 2D point, in client or canvas coordinates depending on context
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Mousedown recorded but threshold not crossed yet
#[derive(Clone, Debug, PartialEq)]
pub struct PendingDrag<K> {
    pub id: K,
    /// Pointer at mousedown (client coordinates)
    pub start: Point,
    /// Element position at mousedown (canvas coordinates)
    pub origin: Point,
}

/// Drag state signals
pub struct DragSignals<K: 'static> {
    pub pending_read: ReadSignal<Option<PendingDrag<K>>>,
    pub pending_write: WriteSignal<Option<PendingDrag<K>>>,
    pub dragging_id_read: ReadSignal<Option<K>>,
    pub dragging_id_write: WriteSignal<Option<K>>,
    /// Live canvas position of the dragged element
    pub live_position_read: ReadSignal<Option<Point>>,
    pub live_position_write: WriteSignal<Option<Point>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
}

impl<K: 'static> Clone for DragSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static> Copy for DragSignals<K> {}

impl<K> DragSignals<K>
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    /// Live position for `id` if it is the element being dragged
    pub fn live_position_of(&self, id: &K) -> Option<Point> {
        let dragging = self.dragging_id_read.get();
        match dragging {
            Some(ref d) if d == id => self.live_position_read.get(),
            _ => None,
        }
    }

    /// True while a drag just finished and the trailing click should be ignored
    pub fn suppress_click(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }
}

pub fn create_drag_signals<K>() -> DragSignals<K>
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    let (pending_read, pending_write) = signal(None::<PendingDrag<K>>);
    let (dragging_id_read, dragging_id_write) = signal(None::<K>);
    let (live_position_read, live_position_write) = signal(None::<Point>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    DragSignals {
        pending_read,
        pending_write,
        dragging_id_read,
        dragging_id_write,
        live_position_read,
        live_position_write,
        drag_just_ended_read,
        drag_just_ended_write,
    }
}

/// Whether the pointer moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: Point, current: Point) -> bool {
    (current.x - start.x).abs() > DRAG_THRESHOLD_PX || (current.y - start.y).abs() > DRAG_THRESHOLD_PX
}

/// Element position after the pointer moved from `start` to `current`
pub fn drag_position(origin: Point, start: Point, current: Point) -> Point {
    Point::new(origin.x + current.x - start.x, origin.y + current.y - start.y)
}

/// Convert a viewport position into container-local canvas coordinates
pub fn screen_to_canvas(screen: Point, container: Point, scroll: Point) -> Point {
    Point::new(screen.x - container.x + scroll.x, screen.y - container.y + scroll.y)
}

/// Container scroll offset while panning the background
pub fn pan_scroll(start_scroll: Point, start: Point, current: Point) -> Point {
    Point::new(start_scroll.x - (current.x - start.x), start_scroll.y - (current.y - start.y))
}

/// Canvas position of `el` inside the scrollable `container`
pub fn element_canvas_position(el: &web_sys::Element, container: &web_sys::Element) -> Point {
    let rect = el.get_bounding_client_rect();
    let container_rect = container.get_bounding_client_rect();
    screen_to_canvas(
        Point::new(rect.left(), rect.top()),
        Point::new(container_rect.left(), container_rect.top()),
        Point::new(container.scroll_left() as f64, container.scroll_top() as f64),
    )
}

/// Inputs, buttons and editable text keep their own mouse behaviour
pub fn is_interactive_target(target: &web_sys::EventTarget) -> bool {
    if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
    {
        return true;
    }
    target
        .dyn_ref::<web_sys::HtmlElement>()
        .map(|el| el.is_content_editable())
        .unwrap_or(false)
}

fn client_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// End drag operation
pub fn end_drag<K>(drag: &DragSignals<K>)
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    drag.dragging_id_write.set(None);
    drag.live_position_write.set(None);
    drag.pending_write.set(None);
    drag.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = drag.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), CLICK_SUPPRESS_MS);
        cb.forget();
    }
}

/// Create mousedown handler for a draggable element
///
/// `origin` returns the element's current canvas position, or `None` when
/// the element must not be dragged right now.
pub fn make_on_mousedown<K, F>(drag: DragSignals<K>, id: K, origin: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
    F: Fn() -> Option<Point> + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if is_interactive_target(&target) {
                return;
            }
        }
        let Some(origin) = origin() else { return };
        drag.pending_write.set(Some(PendingDrag {
            id: id.clone(),
            start: client_point(&ev),
            origin,
        }));
    }
}

/// Bind document mousemove - starts drag past the threshold, then tracks the pointer
pub fn bind_global_mousemove<K, M>(drag: DragSignals<K>, on_move: M)
where
    K: Clone + PartialEq + Debug + Send + Sync + 'static,
    M: Fn(&K, Point) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = drag.pending_read.get_untracked() else { return };
        let current = client_point(&ev);

        if drag.dragging_id_read.get_untracked().is_none() {
            if !exceeds_threshold(pending.start, current) {
                return;
            }
            log::debug!("[DRAG] start {:?}", pending.id);
            drag.dragging_id_write.set(Some(pending.id.clone()));
        }

        ev.prevent_default();
        let position = drag_position(pending.origin, pending.start, current);
        drag.live_position_write.set(Some(position));
        on_move(&pending.id, position);
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind document mouseup handler for drop detection
///
/// `on_drop` receives the dragged id and its last live position. Also binds
/// the global mousemove handler.
pub fn bind_global_mouseup<K, M, D>(drag: DragSignals<K>, on_move: M, on_drop: D)
where
    K: Clone + PartialEq + Debug + Send + Sync + 'static,
    M: Fn(&K, Point) + 'static,
    D: Fn(K, Point) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = drag.dragging_id_read.get_untracked();
        let position = drag.live_position_read.get_untracked();

        match (dragging_id, position) {
            (Some(dragged), Some(position)) => {
                log::debug!("[DRAG] drop {:?} at ({}, {})", dragged, position.x, position.y);
                end_drag(&drag);
                on_drop(dragged, position);
            }
            _ => {
                // Plain click: only clear pending state, the click event fires on its own
                drag.pending_write.set(None);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(drag, on_move);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        let start = Point::new(100.0, 100.0);
        assert!(!exceeds_threshold(start, Point::new(104.0, 96.0)));
        assert!(!exceeds_threshold(start, Point::new(105.0, 105.0)));
        assert!(exceeds_threshold(start, Point::new(106.0, 100.0)));
        assert!(exceeds_threshold(start, Point::new(100.0, 90.0)));
    }

    #[test]
    fn test_drag_position_follows_pointer_delta() {
        let origin = Point::new(400.0, 40.0);
        let pos = drag_position(origin, Point::new(10.0, 10.0), Point::new(-240.0, 190.0));
        assert_eq!(pos, Point::new(150.0, 220.0));
    }

    #[test]
    fn test_screen_to_canvas_adds_scroll() {
        let pos = screen_to_canvas(Point::new(300.0, 250.0), Point::new(50.0, 80.0), Point::new(0.0, 120.0));
        assert_eq!(pos, Point::new(250.0, 290.0));
    }

    #[test]
    fn test_pan_scroll_moves_against_pointer() {
        let scroll = pan_scroll(Point::new(200.0, 200.0), Point::new(500.0, 500.0), Point::new(450.0, 560.0));
        assert_eq!(scroll, Point::new(250.0, 140.0));
    }
}
