use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_dom::helpers::{window_event_listener, WindowListenerHandle};

pub(crate) const INITIAL_TOP_PANE_HEIGHT: f64 = 300.0;
pub(crate) const MIN_PANE_HEIGHT: f64 = 100.0;

/// Top-pane height for a pointer at `pointer_y`, clamped to the minimum on
/// both sides of the divider.
pub(crate) fn clamp_pane_height(pointer_y: f64, container_top: f64, container_height: f64) -> f64 {
    let max = (container_height - MIN_PANE_HEIGHT).max(MIN_PANE_HEIGHT);
    (pointer_y - container_top).clamp(MIN_PANE_HEIGHT, max)
}

#[derive(Clone, Copy)]
pub(crate) struct Resizer {
    pub top_pane_height: RwSignal<f64>,
    pub is_resizing: RwSignal<bool>,
}

impl Resizer {
    pub fn start_resizing(&self) {
        self.is_resizing.set(true);
    }
}

/// Drag state for the vertical split of the editor page.
///
/// While dragging, pointer-move/pointer-up listeners live on the window so
/// the divider keeps tracking even when the pointer leaves the container;
/// release removes them again. The body cursor and text selection are
/// suppressed for the duration of the drag.
pub(crate) fn use_resizer(container_ref: NodeRef<html::Div>) -> Resizer {
    let top_pane_height = RwSignal::new(INITIAL_TOP_PANE_HEIGHT);
    let is_resizing = RwSignal::new(false);

    let handles: StoredValue<Option<(WindowListenerHandle, WindowListenerHandle)>> =
        StoredValue::new(None);

    let detach = move || {
        if let Some((mv, up)) = handles.try_update_value(|h| h.take()).flatten() {
            mv.remove();
            up.remove();
        }
        set_body_drag_styles(false);
    };

    // Listener lifecycle follows the drag flag. Detach runs outside the
    // pointerup dispatch so the handler never removes itself mid-call.
    Effect::new(move |_| {
        if is_resizing.get() {
            set_body_drag_styles(true);

            let mv = window_event_listener(ev::pointermove, move |ev: web_sys::PointerEvent| {
                if !is_resizing.get_untracked() {
                    return;
                }
                let Some(container) = container_ref.get_untracked() else {
                    return;
                };
                let rect = container.get_bounding_client_rect();
                top_pane_height.set(clamp_pane_height(
                    ev.client_y() as f64,
                    rect.top(),
                    rect.height(),
                ));
            });
            let up = window_event_listener(ev::pointerup, move |_ev: web_sys::PointerEvent| {
                is_resizing.set(false);
            });

            handles.set_value(Some((mv, up)));
        } else {
            detach();
        }
    });

    on_cleanup(detach);

    Resizer {
        top_pane_height,
        is_resizing,
    }
}

fn set_body_drag_styles(active: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    if active {
        let _ = style.set_property("cursor", "row-resize");
        let _ = style.set_property("user-select", "none");
    } else {
        let _ = style.remove_property("cursor");
        let _ = style.remove_property("user-select");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_tracks_pointer_inside_range() {
        // Container top at 50px, 600px tall: pointer at 350 -> 300px pane.
        assert_eq!(clamp_pane_height(350.0, 50.0, 600.0), 300.0);
    }

    #[test]
    fn test_clamp_enforces_minimum() {
        assert_eq!(clamp_pane_height(60.0, 50.0, 600.0), MIN_PANE_HEIGHT);
        assert_eq!(clamp_pane_height(-500.0, 50.0, 600.0), MIN_PANE_HEIGHT);
    }

    #[test]
    fn test_clamp_enforces_container_relative_maximum() {
        assert_eq!(clamp_pane_height(1000.0, 50.0, 600.0), 500.0);
    }

    #[test]
    fn test_clamp_degenerate_container() {
        // Too small to honor both minimums: pin to the fixed minimum.
        assert_eq!(clamp_pane_height(80.0, 0.0, 150.0), MIN_PANE_HEIGHT);
    }
}
