use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    window, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};
use yew::prelude::*;

use crate::config::{HEADER_HEIGHT, HEADER_SCROLL_GAP};

/// Where to scroll so an anchor target lands just below the fixed header.
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - HEADER_HEIGHT
}

/// Scroll target for an expanded FAQ question whose top edge sits at
/// `question_top` in the viewport. `None` when the header does not cover it.
pub fn covered_by_header(scroll_y: f64, question_top: f64) -> Option<f64> {
    if question_top < HEADER_HEIGHT {
        Some(scroll_y + question_top - HEADER_HEIGHT - HEADER_SCROLL_GAP)
    } else {
        None
    }
}

/// Strictly past the threshold; sitting exactly on it does not count.
pub fn scrolled_past(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_into_view_nearest(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Nearest);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth-scrolls to the element with the given id, keeping it clear of the
/// fixed header. Returns false when there is no such element.
pub fn scroll_to_anchor(id: &str) -> bool {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    match target {
        Some(el) => {
            smooth_scroll_to(anchor_scroll_top(el.offset_top() as f64));
            true
        }
        None => {
            debug!("No anchor target #{}", id);
            false
        }
    }
}

/// Tracks whether the window is scrolled past `threshold`. Only re-renders
/// when the answer changes.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let past = use_state_eq(|| scrolled_past(scroll_y(), threshold));

    {
        let past = past.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let listener = window().map(|window| {
                    let scroll_callback = Closure::<dyn Fn()>::new(move || {
                        past.set(scrolled_past(scroll_y(), threshold));
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            threshold,
        );
    }

    *past
}
