use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEAL_CLASS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// One-shot visibility flag: flips on the first intersection and stays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    /// Feeds one observer report. Returns true only when this report is the
    /// one that reveals the element.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            true
        } else {
            false
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Live observer plus the JS callback it calls. Disconnects on drop.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(target: &Element, on_reveal: Callback<()>) -> Result<RevealObserver, JsValue> {
    let mut state = RevealState::default();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if state.observe(entry.is_intersecting()) {
                    observer.unobserve(&entry.target());
                    on_reveal.emit(());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(target);

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a block that gains `animate-in` the first time it
/// scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node.cast::<Element>().and_then(|el| {
                    let on_reveal = Callback::from(move |_| revealed.set(true));
                    observe_once(&el, on_reveal)
                        .map_err(|e| warn!("IntersectionObserver unavailable: {:?}", e))
                        .ok()
                });
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!(props.class.clone(), (*revealed).then(|| REVEAL_CLASS))}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_intersection_reveals() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(!state.is_revealed());
        assert!(state.observe(true));
        assert!(state.is_revealed());
    }

    #[test]
    fn leaving_the_viewport_does_not_unreveal() {
        let mut state = RevealState::default();
        state.observe(true);
        assert!(!state.observe(false));
        assert!(state.is_revealed());
    }

    #[test]
    fn repeated_intersections_report_once() {
        let mut state = RevealState::default();
        let reveals = [true, true, false, true]
            .into_iter()
            .filter(|seen| state.observe(*seen))
            .count();
        assert_eq!(reveals, 1);
    }
}
