use yew::prelude::*;

use crate::config::SCROLL_TOP_THRESHOLD;
use crate::scroll::{smooth_scroll_to, use_scrolled_past};

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let visible = use_scrolled_past(SCROLL_TOP_THRESHOLD);
    let onclick = Callback::from(|_: MouseEvent| smooth_scroll_to(0.0));

    html! {
        <>
            <style>
                {r#"
                .scroll-to-top {
                    position: fixed;
                    bottom: 30px;
                    width: 50px;
                    height: 50px;
                    background: var(--primary-600);
                    color: white;
                    border: none;
                    border-radius: 50%;
                    font-size: 18px;
                    cursor: pointer;
                    opacity: 0;
                    visibility: hidden;
                    transition: all 0.3s ease;
                    z-index: 1000;
                    box-shadow: 0 4px 12px rgba(0, 108, 53, 0.3);
                }
                .scroll-to-top.show {
                    opacity: 1;
                    visibility: visible;
                }
                .scroll-to-top:hover {
                    background: var(--primary-700);
                    transform: translateY(-2px);
                }
                [dir="ltr"] .scroll-to-top { right: 30px; left: auto; }
                [dir="rtl"] .scroll-to-top { left: 30px; right: auto; }
                "#}
            </style>
            <button
                class={classes!("scroll-to-top", visible.then(|| "show"))}
                aria-label="العودة إلى الأعلى"
                onclick={onclick}
            >
                <i class="fas fa-chevron-up"></i>
            </button>
        </>
    }
}
