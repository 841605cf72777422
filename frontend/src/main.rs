use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::use_click_away;
use log::info;
use web_sys::MouseEvent;

mod config;
mod scroll;
mod components {
    pub mod lang_toggle;
    pub mod reveal;
    pub mod scroll_to_top;
}
mod contact {
    pub mod controller;
    pub mod counter;
    pub mod form;
    pub mod form_state;
    pub mod submission;
    pub mod validation;
}
mod faq {
    pub mod accordion;
    pub mod content;
    pub mod search;
}
mod pages {
    pub mod contact;
    pub mod faq;
    pub mod home;
}

use components::{lang_toggle::LangToggle, scroll_to_top::ScrollToTop};
use config::NAV_SCROLLED_THRESHOLD;
use pages::{contact::Contact, faq::Faq, home::Home};
use scroll::use_scrolled_past;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/faq")]
    Faq,
    #[at("/faq/search")]
    FaqSearch,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::FaqSearch => {
            info!("Rendering FAQ page with search");
            html! { <Faq searchable={true} /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <section class="page-hero not-found">
                    <h1>{"الصفحة غير موجودة"}</h1>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">
                        {"العودة إلى الرئيسية"}
                    </Link<Route>>
                </section>
            }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_scrolled_past(NAV_SCROLLED_THRESHOLD);
    let nav_ref = use_node_ref();

    // Clicks anywhere outside the navbar close the menu.
    {
        let menu_open = menu_open.clone();
        use_click_away(nav_ref.clone(), move |_: Event| {
            menu_open.set(false);
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = [
        (Route::Home, "الرئيسية"),
        (Route::Faq, "الأسئلة الشائعة"),
        (Route::Contact, "تواصل معنا"),
    ];

    html! {
        <nav id="navbar" ref={nav_ref} class={classes!("navbar", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-container">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <i class="fas fa-graduation-cap"></i>
                    {"التدريب الميداني"}
                </Link<Route>>

                <ul id="nav-menu" class={classes!("nav-menu", menu_open.then(|| "active"))}>
                    { for links.into_iter().map(|(route, label)| html! {
                        <li onclick={close_menu.clone()}>
                            <Link<Route> to={route} classes="nav-link">{label}</Link<Route>>
                        </li>
                    }) }
                </ul>

                <LangToggle />

                <button
                    id="hamburger"
                    class={classes!("hamburger", menu_open.then(|| "active"))}
                    aria-label="القائمة"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <ScrollToTop />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
