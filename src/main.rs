use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod state {
    pub mod attribution;
    pub mod countdown;
    pub mod lead_form;
    pub mod navigation;
    pub mod scroll;
}
mod components {
    pub mod offer_banner;
    pub mod registration;
}
mod pages {
    pub mod landing;
}

use components::offer_banner::OfferBanner;
use pages::landing::Landing;
use state::navigation::{self, Section, NAV_SECTIONS};
use state::scroll;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_compact = use_state(|| false);

    {
        let is_compact = is_compact.clone();
        use_effect_with_deps(
            move |_| {
                // If there is no window (or registration fails) the header
                // simply stays expanded.
                let listener = web_sys::window().map(|window| {
                    let window_reader = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let offset = window_reader.scroll_y().unwrap_or(0.0);
                        is_compact.set(scroll::is_compact(offset));
                    }) as Box<dyn FnMut()>);

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
            (),
        );
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
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    // Navigating always closes the menu, whether it came from the sheet or
    // the desktop links.
    let navigate_to = |section: Section| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigation::scroll_to(section);
            menu_open.set(false);
        })
    };

    let section_links = |class: &'static str| -> Html {
        NAV_SECTIONS
            .iter()
            .map(|&section| {
                html! {
                    <a
                        href={format!("#{}", section.id())}
                        class={class}
                        onclick={navigate_to(section)}
                    >
                        { section.label() }
                    </a>
                }
            })
            .collect()
    };

    html! {
        <header class={classes!("top-nav", (*is_compact).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 40;
                        background: #ffffff;
                        border-bottom: 1px solid #d8e4e8;
                        transition: box-shadow 0.2s, background 0.2s;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        box-shadow: 0 2px 8px rgba(15, 118, 110, 0.12);
                    }
                    .nav-content {
                        max-width: 1080px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 4rem;
                        padding: 0 1.5rem;
                    }
                    .nav-logo {
                        font-size: 1.25rem;
                        font-weight: 800;
                        color: #0f766e;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 1.5rem;
                        align-items: center;
                    }
                    .nav-link {
                        color: #1a2b33;
                        text-decoration: none;
                        font-size: 0.95rem;
                        font-weight: 500;
                    }
                    .nav-link:hover { color: #14b8a6; }
                    .nav-cta {
                        background: #14b8a6;
                        color: #ffffff;
                        border: none;
                        border-radius: 8px;
                        padding: 0.5rem 1.1rem;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #1a2b33;
                    }
                    .mobile-menu {
                        position: fixed;
                        top: 0;
                        right: -80vw;
                        width: 80vw;
                        max-width: 350px;
                        height: 100vh;
                        background: #ffffff;
                        box-shadow: -4px 0 16px rgba(0, 0, 0, 0.15);
                        transition: right 0.25s ease-out;
                        display: flex;
                        flex-direction: column;
                        padding: 1.5rem;
                        gap: 0.5rem;
                        z-index: 50;
                    }
                    .mobile-menu.open { right: 0; }
                    .mobile-menu .nav-link {
                        padding: 0.9rem 0;
                        border-bottom: 1px solid #e7eef1;
                    }
                    .mobile-menu-close {
                        align-self: flex-end;
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        cursor: pointer;
                        padding: 0.25rem 0.5rem;
                    }
                    @media (max-width: 768px) {
                        .nav-links { display: none; }
                        .burger-menu { display: flex; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="/" class="nav-logo">{"CareerMatch"}</a>

                <nav class="nav-links">
                    { section_links("nav-link") }
                    <button class="nav-cta" onclick={navigate_to(Section::Register)}>
                        { Section::Register.label() }
                    </button>
                </nav>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Open menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                <button class="mobile-menu-close" onclick={close_menu} aria-label="Close menu">
                    {"×"}
                </button>
                { section_links("nav-link") }
                <button class="nav-cta" onclick={navigate_to(Section::Register)}>
                    { Section::Register.label() }
                </button>
            </div>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <OfferBanner />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
