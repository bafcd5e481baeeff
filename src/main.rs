use yew::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod scroll;
mod pages {
    pub mod home;
}
mod components {
    pub mod contact;
}

use pages::home::Home;

/// Logo assets served from /assets; the mark is also used as the favicon.
pub const LOGO_FULL: &str = "/assets/hemz-logo-full.svg";
pub const LOGO_MARK: &str = "/assets/hemz-logo-mark.svg";

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_toggle: Callback<MouseEvent>,
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let window_clone = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                is_scrolled.set(scroll_top > 40.0);
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let navigate = {
        let on_navigate = props.on_navigate.clone();
        move |key: &'static str| {
            let on_navigate = on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(key))
        }
    };

    let menu_class = if props.menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <button class="nav-logo" onclick={navigate("hero")} aria-label="Go to top">
                    <img src={LOGO_FULL} alt="Hemz InfoTech" />
                </button>

                <button
                    class="burger-menu"
                    onclick={props.on_toggle.clone()}
                    aria-expanded={props.menu_open.to_string()}
                    aria-label="Toggle menu"
                >
                    {"Menu"}
                </button>

                <nav class={menu_class}>
                    <button class="nav-link" onclick={navigate("services")}>{"Services"}</button>
                    <button class="nav-link" onclick={navigate("why")}>{"Why Us"}</button>
                    <button class="nav-link" onclick={navigate("about")}>{"Vision"}</button>
                    <button class="nav-link" onclick={navigate("contact")}>{"Contact"}</button>
                    <button class="nav-cta" onclick={navigate("contact")}>
                        {"Get a Quote →"}
                    </button>
                </nav>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.85);
                        backdrop-filter: blur(8px);
                        border-bottom: 1px solid #e2e8f0;
                    }
                    .top-nav.scrolled {
                        box-shadow: 0 4px 12px rgba(15, 23, 42, 0.06);
                    }
                    .nav-content {
                        max-width: 1120px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 64px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        border: none;
                        background: none;
                        cursor: pointer;
                        display: flex;
                        align-items: center;
                    }
                    .nav-logo img {
                        height: 40px;
                        width: auto;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        border: none;
                        background: none;
                        font-size: 0.875rem;
                        cursor: pointer;
                        color: inherit;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #4f46e5;
                    }
                    .nav-cta {
                        border: none;
                        border-radius: 12px;
                        background: #4f46e5;
                        color: #fff;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        cursor: pointer;
                        box-shadow: 0 4px 12px rgba(79, 70, 229, 0.3);
                    }
                    .nav-cta:hover {
                        background: #6366f1;
                    }
                    .burger-menu {
                        display: none;
                        border: 1px solid #cbd5e1;
                        border-radius: 12px;
                        background: none;
                        padding: 0.5rem 0.75rem;
                        font-size: 0.875rem;
                        cursor: pointer;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: block;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            align-items: stretch;
                            gap: 0.75rem;
                            position: absolute;
                            top: 64px;
                            left: 0;
                            right: 0;
                            background: #fff;
                            border-bottom: 1px solid #e2e8f0;
                            padding: 1rem 1.5rem;
                        }
                        .nav-right.mobile-menu-open .nav-link {
                            text-align: left;
                            padding: 0.5rem 0;
                        }
                    }
                "#}
            </style>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    let menu_open = use_state(|| false);

    // Point the favicon at the mark SVG; created on first mount, idempotent
    // after that.
    {
        use_effect_with_deps(
            move |_| {
                let document = window().unwrap().document().unwrap();
                let link = match document.query_selector("link#site-favicon").ok().flatten() {
                    Some(existing) => existing,
                    None => {
                        let created = document.create_element("link").unwrap();
                        created.set_id("site-favicon");
                        let _ = created.set_attribute("rel", "icon");
                        if let Some(head) = document.head() {
                            let _ = head.append_child(&created);
                        }
                        created
                    }
                };
                let _ = link.set_attribute("href", LOGO_MARK);
                let _ = link.set_attribute("type", "image/svg+xml");
                || ()
            },
            (),
        );
    }

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Every navigation control goes through this: close the mobile menu,
    // then scroll. Unknown section keys fall out as a no-op inside
    // scroll::navigate_to.
    let on_navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |key: &'static str| {
            menu_open.set(false);
            scroll::navigate_to(key);
        })
    };

    html! {
        <>
            <Nav menu_open={*menu_open} on_toggle={on_toggle} on_navigate={on_navigate.clone()} />
            <Home on_navigate={on_navigate} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
