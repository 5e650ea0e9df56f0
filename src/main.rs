use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod counters;
mod components {
    pub mod contact;
    pub mod reveal;
    pub mod stats;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 50);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
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
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-menu mobile-menu-open"
    } else {
        "nav-menu"
    };

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">{"Heimdahl"}</a>

                <button class="hamburger" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#features" class="nav-link" onclick={close_menu.clone()}>
                        {"Features"}
                    </a>
                    <a href="#gallery" class="nav-link" onclick={close_menu.clone()}>
                        {"Gallery"}
                    </a>
                    <a href="#apps" class="nav-link" onclick={close_menu.clone()}>
                        {"Apps"}
                    </a>
                    <a href="#contact" class="nav-link" onclick={close_menu}>
                        {"Contact"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <style>
                {r#"
                    .navbar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        background: rgba(255, 255, 255, 0.95);
                        box-shadow: none;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .navbar.scrolled {
                        background: rgba(255, 255, 255, 0.98);
                        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                    }
                    .nav-menu {
                        display: flex;
                        gap: 2rem;
                    }
                    @media (max-width: 768px) {
                        .nav-menu {
                            display: none;
                        }
                        .nav-menu.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            background: rgba(255, 255, 255, 0.98);
                            padding: 1rem 2rem;
                        }
                        .hamburger {
                            display: block;
                        }
                    }
                    .hamburger {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .hamburger span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        background: #0d1117;
                        margin: 5px 0;
                    }
                "#}
            </style>
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
