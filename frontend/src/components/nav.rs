use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::content::NavItem;

#[derive(Properties, PartialEq)]
pub struct FloatingNavProps {
    pub items: Vec<NavItem>,
}

#[function_component(FloatingNav)]
pub fn floating_nav(props: &FloatingNavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.clone().map(|window| {
                Closure::<dyn Fn()>::new(move || {
                    let scroll_top = window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 80.0);
                })
            });

            if let (Some(window), Some(callback)) = (window.as_ref(), scroll_callback.as_ref()) {
                let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
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
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">{"Code Compas 🤠"}</a>
                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for props.items.iter().map(|item| html! {
                        <a href={item.link.clone()} class="nav-link" onclick={close_menu.clone()}>
                            {&item.name}
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}
