use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use super::timer::TimerSlot;
use crate::config;
use crate::interaction::sticky_cta::{scroll_progress, FOCUS_DELAY_MS, RIPPLE_MS};
use crate::interaction::StickyCta;

pub enum StickyAction {
    Scrolled(f64),
    Ripple(bool),
}

impl Reducible for StickyCta {
    type Action = StickyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            StickyAction::Scrolled(progress) => {
                next.on_scroll(progress);
            }
            StickyAction::Ripple(rippling) => next.rippling = rippling,
        }
        Rc::new(next)
    }
}

#[derive(Default)]
struct StickyTimers {
    ripple: TimerSlot,
    focus: TimerSlot,
}

fn current_progress(window: &web_sys::Window) -> Option<f64> {
    let scroll_height = window.document()?.document_element()?.scroll_height() as f64;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let scroll_y = window.scroll_y().ok()?;
    Some(scroll_progress(scroll_y, scroll_height, viewport_height))
}

fn focus_contact_email() {
    let input = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector("#contact input[name='email']").ok().flatten())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    if let Some(input) = input {
        let _ = input.focus();
    }
}

/// Bottom-of-screen "get a quote" bar for phones.
#[function_component(StickyContactCta)]
pub fn sticky_contact_cta() -> Html {
    let state = use_reducer_eq(StickyCta::default);
    let timers = use_mut_ref(StickyTimers::default);

    {
        let dispatcher = state.dispatcher();
        let timers = timers.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().filter(|window| {
                    window
                        .match_media(config::STICKY_CTA_MEDIA_QUERY)
                        .ok()
                        .flatten()
                        .map(|list| list.matches())
                        .unwrap_or(false)
                });
                let listener = window.clone().map(|window| {
                    Closure::<dyn Fn()>::new(move || {
                        if let Some(progress) = current_progress(&window) {
                            dispatcher.dispatch(StickyAction::Scrolled(progress));
                        }
                    })
                });
                if let (Some(window), Some(listener)) = (window.as_ref(), listener.as_ref()) {
                    let _ = window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                    // Pages restored mid-scroll need a first reading.
                    let _ = listener.as_ref().unchecked_ref::<web_sys::js_sys::Function>().call0(&wasm_bindgen::JsValue::NULL);
                }
                move || {
                    if let (Some(window), Some(listener)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                    }
                    let mut timers = timers.borrow_mut();
                    timers.ripple.cancel();
                    timers.focus.cancel();
                }
            },
            (),
        );
    }

    let onclick = {
        let dispatcher = state.dispatcher();
        let timers: Rc<RefCell<StickyTimers>> = timers.clone();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(StickyAction::Ripple(true));
            let mut slots = timers.borrow_mut();
            let ripple_done = dispatcher.clone();
            slots.ripple.arm(RIPPLE_MS, move || ripple_done.dispatch(StickyAction::Ripple(false)));

            let contact = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id("contact"));
            if let Some(contact) = contact {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                contact.scroll_into_view_with_scroll_into_view_options(&options);
            }
            slots.focus.arm(FOCUS_DELAY_MS, focus_contact_email);
        })
    };

    if !state.visible {
        return html! {};
    }

    html! {
        <div class="sticky-cta">
            <button
                type="button"
                class={classes!("sticky-cta-button", state.rippling.then_some("rippling"))}
                onclick={onclick}
            >
                {"Get a free quote →"}
            </button>
        </div>
    }
}
