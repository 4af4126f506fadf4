use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{DeviceOrientationEvent, Element, PointerEvent};
use yew::prelude::*;

use crate::config;
use crate::interaction::{MagneticOffset, PointerSample, Rect, SpotlightConfig, TiltState};

fn measure(node: &NodeRef) -> Option<Rect> {
    node.cast::<Element>().and_then(|el| Rect::from_element(&el))
}

fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct SpotlightSurfaceProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub config: SpotlightConfig,
    #[prop_or_default]
    pub children: Children,
}

/// Container with a soft glow that follows the pointer.
#[function_component(SpotlightSurface)]
pub fn spotlight_surface(props: &SpotlightSurfaceProps) -> Html {
    let node = use_node_ref();
    let sample = use_state(PointerSample::default);

    {
        let node = node.clone();
        let sample = sample.clone();
        let ratio = props.config.anchor_y_ratio;
        use_effect_with_deps(
            move |_| {
                sample.set(PointerSample::resting(measure(&node), ratio));
                || ()
            },
            (),
        );
    }

    let onpointermove = {
        let node = node.clone();
        let sample = sample.clone();
        Callback::from(move |e: PointerEvent| {
            let mut next = *sample;
            if next.on_pointer_move(measure(&node), e.client_x() as f64, e.client_y() as f64) {
                sample.set(next);
            }
        })
    };
    let onpointerleave = {
        let sample = sample.clone();
        Callback::from(move |_: PointerEvent| {
            let mut next = *sample;
            next.on_pointer_leave();
            sample.set(next);
        })
    };

    html! {
        <div
            ref={node}
            class={classes!("spotlight-surface", props.class.clone())}
            onpointermove={onpointermove}
            onpointerleave={onpointerleave}
        >
            <div class="spotlight-glow" aria-hidden="true" style={sample.spotlight_style(&props.config)}></div>
            { for props.children.iter() }
        </div>
    }
}

pub enum TiltAction {
    Pointer { rect: Option<Rect>, client_x: f64, client_y: f64 },
    Leave,
    Orientation { beta: Option<f64>, gamma: Option<f64> },
}

impl Reducible for TiltState {
    type Action = TiltAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            TiltAction::Pointer { rect, client_x, client_y } => {
                if !next.on_pointer_move(rect, client_x, client_y) {
                    return self;
                }
            }
            TiltAction::Leave => next.on_pointer_leave(),
            TiltAction::Orientation { beta, gamma } => next.on_orientation(beta, gamma),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Card that leans toward the pointer, or with the phone on touch screens.
#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();
    let tilt = use_reducer_eq(TiltState::default);

    {
        let tilt = tilt.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = media_matches(config::COARSE_POINTER_QUERY).then(|| {
                    Closure::<dyn Fn(DeviceOrientationEvent)>::new(move |e: DeviceOrientationEvent| {
                        tilt.dispatch(TiltAction::Orientation { beta: e.beta(), gamma: e.gamma() });
                    })
                });
                if let (Some(window), Some(listener)) = (web_sys::window(), listener.as_ref()) {
                    let _ = window.add_event_listener_with_callback(
                        "deviceorientation",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let (Some(window), Some(listener)) = (web_sys::window(), listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "deviceorientation",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let onpointermove = {
        let node = node.clone();
        let tilt = tilt.dispatcher();
        Callback::from(move |e: PointerEvent| {
            tilt.dispatch(TiltAction::Pointer {
                rect: measure(&node),
                client_x: e.client_x() as f64,
                client_y: e.client_y() as f64,
            });
        })
    };
    let onpointerleave = {
        let tilt = tilt.dispatcher();
        Callback::from(move |_: PointerEvent| tilt.dispatch(TiltAction::Leave))
    };

    html! {
        <div
            ref={node}
            class={classes!("tilt-card", props.class.clone())}
            style={tilt.transform_style()}
            onpointermove={onpointermove}
            onpointerleave={onpointerleave}
        >
            <div class="tilt-card-glow" aria-hidden="true" style={tilt.glow_style()}></div>
            <div class="tilt-card-body">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MagneticLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MagneticLink)]
pub fn magnetic_link(props: &MagneticLinkProps) -> Html {
    let node = use_node_ref();
    let offset = use_state_eq(MagneticOffset::default);

    let onpointermove = {
        let node = node.clone();
        let offset = offset.clone();
        Callback::from(move |e: PointerEvent| {
            let mut next = *offset;
            if next.on_pointer_move(measure(&node), e.client_x() as f64, e.client_y() as f64) {
                offset.set(next);
            }
        })
    };
    let onpointerleave = {
        let offset = offset.clone();
        Callback::from(move |_: PointerEvent| offset.set(MagneticOffset::default()))
    };

    html! {
        <a
            ref={node}
            href={props.href.clone()}
            class={classes!("magnetic-link", props.class.clone())}
            style={offset.style()}
            onpointermove={onpointermove}
            onpointerleave={onpointerleave}
        >
            <span class="magnetic-link-label">{ for props.children.iter() }</span>
            <span class="magnetic-link-glow" aria-hidden="true"></span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct MicrocopyBadgeProps {
    pub messages: Vec<String>,
}

/// Badge that cycles through short selling points.
#[function_component(MicrocopyBadge)]
pub fn microcopy_badge(props: &MicrocopyBadgeProps) -> Html {
    let index = use_state_eq(|| 0usize);
    let len = props.messages.len();

    {
        let index = index.clone();
        use_effect_with_deps(
            move |len| {
                let len = *len;
                let position = Rc::new(Cell::new(0usize));
                let interval = (len > 1).then(|| {
                    Interval::new(config::MICROCOPY_ROTATE_MS, move || {
                        let next = (position.get() + 1) % len;
                        position.set(next);
                        index.set(next);
                    })
                });
                move || drop(interval)
            },
            len,
        );
    }

    let message = props.messages.get(*index).cloned().unwrap_or_default();
    html! {
        <span class="microcopy-badge" aria-live="polite">{message}</span>
    }
}
