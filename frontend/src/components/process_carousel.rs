use wasm_bindgen::JsCast;
use web_sys::{Element, FocusEvent, KeyboardEvent, Node, PointerEvent};
use yew::prelude::*;

use super::timer::{now_ms, TimerSlot};
use crate::content::ProcessSlide;
use crate::interaction::{Slideshow, SlideshowConfig};

#[derive(Properties, PartialEq)]
pub struct ProcessCarouselProps {
    pub slides: Vec<ProcessSlide>,
    #[prop_or_default]
    pub config: SlideshowConfig,
}

pub enum Msg {
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut { into_carousel: bool },
    Key(String),
    GoTo(isize),
    Deadline,
}

/// "Our process" slideshow. Advances on its own, holds while the visitor
/// is pointing at it or has focus inside it.
pub struct ProcessCarousel {
    slideshow: Slideshow,
    container_ref: NodeRef,
    timer: TimerSlot,
}

impl ProcessCarousel {
    fn slide_style(offset: isize) -> String {
        let active = offset == 0;
        format!(
            "transform: translateX({}%); opacity: {}; pointer-events: {};",
            offset * 100,
            if active { 1 } else { 0 },
            if active { "auto" } else { "none" },
        )
    }
}

impl Component for ProcessCarousel {
    type Message = Msg;
    type Properties = ProcessCarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut carousel = Self {
            slideshow: Slideshow::new(props.slides.len(), props.config, now_ms()),
            container_ref: NodeRef::default(),
            timer: TimerSlot::default(),
        };
        let link = ctx.link().clone();
        carousel.timer.arm_at(carousel.slideshow.next_deadline(), now_ms(), move || {
            link.send_message(Msg::Deadline)
        });
        carousel
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let now = now_ms();
        let changed = match msg {
            Msg::PointerEnter => {
                self.slideshow.on_pointer_enter(now);
                false
            }
            Msg::PointerLeave => {
                self.slideshow.on_pointer_leave(now);
                false
            }
            Msg::FocusIn => {
                self.slideshow.on_focus_in(now);
                false
            }
            Msg::FocusOut { into_carousel } => {
                self.slideshow.on_focus_out(into_carousel, now);
                false
            }
            Msg::Key(key) => self.slideshow.on_key(&key, now),
            Msg::GoTo(index) => {
                self.slideshow.go_to(index, now);
                true
            }
            Msg::Deadline => {
                self.timer.fired();
                self.slideshow.poll(now)
            }
        };
        let link = ctx.link().clone();
        self.timer.arm_at(self.slideshow.next_deadline(), now, move || {
            link.send_message(Msg::Deadline)
        });
        changed
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        let now = now_ms();
        self.slideshow = Slideshow::new(props.slides.len(), props.config, now);
        let link = ctx.link().clone();
        self.timer.cancel();
        self.timer.arm_at(self.slideshow.next_deadline(), now, move || {
            link.send_message(Msg::Deadline)
        });
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.timer.cancel();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let slides = &ctx.props().slides;
        let current = self.slideshow.current();

        let onpointerenter = link.callback(|_: PointerEvent| Msg::PointerEnter);
        let onpointerleave = link.callback(|_: PointerEvent| Msg::PointerLeave);
        let onfocusin = link.callback(|_: FocusEvent| Msg::FocusIn);
        let onfocusout = {
            let container_ref = self.container_ref.clone();
            link.callback(move |e: FocusEvent| {
                let next = e.related_target().and_then(|target| target.dyn_into::<Node>().ok());
                let into_carousel = match (container_ref.cast::<Element>(), next) {
                    (Some(container), Some(next)) => container.contains(Some(&next)),
                    _ => false,
                };
                Msg::FocusOut { into_carousel }
            })
        };
        let onkeydown = link.batch_callback(|e: KeyboardEvent| {
            let key = e.key();
            if key == "ArrowRight" || key == "ArrowLeft" {
                e.prevent_default();
                Some(Msg::Key(key))
            } else {
                None
            }
        });

        let previous = current as isize - 1;
        let next = current as isize + 1;

        html! {
            <div
                class="process-carousel"
                role="region"
                aria-label="Code Compas process carousel"
                tabindex="0"
                ref={self.container_ref.clone()}
                onpointerenter={onpointerenter}
                onpointerleave={onpointerleave}
                onfocusin={onfocusin}
                onfocusout={onfocusout}
                onkeydown={onkeydown}
            >
                <div class="process-carousel-header">
                    <span>{"Our process"}</span>
                    <span>{format!("{}/{}", current + 1, slides.len())}</span>
                </div>
                <div class="process-carousel-track">
                    { for slides.iter().enumerate().map(|(index, slide)| {
                        let offset = self.slideshow.offset_of(index);
                        html! {
                            <article
                                key={slide.title.clone()}
                                class="process-slide"
                                aria-hidden={(offset != 0).to_string()}
                                style={Self::slide_style(offset)}
                            >
                                <span class="process-slide-icon" aria-hidden="true">{&slide.icon}</span>
                                <h3>{&slide.title}</h3>
                                <p>{&slide.description}</p>
                                <span class="process-slide-stage">{&slide.stage_label}</span>
                            </article>
                        }
                    }) }
                    <button
                        type="button"
                        class="process-nav prev"
                        aria-label="Show previous step"
                        onclick={link.callback(move |_: MouseEvent| Msg::GoTo(previous))}
                    >
                        {"‹"}
                    </button>
                    <button
                        type="button"
                        class="process-nav next"
                        aria-label="Show next step"
                        onclick={link.callback(move |_: MouseEvent| Msg::GoTo(next))}
                    >
                        {"›"}
                    </button>
                </div>
                <div class="process-dots">
                    { for (0..slides.len()).map(|index| {
                        let active = index == current;
                        html! {
                            <button
                                type="button"
                                class={classes!("process-dot", active.then_some("active"))}
                                aria-label={format!("Show slide {}", index + 1)}
                                aria-pressed={active.to_string()}
                                onclick={link.callback(move |_: MouseEvent| Msg::GoTo(index as isize))}
                            />
                        }
                    }) }
                </div>
                if let Some(slide) = slides.get(current) {
                    <span class="sr-only" aria-live="polite">
                        {format!("{}: {}", slide.title, slide.description)}
                    </span>
                }
            </div>
        }
    }
}
