use log::debug;
use web_sys::{Element, PointerEvent};
use yew::prelude::*;

use super::clipboard::copy_text;
use super::confetti::Confetti;
use super::timer::{now_ms, TimerSlot};
use crate::interaction::{EvasiveConfig, EvasiveTarget, Mode, Rect, Size};

#[derive(Properties, PartialEq)]
pub struct EvasiveCtaProps {
    pub label: AttrValue,
    pub captured_label: AttrValue,
    /// Copied to the clipboard on capture, when set.
    #[prop_or_default]
    pub copy_text: Option<AttrValue>,
    #[prop_or_default]
    pub config: EvasiveConfig,
}

pub enum Msg {
    ArenaMove { client_x: f64, client_y: f64 },
    ArenaEnter,
    ArenaLeave,
    Activate,
    Deadline,
}

/// A call-to-action button that dodges the pointer for a while, then gives
/// in and follows it until clicked.
pub struct EvasiveCta {
    game: EvasiveTarget,
    arena_ref: NodeRef,
    target_ref: NodeRef,
    timer: TimerSlot,
}

impl EvasiveCta {
    fn measure(&self) -> (Option<Rect>, Option<Size>) {
        let arena = self.arena_ref.cast::<Element>().and_then(|el| Rect::from_element(&el));
        let target = self.target_ref.cast::<Element>().and_then(|el| Size::from_element(&el));
        (arena, target)
    }

    fn sync_timer(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.timer.arm_at(self.game.next_deadline(), now_ms(), move || {
            link.send_message(Msg::Deadline)
        });
    }

    fn hint(&self) -> &'static str {
        let view = self.game.view();
        if view.captured {
            "Got it! We'll be in touch."
        } else {
            match view.mode {
                Mode::Repel if view.escape_count == 0 => "Go on, try to catch it.",
                Mode::Repel => "Almost! Keep trying.",
                Mode::Attract => "Okay, okay. It's all yours.",
            }
        }
    }
}

impl Component for EvasiveCta {
    type Message = Msg;
    type Properties = EvasiveCtaProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            game: EvasiveTarget::new(ctx.props().config),
            arena_ref: NodeRef::default(),
            target_ref: NodeRef::default(),
            timer: TimerSlot::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let changed = match msg {
            Msg::ArenaMove { client_x, client_y } => {
                let (arena, target) = self.measure();
                self.game.on_arena_pointer_move(arena, target, client_x, client_y, now_ms())
            }
            Msg::ArenaEnter => {
                self.game.on_arena_pointer_enter();
                true
            }
            Msg::ArenaLeave => {
                self.game.on_arena_pointer_leave();
                true
            }
            Msg::Activate => {
                if let Some(text) = &ctx.props().copy_text {
                    copy_text(text);
                }
                self.game.on_activate(now_ms());
                true
            }
            Msg::Deadline => {
                self.timer.fired();
                let changed = self.game.poll(now_ms());
                if changed && !self.game.is_captured() {
                    debug!("evasive target back in play");
                }
                changed
            }
        };
        self.sync_timer(ctx);
        changed
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.timer.cancel();
        self.game.cancel();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let view = self.game.view();
        let props = ctx.props();

        let onpointermove = link.callback(|e: PointerEvent| Msg::ArenaMove {
            client_x: e.client_x() as f64,
            client_y: e.client_y() as f64,
        });
        let onpointerenter = link.callback(|_: PointerEvent| Msg::ArenaEnter);
        let onpointerleave = link.callback(|_: PointerEvent| Msg::ArenaLeave);
        let onclick = link.callback(|_: MouseEvent| Msg::Activate);

        let mode_class = match view.mode {
            Mode::Repel => "repel",
            Mode::Attract => "attract",
        };
        let style = format!(
            "transform: translate3d({:.1}px, {:.1}px, 0);",
            view.position.x, view.position.y
        );
        let label = if view.captured { &props.captured_label } else { &props.label };

        html! {
            <div
                class={classes!("evasive-arena", mode_class)}
                ref={self.arena_ref.clone()}
                onpointermove={onpointermove}
                onpointerenter={onpointerenter}
                onpointerleave={onpointerleave}
            >
                <button
                    type="button"
                    ref={self.target_ref.clone()}
                    class={classes!("evasive-target", view.captured.then_some("captured"))}
                    style={style}
                    onclick={onclick}
                >
                    {label.clone()}
                </button>
                if view.celebrating {
                    <Confetti />
                }
                <p class="evasive-hint" aria-live="polite">{self.hint()}</p>
            </div>
        }
    }
}
