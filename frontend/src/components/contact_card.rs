use yew::prelude::*;

use super::clipboard::copy_text;
use super::confetti::Confetti;
use super::timer::{now_ms, TimerSlot};
use crate::interaction::{CopyFeedback, CopyFeedbackConfig};

#[derive(Properties, PartialEq)]
pub struct ContactCardProps {
    pub title: AttrValue,
    pub email: AttrValue,
    #[prop_or_default]
    pub config: CopyFeedbackConfig,
}

pub enum Msg {
    Copy,
    Hover(bool),
    Deadline,
}

/// Bento card with a one-click "copy our email" button.
pub struct ContactCard {
    feedback: CopyFeedback,
    hovered: bool,
    timer: TimerSlot,
}

impl Component for ContactCard {
    type Message = Msg;
    type Properties = ContactCardProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            feedback: CopyFeedback::new(ctx.props().config),
            hovered: false,
            timer: TimerSlot::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let changed = match msg {
            Msg::Copy => {
                copy_text(&ctx.props().email);
                self.feedback.trigger(now_ms());
                true
            }
            Msg::Hover(hovered) => {
                let changed = self.hovered != hovered;
                self.hovered = hovered;
                changed
            }
            Msg::Deadline => {
                self.timer.fired();
                self.feedback.poll(now_ms())
            }
        };
        let link = ctx.link().clone();
        self.timer.arm_at(self.feedback.next_deadline(), now_ms(), move || {
            link.send_message(Msg::Deadline)
        });
        changed
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.timer.cancel();
        self.feedback.reset();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onclick = link.callback(|_: MouseEvent| Msg::Copy);
        let onmouseenter = link.callback(|_: MouseEvent| Msg::Hover(true));
        let onmouseleave = link.callback(|_: MouseEvent| Msg::Hover(false));

        html! {
            <div class="contact-card">
                <div class="contact-card-copy">
                    <p class="eyebrow">{"Let’s talk about your project 🙌"}</p>
                    <h3>{ctx.props().title.clone()}</h3>
                    <p class="contact-card-note">
                        {"No booking needed for a quote. Just email us and we’ll reply within 24 hours. 📬 One click to copy."}
                    </p>
                </div>
                <div class="contact-card-stage">
                    <button
                        type="button"
                        class={classes!(
                            "copy-email-button",
                            self.hovered.then_some("hovered"),
                            self.feedback.is_copied().then_some("copied"),
                        )}
                        onclick={onclick}
                        onmouseenter={onmouseenter}
                        onmouseleave={onmouseleave}
                    >
                        <span class="copy-email-icon" aria-hidden="true">{"🤠"}</span>
                        <span>{self.feedback.label()}</span>
                    </button>
                    if self.feedback.show_confetti() {
                        <Confetti />
                    }
                    if self.feedback.show_toast() {
                        <div class="copy-toast" role="status">{"Email copied to clipboard"}</div>
                    }
                </div>
            </div>
        }
    }
}
