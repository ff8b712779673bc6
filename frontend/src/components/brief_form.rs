use yew::prelude::*;
use yew_router::components::Link;
use log::{debug, error, info};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::briefs::{BriefConfig, Question, QuestionKind};
use crate::forms::flow::{Advance, BriefFlow};
use crate::forms::submit::{submit, SubmitError};
use crate::Route;

pub fn step_label(step: usize, total: usize) -> String {
    format!("Step {} / {}", step + 1, total)
}

pub fn next_label(is_last: bool) -> &'static str {
    if is_last {
        "Finish"
    } else {
        "Next"
    }
}

#[derive(Properties, PartialEq)]
pub struct BriefFormProps {
    pub config: &'static BriefConfig,
}

pub enum BriefFormMsg {
    Input(String),
    Next,
    Prev,
    Enter,
    Submitted(&'static str, Result<(), SubmitError>),
}

pub struct BriefForm {
    flow: BriefFlow,
}

impl Component for BriefForm {
    type Message = BriefFormMsg;
    type Properties = BriefFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            flow: BriefFlow::new(ctx.props().config),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.flow.switch_config(ctx.props().config);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            BriefFormMsg::Input(value) => {
                self.flow.set_answer(value);
                true
            }
            BriefFormMsg::Next => match self.flow.next() {
                Advance::Blocked => true,
                Advance::Moved(step) => {
                    debug!("Brief {} moved to step {}", self.flow.config().id, step);
                    true
                }
                Advance::Submit(submission) => {
                    let brief_id = self.flow.config().id;
                    info!("Submitting brief {}", brief_id);
                    ctx.link().send_future(async move {
                        BriefFormMsg::Submitted(brief_id, submit(&submission).await)
                    });
                    true
                }
            },
            BriefFormMsg::Prev => {
                self.flow.prev();
                true
            }
            BriefFormMsg::Enter => {
                if self.flow.current_question().kind.enter_advances() {
                    ctx.link().send_message(BriefFormMsg::Next);
                }
                false
            }
            BriefFormMsg::Submitted(brief_id, Ok(())) => {
                self.flow.submission_succeeded(brief_id);
                true
            }
            BriefFormMsg::Submitted(brief_id, Err(e)) => {
                error!("Brief {} submission failed: {}", brief_id, e);
                self.flow.submission_failed(brief_id);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let flow = &self.flow;
        if flow.is_success() {
            return html! {
                <div class="brief-success">
                    <div class="brief-success-icon">{"✓"}</div>
                    <h2>{"Brief Sent!"}</h2>
                    <p>
                        {"Thanks! We'll review your details and contact you at "}
                        <span>{flow.contact_hint().unwrap_or_default().to_string()}</span>
                        {" shortly."}
                    </p>
                    <Link<Route> to={Route::Home} classes="brief-home">{"Back to Home"}</Link<Route>>
                    <style>{BRIEF_STYLES}</style>
                </div>
            };
        }

        let link = ctx.link();
        let question = flow.current_question();
        let step = flow.step();
        let on_keydown = link.batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(BriefFormMsg::Enter)
        });
        let on_prev = link.callback(|_: MouseEvent| BriefFormMsg::Prev);
        let on_next = link.callback(|_: MouseEvent| BriefFormMsg::Next);

        html! {
            <div class="brief-form">
                <div class="brief-progress">
                    <div class="brief-progress-labels">
                        <span class="brief-step">{step_label(step, flow.total_steps())}</span>
                        <span class="brief-percent">{format!("{}%", flow.progress_percent())}</span>
                    </div>
                    <div class="brief-track">
                        <div class="brief-fill" style={format!("width: {}%;", flow.progress_percent())}></div>
                    </div>
                </div>

                <div class="brief-question-slot">
                    <div class="brief-question" key={step}>
                        <h3>
                            {question.text}
                            if question.required {
                                <span class="brief-required">{"*"}</span>
                            }
                        </h3>
                        <div class="brief-input" onkeydown={on_keydown}>
                            { self.render_input(ctx, question) }
                        </div>
                        if let Some(message) = flow.error() {
                            <p class="brief-error">
                                <span class="brief-error-dot"></span>
                                {message.to_string()}
                            </p>
                        }
                    </div>
                </div>

                <div class="brief-nav">
                    <button
                        class={classes!("brief-back", (step == 0).then_some("brief-back-hidden"))}
                        disabled={step == 0}
                        onclick={on_prev}
                    >
                        <span class="brief-arrow">{"←"}</span>
                        <span>{"Back"}</span>
                    </button>
                    <button class="brief-next" disabled={flow.is_submitting()} onclick={on_next}>
                        if flow.is_submitting() {
                            <span class="brief-spinner"></span>
                        } else {
                            <span>{next_label(flow.is_last_step())}</span>
                            <span class="brief-arrow">{if flow.is_last_step() { "➤" } else { "→" }}</span>
                        }
                    </button>
                </div>
                <style>{BRIEF_STYLES}</style>
            </div>
        }
    }
}

impl BriefForm {
    fn render_input(&self, ctx: &Context<Self>, question: &'static Question) -> Html {
        let value = self.flow.current_answer().to_string();
        let class = classes!("brief-field", self.flow.error().map(|_| "brief-field-error"));
        let placeholder = question.placeholder.unwrap_or_default();

        match question.kind {
            QuestionKind::TextArea => html! {
                <textarea
                    autofocus=true
                    rows="3"
                    class={class}
                    value={value}
                    placeholder={placeholder}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        BriefFormMsg::Input(input.value())
                    })}
                />
            },
            QuestionKind::Choice => html! {
                <div class="brief-choices">
                    { for question.choices.iter().map(|choice| {
                        let selected = value == *choice;
                        let onclick = ctx.link().callback(move |_: MouseEvent| BriefFormMsg::Input(choice.to_string()));
                        html! {
                            <button
                                key={*choice}
                                class={classes!("brief-choice", selected.then_some("selected"))}
                                onclick={onclick}
                            >
                                <span>{*choice}</span>
                                if selected {
                                    <span class="brief-check">{"✓"}</span>
                                }
                            </button>
                        }
                    }) }
                </div>
            },
            QuestionKind::Text | QuestionKind::Phone | QuestionKind::Email => html! {
                <input
                    autofocus=true
                    type={question.kind.input_type()}
                    class={class}
                    value={value}
                    placeholder={placeholder}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        BriefFormMsg::Input(input.value())
                    })}
                />
            },
        }
    }
}

const BRIEF_STYLES: &str = r#"
.brief-form { width: 100%; }
.brief-progress { margin-bottom: 2rem; }
.brief-progress-labels {
    display: flex;
    justify-content: space-between;
    align-items: flex-end;
    margin-bottom: 0.75rem;
}
.brief-step {
    color: var(--teal);
    font-size: 0.75rem;
    font-weight: 700;
    letter-spacing: 0.1em;
    text-transform: uppercase;
}
.brief-percent { color: var(--muted); font-family: monospace; font-size: 0.625rem; }
.brief-track { width: 100%; height: 4px; border-radius: 9999px; background: var(--border); overflow: hidden; }
.brief-fill { height: 100%; background: var(--teal); transition: width 0.4s ease-out; }
.brief-question { animation: brief-slide 0.25s ease both; }
@keyframes brief-slide {
    from { opacity: 0; transform: translateX(10px); }
    to { opacity: 1; transform: translateX(0); }
}
.brief-question h3 { margin: 0 0 0.5rem; font-size: clamp(1.25rem, 3vw, 1.875rem); font-weight: 300; line-height: 1.2; }
.brief-required { color: var(--teal); margin-inline-start: 0.25rem; }
.brief-input { margin-top: 1.5rem; }
.brief-field {
    width: 100%;
    box-sizing: border-box;
    padding: 0.75rem 1.25rem;
    border-radius: 0.75rem;
    border: 1px solid var(--border);
    background: var(--card);
    color: var(--fg);
    font: inherit;
    transition: border-color 0.3s;
}
textarea.brief-field { resize: none; }
.brief-field:focus { outline: none; border-color: var(--teal); }
.brief-field-error { border-color: #ef4444; }
.brief-choices { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; }
.brief-choice {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem;
    border-radius: 0.75rem;
    border: 1px solid var(--border);
    background: var(--card);
    color: var(--fg);
    font: inherit;
    font-weight: 500;
    text-align: start;
    cursor: pointer;
    transition: all 0.2s;
}
.brief-choice:hover { border-color: rgba(28, 207, 217, 0.5); }
.brief-choice.selected {
    background: var(--teal);
    border-color: var(--teal);
    color: #fff;
    box-shadow: 0 4px 12px rgba(28, 207, 217, 0.2);
}
.brief-error {
    display: flex;
    align-items: center;
    gap: 0.375rem;
    margin: 0.5rem 0 0;
    color: #ef4444;
    font-size: 0.75rem;
    font-weight: 500;
    animation: fade-in 0.2s ease both;
}
.brief-error-dot { width: 4px; height: 4px; border-radius: 50%; background: #ef4444; }
.brief-nav {
    margin-top: 2rem;
    padding-top: 1.5rem;
    border-top: 1px solid var(--border);
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.brief-back {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    border: none;
    background: none;
    color: var(--muted);
    font: inherit;
    font-size: 0.875rem;
    font-weight: 500;
    cursor: pointer;
}
.brief-back:hover { color: var(--fg); }
.brief-back-hidden { opacity: 0; pointer-events: none; }
.brief-next {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.625rem 1.25rem 0.625rem 1.5rem;
    border: none;
    border-radius: 9999px;
    background: var(--fg);
    color: var(--bg);
    font: inherit;
    font-size: 0.875rem;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.3s;
}
.brief-next:hover:not(:disabled) { background: var(--teal); }
.brief-next:active { transform: scale(0.95); }
.brief-next:disabled { background: var(--border); color: var(--muted); cursor: not-allowed; }
html[dir="rtl"] .brief-arrow { transform: rotate(180deg); }
.brief-spinner {
    width: 1.125rem;
    height: 1.125rem;
    border: 2px solid currentColor;
    border-right-color: transparent;
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.brief-success { width: 100%; text-align: center; padding: 3rem 0; animation: fade-in 0.4s ease both; }
.brief-success-icon {
    width: 5rem;
    height: 5rem;
    margin: 0 auto 1.5rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 2rem;
    color: #22c55e;
    background: rgba(34, 197, 94, 0.1);
    border: 1px solid rgba(34, 197, 94, 0.2);
}
.brief-success h2 { margin: 0 0 1rem; font-size: 1.875rem; font-weight: 700; }
.brief-success p { max-width: 28rem; margin: 0 auto 2rem; color: var(--muted); }
.brief-success p span { color: var(--teal); font-weight: 500; }
.brief-home {
    display: inline-flex;
    padding: 0.625rem 1.5rem;
    border-radius: 9999px;
    background: var(--fg);
    color: var(--bg);
    font-size: 0.875rem;
    font-weight: 500;
    transition: background 0.3s;
}
.brief-home:hover { background: var(--teal); }
@media (max-width: 640px) {
    .brief-choices { grid-template-columns: 1fr; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::briefs::get_brief;

    #[test]
    fn step_label_is_one_based() {
        assert_eq!(step_label(0, 8), "Step 1 / 8");
        assert_eq!(step_label(7, 8), "Step 8 / 8");
    }

    #[test]
    fn last_step_finishes() {
        assert_eq!(next_label(false), "Next");
        assert_eq!(next_label(true), "Finish");
    }

    #[test]
    fn every_input_kind_has_a_renderer() {
        let branding = get_brief("branding").expect("branding brief");
        let kinds: Vec<QuestionKind> = branding.questions.iter().map(|q| q.kind).collect();
        assert!(kinds.contains(&QuestionKind::Email));
        assert!(kinds.contains(&QuestionKind::Phone));
        assert!(kinds.contains(&QuestionKind::Choice));
    }
}
