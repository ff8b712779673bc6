use yew::prelude::*;
use log::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::content::{content_for, Language};
use crate::forms::contact::{ContactField, ContactFields, CONTACT_FAILED_MESSAGE};
use crate::forms::submit::submit;
use crate::forms::validation::FieldError;

fn alert(message: &str) {
    if let Some(window) = window() {
        if window.alert_with_message(message).is_err() {
            warn!("Could not show alert: {}", message);
        }
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let t = content_for(Language::En);
    let copy = &t.contact;
    let fields = use_state(ContactFields::default);
    let invalid = use_state(|| None::<(ContactField, FieldError)>);
    let is_submitting = use_state(|| false);
    let is_sent = use_state(|| false);

    let update = {
        let fields = fields.clone();
        let invalid = invalid.clone();
        move |field: ContactField| {
            let fields = fields.clone();
            let invalid = invalid.clone();
            Callback::from(move |value: String| {
                let mut next = (*fields).clone();
                next.set(field, value);
                fields.set(next);
                invalid.set(None);
            })
        }
    };

    let on_submit = {
        let fields = fields.clone();
        let invalid = invalid.clone();
        let is_submitting = is_submitting.clone();
        let is_sent = is_sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            if let Err(problem) = fields.validate() {
                invalid.set(Some(problem));
                return;
            }

            is_submitting.set(true);
            let submission = fields.submission();
            let fields = fields.clone();
            let is_submitting = is_submitting.clone();
            let is_sent = is_sent.clone();
            spawn_local(async move {
                match submit(&submission).await {
                    Ok(()) => {
                        info!("Contact message sent");
                        fields.set(ContactFields::default());
                        is_sent.set(true);
                    }
                    Err(e) => {
                        error!("Contact form submission failed: {}", e);
                        alert(CONTACT_FAILED_MESSAGE);
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let on_send_another = {
        let is_sent = is_sent.clone();
        Callback::from(move |_: MouseEvent| is_sent.set(false))
    };

    let invalid_class = |field: ContactField| {
        matches!(*invalid, Some((f, _)) if f == field).then(|| "invalid")
    };

    html! {
        <footer id="contact" class="contact">
            <div class="container">
                <div class="contact-panel">
                    <div class="contact-intro">
                        <div>
                            <h2>
                                {copy.title}
                                <br />
                                <span>{copy.title_suffix}</span>
                            </h2>
                            <p>{copy.desc}</p>
                        </div>
                        <div>
                            <a href={format!("mailto:{}", copy.email)} class="contact-mail">
                                <span class="contact-mail-icon">{"✉"}</span>
                                <span>{copy.email}</span>
                            </a>
                            <div class="contact-socials">
                                <a href="#" aria-label="Instagram">{"◎"}</a>
                                <a href="#" aria-label="LinkedIn">{"in"}</a>
                                <a href="#" aria-label="Dribbble">{"◍"}</a>
                            </div>
                        </div>
                    </div>

                    <div class="contact-body">
                        if *is_sent {
                            <div class="contact-sent">
                                <div class="contact-sent-icon">{"✓"}</div>
                                <h3>{copy.thanks_title}</h3>
                                <p>{copy.thanks_body}</p>
                                <button class="contact-again" onclick={on_send_another}>
                                    {"Send another message"}
                                </button>
                            </div>
                        } else {
                            <form class="contact-form" name="contact" novalidate=true onsubmit={on_submit}>
                                <input type="hidden" name="form-name" value="contact" />
                                <div class="contact-row">
                                    <input
                                        type="text"
                                        name="name"
                                        required=true
                                        class={classes!(invalid_class(ContactField::Name))}
                                        value={fields.name.clone()}
                                        placeholder={copy.name_placeholder}
                                        oninput={update(ContactField::Name).reform(|e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            input.value()
                                        })}
                                    />
                                    <input
                                        type="email"
                                        name="email"
                                        required=true
                                        class={classes!(invalid_class(ContactField::Email))}
                                        value={fields.email.clone()}
                                        placeholder={copy.email_placeholder}
                                        oninput={update(ContactField::Email).reform(|e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            input.value()
                                        })}
                                    />
                                </div>
                                <div class="contact-select">
                                    <select
                                        name="project_type"
                                        onchange={update(ContactField::ProjectType).reform(|e: Event| {
                                            let select: HtmlSelectElement = e.target_unchecked_into();
                                            select.value()
                                        })}
                                    >
                                        <option value="" disabled=true selected={fields.project_type.is_empty()}>
                                            {copy.project_placeholder}
                                        </option>
                                        { for copy.options.iter().map(|option| html! {
                                            <option value={*option} selected={fields.project_type == *option}>{*option}</option>
                                        }) }
                                    </select>
                                    <span class="contact-select-arrow">{"↓"}</span>
                                </div>
                                <textarea
                                    name="message"
                                    required=true
                                    rows="3"
                                    class={classes!(invalid_class(ContactField::Message))}
                                    value={fields.message.clone()}
                                    placeholder={copy.msg_placeholder}
                                    oninput={update(ContactField::Message).reform(|e: InputEvent| {
                                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                                        input.value()
                                    })}
                                />
                                if let Some((_, problem)) = *invalid {
                                    <p class="contact-error">{problem.message()}</p>
                                }
                                <button type="submit" class="contact-send" disabled={*is_submitting}>
                                    if *is_submitting {
                                        <span class="contact-spinner"></span>
                                    } else {
                                        {copy.send}{" →"}
                                    }
                                </button>
                            </form>
                        }
                    </div>
                </div>

                <div class="contact-footer">
                    <p>{copy.copyright}</p>
                    <div>
                        <a href="#">{copy.privacy}</a>
                        <a href="#">{copy.terms}</a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .contact { position: relative; padding: 6rem 0 3rem; overflow: hidden; }
                .contact-panel {
                    max-width: 64rem;
                    margin: 0 auto 4rem;
                    padding: 3rem;
                    border-radius: 3rem;
                    background: var(--card);
                    border: 1px solid var(--border);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                    display: flex;
                    gap: 3rem;
                    transition: background-color 0.5s;
                }
                .contact-intro {
                    width: 42%;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    animation: fade-up 0.6s ease-out both;
                }
                .contact-intro h2 { font-size: clamp(2.25rem, 5vw, 3rem); font-weight: 100; line-height: 1; margin: 0 0 1rem; }
                .contact-intro h2 span { font-weight: 400; color: var(--teal); }
                .contact-intro p { color: var(--muted); font-weight: 300; line-height: 1.7; margin: 0 0 2rem; }
                .contact-mail { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 2rem; font-weight: 300; }
                .contact-mail-icon, .contact-socials a {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--border);
                    transition: all 0.3s;
                }
                .contact-mail:hover .contact-mail-icon { background: var(--teal); color: #fff; }
                .contact-socials { display: flex; gap: 0.75rem; }
                .contact-socials a:hover { background: var(--fg); color: var(--bg); }
                .contact-body { width: 58%; }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    animation: fade-up 0.6s ease-out 0.2s both;
                }
                .contact-row { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; }
                .contact-form input, .contact-form select, .contact-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 1rem 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid var(--border);
                    background: var(--bg);
                    color: var(--fg);
                    font: inherit;
                    font-size: 0.875rem;
                    font-weight: 300;
                    transition: border-color 0.3s;
                }
                .contact-form textarea { resize: none; }
                .contact-form select { appearance: none; cursor: pointer; }
                .contact-form input:focus, .contact-form select:focus, .contact-form textarea:focus {
                    outline: none;
                    border-color: var(--teal);
                }
                .contact-form .invalid { border-color: #ef4444; }
                .contact-select { position: relative; }
                .contact-select-arrow {
                    position: absolute;
                    right: 1.5rem;
                    top: 50%;
                    transform: translateY(-50%);
                    color: var(--muted);
                    pointer-events: none;
                }
                .contact-error { margin: 0; color: #ef4444; font-size: 0.875rem; }
                .contact-send {
                    margin-top: 0.5rem;
                    padding: 1rem;
                    border: none;
                    border-radius: 1rem;
                    background: var(--fg);
                    color: var(--bg);
                    font-weight: 500;
                    font-size: 0.875rem;
                    cursor: pointer;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 0.75rem;
                    transition: all 0.3s;
                }
                .contact-send:hover:not(:disabled) { background: var(--teal); transform: scale(1.01); }
                .contact-send:disabled { opacity: 0.7; cursor: default; }
                .contact-spinner {
                    width: 1.25rem;
                    height: 1.25rem;
                    border: 2px solid currentColor;
                    border-right-color: transparent;
                    border-radius: 50%;
                    animation: spin 0.8s linear infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .contact-sent {
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 3rem 0;
                    animation: fade-in 0.4s ease both;
                }
                .contact-sent-icon {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    color: #22c55e;
                    background: rgba(34, 197, 94, 0.1);
                    border: 1px solid rgba(34, 197, 94, 0.2);
                    margin-bottom: 1.5rem;
                }
                .contact-sent h3 { margin: 0 0 0.5rem; font-size: 1.5rem; font-weight: 700; }
                .contact-sent p { margin: 0; color: var(--muted); }
                .contact-again {
                    margin-top: 2rem;
                    border: none;
                    background: none;
                    color: var(--teal);
                    font-size: 0.875rem;
                    cursor: pointer;
                }
                .contact-again:hover { text-decoration: underline; }
                .contact-footer {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    color: var(--muted);
                    font-size: 0.75rem;
                    font-weight: 300;
                    letter-spacing: 0.03em;
                }
                .contact-footer div { display: flex; gap: 2rem; }
                .contact-footer a:hover { color: var(--fg); }
                @media (max-width: 1024px) {
                    .contact-panel { flex-direction: column; padding: 2rem; }
                    .contact-intro, .contact-body { width: 100%; }
                }
                @media (max-width: 640px) {
                    .contact-row { grid-template-columns: 1fr; }
                    .contact-footer { flex-direction: column; }
                }
                "#}
            </style>
        </footer>
    }
}
