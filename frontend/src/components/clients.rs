use yew::prelude::*;

use crate::components::testimonials::looped;
use crate::content::{content_for, Language};

#[function_component(Clients)]
pub fn clients() -> Html {
    let t = content_for(Language::En);

    html! {
        <section id="clients" class="clients">
            <div class="container clients-label fade-up">
                <p>{t.clients_label}</p>
            </div>
            <div class="clients-marquee">
                <div class="clients-fade clients-fade-left"></div>
                <div class="clients-fade clients-fade-right"></div>
                <div class="clients-track">
                    { for looped(t.clients, 3).enumerate().map(|(i, client)| html! {
                        <div class="client" key={format!("{}-{}", client.name, i)}>
                            <span class="client-mark">{client.monogram}</span>
                            <span class="client-name">{client.name}</span>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .clients {
                    position: relative;
                    padding: 5rem 0;
                    overflow: hidden;
                    border-top: 1px solid var(--border);
                    border-bottom: 1px solid var(--border);
                    background: var(--pill);
                }
                .clients-label { text-align: center; margin-bottom: 2.5rem; }
                .clients-label p {
                    margin: 0;
                    color: var(--muted);
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                .clients-marquee {
                    position: relative;
                    overflow: hidden;
                    animation: fade-in 0.8s ease 0.2s both;
                }
                .clients-fade {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 5rem;
                    z-index: 10;
                    pointer-events: none;
                }
                .clients-fade-left { left: 0; background: linear-gradient(to right, var(--bg), transparent); }
                .clients-fade-right { right: 0; background: linear-gradient(to left, var(--bg), transparent); }
                .clients-track {
                    display: flex;
                    align-items: center;
                    gap: 6rem;
                    width: max-content;
                    animation: marquee-third 45s linear infinite;
                    will-change: transform;
                }
                @keyframes marquee-third {
                    from { transform: translateX(0); }
                    to { transform: translateX(-33.33%); }
                }
                .client {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    opacity: 0.4;
                    filter: grayscale(1);
                    cursor: pointer;
                    transition: opacity 0.3s, filter 0.3s;
                }
                .client:hover { opacity: 1; filter: none; }
                .client-mark {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    border: 1.5px solid var(--fg);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                }
                .client-name { font-size: 1.5rem; font-weight: 700; }
                @media (max-width: 768px) {
                    .clients { padding: 3rem 0; }
                    .clients-track { gap: 3rem; }
                    .client-name { font-size: 1.25rem; }
                }
                "#}
            </style>
        </section>
    }
}
