use yew::prelude::*;
use yew_router::components::Link;

use crate::content::{content_for, Language};
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    let t = content_for(Language::En);
    let about = &t.about;

    html! {
        <section id="about" class="about">
            <div class="about-glow about-glow-teal"></div>
            <div class="about-glow about-glow-purple"></div>
            <div class="container about-inner">
                <div class="about-intro">
                    <div class="about-heading fade-up">
                        <div class="about-label">
                            <span class="about-spark">{"✦"}</span>
                            <span>{about.label}</span>
                        </div>
                        <h2>
                            {about.headline}
                            <span class="about-highlight">{about.highlight}</span>
                            {about.headline_suffix}
                        </h2>
                    </div>
                    <p class="about-manifesto fade-up">{about.manifesto}</p>
                </div>

                <div class="service-grid">
                    { for t.services.iter().enumerate().map(|(i, service)| html! {
                        <Link<Route> to={Route::Brief { id: service.brief_id.to_string() }} classes="service-link">
                            <div class="service-card fade-up" style={format!("animation-delay: {}ms;", 200 + i * 100)}>
                                <div class="service-title">
                                    <span class="service-icon">{service.icon}</span>
                                    <h3>{service.title}</h3>
                                </div>
                                <span class="service-arrow">{"→"}</span>
                            </div>
                        </Link<Route>>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .about { position: relative; padding: 6rem 0; overflow: hidden; }
                .about-glow {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(120px);
                    pointer-events: none;
                }
                .about-glow-teal { top: 10%; right: -10%; width: 500px; height: 500px; background: rgba(28, 207, 217, 0.05); }
                .about-glow-purple { bottom: 10%; left: -10%; width: 600px; height: 600px; background: rgba(168, 85, 247, 0.05); }
                .about-inner { position: relative; z-index: 10; }
                .about-intro {
                    display: flex;
                    gap: 3rem;
                    align-items: center;
                    margin-bottom: 4rem;
                }
                .about-heading { width: 42%; }
                .about-label {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                    color: var(--teal);
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.25em;
                    text-transform: uppercase;
                }
                .about-spark { font-size: 1.25rem; }
                .about-heading h2 {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 100;
                    line-height: 1.1;
                    margin: 0;
                }
                .about-highlight {
                    font-weight: 400;
                    background: linear-gradient(to right, var(--teal), #3b82f6);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .about-manifesto {
                    width: 50%;
                    font-size: 1.25rem;
                    font-weight: 300;
                    line-height: 1.7;
                    color: var(--muted);
                    animation-delay: 0.2s;
                }
                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .service-link { display: block; }
                .service-card {
                    height: 100%;
                    box-sizing: border-box;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 2rem;
                    border-radius: 2rem;
                    border: 1px solid transparent;
                    background: var(--pill);
                    backdrop-filter: blur(4px);
                    transition: all 0.3s;
                }
                .service-card:hover { border-color: var(--border); box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08); }
                .service-card:active { transform: scale(0.98); }
                .service-title { display: flex; align-items: center; gap: 1.25rem; }
                .service-icon { font-size: 1.5rem; color: var(--muted); transition: color 0.3s; }
                .service-title h3 { margin: 0; font-size: 1.25rem; font-weight: 400; line-height: 1.2; transition: color 0.3s; }
                .service-card:hover .service-icon, .service-card:hover h3 { color: var(--teal); }
                .service-arrow {
                    flex-shrink: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--border);
                    transition: all 0.3s;
                }
                .service-card:hover .service-arrow { background: var(--teal); color: #fff; transform: scale(1.1); }
                @media (max-width: 1024px) {
                    .about-intro { flex-direction: column; }
                    .about-heading, .about-manifesto { width: 100%; }
                    .service-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 640px) {
                    .service-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
