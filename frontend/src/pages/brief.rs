use yew::prelude::*;
use yew_router::prelude::*;
use log::warn;

use crate::briefs::get_brief;
use crate::components::brief_form::BriefForm;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BriefPageProps {
    pub id: String,
}

#[function_component(BriefPage)]
pub fn brief_page(props: &BriefPageProps) -> Html {
    let Some(config) = get_brief(&props.id) else {
        warn!("No brief named {}, redirecting home", props.id);
        return html! { <Redirect<Route> to={Route::Home} /> };
    };

    html! {
        <div class="brief-page">
            <div class="brief-page-bg">
                <div class="brief-glow-teal"></div>
                <div class="brief-glow-purple"></div>
            </div>
            <div class="container brief-page-inner">
                <Link<Route> to={Route::Home} classes="brief-page-back">
                    <span class="brief-page-back-icon">{"‹"}</span>
                    <span>{"Back to Services"}</span>
                </Link<Route>>

                <div class="brief-page-header fade-up">
                    <h1>{config.title}</h1>
                    <p>{config.description}</p>
                </div>

                <div class="brief-page-panel">
                    <BriefForm config={config} />
                </div>
            </div>
            <style>
                {r#"
                .brief-page { min-height: 100vh; width: 100%; padding: 6rem 1.5rem 5rem; box-sizing: border-box; }
                .brief-page-bg { position: fixed; inset: 0; pointer-events: none; overflow: hidden; }
                .brief-page-bg div { position: absolute; border-radius: 50%; filter: blur(100px); }
                .brief-glow-teal { top: 0; right: 0; width: 40vw; height: 40vw; background: rgba(28, 207, 217, 0.05); }
                .brief-glow-purple { bottom: 0; left: 0; width: 30vw; height: 30vw; background: rgba(168, 85, 247, 0.05); }
                .brief-page-inner { position: relative; z-index: 10; max-width: 48rem; }
                .brief-page-back {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                    color: var(--muted);
                    font-size: 0.875rem;
                    font-weight: 500;
                    transition: color 0.3s;
                }
                .brief-page-back:hover { color: var(--teal); }
                .brief-page-back-icon {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--card);
                    border: 1px solid var(--border);
                }
                .brief-page-back:hover .brief-page-back-icon { border-color: var(--teal); }
                .brief-page-header { text-align: center; margin-bottom: 2.5rem; }
                .brief-page-header h1 { margin: 0 0 0.75rem; font-size: clamp(1.875rem, 5vw, 3rem); font-weight: 100; }
                .brief-page-header p {
                    max-width: 42rem;
                    margin: 0 auto;
                    color: var(--muted);
                    font-size: 1.125rem;
                    font-weight: 300;
                }
                .brief-page-panel {
                    padding: 2.5rem;
                    border-radius: 2rem;
                    background: var(--pill);
                    backdrop-filter: blur(16px);
                    border: 1px solid var(--border);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                }
                @media (max-width: 640px) {
                    .brief-page-panel { padding: 1.5rem; }
                }
                "#}
            </style>
        </div>
    }
}
