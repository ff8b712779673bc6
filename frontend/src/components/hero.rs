use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::components::Link;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config;
use crate::content::{content_for, Language};
use crate::Route;

/// Maximum card rotation either way, in degrees.
const MAX_TILT_DEG: f64 = 9.0;

/// Position in the featured slider. Wraps in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideIndex {
    current: usize,
    len: usize,
}

impl SlideIndex {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(self) -> usize {
        self.current
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { current: (self.current + 1) % self.len, ..self }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { current: (self.current + self.len - 1) % self.len, ..self }
    }

    pub fn counter(self) -> String {
        format!("{:02} — {:02}", self.current + 1, self.len)
    }

    pub fn upcoming(self) -> usize {
        self.next().current
    }
}

/// 3D tilt of the slider card, derived from where the pointer sits over it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub glare_x: f64,
    pub glare_y: f64,
}

impl Default for Tilt {
    fn default() -> Self {
        Self { rotate_x: 0.0, rotate_y: 0.0, glare_x: 50.0, glare_y: 50.0 }
    }
}

impl Tilt {
    pub fn from_pointer(offset_x: f64, offset_y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        let x = (offset_x / width - 0.5).clamp(-0.5, 0.5);
        let y = (offset_y / height - 0.5).clamp(-0.5, 0.5);
        Self {
            rotate_x: -y * 2.0 * MAX_TILT_DEG,
            rotate_y: x * 2.0 * MAX_TILT_DEG,
            glare_x: (x + 0.5) * 100.0,
            glare_y: (y + 0.5) * 100.0,
        }
    }

    pub fn card_style(&self) -> String {
        format!(
            "transform: rotateX({:.2}deg) rotateY({:.2}deg);",
            self.rotate_x, self.rotate_y
        )
    }

    pub fn glare_style(&self) -> String {
        format!("background-position: {:.1}% {:.1}%;", self.glare_x, self.glare_y)
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let t = content_for(Language::En);
    let slides = t.featured_projects();
    let index = use_state(|| SlideIndex::new(slides.len()));
    let autoplay = use_state(|| true);
    let tilt = use_state(Tilt::default);

    {
        let index = index.clone();
        let millis = if *autoplay { config::HERO_AUTOPLAY_MS } else { 0 };
        use_interval(move || index.set(index.next()), millis);
    }

    let on_next = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set(index.next()))
    };
    let on_prev = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set(index.prev()))
    };

    let on_mouse_move = {
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(card) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let rect = card.get_bounding_client_rect();
            tilt.set(Tilt::from_pointer(
                e.client_x() as f64 - rect.left(),
                e.client_y() as f64 - rect.top(),
                rect.width(),
                rect.height(),
            ));
        })
    };
    let on_mouse_enter = {
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| autoplay.set(false))
    };
    let on_mouse_leave = {
        let autoplay = autoplay.clone();
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| {
            tilt.set(Tilt::default());
            autoplay.set(true);
        })
    };

    let Some(project) = slides.get(index.current()) else {
        return html! {};
    };
    let upcoming = &slides[index.upcoming()];
    let slide_key = index.current().to_string();

    html! {
        <section id="home" class="hero">
            <div class="hero-mobile-slot">
                <div class="hero-mobile-bg" key={format!("bg-{}", slide_key)}>
                    <img src={project.image} alt="Background" loading="eager" />
                    <div class="hero-mobile-fade-top"></div>
                    <div class="hero-mobile-fade-bottom"></div>
                </div>
            </div>
            <img class="hero-preload" src={upcoming.image} alt="" aria-hidden="true" />

            <div class="container hero-layout">
                <div class="hero-text">
                    <div class="hero-counter">
                        <span class="hero-featured">{t.hero.featured}</span>
                        <span class="hero-rule"></span>
                        <span class="hero-count">{index.counter()}</span>
                    </div>

                    <div class="hero-copy-slot">
                        <div class="hero-copy" key={format!("text-{}", slide_key)}>
                            <h1>
                                { for project.title_lines().enumerate().map(|(i, line)| html! {
                                    <span class={if i == 0 { "hero-thin" } else { "hero-bold" }}>{line}</span>
                                }) }
                            </h1>
                            <p>{project.description}</p>
                            <div class="hero-tags">
                                { for project.tags.iter().take(2).map(|tag| html! { <span>{*tag}</span> }) }
                            </div>
                        </div>
                    </div>

                    <div class="hero-actions">
                        <Link<Route> to={Route::Project { id: project.id.to_string() }} classes="hero-cta">
                            <span>{t.hero.view_case}</span>
                            <span class="hero-cta-arrow">{"→"}</span>
                        </Link<Route>>
                        <div class="hero-arrows">
                            <button aria-label="Previous Slide" onclick={on_prev}>{"‹"}</button>
                            <button aria-label="Next Slide" onclick={on_next}>{"›"}</button>
                        </div>
                    </div>
                </div>

                <div class="hero-stage"
                    onmousemove={on_mouse_move}
                    onmouseenter={on_mouse_enter}
                    onmouseleave={on_mouse_leave}>
                    <div class="hero-frame">
                        <div class="hero-card" key={format!("card-{}", slide_key)} style={tilt.card_style()}>
                            <img class="hero-shadow" src={project.image} alt="" />
                            <div class="hero-card-face">
                                <div class="hero-glare" style={tilt.glare_style()}></div>
                                <img class="hero-zoom" src={project.image} alt={project.flat_title()} loading="eager" />
                            </div>
                        </div>
                        <div class="hero-client" key={format!("client-{}", slide_key)}>
                            <p>{t.hero.client}</p>
                            <h3>{project.client}</h3>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    overflow: hidden;
                    padding-top: 6rem;
                }
                .hero-preload { display: none; }
                .hero-mobile-slot { display: none; }
                .hero-layout {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    align-items: center;
                    gap: 5rem;
                }
                .hero-text { width: 42%; display: flex; flex-direction: column; gap: 2.5rem; }
                .hero-counter { display: flex; align-items: center; gap: 0.75rem; }
                .hero-featured {
                    color: var(--teal);
                    font-weight: 700;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(28, 207, 217, 0.1);
                    border: 1px solid rgba(28, 207, 217, 0.2);
                }
                .hero-rule { width: 3rem; height: 1px; background: var(--border); }
                .hero-count { font-family: monospace; color: var(--muted); font-size: 0.875rem; }
                .hero-copy { min-height: 400px; display: flex; flex-direction: column; justify-content: center; }
                .hero-copy > * { animation: fade-up 0.5s cubic-bezier(0.25, 0.4, 0.25, 1) both; }
                .hero-copy > *:nth-child(2) { animation-delay: 0.1s; }
                .hero-copy > *:nth-child(3) { animation-delay: 0.2s; }
                .hero-copy h1 {
                    font-size: clamp(3rem, 7vw, 6rem);
                    line-height: 1.05;
                    letter-spacing: -0.02em;
                    margin: 0 0 1.5rem;
                }
                .hero-thin { display: block; font-weight: 100; }
                .hero-bold { display: block; font-weight: 600; }
                .hero-copy p {
                    font-weight: 300;
                    color: var(--muted);
                    max-width: 28rem;
                    line-height: 1.7;
                    border-inline-start: 2px solid rgba(28, 207, 217, 0.5);
                    padding-inline-start: 1.5rem;
                    margin: 0 0 2rem;
                }
                .hero-tags { display: flex; gap: 0.5rem; }
                .hero-tags span {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    border: 1px solid var(--border);
                    font-size: 0.75rem;
                    font-weight: 500;
                    backdrop-filter: blur(12px);
                }
                .hero-actions { display: flex; align-items: center; gap: 2rem; }
                .hero-cta {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    background: var(--fg);
                    color: var(--bg);
                    font-weight: 500;
                    transition: all 0.3s;
                }
                .hero-cta:hover { background: var(--teal); }
                .hero-cta:hover .hero-cta-arrow { transform: translateX(4px); }
                .hero-cta-arrow { transition: transform 0.3s; }
                .hero-arrows { display: flex; gap: 1rem; }
                .hero-arrows button {
                    width: 3.25rem;
                    height: 3.25rem;
                    border-radius: 50%;
                    border: 1px solid var(--border);
                    background: var(--pill);
                    color: var(--fg);
                    font-size: 1.5rem;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .hero-arrows button:hover { background: var(--teal); color: #fff; border-color: transparent; }
                .hero-arrows button:active { transform: scale(0.95); }
                .hero-stage {
                    width: 58%;
                    display: flex;
                    justify-content: center;
                    perspective: 1200px;
                }
                .hero-frame { position: relative; width: 100%; max-width: 600px; aspect-ratio: 1; }
                .hero-card {
                    position: absolute;
                    inset: 0;
                    transform-style: preserve-3d;
                    transition: transform 0.2s ease-out;
                    animation: hero-card-in 0.6s cubic-bezier(0.25, 1, 0.5, 1) both;
                }
                @keyframes hero-card-in {
                    from { opacity: 0; scale: 0.85; }
                    to { opacity: 1; scale: 1; }
                }
                .hero-shadow {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border-radius: 3rem;
                    filter: blur(60px) saturate(2);
                    opacity: 0.6;
                    z-index: -1;
                }
                .hero-card-face {
                    position: absolute;
                    inset: 0;
                    border-radius: 3rem;
                    overflow: hidden;
                    box-shadow: 0 30px 60px rgba(0, 0, 0, 0.3);
                    backface-visibility: hidden;
                }
                .hero-glare {
                    position: absolute;
                    inset: 0;
                    z-index: 2;
                    pointer-events: none;
                    opacity: 0.5;
                    background-image: linear-gradient(to top right, rgba(255, 255, 255, 0.2), transparent 60%);
                    background-size: 200% 200%;
                }
                .hero-zoom {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    animation: hero-zoom 7s linear both;
                }
                @keyframes hero-zoom {
                    from { transform: scale(1); }
                    to { transform: scale(1.1); }
                }
                .hero-client {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    z-index: 4;
                    padding: 2.5rem;
                    border-radius: 0 0 3rem 3rem;
                    pointer-events: none;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.3) 60%, transparent);
                    animation: fade-in 0.6s ease-in-out both;
                }
                .hero-client p {
                    margin: 0 0 0.5rem;
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                }
                .hero-client h3 { margin: 0; color: #fff; font-size: 1.875rem; font-weight: 300; }
                @media (max-width: 768px) {
                    .hero-stage { display: none; }
                    .hero-text { width: 100%; gap: 1.5rem; }
                    .hero-counter { display: none; }
                    .hero-layout { min-height: 100vh; align-items: flex-end; padding-bottom: 2rem; }
                    .hero-copy { min-height: 0; }
                    .hero-mobile-slot { display: block; }
                    .hero-mobile-bg {
                        position: absolute;
                        inset: 0;
                        animation: fade-in 0.5s linear both;
                    }
                    .hero-mobile-bg img { width: 100%; height: 100%; object-fit: cover; animation: hero-zoom 7s linear both; }
                    .hero-mobile-fade-top {
                        position: absolute;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 16rem;
                        background: linear-gradient(to bottom, var(--bg), transparent);
                    }
                    .hero-mobile-fade-bottom {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        height: 65vh;
                        background: linear-gradient(to top, var(--bg), var(--bg) 30%, transparent);
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_wrap_both_ways() {
        let start = SlideIndex::new(4);
        assert_eq!(start.prev().current(), 3);
        assert_eq!(start.next().next().next().next(), start);
        assert_eq!(start.prev().next(), start);
    }

    #[test]
    fn empty_slider_stays_put() {
        let empty = SlideIndex::new(0);
        assert_eq!(empty.next(), empty);
        assert_eq!(empty.prev(), empty);
    }

    #[test]
    fn counter_is_zero_padded() {
        assert_eq!(SlideIndex::new(4).counter(), "01 — 04");
        assert_eq!(SlideIndex::new(4).prev().counter(), "04 — 04");
    }

    #[test]
    fn upcoming_is_next_slide() {
        assert_eq!(SlideIndex::new(4).prev().upcoming(), 0);
    }

    #[test]
    fn pointer_in_centre_is_flat() {
        assert_eq!(Tilt::from_pointer(50.0, 50.0, 100.0, 100.0), Tilt::default());
    }

    #[test]
    fn corners_reach_max_tilt() {
        let top_left = Tilt::from_pointer(0.0, 0.0, 200.0, 100.0);
        assert_eq!(top_left.rotate_x, MAX_TILT_DEG);
        assert_eq!(top_left.rotate_y, -MAX_TILT_DEG);
        assert_eq!((top_left.glare_x, top_left.glare_y), (0.0, 0.0));

        let outside = Tilt::from_pointer(500.0, 500.0, 200.0, 100.0);
        assert_eq!(outside.rotate_x, -MAX_TILT_DEG);
        assert_eq!(outside.rotate_y, MAX_TILT_DEG);
    }

    #[test]
    fn zero_sized_card_is_flat() {
        assert_eq!(Tilt::from_pointer(10.0, 10.0, 0.0, 0.0), Tilt::default());
    }
}
