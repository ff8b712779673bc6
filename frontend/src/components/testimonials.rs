use yew::prelude::*;

use crate::content::{content_for, Language};

/// Repeats `items` back to back so a CSS marquee translating by
/// `-100% / copies` loops without a visible seam.
pub fn looped<T>(items: &[T], copies: usize) -> impl Iterator<Item = &T> {
    items.iter().cycle().take(items.len() * copies)
}

pub fn avatar_initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let t = content_for(Language::En);

    html! {
        <section id="testimonials" class="testimonials">
            <div class="testimonials-glow">
                <div class="glow-teal"></div>
                <div class="glow-purple"></div>
            </div>
            <div class="container testimonials-header fade-up">
                <h2 class="section-label">{t.testimonials.label}</h2>
                <h3 class="section-title">
                    {t.testimonials.title}{" "}
                    <span class="testimonials-accent">{t.testimonials.title_suffix}</span>
                </h3>
                <p>{t.testimonials_desc}</p>
            </div>

            <div class="marquee testimonials-marquee">
                <div class="marquee-fade marquee-fade-left"></div>
                <div class="marquee-fade marquee-fade-right"></div>
                <div class="testimonials-track">
                    { for looped(t.testimonial_items, 2).enumerate().map(|(i, item)| html! {
                        <div class="testimonial" key={format!("{}-{}", item.id, i)}>
                            <div class="testimonial-card">
                                <span class="testimonial-quote-mark">{"❝"}</span>
                                <p class="testimonial-text">{format!("\"{}\"", item.text)}</p>
                                <div class="testimonial-author">
                                    <div class="testimonial-avatar">
                                        <span>{avatar_initial(item.name)}</span>
                                    </div>
                                    <div>
                                        <h5>{item.name}</h5>
                                        <p>{item.role}</p>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .testimonials { position: relative; padding: 8rem 0; overflow: hidden; }
                .testimonials-glow { position: absolute; inset: 0; pointer-events: none; }
                .testimonials-glow div {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    filter: blur(120px);
                }
                .glow-teal { top: 25%; left: 25%; background: rgba(28, 207, 217, 0.1); }
                .glow-purple { bottom: 25%; right: 25%; background: rgba(168, 85, 247, 0.1); }
                .testimonials-header {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    max-width: 48rem;
                    margin-bottom: 4rem;
                }
                .testimonials-header .section-title { margin-bottom: 1.5rem; }
                .testimonials-accent {
                    background: linear-gradient(to right, var(--teal), #3b82f6);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent !important;
                }
                .testimonials-header p { color: var(--muted); font-weight: 300; font-size: 1.125rem; }
                .marquee {
                    position: relative;
                    width: 100%;
                    overflow: hidden;
                    z-index: 10;
                    animation: fade-in 1s ease both;
                }
                .marquee-fade {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 8rem;
                    z-index: 20;
                    pointer-events: none;
                }
                .marquee-fade-left { left: 0; background: linear-gradient(to right, var(--bg), transparent); }
                .marquee-fade-right { right: 0; background: linear-gradient(to left, var(--bg), transparent); }
                .testimonials-track {
                    display: flex;
                    gap: 1.5rem;
                    width: max-content;
                    padding: 0 1.5rem;
                    animation: marquee-half 80s linear infinite;
                    will-change: transform;
                }
                @keyframes marquee-half {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                .testimonial { width: 400px; flex-shrink: 0; }
                .testimonial-card {
                    position: relative;
                    height: 100%;
                    box-sizing: border-box;
                    padding: 2rem;
                    border-radius: 2rem;
                    background: var(--pill);
                    backdrop-filter: blur(24px);
                    border: 1px solid var(--border);
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    transition: border-color 0.3s;
                }
                .testimonial-card:hover { border-color: rgba(28, 207, 217, 0.5); }
                .testimonial-quote-mark {
                    position: absolute;
                    top: -1rem;
                    right: 0;
                    font-size: 8rem;
                    line-height: 1;
                    color: var(--border);
                    transform: rotate(12deg);
                }
                .testimonial-text {
                    position: relative;
                    flex-grow: 1;
                    margin: 0 0 2rem;
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.7;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid var(--border);
                }
                .testimonial-avatar {
                    width: 3rem;
                    height: 3rem;
                    box-sizing: border-box;
                    border-radius: 50%;
                    border: 1px solid var(--border);
                    padding: 2px;
                }
                .testimonial-avatar span {
                    width: 100%;
                    height: 100%;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--bg);
                    font-size: 1.125rem;
                    font-weight: 500;
                }
                .testimonial-author h5 { margin: 0; font-size: 1rem; font-weight: 500; }
                .testimonial-author p {
                    margin: 0.125rem 0 0;
                    color: var(--teal);
                    font-size: 0.75rem;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                }
                @media (max-width: 768px) {
                    .testimonial { width: 300px; }
                    .marquee-fade { width: 3rem; }
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
    fn loop_repeats_in_order() {
        let items = [1, 2, 3];
        let doubled: Vec<_> = looped(&items, 2).copied().collect();
        assert_eq!(doubled, vec![1, 2, 3, 1, 2, 3]);
        assert_eq!(looped(&[] as &[u8], 3).count(), 0);
    }

    #[test]
    fn avatar_uses_first_letter() {
        assert_eq!(avatar_initial("sara Ahmadi"), "S");
        assert_eq!(avatar_initial(""), "");
    }
}
