use yew::prelude::*;

use crate::content::{content_for, Language, ProcessStep};

const STEP_ICONS: &[&str] = &["☏", "⌕", "✎", "✓"];

fn step_icon(step: &ProcessStep) -> &'static str {
    let index = (step.number as usize).saturating_sub(1);
    STEP_ICONS.get(index).copied().unwrap_or("•")
}

#[function_component(Process)]
pub fn process() -> Html {
    let t = content_for(Language::En);

    html! {
        <section id="process" class="process">
            <div class="container">
                <div class="process-header fade-up">
                    <h2 class="section-label">{t.process.label}</h2>
                    <h3 class="section-title">
                        {t.process.title}{" "}
                        <span>{t.process.title_suffix}</span>
                    </h3>
                </div>

                <div class="process-grid">
                    { for t.steps.iter().enumerate().map(|(i, step)| html! {
                        <div class="process-step fade-up" key={step.number} style={format!("animation-delay: {}ms;", i * 100)}>
                            <div class="process-card">
                                <div class="process-number">{step.number}</div>
                                <div class="process-bar"></div>
                                <div class="process-body">
                                    <div class="process-icon">{step_icon(step)}</div>
                                    <h4>{step.title}</h4>
                                    <p>{step.desc}</p>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .process { position: relative; padding: 8rem 0; overflow: hidden; }
                .process-header { text-align: center; margin-bottom: 6rem; }
                .process-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .process-card {
                    position: relative;
                    height: 100%;
                    min-height: 300px;
                    box-sizing: border-box;
                    padding: 2rem;
                    border-radius: 2.5rem;
                    background: var(--card);
                    border: 1px solid var(--border);
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    transition: all 0.5s;
                }
                .process-step:hover .process-card { transform: translateY(-0.5rem); box-shadow: 0 25px 50px rgba(0, 0, 0, 0.12); }
                .process-number {
                    position: absolute;
                    right: -1rem;
                    bottom: -2.5rem;
                    font-size: 140px;
                    font-weight: 700;
                    line-height: 1;
                    color: var(--border);
                    pointer-events: none;
                    transition: transform 0.7s;
                }
                .process-step:hover .process-number { transform: scale(1.1) translateY(-1rem); }
                .process-bar {
                    width: 3rem;
                    height: 4px;
                    border-radius: 9999px;
                    background: linear-gradient(to right, var(--teal), #3b82f6);
                    margin-bottom: 2rem;
                }
                .process-body { position: relative; z-index: 10; }
                .process-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    background: var(--border);
                    margin-bottom: 1.5rem;
                    transition: all 0.3s;
                }
                .process-step:hover .process-icon { background: var(--teal); color: #fff; }
                .process-body h4 { margin: 0 0 1rem; font-size: 1.5rem; font-weight: 500; }
                .process-body p { margin: 0; color: var(--muted); font-size: 0.875rem; font-weight: 300; line-height: 1.7; }
                @media (max-width: 1024px) {
                    .process-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 640px) {
                    .process-grid { grid-template-columns: 1fr; }
                    .process-card { min-height: 220px; }
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
    fn every_step_has_its_own_icon() {
        let t = content_for(Language::En);
        let icons: Vec<_> = t.steps.iter().map(step_icon).collect();
        assert_eq!(icons, STEP_ICONS);
    }

    #[test]
    fn out_of_range_step_gets_bullet() {
        let step = ProcessStep { number: 9, title: "", desc: "" };
        assert_eq!(step_icon(&step), "•");
    }
}
