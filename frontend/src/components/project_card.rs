use yew::prelude::*;
use yew_router::components::Link;

use crate::content::Project;
use crate::Route;

const CARD_GRADIENTS: &[&str] = &[
    "rgba(249, 115, 22, 0.85)",
    "rgba(59, 130, 246, 0.85)",
    "rgba(120, 113, 108, 0.85)",
    "rgba(20, 184, 166, 0.85)",
    "rgba(99, 102, 241, 0.85)",
    "rgba(234, 179, 8, 0.85)",
];

/// Overlay tint for the card at `index`; cycles through the palette.
pub fn card_gradient(index: usize) -> &'static str {
    CARD_GRADIENTS[index % CARD_GRADIENTS.len()]
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub index: usize,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let ProjectCardProps { project, index } = props;
    let tint = format!(
        "background: linear-gradient(to top, {} 0%, transparent 70%);",
        card_gradient(*index)
    );
    let delay = format!("animation-delay: {}ms;", (index % 3) * 100);

    html! {
        <Link<Route> to={Route::Project { id: project.id.to_string() }} classes="project-card-link">
            <div class="project-card fade-up" style={delay}>
                <img src={project.image} alt={project.flat_title()} loading="lazy" />
                <div class="project-card-tint" style={tint}></div>
                if project.gallery.len() > 1 {
                    <span class="project-card-gallery">{format!("▣ {}", project.gallery.len())}</span>
                }
                <span class="project-card-arrow">{"↗"}</span>
                <div class="project-card-body">
                    <span class="project-card-category">{project.category}</span>
                    <h4>{project.flat_title()}</h4>
                    <p>{project.description}</p>
                </div>
            </div>
            <style>
                {r#"
                .project-card {
                    position: relative;
                    aspect-ratio: 4 / 5;
                    border-radius: 2rem;
                    overflow: hidden;
                    border: 1px solid var(--border);
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                }
                .project-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .project-card:hover img { transform: scale(1.1); }
                .project-card-tint {
                    position: absolute;
                    inset: 0;
                    opacity: 0.6;
                    transition: opacity 0.5s ease;
                }
                .project-card:hover .project-card-tint { opacity: 0.9; }
                .project-card-gallery, .project-card-arrow {
                    position: absolute;
                    top: 1.5rem;
                    padding: 0.35rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(8px);
                    color: #fff;
                    font-size: 0.75rem;
                }
                .project-card-gallery { left: 1.5rem; }
                .project-card-arrow {
                    right: 1.5rem;
                    opacity: 0;
                    transform: translateY(8px);
                    transition: all 0.3s ease;
                }
                .project-card:hover .project-card-arrow { opacity: 1; transform: translateY(0); }
                .project-card-body {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 2rem;
                    color: #fff;
                }
                .project-card-category {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 0.625rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    margin-bottom: 0.75rem;
                }
                .project-card-body h4 { font-size: 1.75rem; font-weight: 500; margin: 0 0 0.5rem; }
                .project-card-body p { margin: 0; color: rgba(255, 255, 255, 0.8); font-weight: 300; }
                "#}
            </style>
        </Link<Route>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradients_cycle() {
        assert_eq!(card_gradient(0), card_gradient(6));
        assert_ne!(card_gradient(0), card_gradient(1));
    }
}
