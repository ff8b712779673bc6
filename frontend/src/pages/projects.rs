use yew::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::content::{content_for, Language};

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let t = content_for(Language::En);

    html! {
        <div class="projects-page">
            <div class="container">
                <div class="projects-header">
                    <h1 class="fade-up">
                        {"Selected "}
                        <span>{"Works"}</span>
                    </h1>
                    <p>{t.projects_intro}</p>
                </div>
                <div class="projects-grid">
                    { for t.projects.iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard key={project.id} project={project.clone()} index={index} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .projects-page { min-height: 100vh; padding: 6rem 0 5rem; }
                .projects-header { text-align: center; margin: 2rem 0 4rem; }
                .projects-header h1 { margin: 0 0 1.5rem; font-size: clamp(3rem, 8vw, 4.5rem); font-weight: 100; }
                .projects-header h1 span { font-weight: 400; color: var(--muted); }
                .projects-header p {
                    max-width: 36rem;
                    margin: 0 auto;
                    color: var(--muted);
                    font-size: 1.125rem;
                    font-weight: 300;
                    animation: fade-in 0.6s ease 0.2s both;
                }
                .projects-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                @media (max-width: 1024px) {
                    .projects-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 768px) {
                    .projects-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}
