use yew::prelude::*;
use yew_router::components::Link;

use crate::components::project_card::ProjectCard;
use crate::content::{content_for, Language};
use crate::Route;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let t = content_for(Language::En);

    html! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <div class="portfolio-header">
                    <div>
                        <h2 class="section-label">{t.portfolio.label}</h2>
                        <h3 class="section-title">
                            {t.portfolio.title}
                            <br />
                            <span>{t.portfolio.title_suffix}</span>
                        </h3>
                    </div>
                    <Link<Route> to={Route::Projects} classes="portfolio-all">
                        {t.view_all}
                    </Link<Route>>
                </div>

                <div class="project-grid">
                    { for t.projects.iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard key={project.id} project={project.clone()} index={index} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .portfolio { position: relative; padding: 6rem 0; }
                .portfolio-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 1.5rem;
                    margin-bottom: 5rem;
                }
                .portfolio-all {
                    display: inline-block;
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    border: 1px solid var(--border);
                    background: var(--card);
                    font-size: 0.875rem;
                    font-weight: 500;
                    transition: all 0.3s;
                }
                .portfolio-all:hover { background: var(--fg); color: var(--bg); }
                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                @media (max-width: 1024px) {
                    .project-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 768px) {
                    .portfolio-header { flex-direction: column; align-items: flex-start; }
                    .project-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
