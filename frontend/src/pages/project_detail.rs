use yew::prelude::*;
use yew_router::prelude::*;
use log::warn;

use crate::chrome::{ChromeAction, ChromeContext};
use crate::content::{content_for, Content, Language, Project};
use crate::Route;

const SIMILAR_LIMIT: usize = 2;

/// Resolves a `/project/:id` segment. Non-numeric and unknown ids give `None`.
pub fn find_project<'a>(content: &'a Content, id: &str) -> Option<&'a Project> {
    id.parse::<u32>().ok().and_then(|id| content.project(id))
}

/// Index reached by stepping through a gallery of `len` images, wrapping at both ends.
pub fn gallery_step(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub id: String,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    let t = content_for(Language::En);
    let viewer = use_state(|| None::<usize>);
    let chrome = use_context::<ChromeContext>();

    {
        let viewer = viewer.clone();
        use_effect_with_deps(
            move |_| {
                viewer.set(None);
                || ()
            },
            props.id.clone(),
        );
    }

    // The navbar and page scroll are given back when the viewer closes or the page goes away.
    use_effect_with_deps(
        move |open: &bool| {
            let open = *open;
            if open {
                if let Some(chrome) = chrome.as_ref() {
                    chrome.dispatch(ChromeAction::Hide);
                }
                crate::set_body_scroll_locked(true);
            }
            move || {
                if open {
                    if let Some(chrome) = chrome.as_ref() {
                        chrome.dispatch(ChromeAction::Show);
                    }
                    crate::set_body_scroll_locked(false);
                }
            }
        },
        viewer.is_some(),
    );

    let Some(project) = find_project(t, &props.id) else {
        warn!("No project with id {}, redirecting to projects", props.id);
        return html! { <Redirect<Route> to={Route::Projects} /> };
    };
    let Some((prev, next)) = t.neighbours(project.id) else {
        return html! { <Redirect<Route> to={Route::Projects} /> };
    };
    let similar = t.similar_projects(project, SIMILAR_LIMIT);
    let gallery_len = project.gallery.len();

    let open_at = |index: usize| {
        let viewer = viewer.clone();
        Callback::from(move |_: MouseEvent| viewer.set(Some(index)))
    };
    let on_close = {
        let viewer = viewer.clone();
        Callback::from(move |_: MouseEvent| viewer.set(None))
    };
    let step = |forward: bool| {
        let viewer = viewer.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if let Some(current) = *viewer {
                viewer.set(Some(gallery_step(current, gallery_len, forward)));
            }
        })
    };

    html! {
        <div class="project-detail">
            <div class="project-hero">
                <img class="project-hero-image" src={project.image} alt={project.flat_title()} />
                <div class="project-hero-fade"></div>
                <div class="project-hero-text">
                    <span class="project-category">{project.category}</span>
                    <h1>
                        { for project.title_lines().enumerate().map(|(i, line)| html! {
                            <span class={if i == 0 { "hero-thin" } else { "hero-bold" }}>{line}</span>
                        }) }
                    </h1>
                </div>
            </div>

            <div class="container project-body-wrap">
                <div class="project-body">
                    <div class="project-info">
                        <div class="project-meta">
                            <div>
                                <h3>{"Client"}</h3>
                                <p class="project-client">{project.client}</p>
                            </div>
                            <div>
                                <h3>{"Services"}</h3>
                                <div class="project-tags">
                                    { for project.tags.iter().map(|tag| html! { <span>{*tag}</span> }) }
                                </div>
                            </div>
                            if let Some(link) = project.link {
                                <div>
                                    <h3>{"Link"}</h3>
                                    <a href={link} target="_blank" rel="noopener noreferrer" class="project-live">
                                        {"Live Website ↗"}
                                    </a>
                                </div>
                            }
                        </div>
                        <div class="project-story">
                            <h2>{project.description}</h2>
                            <p>{project.full_description}</p>
                        </div>
                    </div>

                    if gallery_len > 0 {
                        <div class="project-gallery">
                            { for project.gallery.iter().enumerate().map(|(i, image)| html! {
                                <button class="project-shot fade-up" key={i} onclick={open_at(i)}>
                                    <img src={*image} alt={format!("{} view {}", project.flat_title(), i + 1)} loading="lazy" />
                                </button>
                            }) }
                        </div>
                    }

                    <div class="project-pager">
                        <Link<Route> to={Route::Project { id: prev.id.to_string() }} classes="project-pager-link">
                            <span class="project-pager-label">{"‹ Previous Project"}</span>
                            <span class="project-pager-title">{prev.flat_title()}</span>
                        </Link<Route>>
                        <Link<Route> to={Route::Project { id: next.id.to_string() }} classes="project-pager-link project-pager-next">
                            <span class="project-pager-label">{"Next Project ›"}</span>
                            <span class="project-pager-title">{next.flat_title()}</span>
                        </Link<Route>>
                    </div>
                </div>
            </div>

            if !similar.is_empty() {
                <div class="container project-similar">
                    <h3>{"Similar Projects"}</h3>
                    <div class="project-similar-grid">
                        { for similar.iter().map(|p| html! {
                            <Link<Route> to={Route::Project { id: p.id.to_string() }} classes="project-similar-card">
                                <img src={p.image} alt={p.flat_title()} />
                                <div class="project-similar-shade"></div>
                                <div class="project-similar-text">
                                    <h4>{p.flat_title()}</h4>
                                    <p>{p.category}</p>
                                </div>
                            </Link<Route>>
                        }) }
                    </div>
                </div>
            }

            if let Some(index) = *viewer {
                <div class="gallery-viewer" onclick={on_close.clone()}>
                    <button class="gallery-close" aria-label="Close" onclick={on_close}>{"✕"}</button>
                    if gallery_len > 1 {
                        <button class="gallery-nav gallery-prev" aria-label="Previous Image" onclick={step(false)}>{"‹"}</button>
                        <button class="gallery-nav gallery-next" aria-label="Next Image" onclick={step(true)}>{"›"}</button>
                    }
                    <img
                        src={project.gallery.get(index).copied().unwrap_or(project.image)}
                        alt={format!("{} view {}", project.flat_title(), index + 1)}
                        onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    />
                    <span class="gallery-count">{format!("{} / {}", index + 1, gallery_len)}</span>
                </div>
            }

            <style>
                {r#"
                .project-detail { min-height: 100vh; width: 100%; padding-bottom: 5rem; }
                .project-hero { position: relative; width: 100%; height: 80vh; overflow: hidden; }
                .project-hero-image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    animation: project-settle 1.5s ease-out both;
                }
                @keyframes project-settle {
                    from { transform: scale(1.1); }
                    to { transform: scale(1); }
                }
                .project-hero-fade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, var(--bg), rgba(0, 0, 0, 0) 70%);
                }
                .project-hero-text {
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    z-index: 10;
                    max-width: 56rem;
                    padding: 5rem;
                    animation: fade-up 0.6s ease-out 0.3s both;
                }
                .project-category {
                    display: inline-block;
                    margin-bottom: 1.5rem;
                    padding: 0.375rem 1rem;
                    border-radius: 9999px;
                    background: rgba(28, 207, 217, 0.9);
                    color: #fff;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .project-hero-text h1 {
                    margin: 0;
                    font-size: clamp(3rem, 8vw, 6rem);
                    line-height: 1.05;
                    letter-spacing: -0.02em;
                }
                .project-hero-text .hero-thin { display: block; font-weight: 100; }
                .project-hero-text .hero-bold { display: block; font-weight: 600; }
                .project-body-wrap { position: relative; z-index: 10; margin-top: -5rem; }
                .project-body {
                    padding: 4rem;
                    border-radius: 2.5rem;
                    background: var(--card);
                    border: 1px solid var(--border);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                }
                .project-info { display: flex; gap: 4rem; margin-bottom: 5rem; }
                .project-meta { width: 25%; display: flex; flex-direction: column; gap: 2rem; }
                .project-meta h3 {
                    margin: 0 0 0.5rem;
                    color: var(--muted);
                    font-size: 0.75rem;
                    font-weight: 400;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                .project-client { margin: 0; font-size: 1.125rem; font-weight: 500; }
                .project-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                .project-tags span {
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    border: 1px solid var(--border);
                    color: var(--muted);
                    font-size: 0.875rem;
                }
                .project-live { color: var(--teal); }
                .project-live:hover { text-decoration: underline; text-underline-offset: 4px; }
                .project-story { width: 75%; }
                .project-story h2 { margin: 0 0 2rem; font-size: clamp(1.5rem, 3vw, 2.25rem); font-weight: 300; line-height: 1.6; }
                .project-story p { margin: 0; color: var(--muted); font-size: 1.125rem; font-weight: 300; line-height: 2; }
                .project-gallery { display: flex; flex-direction: column; gap: 3rem; margin-bottom: 5rem; }
                .project-shot {
                    padding: 0;
                    border: 1px solid var(--border);
                    border-radius: 1.5rem;
                    overflow: hidden;
                    background: none;
                    cursor: zoom-in;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
                }
                .project-shot img { display: block; width: 100%; height: auto; }
                .project-pager {
                    display: flex;
                    justify-content: space-between;
                    gap: 1.5rem;
                    padding-top: 3rem;
                    border-top: 1px solid var(--border);
                }
                .project-pager-link { width: 50%; display: flex; flex-direction: column; align-items: flex-start; gap: 0.5rem; }
                .project-pager-next { align-items: flex-end; text-align: right; }
                .project-pager-label {
                    color: var(--muted);
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    transition: color 0.3s;
                }
                .project-pager-link:hover .project-pager-label { color: var(--teal); }
                .project-pager-title { font-size: 1.5rem; font-weight: 300; line-height: 1.2; }
                .project-pager-link:hover .project-pager-title { text-decoration: underline; text-underline-offset: 4px; }
                .project-similar { margin-top: 6rem; }
                .project-similar h3 { margin: 0 0 2.5rem; padding-left: 0.5rem; font-size: 1.5rem; font-weight: 300; }
                .project-similar-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
                .project-similar-card { position: relative; display: block; aspect-ratio: 4 / 3; border-radius: 2rem; overflow: hidden; }
                .project-similar-card img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s; }
                .project-similar-card:hover img { transform: scale(1.1); }
                .project-similar-shade { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.4); transition: background 0.5s; }
                .project-similar-card:hover .project-similar-shade { background: rgba(0, 0, 0, 0.2); }
                .project-similar-text { position: absolute; left: 0; bottom: 0; padding: 2rem; color: #fff; }
                .project-similar-text h4 { margin: 0 0 0.25rem; font-size: 1.5rem; font-weight: 500; }
                .project-similar-text p { margin: 0; color: rgba(255, 255, 255, 0.7); font-size: 0.875rem; }
                .gallery-viewer {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.92);
                    backdrop-filter: blur(8px);
                    animation: fade-in 0.3s ease both;
                }
                .gallery-viewer img {
                    max-width: 90vw;
                    max-height: 85vh;
                    object-fit: contain;
                    border-radius: 1rem;
                    cursor: default;
                }
                .gallery-close, .gallery-nav {
                    position: absolute;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    font-size: 1.25rem;
                    cursor: pointer;
                    transition: background 0.3s;
                }
                .gallery-close:hover, .gallery-nav:hover { background: var(--teal); }
                .gallery-close { top: 1.5rem; right: 1.5rem; }
                .gallery-nav { top: 50%; transform: translateY(-50%); font-size: 1.75rem; }
                .gallery-prev { left: 1.5rem; }
                .gallery-next { right: 1.5rem; }
                .gallery-count {
                    position: absolute;
                    bottom: 1.5rem;
                    color: rgba(255, 255, 255, 0.7);
                    font-family: monospace;
                    font-size: 0.875rem;
                }
                @media (max-width: 1024px) {
                    .project-info { flex-direction: column; gap: 2rem; }
                    .project-meta, .project-story { width: 100%; }
                }
                @media (max-width: 768px) {
                    .project-hero { height: 60vh; }
                    .project-hero-text { padding: 1.5rem; }
                    .project-body { padding: 2rem; }
                    .project-body-wrap { margin-top: -2.5rem; }
                    .project-pager-title { font-size: 0.875rem; }
                    .project-similar-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_known_ids_resolve() {
        let t = content_for(Language::En);
        assert_eq!(find_project(t, "3").map(|p| p.id), Some(3));
    }

    #[test]
    fn bad_ids_fall_through() {
        let t = content_for(Language::En);
        assert!(find_project(t, "42").is_none());
        assert!(find_project(t, "royal-academy").is_none());
        assert!(find_project(t, "").is_none());
        assert!(find_project(t, "-1").is_none());
    }

    #[test]
    fn gallery_wraps_both_ways() {
        assert_eq!(gallery_step(0, 3, false), 2);
        assert_eq!(gallery_step(2, 3, true), 0);
        assert_eq!(gallery_step(1, 3, true), 2);
        assert_eq!(gallery_step(0, 1, true), 0);
        assert_eq!(gallery_step(0, 0, true), 0);
    }
}
