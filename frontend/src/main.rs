use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use gloo_timers::callback::Timeout;

mod config;
mod content;
mod briefs;
mod theme;
mod chrome;
mod forms {
    pub mod contact;
    pub mod flow;
    pub mod submit;
    pub mod validation;
}
mod components {
    pub mod about;
    pub mod brief_form;
    pub mod clients;
    pub mod contact;
    pub mod hero;
    pub mod portfolio;
    pub mod process;
    pub mod project_card;
    pub mod testimonials;
}
mod pages {
    pub mod brief;
    pub mod home;
    pub mod project_detail;
    pub mod projects;
}

use chrome::{ChromeContext, ChromeProvider};
use content::{content_for, Language};
use pages::{
    brief::BriefPage,
    home::Home,
    project_detail::ProjectDetail,
    projects::ProjectsPage,
};
use theme::{init_theme, local_hour, toggle_theme, DocumentRoot, LocalThemeStore};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/brief/:id")]
    Brief { id: String },
    #[at("/project/:id")]
    Project { id: String },
    #[at("/projects")]
    Projects,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Brief { id } => {
            info!("Rendering Brief page for {}", id);
            html! { <BriefPage id={id} /> }
        },
        Route::Project { id } => {
            info!("Rendering Project page for {}", id);
            html! { <ProjectDetail id={id} /> }
        },
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <ProjectsPage /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        },
    }
}

/// The compact pill kicks in once the page has scrolled past the threshold.
pub fn is_compact(scroll_y: f64) -> bool {
    scroll_y > config::NAV_COMPACT_THRESHOLD
}

/// Smooth-scrolls to an in-page section if it is rendered.
pub fn scroll_to_section(anchor: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(anchor))
    else {
        warn!("No section #{} to scroll to", anchor);
        return;
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Sets `lang` and `dir` on the root element for the active language.
fn apply_language(language: Language) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let dir = if language.is_rtl() { "rtl" } else { "ltr" };
    if root.set_attribute("lang", language.code()).is_err() || root.set_attribute("dir", dir).is_err() {
        warn!("Could not set document language to {}", language.code());
    }
}

fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let value = if locked { "hidden" } else { "unset" };
        if body.style().set_property("overflow", value).is_err() {
            warn!("Could not toggle body scrolling");
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let t = content_for(Language::En);
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let theme = use_state(|| init_theme(&LocalThemeStore, &DocumentRoot, local_hour()));
    let chrome = use_context::<ChromeContext>();
    let navigator = use_navigator();
    let route = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                        is_scrolled.set(is_compact(y));
                    }
                }) as Box<dyn FnMut()>)
            };

            if let Some(w) = window.as_ref() {
                if w.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()).is_err() {
                    warn!("Could not listen for scroll events");
                }
            }

            move || {
                if let Some(w) = window {
                    let _ = w.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    use_effect_with_deps(move |open| {
        set_body_scroll_locked(*open);
        || ()
    }, *menu_open);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            theme.set(toggle_theme(*theme, &LocalThemeStore, &DocumentRoot));
        })
    };

    let go_to_section = {
        let menu_open = menu_open.clone();
        let on_home = matches!(route, Some(Route::Home) | Some(Route::NotFound) | None);
        move |anchor: &'static str| {
            let menu_open = menu_open.clone();
            let navigator = navigator.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                if on_home {
                    scroll_to_section(anchor);
                } else if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&Route::Home);
                    Timeout::new(config::SECTION_SCROLL_DELAY_MS, move || scroll_to_section(anchor)).forget();
                }
            })
        }
    };

    let links = [
        (t.nav.home, "home"),
        (t.nav.about, "about"),
        (t.nav.portfolio, "portfolio"),
        (t.nav.process, "process"),
        (t.nav.contact, "contact"),
    ];

    let hidden = chrome.map(|c| c.nav_hidden).unwrap_or(false);
    let theme_icon = if theme.is_dark() { "☀" } else { "☾" };
    let theme_label = if theme.is_dark() { "Light Mode" } else { "Dark Mode" };

    html! {
        <>
            <div class={classes!("nav-shell", hidden.then(|| "nav-hidden"))}>
                <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                    <a href="#home" class="nav-logo" onclick={go_to_section("home")}>
                        <img src="https://s6.uupload.ir/files/aku2_53z3.png" alt="Aku Logo" />
                        <span>{"AKU"}</span>
                    </a>

                    <div class="nav-links">
                        { for links.iter().map(|(label, anchor)| html! {
                            <a href={format!("#{}", anchor)} class="nav-link" onclick={go_to_section(*anchor)}>
                                {*label}
                            </a>
                        }) }
                    </div>

                    <div class="nav-actions">
                        <button class="theme-toggle" aria-label="Toggle Theme" onclick={on_toggle_theme.clone()}>
                            {theme_icon}
                        </button>
                        <a href="#contact" class="nav-cta" onclick={go_to_section("contact")}>
                            {t.nav.lets_talk}
                        </a>
                    </div>

                    <button class={classes!("burger-menu", (*menu_open).then(|| "open"))} aria-label="Toggle Menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </nav>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                <div class="mobile-menu-links">
                    { for links.iter().enumerate().map(|(i, (label, anchor))| html! {
                        <a href={format!("#{}", anchor)}
                            style={format!("transition-delay: {}ms;", 100 + i * 50)}
                            onclick={go_to_section(*anchor)}>
                            {*label}
                        </a>
                    }) }
                </div>
                <div class="mobile-menu-actions">
                    <button class="mobile-theme-toggle" onclick={on_toggle_theme}>
                        {theme_icon}{" "}{theme_label}
                    </button>
                    <a href="#contact" class="mobile-cta" onclick={go_to_section("contact")}>
                        {t.nav.lets_talk}{" →"}
                    </a>
                </div>
            </div>
        </>
    }
}

/// Jumps back to the top whenever the route changes.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let route = use_route::<Route>();
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        route,
    );
    html! {}
}

#[function_component]
fn App() -> Html {
    html! {
        <HashRouter>
            <ChromeProvider>
                <ScrollToTop />
                <style>
                {r#"
                :root {
                    --bg: #f9fafb;
                    --fg: #111827;
                    --muted: #6b7280;
                    --card: #ffffff;
                    --border: rgba(17, 24, 39, 0.08);
                    --teal: #1ccfd9;
                    --pill: rgba(255, 255, 255, 0.8);
                }
                html.dark {
                    --bg: #000000;
                    --fg: #ffffff;
                    --muted: #9ca3af;
                    --card: #111111;
                    --border: rgba(255, 255, 255, 0.1);
                    --pill: rgba(18, 18, 18, 0.8);
                }
                html[dir="rtl"] body { font-family: Vazirmatn, sans-serif; }
                body {
                    margin: 0;
                    background: var(--bg);
                    color: var(--fg);
                    font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    transition: background-color 0.5s ease, color 0.5s ease;
                }
                a { color: inherit; text-decoration: none; }
                ::selection { background: var(--teal); color: #000; }
                .app-root {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    overflow-x: hidden;
                    position: relative;
                }
                .app-main { flex-grow: 1; position: relative; z-index: 10; }
                .app-background {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    overflow: hidden;
                    pointer-events: none;
                    background: radial-gradient(circle at 50% 50%, rgba(28, 207, 217, 0.08), transparent 70%);
                }
                .blob {
                    position: absolute;
                    border-radius: 50%;
                    will-change: transform;
                }
                .blob-one {
                    top: -10%;
                    left: -10%;
                    width: 40vw;
                    height: 40vw;
                    background: rgba(28, 207, 217, 0.1);
                    filter: blur(60px);
                    animation: blob-drift 22s ease-in-out infinite alternate;
                }
                .blob-two {
                    bottom: -10%;
                    right: -10%;
                    width: 50vw;
                    height: 50vw;
                    background: rgba(147, 197, 253, 0.2);
                    filter: blur(80px);
                    animation: blob-drift 28s ease-in-out infinite alternate-reverse;
                }
                html.dark .blob-two { background: rgba(30, 58, 138, 0.1); }
                @keyframes blob-drift {
                    from { transform: translate(0, 0) scale(1); }
                    to { transform: translate(8vw, 6vh) scale(1.15); }
                }
                @keyframes fade-up {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .fade-up { animation: fade-up 0.6s ease-out both; }
                .section-label {
                    color: var(--teal);
                    font-weight: 700;
                    font-size: 0.75rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    margin-bottom: 1rem;
                }
                .section-title {
                    font-size: clamp(2.5rem, 6vw, 3.75rem);
                    font-weight: 200;
                    margin: 0;
                }
                .section-title span { color: var(--muted); font-weight: 400; }
                .container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }

                .nav-shell {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    display: flex;
                    justify-content: center;
                    pointer-events: none;
                    transition: transform 0.7s ease-in-out;
                }
                .nav-shell.nav-hidden { transform: translateY(-150%); }
                .top-nav {
                    pointer-events: auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    width: 100%;
                    padding: 2rem 3rem;
                    background: transparent;
                    border: 1px solid transparent;
                    transition: all 0.7s cubic-bezier(0.32, 0.72, 0, 1);
                    animation: nav-drop 0.6s ease-out;
                }
                @keyframes nav-drop {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }
                .top-nav.scrolled {
                    width: min(94%, 920px);
                    margin-top: 1.5rem;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    background: var(--pill);
                    backdrop-filter: blur(12px);
                    border-color: var(--border);
                    box-shadow: 0 8px 40px rgba(0, 0, 0, 0.08);
                }
                .nav-logo { display: flex; align-items: center; gap: 0.75rem; z-index: 50; }
                .nav-logo img { width: 2.5rem; height: 2.5rem; object-fit: contain; transition: all 0.5s; }
                .top-nav.scrolled .nav-logo img { width: 2rem; height: 2rem; }
                .nav-logo span { font-weight: 900; letter-spacing: 0.2em; }
                .nav-links { display: flex; gap: 0.25rem; }
                .nav-link {
                    padding: 0.5rem 1.25rem;
                    border-radius: 9999px;
                    font-weight: 500;
                    transition: all 0.3s;
                }
                .nav-link:hover { color: var(--teal); }
                .top-nav.scrolled .nav-link { padding: 0.5rem 1rem; font-size: 0.875rem; color: var(--muted); }
                .top-nav.scrolled .nav-link:hover { color: var(--fg); background: var(--border); }
                .nav-actions { display: flex; align-items: center; gap: 1rem; }
                .theme-toggle {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    border: none;
                    cursor: pointer;
                    color: var(--fg);
                    background: var(--border);
                    transition: transform 0.2s;
                }
                .theme-toggle:active { transform: scale(0.95); }
                .nav-cta {
                    background: var(--fg);
                    color: var(--bg);
                    font-weight: 700;
                    border-radius: 9999px;
                    padding: 0.75rem 2rem;
                    white-space: nowrap;
                    transition: all 0.3s;
                }
                .nav-cta:hover { background: var(--teal); transform: scale(1.05); }
                .top-nav.scrolled .nav-cta { padding: 0.625rem 1.5rem; font-size: 0.875rem; }
                .burger-menu {
                    display: none;
                    position: relative;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: 1px solid var(--border);
                    background: var(--pill);
                    backdrop-filter: blur(12px);
                    cursor: pointer;
                    z-index: 70;
                }
                .burger-menu span {
                    position: absolute;
                    left: 30%;
                    width: 40%;
                    height: 2px;
                    border-radius: 2px;
                    background: var(--fg);
                    transition: all 0.3s ease-in-out;
                }
                .burger-menu span:nth-child(1) { top: 35%; }
                .burger-menu span:nth-child(2) { top: 50%; }
                .burger-menu span:nth-child(3) { top: 65%; }
                .burger-menu.open span:nth-child(1) { top: 50%; transform: rotate(45deg); }
                .burger-menu.open span:nth-child(2) { opacity: 0; }
                .burger-menu.open span:nth-child(3) { top: 50%; transform: rotate(-45deg); }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    gap: 2.5rem;
                    background: var(--bg);
                    clip-path: circle(0px at calc(100% - 3rem) 3rem);
                    transition: clip-path 0.6s ease-in-out 0.1s;
                }
                .mobile-menu.open {
                    clip-path: circle(150% at calc(100% - 3rem) 3rem);
                    transition-delay: 0s;
                }
                .mobile-menu-links { display: flex; flex-direction: column; align-items: center; gap: 1.5rem; }
                .mobile-menu-links a {
                    font-size: 2.25rem;
                    font-weight: 200;
                    opacity: 0;
                    transform: translateY(15px);
                    transition: all 0.4s ease-out;
                }
                .mobile-menu.open .mobile-menu-links a { opacity: 1; transform: translateY(0); }
                .mobile-menu-links a:hover { color: var(--teal); }
                .mobile-menu-actions { display: flex; flex-direction: column; gap: 1rem; width: 85%; max-width: 28rem; }
                .mobile-theme-toggle, .mobile-cta {
                    width: 100%;
                    padding: 1rem;
                    border-radius: 9999px;
                    font-size: 1.125rem;
                    text-align: center;
                    cursor: pointer;
                }
                .mobile-theme-toggle { border: 1px solid var(--border); background: var(--border); color: var(--fg); }
                .mobile-cta { background: var(--fg); color: var(--bg); }
                @media (max-width: 1280px) {
                    .nav-links, .nav-actions { display: none; }
                    .burger-menu { display: block; }
                    .top-nav { padding: 1.5rem; }
                }
                "#}
                </style>
                <div class="app-root">
                    <div class="app-background">
                        <div class="blob blob-one"></div>
                        <div class="blob blob-two"></div>
                    </div>
                    <Nav />
                    <main class="app-main">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </ChromeProvider>
        </HashRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if console_log::init_with_level(config::LOG_LEVEL).is_err() {
        gloo_console::warn!("console logger was already initialized");
    }

    apply_language(Language::En);
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_render_expected_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Brief { id: "ui-ux".into() }.to_path(), "/brief/ui-ux");
        assert_eq!(Route::Project { id: "3".into() }.to_path(), "/project/3");
        assert_eq!(Route::Projects.to_path(), "/projects");
    }

    #[test]
    fn routes_recognize_parameterized_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/brief/branding"), Some(Route::Brief { id: "branding".into() }));
        assert_eq!(Route::recognize("/project/4"), Some(Route::Project { id: "4".into() }));
        assert_eq!(Route::recognize("/projects"), Some(Route::Projects));
    }

    #[test]
    fn unmatched_paths_fall_back_to_not_found() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::recognize("/services/unknown"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/project"), Some(Route::NotFound));
    }

    #[test]
    fn navbar_compacts_past_threshold() {
        assert!(!is_compact(0.0));
        assert!(!is_compact(50.0));
        assert!(is_compact(50.5));
    }
}
