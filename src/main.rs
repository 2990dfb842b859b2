use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod scroll;
mod components {
    pub mod accordion;
    pub mod capsule_button;
    pub mod footer;
    pub mod nav_state;
    pub mod navbar;
    pub mod reveal;
}
mod models {
    pub mod blog;
    pub mod contact;
    pub mod portfolio;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod contact;
    pub mod ecosystem;
    pub mod home;
    pub mod legal;
    pub mod portfolio;
}

use components::{footer::Footer, navbar::Navbar};
use pages::{
    about::About,
    blog::Blog,
    contact::Contact,
    ecosystem::Ecosystem,
    home::Home,
    legal::{Legal, LegalDocument},
    portfolio::Portfolio,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/ecosystem")]
    Ecosystem,
    #[at("/about")]
    About,
    #[at("/blog")]
    Blog,
    #[at("/contact")]
    Contact,
    #[at("/careers")]
    Careers,
    #[at("/portfolio")]
    Portfolio,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Ecosystem => {
            info!("Rendering Ecosystem page");
            html! { <Ecosystem /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        // No dedicated careers page yet; the About page carries the recruiting pitch.
        Route::Careers => {
            info!("Rendering Careers page");
            html! { <About /> }
        }
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <Legal document={LegalDocument::Privacy} /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <Legal document={LegalDocument::Terms} /> }
        }
    }
}

/// Jumps back to the top of the document whenever the path changes.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let path = use_location().map(|location| location.path().to_string());

    use_effect_with_deps(
        |_| {
            scroll::scroll_to_top();
            || ()
        },
        path,
    );

    html! {}
}

#[function_component]
fn App() -> Html {
    html! {
        <HashRouter>
            <ScrollToTop />
            <div class="app-shell">
                <Navbar />
                <main class="app-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
            <style>
                {r#"
                :root {
                    --axen-black: #050505;
                    --axen-ivory: #F2F0E9;
                    --axen-turquoise: #3EE6DB;
                    --axen-gray: #8A8A8A;
                    --axen-darkgray: #121212;
                    --font-display: 'Space Grotesk', 'Inter', sans-serif;
                    --font-body: 'Inter', sans-serif;
                }
                * {
                    box-sizing: border-box;
                }
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    background: var(--axen-black);
                    color: var(--axen-ivory);
                    font-family: var(--font-body);
                    -webkit-font-smoothing: antialiased;
                }
                h1, h2, h3 {
                    margin-top: 0;
                }
                p {
                    margin-top: 0;
                }
                ::selection {
                    background: var(--axen-turquoise);
                    color: #000;
                }
                .app-shell {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                }
                .app-main {
                    flex-grow: 1;
                }
                .capsule-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    border-radius: 9999px;
                    font-family: var(--font-body);
                    font-weight: 500;
                    letter-spacing: 0.025em;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .capsule-button:active {
                    transform: scale(0.95);
                }
                .capsule-button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .capsule-content {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .capsule-primary {
                    background: var(--axen-ivory);
                    color: var(--axen-black);
                    border: 1px solid var(--axen-ivory);
                }
                .capsule-primary:hover {
                    background: #fff;
                    box-shadow: 0 0 20px rgba(255, 255, 255, 0.3);
                }
                .capsule-outline {
                    background: transparent;
                    color: var(--axen-ivory);
                    border: 1px solid rgba(242, 240, 233, 0.3);
                }
                .capsule-outline:hover {
                    border-color: var(--axen-ivory);
                    background: rgba(242, 240, 233, 0.05);
                }
                .capsule-ghost {
                    background: transparent;
                    color: var(--axen-gray);
                    border: 1px solid transparent;
                }
                .capsule-ghost:hover {
                    color: var(--axen-ivory);
                    background: rgba(255, 255, 255, 0.05);
                }
                .capsule-normal {
                    padding: 0.75rem 2rem;
                    font-size: 1rem;
                }
                .capsule-small {
                    padding: 0.5rem 1.25rem;
                    font-size: 0.875rem;
                }
                .capsule-large {
                    padding: 1rem 2.5rem;
                    font-size: 1.125rem;
                }
                .capsule-full {
                    width: 100%;
                }
                .capsule-accent {
                    background: var(--axen-turquoise);
                    border-color: var(--axen-turquoise);
                    color: #000;
                }
                .capsule-accent:hover {
                    background: #fff;
                    border-color: #fff;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.8s cubic-bezier(0.21, 0.47, 0.32, 0.98),
                        transform 0.8s cubic-bezier(0.21, 0.47, 0.32, 0.98);
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                @keyframes spin {
                    from { transform: rotate(0deg); }
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </HashRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
