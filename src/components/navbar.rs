use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::capsule_button::{ButtonSize, ButtonVariant, CapsuleButton};
use crate::components::nav_state::{nav_style, MenuAction, MenuState, NavMode, ScrollState};
use crate::scroll::{self, ScrollSubscription};
use crate::Route;

pub const LOGO_URL: &str = "https://i.im.ge/2026/02/12/ePclFX.LOGOS-AXEN-V1-2.png";

const NAV_ITEMS: [(&str, Route); 4] = [
    ("Início", Route::Home),
    ("Ecossistema", Route::Ecosystem),
    ("Quem Somos", Route::About),
    ("Contato", Route::Contact),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scroll_state = use_reducer_eq(ScrollState::default);
    let menu = use_reducer_eq(MenuState::default);
    let route = use_route::<Route>();

    // The listener is owned by the effect and dropped with it on unmount.
    {
        let scroll_state = scroll_state.clone();
        use_effect_with_deps(
            move |_| {
                scroll_state.dispatch(scroll::current_offset());
                let subscription = {
                    let scroll_state = scroll_state.clone();
                    ScrollSubscription::attach(move |offset| scroll_state.dispatch(offset))
                }
                .map_err(|err| log::warn!("navbar scroll listener not attached: {:?}", err))
                .ok();
                move || drop(subscription)
            },
            (),
        );
    }

    {
        let menu = menu.clone();
        use_effect_with_deps(
            move |_| {
                menu.dispatch(MenuAction::RouteChanged);
                || ()
            },
            route.clone(),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Close))
    };

    let mode = scroll_state.mode();
    let cta_size = match mode {
        NavMode::Compact => ButtonSize::Small,
        NavMode::Expanded => ButtonSize::Normal,
    };

    html! {
        <>
            <div class="nav-shell">
                <nav
                    class={classes!("top-nav", (mode == NavMode::Compact).then_some("compact"))}
                    style={nav_style(mode).to_css()}
                >
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <img src={LOGO_URL} alt="Axen Logo" />
                    </Link<Route>>

                    <div class="nav-links">
                        { for NAV_ITEMS.iter().map(|(label, target)| {
                            let active = route.as_ref() == Some(target);
                            html! {
                                <Link<Route> to={target.clone()} classes={classes!("nav-link", active.then_some("active"))}>
                                    {*label}
                                    if active {
                                        <span class="nav-indicator"></span>
                                    }
                                </Link<Route>>
                            }
                        }) }
                    </div>

                    <div class="nav-actions">
                        <div class="nav-cta">
                            <Link<Route> to={Route::Contact}>
                                <CapsuleButton variant={ButtonVariant::Outline} size={cta_size}>
                                    {"Acesso"}
                                </CapsuleButton>
                            </Link<Route>>
                        </div>
                        <button class="menu-toggle" aria-label="Menu" onclick={toggle_menu}>
                            { if menu.open { "✕" } else { "☰" } }
                        </button>
                    </div>
                </nav>
            </div>

            if menu.open {
                <div class="mobile-menu">
                    <div class="mobile-menu-glow"></div>
                    <div class="mobile-menu-links">
                        { for NAV_ITEMS.iter().enumerate().map(|(i, (label, target))| html! {
                            <div
                                class="mobile-menu-item"
                                style={format!("animation-delay: {:.1}s;", 0.1 + i as f64 * 0.1)}
                                onclick={close_menu.clone()}
                            >
                                <Link<Route> to={target.clone()} classes="mobile-menu-link">
                                    {*label}
                                </Link<Route>>
                            </div>
                        }) }
                        <div class="mobile-menu-item mobile-menu-cta" onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Contact}>
                                <CapsuleButton class="capsule-large">{"Acesso"}</CapsuleButton>
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            }

            <style>
                {r#"
                .nav-shell {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    display: flex;
                    justify-content: center;
                    pointer-events: none;
                    animation: navDrop 1s cubic-bezier(0.16, 1, 0.3, 1);
                }
                @keyframes navDrop {
                    from { transform: translateY(-100px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                .top-nav {
                    pointer-events: auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    border-radius: 9999px;
                    transition: all 0.8s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .nav-logo img {
                    height: 5rem;
                    width: auto;
                    object-fit: contain;
                    transition: transform 0.3s ease, height 0.8s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .top-nav.compact .nav-logo img {
                    height: 3rem;
                }
                .nav-logo:hover img {
                    transform: scale(1.05);
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    margin: 0 1rem;
                }
                .nav-link {
                    position: relative;
                    padding: 0.5rem 0;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    text-decoration: none;
                    color: var(--axen-gray);
                    transition: color 0.3s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #fff;
                }
                .nav-indicator {
                    position: absolute;
                    left: 0;
                    bottom: -4px;
                    width: 100%;
                    height: 2px;
                    border-radius: 9999px;
                    background: var(--axen-turquoise);
                }
                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-left: 2rem;
                }
                .menu-toggle {
                    display: none;
                    background: none;
                    border: none;
                    color: var(--axen-ivory);
                    font-size: 1.5rem;
                    padding: 0.5rem;
                    border-radius: 9999px;
                    cursor: pointer;
                }
                .menu-toggle:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    height: 100vh;
                    z-index: 40;
                    padding-top: 80px;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: var(--axen-black);
                    animation: menuOpen 0.5s ease-in-out forwards;
                }
                @keyframes menuOpen {
                    from { opacity: 0; clip-path: circle(0% at 90% 40px); }
                    to { opacity: 1; clip-path: circle(150% at 90% 40px); }
                }
                .mobile-menu-glow {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 16rem;
                    height: 16rem;
                    border-radius: 50%;
                    background: rgba(62, 230, 219, 0.05);
                    filter: blur(80px);
                    pointer-events: none;
                }
                .mobile-menu-links {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                    width: 100%;
                    padding: 0 1.5rem;
                }
                .mobile-menu-item {
                    opacity: 0;
                    animation: itemRise 0.4s ease-out forwards;
                }
                .mobile-menu-cta {
                    margin-top: 2rem;
                    animation-delay: 0.5s;
                }
                @keyframes itemRise {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .mobile-menu-link {
                    font-family: var(--font-display);
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-decoration: none;
                    color: var(--axen-ivory);
                    transition: color 0.3s ease;
                }
                .mobile-menu-link:hover {
                    color: var(--axen-turquoise);
                }
                @media (max-width: 768px) {
                    .nav-links,
                    .nav-cta {
                        display: none;
                    }
                    .menu-toggle {
                        display: block;
                    }
                    .nav-logo img {
                        height: 2.5rem;
                    }
                    .top-nav.compact .nav-logo img {
                        height: 2.5rem;
                    }
                    .nav-actions {
                        margin-left: 0;
                    }
                }
                @media (min-width: 769px) {
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}
