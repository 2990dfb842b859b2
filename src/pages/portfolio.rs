use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::capsule_button::CapsuleButton;
use crate::models::portfolio::{filter_projects, Category, PROJECTS};
use crate::Route;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let filter = use_state(Category::default);
    let shown = filter_projects(&PROJECTS, *filter);

    html! {
        <div class="portfolio-page">
            <section class="portfolio-hero">
                <h1>{"Cases de Sucesso"}</h1>
                <p>{"Resultados reais gerados pela integração do nosso ecossistema."}</p>

                <div class="portfolio-filters">
                    { for Category::ALL.into_iter().map(|category| {
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |_: MouseEvent| filter.set(category))
                        };
                        html! {
                            <button
                                class={classes!("portfolio-filter", (*filter == category).then_some("active"))}
                                {onclick}
                            >
                                {category.label()}
                            </button>
                        }
                    }) }
                </div>
            </section>

            <section class="portfolio-grid">
                { for shown.into_iter().map(|project| html! {
                    <div key={project.id} class="portfolio-card">
                        <div class="portfolio-image">
                            <div class="portfolio-shade"></div>
                            <img src={project.image} alt={project.title} loading="lazy" />
                            <div class="portfolio-arrow">{"↗"}</div>
                        </div>
                        <span class="portfolio-client">{project.client}</span>
                        <h3>{project.title}</h3>
                        <p>{project.description}</p>
                    </div>
                }) }
            </section>

            <section class="portfolio-cta">
                <h2>{"Crie seu próprio case de sucesso."}</h2>
                <Link<Route> to={Route::Contact}>
                    <CapsuleButton>{"Iniciar Projeto"}</CapsuleButton>
                </Link<Route>>
            </section>
            <style>
                {r#"
                .portfolio-page {
                    padding: 8rem 0 5rem;
                }
                .portfolio-hero {
                    max-width: 1280px;
                    margin: 0 auto 4rem;
                    padding: 0 1.5rem;
                    text-align: center;
                }
                .portfolio-hero h1 {
                    font-family: var(--font-display);
                    font-size: 3.75rem;
                    color: var(--axen-ivory);
                    margin-bottom: 1.5rem;
                }
                .portfolio-hero p {
                    color: var(--axen-gray);
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                }
                .portfolio-filters {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                }
                .portfolio-filter {
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: transparent;
                    color: var(--axen-gray);
                    cursor: pointer;
                    font: inherit;
                    transition: all 0.3s ease;
                }
                .portfolio-filter:hover {
                    border-color: rgba(242, 240, 233, 0.5);
                    color: var(--axen-ivory);
                }
                .portfolio-filter.active {
                    background: var(--axen-ivory);
                    border-color: var(--axen-ivory);
                    color: var(--axen-black);
                    font-weight: 700;
                }
                .portfolio-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .portfolio-card {
                    cursor: pointer;
                    animation: cardIn 0.4s ease-out;
                }
                @keyframes cardIn {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }
                .portfolio-image {
                    position: relative;
                    aspect-ratio: 4 / 3;
                    border-radius: 2rem;
                    overflow: hidden;
                    margin-bottom: 1.25rem;
                }
                .portfolio-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(1);
                    transition: transform 0.7s ease, filter 0.7s ease;
                }
                .portfolio-card:hover .portfolio-image img {
                    transform: scale(1.05);
                    filter: grayscale(0);
                }
                .portfolio-shade {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    background: rgba(0, 0, 0, 0.4);
                    transition: background 0.3s ease;
                }
                .portfolio-card:hover .portfolio-shade {
                    background: rgba(0, 0, 0, 0.2);
                }
                .portfolio-arrow {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    z-index: 2;
                    padding: 0.25rem 0.6rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    color: #fff;
                    font-size: 1.25rem;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .portfolio-card:hover .portfolio-arrow {
                    opacity: 1;
                }
                .portfolio-client {
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    color: var(--axen-gray);
                    transition: color 0.3s ease;
                }
                .portfolio-card:hover .portfolio-client {
                    color: var(--axen-turquoise);
                }
                .portfolio-card h3 {
                    font-family: var(--font-display);
                    font-size: 1.5rem;
                    color: var(--axen-ivory);
                }
                .portfolio-card p {
                    color: var(--axen-gray);
                    font-size: 0.875rem;
                    margin-top: 0.5rem;
                }
                .portfolio-cta {
                    margin-top: 6rem;
                    text-align: center;
                }
                .portfolio-cta h2 {
                    font-family: var(--font-display);
                    font-size: 1.5rem;
                    color: var(--axen-ivory);
                    margin-bottom: 1.5rem;
                }
                @media (max-width: 1024px) {
                    .portfolio-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .portfolio-grid {
                        grid-template-columns: 1fr;
                    }
                    .portfolio-hero h1 {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
