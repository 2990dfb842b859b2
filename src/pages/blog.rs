use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::reveal::RevealSection;
use crate::models::blog::{format_date, posts};

#[function_component(Blog)]
pub fn blog() -> Html {
    let entries = use_memo(|_| posts(), ());
    let newsletter_email = use_state(String::new);

    let on_email = {
        let newsletter_email = newsletter_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            newsletter_email.set(input.value());
        })
    };

    // No mailing list behind this box yet.
    let on_subscribe = {
        let newsletter_email = newsletter_email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!("newsletter signup ignored for {}", *newsletter_email);
        })
    };

    html! {
        <div class="blog-page">
            <section class="blog-hero">
                <h1>{"Conteúdo de Autoridade"}</h1>
                <p>{"Insights profundos sobre tecnologia, cultura e inovação."}</p>
            </section>

            <section class="blog-grid">
                { for entries.iter().enumerate().map(|(index, post)| {
                    let featured = index == 0;
                    html! {
                        <RevealSection
                            key={post.id}
                            delay={index as f64 * 0.1}
                            class={classes!("blog-card", featured.then_some("featured"))}
                        >
                            <article>
                                <div class="blog-card-image">
                                    <img src={post.image} alt={post.title} loading="lazy" />
                                    <div class="blog-card-category">{post.category}</div>
                                </div>
                                <div class="blog-card-body">
                                    <span class="blog-card-date">{format_date(post.published)}</span>
                                    <h2>{post.title}</h2>
                                    <p>{post.excerpt}</p>
                                    <span class="blog-card-more">{"Ler artigo completo"}</span>
                                </div>
                            </article>
                        </RevealSection>
                    }
                }) }
            </section>

            <section class="newsletter">
                <div class="newsletter-box">
                    <h3>{"Mantenha-se no núcleo."}</h3>
                    <p>{"Receba nossa curadoria mensal de tendências."}</p>
                    <form class="newsletter-form" onsubmit={on_subscribe}>
                        <input
                            type="email"
                            placeholder="Seu melhor e-mail"
                            value={(*newsletter_email).clone()}
                            oninput={on_email}
                        />
                        <button type="submit">{"Assinar"}</button>
                    </form>
                </div>
            </section>
            <style>
                {r#"
                .blog-page {
                    padding: 8rem 0 5rem;
                }
                .blog-hero,
                .blog-grid,
                .newsletter {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .blog-hero {
                    margin-bottom: 4rem;
                }
                .blog-hero h1 {
                    font-family: var(--font-display);
                    font-size: 3rem;
                    color: var(--axen-ivory);
                    margin-bottom: 1.5rem;
                }
                .blog-hero p {
                    color: var(--axen-gray);
                    max-width: 36rem;
                }
                .blog-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2.5rem;
                }
                .blog-card {
                    border-radius: 2rem;
                    background: rgba(18, 18, 18, 0.3);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }
                .blog-card:hover {
                    border-color: rgba(62, 230, 219, 0.3);
                }
                .blog-card.featured {
                    grid-column: span 2;
                }
                .blog-card-image {
                    position: relative;
                    overflow: hidden;
                    aspect-ratio: 16 / 9;
                }
                .blog-card.featured .blog-card-image {
                    aspect-ratio: 21 / 9;
                }
                .blog-card-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .blog-card:hover .blog-card-image img {
                    transform: scale(1.05);
                }
                .blog-card-category {
                    position: absolute;
                    top: 1.5rem;
                    left: 1.5rem;
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                    background: rgba(5, 5, 5, 0.8);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    color: var(--axen-turquoise);
                }
                .blog-card-body {
                    padding: 2rem;
                }
                .blog-card-date {
                    display: block;
                    font-size: 0.75rem;
                    color: var(--axen-gray);
                    margin-bottom: 0.5rem;
                }
                .blog-card h2 {
                    font-family: var(--font-display);
                    font-size: 1.25rem;
                    color: var(--axen-ivory);
                    margin-bottom: 1rem;
                    transition: color 0.3s ease;
                }
                .blog-card.featured h2 {
                    font-size: 1.875rem;
                }
                .blog-card:hover h2 {
                    color: var(--axen-turquoise);
                }
                .blog-card p {
                    color: var(--axen-gray);
                    font-size: 0.875rem;
                    margin-bottom: 1.5rem;
                    display: -webkit-box;
                    -webkit-line-clamp: 2;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                }
                .blog-card-more {
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: var(--axen-ivory);
                    text-decoration: underline;
                    text-decoration-color: var(--axen-turquoise);
                    text-underline-offset: 4px;
                }
                .newsletter {
                    margin-top: 6rem;
                }
                .newsletter-box {
                    background: var(--axen-turquoise);
                    color: var(--axen-black);
                    border-radius: 3rem;
                    padding: 2.5rem;
                    text-align: center;
                }
                .newsletter-box h3 {
                    font-family: var(--font-display);
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }
                .newsletter-box p {
                    opacity: 0.8;
                    margin-bottom: 1.5rem;
                }
                .newsletter-form {
                    max-width: 28rem;
                    margin: 0 auto;
                    display: flex;
                    gap: 0.5rem;
                }
                .newsletter-form input {
                    flex: 1;
                    background: rgba(255, 255, 255, 0.2);
                    border: none;
                    border-radius: 9999px;
                    padding: 0.75rem 1.5rem;
                    font: inherit;
                    outline: none;
                }
                .newsletter-form input::placeholder {
                    color: rgba(0, 0, 0, 0.5);
                }
                .newsletter-form button {
                    background: #000;
                    color: #fff;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.75rem 2rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: background 0.3s ease, color 0.3s ease;
                }
                .newsletter-form button:hover {
                    background: #fff;
                    color: #000;
                }
                @media (max-width: 768px) {
                    .blog-grid {
                        grid-template-columns: 1fr;
                    }
                    .blog-card.featured {
                        grid-column: auto;
                    }
                }
                "#}
            </style>
        </div>
    }
}
