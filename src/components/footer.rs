use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <div class="footer-wrap">
            <footer class="site-footer">
                <div class="footer-highlight"></div>
                <div class="footer-content">
                    <div class="footer-grid">
                        <div class="footer-brand">
                            <div class="footer-logo">
                                <span class="footer-triangle">{"▼"}</span>
                                <span class="footer-wordmark">{"AXEN"}</span>
                            </div>
                            <p>{"Pessoas no centro. Tecnologia em movimento. O núcleo do seu crescimento digital."}</p>
                            <div class="footer-social">
                                <a href="#" aria-label="Instagram">{"IG"}</a>
                                <a href="#" aria-label="LinkedIn">{"IN"}</a>
                                <a href="#" aria-label="Twitter">{"X"}</a>
                            </div>
                        </div>

                        <div>
                            <h4>{"Ecossistema"}</h4>
                            <ul>
                                <li><Link<Route> to={Route::Ecosystem}>{"Inteligência Artificial"}</Link<Route>></li>
                                <li><Link<Route> to={Route::Ecosystem}>{"Criatividade & Design"}</Link<Route>></li>
                                <li><Link<Route> to={Route::Ecosystem}>{"Dados & Analytics"}</Link<Route>></li>
                                <li><Link<Route> to={Route::Ecosystem}>{"Parcerias"}</Link<Route>></li>
                            </ul>
                        </div>

                        <div>
                            <h4>{"Institucional"}</h4>
                            <ul>
                                <li><Link<Route> to={Route::About}>{"Quem Somos"}</Link<Route>></li>
                                <li><Link<Route> to={Route::Portfolio}>{"Cases"}</Link<Route>></li>
                                <li><Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>></li>
                                <li><Link<Route> to={Route::Careers}>{"Trabalhe Conosco"}</Link<Route>></li>
                            </ul>
                        </div>

                        <div>
                            <h4>{"Contato"}</h4>
                            <ul class="footer-contact">
                                <li>
                                    <span class="footer-icon">{"⌖"}</span>
                                    <span>{"Av. Paulista, 0000 - São Paulo, SP"}<br />{"Brasil"}</span>
                                </li>
                                <li>
                                    <span class="footer-icon">{"✉"}</span>
                                    <span>{"hello@axen.com.br"}</span>
                                </li>
                                <li>
                                    <span class="footer-icon">{"☎"}</span>
                                    <span>{"+55 11 99999-9999"}</span>
                                </li>
                            </ul>
                        </div>
                    </div>

                    <div class="footer-bottom">
                        <p>{"© 2026 Axen Digital Ops. Todos os direitos reservados."}</p>
                        <div class="footer-legal">
                            <Link<Route> to={Route::Privacy}>{"Política de Privacidade"}</Link<Route>>
                            <Link<Route> to={Route::Terms}>{"Termos de Uso"}</Link<Route>>
                        </div>
                    </div>
                </div>
            </footer>
            <style>
                {r#"
                .footer-wrap {
                    padding: 3rem 0.75rem 1.5rem;
                }
                .site-footer {
                    position: relative;
                    overflow: hidden;
                    background: #080808;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 2.5rem;
                    padding: 4rem 0 2.5rem;
                }
                .footer-highlight {
                    position: absolute;
                    top: 0;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 33%;
                    height: 1px;
                    background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.2), transparent);
                }
                .footer-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 3rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                    margin-bottom: 4rem;
                }
                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .footer-triangle {
                    color: var(--axen-turquoise);
                }
                .footer-wordmark {
                    font-family: var(--font-display);
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    color: var(--axen-ivory);
                }
                .site-footer p,
                .site-footer li {
                    color: var(--axen-gray);
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .site-footer h4 {
                    font-family: var(--font-display);
                    font-size: 1.125rem;
                    color: var(--axen-ivory);
                    margin-bottom: 1.5rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .site-footer a {
                    color: var(--axen-gray);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .site-footer a:hover {
                    color: var(--axen-turquoise);
                }
                .footer-social {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1.5rem;
                    font-weight: 700;
                }
                .footer-contact li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                }
                .footer-icon {
                    color: var(--axen-turquoise);
                }
                .footer-bottom {
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    padding-top: 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }
                .footer-bottom p {
                    font-size: 0.75rem;
                }
                .footer-legal {
                    display: flex;
                    gap: 1.5rem;
                    font-size: 0.75rem;
                }
                .footer-legal a:hover {
                    color: var(--axen-ivory);
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                    .footer-content {
                        padding: 0 1.5rem;
                    }
                    .footer-bottom {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
