use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::capsule_button::{ButtonVariant, CapsuleButton};
use crate::components::reveal::RevealSection;
use crate::scroll::{self, ScrollSubscription};
use crate::Route;

const HERO_IMAGE: &str = "https://iili.io/qFFqm4n.png";
const ECOSYSTEM_BACKGROUND: &str = "https://iili.io/qKiTMIs.png";

/// Hero text offset and opacity for a given scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub shift: f64,
    pub opacity: f64,
}

impl Parallax {
    // Text drifts 200px over the first 800px and fades out over the first 500px.
    pub fn at(offset: f64) -> Self {
        let offset = offset.max(0.0);
        Self {
            shift: (offset / 800.0).min(1.0) * 200.0,
            opacity: 1.0 - (offset / 500.0).min(1.0),
        }
    }
}

struct Pillar {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const PILLARS: [Pillar; 4] = [
    Pillar { title: "Inteligência Artificial", description: "Automação e escala", icon: "✦" },
    Pillar { title: "Criatividade", description: "Design e storytelling", icon: "✎" },
    Pillar { title: "Dados & Analytics", description: "Decisões estratégicas", icon: "▤" },
    Pillar { title: "Rede de Parceiros", description: "Conexão expert", icon: "⋈" },
];

struct Step {
    number: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const PROTOCOL: [Step; 3] = [
    Step {
        number: "01",
        title: "Diagnóstico Neural",
        description: "Mergulhamos nos seus dados proprietários para identificar gargalos e oportunidades invisíveis aos olhos tradicionais.",
        icon: "⌕",
    },
    Step {
        number: "02",
        title: "Fusão do Núcleo",
        description: "Integramos ferramentas avançadas de IA e talentos criativos para construir soluções personalizadas e ágeis.",
        icon: "⚙",
    },
    Step {
        number: "03",
        title: "Evolução Contínua",
        description: "Lançamento, mensuração em tempo real e otimização constante para garantir ROI crescente e adaptação rápida.",
        icon: "↗",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    let parallax = use_state_eq(|| Parallax::at(0.0));

    {
        let parallax = parallax.clone();
        use_effect_with_deps(
            move |_| {
                parallax.set(Parallax::at(scroll::current_offset()));
                let subscription = {
                    let parallax = parallax.clone();
                    ScrollSubscription::attach(move |offset| parallax.set(Parallax::at(offset)))
                }
                .map_err(|err| log::warn!("hero parallax disabled: {:?}", err))
                .ok();
                move || drop(subscription)
            },
            (),
        );
    }

    let hero_style = format!(
        "transform: translateY({:.1}px); opacity: {:.3};",
        parallax.shift, parallax.opacity
    );
    let indicator_style = format!("opacity: {:.3};", parallax.opacity);

    html! {
        <div class="home-page">
            <section class="hero">
                <div class="hero-backdrop">
                    <img src={HERO_IMAGE} alt="Axen Background" class="hero-image" />
                    <div class="hero-dim"></div>
                    <div class="hero-gradient-left"></div>
                    <div class="hero-gradient-bottom"></div>
                </div>

                <div class="hero-content">
                    <div class="hero-text" style={hero_style}>
                        <div class="hero-kicker">
                            <span class="hero-kicker-line"></span>
                            <span>{"Ecossistema Digital Vivo"}</span>
                        </div>
                        <h1>
                            {"O NÚCLEO"}<br />
                            <span class="hero-regular">{"DO SEU"}</span><br />
                            <span class="hero-strong">{"CRESCIMENTO."}</span>
                        </h1>
                        <p>
                            {"Conectamos inteligência artificial, criatividade e pessoas em um único sistema para impulsionar a evolução da sua empresa."}
                        </p>
                        <div class="hero-actions">
                            <Link<Route> to={Route::Contact}>
                                <CapsuleButton class="capsule-accent">{"Ative o Núcleo →"}</CapsuleButton>
                            </Link<Route>>
                            <Link<Route> to={Route::Ecosystem}>
                                <CapsuleButton variant={ButtonVariant::Outline}>{"Explorar Ecossistema"}</CapsuleButton>
                            </Link<Route>>
                        </div>
                    </div>
                </div>

                <div class="scroll-indicator" style={indicator_style}>
                    <span>{"Scroll"}</span>
                    <div class="scroll-indicator-line"></div>
                </div>
            </section>

            <section class="home-ecosystem">
                <div class="home-ecosystem-bg">
                    <img src={ECOSYSTEM_BACKGROUND} alt="Background" />
                    <div class="home-ecosystem-fade"></div>
                </div>
                <div class="home-container">
                    <RevealSection class="home-heading">
                        <h2>
                            {"Mais que serviços,"}<br />
                            <span class="text-fade">{"um sistema vivo."}</span>
                        </h2>
                        <p>
                            {"Não entregamos soluções isoladas. Nosso núcleo mergulha na sua cultura para orquestrar IA, criatividade e uma rede de especialistas que evolui com seu negócio."}
                        </p>
                    </RevealSection>

                    <div class="pillar-grid">
                        { for PILLARS.iter().enumerate().map(|(idx, pillar)| html! {
                            <RevealSection delay={idx as f64 * 0.1}>
                                <Link<Route> to={Route::Ecosystem} classes="pillar-card">
                                    <div class="pillar-watermark">{pillar.icon}</div>
                                    <div class="pillar-body">
                                        <div class="pillar-icon">{pillar.icon}</div>
                                        <h3>{pillar.title}</h3>
                                        <p>{pillar.description}</p>
                                    </div>
                                    <div class="pillar-footer">
                                        <span>{"Explorar"}</span>
                                        <span class="pillar-arrow">{"→"}</span>
                                    </div>
                                </Link<Route>>
                            </RevealSection>
                        }) }
                    </div>
                </div>
            </section>

            <section class="why-axen">
                <div class="home-container">
                    <RevealSection class="why-heading">
                        <div>
                            <h2>{"Por que a Axen?"}</h2>
                            <p>
                                {"Não somos só uma agência. Somos o núcleo que conecta estratégia, criação e automação para transformar presença digital em crescimento com consistência."}
                            </p>
                        </div>
                        <div class="why-about-link">
                            <Link<Route> to={Route::About}>
                                <CapsuleButton variant={ButtonVariant::Ghost}>{"Sobre Nós"}</CapsuleButton>
                            </Link<Route>>
                        </div>
                    </RevealSection>

                    <div class="why-grid">
                        <RevealSection class="why-card why-card-large">
                            <img
                                src="https://images.unsplash.com/photo-1620712943543-bcc4688e7485?q=80&w=2565&auto=format&fit=crop"
                                alt="IA Humanizada"
                                loading="lazy"
                            />
                            <div class="why-card-shade"></div>
                            <div class="why-card-caption">
                                <span class="why-badge">{"DIFERENCIAL EXCLUSIVO"}</span>
                                <h3>{"IA com Direção Humana"}</h3>
                                <p>
                                    {"Usamos IA para acelerar e escalar processos, mas quem define prioridade, tom e decisão é gente. Eficiência sem perder identidade, contexto e intenção."}
                                </p>
                            </div>
                        </RevealSection>

                        <RevealSection class="why-card why-card-tech" delay={0.1}>
                            <div class="why-card-icon">{"⚡"}</div>
                            <h3>{"Núcleo Integrador"}</h3>
                            <p>
                                {"Estratégia, execução e análise no mesmo fluxo. Tudo conectado do diagnóstico ao deploy, com menos retrabalho, mais previsibilidade e evolução contínua."}
                            </p>
                        </RevealSection>

                        <RevealSection class="why-card why-card-art" delay={0.2}>
                            <img
                                src="https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=2564&auto=format&fit=crop"
                                alt="Criatividade"
                                loading="lazy"
                            />
                            <div class="why-card-shade"></div>
                            <div class="why-card-caption">
                                <h3>{"Coragem Criativa ✧"}</h3>
                                <p>
                                    {"Criamos com critério: design limpo, narrativa forte e testes rápidos. Saímos do óbvio sem perder clareza, com foco real em conversão."}
                                </p>
                            </div>
                        </RevealSection>

                        <RevealSection class="why-card why-card-wide" delay={0.3}>
                            <div class="why-wide-body">
                                <div class="why-card-icon">{"◉"}</div>
                                <div>
                                    <h3>{"Dados First-Party & Ética"}</h3>
                                    <p>
                                        {"Em um mundo sem cookies, construímos sua base proprietária com foco total em consentimento, transparência e métricas que realmente impactam o negócio."}
                                    </p>
                                </div>
                            </div>
                            <div class="why-bars">
                                <span class="why-bar why-bar-long"></span>
                                <span class="why-bar why-bar-mid"></span>
                                <span class="why-bar why-bar-short"></span>
                            </div>
                        </RevealSection>
                    </div>
                </div>
            </section>

            <section class="protocol">
                <div class="protocol-line"></div>
                <div class="home-container">
                    <RevealSection class="protocol-heading">
                        <div class="hero-kicker">
                            <span class="hero-kicker-line"></span>
                            <span>{"Metodologia"}</span>
                        </div>
                        <h2>{"O Protocolo de Evolução"}</h2>
                        <p>
                            {"Não dependemos de sorte. Nosso método é um loop contínuo de inteligência que refina sua operação a cada ciclo, garantindo que o crescimento seja uma constante."}
                        </p>
                    </RevealSection>

                    <div class="protocol-grid">
                        { for PROTOCOL.iter().enumerate().map(|(idx, step)| html! {
                            <RevealSection delay={idx as f64 * 0.2} class="protocol-step">
                                <div class="protocol-step-top">
                                    <div class="protocol-icon">{step.icon}</div>
                                    <span class="protocol-number">{step.number}</span>
                                </div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </RevealSection>
                        }) }
                    </div>
                </div>
            </section>

            <section class="final-cta">
                <RevealSection>
                    <h2>{"Pessoas no centro."}<br />{"Tecnologia em movimento."}</h2>
                    <div class="final-cta-actions">
                        <Link<Route> to={Route::Ecosystem}>
                            <CapsuleButton variant={ButtonVariant::Outline}>{"Conheça o Ecossistema"}</CapsuleButton>
                        </Link<Route>>
                        <Link<Route> to={Route::Contact}>
                            <CapsuleButton>{"Fale com Especialistas"}</CapsuleButton>
                        </Link<Route>>
                    </div>
                </RevealSection>
            </section>
            <style>
                {r#"
                .home-page {
                    position: relative;
                    width: 100%;
                    overflow: hidden;
                }
                .home-container {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    position: relative;
                    z-index: 1;
                }
                .hero {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                }
                .hero-image {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    animation: heroZoom 1.5s ease-out;
                }
                @keyframes heroZoom {
                    from { opacity: 0; transform: scale(1.1); }
                    to { opacity: 1; transform: scale(1); }
                }
                .hero-dim,
                .hero-gradient-left,
                .hero-gradient-bottom {
                    position: absolute;
                    inset: 0;
                }
                .hero-dim {
                    background: rgba(0, 0, 0, 0.4);
                }
                .hero-gradient-left {
                    background: linear-gradient(to right, #000, rgba(0, 0, 0, 0.7), transparent);
                }
                .hero-gradient-bottom {
                    background: linear-gradient(to top, var(--axen-black), transparent);
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    width: 100%;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 3rem;
                }
                .hero-text {
                    max-width: 56rem;
                    animation: heroSlide 1s ease-out;
                }
                @keyframes heroSlide {
                    from { opacity: 0; margin-left: -50px; }
                    to { opacity: 1; margin-left: 0; }
                }
                .hero-kicker {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: var(--axen-turquoise);
                }
                .hero-kicker-line {
                    width: 3rem;
                    height: 1px;
                    background: var(--axen-turquoise);
                }
                .hero h1 {
                    font-size: 6rem;
                    font-weight: 300;
                    line-height: 1.1;
                    letter-spacing: -0.025em;
                    color: var(--axen-ivory);
                    margin-bottom: 2rem;
                }
                .hero-regular {
                    font-weight: 400;
                }
                .hero-strong,
                .text-fade {
                    font-weight: 600;
                    background: linear-gradient(to right, #fff, #e5e7eb, #9ca3af);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero p {
                    font-size: 1.5rem;
                    font-weight: 300;
                    line-height: 1.6;
                    color: var(--axen-gray);
                    max-width: 42rem;
                    margin-bottom: 3rem;
                }
                .hero-actions,
                .final-cta-actions {
                    display: flex;
                    gap: 1rem;
                }
                .scroll-indicator {
                    position: absolute;
                    right: 2.5rem;
                    bottom: 2.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 10px;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(138, 138, 138, 0.5);
                    animation: bob 2s infinite;
                }
                @keyframes bob {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(10px); }
                }
                .scroll-indicator-line {
                    width: 1px;
                    height: 4rem;
                    background: linear-gradient(to bottom, transparent, rgba(255, 255, 255, 0.5), transparent);
                }
                .home-ecosystem,
                .why-axen,
                .protocol {
                    position: relative;
                    padding: 6rem 0;
                    overflow: hidden;
                }
                .home-ecosystem-bg {
                    position: absolute;
                    inset: 0;
                }
                .home-ecosystem-bg img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.4;
                }
                .home-ecosystem-fade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, var(--axen-black), rgba(5, 5, 5, 0.8), var(--axen-black));
                }
                .home-heading {
                    width: 66%;
                    margin-bottom: 5rem;
                }
                .home-heading h2,
                .why-heading h2,
                .protocol-heading h2 {
                    font-family: var(--font-display);
                    font-size: 3.75rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    color: var(--axen-ivory);
                    margin-bottom: 1.5rem;
                }
                .home-heading p {
                    font-size: 1.25rem;
                    line-height: 1.6;
                    color: var(--axen-gray);
                    max-width: 42rem;
                }
                .pillar-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .pillar-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    height: 100%;
                    min-height: 380px;
                    padding: 2rem;
                    border-radius: 2.5rem;
                    background: #0a0a0a;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    overflow: hidden;
                    text-decoration: none;
                    transition: transform 0.5s ease, border-color 0.5s ease;
                }
                .pillar-card:hover {
                    transform: translateY(-8px);
                    border-color: rgba(62, 230, 219, 0.4);
                }
                .pillar-watermark {
                    position: absolute;
                    top: -2.5rem;
                    right: -1rem;
                    font-size: 11rem;
                    color: rgba(255, 255, 255, 0.05);
                    transition: transform 0.5s ease, color 0.5s ease;
                }
                .pillar-card:hover .pillar-watermark {
                    color: rgba(62, 230, 219, 0.1);
                    transform: rotate(12deg) scale(1.1);
                }
                .pillar-icon,
                .why-card-icon,
                .protocol-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 2rem;
                    font-size: 1.5rem;
                    color: var(--axen-ivory);
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    transition: all 0.5s ease;
                }
                .pillar-card:hover .pillar-icon {
                    background: var(--axen-turquoise);
                    color: #000;
                }
                .pillar-body h3 {
                    font-family: var(--font-display);
                    font-size: 1.5rem;
                    color: var(--axen-ivory);
                    margin-bottom: 1rem;
                }
                .pillar-body p {
                    font-size: 0.875rem;
                    color: var(--axen-gray);
                    border-left: 2px solid rgba(255, 255, 255, 0.1);
                    padding-left: 1rem;
                }
                .pillar-footer {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-top: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: var(--axen-gray);
                }
                .pillar-card:hover .pillar-footer {
                    color: var(--axen-turquoise);
                }
                .pillar-arrow {
                    transform: rotate(-45deg);
                    transition: transform 0.5s ease;
                }
                .pillar-card:hover .pillar-arrow {
                    transform: rotate(0);
                }
                .why-heading {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    margin-bottom: 4rem;
                }
                .why-heading h2 {
                    font-size: 3rem;
                }
                .why-heading p {
                    font-size: 1.125rem;
                    color: var(--axen-gray);
                    max-width: 36rem;
                }
                .why-grid {
                    display: grid;
                    grid-template-columns: repeat(12, 1fr);
                    gap: 1.5rem;
                }
                .why-card {
                    position: relative;
                    min-height: 280px;
                    border-radius: 2.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    overflow: hidden;
                }
                .why-card > img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .why-card:hover > img {
                    transform: scale(1.1);
                }
                .why-card-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.5), transparent);
                }
                .why-card-caption {
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    padding: 2.5rem;
                }
                .why-card h3 {
                    font-family: var(--font-display);
                    font-size: 1.5rem;
                    color: #fff;
                    margin-bottom: 0.75rem;
                }
                .why-card p {
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: rgba(242, 240, 233, 0.8);
                }
                .why-badge {
                    display: inline-block;
                    margin-bottom: 1rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    color: var(--axen-turquoise);
                }
                .why-card-large {
                    grid-column: span 7;
                    grid-row: span 2;
                    min-height: 400px;
                }
                .why-card-large h3 {
                    font-size: 2.25rem;
                }
                .why-card-tech,
                .why-card-art {
                    grid-column: span 5;
                }
                .why-card-tech {
                    background: #0a0a0a;
                    padding: 2rem;
                }
                .why-card-tech p {
                    color: var(--axen-gray);
                }
                .why-card-wide {
                    grid-column: span 12;
                    margin-top: 1.5rem;
                    min-height: 0;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                    padding: 2.5rem;
                    background: linear-gradient(to right, #0a0a0a, #111);
                }
                .why-wide-body {
                    display: flex;
                    align-items: flex-start;
                    gap: 1.5rem;
                }
                .why-wide-body .why-card-icon {
                    border-radius: 50%;
                    color: var(--axen-turquoise);
                }
                .why-card-wide p {
                    color: var(--axen-gray);
                    max-width: 42rem;
                }
                .why-bars {
                    display: flex;
                    gap: 1rem;
                    opacity: 0.5;
                    transition: opacity 0.3s ease;
                }
                .why-card-wide:hover .why-bars {
                    opacity: 1;
                }
                .why-bar {
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                }
                .why-bar-long {
                    width: 3rem;
                    background: var(--axen-turquoise);
                }
                .why-bar-mid {
                    width: 2rem;
                }
                .why-bar-short {
                    width: 1rem;
                }
                .protocol {
                    background: #080808;
                }
                .protocol-line {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 1px;
                    background: linear-gradient(to right, transparent, rgba(62, 230, 219, 0.3), transparent);
                }
                .protocol-heading {
                    margin-bottom: 5rem;
                }
                .protocol-heading h2 {
                    font-size: 3rem;
                }
                .protocol-heading p {
                    font-size: 1.125rem;
                    color: var(--axen-gray);
                    max-width: 42rem;
                }
                .protocol-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .protocol-step {
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    border-radius: 2rem;
                    background: #0a0a0a;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    transition: border-color 0.5s ease, transform 0.5s ease;
                }
                .protocol-step:hover {
                    border-color: rgba(62, 230, 219, 0.4);
                    transform: translateY(-0.5rem);
                }
                .protocol-step-top {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                }
                .protocol-number {
                    font-family: var(--font-display);
                    font-size: 3.75rem;
                    font-weight: 700;
                    color: rgba(255, 255, 255, 0.05);
                    user-select: none;
                }
                .protocol-step h3 {
                    font-family: var(--font-display);
                    font-size: 1.5rem;
                    color: var(--axen-ivory);
                    margin-bottom: 1rem;
                }
                .protocol-step p {
                    flex-grow: 1;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: var(--axen-gray);
                }
                .final-cta {
                    position: relative;
                    padding: 8rem 1.5rem;
                    text-align: center;
                    background: linear-gradient(to bottom, transparent, rgba(255, 255, 255, 0.05), transparent);
                }
                .final-cta h2 {
                    font-family: var(--font-display);
                    font-size: 4.5rem;
                    font-weight: 700;
                    color: var(--axen-ivory);
                    margin-bottom: 2rem;
                }
                .final-cta-actions {
                    justify-content: center;
                    gap: 1.5rem;
                }
                @media (max-width: 1024px) {
                    .pillar-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .hero h1 {
                        font-size: 4.5rem;
                    }
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 3rem;
                    }
                    .hero p {
                        font-size: 1.125rem;
                    }
                    .hero-content {
                        padding: 0 1.5rem;
                    }
                    .hero-actions,
                    .final-cta-actions {
                        flex-direction: column;
                    }
                    .scroll-indicator,
                    .why-about-link {
                        display: none;
                    }
                    .home-heading {
                        width: 100%;
                    }
                    .home-heading h2,
                    .why-heading h2,
                    .protocol-heading h2,
                    .final-cta h2 {
                        font-size: 2.5rem;
                    }
                    .pillar-grid,
                    .protocol-grid {
                        grid-template-columns: 1fr;
                    }
                    .why-card-large,
                    .why-card-tech,
                    .why-card-art,
                    .why-card-wide {
                        grid-column: span 12;
                    }
                    .why-card-wide {
                        flex-direction: column;
                    }
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
    fn parallax_starts_at_rest() {
        assert_eq!(Parallax::at(0.0), Parallax { shift: 0.0, opacity: 1.0 });
    }

    #[test]
    fn parallax_interpolates_and_clamps() {
        let mid = Parallax::at(400.0);
        assert_eq!(mid.shift, 100.0);
        assert!((mid.opacity - 0.2).abs() < 1e-9);

        let far = Parallax::at(5_000.0);
        assert_eq!(far, Parallax { shift: 200.0, opacity: 0.0 });
    }

    #[test]
    fn negative_overscroll_is_ignored() {
        assert_eq!(Parallax::at(-50.0), Parallax::at(0.0));
    }
}
