use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::capsule_button::{ButtonVariant, CapsuleButton};
use crate::components::reveal::RevealSection;
use crate::Route;

struct Value {
    id: &'static str,
    title: &'static str,
    icon: &'static str,
    description: &'static str,
}

const VALUES: [Value; 5] = [
    Value {
        id: "01",
        title: "Humanidade no Centro",
        icon: "♥",
        description: "Código é binário, negócios são humanos. A tecnologia serve às pessoas, não o contrário.",
    },
    Value {
        id: "02",
        title: "Tecnologia como Extensão",
        icon: "⚡",
        description: "Não substituímos a inteligência; criamos exoesqueletos digitais para ampliar capacidades.",
    },
    Value {
        id: "03",
        title: "Radicalmente Transparente",
        icon: "⛨",
        description: "Caixas pretas são para aviões. Aqui, processos e dados são abertos e auditáveis.",
    },
    Value {
        id: "04",
        title: "Ecossistema Simbiótico",
        icon: "⋈",
        description: "Crescemos em rede. O sucesso do cliente retroalimenta a inteligência do núcleo.",
    },
    Value {
        id: "05",
        title: "Obsessão por Métricas",
        icon: "↗",
        description: "Não acreditamos em 'feeling' sem dados. Se não pode ser medido, não pode ser melhorado.",
    },
];

struct Milestone {
    year: &'static str,
    label: &'static str,
    text: &'static str,
}

const TIMELINE: [Milestone; 4] = [
    Milestone {
        year: "2018",
        label: "Kernel Loaded",
        text: "Início da jornada dos fundadores em transformação digital e consultoria high-end.",
    },
    Milestone {
        year: "2022",
        label: "Hybrid Integration",
        text: "Primeiros projetos experimentais unindo IA generativa (GPT-2 era) com design craft.",
    },
    Milestone {
        year: "2026",
        label: "Axen Bootup",
        text: "Fundação oficial da Axen como subsidiária autônoma da Axen Digital Ops.",
    },
    Milestone {
        year: "Hoje",
        label: "System Online",
        text: "Operação em 3 continentes, processando crescimento para mais de 50 empresas.",
    },
];

struct Member {
    name: &'static str,
    role: &'static str,
    image: &'static str,
}

const TEAM: [Member; 3] = [
    Member {
        name: "Sarah Connor",
        role: "CEO & Founder",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=1000&auto=format&fit=crop",
    },
    Member {
        name: "Alan Turing",
        role: "Head of AI",
        image: "https://images.unsplash.com/photo-1560250097-0b93528c311a?q=80&w=1000&auto=format&fit=crop",
    },
    Member {
        name: "Ada Lovelace",
        role: "Creative Director",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?q=80&w=1000&auto=format&fit=crop",
    },
];

/// First three words of a milestone, used as its headline.
pub fn headline(text: &str) -> String {
    let words: Vec<&str> = text.split(' ').take(3).collect();
    format!("{}...", words.join(" "))
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="manifesto">
                <div class="manifesto-text">
                    <RevealSection>
                        <div class="manifesto-kicker">
                            <span class="pulse-dot"></span>
                            <span>{"System.Init(2026)"}</span>
                        </div>
                        <h1>
                            {"NÓS SOMOS"}<br />
                            <span class="manifesto-fade">{"O GHOST NA"}</span><br />
                            <span class="manifesto-accent">{"MACHINE."}</span>
                        </h1>
                    </RevealSection>
                    <RevealSection delay={0.2}>
                        <p class="manifesto-lead">
                            {"A Axen não é apenas uma agência. Somos uma infraestrutura de inteligência. Nascemos para preencher o abismo entre a frieza dos dados e o calor da intuição humana."}
                        </p>
                    </RevealSection>
                </div>
                <div class="manifesto-visual">
                    <div class="orbit orbit-dashed"></div>
                    <div class="orbit orbit-solid"></div>
                    <div class="orbit-core">{">_"}</div>
                </div>
            </section>

            <section class="about-section">
                <RevealSection class="console">
                    <div class="console-line"></div>
                    <div class="console-grid">
                        <div class="console-cell">
                            <span class="console-tag">{"// CORE.PURPOSE"}</span>
                            <h3>{"Missão"}</h3>
                            <p>
                                {"Ser o núcleo processador que integra pessoas, inteligência artificial e criatividade para impulsionar transformações digitais autênticas e gerar crescimento sustentável em escala global."}
                            </p>
                        </div>
                        <div class="console-cell">
                            <span class="console-tag">{"// TARGET.STATE_2030"}</span>
                            <h3>{"Visão"}</h3>
                            <p>
                                {"Tornar-se a referência definitiva em inovação humanizada, reconhecida como a central de soluções (Hub) que reconfigura indústrias inteiras através de tecnologia ética e criativa."}
                            </p>
                        </div>
                    </div>
                </RevealSection>
            </section>

            <section class="values">
                <div class="about-section">
                    <RevealSection class="values-heading">
                        <h2>{"Código Fonte"}</h2>
                        <p>{"Os valores inegociáveis que rodam nosso sistema."}</p>
                    </RevealSection>
                    <div class="values-grid">
                        { for VALUES.iter().enumerate().map(|(idx, value)| html! {
                            <RevealSection key={value.id} delay={idx as f64 * 0.1}>
                                <div class="value-card">
                                    <span class="value-watermark">{value.id}</span>
                                    <div class="value-top">
                                        <div class="value-icon">{value.icon}</div>
                                        <span class="value-tag">{format!("VAL_MOD_{}", value.id)}</span>
                                    </div>
                                    <h3>{value.title}</h3>
                                    <p>{value.description}</p>
                                </div>
                            </RevealSection>
                        }) }
                    </div>
                </div>
            </section>

            <section class="about-section timeline">
                <div class="timeline-intro">
                    <RevealSection>
                        <h2>{"System Log"}</h2>
                        <p>
                            {"A evolução do nosso núcleo, de um coletivo experimental para uma infraestrutura global."}
                        </p>
                        <CapsuleButton variant={ButtonVariant::Outline}>{"Ver Roadmap Futuro"}</CapsuleButton>
                    </RevealSection>
                </div>
                <div class="timeline-entries">
                    <div class="timeline-rail"></div>
                    { for TIMELINE.iter().enumerate().map(|(idx, milestone)| html! {
                        <RevealSection key={milestone.year} delay={idx as f64 * 0.1} class="milestone">
                            <div class="milestone-dot"></div>
                            <span class="milestone-label">{format!("{} // {}", milestone.year, milestone.label)}</span>
                            <h3>{headline(milestone.text)}</h3>
                            <p>{milestone.text}</p>
                        </RevealSection>
                    }) }
                </div>
            </section>

            <section class="team">
                <div class="about-section">
                    <RevealSection class="team-heading">
                        <h2>{"Os Arquitetos"}</h2>
                        <p>{"Mentes humanas por trás do código."}</p>
                    </RevealSection>
                    <div class="team-grid">
                        { for TEAM.iter().enumerate().map(|(idx, member)| html! {
                            <RevealSection key={member.name} delay={idx as f64 * 0.2}>
                                <div class="member-card">
                                    <img src={member.image} alt={member.name} loading="lazy" />
                                    <div class="member-shade"></div>
                                    <div class="member-caption">
                                        <h3>{member.name}</h3>
                                        <p>{member.role}</p>
                                    </div>
                                </div>
                            </RevealSection>
                        }) }
                    </div>
                </div>
            </section>

            <section class="about-section recruit">
                <div class="recruit-box">
                    <div class="recruit-dots"></div>
                    <div class="recruit-body">
                        <h2>{"Você fala a nossa língua?"}</h2>
                        <p>
                            {"Estamos sempre procurando por outliers. Se você entende que a tecnologia é um meio para potencializar a criatividade humana, seu lugar é no núcleo."}
                        </p>
                        <Link<Route> to={Route::Careers} classes="recruit-link">
                            {"Ver Posições Abertas ›"}
                        </Link<Route>>
                    </div>
                </div>
            </section>
            <style>
                {r#"
                .about-page {
                    overflow: hidden;
                }
                .about-section {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .manifesto {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 10rem 1.5rem 6rem;
                    display: flex;
                    gap: 4rem;
                    align-items: flex-start;
                }
                .manifesto-text {
                    flex: 2;
                }
                .manifesto-kicker {
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
                .pulse-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: var(--axen-turquoise);
                    animation: pulse 2s infinite;
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }
                .manifesto h1 {
                    font-family: var(--font-display);
                    font-size: 6rem;
                    font-weight: 700;
                    line-height: 0.9;
                    letter-spacing: -0.025em;
                    color: var(--axen-ivory);
                    margin-bottom: 2rem;
                }
                .manifesto-fade {
                    background: linear-gradient(to right, var(--axen-gray), var(--axen-ivory), var(--axen-gray));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .manifesto-accent {
                    color: var(--axen-turquoise);
                }
                .manifesto-lead {
                    font-size: 1.5rem;
                    font-weight: 300;
                    line-height: 1.6;
                    color: var(--axen-gray);
                    max-width: 42rem;
                    border-left: 1px solid rgba(255, 255, 255, 0.1);
                    padding-left: 2rem;
                }
                .manifesto-visual {
                    flex: 1;
                    position: relative;
                    height: 400px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .orbit {
                    position: absolute;
                    border-radius: 50%;
                }
                .orbit-dashed {
                    width: 16rem;
                    height: 16rem;
                    border: 1px dashed rgba(255, 255, 255, 0.2);
                    animation: spin 20s linear infinite;
                }
                .orbit-solid {
                    width: 12rem;
                    height: 12rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    animation: spin 15s linear infinite reverse;
                }
                .orbit-core {
                    position: relative;
                    font-family: monospace;
                    font-size: 2.5rem;
                    color: var(--axen-ivory);
                }
                .console {
                    position: relative;
                    overflow: hidden;
                    border-radius: 3rem;
                    background: #080808;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .console-line {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 4px;
                    background: linear-gradient(to right, transparent, rgba(62, 230, 219, 0.5), transparent);
                }
                .console-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                }
                .console-cell {
                    padding: 4rem;
                }
                .console-cell + .console-cell {
                    border-left: 1px solid rgba(255, 255, 255, 0.1);
                }
                .console-tag,
                .value-tag,
                .milestone-label {
                    display: block;
                    font-family: monospace;
                    font-size: 0.75rem;
                    color: var(--axen-gray);
                    margin-bottom: 0.5rem;
                }
                .console-cell h3 {
                    font-family: var(--font-display);
                    font-size: 1.875rem;
                    color: var(--axen-ivory);
                    margin-bottom: 1.5rem;
                }
                .console-cell p {
                    font-size: 1.125rem;
                    line-height: 1.6;
                    color: rgba(138, 138, 138, 0.8);
                }
                .values,
                .team {
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .values {
                    background: rgba(18, 18, 18, 0.2);
                }
                .values-heading,
                .team-heading {
                    margin-bottom: 4rem;
                }
                .team-heading {
                    text-align: center;
                }
                .values-heading h2,
                .team-heading h2,
                .timeline-intro h2 {
                    font-family: var(--font-display);
                    font-size: 2.25rem;
                    color: var(--axen-ivory);
                    margin-bottom: 0.5rem;
                }
                .values-heading p,
                .team-heading p {
                    color: var(--axen-gray);
                }
                .values-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .value-card {
                    position: relative;
                    height: 100%;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: #000;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    overflow: hidden;
                    transition: all 0.5s ease;
                }
                .value-card:hover {
                    background: #0a0a0a;
                    border-color: rgba(62, 230, 219, 0.4);
                }
                .value-watermark {
                    position: absolute;
                    right: -1rem;
                    bottom: -1rem;
                    font-family: var(--font-display);
                    font-size: 6rem;
                    font-weight: 700;
                    color: rgba(255, 255, 255, 0.02);
                    user-select: none;
                }
                .value-top {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 1.5rem;
                }
                .value-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.05);
                    color: var(--axen-ivory);
                    transition: all 0.3s ease;
                }
                .value-card:hover .value-icon {
                    background: var(--axen-turquoise);
                    color: #000;
                }
                .value-card:hover .value-tag {
                    color: var(--axen-turquoise);
                }
                .value-card h3 {
                    font-family: var(--font-display);
                    font-size: 1.25rem;
                    color: var(--axen-ivory);
                    margin-bottom: 0.75rem;
                }
                .value-card p {
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: var(--axen-gray);
                    border-left: 1px solid rgba(255, 255, 255, 0.1);
                    padding-left: 1rem;
                }
                .timeline {
                    display: flex;
                    gap: 4rem;
                }
                .timeline-intro {
                    flex: 1;
                    position: sticky;
                    top: 8rem;
                    height: fit-content;
                }
                .timeline-intro h2 {
                    font-size: 3rem;
                    margin-bottom: 1.5rem;
                }
                .timeline-intro p {
                    font-size: 1.125rem;
                    color: var(--axen-gray);
                    margin-bottom: 2rem;
                }
                .timeline-entries {
                    flex: 2;
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                }
                .timeline-rail {
                    position: absolute;
                    left: 1rem;
                    top: 0;
                    bottom: 0;
                    width: 1px;
                    background: linear-gradient(to bottom, var(--axen-turquoise), rgba(255, 255, 255, 0.1), transparent);
                }
                .milestone {
                    position: relative;
                    padding-left: 4rem;
                }
                .milestone-dot {
                    position: absolute;
                    left: 11px;
                    top: 0.5rem;
                    width: 0.625rem;
                    height: 0.625rem;
                    border-radius: 50%;
                    background: #000;
                    border: 2px solid var(--axen-turquoise);
                    transition: all 0.3s ease;
                }
                .milestone:hover .milestone-dot {
                    transform: scale(1.5);
                    background: var(--axen-turquoise);
                }
                .milestone-label {
                    font-size: 0.875rem;
                    color: var(--axen-turquoise);
                    opacity: 0.8;
                }
                .milestone h3 {
                    font-family: var(--font-display);
                    font-size: 1.5rem;
                    color: var(--axen-ivory);
                    margin-bottom: 0.75rem;
                }
                .milestone p {
                    font-size: 1.125rem;
                    color: var(--axen-gray);
                    background: #0a0a0a;
                    padding: 1.5rem;
                    border-radius: 0 1rem 1rem 0;
                    border-left: 2px solid rgba(255, 255, 255, 0.1);
                    transition: border-color 0.3s ease;
                }
                .milestone:hover p {
                    border-left-color: var(--axen-turquoise);
                }
                .team {
                    background: linear-gradient(to bottom, #050505, #0a0a0a);
                }
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .member-card {
                    position: relative;
                    aspect-ratio: 3 / 4;
                    border-radius: 2rem;
                    overflow: hidden;
                }
                .member-card img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(1);
                    transition: transform 0.7s ease, filter 0.7s ease;
                }
                .member-card:hover img {
                    transform: scale(1.1);
                    filter: grayscale(0);
                }
                .member-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.2), transparent);
                    opacity: 0.9;
                    transition: opacity 0.5s ease;
                }
                .member-card:hover .member-shade {
                    opacity: 0.6;
                }
                .member-caption {
                    position: absolute;
                    left: 2rem;
                    right: 2rem;
                    bottom: 2rem;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .member-caption h3 {
                    font-family: var(--font-display);
                    font-size: 1.25rem;
                    color: var(--axen-ivory);
                }
                .member-caption p {
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    color: var(--axen-turquoise);
                }
                .recruit {
                    padding-top: 0;
                }
                .recruit-box {
                    position: relative;
                    overflow: hidden;
                    border-radius: 3rem;
                    background: var(--axen-ivory);
                    color: var(--axen-black);
                    padding: 5rem;
                    text-align: center;
                }
                .recruit-dots {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                    pointer-events: none;
                    background-image: radial-gradient(#000 1px, transparent 1px);
                    background-size: 20px 20px;
                }
                .recruit-body {
                    position: relative;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .recruit-body h2 {
                    font-family: var(--font-display);
                    font-size: 3rem;
                    margin-bottom: 1.5rem;
                }
                .recruit-body p {
                    font-size: 1.125rem;
                    font-weight: 500;
                    line-height: 1.6;
                    opacity: 0.8;
                    margin-bottom: 2.5rem;
                }
                .recruit-link {
                    display: inline-block;
                    padding: 1rem 2.5rem;
                    border-radius: 9999px;
                    background: #000;
                    color: #fff;
                    font-size: 1.125rem;
                    font-weight: 700;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .recruit-link:hover {
                    background: var(--axen-turquoise);
                    color: #000;
                }
                @media (max-width: 1024px) {
                    .manifesto-visual {
                        display: none;
                    }
                    .values-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .timeline {
                        flex-direction: column;
                    }
                    .timeline-intro {
                        position: static;
                    }
                }
                @media (max-width: 768px) {
                    .manifesto h1 {
                        font-size: 3rem;
                    }
                    .console-grid,
                    .values-grid,
                    .team-grid {
                        grid-template-columns: 1fr;
                    }
                    .console-cell {
                        padding: 2.5rem;
                    }
                    .console-cell + .console-cell {
                        border-left: none;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .recruit-box {
                        padding: 3rem 1.5rem;
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
    fn headline_keeps_first_three_words() {
        assert_eq!(
            headline("Operação em 3 continentes, processando crescimento"),
            "Operação em 3..."
        );
    }

    #[test]
    fn short_text_still_gets_ellipsis() {
        assert_eq!(headline("Núcleo ativo"), "Núcleo ativo...");
    }
}
