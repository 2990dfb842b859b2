use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::accordion::AccordionItem;
use crate::components::capsule_button::CapsuleButton;
use crate::components::reveal::RevealSection;
use crate::Route;

struct Arm {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    items: [&'static str; 3],
}

const ARMS: [Arm; 5] = [
    Arm {
        id: "strategy",
        title: "Planejamento Estratégico",
        description: "O ponto de partida. Mergulhamos no seu negócio para desenhar o mapa do crescimento.",
        icon: "◎",
        items: ["Diagnóstico de maturidade digital", "Roadmap de inovação", "Consultoria de cultura ágil"],
    },
    Arm {
        id: "ia",
        title: "IA & Automação",
        description: "Escalabilidade inteligente. Reduzimos o trabalho manual para liberar o potencial humano.",
        icon: "✦",
        items: ["Chatbots e assistentes virtuais", "Automação de marketing", "Otimização de processos (RPA)"],
    },
    Arm {
        id: "creative",
        title: "Criatividade & Conteúdo",
        description: "A alma da marca. Conectamos emocionalmente através de design e narrativas poderosas.",
        icon: "✎",
        items: ["Branding e Identidade Visual", "UX/UI Design", "Produção de Conteúdo Multiplataforma"],
    },
    Arm {
        id: "data",
        title: "Dados & Analytics",
        description: "A bússola. Transformamos números brutos em insights acionáveis e preditivos.",
        icon: "▤",
        items: ["Dashboards em tempo real", "Análise preditiva", "Implementação de GA4 e Tracking"],
    },
    Arm {
        id: "partners",
        title: "Parcerias & Influência",
        description: "O alcance expandido. Uma rede viva de criadores e especialistas prontos para atuar.",
        icon: "⋈",
        items: ["Marketing de Influência", "Collabs estratégicas", "Curadoria de talentos"],
    },
];

const FAQ: [(&str, &str); 3] = [
    (
        "A Axen substitui minha equipe interna?",
        "Não. Atuamos como extensão. Nosso núcleo se conecta ao seu time para dar tração e especialidade onde falta.",
    ),
    (
        "Vocês atendem apenas grandes empresas?",
        "Atendemos empresas em fase de crescimento e escala. O ecossistema é modular e se adapta ao tamanho do desafio.",
    ),
    (
        "Como a IA é utilizada nos projetos?",
        "Usamos IA para análise de dados, automação de tarefas repetitivas e geração de insights, sempre com supervisão humana.",
    ),
];

#[function_component(Ecosystem)]
pub fn ecosystem() -> Html {
    html! {
        <div class="ecosystem-page">
            <section class="ecosystem-intro">
                <h1>{"Nosso Ecossistema"}</h1>
                <p>
                    {"Somos o coração que une pessoas, dados e inovação. Não vendemos serviços isolados; oferecemos um sistema que evolui conforme sua empresa cresce."}
                </p>
            </section>

            <div class="ecosystem-core">
                <div class="core-ring core-ring-inner"></div>
                <div class="core-ring core-ring-outer"></div>
                <div class="core-glow"></div>
                <span class="core-label">{"NÚCLEO"}</span>
            </div>

            <section class="ecosystem-arms">
                { for ARMS.iter().enumerate().map(|(index, arm)| html! {
                    <RevealSection key={arm.id} class={classes!("arm", (index % 2 == 1).then_some("arm-reversed"))}>
                        <div class="arm-text">
                            <div class="arm-icon">{arm.icon}</div>
                            <h2>{arm.title}</h2>
                            <p>{arm.description}</p>
                            <ul>
                                { for arm.items.iter().map(|item| html! {
                                    <li><span class="arm-dot"></span>{*item}</li>
                                }) }
                            </ul>
                        </div>
                        <div class="arm-visual">
                            <img
                                src={format!("https://picsum.photos/seed/{}/600/400", arm.id)}
                                alt={arm.title}
                                loading="lazy"
                            />
                        </div>
                    </RevealSection>
                }) }
            </section>

            <section class="ecosystem-faq">
                <h2>{"Perguntas Frequentes"}</h2>
                <div class="accordion">
                    { for FAQ.iter().map(|(question, answer)| html! {
                        <AccordionItem question={*question}>
                            <p>{*answer}</p>
                        </AccordionItem>
                    }) }
                </div>
            </section>

            <section class="ecosystem-cta">
                <div class="ecosystem-cta-box">
                    <div class="ecosystem-cta-glow"></div>
                    <h2>{"Pronto para integrar seu núcleo?"}</h2>
                    <Link<Route> to={Route::Contact}>
                        <CapsuleButton>{"Agendar Diagnóstico"}</CapsuleButton>
                    </Link<Route>>
                </div>
            </section>
            <style>
                {r#"
                .ecosystem-page {
                    padding: 8rem 0 5rem;
                }
                .ecosystem-intro,
                .ecosystem-arms,
                .ecosystem-cta {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .ecosystem-intro {
                    text-align: center;
                    margin-bottom: 6rem;
                }
                .ecosystem-intro h1 {
                    font-family: var(--font-display);
                    font-size: 4.5rem;
                    color: var(--axen-ivory);
                    margin-bottom: 2rem;
                    animation: itemRise 0.6s ease-out;
                }
                .ecosystem-intro p {
                    font-size: 1.25rem;
                    color: var(--axen-gray);
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .ecosystem-core {
                    position: relative;
                    height: 400px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 8rem;
                    overflow: hidden;
                }
                .core-ring {
                    position: absolute;
                    border-radius: 50%;
                }
                .core-ring-inner {
                    width: 300px;
                    height: 300px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    animation: spin 10s linear infinite;
                }
                .core-ring-outer {
                    width: 450px;
                    height: 450px;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    animation: spin 15s linear infinite reverse;
                }
                .core-glow {
                    position: absolute;
                    width: 8rem;
                    height: 8rem;
                    border-radius: 50%;
                    background: rgba(242, 240, 233, 0.05);
                    filter: blur(40px);
                }
                .core-label {
                    position: relative;
                    font-family: var(--font-display);
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    color: var(--axen-ivory);
                }
                .ecosystem-arms {
                    display: flex;
                    flex-direction: column;
                    gap: 6rem;
                }
                .arm {
                    display: flex;
                    gap: 3rem;
                    align-items: center;
                }
                .arm.arm-reversed {
                    flex-direction: row-reverse;
                }
                .arm-text,
                .arm-visual {
                    flex: 1;
                }
                .arm-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                    font-size: 1.75rem;
                    color: var(--axen-ivory);
                    background: var(--axen-darkgray);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }
                .arm h2 {
                    font-family: var(--font-display);
                    font-size: 2.25rem;
                    color: var(--axen-ivory);
                    margin-bottom: 1rem;
                }
                .arm p {
                    font-size: 1.125rem;
                    color: var(--axen-gray);
                    margin-bottom: 2rem;
                }
                .arm ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .arm li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: rgba(242, 240, 233, 0.8);
                }
                .arm-dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: rgba(242, 240, 233, 0.5);
                }
                .arm-visual {
                    aspect-ratio: 16 / 9;
                    border-radius: 2rem;
                    background: linear-gradient(to bottom right, var(--axen-darkgray), #000);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    padding: 2rem;
                    overflow: hidden;
                }
                .arm-visual img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border-radius: 0.75rem;
                    opacity: 0.6;
                    filter: grayscale(1);
                    transition: filter 0.5s ease, opacity 0.5s ease;
                }
                .arm-visual:hover img {
                    filter: grayscale(0);
                    opacity: 1;
                }
                .ecosystem-faq {
                    max-width: 48rem;
                    margin: 8rem auto 0;
                    padding: 0 1.5rem;
                }
                .ecosystem-faq h2 {
                    font-family: var(--font-display);
                    font-size: 1.875rem;
                    color: var(--axen-ivory);
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .accordion {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .accordion-item {
                    border-radius: 1rem;
                    background: rgba(18, 18, 18, 0.3);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }
                .accordion-item.open {
                    border-color: rgba(255, 255, 255, 0.2);
                }
                .accordion-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font: inherit;
                    font-weight: 500;
                    text-align: left;
                    color: var(--axen-ivory);
                }
                .accordion-chevron {
                    transition: transform 0.3s ease;
                }
                .accordion-item.open .accordion-chevron {
                    transform: rotate(180deg);
                }
                .accordion-answer {
                    padding: 1rem 1.5rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    color: var(--axen-gray);
                    line-height: 1.6;
                }
                .ecosystem-cta {
                    margin-top: 8rem;
                    text-align: center;
                }
                .ecosystem-cta-box {
                    position: relative;
                    overflow: hidden;
                    padding: 3rem;
                    border-radius: 3rem;
                    background: linear-gradient(to right, var(--axen-darkgray), #000);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .ecosystem-cta-glow {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 16rem;
                    height: 16rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.05);
                    filter: blur(80px);
                }
                .ecosystem-cta h2 {
                    position: relative;
                    font-family: var(--font-display);
                    font-size: 2.25rem;
                    color: var(--axen-ivory);
                    margin-bottom: 2rem;
                }
                @media (max-width: 768px) {
                    .arm,
                    .arm.arm-reversed {
                        flex-direction: column;
                    }
                    .ecosystem-intro h1 {
                        font-size: 3rem;
                    }
                    .arm-visual {
                        width: 100%;
                    }
                }
                "#}
            </style>
        </div>
    }
}
