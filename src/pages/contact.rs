use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::capsule_button::CapsuleButton;
use crate::config::SUBMIT_DELAY_MS;
use crate::models::contact::{
    ContactAction, ContactField, ContactState, Interest, SubmitStatus,
};

fn open_chat(url: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window, chat link not opened");
        return;
    };
    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        log::warn!("failed to open chat link: {:?}", err);
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let state = use_reducer_eq(ContactState::default);

    // Entering Submitting fires the outbound message once and schedules the
    // success panel; the timer is not cancellable.
    {
        let status = state.status;
        let state = state.clone();
        use_effect_with_deps(
            move |status| {
                if *status == SubmitStatus::Submitting {
                    let link = state.form.chat_link();
                    log::info!("contact form submitted, opening chat");
                    open_chat(&link);
                    Timeout::new(SUBMIT_DELAY_MS, move || {
                        state.dispatch(ContactAction::Delivered);
                    })
                    .forget();
                }
                || ()
            },
            status,
        );
    }

    let on_text = |field: ContactField| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(ContactAction::Edit(field.clone(), input.value()));
        })
    };

    let on_message = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(ContactAction::Edit(ContactField::Message, area.value()));
        })
    };

    let on_interest = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match Interest::from_label(&select.value()) {
                Some(interest) => state.dispatch(ContactAction::SelectInterest(interest)),
                None => log::warn!("unknown interest option {:?}", select.value()),
            }
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(ContactAction::Submit);
        })
    };

    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ContactAction::Reset))
    };

    let submitting = state.status == SubmitStatus::Submitting;
    let form = &state.form;

    html! {
        <div class="contact-page">
            <section class="contact-grid">
                <div class="contact-info">
                    <h1>{"Vamos ativar seu núcleo?"}</h1>
                    <p class="contact-lead">
                        {"Conte-nos sobre seus desafios. Nossa equipe de especialistas está pronta para desenhar a estratégia ideal."}
                    </p>

                    <div class="contact-cards">
                        <div class="contact-card">
                            <div class="contact-card-icon">{"⌖"}</div>
                            <div>
                                <h3>{"Nosso QG"}</h3>
                                <p>{"Av. Paulista, 0000 - Bela Vista"}<br />{"São Paulo - SP, Brasil"}</p>
                            </div>
                        </div>
                        <div class="contact-card">
                            <div class="contact-card-icon">{"✉"}</div>
                            <div>
                                <h3>{"E-mail"}</h3>
                                <p>{"hello@axen.com.br"}<br />{"parcerias@axen.com.br"}</p>
                            </div>
                        </div>
                        <div class="contact-card">
                            <div class="contact-card-icon">{"☎"}</div>
                            <div>
                                <h3>{"Telefone"}</h3>
                                <p>{"+55 (11) 99999-9999"}<br />{"Seg-Sex, 9h às 18h"}</p>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="contact-form-panel">
                    if state.status == SubmitStatus::Success {
                        <div class="contact-success">
                            <div class="contact-success-icon">{"✓"}</div>
                            <h3>{"Mensagem Enviada!"}</h3>
                            <p>{"Nossa equipe entrará em contato em breve."}</p>
                            <button class="contact-again" onclick={on_reset}>
                                {"Enviar outra mensagem"}
                            </button>
                        </div>
                    } else {
                        <form class="contact-form" onsubmit={on_submit}>
                            <div class="contact-row">
                                <div class="contact-field">
                                    <label for="contact-name">{"Nome"}</label>
                                    <input
                                        id="contact-name"
                                        type="text"
                                        required={true}
                                        placeholder="Seu nome"
                                        value={form.name.clone()}
                                        oninput={on_text(ContactField::Name)}
                                    />
                                </div>
                                <div class="contact-field">
                                    <label for="contact-company">{"Empresa"}</label>
                                    <input
                                        id="contact-company"
                                        type="text"
                                        placeholder="Sua empresa"
                                        value={form.company.clone()}
                                        oninput={on_text(ContactField::Company)}
                                    />
                                </div>
                            </div>

                            <div class="contact-field">
                                <label for="contact-email">{"E-mail Corporativo"}</label>
                                <input
                                    id="contact-email"
                                    type="email"
                                    required={true}
                                    placeholder="voce@empresa.com"
                                    value={form.email.clone()}
                                    oninput={on_text(ContactField::Email)}
                                />
                            </div>

                            <div class="contact-field">
                                <label for="contact-interest">{"Interesse"}</label>
                                <select id="contact-interest" onchange={on_interest}>
                                    { for Interest::ALL.into_iter().map(|interest| html! {
                                        <option
                                            value={interest.label()}
                                            selected={interest == form.interest}
                                        >
                                            {interest.label()}
                                        </option>
                                    }) }
                                </select>
                            </div>

                            <div class="contact-field">
                                <label for="contact-message">{"Mensagem"}</label>
                                <textarea
                                    id="contact-message"
                                    rows="4"
                                    required={true}
                                    placeholder="Conte um pouco sobre seu projeto..."
                                    value={form.message.clone()}
                                    oninput={on_message}
                                />
                            </div>

                            <CapsuleButton full_width={true} button_type="submit" disabled={submitting}>
                                { if submitting { "Enviando..." } else { "Enviar Mensagem" } }
                            </CapsuleButton>
                        </form>
                    }
                </div>
            </section>
            <style>
                {r#"
                .contact-page {
                    padding: 8rem 0 5rem;
                }
                .contact-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }
                .contact-info h1 {
                    font-family: var(--font-display);
                    font-size: 3rem;
                    color: var(--axen-ivory);
                    margin-bottom: 2rem;
                }
                .contact-lead {
                    font-size: 1.25rem;
                    color: var(--axen-gray);
                    margin-bottom: 3rem;
                }
                .contact-cards {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .contact-card {
                    display: flex;
                    align-items: flex-start;
                    gap: 1.5rem;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: rgba(18, 18, 18, 0.3);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                }
                .contact-card-icon {
                    padding: 0.75rem 1rem;
                    border-radius: 9999px;
                    background: rgba(62, 230, 219, 0.1);
                    color: var(--axen-turquoise);
                    font-size: 1.25rem;
                }
                .contact-card h3 {
                    color: var(--axen-ivory);
                    font-weight: 700;
                    margin-bottom: 0.25rem;
                }
                .contact-card p {
                    color: var(--axen-gray);
                }
                .contact-form-panel {
                    position: relative;
                    overflow: hidden;
                    background: var(--axen-darkgray);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 3rem;
                    padding: 3rem;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .contact-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .contact-field label {
                    margin-left: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--axen-ivory);
                }
                .contact-field input,
                .contact-field select,
                .contact-field textarea {
                    width: 100%;
                    background: rgba(0, 0, 0, 0.4);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    padding: 1rem 1.5rem;
                    color: var(--axen-ivory);
                    font: inherit;
                    outline: none;
                    transition: border-color 0.3s ease, box-shadow 0.3s ease;
                }
                .contact-field textarea {
                    resize: none;
                }
                .contact-field select {
                    appearance: none;
                    cursor: pointer;
                }
                .contact-field input:focus,
                .contact-field select:focus,
                .contact-field textarea:focus {
                    border-color: var(--axen-turquoise);
                    box-shadow: 0 0 0 1px var(--axen-turquoise);
                }
                .contact-success {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 5rem 0;
                    animation: successPop 0.4s ease-out;
                }
                @keyframes successPop {
                    from { opacity: 0; transform: scale(0.8); }
                    to { opacity: 1; transform: scale(1); }
                }
                .contact-success-icon {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2.5rem;
                    color: #22c55e;
                    background: rgba(34, 197, 94, 0.2);
                    margin-bottom: 1.5rem;
                }
                .contact-success h3 {
                    font-family: var(--font-display);
                    font-size: 1.5rem;
                    color: var(--axen-ivory);
                    margin-bottom: 0.5rem;
                }
                .contact-success p {
                    color: var(--axen-gray);
                }
                .contact-again {
                    margin-top: 2rem;
                    background: none;
                    border: none;
                    color: var(--axen-turquoise);
                    text-decoration: underline;
                    cursor: pointer;
                    font: inherit;
                }
                @media (max-width: 1024px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                @media (max-width: 768px) {
                    .contact-row {
                        grid-template-columns: 1fr;
                    }
                    .contact-form-panel {
                        padding: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
