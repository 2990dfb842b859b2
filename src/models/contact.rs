use std::rc::Rc;

use yew::Reducible;

use crate::config::{CHAT_BASE_URL, CHAT_NUMBER};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interest {
    #[default]
    StrategicConsulting,
    AiDevelopment,
    BrandingDesign,
    Partnerships,
    Other,
}

impl Interest {
    pub const ALL: [Interest; 5] = [
        Interest::StrategicConsulting,
        Interest::AiDevelopment,
        Interest::BrandingDesign,
        Interest::Partnerships,
        Interest::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Interest::StrategicConsulting => "Consultoria Estratégica",
            Interest::AiDevelopment => "Desenvolvimento IA",
            Interest::BrandingDesign => "Branding & Design",
            Interest::Partnerships => "Parcerias",
            Interest::Other => "Outro",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|interest| interest.label() == label)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub interest: Interest,
    pub message: String,
}

impl ContactForm {
    /// Name, e-mail and message must hold something other than whitespace.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Plain-text body sent to the chat service.
    pub fn compose_message(&self) -> String {
        let company = match self.company.trim() {
            "" => "Não informada",
            company => company,
        };
        format!(
            "Olá! Vim pelo site da Axen.\n\n\
             Nome: {}\n\
             Empresa: {}\n\
             E-mail: {}\n\
             Interesse: {}\n\n\
             Mensagem:\n{}",
            self.name.trim(),
            company,
            self.email.trim(),
            self.interest.label(),
            self.message.trim(),
        )
    }

    pub fn chat_link(&self) -> String {
        chat_link(CHAT_NUMBER, &self.compose_message())
    }
}

pub fn chat_link(number: &str, text: &str) -> String {
    format!("{}/{}?text={}", CHAT_BASE_URL, number, urlencoding::encode(text))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Company,
    Email,
    Message,
}

pub enum ContactAction {
    Edit(ContactField, String),
    SelectInterest(Interest),
    Submit,
    Delivered,
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmitStatus,
}

impl ContactState {
    pub fn next(&self, action: ContactAction) -> Option<Self> {
        let mut next = self.clone();
        match action {
            ContactAction::Edit(field, value) => {
                if self.status != SubmitStatus::Idle {
                    return None;
                }
                let slot = match field {
                    ContactField::Name => &mut next.form.name,
                    ContactField::Company => &mut next.form.company,
                    ContactField::Email => &mut next.form.email,
                    ContactField::Message => &mut next.form.message,
                };
                *slot = value;
            }
            ContactAction::SelectInterest(interest) => {
                if self.status != SubmitStatus::Idle {
                    return None;
                }
                next.form.interest = interest;
            }
            ContactAction::Submit => {
                if self.status != SubmitStatus::Idle || !self.form.is_complete() {
                    return None;
                }
                next.status = SubmitStatus::Submitting;
            }
            ContactAction::Delivered => {
                if self.status != SubmitStatus::Submitting {
                    return None;
                }
                next.status = SubmitStatus::Success;
            }
            ContactAction::Reset => {
                if self.status != SubmitStatus::Success {
                    return None;
                }
                next = Self::default();
            }
        }
        Some(next)
    }
}

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: ContactAction) -> Rc<Self> {
        match self.next(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ana Souza".to_string(),
            company: "Loja & Cia".to_string(),
            email: "ana@loja.com".to_string(),
            interest: Interest::AiDevelopment,
            message: "Quero automatizar o atendimento.".to_string(),
        }
    }

    #[test]
    fn interest_labels_round_trip() {
        for interest in Interest::ALL {
            assert_eq!(Interest::from_label(interest.label()), Some(interest));
        }
        assert_eq!(Interest::from_label("Nada"), None);
    }

    #[test]
    fn required_fields() {
        assert!(filled().is_complete());

        let mut form = filled();
        form.company.clear();
        assert!(form.is_complete());

        form.email = "   ".to_string();
        assert!(!form.is_complete());
    }

    #[test]
    fn message_template_lists_every_field() {
        let text = filled().compose_message();
        assert!(text.starts_with("Olá! Vim pelo site da Axen."));
        assert!(text.contains("Nome: Ana Souza\n"));
        assert!(text.contains("Empresa: Loja & Cia\n"));
        assert!(text.contains("E-mail: ana@loja.com\n"));
        assert!(text.contains("Interesse: Desenvolvimento IA\n"));
        assert!(text.ends_with("Mensagem:\nQuero automatizar o atendimento."));
    }

    #[test]
    fn blank_company_is_marked_as_missing() {
        let mut form = filled();
        form.company = " ".to_string();
        assert!(form.compose_message().contains("Empresa: Não informada\n"));
    }

    #[test]
    fn chat_link_percent_encodes_text() {
        let link = chat_link("5511999999999", "Olá & tchau\nok?");
        assert_eq!(
            link,
            "https://wa.me/5511999999999?text=Ol%C3%A1%20%26%20tchau%0Aok%3F"
        );
    }

    #[test]
    fn form_link_uses_configured_number() {
        let link = filled().chat_link();
        assert!(link.starts_with("https://wa.me/5511999999999?text="));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
    }

    #[test]
    fn incomplete_form_never_leaves_idle() {
        let state = ContactState::default();
        assert_eq!(state.next(ContactAction::Submit), None);
    }

    #[test]
    fn duplicate_submit_is_ignored() {
        let state = ContactState { form: filled(), status: SubmitStatus::Idle };
        let submitting = state.next(ContactAction::Submit).unwrap();
        assert_eq!(submitting.status, SubmitStatus::Submitting);
        assert_eq!(submitting.next(ContactAction::Submit), None);
    }

    #[test]
    fn fields_are_frozen_while_submitting() {
        let submitting = ContactState { form: filled(), status: SubmitStatus::Submitting };
        assert_eq!(
            submitting.next(ContactAction::Edit(ContactField::Name, "Outro".to_string())),
            None
        );
        assert_eq!(submitting.next(ContactAction::SelectInterest(Interest::Other)), None);
    }

    #[test]
    fn full_cycle_returns_to_empty_idle() {
        let mut state = ContactState::default();
        for (field, value) in [
            (ContactField::Name, "Ana"),
            (ContactField::Email, "ana@loja.com"),
            (ContactField::Message, "Oi"),
        ] {
            state = state.next(ContactAction::Edit(field, value.to_string())).unwrap();
        }
        state = state.next(ContactAction::Submit).unwrap();
        assert_eq!(state.next(ContactAction::Reset), None);

        state = state.next(ContactAction::Delivered).unwrap();
        assert_eq!(state.status, SubmitStatus::Success);

        state = state.next(ContactAction::Reset).unwrap();
        assert_eq!(state, ContactState::default());
    }

    #[test]
    fn late_delivery_after_reset_is_ignored() {
        assert_eq!(ContactState::default().next(ContactAction::Delivered), None);
    }
}
