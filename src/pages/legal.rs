use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalDocument {
    Privacy,
    Terms,
}

impl LegalDocument {
    pub fn placeholder(self) -> &'static str {
        match self {
            LegalDocument::Privacy => "Política de Privacidade...",
            LegalDocument::Terms => "Termos de Uso...",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalProps {
    pub document: LegalDocument,
}

// Placeholder until the legal copy is written.
#[function_component(Legal)]
pub fn legal(props: &LegalProps) -> Html {
    html! {
        <div class="legal-page">
            {props.document.placeholder()}
            <style>
                {r#"
                .legal-page {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 5rem;
                    color: var(--axen-ivory);
                }
                "#}
            </style>
        </div>
    }
}
