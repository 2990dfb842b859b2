use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AccordionItemProps {
    pub question: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("accordion-item", (*is_open).then_some("open"))}>
            <button class="accordion-question" onclick={toggle}>
                <span>{&props.question}</span>
                <span class="accordion-chevron">{"⌄"}</span>
            </button>
            if *is_open {
                <div class="accordion-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}
