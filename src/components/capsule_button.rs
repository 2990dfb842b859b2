use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Normal,
    Small,
}

#[derive(Properties, PartialEq)]
pub struct CapsuleButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize, full_width: bool) -> Classes {
    let variant = match variant {
        ButtonVariant::Primary => "capsule-primary",
        ButtonVariant::Outline => "capsule-outline",
        ButtonVariant::Ghost => "capsule-ghost",
    };
    let size = match size {
        ButtonSize::Normal => "capsule-normal",
        ButtonSize::Small => "capsule-small",
    };
    classes!("capsule-button", variant, size, full_width.then_some("capsule-full"))
}

#[function_component(CapsuleButton)]
pub fn capsule_button(props: &CapsuleButtonProps) -> Html {
    let onclick = props.onclick.clone().unwrap_or_else(Callback::noop);

    html! {
        <button
            type={props.button_type.clone()}
            class={classes!(button_classes(props.variant, props.size, props.full_width), props.class.clone())}
            disabled={props.disabled}
            {onclick}
        >
            <span class="capsule-content">{ for props.children.iter() }</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_primary_normal() {
        let classes = button_classes(ButtonVariant::default(), ButtonSize::default(), false);
        assert_eq!(classes.to_string(), "capsule-button capsule-primary capsule-normal");
    }

    #[test]
    fn small_outline_full_width() {
        let classes = button_classes(ButtonVariant::Outline, ButtonSize::Small, true);
        assert!(classes.contains("capsule-outline"));
        assert!(classes.contains("capsule-small"));
        assert!(classes.contains("capsule-full"));
        assert!(!classes.contains("capsule-primary"));
    }

    #[test]
    fn ghost_variant() {
        let classes = button_classes(ButtonVariant::Ghost, ButtonSize::Normal, false);
        assert!(classes.contains("capsule-ghost"));
        assert!(!classes.contains("capsule-full"));
    }
}
