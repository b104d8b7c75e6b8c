use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub fn button(p: &Props) -> Html {
    let onclick = p.onclick.clone();
    let label = p.label.clone();
    let class = classes!("btn", p.class.clone());
    html! {
        <button type="button" id={p.id.clone()} {class} disabled={p.disabled} {onclick}>
            { label }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn button_renders_label() {
        let props = Props {
            label: AttrValue::from("Open pack"),
            id: Some(AttrValue::from("openBtn")),
            class: Classes::new(),
            disabled: false,
            onclick: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Button>::with_props(props).render());
        assert!(html.contains("Open pack"));
        assert!(html.contains("openBtn"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn disabled_button_carries_attribute() {
        let props = Props {
            label: AttrValue::from("Spin"),
            id: None,
            class: classes!("btn-spin"),
            disabled: true,
            onclick: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Button>::with_props(props).render());
        assert!(html.contains("disabled"));
        assert!(html.contains("btn-spin"));
    }
}
