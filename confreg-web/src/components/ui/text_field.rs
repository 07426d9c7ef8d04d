use yew::prelude::*;

/// Container class for a validated field: neutral until a verdict exists.
fn field_class(state: Option<bool>) -> String {
    match state {
        Some(true) => "field valid".to_string(),
        Some(false) => "field not-valid".to_string(),
        None => "field".to_string(),
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    /// Hint shown inside the container while the field is invalid.
    pub hint: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    /// `None` until the field has been validated at least once.
    #[prop_or_default]
    pub state: Option<bool>,
    #[prop_or_default]
    pub on_input: Callback<String>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let on_input = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                    cb.emit(input.value());
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &cb);
            }
        })
    };

    html! {
        <div class={field_class(props.state)} data-testid={props.id.clone()}>
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                oninput={on_input}
            />
            <span class="hint" hidden={props.state != Some(false)}>{ props.hint.clone() }</span>
        </div>
    }
}
