use crate::i18n::t;
use confreg_form::{ShirtColor, ShirtDesign, ShirtSelection};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ShirtPickerProps {
    pub shirt: ShirtSelection,
    pub on_design_change: Callback<ShirtDesign>,
    pub on_color_change: Callback<ShirtColor>,
    #[prop_or_default]
    pub lang: AttrValue,
}

#[cfg(target_arch = "wasm32")]
fn select_value(e: &web_sys::Event) -> Option<String> {
    e.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        .map(|sel| sel.value())
}

#[function_component(ShirtPicker)]
pub fn shirt_picker(props: &ShirtPickerProps) -> Html {
    let on_design = {
        let cb = props.on_design_change.clone();
        Callback::from(move |e: Event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(design) = select_value(&e).and_then(|v| v.parse::<ShirtDesign>().ok())
                {
                    cb.emit(design);
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &cb);
            }
        })
    };

    let on_color = {
        let cb = props.on_color_change.clone();
        Callback::from(move |e: Event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(color) = select_value(&e).and_then(|v| v.parse::<ShirtColor>().ok()) {
                    cb.emit(color);
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &cb);
            }
        })
    };

    // Colours for the active design only; others are removed, not disabled.
    let colors = props.shirt.design.map(ShirtColor::for_design).unwrap_or_default();

    html! {
        <fieldset class="shirt" data-testid="shirt">
            <legend>{ t("shirt.title") }</legend>
            <div class="field">
                <label for="design">{ t("shirt.design_label") }</label>
                <select id="design" onchange={on_design} data-testid="shirt-design">
                    <option value="" disabled=true selected={props.shirt.design.is_none()}>
                        { t("shirt.design_placeholder") }
                    </option>
                    { for ShirtDesign::ALL.into_iter().map(|design| html! {
                        <option value={design.as_str()} selected={props.shirt.design == Some(design)}>
                            { t(&format!("shirt.design.{}", design.as_str())) }
                        </option>
                    }) }
                </select>
            </div>
            <div class="field">
                <label for="color">{ t("shirt.color_label") }</label>
                <select
                    id="color"
                    onchange={on_color}
                    disabled={props.shirt.design.is_none()}
                    data-testid="shirt-color"
                >
                    <option value="" disabled=true selected={props.shirt.color.is_none()}>
                        { t("shirt.color_placeholder") }
                    </option>
                    { for colors.into_iter().map(|color| html! {
                        <option value={color.as_str()} selected={props.shirt.color == Some(color)}>
                            { t(&format!("shirt.color.{}", color.as_str())) }
                        </option>
                    }) }
                </select>
            </div>
        </fieldset>
    }
}
