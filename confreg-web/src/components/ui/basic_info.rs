use crate::components::ui::text_field::TextField;
use crate::i18n::t;
use confreg_form::JobRole;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BasicInfoProps {
    pub name: AttrValue,
    pub email: AttrValue,
    pub job_role: JobRole,
    pub other_role: AttrValue,
    pub name_state: Option<bool>,
    pub email_state: Option<bool>,
    pub on_name_input: Callback<String>,
    pub on_email_input: Callback<String>,
    pub on_role_change: Callback<JobRole>,
    pub on_other_role_input: Callback<String>,
    #[prop_or_default]
    pub lang: AttrValue,
}

#[function_component(BasicInfo)]
pub fn basic_info(props: &BasicInfoProps) -> Html {
    // Focus the name field once, when the form first mounts.
    #[cfg(target_arch = "wasm32")]
    {
        use_effect_with((), |()| {
            if let Some(el) = crate::dom::element_by_id("name")
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            {
                let _ = el.focus();
            }
            || {}
        });
    }

    let on_role_change = {
        let cb = props.on_role_change.clone();
        #[cfg(target_arch = "wasm32")]
        {
            Callback::from(move |e: web_sys::Event| {
                if let Some(role) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                    .and_then(|sel| sel.value().parse::<JobRole>().ok())
                {
                    cb.emit(role);
                }
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = cb;
            Callback::from(|_e: web_sys::Event| {})
        }
    };

    html! {
        <fieldset class="basic-info" data-testid="basic-info">
            <legend>{ t("basic.title") }</legend>
            <TextField
                id="name"
                label={t("basic.name_label")}
                value={props.name.clone()}
                hint={t("basic.name_hint")}
                state={props.name_state}
                on_input={props.on_name_input.clone()}
            />
            <TextField
                id="email"
                label={t("basic.email_label")}
                value={props.email.clone()}
                hint={t("basic.email_hint")}
                input_type="email"
                state={props.email_state}
                on_input={props.on_email_input.clone()}
            />
            <div class="field">
                <label for="title">{ t("basic.role_label") }</label>
                <select id="title" onchange={on_role_change} data-testid="job-role">
                    { for JobRole::ALL.into_iter().map(|role| html! {
                        <option value={role.as_str()} selected={role == props.job_role}>
                            { t(&format!("role.{}", role.as_str())) }
                        </option>
                    }) }
                </select>
            </div>
            if props.job_role.is_other() {
                <div class="field">
                    <label for="other-job-role" class="sr-only">{ t("basic.other_role_label") }</label>
                    <input
                        id="other-job-role"
                        type="text"
                        value={props.other_role.clone()}
                        placeholder={t("basic.other_role_placeholder")}
                        oninput={{
                            let cb = props.on_other_role_input.clone();
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
                        }}
                    />
                </div>
            }
        </fieldset>
    }
}
