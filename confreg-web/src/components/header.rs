use crate::i18n::{locales, t};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HeaderProps {
    pub current_lang: String,
    pub on_lang_change: Callback<String>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_change = {
        let cb = props.on_lang_change.clone();
        #[cfg(target_arch = "wasm32")]
        {
            Callback::from(move |e: web_sys::Event| {
                if let Some(sel) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                {
                    cb.emit(sel.value());
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
        <header class="site-header" role="banner">
            <h1>{ t("site.title") }</h1>
            <p class="tagline">{ t("site.tagline") }</p>
            <nav aria-label={t("nav.language")}>
                <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                <select id="lang-select" onchange={on_change} data-testid="language-select">
                    { for locales().iter().map(|meta| html! {
                        <option value={meta.code} selected={meta.code == props.current_lang}>
                            { meta.name }
                        </option>
                    }) }
                </select>
            </nav>
        </header>
    }
}
