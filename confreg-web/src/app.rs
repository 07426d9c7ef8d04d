use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::registration::RegistrationPage;
use yew::prelude::*;

/// Root application component.
///
/// Injects the critical accessibility CSS, hosts the polite live region
/// used for announcements, and re-renders the whole page when the locale
/// changes.
#[function_component(App)]
pub fn app() -> Html {
    let current_language = use_state(crate::i18n::current_lang);

    let on_lang_change = {
        let current_language = current_language.clone();
        Callback::from(move |code: String| {
            crate::i18n::set_lang(&code);
            current_language.set(code);
        })
    };

    let lang = AttrValue::from((*current_language).clone());
    html! {
        <main id="main" role="main">
            <style>{ crate::a11y::visible_focus_css() }</style>
            <Header current_lang={(*current_language).clone()} on_lang_change={on_lang_change} />
            <div id="form-status" class="sr-only" role="status" aria-live="polite"></div>
            <RegistrationPage lang={lang.clone()} />
            <Footer {lang} />
        </main>
    }
}
