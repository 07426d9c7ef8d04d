use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct FooterProps {
    #[prop_or_default]
    pub lang: AttrValue,
}

#[function_component(Footer)]
pub fn footer(_props: &FooterProps) -> Html {
    html! {
        <footer>{ t("footer.copyright") }</footer>
    }
}
