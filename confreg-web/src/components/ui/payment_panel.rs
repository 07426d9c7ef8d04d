use crate::components::ui::text_field::TextField;
use crate::i18n::t;
use confreg_form::{PaymentInfo, PaymentMethod};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PaymentPanelProps {
    pub payment: PaymentInfo,
    pub number_state: Option<bool>,
    pub zip_state: Option<bool>,
    pub cvv_state: Option<bool>,
    pub on_method_change: Callback<PaymentMethod>,
    pub on_number_input: Callback<String>,
    pub on_zip_input: Callback<String>,
    pub on_cvv_input: Callback<String>,
    #[prop_or_default]
    pub lang: AttrValue,
}

#[function_component(PaymentPanel)]
pub fn payment_panel(props: &PaymentPanelProps) -> Html {
    let on_method = {
        let cb = props.on_method_change.clone();
        Callback::from(move |e: Event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(method) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                    .and_then(|sel| sel.value().parse::<PaymentMethod>().ok())
                {
                    cb.emit(method);
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &cb);
            }
        })
    };

    // Exactly one detail panel is rendered: the one for the active method.
    let detail = match props.payment.method {
        PaymentMethod::CreditCard => html! {
            <div id="credit-card" class="payment-details" data-testid="credit-card-panel">
                <TextField
                    id="cc-num"
                    label={t("payment.cc_num_label")}
                    value={props.payment.card.number.clone()}
                    hint={t("payment.cc_num_hint")}
                    state={props.number_state}
                    on_input={props.on_number_input.clone()}
                />
                <TextField
                    id="zip"
                    label={t("payment.zip_label")}
                    value={props.payment.card.zip.clone()}
                    hint={t("payment.zip_hint")}
                    state={props.zip_state}
                    on_input={props.on_zip_input.clone()}
                />
                <TextField
                    id="cvv"
                    label={t("payment.cvv_label")}
                    value={props.payment.card.cvv.clone()}
                    hint={t("payment.cvv_hint")}
                    state={props.cvv_state}
                    on_input={props.on_cvv_input.clone()}
                />
            </div>
        },
        PaymentMethod::PayPal => html! {
            <div id="paypal" class="payment-details" data-testid="paypal-panel">
                <p>{ t("payment.paypal_note") }</p>
            </div>
        },
        PaymentMethod::Bitcoin => html! {
            <div id="bitcoin" class="payment-details" data-testid="bitcoin-panel">
                <p>{ t("payment.bitcoin_note") }</p>
            </div>
        },
    };

    html! {
        <fieldset class="payment-methods" data-testid="payment">
            <legend>{ t("payment.title") }</legend>
            <div class="field">
                <label for="payment">{ t("payment.method_label") }</label>
                <select id="payment" onchange={on_method} data-testid="payment-method">
                    { for PaymentMethod::ALL.into_iter().map(|method| html! {
                        <option value={method.as_str()} selected={method == props.payment.method}>
                            { t(&format!("payment.method.{}", method.as_str())) }
                        </option>
                    }) }
                </select>
            </div>
            { detail }
        </fieldset>
    }
}
