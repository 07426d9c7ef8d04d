use crate::a11y;
use crate::components::ui::activity_list::ActivityList;
use crate::components::ui::basic_info::BasicInfo;
use crate::components::ui::payment_panel::PaymentPanel;
use crate::components::ui::shirt_picker::ShirtPicker;
use crate::i18n::{t, tr};
use confreg_form::{
    ActivityCatalog, Field, FieldError, Registration, ValidationReport, check_email, check_name,
};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

/// Verdict for a live-validated text field.
///
/// A non-empty field is re-checked on every edit so the hint updates
/// before submission; an empty one shows nothing until a submit attempt
/// has produced a report.
fn live_state(
    value: &str,
    report: Option<&ValidationReport>,
    field: Field,
    check: fn(&str) -> Result<(), FieldError>,
) -> Option<bool> {
    if value.is_empty() {
        report.and_then(|r| r.field_state(field))
    } else {
        Some(check(value).is_ok())
    }
}

fn confirmation_view(registration: &Registration) -> Html {
    let amount = registration.activities.total_dollars().to_string();
    let body = {
        let mut args = BTreeMap::new();
        args.insert("name", registration.registrant.name.trim());
        args.insert("email", registration.registrant.email.as_str());
        tr("form.submitted_body", Some(&args))
    };
    let total = {
        let mut args = BTreeMap::new();
        args.insert("amount", amount.as_str());
        tr("form.submitted_total", Some(&args))
    };
    html! {
        <section class="confirmation" data-testid="confirmation">
            <h2>{ t("form.submitted_title") }</h2>
            <p>{ body }</p>
            <p>{ total }</p>
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct RegistrationPageProps {
    #[prop_or_default]
    pub lang: AttrValue,
}

#[function_component(RegistrationPage)]
pub fn registration_page(props: &RegistrationPageProps) -> Html {
    let catalog = use_state(ActivityCatalog::load_from_static);
    let registration = use_state(Registration::default);
    let report = use_state(|| None::<ValidationReport>);
    let completed = use_state(|| false);

    // Build a Callback<String> that writes one field of the registration.
    let edit = |apply: fn(&mut Registration, String)| {
        let registration = registration.clone();
        Callback::from(move |value: String| {
            let mut reg = (*registration).clone();
            apply(&mut reg, value);
            registration.set(reg);
        })
    };

    let on_name_input = edit(|reg, v| reg.registrant.name = v);
    let on_email_input = edit(|reg, v| reg.registrant.email = v);
    let on_other_role_input = edit(|reg, v| reg.registrant.other_role = v);
    let on_number_input = edit(|reg, v| reg.payment.card.number = v);
    let on_zip_input = edit(|reg, v| reg.payment.card.zip = v);
    let on_cvv_input = edit(|reg, v| reg.payment.card.cvv = v);

    let on_role_change = {
        let registration = registration.clone();
        Callback::from(move |role| {
            let mut reg = (*registration).clone();
            reg.registrant.job_role = role;
            registration.set(reg);
        })
    };

    let on_design_change = {
        let registration = registration.clone();
        Callback::from(move |design| {
            let mut reg = (*registration).clone();
            reg.shirt.set_design(design);
            registration.set(reg);
        })
    };

    let on_color_change = {
        let registration = registration.clone();
        Callback::from(move |color| {
            let mut reg = (*registration).clone();
            let _ = reg.shirt.set_color(color);
            registration.set(reg);
        })
    };

    let on_method_change = {
        let registration = registration.clone();
        Callback::from(move |method| {
            let mut reg = (*registration).clone();
            reg.payment.method = method;
            registration.set(reg);
        })
    };

    let on_toggle = {
        let registration = registration.clone();
        let catalog = catalog.clone();
        Callback::from(move |(id, checked): (String, bool)| {
            let mut reg = (*registration).clone();
            if reg.activities.set_checked(&catalog, &id, checked) {
                let amount = reg.activities.total_dollars().to_string();
                let mut args = BTreeMap::new();
                args.insert("amount", amount.as_str());
                a11y::set_status(&tr("form.status_total", Some(&args)));
            }
            registration.set(reg);
        })
    };

    let on_submit = {
        let registration = registration.clone();
        let report = report.clone();
        let completed = completed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let outcome = registration.validate();
            if outcome.is_ok() {
                completed.set(true);
                a11y::set_status(&t("form.status_submitted"));
            } else {
                a11y::set_status(&t("form.status_invalid"));
            }
            report.set(Some(outcome));
        })
    };

    let reg = &*registration;
    let rep = (*report).as_ref();
    let name_state = live_state(&reg.registrant.name, rep, Field::Name, check_name);
    let email_state = live_state(&reg.registrant.email, rep, Field::Email, check_email);
    // Activities and card fields keep the verdict of the last submit
    // attempt until the next one.
    let activities_state = rep.and_then(|r| r.field_state(Field::Activities));
    let number_state = rep.and_then(|r| r.field_state(Field::CardNumber));
    let zip_state = rep.and_then(|r| r.field_state(Field::CardZip));
    let cvv_state = rep.and_then(|r| r.field_state(Field::CardCvv));

    let body = if *completed {
        confirmation_view(reg)
    } else {
        html! {
            <form id="registration" onsubmit={on_submit} novalidate=true>
                <BasicInfo
                    name={reg.registrant.name.clone()}
                    email={reg.registrant.email.clone()}
                    job_role={reg.registrant.job_role}
                    other_role={reg.registrant.other_role.clone()}
                    {name_state}
                    {email_state}
                    {on_name_input}
                    {on_email_input}
                    {on_role_change}
                    {on_other_role_input}
                    lang={props.lang.clone()}
                />
                <ShirtPicker
                    shirt={reg.shirt}
                    {on_design_change}
                    {on_color_change}
                    lang={props.lang.clone()}
                />
                <ActivityList
                    catalog={Rc::new((*catalog).clone())}
                    selection={reg.activities.clone()}
                    state={activities_state}
                    {on_toggle}
                    lang={props.lang.clone()}
                />
                <PaymentPanel
                    payment={reg.payment.clone()}
                    {number_state}
                    {zip_state}
                    {cvv_state}
                    {on_method_change}
                    {on_number_input}
                    {on_zip_input}
                    {on_cvv_input}
                    lang={props.lang.clone()}
                />
                <button type="submit" id="register-btn">{ t("form.register") }</button>
            </form>
        }
    };

    html! {
        <section class="registration">
            { body }
        </section>
    }
}
