use crate::i18n::{t, tr};
use confreg_form::{ActivityCatalog, ActivitySelection};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct ActivityListProps {
    pub catalog: Rc<ActivityCatalog>,
    pub selection: ActivitySelection,
    /// Verdict for the at-least-one-activity rule; `None` before submit.
    pub state: Option<bool>,
    pub on_toggle: Callback<(String, bool)>,
    #[prop_or_default]
    pub lang: AttrValue,
}

impl PartialEq for ActivityListProps {
    fn eq(&self, other: &Self) -> bool {
        // Compare the fields that affect rendering decisions
        self.catalog == other.catalog
            && self.selection == other.selection
            && self.state == other.state
            && self.lang == other.lang
    }
}

fn dollars(cents: u32) -> String {
    (cents / 100).to_string()
}

fn container_class(state: Option<bool>) -> String {
    match state {
        Some(true) => "activities valid".to_string(),
        Some(false) => "activities not-valid".to_string(),
        None => "activities".to_string(),
    }
}

#[function_component(ActivityList)]
pub fn activity_list(props: &ActivityListProps) -> Html {
    // Purely cosmetic: the focused checkbox highlights its label.
    let focused = use_state(|| None::<String>);

    let total = {
        let amount = props.selection.total_dollars().to_string();
        let mut args = BTreeMap::new();
        args.insert("amount", amount.as_str());
        tr("activities.total", Some(&args))
    };

    let items = props.catalog.iter().map(|activity| {
        let id = activity.id.clone();
        let checked = props.selection.is_checked(&id);
        let blocked = props.selection.is_blocked(&props.catalog, &id);
        let is_focused = focused.as_deref() == Some(id.as_str());

        let onchange = {
            let cb = props.on_toggle.clone();
            let id = id.clone();
            Callback::from(move |e: Event| {
                #[cfg(target_arch = "wasm32")]
                {
                    if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                        cb.emit((id.clone(), input.checked()));
                    }
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    let _ = (&e, &cb, &id);
                }
            })
        };
        let onfocus = {
            let focused = focused.clone();
            let id = id.clone();
            Callback::from(move |_: FocusEvent| focused.set(Some(id.clone())))
        };
        let onblur = {
            let focused = focused.clone();
            Callback::from(move |_: FocusEvent| focused.set(None))
        };

        let schedule = activity.slot.as_ref().map(|slot| slot.label());
        let cost_text = {
            let amount = dollars(activity.cost_cents);
            let mut args = BTreeMap::new();
            args.insert("amount", amount.as_str());
            tr("activities.cost", Some(&args))
        };
        html! {
            <label class={classes!(is_focused.then_some("focus"))} key={id.clone()}>
                <input
                    type="checkbox"
                    id={id.clone()}
                    name={id.clone()}
                    checked={checked}
                    disabled={blocked}
                    data-cost={dollars(activity.cost_cents)}
                    data-day-and-time={schedule.clone()}
                    {onchange}
                    {onfocus}
                    {onblur}
                />
                <span class="activity-name">{ &activity.name }</span>
                { schedule.map_or_else(Html::default, |label| html! {
                    <span class="activity-schedule">{ label }</span>
                }) }
                <span class="activity-cost">{ cost_text }</span>
            </label>
        }
    });

    html! {
        <fieldset class={container_class(props.state)} id="activities" data-testid="activities">
            <legend>{ t("activities.title") }</legend>
            <span class="hint" hidden={props.state != Some(false)}>{ t("activities.hint") }</span>
            <div class="activities-box">
                { for items }
            </div>
            <p class="activities-cost" aria-live="polite">{ total }</p>
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_class_reflects_submission_verdict() {
        assert_eq!(container_class(None), "activities");
        assert_eq!(container_class(Some(true)), "activities valid");
        assert_eq!(container_class(Some(false)), "activities not-valid");
    }

    #[test]
    fn costs_render_as_whole_dollars() {
        assert_eq!(dollars(20000), "200");
        assert_eq!(dollars(0), "0");
    }
}
