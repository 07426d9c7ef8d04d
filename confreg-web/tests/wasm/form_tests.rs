use confreg_web::app::App;
use confreg_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventTarget, HtmlInputElement, HtmlSelectElement};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn mount_app() {
    confreg_web::i18n::set_lang("en");
    let root = dom::document()
        .unwrap()
        .get_element_by_id("app")
        .expect("test page provides #app");
    yew::Renderer::<App>::with_root(root).render();
}

fn dispatch_change(el: &web_sys::Element) {
    let event = Event::new("change").unwrap();
    let target: EventTarget = el.clone().into();
    let _ = target.dispatch_event(&event);
}

#[wasm_bindgen_test]
fn form_mounts_with_live_region_and_default_panels() {
    mount_app();
    let doc = dom::document().unwrap();
    let status = doc.get_element_by_id("form-status").expect("live region");
    assert_eq!(status.get_attribute("aria-live").unwrap(), "polite");
    assert!(doc.get_element_by_id("cc-num").is_some());
    assert!(doc.get_element_by_id("paypal").is_none());
    let color = doc
        .get_element_by_id("color")
        .unwrap()
        .dyn_into::<HtmlSelectElement>()
        .unwrap();
    assert!(color.disabled(), "colour select starts disabled");
}

#[wasm_bindgen_test]
fn checking_a_workshop_updates_total_and_disables_its_peer() {
    mount_app();
    let doc = dom::document().unwrap();
    let checkbox = doc
        .get_element_by_id("async-rust")
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    checkbox.set_checked(true);
    dispatch_change(&checkbox);

    let peer = doc
        .get_element_by_id("api-design")
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    assert!(peer.disabled(), "same-slot workshop is disabled");
    assert!(!peer.checked(), "peer is disabled, never unchecked");

    let cost = doc
        .query_selector(".activities-cost")
        .unwrap()
        .expect("total line");
    assert!(cost.text_content().unwrap_or_default().contains("$100"));
}

#[wasm_bindgen_test]
fn submitting_the_empty_form_marks_invalid_fields() {
    mount_app();
    let doc = dom::document().unwrap();
    let form = doc.get_element_by_id("registration").expect("form");
    let event = Event::new("submit").unwrap();
    let target: EventTarget = form.clone().into();
    let _ = target.dispatch_event(&event);

    let flagged = doc.query_selector_all(".not-valid").unwrap();
    assert!(flagged.length() >= 3, "name, email, and activities flagged");
    assert!(doc.get_element_by_id("registration").is_some(), "form stays up");
}
