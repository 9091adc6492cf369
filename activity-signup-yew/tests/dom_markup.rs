#![cfg(target_arch = "wasm32")]

//! Browser-side checks that the card markup survives the DOM round trip:
//! entity-escaped attributes come back as the raw values the unregister
//! operation needs, and hostile text never becomes live markup.

use activity_signup_core::{markup, Activity};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn render(name: &str, activity: &Activity) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let card = document.create_element("div").unwrap();
    card.set_inner_html(&markup::activity_card(name, activity));
    card
}

fn activity(participants: &[&str]) -> Activity {
    Activity {
        description: "Learn strategies and compete in chess tournaments".to_string(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
        max_participants: 12,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

#[wasm_bindgen_test]
fn delete_button_attributes_round_trip_through_the_dom() {
    let card = render(
        r#"Science & "Nature" Club"#,
        &activity(&["o'brien@mergington.edu"]),
    );

    let button = card.query_selector(".delete-btn").unwrap().unwrap();
    assert_eq!(
        button.get_attribute("data-activity").as_deref(),
        Some(r#"Science & "Nature" Club"#)
    );
    assert_eq!(
        button.get_attribute("data-email").as_deref(),
        Some("o'brien@mergington.edu")
    );
}

#[wasm_bindgen_test]
fn hostile_name_renders_as_text_not_markup() {
    let card = render("<img src=x onerror=boom()>", &activity(&[]));

    assert!(card.query_selector("img").unwrap().is_none());
    let heading = card.query_selector("h4").unwrap().unwrap();
    assert_eq!(
        heading.text_content().as_deref(),
        Some("<img src=x onerror=boom()>")
    );
}

#[wasm_bindgen_test]
fn empty_roster_renders_the_placeholder() {
    let card = render("Chess Club", &activity(&[]));

    assert!(card.query_selector(".delete-btn").unwrap().is_none());
    let placeholder = card.query_selector(".no-participants").unwrap().unwrap();
    assert_eq!(
        placeholder.text_content().as_deref(),
        Some("No participants yet")
    );
}
