use activity_signup_core::ApiError;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_catalog;

use super::status_message::{Status, StatusMessage};

/// How long a status message stays visible.
const STATUS_VISIBLE_MS: u32 = 5_000;

/// Sign-up form: email input, activity selection control, submit button, and
/// the transient status area. Both fields clear on a successful submission,
/// which also triggers a catalog refresh.
#[function_component(SignupForm)]
pub fn signup_form() -> Html {
    let catalog = use_catalog();

    let email = use_state(String::new);
    let selected = use_state(String::new);
    let status = use_state(|| None::<Status>);
    let status_seq = use_mut_ref(|| 0u64);

    // Reveal a status message and hide it again after the fixed delay,
    // unless a newer message has taken over in the meantime.
    let show_status = {
        let status = status.clone();
        let status_seq = status_seq.clone();
        move |next: Status| {
            let seq = {
                let mut counter = status_seq.borrow_mut();
                *counter += 1;
                *counter
            };
            status.set(Some(next));

            let status = status.clone();
            let status_seq = status_seq.clone();
            spawn_local(async move {
                TimeoutFuture::new(STATUS_VISIBLE_MS).await;
                if *status_seq.borrow() == seq {
                    status.set(None);
                }
            });
        }
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_activity_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let selected = selected.clone();
        let api = catalog.api.clone();
        let refresh = catalog.refresh.clone();
        let show_status = show_status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let entered_email = (*email).clone();
            let activity = (*selected).clone();

            let email = email.clone();
            let selected = selected.clone();
            let api = api.clone();
            let refresh = refresh.clone();
            let show_status = show_status.clone();

            spawn_local(async move {
                match api.sign_up(&activity, &entered_email).await {
                    Ok(message) => {
                        show_status(Status::success(message));
                        email.set(String::new());
                        selected.set(String::new());
                        refresh.emit(());
                    }
                    Err(err @ ApiError::Rejected { .. }) => {
                        tracing::warn!(%activity, error = %err, "sign-up rejected");
                        show_status(Status::error(err.detail_or("An error occurred")));
                    }
                    Err(err) => {
                        tracing::error!(%activity, error = %err, "sign-up request failed");
                        show_status(Status::error("Failed to sign up. Please try again."));
                    }
                }
            });
        })
    };

    html! {
        <form id="signup-form" {onsubmit}>
            <label for="email">{"Student Email:"}</label>
            <input
                type="email"
                id="email"
                required={true}
                placeholder="your-email@mergington.edu"
                value={(*email).clone()}
                oninput={on_email_input}
            />

            <label for="activity">{"Select Activity:"}</label>
            <select id="activity" required={true} onchange={on_activity_change}>
                <option value="" disabled={true} selected={selected.is_empty()}>
                    {"-- Select an activity --"}
                </option>
                {for catalog.catalog.iter().flat_map(|c| c.names()).map(|name| html! {
                    <option value={name.to_string()} selected={*selected == name}>
                        {name}
                    </option>
                })}
            </select>

            <button type="submit">{"Sign Up"}</button>

            <StatusMessage status={(*status).clone()} />
        </form>
    }
}
