use activity_signup_core::ApiError;
use gloo::dialogs::alert;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{ActivityList, SignupForm};
use crate::hooks::use_catalog;
use crate::providers::CatalogProvider;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <CatalogProvider>
            <ActivitiesPage />
        </CatalogProvider>
    }
}

/// Page content below the provider: the card list and the sign-up form.
#[function_component(ActivitiesPage)]
fn activities_page() -> Html {
    let catalog = use_catalog();

    let on_unregister = {
        let api = catalog.api.clone();
        let refresh = catalog.refresh.clone();

        Callback::from(move |(activity, email): (String, String)| {
            let api = api.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api.unregister(&activity, &email).await {
                    Ok(()) => refresh.emit(()),
                    Err(err @ ApiError::Rejected { .. }) => {
                        tracing::warn!(%activity, %email, error = %err, "unregister rejected");
                        alert(&format!(
                            "Failed to unregister: {}",
                            err.detail_or("An error occurred")
                        ));
                    }
                    Err(err) => {
                        tracing::error!(%activity, %email, error = %err, "unregister request failed");
                        alert("Failed to unregister. Please try again.");
                    }
                }
            });
        })
    };

    html! {
        <main>
            <section id="activities-container">
                <h3>{"Available Activities"}</h3>
                <ActivityList {on_unregister} />
            </section>
            <section id="signup-container">
                <h3>{"Sign Up for an Activity"}</h3>
                <SignupForm />
            </section>
        </main>
    }
}
