use activity_signup_core::ActivityCatalog;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::client::ActivitiesApi;
use crate::hooks::CatalogContext;

#[derive(Properties, PartialEq)]
pub struct CatalogProviderProps {
    /// Scheme and authority of the backend; empty for same-origin.
    #[prop_or_default]
    pub base_url: AttrValue,

    pub children: Children,
}

/// Owns the activity catalog: fetches it on mount and exposes it through
/// [`CatalogContext`] together with a `refresh` callback that re-fetches and
/// replaces the whole thing.
#[function_component(CatalogProvider)]
pub fn catalog_provider(props: &CatalogProviderProps) -> Html {
    let api = ActivitiesApi::new(props.base_url.to_string());
    let catalog = use_state(|| None::<ActivityCatalog>);
    let load_failed = use_state(|| false);

    // Overlapping refreshes race only through this counter: a response is
    // applied only while no newer refresh has started since it was issued.
    let refresh_epoch = use_mut_ref(|| 0u64);

    let refresh = {
        let api = api.clone();
        let catalog = catalog.clone();
        let load_failed = load_failed.clone();
        let refresh_epoch = refresh_epoch.clone();

        Callback::from(move |_: ()| {
            let epoch = {
                let mut counter = refresh_epoch.borrow_mut();
                *counter += 1;
                *counter
            };

            let api = api.clone();
            let catalog = catalog.clone();
            let load_failed = load_failed.clone();
            let refresh_epoch = refresh_epoch.clone();

            spawn_local(async move {
                let result = api.fetch_catalog().await;

                if *refresh_epoch.borrow() != epoch {
                    tracing::debug!(epoch, "discarding stale catalog response");
                    return;
                }

                match result {
                    Ok(fresh) => {
                        tracing::debug!(activities = fresh.len(), "catalog refreshed");
                        catalog.set(Some(fresh));
                        load_failed.set(false);
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "failed to load activities");
                        load_failed.set(true);
                    }
                }
            });
        })
    };

    // Initial load
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let context = CatalogContext {
        catalog: (*catalog).clone(),
        load_failed: *load_failed,
        api,
        refresh,
    };

    html! {
        <ContextProvider<CatalogContext> {context}>
            {props.children.clone()}
        </ContextProvider<CatalogContext>>
    }
}
