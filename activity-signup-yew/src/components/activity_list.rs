use yew::prelude::*;

use crate::hooks::use_catalog;

use super::activity_card::ActivityCard;

#[derive(Properties, PartialEq)]
pub struct ActivityListProps {
    pub on_unregister: Callback<(String, String)>,
}

/// The visible list of activities: a loading placeholder before the first
/// fetch resolves, a static failure message when the latest fetch failed,
/// otherwise one card per catalog entry. Rebuilt wholesale on every refresh.
#[function_component(ActivityList)]
pub fn activity_list(props: &ActivityListProps) -> Html {
    let catalog = use_catalog();

    html! {
        <div id="activities-list">
            {if catalog.load_failed {
                html! {
                    <p>{"Failed to load activities. Please try again later."}</p>
                }
            } else if let Some(catalog) = &catalog.catalog {
                html! {
                    <>
                        {for catalog.iter().map(|(name, activity)| html! {
                            <ActivityCard
                                key={name.clone()}
                                name={name.clone()}
                                activity={activity.clone()}
                                on_unregister={props.on_unregister.clone()}
                            />
                        })}
                    </>
                }
            } else {
                html! {
                    <p>{"Loading activities..."}</p>
                }
            }}
        </div>
    }
}
