use activity_signup_core::{markup, Activity};
use gloo::dialogs::confirm;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub name: AttrValue,
    pub activity: Activity,

    /// Emitted as `(activity name, participant email)` once the user has
    /// confirmed the removal.
    pub on_unregister: Callback<(String, String)>,
}

/// One activity card.
///
/// The body markup is rebuilt from scratch on every render; a delegated
/// click handler recovers the removal target from the `data-*` attributes
/// captured at render time, asks for confirmation, and only then emits
/// `on_unregister`.
#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let body = markup::activity_card(&props.name, &props.activity);

    let onclick = {
        let on_unregister = props.on_unregister.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = e.target_dyn_into::<web_sys::Element>() else {
                return;
            };
            let Ok(Some(control)) = target.closest(".delete-btn") else {
                return;
            };
            e.prevent_default();

            let (Some(activity), Some(email)) = (
                control.get_attribute("data-activity"),
                control.get_attribute("data-email"),
            ) else {
                return;
            };

            if confirm(&confirm_prompt(&email, &activity)) {
                on_unregister.emit((activity, email));
            }
        })
    };

    html! {
        <div class="activity-card" {onclick}>
            {Html::from_html_unchecked(AttrValue::from(body))}
        </div>
    }
}

fn confirm_prompt(email: &str, activity: &str) -> String {
    format!("Are you sure you want to unregister {email} from {activity}?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_prompt_interpolates_email_and_activity() {
        assert_eq!(
            confirm_prompt("a@b.com", "Chess Club"),
            "Are you sure you want to unregister a@b.com from Chess Club?"
        );
    }
}
