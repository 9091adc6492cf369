use yew::prelude::*;

/// Styling applied to the transient status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// A message shown in the area under the sign-up form.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub text: String,
    pub severity: Severity,
}

impl Status {
    pub fn success(text: impl Into<String>) -> Self {
        Status {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Status {
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusMessageProps {
    pub status: Option<Status>,
}

/// Message area under the sign-up form; hidden whenever no status is live.
#[function_component(StatusMessage)]
pub fn status_message(props: &StatusMessageProps) -> Html {
    match &props.status {
        Some(status) => html! {
            <div id="message" class={classes!(status.severity.css_class())}>
                {&status.text}
            </div>
        },
        None => html! {
            <div id="message" class={classes!("hidden")}></div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_class_per_severity() {
        assert_eq!(Severity::Success.css_class(), "success");
        assert_eq!(Severity::Error.css_class(), "error");
    }

    #[test]
    fn test_constructors_pick_the_severity() {
        let status = Status::success("Signed up!");
        assert_eq!(status.text, "Signed up!");
        assert_eq!(status.severity, Severity::Success);

        let status = Status::error("Activity full");
        assert_eq!(status.severity, Severity::Error);
    }
}
