//! Builds the inner markup of an activity card.
//!
//! The view layer injects these strings wholesale and rebuilds them on every
//! refresh instead of patching the previous render. Removal controls carry
//! the owning activity and participant email as `data-*` attributes so a
//! delegated click handler can recover them from the live DOM.

use crate::domain::Activity;

/// Escape text for insertion into markup, neutralizing `& < > " '`.
///
/// Applied to every server-echoed string (activity name, description,
/// schedule, participant email) before it reaches the card markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Inner markup of one activity card: heading, description, schedule,
/// remaining capacity, and the participants section.
pub fn activity_card(name: &str, activity: &Activity) -> String {
    format!(
        "<h4>{name}</h4>\
         <p>{description}</p>\
         <p><strong>Schedule:</strong> {schedule}</p>\
         <p><strong>Availability:</strong> {spots} spots left</p>\
         {participants}",
        name = escape_html(name),
        description = escape_html(&activity.description),
        schedule = escape_html(&activity.schedule),
        spots = activity.spots_left(),
        participants = participants_section(name, &activity.participants),
    )
}

/// Participant list with one removal control per entry, or a placeholder
/// when the roster is empty.
fn participants_section(activity_name: &str, participants: &[String]) -> String {
    if participants.is_empty() {
        return "<div class=\"participants\">\
                <strong>Participants:</strong>\
                <p class=\"no-participants\">No participants yet</p>\
                </div>"
            .to_string();
    }

    let items: String = participants
        .iter()
        .map(|email| {
            format!(
                "<li class=\"participant-item\">\
                 <span class=\"participant-name\">{email}</span>\
                 <button class=\"delete-btn\" data-activity=\"{activity}\" \
                 data-email=\"{email}\" title=\"Remove participant\">\u{d7}</button>\
                 </li>",
                email = escape_html(email),
                activity = escape_html(activity_name),
            )
        })
        .collect();

    format!(
        "<div class=\"participants\">\
         <strong>Participants:</strong>\
         <ul>{items}</ul>\
         </div>"
    )
}
