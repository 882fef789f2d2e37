//! Board markup.
//!
//! Every value that originates from the API is passed through
//! [`escape_html`] before it is embedded. Card order follows input order.

use std::fmt::Write as _;

use crate::users::UserRecord;
use crate::users::record::{Address, field_text};

pub const LOADING_NOTICE: &str = "Loading user data...";
pub const EMPTY_NOTICE: &str = "No users found.";

/// Static hints shown under every error message.
pub const TROUBLESHOOTING_HINTS: [&str; 3] = [
    "Check your internet connection",
    "Try refreshing the page",
    "Verify the API endpoint is accessible",
];

/// Escape text for safe embedding in element content and quoted attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Avatar initials: first character of each whitespace-separated word, upper-cased.
#[must_use]
pub fn user_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Fixed three-line address block. Coordinates are not range-checked.
#[must_use]
pub fn format_address(address: &Address) -> String {
    format!(
        "{}, {}<br>\n{}, {}<br>\nGeo: {}, {}",
        escape_html(&field_text(address.street.as_ref())),
        escape_html(&field_text(address.suite.as_ref())),
        escape_html(&field_text(address.city.as_ref())),
        escape_html(&field_text(address.zipcode.as_ref())),
        escape_html(&field_text(address.geo.lat.as_ref())),
        escape_html(&field_text(address.geo.lng.as_ref())),
    )
}

#[must_use]
pub fn render_loading() -> String {
    format!(r#"<div class="loading">{LOADING_NOTICE}</div>"#)
}

/// Error panel: the message followed by the static troubleshooting list.
#[must_use]
pub fn render_error(message: &str) -> String {
    let mut hints = String::new();
    for hint in TROUBLESHOOTING_HINTS {
        let _ = write!(hints, "\n        <li>{hint}</li>");
    }
    format!(
        r#"<div class="error">
    <strong>⚠️ Error:</strong> {}
    <br><br>
    <strong>Troubleshooting tips:</strong>
    <ul class="hints">{hints}
    </ul>
</div>"#,
        escape_html(message)
    )
}

/// Render the populated board, or the empty notice when there is nothing to show.
#[must_use]
pub fn render_users(users: &[UserRecord]) -> String {
    if users.is_empty() {
        return format!(r#"<div class="error">{EMPTY_NOTICE}</div>"#);
    }

    let cards: String = users.iter().map(render_card).collect();
    format!(
        r#"<div class="stats">📊 Displaying {} users</div>
<div class="users-grid">{cards}
</div>"#,
        users.len()
    )
}

fn render_card(user: &UserRecord) -> String {
    let name = user.display_name();
    let mut html = String::new();
    let _ = write!(
        html,
        r#"
<div class="user-card" data-user-id="{id}">
    <div class="user-header">
        <div class="user-avatar">{initials}</div>
        <div class="user-name">{name}</div>
    </div>
    <div class="user-info">"#,
        id = escape_html(&field_text(user.id.as_ref())),
        initials = escape_html(&user_initials(&name)),
        name = escape_html(&name),
    );

    for (label, value) in [
        ("📧 Email:", &user.email),
        ("📱 Phone:", &user.phone),
        ("🌐 Website:", &user.website),
        ("🏢 Company:", &user.company.name),
    ] {
        let _ = write!(
            html,
            r#"
        <div class="info-item">
            <span class="info-label">{label}</span>
            <span class="info-value">{}</span>
        </div>"#,
            escape_html(&field_text(value.as_ref()))
        );
    }

    let _ = write!(
        html,
        r#"
        <div class="address">
            <div class="address-title">📍 Address:</div>
            <div class="info-value">{}</div>
        </div>
    </div>
</div>"#,
        format_address(&user.address)
    );
    html
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
