use super::*;
use crate::users::record::test_helpers::dummy_record;

fn card_count(html: &str) -> usize {
    html.matches(r#"class="user-card""#).count()
}

// =============================================================================
// user_initials
// =============================================================================

#[test]
fn initials_two_words() {
    assert_eq!(user_initials("John Smith"), "JS");
}

#[test]
fn initials_single_word() {
    assert_eq!(user_initials("Madonna"), "M");
}

#[test]
fn initials_empty_name() {
    assert_eq!(user_initials(""), "");
}

#[test]
fn initials_lowercase_and_extra_spaces() {
    assert_eq!(user_initials("  mrs.  dennis schulist "), "MDS");
}

// =============================================================================
// escape_html
// =============================================================================

#[test]
fn escape_html_covers_markup_characters() {
    assert_eq!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
}

#[test]
fn escape_html_leaves_plain_text() {
    assert_eq!(escape_html("Leanne Graham"), "Leanne Graham");
}

// =============================================================================
// render_users
// =============================================================================

#[test]
fn empty_batch_renders_notice_without_cards() {
    let html = render_users(&[]);
    assert!(html.contains(EMPTY_NOTICE));
    assert_eq!(card_count(&html), 0);
    assert!(!html.contains("users-grid"));
}

#[test]
fn one_card_per_record_in_input_order() {
    let users = vec![dummy_record(3, "Clementine Bauch"), dummy_record(1, "Leanne Graham"), dummy_record(2, "Ervin Howell")];
    let html = render_users(&users);

    assert_eq!(card_count(&html), 3);
    assert!(html.contains("Displaying 3 users"));

    let pos = |needle: &str| html.find(needle).unwrap();
    assert!(pos("Clementine Bauch") < pos("Leanne Graham"));
    assert!(pos("Leanne Graham") < pos("Ervin Howell"));
    assert!(pos(r#"data-user-id="3""#) < pos(r#"data-user-id="1""#));
}

#[test]
fn card_shows_contact_company_and_initials() {
    let html = render_users(&[dummy_record(1, "Leanne Graham")]);
    assert!(html.contains(r#"<div class="user-avatar">LG</div>"#));
    assert!(html.contains("user1@example.test"));
    assert!(html.contains("1-770-736-8031 x56442"));
    assert!(html.contains("hildegard.org"));
    assert!(html.contains("Romaguera-Crona"));
}

#[test]
fn record_fields_are_escaped() {
    let mut user = dummy_record(1, "<script>alert(1)</script>");
    user.company.name = Some(serde_json::json!("A & B"));
    user.address.city = Some(serde_json::json!("\"Quoted\""));
    let html = render_users(&[user]);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("A &amp; B"));
    assert!(html.contains("&quot;Quoted&quot;"));
}

// =============================================================================
// format_address
// =============================================================================

#[test]
fn address_layout_embeds_coordinates_verbatim() {
    let mut user = dummy_record(1, "Leanne Graham");
    user.address.geo.lng = Some(serde_json::json!(181.5));
    let text = format_address(&user.address);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["Kulas Light, Apt. 556<br>", "Gwenborough, 92998-3874<br>", "Geo: -37.3159, 181.5"]);
}

// =============================================================================
// loading / error panels
// =============================================================================

#[test]
fn loading_notice() {
    assert!(render_loading().contains(LOADING_NOTICE));
}

#[test]
fn error_panel_has_message_and_three_hints() {
    let html = render_error("Server responded with: HTTP error! status: 404");
    assert!(html.contains("status: 404"));
    assert_eq!(html.matches("<li>").count(), 3);
    for hint in TROUBLESHOOTING_HINTS {
        assert!(html.contains(hint));
    }
}

#[test]
fn error_message_is_escaped() {
    let html = render_error("<b>bad</b>");
    assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
}

#[test]
fn null_and_missing_fields_render_as_blank() {
    let mut user = dummy_record(7, "Kurtis Weissnat");
    user.phone = Some(serde_json::Value::Null);
    user.website = None;
    user.address = crate::users::record::Address::default();
    let html = render_users(&[user]);

    assert_eq!(card_count(&html), 1);
    assert!(html.contains("Kurtis Weissnat"));
    assert!(!html.contains("null"));
    assert!(html.contains(", <br>"));
}

#[test]
fn unnamed_record_has_blank_initials() {
    let mut user = dummy_record(1, "x");
    user.name = None;
    let html = render_users(&[user]);
    assert!(html.contains(r#"<div class="user-avatar"></div>"#));
}
