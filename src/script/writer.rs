use crate::session::Session;

/// Plain-text view of the current items and the command history.
pub fn render_report(session: &Session) -> String {
    let mut lines = vec!["Items:".to_string()];

    let items = session.items().items();
    if items.is_empty() {
        lines.push("  No items".to_string());
    } else {
        for (i, item) in items.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, item));
        }
    }

    lines.push(String::new());
    lines.push("Command History:".to_string());

    let history = session.history();
    if history.is_empty() {
        lines.push("  No commands executed yet.".to_string());
    } else {
        for (i, description) in history.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, description));
        }
    }

    lines.join("\n") + "\n"
}
