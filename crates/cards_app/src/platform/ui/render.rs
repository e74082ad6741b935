use cards_core::{ContributorCard, WidgetViewModel};

use super::avatar::AvatarRenderer;
use super::styles::WIDGET_CSS;

/// `data-action` value carried by the reveal control.
pub const SHOW_MORE_ACTION: &str = "show-more";
/// Tooltip on the static button; the page itself cannot reveal more cards.
const SHOW_MORE_HINT: &str = "Re-run with --reveal N or type `more` in an --interactive session";

#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Footer timestamp; omitted when `None`.
    pub generated_at: Option<String>,
}

/// Renders the widget fragment: header link, card grid, and the reveal
/// control while more contributors remain hidden.
pub fn render_widget(view: &WidgetViewModel, avatar: &dyn AvatarRenderer) -> String {
    let mut html = String::new();

    html.push_str("<section class=\"contributors-widget\"");
    if view.loading {
        html.push_str(" aria-busy=\"true\"");
    }
    html.push_str(">\n");

    html.push_str("  <div class=\"repo-link\">\n    <a href=\"");
    html.push_str(&safe_href(&view.repository_url));
    html.push_str("\" target=\"_blank\" rel=\"noopener\">");
    html.push_str(&html_escape(&view.repository_label));
    html.push_str("</a>\n  </div>\n");

    html.push_str("  <div class=\"container\">\n");
    for card in &view.cards {
        render_card(&mut html, card, avatar);
    }
    html.push_str("  </div>\n");

    if view.show_more {
        html.push_str("  <div class=\"show-more\">\n    <button type=\"button\" data-action=\"");
        html.push_str(SHOW_MORE_ACTION);
        html.push_str("\" title=\"");
        html.push_str(SHOW_MORE_HINT);
        html.push_str("\">Show More</button>\n  </div>\n");
    }

    html.push_str("</section>\n");
    html
}

/// Renders a standalone HTML document embedding the widget and its styles.
pub fn render_page(
    view: &WidgetViewModel,
    avatar: &dyn AvatarRenderer,
    options: &PageOptions,
) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>");
    html.push_str(&html_escape(&view.repository_label));
    html.push_str(" contributors</title>\n");
    if let Some(head) = avatar.head_markup() {
        html.push_str(&head);
        html.push('\n');
    }
    html.push_str("<style>");
    html.push_str(WIDGET_CSS);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str(&render_widget(view, avatar));

    if let Some(generated_at) = &options.generated_at {
        html.push_str("<footer class=\"generated\">Generated ");
        html.push_str(&html_escape(generated_at));
        html.push_str("</footer>\n");
    }
    html.push_str("</body>\n</html>\n");
    html
}

fn render_card(html: &mut String, card: &ContributorCard, avatar: &dyn AvatarRenderer) {
    html.push_str("    <div class=\"card\">\n      <a href=\"");
    html.push_str(&safe_href(&card.profile_url));
    html.push_str("\" target=\"_blank\" rel=\"noopener\">\n        ");
    html.push_str(&avatar.render(&card.login));
    html.push_str("\n        <div class=\"username\">");
    html.push_str(&html_escape(&card.login));
    html.push_str("</div>\n        <div class=\"contribs\">Contribs: ");
    html.push_str(&card.contributions.to_string());
    html.push_str("</div>\n      </a>\n    </div>\n");
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Only http(s) targets are linked; anything else becomes an inert `#`.
fn safe_href(url: &str) -> String {
    let lower = url.trim_start().to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        html_escape(url.trim_start())
    } else {
        "#".to_string()
    }
}
