//! News release pages

use super::{escape, layout, method_override, render_delete_button, render_error_summary, render_text_field};
use crate::domain::entities::{NewsRelease, NewsReleaseId, NewsReleaseInput};
use crate::error::ValidationErrors;

pub fn render_index(releases: &[NewsRelease]) -> String {
    let mut buf = String::from("<h1>News</h1>\n");

    if releases.is_empty() {
        buf.push_str("<p><em>No news releases yet.</em></p>\n");
    } else {
        buf.push_str("<ul class=\"news_releases\">\n");
        for release in releases {
            buf.push_str(&format!(
                "<li><a href=\"/news_releases/{}\">{}</a></li>\n",
                release.id,
                escape(&release.title_with_date())
            ));
        }
        buf.push_str("</ul>\n");
    }

    buf.push_str("<p><a href=\"/news_releases/new\">New News Release</a></p>\n");

    layout("News", &buf)
}

pub fn render_show(release: &NewsRelease) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("<h1>{}</h1>\n", escape(&release.title_with_date())));
    for paragraph in release.body.split("\n\n").filter(|p| !p.trim().is_empty()) {
        buf.push_str(&format!("<p>{}</p>\n", escape(paragraph.trim())));
    }

    buf.push_str(&format!(
        "<p><a href=\"/news_releases/{}/edit\">Edit</a> | <a href=\"/news_releases\">Back</a></p>\n",
        release.id
    ));
    buf.push_str(&render_delete_button(
        &format!("/news_releases/{}", release.id),
        "Delete news release",
    ));

    layout(&release.title, &buf)
}

/// New form when `id` is `None`, edit form otherwise
pub fn render_form(
    input: &NewsReleaseInput,
    errors: Option<&ValidationErrors>,
    id: Option<NewsReleaseId>,
) -> String {
    let has_error = |field: &str| errors.is_some_and(|e| e.contains(field));
    let mut buf = String::new();

    let (title, action) = match id {
        None => ("New News Release".to_string(), "/news_releases".to_string()),
        Some(id) => ("Edit News Release".to_string(), format!("/news_releases/{}", id)),
    };

    buf.push_str(&format!("<h1>{}</h1>\n", title));
    if let Some(errors) = errors.filter(|e| !e.is_empty()) {
        buf.push_str(&render_error_summary("news release", errors));
    }

    buf.push_str(&format!("<form action=\"{}\" method=\"post\">\n", action));
    if id.is_some() {
        buf.push_str(&method_override("patch"));
    }

    buf.push_str(&render_text_field(
        "Title",
        "news_release[title]",
        input.title.as_deref(),
        "text",
        has_error("title"),
    ));
    buf.push_str(&render_text_field(
        "Released on",
        "news_release[released_on]",
        input.released_on.as_deref(),
        "date",
        has_error("released_on"),
    ));
    buf.push_str(&format!(
        "<div{}><label>Body <textarea name=\"news_release[body]\">{}</textarea></label></div>\n",
        if has_error("body") { " class=\"field_with_errors\"" } else { "" },
        escape(input.body.as_deref().unwrap_or_default())
    ));

    buf.push_str("<button type=\"submit\">Save News Release</button>\n</form>\n");
    buf.push_str("<p><a href=\"/news_releases\">Back</a></p>\n");

    layout(&title, &buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_news_release;

    #[test]
    fn index_shows_title_with_date() {
        let release = test_news_release("Contacts 2.0 released", 2013, 7, 20);

        let page = render_index(&[release.clone()]);

        assert!(page.contains("2013-07-20: Contacts 2.0 released"));
        assert!(page.contains(&format!("href=\"/news_releases/{}\"", release.id)));
    }

    #[test]
    fn show_splits_body_into_paragraphs() {
        let mut release = test_news_release("Launch", 2013, 7, 20);
        release.body = "First.\n\nSecond & last.".to_string();

        let page = render_show(&release);

        assert!(page.contains("<p>First.</p>"));
        assert!(page.contains("<p>Second &amp; last.</p>"));
    }

    #[test]
    fn edit_form_overrides_method() {
        let release = test_news_release("Launch", 2013, 7, 20);

        let page = render_form(&release.to_input(), None, Some(release.id));

        assert!(page.contains("name=\"_method\" value=\"patch\""));
        assert!(page.contains("value=\"2013-07-20\""));
    }

    #[test]
    fn failed_form_lists_errors() {
        let input = NewsReleaseInput {
            title: Some("Launch".to_string()),
            released_on: Some("soon".to_string()),
            body: None,
        };
        let mut errors = ValidationErrors::new();
        errors.add("released_on", "is not a valid date");

        let page = render_form(&input, Some(&errors), None);

        assert!(page.contains("1 error prohibited this news release from being saved"));
        assert!(page.contains("Released on is not a valid date"));
        assert!(page.contains("value=\"soon\""));
    }
}
