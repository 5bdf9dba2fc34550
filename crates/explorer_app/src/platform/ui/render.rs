use explorer_core::{AppViewModel, ResultArea};

use super::constants::*;
use super::page::PageCommand;

#[allow(clippy::vec_init_then_push)]
pub fn render(view: &AppViewModel) -> Vec<PageCommand> {
    let mut cmds = Vec::new();

    cmds.push(PageCommand::SetInputValue {
        element: INPUT_QUESTION,
        value: view.question.clone(),
    });
    cmds.push(PageCommand::SetInputValue {
        element: INPUT_AGENT_URL,
        value: view.agent_url.clone(),
    });

    cmds.push(PageCommand::SetControlEnabled {
        element: BUTTON_SUBMIT,
        enabled: view.submit_enabled,
    });
    cmds.push(PageCommand::SetControlText {
        element: BUTTON_SUBMIT,
        text: view.submit_label.clone(),
    });

    cmds.push(match &view.result {
        ResultArea::Empty => PageCommand::SetInnerHtml {
            element: CONTAINER_RESULT,
            html: String::new(),
        },
        ResultArea::Html(html) => PageCommand::SetInnerHtml {
            element: CONTAINER_RESULT,
            html: html.clone(),
        },
        ResultArea::Error(text) => PageCommand::SetTextContent {
            element: CONTAINER_RESULT,
            text: text.clone(),
        },
    });

    cmds.push(PageCommand::SetInnerHtml {
        element: CONTAINER_VISITED_URLS,
        html: visited_urls_html(&view.visited_urls),
    });

    cmds
}

/// `<ul>` with one wrapping item per URL, or nothing for an empty list.
pub fn visited_urls_html(urls: &[String]) -> String {
    if urls.is_empty() {
        return String::new();
    }
    let mut html = String::from("<ul>");
    for url in urls {
        html.push_str(r#"<li style="word-break: break-word">"#);
        html.push_str(&escape_html(url));
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
