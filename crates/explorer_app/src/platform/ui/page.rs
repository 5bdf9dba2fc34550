//! In-memory page holding the five elements the chat form touches.

use explorer_logging::explorer_warn;
use scraper::Html;

use super::constants::*;
use super::render::escape_html;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    SetInputValue { element: ElementId, value: String },
    SetControlEnabled { element: ElementId, enabled: bool },
    SetControlText { element: ElementId, text: String },
    /// Replaces the element's children with parsed markup.
    SetInnerHtml { element: ElementId, html: String },
    /// Replaces the element's children with a single text node.
    SetTextContent { element: ElementId, text: String },
    ShowAlert { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Container {
    #[default]
    Empty,
    Html(String),
    Text(String),
}

impl Container {
    pub fn inner_html(&self) -> String {
        match self {
            Container::Empty => String::new(),
            Container::Html(html) => html.clone(),
            Container::Text(text) => escape_html(text),
        }
    }

    /// Text with markup removed.
    pub fn text_content(&self) -> String {
        match self {
            Container::Empty => String::new(),
            Container::Html(html) => Html::parse_fragment(html)
                .root_element()
                .text()
                .collect(),
            Container::Text(text) => text.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Container::Empty => true,
            Container::Html(s) | Container::Text(s) => s.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub enabled: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    question: String,
    agent_url: String,
    submit: Button,
    result: Container,
    visited_urls: Container,
    alerts: Vec<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            question: String::new(),
            agent_url: String::new(),
            submit: Button {
                enabled: true,
                text: explorer_core::SUBMIT_LABEL.to_string(),
            },
            result: Container::Empty,
            visited_urls: Container::Empty,
            alerts: Vec::new(),
        }
    }
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = PageCommand>) {
        for command in commands {
            self.apply(command);
        }
    }

    pub fn apply(&mut self, command: PageCommand) {
        match command {
            PageCommand::SetInputValue { element, value } => match element {
                INPUT_QUESTION => self.question = value,
                INPUT_AGENT_URL => self.agent_url = value,
                other => unknown(other, "SetInputValue"),
            },
            PageCommand::SetControlEnabled { element, enabled } => match element {
                BUTTON_SUBMIT => self.submit.enabled = enabled,
                other => unknown(other, "SetControlEnabled"),
            },
            PageCommand::SetControlText { element, text } => match element {
                BUTTON_SUBMIT => self.submit.text = text,
                other => unknown(other, "SetControlText"),
            },
            PageCommand::SetInnerHtml { element, html } => {
                if let Some(container) = self.container_mut(element) {
                    *container = if html.is_empty() {
                        Container::Empty
                    } else {
                        Container::Html(html)
                    };
                }
            }
            PageCommand::SetTextContent { element, text } => {
                if let Some(container) = self.container_mut(element) {
                    *container = Container::Text(text);
                }
            }
            PageCommand::ShowAlert { message } => self.alerts.push(message),
        }
    }

    fn container_mut(&mut self, element: ElementId) -> Option<&mut Container> {
        match element {
            CONTAINER_RESULT => Some(&mut self.result),
            CONTAINER_VISITED_URLS => Some(&mut self.visited_urls),
            other => {
                unknown(other, "container update");
                None
            }
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn agent_url(&self) -> &str {
        &self.agent_url
    }

    pub fn submit(&self) -> &Button {
        &self.submit
    }

    pub fn result(&self) -> &Container {
        &self.result
    }

    pub fn visited_urls(&self) -> &Container {
        &self.visited_urls
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Drains alerts shown since the last call.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}

fn unknown(element: ElementId, what: &str) {
    explorer_warn!("{} ignored for unknown element '{}'", what, element.0);
}
