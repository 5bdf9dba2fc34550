use std::io::{self, BufRead, Write};

use explorer_core::{Msg, DEFAULT_AGENT_URL};

use super::app::Controller;
use super::ui::page::{Container, Page};

/// Prompts for question and agent URL until input ends.
pub fn run_interactive(
    controller: &mut Controller,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    loop {
        write!(out, "Question: ")?;
        out.flush()?;
        let Some(question) = read_field(&mut input)? else {
            break;
        };

        write!(out, "Agent URL [{DEFAULT_AGENT_URL}]: ")?;
        out.flush()?;
        let agent_url = read_field(&mut input)?.unwrap_or_default();

        submit(controller, &question, &agent_url, out)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Submits a single question and prints the settled page.
pub fn run_once(
    controller: &mut Controller,
    question: &str,
    agent_url: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    submit(controller, question, agent_url, out)
}

fn submit(
    controller: &mut Controller,
    question: &str,
    agent_url: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    controller.dispatch(Msg::QuestionChanged(question.to_string()));
    controller.dispatch(Msg::AgentUrlChanged(agent_url.to_string()));
    controller.dispatch(Msg::SubmitClicked);
    if controller.state().is_busy() {
        writeln!(out, "{}", controller.page().submit().text)?;
    }
    controller.wait_until_idle(None);
    write_page(controller.page_mut(), out)
}

/// Prints pending alerts followed by the result and visited URL containers.
pub fn write_page(page: &mut Page, out: &mut impl Write) -> io::Result<()> {
    let alerts = page.take_alerts();
    if !alerts.is_empty() {
        for alert in alerts {
            writeln!(out, "! {alert}")?;
        }
        return Ok(());
    }

    match page.result() {
        Container::Text(text) => writeln!(out, "{text}")?,
        other => writeln!(out, "{}", other.inner_html())?,
    }
    if !page.visited_urls().is_empty() {
        writeln!(out, "Visited URLs:")?;
        writeln!(out, "{}", page.visited_urls().inner_html())?;
    }
    Ok(())
}

fn read_field(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']);
    Ok(Some(trimmed.to_string()))
}
