use std::sync::{Arc, Once};
use std::time::Duration;

use explorer_app::platform::ui::page::Container;
use explorer_app::platform::{write_page, Controller};
use explorer_core::{Msg, DEFAULT_AGENT_URL, EMPTY_QUESTION_ALERT, SUBMIT_LABEL};
use explorer_engine::{ChatSettings, ReqwestChatClient};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WAIT: Option<Duration> = Some(Duration::from_secs(5));

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(explorer_logging::initialize_for_tests);
}

fn controller_for(base_url: String) -> Controller {
    let client = ReqwestChatClient::new(ChatSettings::new(base_url)).expect("client");
    Controller::new(Arc::new(client))
}

/// Fills the form, clicks submit and waits for the call to settle.
async fn submit(mut controller: Controller, question: &str, agent_url: &str) -> Controller {
    let question = question.to_string();
    let agent_url = agent_url.to_string();
    tokio::task::spawn_blocking(move || {
        controller.dispatch(Msg::QuestionChanged(question));
        controller.dispatch(Msg::AgentUrlChanged(agent_url));
        controller.dispatch(Msg::SubmitClicked);
        assert!(controller.wait_until_idle(WAIT), "submission did not settle");
        controller
    })
    .await
    .expect("blocking task")
}

fn assert_idle_control(controller: &Controller) {
    let submit = controller.page().submit();
    assert!(submit.enabled);
    assert_eq!(submit.text, SUBMIT_LABEL);
}

#[tokio::test]
async fn success_renders_content_and_visited_urls() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(serde_json::json!({
            "question": "hi",
            "agent_url": DEFAULT_AGENT_URL,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "<b>hi</b>",
            "visited_urls": ["http://a.com", "http://b.com"],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let controller = submit(controller_for(server.uri()), "hi", "").await;

    let page = controller.page();
    assert_eq!(page.result().inner_html(), "<b>hi</b>");
    assert_eq!(
        page.visited_urls().inner_html(),
        concat!(
            r#"<ul><li style="word-break: break-word">http://a.com</li>"#,
            r#"<li style="word-break: break-word">http://b.com</li></ul>"#
        )
    );
    assert_idle_control(&controller);
}

#[tokio::test]
async fn answer_without_urls_leaves_url_area_empty() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "ok",
        })))
        .mount(&server)
        .await;

    let controller = submit(controller_for(server.uri()), "q", "").await;

    assert_eq!(controller.page().result(), &Container::Html("ok".to_string()));
    assert!(controller.page().visited_urls().is_empty());
    assert_idle_control(&controller);
}

#[tokio::test]
async fn custom_agent_url_is_sent_verbatim() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(serde_json::json!({
            "question": "q",
            "agent_url": "https://agent.example.com/ad.json",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "matched",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let controller = submit(
        controller_for(server.uri()),
        "q",
        "https://agent.example.com/ad.json",
    )
    .await;

    assert_eq!(controller.page().result().inner_html(), "matched");
}

#[tokio::test]
async fn http_failure_renders_error_text() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "content": "<p>ignored</p>",
        })))
        .mount(&server)
        .await;

    let controller = submit(controller_for(server.uri()), "q", "").await;

    assert_eq!(
        controller.page().result(),
        &Container::Text("Error: HTTP error! status: 500".to_string())
    );
    assert!(controller.page().visited_urls().is_empty());
    assert_idle_control(&controller);
}

#[tokio::test]
async fn network_failure_renders_error_text() {
    init_logging();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let controller = submit(controller_for(format!("http://{addr}")), "q", "").await;

    let text = controller.page().result().text_content();
    assert!(text.starts_with("Error: "), "unexpected result: {text}");
    assert!(text.len() > "Error: ".len());
    assert_idle_control(&controller);
}

#[tokio::test]
async fn empty_question_alerts_and_sends_nothing() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut controller = controller_for(server.uri());
    controller.dispatch(Msg::SubmitClicked);

    assert!(!controller.state().is_busy());
    assert_eq!(controller.page().alerts(), [EMPTY_QUESTION_ALERT.to_string()]);
    assert_idle_control(&controller);

    let mut out = Vec::new();
    write_page(controller.page_mut(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("! {EMPTY_QUESTION_ALERT}\n")
    );
    assert!(controller.page().alerts().is_empty());
}

#[tokio::test]
async fn second_submission_replaces_first() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(serde_json::json!({
            "question": "one",
            "agent_url": DEFAULT_AGENT_URL,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "<p>one</p>",
            "visited_urls": ["http://a.com", "http://b.com"],
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(serde_json::json!({
            "question": "two",
            "agent_url": DEFAULT_AGENT_URL,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "<p>two</p>",
        })))
        .mount(&server)
        .await;

    let controller = submit(controller_for(server.uri()), "one", "").await;
    assert!(!controller.page().visited_urls().is_empty());

    let controller = submit(controller, "two", "").await;

    assert_eq!(controller.page().result().inner_html(), "<p>two</p>");
    assert!(controller.page().visited_urls().is_empty());
    assert_idle_control(&controller);
}

#[tokio::test]
async fn control_is_busy_while_request_is_in_flight() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(300))
                .set_body_json(serde_json::json!({ "content": "late" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(server.uri());
    let controller = tokio::task::spawn_blocking(move || {
        controller.dispatch(Msg::QuestionChanged("q".to_string()));
        controller.dispatch(Msg::SubmitClicked);

        let submit = controller.page().submit().clone();
        assert!(!submit.enabled);
        assert_eq!(submit.text, explorer_core::PROCESSING_LABEL);
        assert!(controller.page().result().is_empty());

        // A second click while busy must not issue another request.
        controller.dispatch(Msg::SubmitClicked);

        assert!(controller.wait_until_idle(WAIT));
        controller
    })
    .await
    .expect("blocking task");

    assert_eq!(controller.page().result().inner_html(), "late");
    assert_idle_control(&controller);
}

fn assert_error_page(controller: &Controller) {
    match controller.page().result() {
        Container::Text(text) => {
            assert!(text.starts_with("Error: "), "unexpected result: {text}");
            assert!(text.len() > "Error: ".len());
        }
        other => panic!("expected error text, got {other:?}"),
    }
    assert!(controller.page().visited_urls().is_empty());
    assert_idle_control(controller);
}

#[tokio::test]
async fn non_json_body_renders_error_text() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"))
        .mount(&server)
        .await;

    let controller = submit(controller_for(server.uri()), "q", "").await;

    assert_error_page(&controller);
}

#[tokio::test]
async fn body_without_content_renders_error_text() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "visited_urls": ["http://a.com"],
        })))
        .mount(&server)
        .await;

    let controller = submit(controller_for(server.uri()), "q", "").await;

    assert_error_page(&controller);
    let text = controller.page().result().text_content();
    assert!(text.contains("content"), "unexpected result: {text}");
}

#[tokio::test]
async fn shutdown_stops_background_threads() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "ok",
        })))
        .mount(&server)
        .await;

    let controller = submit(controller_for(server.uri()), "q", "").await;

    // Joining only returns once the engine worker has closed the event stream.
    let (done_tx, done_rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        controller.shutdown();
        let _ = done_tx.send(());
    });
    let joined = tokio::task::spawn_blocking(move || done_rx.recv_timeout(Duration::from_secs(5)))
        .await
        .expect("blocking task");
    assert!(joined.is_ok(), "controller threads did not exit");
}
