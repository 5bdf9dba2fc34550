/// Logical page role, named after the element id it is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub &'static str);

pub const INPUT_QUESTION: ElementId = ElementId("question");
pub const INPUT_AGENT_URL: ElementId = ElementId("agentUrl");
pub const BUTTON_SUBMIT: ElementId = ElementId("submitBtn");
pub const CONTAINER_RESULT: ElementId = ElementId("result");
pub const CONTAINER_VISITED_URLS: ElementId = ElementId("visitedUrls");
