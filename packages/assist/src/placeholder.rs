use async_trait::async_trait;

use crate::{AssistError, AssistRequest, ContentAssist};

/// Offline producer that writes a labeled stand-in sentence
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAssist;

#[async_trait]
impl ContentAssist for PlaceholderAssist {
    fn name(&self) -> &str {
        "placeholder"
    }

    async fn generate(&self, request: &AssistRequest) -> Result<String, AssistError> {
        let topic = match request.topic.trim() {
            "" => "the topic",
            topic => topic,
        };
        Ok(format!(
            "[{} / {}] Draft text about {}.",
            request.group_label, request.section_label, topic
        ))
    }
}
