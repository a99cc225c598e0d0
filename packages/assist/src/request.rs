//! Generation request for one section

use essay_editor::{Document, DocumentType, TopicMode};
use serde::Serialize;

use crate::AssistError;

/// Everything a producer needs to draft one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistRequest {
    pub document_type_id: String,
    pub topic: String,
    pub topic_mode: TopicMode,
    pub section_id: String,
    pub section_label: String,
    pub group_label: String,

    /// Non-blank sections as `(id, text)`, in document order
    pub existing_sections: Vec<(String, String)>,

    /// Group labels in document order
    pub all_groups: Vec<String>,
}

impl AssistRequest {
    /// Build the request for a laid-out section of `document`
    pub fn for_section(
        document: &Document,
        doc_type: &DocumentType,
        section_id: &str,
    ) -> Result<Self, AssistError> {
        let (group, section) = document
            .find_section(section_id)
            .ok_or_else(|| AssistError::UnknownSection(section_id.to_string()))?;

        Ok(Self {
            document_type_id: doc_type.id.to_string(),
            topic: document.topic.clone(),
            topic_mode: document.topic_mode,
            section_id: section.id.clone(),
            section_label: section.label.clone(),
            group_label: group.label.clone(),
            existing_sections: document
                .filled_sections()
                .into_iter()
                .map(|(id, text)| (id.to_string(), text.to_string()))
                .collect(),
            all_groups: document.groups.iter().map(|g| g.label.clone()).collect(),
        })
    }
}
