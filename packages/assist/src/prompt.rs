//! Prompt text for section generation

use essay_editor::TopicMode;

use crate::AssistRequest;

const RULES: &str = "Rules:
- Write 1-3 sentences appropriate for this section type
- Match the tone and style of a {type} essay
- Be specific and substantive, not generic
- Do NOT include any labels, headers, or meta-commentary
- Output ONLY the essay text for this section, nothing else";

/// Plain-text prompt asking for one section only
pub fn build_prompt(request: &AssistRequest) -> String {
    let essay_type = &request.document_type_id;

    let topic_line = match (request.topic.trim(), request.topic_mode) {
        ("", _) => "No topic specified yet.".to_string(),
        (topic, TopicMode::Topic) => format!("Essay topic: \"{}\"", topic),
        (topic, TopicMode::Prompt) => format!("Assignment prompt: \"{}\"", topic),
    };

    let written = if request.existing_sections.is_empty() {
        "The student has not written anything yet.".to_string()
    } else {
        let lines: Vec<String> = request
            .existing_sections
            .iter()
            .map(|(id, text)| format!("{}: {}", id, text))
            .collect();
        format!("Here is what the student has written so far:\n{}", lines.join("\n"))
    };

    format!(
        "You are an expert essay writing assistant helping a student write a {essay_type} essay.\n\n\
         {topic_line}\n\n\
         {written}\n\n\
         Now write ONLY the \"{section}\" section (part of the \"{group}\" paragraph/group).\n\n\
         {rules}",
        essay_type = essay_type,
        topic_line = topic_line,
        written = written,
        section = request.section_label,
        group = request.group_label,
        rules = RULES.replace("{type}", essay_type),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AssistRequest {
        AssistRequest {
            document_type_id: "argumentative".to_string(),
            topic: "School uniforms".to_string(),
            topic_mode: TopicMode::Topic,
            section_id: "body_1_quote".to_string(),
            section_label: "Quote / Paraphrase".to_string(),
            group_label: "Body Paragraph 1".to_string(),
            existing_sections: vec![("thesis".to_string(), "Uniforms should be optional.".to_string())],
            all_groups: vec!["Introduction".to_string(), "Body Paragraph 1".to_string()],
        }
    }

    #[test]
    fn test_prompt_includes_context() {
        let prompt = build_prompt(&request());

        assert!(prompt.starts_with(
            "You are an expert essay writing assistant helping a student write a argumentative essay."
        ));
        assert!(prompt.contains("Essay topic: \"School uniforms\""));
        assert!(prompt.contains("written so far:\nthesis: Uniforms should be optional."));
        assert!(prompt.contains(
            "Now write ONLY the \"Quote / Paraphrase\" section (part of the \"Body Paragraph 1\" paragraph/group)."
        ));
        assert!(prompt.contains("- Match the tone and style of a argumentative essay"));
        assert!(prompt.ends_with("Output ONLY the essay text for this section, nothing else"));
    }

    #[test]
    fn test_prompt_without_topic_or_content() {
        let mut request = request();
        request.topic = "  ".to_string();
        request.existing_sections.clear();
        let prompt = build_prompt(&request);

        assert!(prompt.contains("No topic specified yet."));
        assert!(prompt.contains("The student has not written anything yet."));
    }

    #[test]
    fn test_prompt_mode_label() {
        let mut request = request();
        request.topic_mode = TopicMode::Prompt;
        request.topic = "Discuss the role of dress codes.".to_string();

        assert!(build_prompt(&request).contains("Assignment prompt: \"Discuss the role of dress codes.\""));
    }
}
