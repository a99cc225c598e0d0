//! Terminal rendering helpers

use colored::Colorize;
use essay_editor::{Change, Document, DocumentType, TopicMode};

/// One-line summary of what a mutation did
pub fn describe_change(change: &Change) -> String {
    match change {
        Change::SectionUpdated { section_id } => format!("Updated {}", section_id),
        Change::TopicChanged => "Topic changed".to_string(),
        Change::GroupAdded { key, index } => format!("Added group {} at position {}", key, index + 1),
        Change::GroupRemoved { key, purged } if purged.is_empty() => format!("Removed group {}", key),
        Change::GroupRemoved { key, purged } => {
            format!("Removed group {} (discarded {} sections)", key, purged.len())
        }
        Change::Noop { reason } => format!("Nothing changed: {}", reason),
    }
}

pub fn topic_mode(prompt: bool) -> TopicMode {
    if prompt {
        TopicMode::Prompt
    } else {
        TopicMode::Topic
    }
}

/// Label for a topic line, or `None` when no topic is set
pub fn topic_line(document: &Document) -> Option<String> {
    if document.topic.is_empty() {
        return None;
    }
    let label = match document.topic_mode {
        TopicMode::Topic => "Topic",
        TopicMode::Prompt => "Prompt",
    };
    Some(format!("{}: {}", label, document.topic))
}

/// Print the outline of a document with its section text
pub fn print_document(title: &str, doc_type: &DocumentType, document: &Document) {
    println!("{}", title.bold());
    println!("{}", doc_type.title.dimmed());
    if let Some(line) = topic_line(document) {
        println!("{}", line);
    }

    for group in &document.groups {
        println!();
        let marker = if group.is_dynamic { " (added)" } else { "" };
        println!(
            "{}{}  {}",
            group.label.bright_blue().bold(),
            marker.dimmed(),
            group.key.dimmed()
        );
        for section in &group.sections {
            println!("  {} {}", section.label.bold(), section.id.dimmed());
            let text = document.text(&section.id);
            if text.trim().is_empty() {
                println!("    {}", section.placeholder.dimmed());
            } else {
                println!("    {}", text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use essay_registry::Registry;

    #[test]
    fn test_describe_change() {
        assert_eq!(
            describe_change(&Change::GroupAdded {
                key: "research-6".to_string(),
                index: 3
            }),
            "Added group research-6 at position 4"
        );
        assert_eq!(
            describe_change(&Change::GroupRemoved {
                key: "research-6".to_string(),
                purged: vec!["body_3_claim".to_string(), "body_3_source".to_string()],
            }),
            "Removed group research-6 (discarded 2 sections)"
        );
        assert_eq!(
            describe_change(&Change::Noop {
                reason: "Group not found: x".to_string()
            }),
            "Nothing changed: Group not found: x"
        );
    }

    #[test]
    fn test_topic_line() {
        let registry = Registry::builtin();
        let doc = Document::new(registry.require("narrative").unwrap());
        assert_eq!(topic_line(&doc), None);

        let doc = doc.with_topic("Write about a journey.", topic_mode(true));
        assert_eq!(topic_line(&doc).as_deref(), Some("Prompt: Write about a journey."));
    }
}
