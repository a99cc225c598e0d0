//! Integration tests for editor crate

use essay_editor::{
    build_empty_content, instantiate_groups, Change, ContentMap, Document, DocumentType,
    EditSession, GenerationOutcome, GroupTemplate, KeyGenerator, Mutation, MutationError, Registry,
    SectionTemplate, TopicMode,
};
use essay_registry::CATALOG;
use std::collections::HashSet;

const BODY: &[SectionTemplate] = &[
    SectionTemplate {
        id: "topic_sentence",
        label: "Topic Sentence",
        placeholder: "State the main point...",
    },
    SectionTemplate {
        id: "analysis",
        label: "Analysis",
        placeholder: "Explain the evidence...",
    },
];

/// Three-group argumentative shape: Introduction, Body Paragraph 1, Conclusion
static THREE_GROUP: DocumentType = DocumentType {
    id: "argumentative",
    title: "Argumentative Essay",
    description: "",
    color: "--color-argumentative",
    icon: "sword",
    structure: &[
        GroupTemplate {
            label: "Introduction",
            addable: false,
            namespace: None,
            sections: &[SectionTemplate {
                id: "thesis",
                label: "Thesis Statement",
                placeholder: "Your position...",
            }],
        },
        GroupTemplate {
            label: "Body Paragraph 1",
            addable: true,
            namespace: Some("body_1"),
            sections: BODY,
        },
        GroupTemplate {
            label: "Conclusion",
            addable: false,
            namespace: None,
            sections: &[SectionTemplate {
                id: "restate_thesis",
                label: "Restate Thesis",
                placeholder: "Reinforce...",
            }],
        },
    ],
    body_template: Some(GroupTemplate {
        label: "Body Paragraph",
        addable: true,
        namespace: None,
        sections: BODY,
    }),
};

fn labels(doc: &Document) -> Vec<&str> {
    doc.groups.iter().map(|g| g.label.as_str()).collect()
}

fn apply(doc: &Document, mutation: Mutation) -> (Document, Change) {
    let applied = mutation.apply(doc, &THREE_GROUP).unwrap();
    (applied.document, applied.change)
}

#[test]
fn test_add_inserts_before_trailing_group() {
    let doc = Document::new(&THREE_GROUP);
    let (doc, change) = apply(&doc, Mutation::AddRepeatableGroup);

    assert_eq!(
        labels(&doc),
        vec!["Introduction", "Body Paragraph 1", "Body Paragraph 2", "Conclusion"]
    );
    let added = &doc.groups[2];
    assert_eq!(
        change,
        Change::GroupAdded {
            key: added.key.clone(),
            index: 2
        }
    );
    assert!(added.is_dynamic);
    assert_eq!(
        added.section_ids().collect::<Vec<_>>(),
        vec!["body_2_topic_sentence", "body_2_analysis"]
    );
    assert_eq!(doc.text("body_2_analysis"), "");
    assert!(doc.validate().is_ok());
}

#[test]
fn test_removing_middle_dynamic_group_relabels_survivor() {
    let doc = Document::new(&THREE_GROUP);
    let (doc, _) = apply(&doc, Mutation::AddRepeatableGroup);
    let (doc, _) = apply(&doc, Mutation::AddRepeatableGroup);
    let (doc, _) = apply(
        &doc,
        Mutation::UpdateSection {
            section_id: "body_3_topic_sentence".to_string(),
            content: "Third point.".to_string(),
        },
    );
    let (doc, _) = apply(
        &doc,
        Mutation::UpdateSection {
            section_id: "body_1_analysis".to_string(),
            content: "First analysis.".to_string(),
        },
    );

    let second_key = doc.groups[2].key.clone();
    let third = doc.groups[3].clone();
    let (doc, change) = apply(
        &doc,
        Mutation::RemoveGroup {
            group_key: second_key.clone(),
        },
    );

    assert_eq!(
        labels(&doc),
        vec!["Introduction", "Body Paragraph 1", "Body Paragraph 2", "Conclusion"]
    );
    assert_eq!(doc.groups[2].key, third.key);
    assert_eq!(doc.groups[2].sections, third.sections);
    assert_eq!(doc.text("body_3_topic_sentence"), "Third point.");
    assert_eq!(doc.text("body_1_analysis"), "First analysis.");
    assert_eq!(
        change,
        Change::GroupRemoved {
            key: second_key,
            purged: vec!["body_2_topic_sentence".to_string(), "body_2_analysis".to_string()],
        }
    );
    assert!(!doc.content.contains_key("body_2_topic_sentence"));
}

#[test]
fn test_template_group_is_not_removable() {
    let doc = Document::new(&THREE_GROUP);
    let (doc, _) = apply(&doc, Mutation::AddRepeatableGroup);

    for key in [doc.groups[0].key.clone(), doc.groups[1].key.clone()] {
        let (after, change) = apply(&doc, Mutation::RemoveGroup { group_key: key });
        assert!(change.is_noop());
        assert_eq!(after, doc);
    }
}

#[test]
fn test_remove_unknown_group_is_noop() {
    let doc = Document::new(&THREE_GROUP);
    let (after, change) = apply(
        &doc,
        Mutation::RemoveGroup {
            group_key: "missing".to_string(),
        },
    );

    assert_eq!(
        change,
        Change::Noop {
            reason: "Group not found: missing".to_string()
        }
    );
    assert_eq!(after, doc);
}

#[test]
fn test_add_then_remove_restores_layout() {
    let registry = Registry::builtin();
    for doc_type in registry.all() {
        let original = Document::new(doc_type)
            .with_topic("Anything", TopicMode::Topic);
        let mut edited = original.clone();
        edited.content.insert("hook".to_string(), "Kept".to_string());

        let added = Mutation::AddRepeatableGroup.apply(&edited, doc_type).unwrap();
        let new_key = match &added.change {
            Change::GroupAdded { key, .. } => key.clone(),
            other => panic!("unexpected change {:?}", other),
        };
        let removed = Mutation::RemoveGroup { group_key: new_key }
            .apply(&added.document, doc_type)
            .unwrap()
            .document;

        assert_eq!(removed.groups, edited.groups, "{}", doc_type.id);
        assert_eq!(labels(&removed), labels(&edited), "{}", doc_type.id);
        for (id, text) in &edited.content {
            assert_eq!(removed.content.get(id), Some(text), "{}", doc_type.id);
        }
    }
}

#[test]
fn test_add_then_remove_keeps_numbered_labels() {
    let doc = Document::new(&THREE_GROUP);
    let (added, change) = apply(&doc, Mutation::AddRepeatableGroup);
    let key = match change {
        Change::GroupAdded { key, .. } => key,
        other => panic!("unexpected change {:?}", other),
    };
    let (removed, _) = apply(&added, Mutation::RemoveGroup { group_key: key });

    assert_eq!(labels(&removed), labels(&doc));
    assert_eq!(removed.content, doc.content);
}

#[test]
fn test_renumbering_three_body_paragraphs() {
    let doc = Document::new(&THREE_GROUP);
    let (doc, _) = apply(&doc, Mutation::AddRepeatableGroup);
    let (doc, _) = apply(&doc, Mutation::AddRepeatableGroup);
    assert_eq!(
        labels(&doc)[1..4],
        ["Body Paragraph 1", "Body Paragraph 2", "Body Paragraph 3"]
    );

    let mut filled = doc.clone();
    filled.content.insert("body_1_analysis".to_string(), "one".to_string());
    filled.content.insert("body_3_analysis".to_string(), "three".to_string());

    let (after, _) = apply(
        &filled,
        Mutation::RemoveGroup {
            group_key: filled.groups[2].key.clone(),
        },
    );

    assert_eq!(labels(&after)[1..3], ["Body Paragraph 1", "Body Paragraph 2"]);
    assert_eq!(after.groups[1].sections, filled.groups[1].sections);
    assert_eq!(after.groups[2].sections, filled.groups[3].sections);
    assert_eq!(after.text("body_1_analysis"), "one");
    assert_eq!(after.text("body_3_analysis"), "three");
}

#[test]
fn test_new_group_skips_ids_still_in_use() {
    let doc = Document::new(&THREE_GROUP);
    let (doc, _) = apply(&doc, Mutation::AddRepeatableGroup);
    let (doc, _) = apply(&doc, Mutation::AddRepeatableGroup);
    let (doc, _) = apply(
        &doc,
        Mutation::RemoveGroup {
            group_key: doc.groups[2].key.clone(),
        },
    );

    // Two addable groups remain, and body_3 is still in use
    let (doc, _) = apply(&doc, Mutation::AddRepeatableGroup);
    let added = &doc.groups[3];

    assert_eq!(added.label, "Body Paragraph 3");
    assert_eq!(
        added.section_ids().collect::<Vec<_>>(),
        vec!["body_4_topic_sentence", "body_4_analysis"]
    );
    assert!(doc.validate().is_ok());
}

#[test]
fn test_group_keys_are_never_reused() {
    let doc = Document::new(&THREE_GROUP);
    let (doc, _) = apply(&doc, Mutation::AddRepeatableGroup);
    let removed_key = doc.groups[2].key.clone();
    let (doc, _) = apply(
        &doc,
        Mutation::RemoveGroup {
            group_key: removed_key.clone(),
        },
    );
    let (doc, _) = apply(&doc, Mutation::AddRepeatableGroup);

    assert_ne!(doc.groups[2].key, removed_key);
    let keys: HashSet<&str> = doc.groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys.len(), doc.groups.len());
}

#[test]
fn test_add_without_body_template_is_unsupported() {
    static FIXED: DocumentType = DocumentType {
        id: "fixed",
        title: "Fixed",
        description: "",
        color: "",
        icon: "",
        structure: &[GroupTemplate {
            label: "Only",
            addable: false,
            namespace: None,
            sections: BODY,
        }],
        body_template: None,
    };

    let doc = Document::new(&FIXED);
    let result = Mutation::AddRepeatableGroup.apply(&doc, &FIXED);

    assert_eq!(
        result.unwrap_err(),
        MutationError::RepeatableGroupsUnsupported("fixed".to_string())
    );
}

#[test]
fn test_update_unknown_section_is_stored() {
    let doc = Document::new(&THREE_GROUP);
    let (doc, change) = apply(
        &doc,
        Mutation::UpdateSection {
            section_id: "body_9_analysis".to_string(),
            content: "Early text".to_string(),
        },
    );

    assert_eq!(
        change,
        Change::SectionUpdated {
            section_id: "body_9_analysis".to_string()
        }
    );
    assert_eq!(doc.text("body_9_analysis"), "Early text");
}

#[test]
fn test_empty_content_for_every_type() {
    for doc_type in CATALOG {
        let groups = instantiate_groups(doc_type, &mut KeyGenerator::new(doc_type.id));
        let content = build_empty_content(&groups, &ContentMap::new());

        let ids: Vec<String> = doc_type
            .structure
            .iter()
            .flat_map(|g| g.qualified_ids())
            .collect();
        let unique: HashSet<&String> = ids.iter().collect();

        assert_eq!(unique.len(), ids.len(), "{}", doc_type.id);
        assert_eq!(content.len(), ids.len(), "{}", doc_type.id);
        assert!(ids.iter().all(|id| content[id].is_empty()));
    }
}

#[test]
fn test_catalog_argumentative_adds_before_conclusion() {
    let registry = Registry::builtin();
    let doc_type = registry.require("argumentative").unwrap();
    let doc = Document::new(doc_type);

    let applied = Mutation::AddRepeatableGroup.apply(&doc, doc_type).unwrap();

    assert_eq!(
        labels(&applied.document),
        vec![
            "Introduction",
            "Body Paragraph 1",
            "Body Paragraph 2",
            "Counterargument",
            "Body Paragraph 3",
            "Conclusion"
        ]
    );
    assert!(applied.document.content.contains_key("body_3_quote"));
}

#[test]
fn test_session_edit_workflow() {
    let registry = Registry::builtin();
    let doc_type = *registry.require("literary_analysis").unwrap();
    let mut session = EditSession::start("test-client", doc_type, " Hamlet ", TopicMode::Topic);

    assert_eq!(session.document().topic, "Hamlet");

    session
        .update_section("thesis", "Hamlet's delay is a choice, not a flaw.")
        .unwrap();
    let added = session.add_group().unwrap();
    let key = match added.change {
        Change::GroupAdded { key, .. } => key,
        other => panic!("unexpected change {:?}", other),
    };
    session.update_section("body_3_claim", "Ophelia mirrors him.").unwrap();
    session.remove_group(&key).unwrap();

    assert_eq!(session.version(), 4);
    assert_eq!(session.title(), Some("Hamlet's delay is a choice, not a flaw."));
    assert!(!session.document().content.contains_key("body_3_claim"));
    assert!(session.document().validate().is_ok());
}

#[test]
fn test_unnumbered_template_labels_survive_add_and_remove() {
    let registry = Registry::builtin();
    for type_id in ["narrative", "descriptive", "reflective"] {
        let doc_type = registry.require(type_id).unwrap();
        let original = Document::new(doc_type);

        let added = Mutation::AddRepeatableGroup.apply(&original, doc_type).unwrap();
        let key = match &added.change {
            Change::GroupAdded { key, .. } => key.clone(),
            other => panic!("unexpected change {:?}", other),
        };
        let removed = Mutation::RemoveGroup { group_key: key }
            .apply(&added.document, doc_type)
            .unwrap()
            .document;

        assert_eq!(labels(&removed), labels(&original), "{}", type_id);
    }
}

#[test]
fn test_outstanding_generation_across_remove_and_readd() {
    let registry = Registry::builtin();
    let doc_type = *registry.require("argumentative").unwrap();
    let mut session = EditSession::start("test-client", doc_type, "Homework", TopicMode::Topic);

    let first = match session.add_group().unwrap().change {
        Change::GroupAdded { key, .. } => key,
        other => panic!("unexpected change {:?}", other),
    };
    let ticket = session.begin_generation("body_3_analysis").unwrap();

    session.remove_group(&first).unwrap();
    let second = match session.add_group().unwrap().change {
        Change::GroupAdded { key, .. } => key,
        other => panic!("unexpected change {:?}", other),
    };
    assert_ne!(first, second);
    assert!(session.document().find_group(&second).unwrap().has_section("body_3_analysis"));

    let outcome = session
        .complete_generation(&ticket, "Written for the removed paragraph.")
        .unwrap();

    assert!(matches!(outcome, GenerationOutcome::Stale { .. }));
    assert_eq!(session.document().text("body_3_analysis"), "");

    // A fresh request against the new group goes through
    let ticket = session.begin_generation("body_3_analysis").unwrap();
    let outcome = session.complete_generation(&ticket, "Homework builds habits.").unwrap();
    assert!(matches!(outcome, GenerationOutcome::Applied(_)));
    assert_eq!(session.document().text("body_3_analysis"), "Homework builds habits.");
}
