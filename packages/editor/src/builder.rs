//! # Structure Builder
//!
//! Pure functions that turn a template into live groups and a content map.
//! Nothing here looks at a type id: all shape comes from the template.

use essay_registry::{DocumentType, GroupTemplate};

use crate::document::{ContentMap, GroupInstance, SectionInstance};
use crate::key_generator::KeyGenerator;

/// Instantiate every group of a type's canonical structure
pub fn instantiate_groups(doc_type: &DocumentType, keys: &mut KeyGenerator) -> Vec<GroupInstance> {
    doc_type
        .structure
        .iter()
        .map(|template| instantiate_group(template, keys))
        .collect()
}

/// Instantiate a single template group (not user-added)
pub fn instantiate_group(template: &GroupTemplate, keys: &mut KeyGenerator) -> GroupInstance {
    GroupInstance {
        key: keys.new_key(),
        label: template.label.to_string(),
        addable: template.addable,
        is_dynamic: false,
        sections: template
            .sections
            .iter()
            .map(|s| SectionInstance {
                id: template.qualified_id(s),
                label: s.label.to_string(),
                placeholder: s.placeholder.to_string(),
            })
            .collect(),
    }
}

/// Merge empty entries for every laid-out section into `existing`.
///
/// Existing values are never overwritten, so calling this again on a map
/// that already holds user text is harmless.
pub fn build_empty_content(groups: &[GroupInstance], existing: &ContentMap) -> ContentMap {
    let mut content = existing.clone();
    fill_empty_content(groups, &mut content);
    content
}

/// In-place variant of [`build_empty_content`]
pub fn fill_empty_content(groups: &[GroupInstance], content: &mut ContentMap) {
    for group in groups {
        for id in group.section_ids() {
            content.entry(id.to_string()).or_default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use essay_registry::Registry;

    #[test]
    fn test_instantiate_keys_are_sequential() {
        let registry = Registry::builtin();
        let doc_type = registry.require("expository").unwrap();
        let mut keys = KeyGenerator::new(doc_type.id);

        let groups = instantiate_groups(doc_type, &mut keys);
        let group_keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();

        assert_eq!(
            group_keys,
            vec!["expository-1", "expository-2", "expository-3", "expository-4"]
        );
        assert!(groups.iter().all(|g| !g.is_dynamic));
    }

    #[test]
    fn test_two_builds_with_one_generator_never_collide() {
        let registry = Registry::builtin();
        let doc_type = registry.require("narrative").unwrap();
        let mut keys = KeyGenerator::new(doc_type.id);

        let first = instantiate_groups(doc_type, &mut keys);
        let second = instantiate_groups(doc_type, &mut keys);

        for a in &first {
            assert!(second.iter().all(|b| b.key != a.key));
        }
    }

    #[test]
    fn test_namespaced_section_ids() {
        let registry = Registry::builtin();
        let doc_type = registry.require("narrative").unwrap();
        let groups = instantiate_groups(doc_type, &mut KeyGenerator::default());

        let ids: Vec<&str> = groups[1].section_ids().collect();
        assert_eq!(ids, vec!["body_1_event", "body_1_details", "body_1_reflection"]);
        assert_eq!(groups[1].label, "Rising Action");
        assert!(groups[1].addable);
    }

    #[test]
    fn test_build_empty_content_keeps_existing_text() {
        let registry = Registry::builtin();
        let doc_type = registry.require("descriptive").unwrap();
        let groups = instantiate_groups(doc_type, &mut KeyGenerator::default());

        let mut content = build_empty_content(&groups, &ContentMap::new());
        content.insert("hook".to_string(), "The smell of rain.".to_string());

        let again = build_empty_content(&groups, &content);
        assert_eq!(again, content);
        assert_eq!(again["hook"], "The smell of rain.");
    }
}
