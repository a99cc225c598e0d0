//! Template descriptors.
//!
//! Everything here is `'static` and `Copy`: templates are declared once as
//! constant tables and never change while the process runs.

use serde::Serialize;

/// A single labeled content slot in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionTemplate {
    /// Id, unique within its owning group
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// An ordered cluster of sections sharing a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupTemplate {
    pub label: &'static str,

    /// Whether the user may duplicate this group's shape
    pub addable: bool,

    /// Prefix applied to section ids when the group is instantiated
    /// (`body_1` turns `analysis` into `body_1_analysis`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<&'static str>,

    pub sections: &'static [SectionTemplate],
}

impl GroupTemplate {
    /// Fully-qualified id for one of this group's sections
    pub fn qualified_id(&self, section: &SectionTemplate) -> String {
        match self.namespace {
            Some(namespace) => format!("{}_{}", namespace, section.id),
            None => section.id.to_string(),
        }
    }

    /// Fully-qualified ids of every section, in order
    pub fn qualified_ids(&self) -> impl Iterator<Item = String> + '_ {
        self.sections.iter().map(move |s| self.qualified_id(s))
    }
}

/// Canonical shape of one kind of essay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentType {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,

    /// Presentation-only color token
    pub color: &'static str,

    /// Presentation-only icon name
    pub icon: &'static str,

    pub structure: &'static [GroupTemplate],

    /// Shape used to mint new repeatable groups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_template: Option<GroupTemplate>,
}

impl DocumentType {
    /// Whether groups can be added to documents of this type
    pub fn supports_repeatable_groups(&self) -> bool {
        self.body_template.is_some()
    }

    /// Total number of sections in the canonical structure
    pub fn section_count(&self) -> usize {
        self.structure.iter().map(|g| g.sections.len()).sum()
    }
}

pub(crate) const fn section(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
) -> SectionTemplate {
    SectionTemplate {
        id,
        label,
        placeholder,
    }
}

pub(crate) const fn group(label: &'static str, sections: &'static [SectionTemplate]) -> GroupTemplate {
    GroupTemplate {
        label,
        addable: false,
        namespace: None,
        sections,
    }
}

pub(crate) const fn repeatable(
    label: &'static str,
    namespace: &'static str,
    sections: &'static [SectionTemplate],
) -> GroupTemplate {
    GroupTemplate {
        label,
        addable: true,
        namespace: Some(namespace),
        sections,
    }
}

pub(crate) const fn body_template(
    label: &'static str,
    sections: &'static [SectionTemplate],
) -> Option<GroupTemplate> {
    Some(GroupTemplate {
        label,
        addable: true,
        namespace: None,
        sections,
    })
}
