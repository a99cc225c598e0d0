//! # Post-Effect System
//!
//! Mutations can trigger side effects that live outside the document itself.
//!
//! ## Design
//!
//! A post-effect looks at a mutation and the document it produced and emits
//! [`Effect`]s for the caller to carry out. Currently this covers the record
//! title: writing the hook or thesis renames the essay in storage, while the
//! content map stays untouched.
//!
//! Post-effects are:
//! - **Deterministic**: Same mutation always produces same effects
//! - **Side-channel only**: They never change the document

use crate::document::Document;
use crate::mutations::Mutation;

/// Section template ids whose text names the essay
pub const TITLE_SECTION_IDS: &[&str] = &["hook", "thesis"];

/// Maximum number of characters kept in a derived title
pub const TITLE_MAX_CHARS: usize = 60;

/// Marker appended to truncated titles
pub const TITLE_ELLIPSIS: &str = "...";

/// Work requested by a post-effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Rename the persisted record
    Retitle(String),
}

/// Post-effect that can be triggered by a mutation
pub trait PostEffect: std::fmt::Debug + Send + Sync {
    /// Analyze the mutation and generate effects if needed
    fn analyze(&self, mutation: &Mutation, doc: &Document) -> Vec<Effect>;
}

/// Derive a display title from the hook or thesis
#[derive(Debug)]
pub struct DeriveTitle;

impl PostEffect for DeriveTitle {
    fn analyze(&self, mutation: &Mutation, _doc: &Document) -> Vec<Effect> {
        match mutation {
            Mutation::UpdateSection { section_id, content }
                if TITLE_SECTION_IDS.contains(&section_id.as_str()) =>
            {
                derive_title(content).map(Effect::Retitle).into_iter().collect()
            }
            _ => vec![],
        }
    }
}

/// First 60 characters of the trimmed text, with an ellipsis when cut.
/// Blank text yields no title.
pub fn derive_title(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut chars = trimmed.chars();
    let head: String = chars.by_ref().take(TITLE_MAX_CHARS).collect();
    if chars.next().is_some() {
        Some(format!("{}{}", head, TITLE_ELLIPSIS))
    } else {
        Some(head)
    }
}

/// Post-effect engine that runs all registered effects
#[derive(Debug)]
pub struct PostEffectEngine {
    effects: Vec<Box<dyn PostEffect>>,
}

impl PostEffectEngine {
    /// Create engine with default effects
    pub fn new() -> Self {
        Self {
            effects: vec![Box::new(DeriveTitle)],
        }
    }

    /// Engine with no effects
    pub fn empty() -> Self {
        Self { effects: vec![] }
    }

    pub fn register(&mut self, effect: Box<dyn PostEffect>) {
        self.effects.push(effect);
    }

    /// Analyze a mutation and collect the effects of every registered effect
    pub fn analyze(&self, mutation: &Mutation, doc: &Document) -> Vec<Effect> {
        self.effects
            .iter()
            .flat_map(|effect| effect.analyze(mutation, doc))
            .collect()
    }
}

impl Default for PostEffectEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use essay_registry::Registry;

    fn doc() -> Document {
        Document::new(Registry::builtin().require("argumentative").unwrap())
    }

    #[test]
    fn test_post_effect_engine_creation() {
        let engine = PostEffectEngine::new();
        assert_eq!(engine.effects.len(), 1);
        assert!(PostEffectEngine::empty().effects.is_empty());
    }

    #[test]
    fn test_short_title_is_kept_whole() {
        assert_eq!(derive_title("  Why cats rule  "), Some("Why cats rule".to_string()));
        assert_eq!(derive_title(" \n "), None);
    }

    #[test]
    fn test_long_title_is_truncated() {
        let text = "a".repeat(61);
        let title = derive_title(&text).unwrap();
        assert_eq!(title, format!("{}...", "a".repeat(60)));

        let exact = "b".repeat(60);
        assert_eq!(derive_title(&exact), Some(exact.clone()));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let text = "é".repeat(70);
        let title = derive_title(&text).unwrap();
        assert_eq!(title.chars().count(), 63);
    }

    #[test]
    fn test_thesis_update_retitles() {
        let engine = PostEffectEngine::new();
        let mutation = Mutation::UpdateSection {
            section_id: "thesis".to_string(),
            content: "Uniforms limit expression.".to_string(),
        };

        assert_eq!(
            engine.analyze(&mutation, &doc()),
            vec![Effect::Retitle("Uniforms limit expression.".to_string())]
        );
    }

    #[test]
    fn test_other_sections_do_not_retitle() {
        let engine = PostEffectEngine::new();
        let body = Mutation::UpdateSection {
            section_id: "body_1_topic_sentence".to_string(),
            content: "First point.".to_string(),
        };
        let blank_hook = Mutation::UpdateSection {
            section_id: "hook".to_string(),
            content: "   ".to_string(),
        };

        assert!(engine.analyze(&body, &doc()).is_empty());
        assert!(engine.analyze(&blank_hook, &doc()).is_empty());
        assert!(engine.analyze(&Mutation::AddRepeatableGroup, &doc()).is_empty());
    }
}
