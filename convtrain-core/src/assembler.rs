//! Workspace assembly
//!
//! Precedence, lowest to highest: built-in defaults, base document,
//! freshly built intents/entities (replace wholesale), explicit
//! name/description overrides.

use crate::{BaseWorkspace, EntityDefinition, IntentDefinition, WorkspaceConfig};

/// Builder merging a base document with freshly built content.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceAssembler {
    base: Option<BaseWorkspace>,
    intents: Option<Vec<IntentDefinition>>,
    entities: Option<Vec<EntityDefinition>>,
    name: Option<String>,
    description: Option<String>,
}

impl WorkspaceAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: BaseWorkspace) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_intents(mut self, intents: Vec<IntentDefinition>) -> Self {
        self.intents = Some(intents);
        self
    }

    pub fn with_entities(mut self, entities: Vec<EntityDefinition>) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Merge everything into one configuration.
    ///
    /// The base document's own name and description are not used; only
    /// explicit overrides set them.
    pub fn assemble(self) -> WorkspaceConfig {
        let mut config = WorkspaceConfig::default();

        if let Some(base) = self.base {
            if let Some(intents) = base.intents {
                config.intents = intents;
            }
            if let Some(entities) = base.entities {
                config.entities = entities;
            }
            if let Some(language) = base.language {
                config.language = language;
            }
            if let Some(dialog_nodes) = base.dialog_nodes {
                config.dialog_nodes = dialog_nodes;
            }
            if let Some(counterexamples) = base.counterexamples {
                config.counterexamples = counterexamples;
            }
            if let Some(metadata) = base.metadata {
                config.metadata = metadata;
            }
            if let Some(learning_opt_out) = base.learning_opt_out {
                config.learning_opt_out = learning_opt_out;
            }
        }

        if let Some(intents) = self.intents {
            config.intents = intents;
        }
        if let Some(entities) = self.entities {
            config.entities = entities;
        }
        if let Some(name) = self.name {
            config.name = name;
        }
        if let Some(description) = self.description {
            config.description = description;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Example, ValueRecord};
    use serde_json::json;

    fn base_document() -> BaseWorkspace {
        BaseWorkspace::from_value(json!({
            "name": "exported name",
            "description": "exported description",
            "language": "fr",
            "intents": [
                {"intent": "bonjour", "examples": [{"text": "salut"}]}
            ],
            "entities": [
                {"entity": "couleur", "values": [{"type": "synonyms", "value": "bleu", "synonyms": []}]}
            ],
            "dialog_nodes": [{"dialog_node": "root", "conditions": "#bonjour"}],
            "counterexamples": [{"text": "pas ça"}],
            "metadata": {"api_version": {"major_version": "v1"}},
            "learning_opt_out": true
        }))
        .unwrap()
    }

    #[test]
    fn test_no_inputs_yields_defaults() {
        let config = WorkspaceAssembler::new().assemble();
        assert_eq!(config, WorkspaceConfig::default());
    }

    #[test]
    fn test_base_fields_become_defaults() {
        let config = WorkspaceAssembler::new().with_base(base_document()).assemble();
        assert_eq!(config.language, "fr");
        assert_eq!(config.intents.len(), 1);
        assert_eq!(config.intents[0].intent, "bonjour");
        assert_eq!(config.entities[0].values, vec![ValueRecord::synonyms("bleu", vec![])]);
        assert_eq!(config.dialog_nodes.len(), 1);
        assert_eq!(config.counterexamples, vec![Example::new("pas ça")]);
        assert!(config.metadata.contains_key("api_version"));
        assert!(config.learning_opt_out);
    }

    #[test]
    fn test_base_content_passes_through_unchanged() {
        let intents = json!([{
            "intent": "order",
            "examples": [{
                "text": "two large pizzas",
                "mentions": [{"entity": "size", "location": [4, 9]}]
            }]
        }]);
        let entities = json!([{
            "entity": "size",
            "metadata": {"source": "import"},
            "values": [{"value": "large", "synonyms": ["big"], "metadata": {"x": 1}}]
        }]);
        let counterexamples = json!([{"text": "no thanks", "created": "2018-07-01T00:00:00Z"}]);
        let base = BaseWorkspace::from_value(json!({
            "intents": intents.clone(),
            "entities": entities,
            "counterexamples": counterexamples.clone()
        }))
        .unwrap();

        let config = WorkspaceAssembler::new().with_base(base).assemble();
        let sent = serde_json::to_value(&config).unwrap();

        assert_eq!(sent["intents"], intents);
        assert_eq!(sent["counterexamples"], counterexamples);
        assert_eq!(sent["entities"][0]["metadata"], json!({"source": "import"}));
        assert_eq!(
            sent["entities"][0]["values"][0],
            json!({"type": "synonyms", "value": "large", "synonyms": ["big"], "metadata": {"x": 1}})
        );
    }

    #[test]
    fn test_base_name_and_description_are_not_used() {
        let config = WorkspaceAssembler::new().with_base(base_document()).assemble();
        assert_eq!(config.name, "");
        assert_eq!(config.description, "");
    }

    #[test]
    fn test_built_intents_replace_base_wholesale() {
        let built = vec![IntentDefinition::new("greet", vec![Example::new("hello")])];
        let config = WorkspaceAssembler::new()
            .with_base(base_document())
            .with_intents(built.clone())
            .assemble();
        assert_eq!(config.intents, built);
        // Entities were not rebuilt, so the base list survives.
        assert_eq!(config.entities[0].entity, "couleur");
        assert_eq!(config.language, "fr");
    }

    #[test]
    fn test_built_empty_entities_still_replace_base() {
        let config = WorkspaceAssembler::new()
            .with_base(base_document())
            .with_entities(vec![])
            .assemble();
        assert!(config.entities.is_empty());
    }

    #[test]
    fn test_overrides_win() {
        let config = WorkspaceAssembler::new()
            .with_base(base_document())
            .with_name("Car Dealer")
            .with_description("Trained from CSV")
            .assemble();
        assert_eq!(config.name, "Car Dealer");
        assert_eq!(config.description, "Trained from CSV");
    }

    #[test]
    fn test_partial_base_keeps_other_defaults() {
        let base = BaseWorkspace::from_value(json!({"language": "fr"})).unwrap();
        let config = WorkspaceAssembler::new().with_base(base).assemble();
        assert_eq!(config.language, "fr");
        assert!(config.intents.is_empty());
        assert!(config.metadata.is_empty());
        assert!(!config.learning_opt_out);
    }
}
