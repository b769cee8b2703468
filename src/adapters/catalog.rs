use std::collections::HashMap;
use std::path::Path;

use crate::domain::{ComponentMetadata, FunctionDescriptor, LookupError};

/// Component metadata keyed by component id.
#[derive(Debug, Default, Clone)]
pub struct ComponentCatalog {
    components: HashMap<String, ComponentMetadata>,
}

impl ComponentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a component, replacing any earlier metadata with the same id.
    pub fn insert(&mut self, component: ComponentMetadata) -> Option<ComponentMetadata> {
        self.components
            .insert(component.component_id.clone(), component)
    }

    pub fn get(&self, component_id: &str) -> Option<&ComponentMetadata> {
        self.components.get(component_id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Components sorted by id.
    pub fn components(&self) -> Vec<&ComponentMetadata> {
        let mut components: Vec<_> = self.components.values().collect();
        components.sort_by(|a, b| a.component_id.cmp(&b.component_id));
        components
    }

    pub fn find_function(
        &self,
        component_id: &str,
        export_name: &str,
        function_name: &str,
    ) -> Result<FunctionDescriptor, LookupError> {
        self.get(component_id)
            .ok_or_else(|| LookupError::ComponentNotFound(component_id.to_string()))?
            .find_function(export_name, function_name)
    }

    /// Parse a JSON document and add its components.
    pub fn load_json(&mut self, content: &str) -> Result<usize, anyhow::Error> {
        // A document holds either one component or a list of them.
        let document: serde_json::Value = serde_json::from_str(content)?;
        let components = match document {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<ComponentMetadata>, _>>()?,
            document => vec![serde_json::from_value(document)?],
        };
        Ok(self.extend(components))
    }

    /// Parse a YAML document and add its components.
    pub fn load_yaml(&mut self, content: &str) -> Result<usize, anyhow::Error> {
        let document: serde_yaml::Value = serde_yaml::from_str(content)?;
        let components = match document {
            serde_yaml::Value::Sequence(items) => items
                .into_iter()
                .map(serde_yaml::from_value)
                .collect::<Result<Vec<ComponentMetadata>, _>>()?,
            document => vec![serde_yaml::from_value(document)?],
        };
        Ok(self.extend(components))
    }

    /// Load one metadata file; the extension selects JSON or YAML.
    pub fn load_file(&mut self, path: &Path) -> Result<usize, anyhow::Error> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => self.load_yaml(&content),
            _ => self.load_json(&content),
        }
    }

    /// Load every `*.json`, `*.yaml` and `*.yml` file in `dir`.
    pub fn load_dir(&mut self, dir: &str) -> Result<usize, anyhow::Error> {
        let pattern = format!("{}/*", dir);
        let mut loaded = 0;
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) => {
                    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                        if matches!(ext, "json" | "yaml" | "yml") {
                            match self.load_file(&path) {
                                Ok(count) => loaded += count,
                                Err(e) => tracing::warn!(
                                    "Skipping metadata file {}: {}",
                                    path.display(),
                                    e
                                ),
                            }
                        }
                    }
                }
                Err(e) => tracing::warn!("Failed to read glob entry: {}", e),
            }
        }
        Ok(loaded)
    }

    fn extend(&mut self, components: Vec<ComponentMetadata>) -> usize {
        let count = components.len();
        for component in components {
            self.insert(component);
        }
        count
    }
}
