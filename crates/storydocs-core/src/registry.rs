//! Example registry.
//!
//! [`ExampleRegistry`] is the read-only view the engine needs.
//! [`InMemoryRegistry`] keeps examples in insertion order and combines
//! parameters from three levels before typing them:
//!
//! 1. global parameters
//! 2. component parameters (per component path)
//! 3. example parameters
//!
//! Objects are deep merged, later levels override earlier keys.

use serde_json::Value;

use crate::example::Example;
use crate::parameters::Parameters;

/// Read access to registered examples.
pub trait ExampleRegistry {
    /// Examples registered under `component_path`, in registration order.
    fn examples_for_path(&self, component_path: &str) -> Vec<&Example>;

    /// Look up an example by id.
    fn example(&self, id: &str) -> Option<&Example>;

    /// All component paths, in registration order.
    fn component_paths(&self) -> Vec<&str>;

    /// Combined global and component parameters for a path.
    fn component_parameters(&self, _component_path: &str) -> Option<&Parameters> {
        None
    }
}

/// Error raised while registering examples.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Combined parameters do not match the expected shape.
    #[error("Invalid parameters for {target}: {source}")]
    InvalidParameters {
        /// Component path or example id the parameters belong to.
        target: String,
        /// Deserialization error.
        source: serde_json::Error,
    },
}

#[derive(Debug)]
struct ComponentEntry {
    path: String,
    raw: Value,
    parameters: Parameters,
}

/// In-memory example registry.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use storydocs_core::{ExampleRegistry, InMemoryRegistry};
///
/// let mut registry = InMemoryRegistry::new();
/// registry.add_component("Forms/Button", json!({ "component": "Button" })).unwrap();
/// registry.add_example("Forms/Button", "Primary", None, json!(null)).unwrap();
///
/// let examples = registry.examples_for_path("Forms/Button");
/// assert_eq!(examples[0].id, "forms-button--primary");
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    global: Value,
    components: Vec<ComponentEntry>,
    examples: Vec<Example>,
}

impl InMemoryRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from already-typed examples.
    ///
    /// Parameters are taken as given, without combination.
    #[must_use]
    pub fn from_examples(examples: impl IntoIterator<Item = Example>) -> Self {
        let mut registry = Self::new();
        for example in examples {
            registry.push(example);
        }
        registry
    }

    /// Set global parameters. Must be called before components are added.
    #[must_use]
    pub fn with_global_parameters(mut self, parameters: Value) -> Self {
        self.global = parameters;
        self
    }

    /// Register a component path with its parameters.
    ///
    /// Registering the same path again merges the new parameters into it.
    pub fn add_component(
        &mut self,
        component_path: &str,
        parameters: Value,
    ) -> Result<(), RegistryError> {
        let index = self.component_index(component_path)?;
        let entry = &mut self.components[index];
        merge_parameters(&mut entry.raw, &parameters);
        entry.parameters = typed(&entry.raw, component_path)?;
        Ok(())
    }

    /// Register an example under a component path.
    ///
    /// The id is derived from the path and name when not given. An example
    /// whose id is already registered is skipped and `None` is returned.
    pub fn add_example(
        &mut self,
        component_path: &str,
        name: &str,
        id: Option<&str>,
        parameters: Value,
    ) -> Result<Option<&Example>, RegistryError> {
        let id = id.map_or_else(|| example_id(component_path, name), str::to_owned);
        let index = self.component_index(component_path)?;

        let mut combined = self.components[index].raw.clone();
        merge_parameters(&mut combined, &parameters);
        let parameters = typed(&combined, &id)?;

        let example = Example::new(id, component_path, name).with_parameters(parameters);
        Ok(self.push(example))
    }

    /// Append an example, skipping duplicates by id.
    fn push(&mut self, example: Example) -> Option<&Example> {
        if let Some(existing) = self.example(&example.id) {
            tracing::warn!(
                id = %example.id,
                existing_path = %existing.component_path,
                path = %example.component_path,
                "Duplicate example id, skipping"
            );
            return None;
        }
        if !self.components.iter().any(|c| c.path == example.component_path) {
            self.components.push(ComponentEntry {
                path: example.component_path.clone(),
                raw: self.global.clone(),
                parameters: Parameters::from_value(self.global.clone()).unwrap_or_default(),
            });
        }
        self.examples.push(example);
        self.examples.last()
    }

    /// Index of the component entry for a path, creating it from globals.
    fn component_index(&mut self, component_path: &str) -> Result<usize, RegistryError> {
        if let Some(index) = self.components.iter().position(|c| c.path == component_path) {
            return Ok(index);
        }
        let raw = self.global.clone();
        let parameters = typed(&raw, component_path)?;
        self.components.push(ComponentEntry {
            path: component_path.to_owned(),
            raw,
            parameters,
        });
        Ok(self.components.len() - 1)
    }

    /// Number of registered examples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Whether no examples are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

impl ExampleRegistry for InMemoryRegistry {
    fn examples_for_path(&self, component_path: &str) -> Vec<&Example> {
        self.examples
            .iter()
            .filter(|e| e.component_path == component_path)
            .collect()
    }

    fn example(&self, id: &str) -> Option<&Example> {
        self.examples.iter().find(|e| e.id == id)
    }

    fn component_paths(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.path.as_str()).collect()
    }

    fn component_parameters(&self, component_path: &str) -> Option<&Parameters> {
        self.components
            .iter()
            .find(|c| c.path == component_path)
            .map(|c| &c.parameters)
    }
}

fn typed(raw: &Value, target: &str) -> Result<Parameters, RegistryError> {
    Parameters::from_value(raw.clone()).map_err(|source| RegistryError::InvalidParameters {
        target: target.to_owned(),
        source,
    })
}

/// Deep merge `overlay` into `base`.
///
/// Objects merge key by key; any other value in `overlay` replaces the one
/// in `base`. A `null` overlay leaves `base` unchanged.
pub fn merge_parameters(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                merge_parameters(base.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}

/// Derive an example id from its component path and name.
///
/// Both parts are lowercased, runs of non-alphanumeric characters become a
/// single `-`, leading and trailing dashes are trimmed, and the parts are
/// joined with `--`.
///
/// ```
/// assert_eq!(
///     storydocs_core::example_id("Docs/PropRow", "Long name"),
///     "docs-proprow--long-name"
/// );
/// ```
#[must_use]
pub fn example_id(component_path: &str, name: &str) -> String {
    format!("{}--{}", sanitize(component_path), sanitize(name))
}

/// Identifier of a component path, the part of [`example_id`] before `--`.
#[must_use]
pub fn component_id(component_path: &str) -> String {
    sanitize(component_path)
}

fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.to_lowercase().chars() {
        if c.is_alphanumeric() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
