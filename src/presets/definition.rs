//! Presets declared in YAML definition files

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::generation::{Context, MethodDescriptor, Parameter};
use crate::presets::{Preset, PresetError};

const DEFINITION_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Shape of one preset definition file. Every field is optional; only the
/// fields present are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PresetDefinition {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    pub parameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    pub signals: Vec<SignalDefinition>,
    pub queries: Vec<QueryDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_queue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalDefinition {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl PresetDefinition {
    pub fn from_yaml(path: &Path, source: &str) -> Result<Self, PresetError> {
        serde_yaml::from_str(source).map_err(|e| PresetError::InvalidDefinition {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    }

    pub fn to_yaml(&self, path: &Path) -> Result<String, PresetError> {
        serde_yaml::to_string(self).map_err(|e| PresetError::InvalidDefinition {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    }

    /// Starting point written by `make:preset`
    pub fn skeleton(name: &str) -> Self {
        Self {
            description: format!("{name} workflow"),
            method: Some("handle".to_string()),
            parameters: vec![Parameter::new("name", "string")],
            returns: None,
            signals: vec![SignalDefinition {
                name: "cancel".to_string(),
                parameters: Vec::new(),
            }],
            queries: vec![QueryDefinition {
                name: "getStatus".to_string(),
                ty: "string".to_string(),
                parameters: Vec::new(),
            }],
            task_queue: None,
            timeout: None,
        }
    }
}

/// Preset backed by a definition file
#[derive(Debug, Clone)]
pub struct DefinitionPreset {
    definition: PresetDefinition,
}

impl DefinitionPreset {
    pub fn new(definition: PresetDefinition) -> Self {
        Self { definition }
    }

    pub fn definition(&self) -> &PresetDefinition {
        &self.definition
    }
}

impl Preset for DefinitionPreset {
    fn description(&self) -> &str {
        &self.definition.description
    }

    fn apply(&self, mut context: Context) -> Context {
        let definition = &self.definition;

        if let Some(method) = &definition.method {
            context = context.with_method(method.clone());
        }
        if !definition.parameters.is_empty() {
            context = context.with_method_parameters(definition.parameters.clone());
        }
        if let Some(returns) = &definition.returns {
            context = context.with_handler_return_type(returns.clone());
        }
        if !definition.signals.is_empty() {
            context = context.with_signal_methods(definition.signals.iter().map(|signal| {
                MethodDescriptor::new(signal.name.clone()).with_parameters(signal.parameters.clone())
            }));
        }
        if !definition.queries.is_empty() {
            context = context.with_query_methods(definition.queries.iter().map(|query| {
                MethodDescriptor::new(query.name.clone())
                    .with_parameters(query.parameters.clone())
                    .returns(query.ty.clone())
            }));
        }
        if definition.task_queue.is_some() {
            context = context.with_task_queue(definition.task_queue.clone());
        }
        if let Some(timeout) = definition.timeout {
            context = context.with_activity_timeout(timeout);
        }

        context
    }
}

fn is_definition_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| DEFINITION_EXTENSIONS.contains(&ext))
}

/// Load every definition in `dir`, in file-name order. The preset name is
/// the file stem. A missing directory yields no presets.
pub fn load_definitions(dir: &Path) -> Result<Vec<(String, DefinitionPreset)>, PresetError> {
    if !dir.exists() {
        debug!(dir = %dir.display(), "Preset directory not found, skipping");
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(PresetError::io(dir))? {
        let path = entry.map_err(PresetError::io(dir))?.path();
        if is_definition_file(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    paths
        .into_iter()
        .map(|path| {
            let source = std::fs::read_to_string(&path).map_err(PresetError::io(&path))?;
            let definition = PresetDefinition::from_yaml(&path, &source)?;
            let name = preset_name(&path)?;
            debug!(preset = %name, path = %path.display(), "Loaded preset definition");
            Ok((name, DefinitionPreset::new(definition)))
        })
        .collect()
}

fn preset_name(path: &Path) -> Result<String, PresetError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| PresetError::InvalidDefinition {
            path: path.to_path_buf(),
            detail: "file name is not a valid preset name".to_string(),
        })
}

/// Path of the definition file for `name` inside `dir`
pub fn definition_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{}", DEFINITION_EXTENSIONS[0]))
}

/// Write the skeleton definition for `name`, refusing to replace an existing
/// file unless `force` is set
pub fn write_skeleton(dir: &Path, name: &str, force: bool) -> Result<PathBuf, PresetError> {
    let path = definition_path(dir, name);
    if path.exists() && !force {
        return Err(PresetError::AlreadyExists { path });
    }

    let body = PresetDefinition::skeleton(name).to_yaml(&path)?;
    let content = format!("# make:workflow <Name> --preset {name}\n{body}");

    std::fs::create_dir_all(dir).map_err(PresetError::io(dir))?;
    std::fs::write(&path, content).map_err(PresetError::io(&path))?;
    Ok(path)
}
