//! The naming rule that ties the four artifacts together

use std::collections::HashSet;

use crate::generation::{ArtifactKind, GenerationError, rules};

pub const WORKFLOW_TOKEN: &str = "Workflow";

/// Removes one literal trailing occurrence of `token`, if present
pub fn strip_trailing_token<'a>(name: &'a str, token: &str) -> &'a str {
    name.strip_suffix(token).unwrap_or(name)
}

/// Class names of the four artifacts derived from one base class name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNames {
    pub workflow_interface: String,
    pub workflow: String,
    pub activity_interface: String,
    pub activity: String,
}

impl ArtifactNames {
    /// Applies the naming rule:
    ///
    /// - activity = `base + "Activity"`, its interface = `base + "ActivityInterface"`
    /// - workflow = `strip(base, "Workflow") + "Workflow"`, its interface = that + `"Interface"`
    ///
    /// Fails with `NameCollision` when the base is degenerate (empty after
    /// stripping) or two of the names coincide.
    pub fn resolve(base_class_name: &str) -> Result<Self, GenerationError> {
        rules::validate_identifier("class", base_class_name)?;

        let stem = strip_trailing_token(base_class_name, WORKFLOW_TOKEN);
        if stem.is_empty() {
            return Err(GenerationError::NameCollision {
                name: WORKFLOW_TOKEN.to_string(),
            });
        }

        let workflow = format!("{stem}{WORKFLOW_TOKEN}");
        let names = Self {
            workflow_interface: format!("{workflow}Interface"),
            workflow,
            activity_interface: format!("{base_class_name}ActivityInterface"),
            activity: format!("{base_class_name}Activity"),
        };

        let mut seen = HashSet::new();
        for kind in ArtifactKind::ALL {
            let name = names.for_kind(kind);
            if !seen.insert(name.to_ascii_lowercase()) {
                return Err(GenerationError::NameCollision {
                    name: name.to_string(),
                });
            }
        }

        Ok(names)
    }

    pub fn for_kind(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::WorkflowInterface => &self.workflow_interface,
            ArtifactKind::Workflow => &self.workflow,
            ArtifactKind::ActivityInterface => &self.activity_interface,
            ArtifactKind::Activity => &self.activity,
        }
    }
}
