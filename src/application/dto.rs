//! Data Transfer Objects for application layer

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::application::ApplicationError;
use crate::generation::{Declaration, SourceFile};

/// `name:type` pair given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedName {
    pub name: String,
    pub ty: String,
}

impl FromStr for TypedName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, ty) = s
            .split_once(':')
            .ok_or_else(|| format!("expected <name>:<type>, got '{s}'"))?;
        let (name, ty) = (name.trim(), ty.trim());
        if name.is_empty() || ty.is_empty() {
            return Err(format!("expected <name>:<type>, got '{s}'"));
        }
        Ok(Self {
            name: name.to_string(),
            ty: ty.to_string(),
        })
    }
}

impl fmt::Display for TypedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.ty)
    }
}

/// Request to scaffold one workflow/activity pair
#[derive(Debug, Clone, Default)]
pub struct MakeWorkflowRequest {
    pub name: String,
    pub task_queue: Option<String>,
    pub signals: Vec<String>,
    pub queries: Vec<TypedName>,
    pub preset: Option<String>,
    pub method: Option<String>,
    pub params: Vec<TypedName>,
    pub namespace: Option<String>,
    pub timeout: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub dry_run: bool,
}

impl MakeWorkflowRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.name.trim().is_empty() {
            return Err(ApplicationError::InvalidArgument(
                "workflow name cannot be empty".to_string(),
            ));
        }
        if self.task_queue.as_deref().is_some_and(|q| q.trim().is_empty()) {
            return Err(ApplicationError::InvalidArgument(
                "task queue cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MakeWorkflowResponse {
    pub output_root: PathBuf,
    /// Rendered sources, in generation order
    pub files: Vec<SourceFile>,
    /// Paths written; empty on a dry run
    pub written: Vec<PathBuf>,
    pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone)]
pub struct MakePresetRequest {
    pub name: String,
    pub force: bool,
}

impl MakePresetRequest {
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let valid = !self.name.is_empty()
            && self
                .name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ApplicationError::InvalidArgument(format!(
                "invalid preset name '{}': use letters, digits, '-' or '_'",
                self.name
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MakePresetResponse {
    pub path: PathBuf,
}

/// One line of `preset:list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetSummary {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_name_parsing() {
        let parsed: TypedName = "status: ?string".parse().unwrap();
        assert_eq!(parsed.name, "status");
        assert_eq!(parsed.ty, "?string");
        assert_eq!(parsed.to_string(), "status:?string");

        assert!("status".parse::<TypedName>().is_err());
        assert!(":string".parse::<TypedName>().is_err());
        assert!("status:".parse::<TypedName>().is_err());
    }

    #[test]
    fn test_make_workflow_request_validation() {
        assert!(MakeWorkflowRequest::new("PingSite").validate().is_ok());
        assert!(MakeWorkflowRequest::new(" ").validate().is_err());

        let mut request = MakeWorkflowRequest::new("PingSite");
        request.task_queue = Some(" ".into());
        assert!(matches!(
            request.validate(),
            Err(ApplicationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_make_preset_request_validation() {
        let valid = MakePresetRequest { name: "ping-site_2".into(), force: false };
        assert!(valid.validate().is_ok());
        let invalid = MakePresetRequest { name: "../escape".into(), force: false };
        assert!(invalid.validate().is_err());
    }
}
