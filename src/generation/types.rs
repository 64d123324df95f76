//! Core types for the generation domain: artifact kinds and the structured
//! class/interface representation produced by the generators

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::generation::{Namespace, Parameter, RoleMarker};

/// File extension of generated sources
pub const SOURCE_EXTENSION: &str = "php";

/// The four artifacts generated for every workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    WorkflowInterface,
    Workflow,
    ActivityInterface,
    Activity,
}

impl ArtifactKind {
    /// Generation and write order
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::WorkflowInterface,
        ArtifactKind::Workflow,
        ArtifactKind::ActivityInterface,
        ArtifactKind::Activity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WorkflowInterface => "workflow-interface",
            Self::Workflow => "workflow",
            Self::ActivityInterface => "activity-interface",
            Self::Activity => "activity",
        }
    }

    pub fn is_interface(&self) -> bool {
        matches!(self, Self::WorkflowInterface | Self::ActivityInterface)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "workflow-interface" => Ok(Self::WorkflowInterface),
            "workflow" => Ok(Self::Workflow),
            "activity-interface" => Ok(Self::ActivityInterface),
            "activity" => Ok(Self::Activity),
            _ => Err(format!("Unknown artifact kind: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Class,
    Interface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

/// A method parameter; `promoted` turns a constructor parameter into a
/// promoted property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    pub name: String,
    pub ty: String,
    pub promoted: Option<Visibility>,
}

impl From<&Parameter> for ParamDecl {
    fn from(param: &Parameter) -> Self {
        Self {
            name: param.name.clone(),
            ty: param.ty.clone(),
            promoted: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    pub name: String,
    pub ty: String,
    pub visibility: Visibility,
    pub doc: Option<String>,
}

/// A method; `body == None` renders a signature only (interfaces)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    pub visibility: Visibility,
    pub params: Vec<ParamDecl>,
    pub return_type: Option<String>,
    pub markers: Vec<RoleMarker>,
    pub body: Option<Vec<String>>,
}

/// Name, parameters and return type of a method, used to compare an
/// interface method with its implementation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    pub params: Vec<Parameter>,
    pub return_type: Option<String>,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            params: Vec::new(),
            return_type: None,
            markers: Vec::new(),
            body: None,
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.name == "__construct"
    }

    pub fn signature(&self) -> MethodSignature {
        MethodSignature {
            name: self.name.clone(),
            params: self
                .params
                .iter()
                .map(|p| Parameter::new(p.name.clone(), p.ty.clone()))
                .collect(),
            return_type: self.return_type.clone(),
        }
    }
}

/// Structured class or interface declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub kind: DeclarationKind,
    pub name: String,
    pub implements: Vec<String>,
    pub markers: Vec<RoleMarker>,
    pub properties: Vec<PropertyDecl>,
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    pub fn class(name: impl Into<String>) -> Self {
        Self::with_kind(DeclarationKind::Class, name)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::with_kind(DeclarationKind::Interface, name)
    }

    fn with_kind(kind: DeclarationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            implements: Vec::new(),
            markers: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Methods other than the constructor, in declaration order
    pub fn public_api(&self) -> impl Iterator<Item = &MethodDecl> {
        self.methods.iter().filter(|m| !m.is_constructor())
    }
}

/// Namespace container threaded through one generator call. Collects the
/// `use` imports of the file being generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceScope {
    namespace: Namespace,
    uses: BTreeSet<String>,
}

impl NamespaceScope {
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            uses: BTreeSet::new(),
        }
    }

    /// Imports a fully qualified class and returns the short name to use in
    /// code
    pub fn add_use(&mut self, class: &str) -> String {
        let class = class.trim_start_matches('\\');
        self.uses.insert(class.to_string());
        short_name(class).to_string()
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn uses(&self) -> &BTreeSet<String> {
        &self.uses
    }
}

/// Last segment of a qualified class name
pub fn short_name(class: &str) -> &str {
    class.rsplit('\\').next().unwrap_or(class)
}

/// One generated class or interface, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub scope: NamespaceScope,
    pub declaration: ClassDecl,
}

impl GeneratedArtifact {
    pub fn name(&self) -> &str {
        &self.declaration.name
    }

    pub fn namespace(&self) -> &Namespace {
        self.scope.namespace()
    }

    pub fn imports(&self) -> &BTreeSet<String> {
        self.scope.uses()
    }

    pub fn qualified_name(&self) -> String {
        self.namespace().qualify(self.name())
    }

    /// `<Name>.php`
    pub fn file_name(&self) -> String {
        format!("{}.{SOURCE_EXTENSION}", self.name())
    }

    /// Namespace directory plus file name
    pub fn file_path(&self) -> PathBuf {
        self.namespace().to_dir().join(self.file_name())
    }

    /// Structured summary of the role markers, as read by the runtime
    pub fn declaration(&self) -> Declaration {
        let markers = self.declaration.markers.clone();
        Declaration {
            class: self.qualified_name(),
            kind: self.kind,
            task_queue: markers
                .iter()
                .find_map(|m| m.task_queue().map(str::to_string)),
            markers,
            methods: self
                .declaration
                .public_api()
                .filter(|m| !m.markers.is_empty())
                .map(|m| MethodRoles {
                    name: m.name.clone(),
                    markers: m.markers.clone(),
                })
                .collect(),
        }
    }
}

/// Role markers of one artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub class: String,
    pub kind: ArtifactKind,
    pub task_queue: Option<String>,
    pub markers: Vec<RoleMarker>,
    pub methods: Vec<MethodRoles>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodRoles {
    pub name: String,
    pub markers: Vec<RoleMarker>,
}

/// Source text bound to its destination, handed to the output service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

/// Result of one generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub artifacts: Vec<GeneratedArtifact>,
    pub written: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn declarations(&self) -> Vec<Declaration> {
        self.artifacts.iter().map(GeneratedArtifact::declaration).collect()
    }
}
