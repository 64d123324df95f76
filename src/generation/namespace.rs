//! Namespace paths for generated declarations

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::generation::{GenerationError, rules};

/// A namespace path such as `App\Workflow\PingSite`.
///
/// Dotted (`App.Workflow`), slashed (`App/Workflow`) and backslashed input
/// parse to the same value. The empty namespace is the global one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Namespace {
    segments: Vec<String>,
}

impl Namespace {
    pub fn global() -> Self {
        Self::default()
    }

    /// Parses without validating segment names
    pub fn parse(path: &str) -> Self {
        let segments = path
            .split(['.', '/', '\\'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_global(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns a new namespace with `segment` appended
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(Self::parse(segment).segments);
        Self { segments }
    }

    pub fn starts_with(&self, prefix: &Namespace) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// Directory layout for this namespace, one directory per segment
    pub fn to_dir(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Directory layout relative to `root` (PSR-4 style). Falls back to the
    /// full layout when this namespace is not below `root`.
    pub fn relative_dir(&self, root: &Namespace) -> PathBuf {
        if self.starts_with(root) {
            self.segments[root.segments.len()..].iter().collect()
        } else {
            self.to_dir()
        }
    }

    /// Fully qualified name of `class` inside this namespace, without the
    /// leading separator
    pub fn qualify(&self, class: &str) -> String {
        if self.is_global() {
            class.to_string()
        } else {
            format!("{self}\\{class}")
        }
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        for segment in &self.segments {
            rules::validate_identifier("namespace segment", segment)?;
        }
        Ok(())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("\\"))
    }
}

impl FromStr for Namespace {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let namespace = Self::parse(s);
        namespace.validate()?;
        Ok(namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_are_equivalent() {
        let dotted = Namespace::parse("App.Workflow.PingSite");
        assert_eq!(dotted, Namespace::parse("App/Workflow/PingSite"));
        assert_eq!(dotted, Namespace::parse("App\\Workflow\\PingSite"));
        assert_eq!(dotted, Namespace::parse("\\App\\Workflow\\PingSite\\"));
        assert_eq!(dotted.to_string(), "App\\Workflow\\PingSite");
    }

    #[test]
    fn test_dirs() {
        let ns = Namespace::parse("App.Workflow.PingSite");
        assert_eq!(ns.to_dir(), PathBuf::from("App/Workflow/PingSite"));
        assert_eq!(
            ns.relative_dir(&Namespace::parse("App")),
            PathBuf::from("Workflow/PingSite")
        );
        assert_eq!(
            ns.relative_dir(&Namespace::parse("Other")),
            PathBuf::from("App/Workflow/PingSite")
        );
    }

    #[test]
    fn test_child_and_qualify() {
        let ns = Namespace::parse("App\\Workflow").child("PingSite");
        assert_eq!(ns.qualify("Foo"), "App\\Workflow\\PingSite\\Foo");
        assert_eq!(Namespace::global().qualify("Foo"), "Foo");
    }

    #[test]
    fn test_from_str_validates_segments() {
        assert!("App.Workflow".parse::<Namespace>().is_ok());
        assert!("App.2nd".parse::<Namespace>().is_err());
        assert!("".parse::<Namespace>().unwrap().is_global());
    }
}
