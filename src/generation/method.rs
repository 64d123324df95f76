//! Method descriptors shared by the context and the generators

use serde::{Deserialize, Serialize};

use crate::generation::{GenerationError, rules};

/// A single named, typed parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Immutable description of one method: name, ordered parameters and
/// return type.
///
/// Parameter order is significant, it drives the argument order of every
/// generated call site. A `None` return type means `void`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
    name: String,
    parameters: Vec<Parameter>,
    return_type: Option<String>,
}

impl MethodDescriptor {
    /// A void method without parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: None,
        }
    }

    /// Appends a parameter, replacing the type of an existing parameter with
    /// the same name (its position is kept)
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        let param = Parameter::new(name, ty);
        match self.parameters.iter_mut().find(|p| p.name == param.name) {
            Some(existing) => existing.ty = param.ty,
            None => self.parameters.push(param),
        }
        self
    }

    /// Replaces the whole parameter list
    #[must_use]
    pub fn with_parameters<I>(self, parameters: I) -> Self
    where
        I: IntoIterator<Item = Parameter>,
    {
        let cleared = Self {
            parameters: Vec::new(),
            ..self
        };
        parameters
            .into_iter()
            .fold(cleared, |method, p| method.param(p.name, p.ty))
    }

    #[must_use]
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    #[must_use]
    pub fn returns_void(mut self) -> Self {
        self.return_type = None;
        self
    }

    #[must_use]
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }

    pub fn is_void(&self) -> bool {
        match &self.return_type {
            None => true,
            Some(ty) => ty.eq_ignore_ascii_case("void"),
        }
    }

    /// Checks the method name, every parameter name and every type.
    pub fn validate(&self) -> Result<(), GenerationError> {
        rules::validate_identifier("method", &self.name)?;
        for param in &self.parameters {
            rules::validate_parameter_name(&param.name)?;
            rules::validate_parameter_type(
                &format!("parameter ${} of {}()", param.name, self.name),
                &param.ty,
            )?;
        }
        if let Some(ty) = &self.return_type {
            rules::validate_type(&format!("return type of {}()", self.name), ty)?;
        }
        Ok(())
    }
}
