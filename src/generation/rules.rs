//! Business rules for identifiers and type declarations

use once_cell::sync::Lazy;
use regex::Regex;

use crate::generation::GenerationError;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid"));

static CLASS_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\\?[A-Za-z_][A-Za-z0-9_]*(\\[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("class type pattern is valid")
});

/// Returns true when `s` is a plain identifier usable as a class, method or
/// parameter name.
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

/// Validates an identifier, reporting `kind` in the error
pub fn validate_identifier(kind: &'static str, name: &str) -> Result<(), GenerationError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(GenerationError::invalid_identifier(kind, name))
    }
}

/// Validates a parameter name. `this` is reserved for the object itself.
pub fn validate_parameter_name(name: &str) -> Result<(), GenerationError> {
    validate_identifier("parameter", name)?;
    if name == "this" {
        return Err(GenerationError::invalid_identifier("parameter", name));
    }
    Ok(())
}

/// Validates a declared type such as `string`, `?int`, `\Generator` or
/// `int|string`.
///
/// `owner` names the method or parameter the type belongs to so that the
/// error can point at it.
pub fn validate_type(owner: &str, ty: &str) -> Result<(), GenerationError> {
    if ty.trim().is_empty() {
        return Err(GenerationError::invalid_type(owner, "type is empty"));
    }
    if ty != ty.trim() {
        return Err(GenerationError::invalid_type(
            owner,
            format!("type '{ty}' has surrounding whitespace"),
        ));
    }

    let (nullable, body) = match ty.strip_prefix('?') {
        Some(rest) => (true, rest),
        None => (false, ty),
    };

    let members: Vec<&str> = body.split('|').collect();
    if nullable && members.len() > 1 {
        return Err(GenerationError::invalid_type(
            owner,
            format!("nullable shorthand cannot be combined with a union in '{ty}'"),
        ));
    }

    for member in members {
        if !CLASS_TYPE.is_match(member) {
            return Err(GenerationError::invalid_type(
                owner,
                format!("'{ty}' is not a valid type declaration"),
            ));
        }
        if nullable && member.eq_ignore_ascii_case("void") {
            return Err(GenerationError::invalid_type(
                owner,
                "void cannot be nullable".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates a parameter type: a valid type that is not `void`, `never` or
/// a bare `null`.
pub fn validate_parameter_type(owner: &str, ty: &str) -> Result<(), GenerationError> {
    validate_type(owner, ty)?;

    let body = ty.strip_prefix('?').unwrap_or(ty);
    if let Some(member) = body
        .split('|')
        .find(|m| m.eq_ignore_ascii_case("void") || m.eq_ignore_ascii_case("never"))
    {
        return Err(GenerationError::invalid_type(
            owner,
            format!("'{member}' is only valid as a return type"),
        ));
    }
    if body.eq_ignore_ascii_case("null") {
        return Err(GenerationError::invalid_type(
            owner,
            "'null' cannot be used as a standalone parameter type",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("handle"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("PingSite2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("has-dash"));
        assert!(!is_identifier("App\\Foo"));
    }

    #[test]
    fn test_valid_types() {
        for ty in [
            "string",
            "?int",
            "\\Generator",
            "App\\Dto\\Status",
            "int|string",
            "\\Foo|null",
            "void",
        ] {
            assert!(validate_type("m", ty).is_ok(), "{ty} should be valid");
        }
    }

    #[test]
    fn test_invalid_types() {
        for ty in ["", "  ", " string", "in t", "?int|string", "int|", "\\", "1int", "?void"] {
            assert!(
                matches!(
                    validate_type("m", ty),
                    Err(GenerationError::InvalidParameterType { .. })
                ),
                "{ty:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parameter_types_exclude_return_only_types() {
        for ty in ["string", "?int", "int|null", "\\Generator", "mixed"] {
            assert!(validate_parameter_type("p", ty).is_ok(), "{ty} should be valid");
        }
        for ty in ["void", "VOID", "never", "int|never", "null", "in t"] {
            assert!(
                matches!(
                    validate_parameter_type("p", ty),
                    Err(GenerationError::InvalidParameterType { .. })
                ),
                "{ty:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parameter_names() {
        assert!(validate_parameter_name("name").is_ok());
        assert!(validate_parameter_name("This").is_ok());
        assert!(matches!(
            validate_parameter_name("this"),
            Err(GenerationError::InvalidIdentifier { kind: "parameter", .. })
        ));
        assert!(validate_parameter_name("2x").is_err());
    }

    #[test]
    fn test_validate_identifier_reports_kind() {
        match validate_identifier("parameter", "bad name") {
            Err(GenerationError::InvalidIdentifier { kind, value }) => {
                assert_eq!(kind, "parameter");
                assert_eq!(value, "bad name");
            }
            other => panic!("Expected InvalidIdentifier, got {other:?}"),
        }
    }
}
