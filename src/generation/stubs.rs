//! Fixed method-body stub templates, rendered with Tera

use once_cell::sync::Lazy;
use serde::Serialize;
use tera::Tera;

use crate::generation::GenerationError;
use crate::generation::utils::php_string_literal;

const WORKFLOW_CONSTRUCTOR: &str = "\
$this->activity = {{ workflow }}::newActivityStub(
    {{ activity_interface }}::class,
    {{ activity_options }}::new()
        ->withScheduleToCloseTimeout({{ carbon_interval }}::seconds({{ timeout }}))
);";

const WORKFLOW_HANDLER: &str = "return yield $this->activity->{{ method }}({{ arguments }});";

const SIGNAL_STUB: &str = "// Do something special.";

const QUERY_STUB: &str = "\
// Query something special.
{% if statement %}{{ statement }};{% endif %}";

const ACTIVITY_BODY: &str = "\
$this->{{ logger }}->info({{ message }}, [{{ context }}]);

return {{ result }};";

/// Message logged by every generated activity
pub const ACTIVITY_LOG_MESSAGE: &str = "Something special happens here.";

/// Value returned by every generated activity
pub const ACTIVITY_RESULT: &str = "Success";

static STUBS: Lazy<Result<Tera, tera::Error>> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (Stub::WorkflowConstructor.template_name(), WORKFLOW_CONSTRUCTOR),
        (Stub::WorkflowHandler.template_name(), WORKFLOW_HANDLER),
        (Stub::Signal.template_name(), SIGNAL_STUB),
        (Stub::Query.template_name(), QUERY_STUB),
        (Stub::ActivityBody.template_name(), ACTIVITY_BODY),
    ])?;
    Ok(tera)
});

/// The body stubs available to the generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stub {
    WorkflowConstructor,
    WorkflowHandler,
    Signal,
    Query,
    ActivityBody,
}

impl Stub {
    fn template_name(self) -> &'static str {
        match self {
            Self::WorkflowConstructor => "workflow_constructor.php",
            Self::WorkflowHandler => "workflow_handler.php",
            Self::Signal => "signal_stub.php",
            Self::Query => "query_stub.php",
            Self::ActivityBody => "activity_body.php",
        }
    }

    /// Renders the stub and splits it into body lines. Trailing empty lines
    /// are dropped.
    pub fn render<T: Serialize>(self, values: &T) -> Result<Vec<String>, GenerationError> {
        let tera = STUBS
            .as_ref()
            .map_err(|e| GenerationError::Render(format!("Invalid stub templates: {e}")))?;
        let context = tera::Context::from_serialize(values).map_err(|e| {
            GenerationError::Render(format!("Invalid context for {}: {e}", self.template_name()))
        })?;
        let rendered = tera.render(self.template_name(), &context).map_err(|e| {
            GenerationError::Render(format!("Failed to render {}: {e}", self.template_name()))
        })?;

        let mut lines: Vec<String> = rendered.lines().map(str::to_string).collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        Ok(lines)
    }
}

/// Statement that makes a stub query body satisfy its declared return type,
/// or `None` when no statement is needed (`void`)
pub fn query_placeholder(return_type: &str, method: &str) -> Option<String> {
    let ty = return_type.trim();
    let unimplemented = format!(
        "throw new \\LogicException({})",
        php_string_literal(&format!("Query {method}() is not implemented."))
    );

    if ty.starts_with('?') {
        return Some("return null".to_string());
    }

    let members: Vec<String> = ty
        .split('|')
        .map(|m| m.trim_start_matches('\\').to_ascii_lowercase())
        .collect();
    if members.iter().any(|m| m == "null" || m == "mixed") {
        return Some("return null".to_string());
    }

    let first = members.first().map(String::as_str).unwrap_or_default();
    let statement = match first {
        "void" => return None,
        "string" => "return ''".to_string(),
        "int" => "return 0".to_string(),
        "float" => "return 0.0".to_string(),
        "bool" | "false" => "return false".to_string(),
        "true" => "return true".to_string(),
        "array" | "iterable" => "return []".to_string(),
        "object" => "return new \\stdClass()".to_string(),
        "callable" => "return static fn () => null".to_string(),
        "self" | "static" => "return $this".to_string(),
        _ => unimplemented,
    };
    Some(statement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_workflow_handler_stub() {
        let lines = Stub::WorkflowHandler
            .render(&json!({ "method": "handle", "arguments": "$name, $count" }))
            .unwrap();
        assert_eq!(lines, ["return yield $this->activity->handle($name, $count);"]);
    }

    #[test]
    fn test_workflow_constructor_stub() {
        let lines = Stub::WorkflowConstructor
            .render(&json!({
                "workflow": "Workflow",
                "activity_interface": "PingActivityInterface",
                "activity_options": "ActivityOptions",
                "carbon_interval": "CarbonInterval",
                "timeout": 10,
            }))
            .unwrap();
        assert_eq!(
            lines,
            [
                "$this->activity = Workflow::newActivityStub(",
                "    PingActivityInterface::class,",
                "    ActivityOptions::new()",
                "        ->withScheduleToCloseTimeout(CarbonInterval::seconds(10))",
                ");",
            ]
        );
    }

    #[test]
    fn test_query_stub_with_and_without_statement() {
        let lines = Stub::Query
            .render(&json!({ "statement": "return ''" }))
            .unwrap();
        assert_eq!(lines, ["// Query something special.", "return '';"]);

        let lines = Stub::Query.render(&json!({ "statement": null })).unwrap();
        assert_eq!(lines, ["// Query something special."]);
    }

    #[test]
    fn test_activity_body_keeps_blank_line() {
        let lines = Stub::ActivityBody
            .render(&json!({
                "logger": "logger",
                "message": "'Something special happens here.'",
                "context": "'name' => $name",
                "result": "'Success'",
            }))
            .unwrap();
        assert_eq!(
            lines,
            [
                "$this->logger->info('Something special happens here.', ['name' => $name]);",
                "",
                "return 'Success';",
            ]
        );
    }

    #[test]
    fn test_query_placeholders() {
        assert_eq!(query_placeholder("string", "s").as_deref(), Some("return ''"));
        assert_eq!(query_placeholder("int", "s").as_deref(), Some("return 0"));
        assert_eq!(query_placeholder("float", "s").as_deref(), Some("return 0.0"));
        assert_eq!(query_placeholder("bool", "s").as_deref(), Some("return false"));
        assert_eq!(query_placeholder("array", "s").as_deref(), Some("return []"));
        assert_eq!(query_placeholder("?string", "s").as_deref(), Some("return null"));
        assert_eq!(query_placeholder("int|null", "s").as_deref(), Some("return null"));
        assert_eq!(query_placeholder("mixed", "s").as_deref(), Some("return null"));
        assert_eq!(query_placeholder("int|string", "s").as_deref(), Some("return 0"));
        assert_eq!(query_placeholder("void", "s"), None);
        assert_eq!(
            query_placeholder("App\\Dto\\Status", "status").as_deref(),
            Some("throw new \\LogicException('Query status() is not implemented.')")
        );
    }
}
