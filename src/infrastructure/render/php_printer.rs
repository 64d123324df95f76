//! PSR-12 printer for generated artifacts

use crate::generation::utils::php_string_literal;
use crate::generation::{
    ClassDecl, DeclarationKind, GeneratedArtifact, MethodDecl, ParamDecl, PropertyDecl,
    RoleMarker, SourceRenderer, short_name,
};

const INDENT: &str = "    ";

/// Renders artifacts as PHP source.
///
/// Output depends only on the artifact: imports come from a sorted set and
/// members keep declaration order.
pub struct PhpRenderer;

impl PhpRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhpRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceRenderer for PhpRenderer {
    fn render(&self, artifact: &GeneratedArtifact) -> String {
        let mut out = Printer::default();

        out.line(0, "<?php");
        out.blank();
        out.line(0, "declare(strict_types=1);");
        out.blank();

        if !artifact.namespace().is_global() {
            out.line(0, &format!("namespace {};", artifact.namespace()));
            out.blank();
        }

        if !artifact.imports().is_empty() {
            for class in artifact.imports() {
                out.line(0, &format!("use {class};"));
            }
            out.blank();
        }

        print_declaration(&mut out, &artifact.declaration);
        out.finish()
    }
}

#[derive(Default)]
struct Printer {
    buf: String,
}

impl Printer {
    fn line(&mut self, depth: usize, text: &str) {
        if !text.is_empty() {
            for _ in 0..depth {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn finish(self) -> String {
        self.buf
    }
}

fn print_declaration(out: &mut Printer, declaration: &ClassDecl) {
    for marker in &declaration.markers {
        out.line(0, &attribute(marker));
    }

    let keyword = match declaration.kind {
        DeclarationKind::Class => "class",
        DeclarationKind::Interface => "interface",
    };
    let mut header = format!("{keyword} {}", declaration.name);
    if !declaration.implements.is_empty() {
        let relation = match declaration.kind {
            DeclarationKind::Class => "implements",
            DeclarationKind::Interface => "extends",
        };
        header.push_str(&format!(" {relation} {}", declaration.implements.join(", ")));
    }
    out.line(0, &header);
    out.line(0, "{");

    let mut first = true;
    for property in &declaration.properties {
        if !first {
            out.blank();
        }
        first = false;
        print_property(out, property);
    }
    for method in &declaration.methods {
        if !first {
            out.blank();
        }
        first = false;
        print_method(out, method);
    }

    out.line(0, "}");
}

fn print_property(out: &mut Printer, property: &PropertyDecl) {
    if let Some(doc) = &property.doc {
        out.line(1, &format!("/** {doc} */"));
    }
    out.line(
        1,
        &format!(
            "{} {} ${};",
            property.visibility.as_str(),
            property.ty,
            property.name
        ),
    );
}

fn print_method(out: &mut Printer, method: &MethodDecl) {
    for marker in &method.markers {
        out.line(1, &attribute(marker));
    }

    let return_type = method
        .return_type
        .as_deref()
        .map(|ty| format!(": {ty}"))
        .unwrap_or_default();
    let head = format!("{} function {}", method.visibility.as_str(), method.name);
    let multiline = method.params.iter().any(|p| p.promoted.is_some());

    let Some(body) = &method.body else {
        let params = inline_params(&method.params);
        out.line(1, &format!("{head}({params}){return_type};"));
        return;
    };

    if multiline {
        out.line(1, &format!("{head}("));
        for param in &method.params {
            out.line(2, &format!("{},", param_decl(param)));
        }
        out.line(1, &format!("){return_type} {{"));
    } else {
        let params = inline_params(&method.params);
        out.line(1, &format!("{head}({params}){return_type}"));
        out.line(1, "{");
    }

    for line in body {
        out.line(2, line);
    }
    out.line(1, "}");
}

fn inline_params(params: &[ParamDecl]) -> String {
    params.iter().map(param_decl).collect::<Vec<_>>().join(", ")
}

fn param_decl(param: &ParamDecl) -> String {
    match param.promoted {
        Some(visibility) => format!("{} {} ${}", visibility.as_str(), param.ty, param.name),
        None => format!("{} ${}", param.ty, param.name),
    }
}

/// `#[Name]` or `#[Name(arg: 'value')]`, using the imported short name
fn attribute(marker: &RoleMarker) -> String {
    let name = short_name(marker.attribute_class());
    let arguments = marker.arguments();
    if arguments.is_empty() {
        return format!("#[{name}]");
    }

    let arguments = arguments
        .iter()
        .map(|(key, value)| format!("{key}: {}", php_string_literal(value)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("#[{name}({arguments})]")
}
