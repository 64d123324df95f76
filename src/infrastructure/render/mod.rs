//! Source renderers

pub mod php_printer;

pub use php_printer::*;
