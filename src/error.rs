//! Error types for template rendering.
//!
//! Uses thiserror for derive macros. Every variant names the template that
//! failed so callers can tell which prompt a bad rendering context was
//! aimed at.

use thiserror::Error;

/// Error type for template rendering failures.
///
/// `MissingVariable` and `UnknownVariable` are context errors: the caller
/// supplied the wrong set of bindings. `UnmatchedBrace` and
/// `EmptyPlaceholder` are body syntax errors; they cannot occur for the
/// built-in catalog (whose bodies are checked against their declared
/// variables by tests) but are reported rather than panicking when
/// rendering an arbitrary template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A declared required variable has no binding in the context.
    #[error("template '{template}': missing value for required variable '{name}'")]
    MissingVariable {
        /// Name of the template being rendered.
        template: &'static str,
        /// The required variable with no binding.
        name: String,
    },

    /// The context supplies a key the template does not declare.
    #[error("template '{template}': unknown variable '{name}' is not declared by this template")]
    UnknownVariable {
        /// Name of the template being rendered.
        template: &'static str,
        /// The undeclared key found in the context.
        name: String,
    },

    /// A `{` in the body has no matching `}`.
    #[error("template '{template}': unmatched '{{' at byte {position}")]
    UnmatchedBrace {
        /// Name of the template being rendered.
        template: &'static str,
        /// Byte offset of the unmatched `{` in the body.
        position: usize,
    },

    /// An empty placeholder (`{}`) was found in the body.
    #[error("template '{template}': empty placeholder '{{}}' at byte {position}")]
    EmptyPlaceholder {
        /// Name of the template being rendered.
        template: &'static str,
        /// Byte offset of the empty placeholder in the body.
        position: usize,
    },
}

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_display_names_template_and_variable() {
        let err = TemplateError::MissingVariable {
            template: "start_goal",
            name: "goal".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "template 'start_goal': missing value for required variable 'goal'"
        );
    }

    #[test]
    fn unknown_variable_display_names_offending_key() {
        let err = TemplateError::UnknownVariable {
            template: "summarize",
            name: "snipets".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "template 'summarize': unknown variable 'snipets' is not declared by this template"
        );
    }

    #[test]
    fn syntax_error_display_includes_byte_position() {
        let err = TemplateError::UnmatchedBrace {
            template: "custom",
            position: 12,
        };
        assert_eq!(err.to_string(), "template 'custom': unmatched '{' at byte 12");

        let err = TemplateError::EmptyPlaceholder {
            template: "custom",
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "template 'custom': empty placeholder '{}' at byte 3"
        );
    }
}
