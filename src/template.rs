//! Prompt templates and the `{variable}` substitution engine.
//!
//! A [`Template`] pairs a body string containing `{name}` placeholders with
//! the declared list of variables the body requires. Rendering substitutes
//! a caller-supplied context into the body in a single pass.
//!
//! # Syntax
//!
//! - `{name}` - substitutes the value bound to `name`
//! - `{{` - renders as literal `{`
//! - `}}` - renders as literal `}`
//!
//! A `}` on its own is an ordinary character.
//!
//! # Error handling
//!
//! Rendering is fail-safe and atomic. The context is validated against the
//! declared variable list before any substitution happens: a missing binding
//! or an undeclared extra key fails the whole call, so a partially
//! substituted prompt can never reach a language model. Substituted values
//! are opaque strings; braces inside them are never re-interpreted.

use std::collections::{BTreeSet, HashMap};

use crate::error::{Result, TemplateError};

/// An immutable prompt template.
///
/// Constructed as `static` items (see [`crate::catalog`]) and shared
/// read-only by all callers; rendering never mutates the template.
#[derive(Debug)]
pub struct Template {
    name: &'static str,
    body: &'static str,
    required_variables: &'static [&'static str],
}

impl Template {
    /// Create a template from a body and its declared variable list.
    pub const fn new(
        name: &'static str,
        body: &'static str,
        required_variables: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            body,
            required_variables,
        }
    }

    /// The template's name, used in error messages and catalog lookup.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The raw body, with placeholders and `{{`/`}}` escapes intact.
    pub fn body(&self) -> &'static str {
        self.body
    }

    /// The variables the body requires, in declaration order.
    pub fn required_variables(&self) -> &'static [&'static str] {
        self.required_variables
    }

    /// Render the template by substituting `context` into the body.
    ///
    /// Fails with [`TemplateError::MissingVariable`] if any declared
    /// variable has no binding, or [`TemplateError::UnknownVariable`] if
    /// the context carries a key the template does not declare. Both checks
    /// run before substitution, so no output is produced on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use promptdeck::template::{Template, vars};
    ///
    /// static GREETING: Template =
    ///     Template::new("greeting", "Hello {name}, your task is {task}.", &["name", "task"]);
    ///
    /// let out = GREETING.render(&vars([("name", "Alice"), ("task", "coding")]))?;
    /// assert_eq!(out, "Hello Alice, your task is coding.");
    /// # Ok::<(), promptdeck::TemplateError>(())
    /// ```
    pub fn render(&self, context: &HashMap<String, String>) -> Result<String> {
        for &required in self.required_variables {
            if !context.contains_key(required) {
                return Err(TemplateError::MissingVariable {
                    template: self.name,
                    name: required.to_string(),
                });
            }
        }

        // Reject undeclared keys to surface caller bugs early. Sorted so the
        // reported key is deterministic regardless of map order.
        let mut extras: Vec<&str> = context
            .keys()
            .map(String::as_str)
            .filter(|key| !self.required_variables.iter().any(|declared| declared == key))
            .collect();
        if !extras.is_empty() {
            extras.sort_unstable();
            return Err(TemplateError::UnknownVariable {
                template: self.name,
                name: extras[0].to_string(),
            });
        }

        self.substitute(context)
    }

    /// The set of variable names the body textually references.
    ///
    /// Escaped braces are skipped. Used to check the invariant that the
    /// referenced set equals [`Self::required_variables`] exactly.
    pub fn placeholders(&self) -> Result<BTreeSet<&'static str>> {
        let mut names = BTreeSet::new();
        self.scan(|piece| {
            if let Piece::Placeholder(name) = piece {
                names.insert(name);
            }
        })?;
        Ok(names)
    }

    fn substitute(&self, context: &HashMap<String, String>) -> Result<String> {
        let mut out = String::with_capacity(self.body.len());
        self.scan(|piece| match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Brace(ch) => out.push(ch),
            Piece::Placeholder(name) => {
                // Context keys were validated above; a miss here means the
                // body references a variable the template never declared.
                if let Some(value) = context.get(name) {
                    out.push_str(value);
                }
            }
        })?;

        // Report the undeclared reference (if any) by rescanning; cheaper
        // than threading a Result through the closure.
        if let Some(undeclared) = self
            .placeholders()?
            .into_iter()
            .find(|name| !context.contains_key(*name))
        {
            return Err(TemplateError::MissingVariable {
                template: self.name,
                name: undeclared.to_string(),
            });
        }

        Ok(out)
    }

    /// Walk the body once, handing each piece to `emit`. Pieces borrow the
    /// `'static` body, so they outlive the call.
    fn scan(&self, mut emit: impl FnMut(Piece<'static>)) -> Result<()> {
        let body = self.body;
        let mut rest = body;

        loop {
            let Some(brace) = rest.find(['{', '}']) else {
                emit(Piece::Literal(rest));
                return Ok(());
            };

            emit(Piece::Literal(&rest[..brace]));
            let position = body.len() - rest.len() + brace;
            let tail = &rest[brace..];

            if let Some(after) = tail.strip_prefix("{{") {
                emit(Piece::Brace('{'));
                rest = after;
            } else if let Some(after) = tail.strip_prefix("}}") {
                emit(Piece::Brace('}'));
                rest = after;
            } else if let Some(after) = tail.strip_prefix('}') {
                // Lone closing brace is ordinary text.
                emit(Piece::Brace('}'));
                rest = after;
            } else {
                let Some(close) = tail.find('}') else {
                    return Err(TemplateError::UnmatchedBrace {
                        template: self.name,
                        position,
                    });
                };
                // Whitespace inside the braces is tolerated: `{ name }`.
                let name = tail[1..close].trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyPlaceholder {
                        template: self.name,
                        position,
                    });
                }
                emit(Piece::Placeholder(name));
                rest = &tail[close + 1..];
            }
        }
    }
}

/// One scanned fragment of a template body.
enum Piece<'a> {
    /// Verbatim text between braces.
    Literal(&'a str),
    /// A literal brace produced by an escape (or a lone `}`).
    Brace(char),
    /// A `{name}` placeholder, with surrounding whitespace trimmed.
    Placeholder(&'a str),
}

/// Build a rendering context from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
