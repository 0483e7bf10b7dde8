//! Template engine implementation

mod tokenize;

use crate::template::error::TemplateError;
use std::collections::BTreeMap;

use tokenize::TokenStream;

/// A `{{ key }}` token found in rendered or raw text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Trimmed key between the braces
    pub key: String,
    /// 1-based line of the token
    pub line: usize,
}

/// Template context holding the substitution values for rendering
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    values: BTreeMap<String, String>,
}

impl TemplateContext {
    /// Create an empty template context
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `value`, replacing any earlier binding
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Value bound to `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TemplateContext
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Self::new();
        for (key, value) in iter {
            context.insert(key, value);
        }
        context
    }
}

/// Template engine for flat key substitution
pub struct TemplateEngine;

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self
    }

    /// Render a template with the given context
    ///
    /// Every token whose key is bound in `context` is replaced by its value in a
    /// single forward pass; substituted values are never rescanned. Tokens with
    /// unbound keys are copied through unchanged.
    pub fn render(&self, template: &str, context: &TemplateContext) -> String {
        let mut output = String::with_capacity(template.len());
        let mut pos = 0;

        for token in TokenStream::new(template) {
            if let Some(value) = context.get(&token.key) {
                output.push_str(&template[pos..token.start]);
                output.push_str(value);
                pos = token.end();
            }
        }

        output.push_str(&template[pos..]);
        output
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to render a template
pub fn render(template: &str, context: &TemplateContext) -> String {
    TemplateEngine::new().render(template, context)
}

/// List every `{{ key }}` token in `text`, in order of appearance
pub fn scan_placeholders(text: &str) -> Vec<Placeholder> {
    TokenStream::new(text)
        .map(|token| Placeholder {
            key: token.key,
            line: token.line,
        })
        .collect()
}

/// Fail on the first placeholder left in rendered output
pub fn ensure_resolved(text: &str) -> Result<(), TemplateError> {
    match TokenStream::new(text).next() {
        Some(token) => Err(TemplateError::UnresolvedPlaceholder {
            key: token.key,
            line: token.line,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests;
