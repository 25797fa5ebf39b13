use miette::NamedSource;
use std::sync::Arc;

/// Names the markup text being parsed so diagnostics can point into it.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Create a source context from file content.
    pub fn from_file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Create a source context for text that did not come from a file.
    pub fn anonymous(content: impl Into<String>) -> Self {
        Self::from_file("<logic>", content)
    }

    /// Convert to NamedSource for use with miette error reporting
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}
