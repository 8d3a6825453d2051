use rowan::TextRange;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Hidden,
    Info,
    Warning,
    Error,
}

/// Host-supplied diagnostic instance the engine builds suppressions for.
/// The span is in byte offsets of the source the tree was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub id: String,
    pub category: String,
    pub title: String,
    pub severity: Severity,
    #[serde(with = "span_serde")]
    pub span: TextRange,
}

impl Diagnostic {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
        severity: Severity,
        span: TextRange,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            title: title.into(),
            severity,
            span,
        }
    }

    /// Whether the title is worth echoing into a trailing comment.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// `TextRange` serialized as a `(start, end)` byte-offset pair.
mod span_serde {
    use rowan::{TextRange, TextSize};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(span: &TextRange, serializer: S) -> Result<S::Ok, S::Error> {
        (u32::from(span.start()), u32::from(span.end())).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TextRange, D::Error> {
        let (start, end) = <(u32, u32)>::deserialize(deserializer)?;
        Ok(TextRange::new(TextSize::from(start), TextSize::from(end)))
    }
}
