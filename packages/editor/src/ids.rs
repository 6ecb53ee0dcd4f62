use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a page. Assigned once, never reused by the generator
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

/// Identity of an uploaded source document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(PageId);
string_id!(DocumentId);

/// Sequential ID generator for documents and their pages within a session
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    count: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_prefix("doc")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            count: 0,
        }
    }

    /// Generate next sequential document ID
    pub fn next_document_id(&mut self) -> DocumentId {
        self.count += 1;
        DocumentId(format!("{}-{}", self.prefix, self.count))
    }

    /// Page ID for the page at `index` (zero-based) of `document`
    pub fn page_id(document: &DocumentId, index: usize) -> PageId {
        PageId(format!("{}-page-{}", document, index))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
