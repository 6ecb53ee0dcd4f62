//! # Pages
//!
//! A [`Page`] points at one page of one uploaded source document. Its
//! identity, source and original page number never change; only the rotation
//! is edited. Reordering happens on the workspace sequence, not on the page.

use crate::{DocumentId, EditorError, PageId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Clockwise rotation relative to the source page's native orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    pub fn degrees(self) -> i64 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// The next quarter turn clockwise (270 wraps to 0)
    pub fn rotated_clockwise(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    pub fn is_zero(self) -> bool {
        self == Rotation::Deg0
    }
}

impl TryFrom<i64> for Rotation {
    type Error = EditorError;

    fn try_from(degrees: i64) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(EditorError::InvalidRotation(other)),
        }
    }
}

impl From<Rotation> for i64 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Opaque preview handle. Display only; shared by reference across snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Thumbnail {
    Rendered(Arc<[u8]>),
    #[default]
    Placeholder,
}

impl Thumbnail {
    pub fn rendered(bytes: impl Into<Arc<[u8]>>) -> Self {
        Thumbnail::Rendered(bytes.into())
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Thumbnail::Placeholder)
    }
}

/// One page of one source document, as placed in the workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,

    /// Document the page content comes from
    pub source_document_id: DocumentId,

    /// 1-based position within the source document
    pub page_number: u32,

    #[serde(default)]
    pub rotation: Rotation,

    #[serde(skip)]
    pub thumbnail: Thumbnail,
}

impl Page {
    pub fn new(id: PageId, source_document_id: DocumentId, page_number: u32) -> Self {
        Self {
            id,
            source_document_id,
            page_number,
            rotation: Rotation::Deg0,
            thumbnail: Thumbnail::Placeholder,
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: Thumbnail) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Zero-based index of the page inside its source, if the page number is valid
    pub fn source_index(&self) -> Option<usize> {
        (self.page_number as usize).checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_accepts_quarter_turns_only() {
        assert_eq!(Rotation::try_from(0), Ok(Rotation::Deg0));
        assert_eq!(Rotation::try_from(270), Ok(Rotation::Deg270));
        assert_eq!(Rotation::try_from(45), Err(EditorError::InvalidRotation(45)));
        assert_eq!(Rotation::try_from(360), Err(EditorError::InvalidRotation(360)));
        assert_eq!(Rotation::try_from(-90), Err(EditorError::InvalidRotation(-90)));
    }

    #[test]
    fn test_rotated_clockwise_wraps() {
        let mut rotation = Rotation::Deg0;
        let mut seen = vec![];
        for _ in 0..4 {
            rotation = rotation.rotated_clockwise();
            seen.push(rotation.degrees());
        }
        assert_eq!(seen, vec![90, 180, 270, 0]);
    }

    #[test]
    fn test_rotation_serde_uses_degrees() {
        assert_eq!(serde_json::to_string(&Rotation::Deg180).unwrap(), "180");
        let parsed: Rotation = serde_json::from_str("90").unwrap();
        assert_eq!(parsed, Rotation::Deg90);
        assert!(serde_json::from_str::<Rotation>("100").is_err());
    }

    #[test]
    fn test_source_index_is_zero_based() {
        let page = Page::new("p".into(), "d".into(), 3);
        assert_eq!(page.source_index(), Some(2));

        let invalid = Page::new("p".into(), "d".into(), 0);
        assert_eq!(invalid.source_index(), None);
    }
}
