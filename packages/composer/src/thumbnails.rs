//! Thumbnail rendering contract
//!
//! Rasterization itself lives outside this crate. Whatever renders previews
//! must never make loading fail: a failed render becomes a placeholder.

use crate::RenderError;
use paperflow_editor::Thumbnail;

pub trait ThumbnailRenderer<S>: Send + Sync {
    fn render(&self, source: &S, index: usize) -> Result<Thumbnail, RenderError>;
}

/// Renderer that never rasterizes anything
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer;

impl<S> ThumbnailRenderer<S> for PlaceholderRenderer {
    fn render(&self, _source: &S, _index: usize) -> Result<Thumbnail, RenderError> {
        Ok(Thumbnail::Placeholder)
    }
}

/// Render a preview, substituting the placeholder on failure
pub fn thumbnail_or_placeholder<S, R>(renderer: &R, source: &S, index: usize) -> Thumbnail
where
    R: ThumbnailRenderer<S> + ?Sized,
{
    match renderer.render(source, index) {
        Ok(thumbnail) => thumbnail,
        Err(e) => {
            tracing::warn!(index, error = %e, "thumbnail render failed, using placeholder");
            Thumbnail::Placeholder
        }
    }
}
