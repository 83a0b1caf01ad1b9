//! Block renderer port
//!
//! Turns a built view into markup. Rendering is deterministic: the same view
//! always produces the same output, so the interactive preview and the
//! static page output cannot drift apart.

use crate::error::ApplicationError;
use crate::view::BlockView;

/// Port for rendering a block view to markup
pub trait BlockRendererPort: Send + Sync {
    /// Render the view to an HTML fragment
    fn render_block(&self, view: &BlockView) -> Result<String, ApplicationError>;
}
