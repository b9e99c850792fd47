// Content-to-layout core: the style catalog and the deterministic
// record → element builder. Pure and synchronous; nothing here knows about
// pages, margins, or the PDF backend.

pub mod content;
pub mod style;

// Re-export the public API consumed by other modules (render, handlers).
pub use content::{build_content, DocumentElement};
pub use style::{Role, StyleSet};
