use std::sync::Arc;

use genpdf::fonts::{FontData, FontFamily};

use crate::config::Config;
use crate::layout::StyleSet;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// `style` and `fonts` are resolved once in `main` and never mutated, so
/// concurrent renders share them without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The resolved style catalog for every render.
    pub style: Arc<StyleSet>,
    /// The font family embedded into each generated document.
    pub fonts: FontFamily<FontData>,
}
