//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! Output is append-only: each render prints a fresh screen block to stdout
//! and the terminal scrolls, so no screen clearing or cursor management is
//! needed.

use crate::app::AppState;
use crate::ui::components;

/// Renders the search screen to stdout.
///
/// Computes the view model from application state and prints one screen
/// block (header, search box, suggestions, status, detail card) at the
/// given width.
pub fn render(state: &AppState, cols: usize) {
    let viewmodel = state.compute_viewmodel();
    components::render_screen(&viewmodel, &state.theme, cols);
}
