//! Composable UI component renderers.
//!
//! Each component renders one part of the search screen. Output is plain
//! sequential printing: the screen scrolls like a log rather than repainting
//! a fixed pane, so components print whole lines with `println!` instead of
//! positioning a cursor.
//!
//! # Components
//!
//! - [`header`]: Title bar with the index size
//! - [`search`]: Search box and the numbered suggestion rows
//! - [`status`]: Error / loading line
//! - [`card`]: Detail card (name, sprite URL, type chips, stat rows)
//!
//! # Layout
//!
//! ```text
//! [Header band]
//! [Search box - 3 lines]
//! [Suggestion rows, up to the configured limit]
//! [Status line, if any]
//! [Detail card, if a Pokémon is selected]
//! ```

mod card;
mod header;
mod search;
mod status;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use card::render_card;
use header::render_header;
use search::{render_search_bar, render_suggestions};
use status::render_status;

/// Renders one full screen block from a view model.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, cols: usize) {
    println!();
    render_header(&vm.header, theme, cols);
    render_search_bar(&vm.search_bar, theme, cols);
    render_suggestions(&vm.suggestions, theme, cols);

    if let Some(status) = &vm.status {
        render_status(status, theme);
    }

    if let Some(card) = &vm.card {
        render_card(card, theme, cols);
    }
}
