//! Status line renderer (fetch errors and the loading indicator).

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusKind, StatusLine};

/// Renders the one-line status message below the search box.
///
/// Errors use the theme's error color; the loading indicator is dimmed.
pub fn render_status(status: &StatusLine, theme: &Theme) {
    match status.kind {
        StatusKind::Error => {
            println!(
                "{}{}{}",
                Theme::fg(&theme.colors.error_fg),
                status.text,
                Theme::reset()
            );
        }
        StatusKind::Busy => {
            println!(
                "{}{}{}{}",
                Theme::dim(),
                Theme::fg(&theme.colors.text_dim),
                status.text,
                Theme::reset()
            );
        }
    }
}
