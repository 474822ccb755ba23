//! Header component renderer.
//!
//! Renders the title bar with centered text, theme-aware colors, and an
//! optional background band.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar.
///
/// Displays the title centered horizontally with bold styling and theme
/// colors, padded to fill `cols` so the background band spans the line.
pub fn render_header(header: &HeaderInfo, theme: &Theme, cols: usize) {
    let title_len = header.title.chars().count();
    let padding = cols.saturating_sub(title_len) / 2;

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    println!("{}", Theme::reset());
}
