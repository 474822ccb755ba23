//! Search box and suggestion list renderers.
//!
//! The search box is a three-line bordered frame showing the live query;
//! suggestion rows appear directly beneath it, numbered so the user can tap
//! one with `:1`/`:2`/`:3`.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, SuggestionItem};

/// Renders the search input box.
///
/// # Layout
///
/// ```text
/// ┌──────────────────────┐
/// │ Search: char         │
/// └──────────────────────┘
/// ```
///
/// The inner width is `cols - 2` (accounting for the side borders). Borders
/// use the theme's `search_bar_border` color, the query the normal text
/// color.
pub fn render_search_bar(search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let inner_width = cols.saturating_sub(2);

    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    println!("┌{}┐", "─".repeat(inner_width));

    let search_text = format!(" Search: {}", search.query);
    let padding = inner_width.saturating_sub(search_text.chars().count());

    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    println!("│{}", Theme::reset());

    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    println!("└{}┘{}", "─".repeat(inner_width), Theme::reset());
}

/// Renders the suggestion rows beneath the search box.
///
/// Each row shows its tap ordinal and the suggested name on the theme's
/// suggestion band, padded to `cols`.
pub fn render_suggestions(items: &[SuggestionItem], theme: &Theme, cols: usize) {
    for item in items {
        let text = format!("  {}. {}", item.ordinal, item.name);
        let padding = cols.saturating_sub(text.chars().count());

        print!("{}", Theme::fg(&theme.colors.suggestion_fg));
        print!("{}", Theme::bg(&theme.colors.suggestion_bg));
        print!("{text}");
        print!("{}", " ".repeat(padding));
        println!("{}", Theme::reset());
    }
}
