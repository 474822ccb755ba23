//! Detail card renderer.
//!
//! Renders the selected Pokémon the way the original screen laid out its
//! card: capitalized name, sprite, a row of type chips, then the base stat
//! table with names left and values right.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailCard;

/// Column width for stat names; values are right-aligned after it.
const STAT_NAME_WIDTH: usize = 20;

/// Renders the detail card of the selected Pokémon.
///
/// # Layout
///
/// ```text
///   Pikachu
///   https://.../25.png
///   Types
///    electric
///   Stats
///    Hp                    35
///    Speed                 90
/// ```
///
/// The sprite is shown as its URL (terminals don't render the image), dimmed
/// like secondary text. Missing sprites print a dimmed placeholder.
pub fn render_card(card: &DetailCard, theme: &Theme, cols: usize) {
    let name_padding = cols.saturating_sub(card.name.chars().count()) / 2;
    println!();
    print!("{}", " ".repeat(name_padding));
    println!(
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.text_normal),
        card.name,
        Theme::reset()
    );

    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    match &card.sprite_url {
        Some(url) => println!("  {url}{}", Theme::reset()),
        None => println!("  (no sprite available){}", Theme::reset()),
    }

    println!(
        "  {}{}Types{}",
        Theme::bold(),
        Theme::fg(&theme.colors.subtitle_fg),
        Theme::reset()
    );
    print!("   ");
    for type_name in &card.types {
        print!(
            "{}{} {type_name} {} ",
            Theme::fg(&theme.colors.type_fg),
            Theme::bg(&theme.colors.type_bg),
            Theme::reset()
        );
    }
    println!();

    println!(
        "  {}{}Stats{}",
        Theme::bold(),
        Theme::fg(&theme.colors.subtitle_fg),
        Theme::reset()
    );
    for stat in &card.stats {
        println!(
            "   {}{:<width$}{:>4}{}",
            Theme::fg(&theme.colors.text_normal),
            stat.name,
            stat.value,
            Theme::reset(),
            width = STAT_NAME_WIDTH
        );
    }
}
