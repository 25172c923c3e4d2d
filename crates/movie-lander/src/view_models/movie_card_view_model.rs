//! Movie Card View Model

use crate::domain_models::Movie;
use movie_lander_theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::Style;

const FAVOURITE_MARKER: &str = "★";
const FAVOURITE_LABEL: &str = "[ Favourite ]";
const UNFAVOURITE_LABEL: &str = "[ Unfavourite ]";

/// Presentation data for a single movie card
#[derive(Debug, Clone)]
pub struct MovieCardViewModel {
    pub title: String,
    /// Genre, director and rating on one line
    pub meta: String,
    pub plot: String,
    pub button_label: &'static str,
    pub border_style: Style,
    pub title_style: Style,
    pub meta_style: Style,
    pub plot_style: Style,
    pub button_style: Style,
}

impl MovieCardViewModel {
    pub fn new(movie: &Movie, is_favourite: bool, selected: bool, theme: &Theme) -> Self {
        let title = if is_favourite {
            format!(" {} {} ", FAVOURITE_MARKER, movie.display_title())
        } else {
            format!(" {} ", movie.display_title())
        };

        let mut meta_parts: Vec<String> = [&movie.genre, &movie.director]
            .into_iter()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect();
        if !movie.imdb_rating.is_empty() {
            meta_parts.push(format!("IMDb {}", movie.imdb_rating));
        }

        let title_style = if is_favourite {
            theme.favourite_marker()
        } else {
            theme.card_title()
        };

        Self {
            title,
            meta: meta_parts.join(" · "),
            plot: movie.plot.clone(),
            button_label: if is_favourite {
                UNFAVOURITE_LABEL
            } else {
                FAVOURITE_LABEL
            },
            border_style: theme.card_border(selected),
            title_style,
            meta_style: theme.muted(),
            plot_style: theme.text(),
            button_style: theme.favourite_button(is_favourite),
        }
    }

    /// Where the favourite button lands inside a card drawn at `card_area`
    pub fn button_area(&self, card_area: Rect) -> Rect {
        let inner = inner_area(card_area);
        if inner.height == 0 {
            return Rect::new(inner.x, inner.y, 0, 0);
        }
        let width = (self.button_label.chars().count() as u16).min(inner.width);
        Rect::new(
            inner.x + inner.width - width,
            inner.y + inner.height - 1,
            width,
            1,
        )
    }
}

/// Card content area inside its one-cell border
pub fn inner_area(card_area: Rect) -> Rect {
    Rect::new(
        card_area.x.saturating_add(1),
        card_area.y.saturating_add(1),
        card_area.width.saturating_sub(2),
        card_area.height.saturating_sub(2),
    )
}
