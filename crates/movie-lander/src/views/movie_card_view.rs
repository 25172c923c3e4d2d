//! Movie card
//!
//! Renders one movie and toggles its favourite status. The card dispatches
//! its own actions; the app view only decides which card gets the event.

use crate::actions::{Action, MoviesAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::Movie;
use crate::view_models::{movie_card_view_model::inner_area, MovieCardViewModel};
use crate::views::EventOutcome;
use movie_lander_theme::Theme;
use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    text::Line,
    widgets::{Block, BorderType, Widget},
};

/// Rows a card occupies, borders included
pub const CARD_HEIGHT: u16 = 5;

/// A movie card, keyed by the movie's imdbID
#[derive(Debug, Clone, Copy)]
pub struct MovieCard<'a> {
    pub movie: &'a Movie,
    pub is_favourite: bool,
}

impl<'a> MovieCard<'a> {
    pub fn new(movie: &'a Movie, is_favourite: bool) -> Self {
        Self {
            movie,
            is_favourite,
        }
    }

    pub fn key(&self) -> &str {
        self.movie.key()
    }

    /// Add to or remove from favourites, depending on current status
    pub fn toggle_favourite(&self, dispatcher: &Dispatcher) {
        let action = if self.is_favourite {
            MoviesAction::RemoveFromFavourites(self.movie.clone())
        } else {
            MoviesAction::AddToFavourites(self.movie.clone())
        };
        dispatcher.dispatch(Action::Movies(action));
    }

    pub fn handle_key(&self, key: &KeyEvent, dispatcher: &Dispatcher) -> EventOutcome {
        match key.code {
            KeyCode::Char('f') | KeyCode::Char(' ') | KeyCode::Enter => {
                self.toggle_favourite(dispatcher);
                EventOutcome::Handled
            }
            _ => EventOutcome::Ignored,
        }
    }

    /// Draw the card and return the screen area of its favourite button
    pub fn render(&self, selected: bool, theme: &Theme, area: Rect, buf: &mut Buffer) -> Rect {
        let vm = MovieCardViewModel::new(self.movie, self.is_favourite, selected, theme);
        let button = vm.button_area(area);
        MovieCardWidget(&vm).render(area, buf);
        button
    }
}

/// Widget wrapper for rendering a card from its view model
pub struct MovieCardWidget<'a>(pub &'a MovieCardViewModel);

impl Widget for MovieCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(vm.border_style)
            .title(Line::styled(vm.title.as_str(), vm.title_style))
            .render(area, buf);

        let inner = inner_area(area);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = inner.width as usize;
        buf.set_stringn(inner.x, inner.y, &vm.meta, width, vm.meta_style);

        if inner.height > 2 {
            buf.set_stringn(inner.x, inner.y + 1, &vm.plot, width, vm.plot_style);
        }

        let button = vm.button_area(area);
        buf.set_stringn(
            button.x,
            button.y,
            vm.button_label,
            button.width as usize,
            vm.button_style,
        );
    }
}
