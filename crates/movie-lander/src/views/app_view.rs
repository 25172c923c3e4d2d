//! App view
//!
//! Root view of the application: navbar, tab line, movie cards and status
//! bar. Renders from `AppProps` only and talks back through a `Dispatcher`.
//! Local state is limited to UI concerns (mount flag, cursor, scroll offset,
//! the areas drawn last frame for mouse hit-testing).

use crate::actions::{Action, MoviesAction, SearchAction};
use crate::connect::AppProps;
use crate::dispatcher::Dispatcher;
use crate::domain_models::Movie;
use crate::view_models::{
    EmptyStateViewModel, MovieListViewModel, StatusBarViewModel, Tab, TabsViewModel,
};
use crate::views::movie_card_view::{MovieCard, CARD_HEIGHT};
use crate::views::navbar_view::NavbarView;
use crate::views::status_bar::StatusBarWidget;
use crate::views::tabs_view::TabsWidget;
use crate::views::EventOutcome;
use movie_lander_theme::Theme;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::Style,
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

/// Screen areas from the last render
#[derive(Debug, Default)]
struct HitAreas {
    navbar: Rect,
    tabs: Vec<(Tab, Rect)>,
    cards: Vec<CardHitArea>,
}

#[derive(Debug)]
struct CardHitArea {
    key: String,
    index: usize,
    area: Rect,
    button: Rect,
}

#[derive(Debug, Default)]
pub struct AppView {
    mounted: bool,
    selected: usize,
    scroll_offset: usize,
    navbar: NavbarView,
    hit_areas: HitAreas,
}

impl AppView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with the static dataset.
    ///
    /// Dispatches `AddMovies` the first time it is called on this view and
    /// does nothing afterwards. Returns whether it dispatched.
    pub fn mount(&mut self, dataset: &[Movie], dispatcher: &Dispatcher) -> bool {
        if self.mounted {
            log::warn!("AppView is already mounted, not seeding movies again");
            return false;
        }
        self.mounted = true;
        dispatcher.dispatch(Action::Movies(MoviesAction::AddMovies(dataset.to_vec())));
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Index of the highlighted card in the displayed movies
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_movie_in_favourites(props: &AppProps, movie: &Movie) -> bool {
        props.movies.is_movie_in_favourites(movie)
    }

    /// Activate the "Movies" (false) or "Favourites" (true) tab
    pub fn change_tab(&mut self, show_favourites: bool, dispatcher: &Dispatcher) {
        self.selected = 0;
        self.scroll_offset = 0;
        dispatcher.dispatch(Action::Movies(MoviesAction::SetShowFavourites(
            show_favourites,
        )));
    }

    pub fn handle_key(
        &mut self,
        key: &KeyEvent,
        props: &AppProps,
        dispatcher: &Dispatcher,
    ) -> EventOutcome {
        // Ctrl combinations belong to the global keymap
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return EventOutcome::Ignored;
        }

        if self.navbar.is_focused() {
            return self.navbar.handle_key(key, dispatcher);
        }

        if props.search.show_search_results {
            match (key.code, &props.search.result) {
                (KeyCode::Char('a'), Some(movie)) => {
                    dispatcher.dispatch(Action::Movies(MoviesAction::AddMovieToList(
                        movie.clone(),
                    )));
                    return EventOutcome::Handled;
                }
                (KeyCode::Esc, _) => {
                    dispatcher.dispatch(Action::Search(SearchAction::Dismiss));
                    return EventOutcome::Handled;
                }
                _ => {}
            }
        }

        let len = props.movies.display_movies().len();
        match key.code {
            KeyCode::Char('/') => {
                self.navbar.focus();
                EventOutcome::NeedsRedraw
            }
            KeyCode::Char('1') => {
                self.change_tab(false, dispatcher);
                EventOutcome::NeedsRedraw
            }
            KeyCode::Char('2') => {
                self.change_tab(true, dispatcher);
                EventOutcome::NeedsRedraw
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.change_tab(!props.movies.show_favourites, dispatcher);
                EventOutcome::NeedsRedraw
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1, len),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1, len),
            _ => match self.selected_card(props) {
                Some(card) => card.handle_key(key, dispatcher),
                None => EventOutcome::Ignored,
            },
        }
    }

    pub fn handle_mouse(
        &mut self,
        mouse: &MouseEvent,
        props: &AppProps,
        dispatcher: &Dispatcher,
    ) -> EventOutcome {
        let len = props.movies.display_movies().len();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {}
            MouseEventKind::ScrollDown => return self.move_selection(1, len),
            MouseEventKind::ScrollUp => return self.move_selection(-1, len),
            _ => return EventOutcome::Ignored,
        }

        let position = Position::new(mouse.column, mouse.row);

        if self.hit_areas.navbar.contains(position) {
            self.navbar.focus();
            return EventOutcome::NeedsRedraw;
        }

        let clicked_tab = self
            .hit_areas
            .tabs
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(tab, _)| *tab);
        if let Some(tab) = clicked_tab {
            self.change_tab(tab.show_favourites(), dispatcher);
            return EventOutcome::NeedsRedraw;
        }

        let clicked_card = self
            .hit_areas
            .cards
            .iter()
            .find(|card| card.area.contains(position))
            .map(|card| (card.index, card.key.clone(), card.button.contains(position)));
        if let Some((index, key, on_button)) = clicked_card {
            // The list may have changed since the last frame
            let Some(card) = card_at(props, index).filter(|card| card.key() == key) else {
                return EventOutcome::Ignored;
            };
            self.selected = index;
            if on_button {
                card.toggle_favourite(dispatcher);
            }
            return EventOutcome::NeedsRedraw;
        }

        EventOutcome::Ignored
    }

    /// Render the whole application
    pub fn render(&mut self, f: &mut Frame, area: Rect, props: &AppProps, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Navbar
                Constraint::Length(1), // Tab line
                Constraint::Min(0),    // Movie cards
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        self.hit_areas = HitAreas {
            navbar: chunks[0],
            ..HitAreas::default()
        };

        self.navbar.render(&props.search, theme, chunks[0], f);

        let tabs_vm = TabsViewModel::from_movies(&props.movies, theme);
        self.hit_areas.tabs = tabs_vm.tab_areas(chunks[1]);
        f.render_widget(TabsWidget(&tabs_vm), chunks[1]);

        let list_vm = MovieListViewModel::from_movies(&props.movies, theme);
        match &list_vm.empty {
            Some(empty_vm) => render_empty_state(empty_vm, chunks[2], f),
            None => self.render_cards(&list_vm, props, theme, chunks[2], f),
        }

        let status_vm = StatusBarViewModel::new(&props.movies, self.navbar.is_focused(), theme);
        f.render_widget(StatusBarWidget(&status_vm), chunks[3]);

        // Popup goes last so it draws over the cards
        self.navbar.render_results(&props.search, theme, chunks[2], f);
    }

    /// Render the visible window of cards, keeping the selection in view
    fn render_cards(
        &mut self,
        vm: &MovieListViewModel,
        props: &AppProps,
        theme: &Theme,
        area: Rect,
        f: &mut Frame,
    ) {
        let len = vm.items.len();
        if len == 0 {
            return;
        }
        self.selected = self.selected.min(len - 1);

        let visible = ((area.height / CARD_HEIGHT) as usize).max(1);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible {
            self.scroll_offset = self.selected + 1 - visible;
        }
        self.scroll_offset = self.scroll_offset.min(len.saturating_sub(visible));

        let display_movies = props.movies.display_movies();
        let buf = f.buffer_mut();
        for (row, item) in vm
            .items
            .iter()
            .skip(self.scroll_offset)
            .take(visible)
            .enumerate()
        {
            let Some(movie) = display_movies.get(item.index) else {
                continue;
            };
            let card_area = Rect::new(
                area.x,
                area.y + row as u16 * CARD_HEIGHT,
                area.width,
                CARD_HEIGHT,
            )
            .intersection(area);
            if card_area.is_empty() {
                break;
            }

            let card = MovieCard::new(movie, item.is_favourite);
            let button = card.render(item.index == self.selected, theme, card_area, buf);
            self.hit_areas.cards.push(CardHitArea {
                key: item.key.clone(),
                index: item.index,
                area: card_area,
                button,
            });
        }
    }

    fn selected_card<'a>(&self, props: &'a AppProps) -> Option<MovieCard<'a>> {
        let len = props.movies.display_movies().len();
        if len == 0 {
            return None;
        }
        card_at(props, self.selected.min(len - 1))
    }

    fn move_selection(&mut self, delta: isize, len: usize) -> EventOutcome {
        if len == 0 {
            return EventOutcome::Handled;
        }
        let current = self.selected.min(len - 1);
        let next = current.saturating_add_signed(delta).min(len - 1);
        self.selected = next;
        if next == current {
            EventOutcome::Handled
        } else {
            EventOutcome::NeedsRedraw
        }
    }
}

/// Card for the displayed movie at `index`
fn card_at(props: &AppProps, index: usize) -> Option<MovieCard<'_>> {
    let movie = props.movies.display_movies().get(index)?;
    Some(MovieCard::new(
        movie,
        AppView::is_movie_in_favourites(props, movie),
    ))
}

fn render_empty_state(vm: &EmptyStateViewModel, area: Rect, f: &mut Frame) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(vm.border_color));

    let paragraph = Paragraph::new(vm.message.as_str())
        .block(block)
        .style(vm.text_style)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MoviesState, SearchState};
    use crate::view_models::movie_list_view_model::NO_MOVIES_MESSAGE;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::mpsc::{self, Receiver};

    fn dispatcher() -> (Dispatcher, Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (Dispatcher::new(tx), rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn matrix() -> Movie {
        Movie::new("tt0133093", "The Matrix").with_year("1999")
    }

    fn alien() -> Movie {
        Movie::new("tt0078748", "Alien").with_year("1979")
    }

    fn props(show_favourites: bool) -> AppProps {
        AppProps {
            movies: MoviesState {
                list: vec![matrix(), alien()],
                favourites: vec![matrix()],
                show_favourites,
            },
            search: SearchState::default(),
        }
    }

    fn render(view: &mut AppView, props: &AppProps) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                view.render(f, area, props, &Theme::default());
            })
            .unwrap();
        terminal
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_mount_dispatches_add_movies_once() {
        let (dispatcher, rx) = dispatcher();
        let dataset = vec![matrix(), alien()];
        let mut view = AppView::new();

        assert!(view.mount(&dataset, &dispatcher));
        assert!(!view.mount(&dataset, &dispatcher));

        let actions: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            actions,
            vec![Action::Movies(MoviesAction::AddMovies(dataset))]
        );
        assert!(view.is_mounted());
    }

    #[test]
    fn test_tab_keys_dispatch_show_favourites() {
        let (dispatcher, rx) = dispatcher();
        let mut view = AppView::new();

        view.handle_key(&key(KeyCode::Char('2')), &props(false), &dispatcher);
        view.handle_key(&key(KeyCode::Char('1')), &props(true), &dispatcher);

        let actions: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            actions,
            vec![
                Action::Movies(MoviesAction::SetShowFavourites(true)),
                Action::Movies(MoviesAction::SetShowFavourites(false)),
            ]
        );
    }

    #[test]
    fn test_tab_key_toggles() {
        let (dispatcher, rx) = dispatcher();
        let mut view = AppView::new();

        view.handle_key(&key(KeyCode::Tab), &props(true), &dispatcher);

        assert_eq!(
            rx.try_recv(),
            Ok(Action::Movies(MoviesAction::SetShowFavourites(false)))
        );
    }

    #[test]
    fn test_clicking_tabs() {
        let (dispatcher, rx) = dispatcher();
        let mut view = AppView::new();
        let props = props(false);
        render(&mut view, &props);

        let (_, favourites_area) = view.hit_areas.tabs[1];
        view.handle_mouse(
            &click(favourites_area.x + 1, favourites_area.y),
            &props,
            &dispatcher,
        );
        let (_, movies_area) = view.hit_areas.tabs[0];
        view.handle_mouse(&click(movies_area.x, movies_area.y), &props, &dispatcher);

        let actions: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            actions,
            vec![
                Action::Movies(MoviesAction::SetShowFavourites(true)),
                Action::Movies(MoviesAction::SetShowFavourites(false)),
            ]
        );
    }

    #[test]
    fn test_empty_list_renders_placeholder_and_no_cards() {
        let mut view = AppView::new();
        let terminal = render(&mut view, &AppProps::default());

        let screen = screen(&terminal);
        assert!(screen.contains(NO_MOVIES_MESSAGE));
        assert!(!screen.contains("[ Favourite ]"));
        assert!(view.hit_areas.cards.is_empty());
    }

    #[test]
    fn test_movies_tab_renders_every_movie() {
        let mut view = AppView::new();
        let terminal = render(&mut view, &props(false));

        let screen = screen(&terminal);
        assert!(screen.contains("★ The Matrix (1999)"));
        assert!(screen.contains("Alien (1979)"));
        assert!(screen.contains("[ Unfavourite ]"));
        assert!(screen.contains("[ Favourite ]"));
        assert!(!screen.contains(NO_MOVIES_MESSAGE));

        let keys: Vec<_> = view.hit_areas.cards.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["tt0133093", "tt0078748"]);
    }

    #[test]
    fn test_favourites_tab_renders_only_favourites() {
        let mut view = AppView::new();
        let terminal = render(&mut view, &props(true));

        let screen = screen(&terminal);
        assert!(screen.contains("The Matrix (1999)"));
        assert!(!screen.contains("Alien (1979)"));
        assert_eq!(view.hit_areas.cards.len(), 1);
    }

    #[test]
    fn test_selected_card_handles_favourite_key() {
        let (dispatcher, rx) = dispatcher();
        let mut view = AppView::new();
        let props = props(false);

        assert_eq!(
            view.handle_key(&key(KeyCode::Down), &props, &dispatcher),
            EventOutcome::NeedsRedraw
        );
        assert_eq!(view.selected(), 1);
        // Already at the end
        assert_eq!(
            view.handle_key(&key(KeyCode::Char('j')), &props, &dispatcher),
            EventOutcome::Handled
        );

        view.handle_key(&key(KeyCode::Char('f')), &props, &dispatcher);
        assert_eq!(
            rx.try_recv(),
            Ok(Action::Movies(MoviesAction::AddToFavourites(alien())))
        );

        view.handle_key(&key(KeyCode::Up), &props, &dispatcher);
        view.handle_key(&key(KeyCode::Enter), &props, &dispatcher);
        assert_eq!(
            rx.try_recv(),
            Ok(Action::Movies(MoviesAction::RemoveFromFavourites(matrix())))
        );
    }

    #[test]
    fn test_clicking_card_button_toggles_favourite() {
        let (dispatcher, rx) = dispatcher();
        let mut view = AppView::new();
        let props = props(false);
        render(&mut view, &props);

        let button = view.hit_areas.cards[1].button;
        let outcome = view.handle_mouse(&click(button.x, button.y), &props, &dispatcher);

        assert_eq!(outcome, EventOutcome::NeedsRedraw);
        assert_eq!(view.selected(), 1);
        assert_eq!(
            rx.try_recv(),
            Ok(Action::Movies(MoviesAction::AddToFavourites(alien())))
        );
    }

    #[test]
    fn test_clicking_stale_card_is_ignored() {
        let (dispatcher, rx) = dispatcher();
        let mut view = AppView::new();
        render(&mut view, &props(false));

        // Favourites tab now shows a single movie; the second card is gone
        let button = view.hit_areas.cards[1].button;
        let outcome = view.handle_mouse(&click(button.x, button.y), &props(true), &dispatcher);

        assert_eq!(outcome, EventOutcome::Ignored);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_search_result_keys() {
        let (dispatcher, rx) = dispatcher();
        let mut view = AppView::new();
        let arrival = Movie::new("tt2543164", "Arrival");
        let props = AppProps {
            search: SearchState {
                result: Some(arrival.clone()),
                show_search_results: true,
            },
            ..props(false)
        };

        view.handle_key(&key(KeyCode::Char('a')), &props, &dispatcher);
        view.handle_key(&key(KeyCode::Esc), &props, &dispatcher);

        let actions: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            actions,
            vec![
                Action::Movies(MoviesAction::AddMovieToList(arrival)),
                Action::Search(SearchAction::Dismiss),
            ]
        );
    }

    #[test]
    fn test_search_popup_renders_over_cards() {
        let mut view = AppView::new();
        let props = AppProps {
            search: SearchState {
                result: Some(Movie::new("tt2543164", "Arrival").with_year("2016")),
                show_search_results: true,
            },
            ..props(false)
        };
        let screen = screen(&render(&mut view, &props));
        assert!(screen.contains("Search result"));
        assert!(screen.contains("Arrival (2016)"));
    }

    #[test]
    fn test_slash_focuses_search_and_submits() {
        let (dispatcher, rx) = dispatcher();
        let mut view = AppView::new();
        let props = props(false);

        view.handle_key(&key(KeyCode::Char('/')), &props, &dispatcher);
        // '1' is typed into the search box, not a tab switch
        for c in "1q".chars() {
            view.handle_key(&key(KeyCode::Char(c)), &props, &dispatcher);
        }
        view.handle_key(&key(KeyCode::Enter), &props, &dispatcher);

        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![Action::Search(SearchAction::Submit("1q".to_string()))]
        );
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let (dispatcher, rx) = dispatcher();
        let mut view = AppView::new();
        let props = props(false);

        assert_eq!(
            view.handle_key(&key(KeyCode::Char('q')), &props, &dispatcher),
            EventOutcome::Ignored
        );
        assert_eq!(
            view.handle_key(
                &KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &props,
                &dispatcher
            ),
            EventOutcome::Ignored
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_is_movie_in_favourites() {
        let props = props(false);
        assert!(AppView::is_movie_in_favourites(&props, &matrix()));
        assert!(!AppView::is_movie_in_favourites(&props, &alien()));
    }
}
