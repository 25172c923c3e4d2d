//! Tabs View Model
//!
//! Pre-computes the "Movies" / "Favourites" tab line.

use crate::state::MoviesState;
use movie_lander_theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use strum::{Display, EnumIter, IntoEnumIterator};

/// The two mutually exclusive tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Tab {
    Movies,
    Favourites,
}

impl Tab {
    /// Tab matching the `show_favourites` flag
    pub fn from_show_favourites(show_favourites: bool) -> Self {
        if show_favourites {
            Tab::Favourites
        } else {
            Tab::Movies
        }
    }

    /// Flag value that activates this tab
    pub fn show_favourites(self) -> bool {
        self == Tab::Favourites
    }

    /// Key that activates this tab
    pub fn shortcut(self) -> char {
        match self {
            Tab::Movies => '1',
            Tab::Favourites => '2',
        }
    }
}

/// View model for the tab line
#[derive(Debug, Clone)]
pub struct TabsViewModel {
    pub tabs: Vec<TabViewModel>,
    /// Background color for the entire tab line
    pub line_bg: Color,
}

/// View model for a single tab
#[derive(Debug, Clone)]
pub struct TabViewModel {
    pub tab: Tab,
    /// Display text, padded
    pub display_text: String,
    pub active: bool,
    pub style: Style,
    /// Width of the tab in characters
    pub width: u16,
}

impl TabsViewModel {
    /// Build the view model; exactly one tab is active
    pub fn from_movies(movies: &MoviesState, theme: &Theme) -> Self {
        let active_tab = Tab::from_show_favourites(movies.show_favourites);

        let tabs = Tab::iter()
            .map(|tab| {
                let active = tab == active_tab;
                let count = match tab {
                    Tab::Movies => movies.list.len(),
                    Tab::Favourites => movies.favourites.len(),
                };
                let display_text = format!("  {} {} ({})  ", tab.shortcut(), tab, count);
                let style = if active {
                    theme.tab_active()
                } else {
                    theme.tab_inactive()
                };
                TabViewModel {
                    tab,
                    width: display_text.chars().count() as u16,
                    display_text,
                    active,
                    style,
                }
            })
            .collect();

        Self {
            tabs,
            line_bg: theme.tab_line_bg,
        }
    }

    /// Screen area of each tab within the tab line, clipped to `area`
    pub fn tab_areas(&self, area: Rect) -> Vec<(Tab, Rect)> {
        let mut x = area.x;
        let right = area.x + area.width;
        let mut areas = Vec::with_capacity(self.tabs.len());
        for tab in &self.tabs {
            if x >= right {
                break;
            }
            let width = tab.width.min(right - x);
            areas.push((tab.tab, Rect::new(x, area.y, width, 1)));
            // one column gap between tabs
            x = x.saturating_add(tab.width + 1);
        }
        areas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active_tab() {
        let theme = Theme::default();
        for show_favourites in [false, true] {
            let movies = MoviesState {
                show_favourites,
                ..MoviesState::default()
            };
            let vm = TabsViewModel::from_movies(&movies, &theme);
            let active: Vec<_> = vm.tabs.iter().filter(|t| t.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].tab, Tab::from_show_favourites(show_favourites));
            assert_eq!(active[0].style, theme.tab_active());
        }
    }

    #[test]
    fn test_tab_labels_in_order() {
        let vm = TabsViewModel::from_movies(&MoviesState::default(), &Theme::default());
        let labels: Vec<_> = vm.tabs.iter().map(|t| t.display_text.trim()).collect();
        assert_eq!(labels, vec!["1 Movies (0)", "2 Favourites (0)"]);
    }

    #[test]
    fn test_tab_areas_do_not_overlap() {
        let vm = TabsViewModel::from_movies(&MoviesState::default(), &Theme::default());
        let areas = vm.tab_areas(Rect::new(0, 4, 80, 1));
        assert_eq!(areas.len(), 2);
        let (_, first) = areas[0];
        let (_, second) = areas[1];
        assert!(first.right() < second.left());
        assert_eq!(second.y, 4);
    }

    #[test]
    fn test_show_favourites_round_trip() {
        for tab in Tab::iter() {
            assert_eq!(Tab::from_show_favourites(tab.show_favourites()), tab);
        }
    }
}
