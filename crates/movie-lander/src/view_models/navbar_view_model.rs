//! Navbar View Model
//!
//! Search input line plus the result popup.

use crate::state::SearchState;
use movie_lander_theme::Theme;
use ratatui::style::Style;

const SEARCH_PLACEHOLDER: &str = "Press / to search";

/// View model for the navbar
#[derive(Debug, Clone)]
pub struct NavbarViewModel {
    /// Text shown in the input box
    pub input_text: String,
    pub input_style: Style,
    pub border_style: Style,
    pub focused: bool,
    /// Result popup, present while `show_search_results` is set
    pub result: Option<SearchResultViewModel>,
}

/// View model for the search result popup
#[derive(Debug, Clone)]
pub struct SearchResultViewModel {
    pub title: String,
    /// Body lines, empty when nothing was found
    pub lines: Vec<String>,
    pub hint: String,
    pub title_style: Style,
    pub text_style: Style,
    pub hint_style: Style,
}

impl NavbarViewModel {
    pub fn new(search: &SearchState, query: &str, focused: bool, theme: &Theme) -> Self {
        let input_text = if focused {
            format!("{query}▏")
        } else if query.is_empty() {
            SEARCH_PLACEHOLDER.to_string()
        } else {
            query.to_string()
        };

        let border_style = if focused {
            theme.key_hint()
        } else {
            theme.muted()
        };

        Self {
            input_text,
            input_style: theme.navbar_input(focused),
            border_style,
            focused,
            result: search
                .show_search_results
                .then(|| SearchResultViewModel::from_search(search, theme)),
        }
    }
}

impl SearchResultViewModel {
    fn from_search(search: &SearchState, theme: &Theme) -> Self {
        match &search.result {
            Some(movie) => {
                let mut lines = Vec::new();
                if !movie.director.is_empty() {
                    lines.push(format!("Director: {}", movie.director));
                }
                if !movie.genre.is_empty() {
                    lines.push(format!("Genre: {}", movie.genre));
                }
                if !movie.plot.is_empty() {
                    lines.push(movie.plot.clone());
                }
                Self {
                    title: movie.display_title(),
                    lines,
                    hint: "a add to movies · Esc close".to_string(),
                    title_style: theme.card_title(),
                    text_style: theme.text(),
                    hint_style: theme.key_hint(),
                }
            }
            None => Self {
                title: "No match".to_string(),
                lines: vec!["No movie in the catalog matches your search.".to_string()],
                hint: "Esc close".to_string(),
                title_style: theme.error(),
                text_style: theme.muted(),
                hint_style: theme.key_hint(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Movie;

    #[test]
    fn test_unfocused_empty_input_shows_placeholder() {
        let vm = NavbarViewModel::new(&SearchState::default(), "", false, &Theme::default());
        assert_eq!(vm.input_text, SEARCH_PLACEHOLDER);
        assert!(vm.result.is_none());
    }

    #[test]
    fn test_focused_input_shows_cursor() {
        let vm = NavbarViewModel::new(&SearchState::default(), "ali", true, &Theme::default());
        assert_eq!(vm.input_text, "ali▏");
    }

    #[test]
    fn test_found_result_popup() {
        let search = SearchState {
            result: Some(Movie {
                director: "Ridley Scott".to_string(),
                ..Movie::new("tt0078748", "Alien").with_year("1979")
            }),
            show_search_results: true,
        };
        let vm = NavbarViewModel::new(&search, "alien", false, &Theme::default());
        let result = vm.result.unwrap();
        assert_eq!(result.title, "Alien (1979)");
        assert_eq!(result.lines, vec!["Director: Ridley Scott".to_string()]);
        assert!(result.hint.contains("add to movies"));
    }

    #[test]
    fn test_no_match_popup() {
        let search = SearchState {
            result: None,
            show_search_results: true,
        };
        let vm = NavbarViewModel::new(&search, "zzz", false, &Theme::default());
        assert_eq!(vm.result.unwrap().title, "No match");
    }

    #[test]
    fn test_hidden_results_have_no_popup() {
        let search = SearchState {
            result: Some(Movie::new("tt0078748", "Alien")),
            show_search_results: false,
        };
        let vm = NavbarViewModel::new(&search, "", false, &Theme::default());
        assert!(vm.result.is_none());
    }
}
