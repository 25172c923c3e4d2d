pub mod movie_card_view_model;
pub mod movie_list_view_model;
pub mod navbar_view_model;
pub mod status_bar;
pub mod tabs_view_model;

pub use movie_card_view_model::MovieCardViewModel;
pub use movie_list_view_model::{EmptyStateViewModel, MovieListViewModel};
pub use navbar_view_model::{NavbarViewModel, SearchResultViewModel};
pub use status_bar::StatusBarViewModel;
pub use tabs_view_model::{Tab, TabViewModel, TabsViewModel};
