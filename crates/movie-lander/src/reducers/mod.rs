pub mod app_reducer;
pub mod movies_reducer;
pub mod search_reducer;
