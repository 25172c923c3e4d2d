//! Bundled movie data
//!
//! The seed dataset and the search catalog are compiled into the binary.
//! Either can be replaced by a JSON file named in the app config.

use crate::domain_models::Movie;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const BUNDLED_MOVIES: &str = include_str!("../data/movies.json");
const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid movie data in {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Movies seeded into the list when the app view mounts
pub fn load_dataset(path: Option<&Path>) -> Result<Vec<Movie>, DatasetError> {
    load(path, BUNDLED_MOVIES, "bundled dataset")
}

/// Movies the navbar search looks up
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<Movie>, DatasetError> {
    load(path, BUNDLED_CATALOG, "bundled catalog")
}

fn load(path: Option<&Path>, bundled: &str, label: &str) -> Result<Vec<Movie>, DatasetError> {
    let movies = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse_movies(&content, &path.display().to_string())?
        }
        None => parse_movies(bundled, label)?,
    };

    warn_on_bad_keys(&movies, label);
    log::info!("Loaded {} movies from {}", movies.len(), label);
    Ok(movies)
}

/// Parse a JSON array of movie records
pub fn parse_movies(content: &str, origin: &str) -> Result<Vec<Movie>, DatasetError> {
    serde_json::from_str(content).map_err(|source| DatasetError::Parse {
        origin: origin.to_string(),
        source,
    })
}

fn warn_on_bad_keys(movies: &[Movie], label: &str) {
    let mut seen = HashSet::new();
    for movie in movies {
        if movie.imdb_id.is_empty() {
            log::warn!("{}: '{}' has no imdbID", label, movie.title);
        } else if !seen.insert(movie.imdb_id.as_str()) {
            log::warn!("{}: duplicate imdbID {}", label, movie.imdb_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_loads() {
        let movies = load_dataset(None).unwrap();
        assert!(!movies.is_empty());
        assert!(movies.iter().all(|m| !m.imdb_id.is_empty()));
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = load_catalog(None).unwrap();
        assert!(catalog.iter().any(|m| m.title == "Arrival"));
    }

    #[test]
    fn test_parse_tolerates_missing_fields() {
        let movies = parse_movies(r#"[{"Title": "No Id"}, {"imdbID": "tt1"}]"#, "test").unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].imdb_id, "");
        assert_eq!(movies[1].title, "");
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = parse_movies("{not json", "movies.json").unwrap_err();
        assert!(matches!(err, DatasetError::Parse { .. }));
        assert_eq!(err.to_string(), "invalid movie data in movies.json");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_dataset(Some(Path::new("/nonexistent/movies.json"))).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }
}
