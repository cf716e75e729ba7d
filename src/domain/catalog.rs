//! Media catalog
//!
//! The catalog backs the curated shelves of the home feed and the in-process
//! search store. It is plain data loaded from configuration.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Kind of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    #[default]
    Movie,
    Tv,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "Movie"),
            MediaKind::Tv => write!(f, "TV"),
        }
    }
}

/// A single movie or show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub kind: MediaKind,
    #[serde(default)]
    pub rating: Option<f32>,
}

impl MediaItem {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            year: None,
            kind: MediaKind::Movie,
            rating: None,
        }
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_kind(mut self, kind: MediaKind) -> Self {
        self.kind = kind;
        self
    }

    /// Title followed by the release year when known, e.g. `Heat (1995)`
    pub fn label(&self) -> String {
        match self.year {
            Some(year) => format!("{} ({year})", self.title),
            None => self.title.clone(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }
}

/// Curated lists shown on the home feed, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Serialize, Deserialize)]
pub enum Shelf {
    #[default]
    PopularMovies,
    PopularTv,
    Family,
    Documentary,
}

impl Shelf {
    pub fn title(&self) -> &'static str {
        match self {
            Shelf::PopularMovies => "Popular Movies",
            Shelf::PopularTv => "Popular TV",
            Shelf::Family => "Family",
            Shelf::Documentary => "Documentary",
        }
    }

    pub fn position(&self) -> usize {
        Shelf::iter().position(|shelf| shelf == *self).unwrap_or(0)
    }

    pub fn next(&self) -> Shelf {
        Shelf::iter().nth(self.position() + 1).unwrap_or(*self)
    }

    pub fn previous(&self) -> Shelf {
        self.position()
            .checked_sub(1)
            .and_then(|index| Shelf::iter().nth(index))
            .unwrap_or(*self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Item shown on the poster; the first popular movie is used when absent
    #[serde(default)]
    pub featured: Option<MediaItem>,
    #[serde(default)]
    pub popular_movies: Vec<MediaItem>,
    #[serde(default)]
    pub popular_tv: Vec<MediaItem>,
    #[serde(default)]
    pub family: Vec<MediaItem>,
    #[serde(default)]
    pub documentary: Vec<MediaItem>,
}

impl Catalog {
    pub fn items(&self, shelf: Shelf) -> &[MediaItem] {
        match shelf {
            Shelf::PopularMovies => &self.popular_movies,
            Shelf::PopularTv => &self.popular_tv,
            Shelf::Family => &self.family,
            Shelf::Documentary => &self.documentary,
        }
    }

    pub fn featured(&self) -> Option<&MediaItem> {
        self.featured.as_ref().or_else(|| self.popular_movies.first())
    }

    pub fn is_empty(&self) -> bool {
        Shelf::iter().all(|shelf| self.items(shelf).is_empty())
    }

    /// Case-insensitive title search across every shelf.
    ///
    /// Results keep shelf order, are deduplicated by id and capped at `limit`.
    /// A blank query matches nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<MediaItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return vec![];
        }

        let mut seen = HashSet::new();
        Shelf::iter()
            .flat_map(|shelf| self.items(shelf).iter())
            .chain(self.featured.iter())
            .filter(|item| item.matches(&needle))
            .filter(|item| seen.insert(item.id))
            .take(limit)
            .cloned()
            .collect()
    }
}
