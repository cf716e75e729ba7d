use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    core::{cmd::Cmd, msg::feed::FeedMsg},
    domain::catalog::{Catalog, Shelf},
};

/// Selection inside the curated lists of the home feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedState {
    pub shelf: Shelf,
    /// Selected index per shelf; shelves remember their position
    pub selected: HashMap<Shelf, usize>,
}

impl FeedState {
    pub fn selected_index(&self, shelf: Shelf) -> usize {
        self.selected.get(&shelf).copied().unwrap_or(0)
    }

    pub fn current_index(&self) -> usize {
        self.selected_index(self.shelf)
    }

    /// Feed-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: FeedMsg, catalog: &Catalog) -> Vec<Cmd> {
        match msg {
            FeedMsg::NextShelf => self.shelf = self.shelf.next(),
            FeedMsg::PrevShelf => self.shelf = self.shelf.previous(),
            FeedMsg::NextItem => {
                let last = catalog.items(self.shelf).len().saturating_sub(1);
                let next = (self.current_index() + 1).min(last);
                self.selected.insert(self.shelf, next);
            }
            FeedMsg::PrevItem => {
                let prev = self.current_index().saturating_sub(1);
                self.selected.insert(self.shelf, prev);
            }
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::MediaItem;

    fn catalog() -> Catalog {
        Catalog {
            popular_movies: vec![
                MediaItem::new(1, "Dune"),
                MediaItem::new(2, "Heat"),
                MediaItem::new(3, "Alien"),
            ],
            popular_tv: vec![MediaItem::new(10, "Dark")],
            ..Default::default()
        }
    }

    #[test]
    fn test_item_navigation_clamps_to_shelf() {
        let catalog = catalog();
        let mut feed = FeedState::default();

        feed.update(FeedMsg::PrevItem, &catalog);
        assert_eq!(feed.current_index(), 0);

        for _ in 0..5 {
            feed.update(FeedMsg::NextItem, &catalog);
        }
        assert_eq!(feed.current_index(), 2);
    }

    #[test]
    fn test_shelves_remember_selection() {
        let catalog = catalog();
        let mut feed = FeedState::default();

        feed.update(FeedMsg::NextItem, &catalog);
        feed.update(FeedMsg::NextShelf, &catalog);
        assert_eq!(feed.shelf, Shelf::PopularTv);
        assert_eq!(feed.current_index(), 0);

        feed.update(FeedMsg::PrevShelf, &catalog);
        assert_eq!(feed.shelf, Shelf::PopularMovies);
        assert_eq!(feed.current_index(), 1);
    }

    #[test]
    fn test_empty_shelf_stays_at_zero() {
        let catalog = catalog();
        let mut feed = FeedState {
            shelf: Shelf::Documentary,
            ..Default::default()
        };

        let cmds = feed.update(FeedMsg::NextItem, &catalog);

        assert_eq!(feed.current_index(), 0);
        assert!(cmds.is_empty());
    }
}
