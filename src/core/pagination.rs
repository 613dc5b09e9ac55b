//! "Load more" pagination over an in-memory data set
//!
//! A `PaginationWindow` exposes a growing prefix of its data. It starts with
//! `initial_items_per_page` visible items and reveals `items_per_page` more on
//! each `load_more` call, never exceeding the data length.

use tracing::debug;

/// Items revealed initially and per `load_more` when not configured
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Page sizes for a pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Number of items visible before any `load_more`
    pub initial_items_per_page: usize,

    /// Number of items each `load_more` reveals
    pub items_per_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        PaginationConfig {
            initial_items_per_page: DEFAULT_ITEMS_PER_PAGE,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl PaginationConfig {
    pub fn new(initial_items_per_page: usize, items_per_page: usize) -> Self {
        PaginationConfig {
            initial_items_per_page,
            items_per_page,
        }
    }
}

/// Growing visible prefix of a data set
///
/// # Examples
///
/// ```
/// use school_portal_core::core::{PaginationConfig, PaginationWindow};
///
/// let mut window = PaginationWindow::new((1..=12).collect::<Vec<_>>(), PaginationConfig::new(5, 5));
/// assert_eq!(window.displayed(), &[1, 2, 3, 4, 5]);
///
/// window.load_more();
/// window.load_more();
/// assert_eq!(window.displayed().len(), 12);
/// assert!(!window.has_more());
/// ```
#[derive(Debug, Clone)]
pub struct PaginationWindow<T> {
    data: Vec<T>,
    config: PaginationConfig,
    display_count: usize,
}

impl<T> PaginationWindow<T> {
    pub fn new(data: Vec<T>, config: PaginationConfig) -> Self {
        PaginationWindow {
            data,
            display_count: config.initial_items_per_page,
            config,
        }
    }

    /// Window with five items initially and five more per `load_more`
    pub fn with_defaults(data: Vec<T>) -> Self {
        Self::new(data, PaginationConfig::default())
    }

    /// The currently visible prefix
    pub fn displayed(&self) -> &[T] {
        let end = self.display_count.min(self.data.len());
        &self.data[..end]
    }

    pub fn has_more(&self) -> bool {
        self.display_count < self.data.len()
    }

    /// Reveal the next page; does nothing once everything is visible
    pub fn load_more(&mut self) {
        if !self.has_more() {
            return;
        }
        self.display_count = self
            .display_count
            .saturating_add(self.config.items_per_page)
            .min(self.data.len());
        debug!(
            display_count = self.display_count,
            total = self.data.len(),
            "Loaded more items"
        );
    }

    /// Return to the initial page size
    pub fn reset(&mut self) {
        self.display_count = self.config.initial_items_per_page;
    }

    /// Replace the underlying data, keeping the current display count
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
    }

    pub fn display_count(&self) -> usize {
        self.display_count
    }

    /// Number of items not yet visible
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.display_count)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
