//! The collection view-model: one owner for filter + pagination state, with
//! derived outputs recomputed on every change so a page index can never
//! reference a filter result that no longer applies.

use crate::filter::{ALL_CATEGORY, FilterState};
use crate::paginate::{self, PageMark};
use folio_types::{Post, Project, parse_iso_date};
use std::cmp::Ordering;

/// A record the view-model can filter and order.
pub trait CollectionItem {
    fn title(&self) -> &str;
    fn category(&self) -> Option<&str> {
        None
    }
    fn date(&self) -> &str;
}

impl CollectionItem for Post {
    fn title(&self) -> &str {
        &self.title
    }

    fn date(&self) -> &str {
        &self.date
    }
}

impl CollectionItem for Project {
    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn date(&self) -> &str {
        &self.date
    }
}

/// Ordering applied to the record source before pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep the order the source returned.
    #[default]
    Source,
    /// Date descending, applied regardless of filter state. Records with
    /// unparseable dates order last.
    NewestFirst,
}

/// Read-only view of the current page, always consistent with the filter
/// and page state it was taken from.
#[derive(Debug)]
pub struct PageSnapshot<'a, T> {
    pub items: Vec<&'a T>,
    pub current_page: usize,
    pub page_count: usize,
    pub total_matches: usize,
    pub window: Vec<PageMark>,
}

/// Owns records plus [`FilterState`] and the current page, and keeps the
/// filtered index set in lockstep with both.
#[derive(Debug)]
pub struct CollectionView<T> {
    records: Vec<T>,
    filter: FilterState,
    current_page: usize,
    page_size: usize,
    categories: Vec<String>,
    filtered: Vec<usize>,
}

impl<T: CollectionItem> CollectionView<T> {
    pub fn new(records: Vec<T>, page_size: usize, sort: SortOrder) -> Self {
        // Categories reflect the full source in first-seen order, so they
        // are derived before sorting and never recomputed on filter changes.
        let categories = derive_categories(&records);

        let mut records = records;
        if sort == SortOrder::NewestFirst {
            sort_newest_first(&mut records);
        }

        let mut view = Self {
            records,
            filter: FilterState::default(),
            current_page: 1,
            page_size: page_size.max(1),
            categories,
            filtered: Vec::new(),
        };
        view.refilter();
        view
    }

    /// Update the search text. Resets the current page to 1.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.search_query = query.into();
        self.current_page = 1;
        self.refilter();
    }

    /// Select a category ("All" clears the selection). Resets the current
    /// page to 1.
    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        self.filter.selected_category = if category == ALL_CATEGORY {
            None
        } else {
            Some(category)
        };
        self.current_page = 1;
        self.refilter();
    }

    /// Jump to a page, clamped to `[1, page_count]`. No-op on an empty set.
    pub fn set_page(&mut self, page: usize) {
        let count = self.page_count();
        if count == 0 {
            return;
        }
        self.current_page = paginate::clamp_page(page, count);
    }

    pub fn next_page(&mut self) {
        self.set_page(self.current_page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1).max(1));
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        paginate::page_count(self.filtered.len(), self.page_size)
    }

    pub fn total_matches(&self) -> usize {
        self.filtered.len()
    }

    pub fn snapshot(&self) -> PageSnapshot<'_, T> {
        let range = paginate::page_range(self.filtered.len(), self.page_size, self.current_page);
        let items = self.filtered[range]
            .iter()
            .map(|&index| &self.records[index])
            .collect();
        let page_count = self.page_count();

        PageSnapshot {
            items,
            current_page: self.current_page,
            page_count,
            total_matches: self.filtered.len(),
            window: paginate::visible_pages(page_count, self.current_page),
        }
    }

    fn refilter(&mut self) {
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.filter.matches(record.title(), record.category()))
            .map(|(index, _)| index)
            .collect();
    }
}

/// Unique categories of the full record source, first-seen order, with the
/// synthetic "All" entry pinned first. Records claiming "All" themselves
/// are ignored rather than duplicated.
pub fn derive_categories<T: CollectionItem>(records: &[T]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORY.to_string()];
    for record in records {
        if let Some(category) = record.category() {
            if !category.is_empty() && !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
    }
    categories
}

fn newest_first_cmp(a: &str, b: &str) -> Ordering {
    match (parse_iso_date(a), parse_iso_date(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable date-descending sort; unparseable dates keep source order at the
/// end of the sequence.
pub fn sort_newest_first<T: CollectionItem>(records: &mut [T]) {
    records.sort_by(|a, b| newest_first_cmp(a.date(), b.date()));
}

/// Home-page selection: the first `count` featured projects, source order.
pub fn featured_projects(projects: &[Project], count: usize) -> Vec<&Project> {
    projects.iter().filter(|p| p.featured).take(count).collect()
}

/// Home-page selection: the `limit` most recent posts, date descending.
pub fn latest_posts(posts: &[Post], limit: usize) -> Vec<&Post> {
    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by(|a, b| newest_first_cmp(&a.date, &b.date));
    sorted.truncate(limit);
    sorted
}
