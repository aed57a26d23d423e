// Engine module - pure view-model logic (filtering, pagination, form state)
// This layer sits between fetched records (types) and CLI presentation

pub mod collection;
pub mod contact;
pub mod filter;
pub mod paginate;

pub use collection::{
    CollectionItem, CollectionView, PageSnapshot, SortOrder, derive_categories, featured_projects,
    latest_posts,
};
pub use contact::{ContactForm, FieldError, FormPhase, validate};
pub use filter::{ALL_CATEGORY, FilterState};
pub use paginate::{PageMark, clamp_page, page_count, page_range, visible_pages};
