use serde::{Serialize, Serializer};

/// One slot of the compressed page strip. Serializes the way the strip is
/// displayed: page numbers as numbers, gaps as the literal `"..."`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSlot {
    Page(usize),
    Ellipsis,
}

impl Serialize for WindowSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WindowSlot::Page(page) => serializer.serialize_u64(*page as u64),
            WindowSlot::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageMetaViewModel {
    pub current_page: usize,
    pub page_count: usize,
    pub total_matches: usize,
    pub window: Vec<WindowSlot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostEntryViewModel {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostListViewModel {
    pub search: Option<String>,
    pub entries: Vec<PostEntryViewModel>,
    pub page: PageMetaViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostDetailViewModel {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub image: String,
    pub excerpt: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LatestPostsViewModel {
    pub entries: Vec<PostEntryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectEntryViewModel {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectListViewModel {
    pub category: String,
    pub entries: Vec<ProjectEntryViewModel>,
    pub page: PageMetaViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetailViewModel {
    pub id: String,
    pub document_id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: Option<String>,
    pub date: String,
    pub category: String,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedProjectsViewModel {
    pub entries: Vec<ProjectEntryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListViewModel {
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Invalid,
    Sent,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldErrorViewModel {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactResultViewModel {
    pub status: ContactStatus,
    pub errors: Vec<FieldErrorViewModel>,
    pub reason: Option<String>,
}
