use super::view_models::{
    CategoryListViewModel, ContactResultViewModel, ContactStatus, FeaturedProjectsViewModel,
    FieldErrorViewModel, LatestPostsViewModel, PageMetaViewModel, PostDetailViewModel,
    PostEntryViewModel, PostListViewModel, ProjectDetailViewModel, ProjectEntryViewModel,
    ProjectListViewModel, WindowSlot,
};
use folio_engine::{CollectionView, ContactForm, FormPhase, PageMark, PageSnapshot};
use folio_types::{Post, Project};

pub fn present_post_list(view: &CollectionView<Post>) -> PostListViewModel {
    let snapshot = view.snapshot();
    let entries = snapshot.items.iter().copied().map(post_entry).collect();
    let page = page_meta(&snapshot);

    PostListViewModel {
        search: Some(view.filter().search_query.clone()).filter(|q| !q.is_empty()),
        entries,
        page,
    }
}

pub fn present_post_detail(post: Post) -> PostDetailViewModel {
    PostDetailViewModel {
        slug: post.slug,
        title: post.title,
        date: post.date,
        image: post.image,
        excerpt: post.excerpt,
        body: post.body,
    }
}

pub fn present_latest_posts(posts: Vec<Post>) -> LatestPostsViewModel {
    LatestPostsViewModel {
        entries: posts.iter().map(post_entry).collect(),
    }
}

pub fn present_project_list(view: &CollectionView<Project>) -> ProjectListViewModel {
    let snapshot = view.snapshot();
    let entries = snapshot.items.iter().copied().map(project_entry).collect();
    let page = page_meta(&snapshot);

    ProjectListViewModel {
        category: view.filter().category_label().to_string(),
        entries,
        page,
    }
}

pub fn present_project_detail(project: Project) -> ProjectDetailViewModel {
    ProjectDetailViewModel {
        id: project.id,
        document_id: project.document_id,
        title: project.title,
        description: project.description,
        image: project.image,
        url: project.url,
        date: project.date,
        category: project.category,
        featured: project.featured,
    }
}

pub fn present_featured_projects(projects: Vec<Project>) -> FeaturedProjectsViewModel {
    FeaturedProjectsViewModel {
        entries: projects.iter().map(project_entry).collect(),
    }
}

pub fn present_categories(categories: Vec<String>) -> CategoryListViewModel {
    CategoryListViewModel { categories }
}

pub fn present_contact_result(form: &ContactForm) -> ContactResultViewModel {
    let (status, reason) = match form.phase() {
        FormPhase::Succeeded => (ContactStatus::Sent, None),
        FormPhase::Failed { reason } => (ContactStatus::Failed, Some(reason.clone())),
        FormPhase::Idle | FormPhase::Submitting => (ContactStatus::Invalid, None),
    };

    ContactResultViewModel {
        status,
        errors: form
            .errors()
            .iter()
            .map(|e| FieldErrorViewModel {
                field: e.field.to_string(),
                message: e.message.to_string(),
            })
            .collect(),
        reason,
    }
}

fn post_entry(post: &Post) -> PostEntryViewModel {
    PostEntryViewModel {
        slug: post.slug.clone(),
        title: post.title.clone(),
        excerpt: post.excerpt.clone(),
        date: post.date.clone(),
    }
}

fn project_entry(project: &Project) -> ProjectEntryViewModel {
    ProjectEntryViewModel {
        id: project.id.clone(),
        title: project.title.clone(),
        category: project.category.clone(),
        date: project.date.clone(),
        featured: project.featured,
    }
}

fn page_meta<T>(snapshot: &PageSnapshot<'_, T>) -> PageMetaViewModel {
    PageMetaViewModel {
        current_page: snapshot.current_page,
        page_count: snapshot.page_count,
        total_matches: snapshot.total_matches,
        window: snapshot
            .window
            .iter()
            .map(|mark| match mark {
                PageMark::Page(page) => WindowSlot::Page(*page),
                PageMark::Ellipsis => WindowSlot::Ellipsis,
            })
            .collect(),
    }
}
