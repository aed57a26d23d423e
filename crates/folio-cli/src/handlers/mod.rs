pub mod contact_send;
pub mod post_latest;
pub mod post_list;
pub mod post_show;
pub mod project_categories;
pub mod project_featured;
pub mod project_list;
pub mod project_show;
