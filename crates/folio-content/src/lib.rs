pub mod error;
mod local;
mod normalize;
mod relay;
mod schema;
mod strapi;
mod traits;

pub use error::{Error, Result};
pub use local::{POSTS_INDEX, PROJECTS_INDEX, StaticSource};
pub use normalize::{
    DEFAULT_PROJECT_CATEGORY, PLACEHOLDER_IMAGE, parse_post, parse_posts, parse_project,
    parse_projects,
};
pub use relay::EmailRelay;
pub use strapi::StrapiSource;
pub use traits::ContentSource;
