pub mod article;
pub mod filters;
pub mod sources;

pub use article::{Article, ArticleSource, NewsPage};
pub use filters::{NewsFilters, SortBy};
pub use sources::SourceInfo;
