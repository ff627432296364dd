//! Data Transfer Objects (DTOs).

mod article_dto;
mod page_dto;
mod tag_dto;

pub use article_dto::*;
pub use page_dto::*;
pub use tag_dto::*;
