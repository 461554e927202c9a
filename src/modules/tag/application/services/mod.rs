mod create_tags_service;
mod get_tags_service;
mod remove_tags_service;

pub use create_tags_service::CreateTagsService;
pub use get_tags_service::GetTagsService;
pub use remove_tags_service::RemoveTagsService;
