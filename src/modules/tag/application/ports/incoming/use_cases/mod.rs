mod create_tags_use_case;
mod get_tags_use_case;
mod remove_tags_use_case;

pub use create_tags_use_case::{
    CreateTagsCommand, CreateTagsCommandError, CreateTagsError, CreateTagsOutcome,
    CreateTagsUseCase,
};
pub use get_tags_use_case::{GetTagsError, GetTagsParams, GetTagsQuery, GetTagsUseCase};
pub use remove_tags_use_case::{RemoveTagsError, RemoveTagsUseCase};
