use std::sync::Arc;

use crate::modules::tag::application::ports::incoming::use_cases::{
    CreateTagsUseCase, GetTagsUseCase, RemoveTagsUseCase,
};

#[derive(Clone)]
pub struct TagUseCases {
    pub create: Arc<dyn CreateTagsUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetTagsUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveTagsUseCase + Send + Sync>,
}
