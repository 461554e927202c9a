use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::account::adapter::outgoing::sea_orm_entity::{accounts, user_info};
use crate::modules::ingredient::adapter::outgoing::sea_orm_entity as ingredients;
use crate::modules::recipe::application::domain::entities::{
    CreatorSummary, Difficulty, RecipeFilter, RecipeIngredientView, RecipeTagView, RecipeView,
};
use crate::modules::recipe::application::ports::outgoing::{RecipeQuery, RecipeQueryError};
use crate::modules::tag::adapter::outgoing::sea_orm_entity as tags;
use crate::shared::db::contains_pattern;
use crate::shared::pagination::PageRequest;

use super::sea_orm_entity::{recipe_ingredients, recipe_tags, recipes};

#[derive(Clone)]
pub struct RecipeQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RecipeQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn filtered(filter: &RecipeFilter) -> Select<recipes::Entity> {
        let mut query = recipes::Entity::find().filter(recipes::Column::IsDeleted.eq(false));

        if let Some(keyword) = &filter.keyword {
            let pattern = contains_pattern(keyword);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(recipes::Column::Title).ilike(&pattern))
                    .add(Expr::col(recipes::Column::Description).ilike(&pattern))
                    .add(Expr::col(recipes::Column::Instructions).ilike(&pattern)),
            );
        }

        if let Some(difficulty) = filter.difficulty {
            query = query.filter(recipes::Column::Difficulty.eq(difficulty.as_str()));
        }

        if let Some(creator_id) = filter.creator_id {
            query = query.filter(recipes::Column::CreatedById.eq(creator_id));
        }

        // A recipe matches when it carries any of the requested tags or ingredients.
        if !filter.tag_ids.is_empty() {
            query = query.filter(
                recipes::Column::Id.in_subquery(
                    Query::select()
                        .column(recipe_tags::Column::RecipeId)
                        .from(recipe_tags::Entity)
                        .and_where(recipe_tags::Column::TagId.is_in(filter.tag_ids.clone()))
                        .to_owned(),
                ),
            );
        }

        if !filter.ingredient_ids.is_empty() {
            query = query.filter(
                recipes::Column::Id.in_subquery(
                    Query::select()
                        .column(recipe_ingredients::Column::RecipeId)
                        .from(recipe_ingredients::Entity)
                        .and_where(
                            recipe_ingredients::Column::IngredientId
                                .is_in(filter.ingredient_ids.clone()),
                        )
                        .to_owned(),
                ),
            );
        }

        query
    }

    async fn creators(&self, ids: Vec<Uuid>) -> Result<HashMap<Uuid, CreatorSummary>, DbErr> {
        let rows = accounts::Entity::find()
            .filter(accounts::Column::Id.is_in(ids))
            .find_also_related(user_info::Entity)
            .all(&*self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(account, info)| {
                let summary = CreatorSummary {
                    id: account.id,
                    username: account.username,
                    first_name: info.as_ref().map(|i| i.first_name.clone()),
                    last_name: info.as_ref().map(|i| i.last_name.clone()),
                    avatar_url: info.and_then(|i| i.avatar_url),
                };
                (account.id, summary)
            })
            .collect())
    }

    async fn ingredient_lines(
        &self,
        recipe_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<RecipeIngredientView>>, DbErr> {
        let rows = recipe_ingredients::Entity::find()
            .filter(recipe_ingredients::Column::RecipeId.is_in(recipe_ids))
            .order_by_asc(recipe_ingredients::Column::CreatedAt)
            .find_also_related(ingredients::Entity)
            .all(&*self.db)
            .await?;

        let mut grouped: HashMap<Uuid, Vec<RecipeIngredientView>> = HashMap::new();
        for (line, ingredient) in rows {
            let Some(ingredient) = ingredient.filter(|i| !i.is_deleted) else {
                continue;
            };
            grouped
                .entry(line.recipe_id)
                .or_default()
                .push(RecipeIngredientView {
                    id: ingredient.id,
                    name: ingredient.name,
                    ingredient_type: ingredient.ingredient_type,
                    image_url: ingredient.image_url,
                    quantity: line.quantity,
                    unit: line.unit,
                });
        }
        Ok(grouped)
    }

    async fn tag_links(
        &self,
        recipe_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<RecipeTagView>>, DbErr> {
        let rows = recipe_tags::Entity::find()
            .filter(recipe_tags::Column::RecipeId.is_in(recipe_ids))
            .find_also_related(tags::Entity)
            .all(&*self.db)
            .await?;

        let mut grouped: HashMap<Uuid, Vec<RecipeTagView>> = HashMap::new();
        for (link, tag) in rows {
            let Some(tag) = tag.filter(|t| !t.is_deleted) else {
                continue;
            };
            grouped
                .entry(link.recipe_id)
                .or_default()
                .push(RecipeTagView {
                    id: tag.id,
                    name: tag.name,
                });
        }
        Ok(grouped)
    }
}

#[async_trait]
impl RecipeQuery for RecipeQueryPostgres {
    async fn list(
        &self,
        filter: &RecipeFilter,
        page: PageRequest,
    ) -> Result<(Vec<RecipeView>, u64), RecipeQueryError> {
        let query = Self::filtered(filter);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .order_by_desc(recipes::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.page_size())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if models.is_empty() {
            return Ok((Vec::new(), total));
        }

        let recipe_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let mut creator_ids: Vec<Uuid> = models.iter().map(|m| m.created_by_id).collect();
        creator_ids.sort();
        creator_ids.dedup();

        let creators = self.creators(creator_ids).await.map_err(map_db_err)?;
        let mut lines = self
            .ingredient_lines(recipe_ids.clone())
            .await
            .map_err(map_db_err)?;
        let mut links = self.tag_links(recipe_ids).await.map_err(map_db_err)?;

        let views = models
            .into_iter()
            .map(|m| {
                let difficulty: Difficulty = m
                    .difficulty
                    .parse()
                    .map_err(|_| RecipeQueryError::DatabaseError(format!(
                        "Unknown difficulty '{}' on recipe {}",
                        m.difficulty, m.id
                    )))?;
                Ok(RecipeView {
                    id: m.id,
                    creator: creators.get(&m.created_by_id).cloned(),
                    ingredients: lines.remove(&m.id).unwrap_or_default(),
                    tags: links.remove(&m.id).unwrap_or_default(),
                    title: m.title,
                    description: m.description,
                    instructions: m.instructions,
                    image_url: m.image_url,
                    video_url: m.video_url,
                    cooking_time: m.cooking_time,
                    difficulty,
                    created_at: m.created_at.into(),
                    updated_at: m.updated_at.into(),
                })
            })
            .collect::<Result<Vec<_>, RecipeQueryError>>()?;

        Ok((views, total))
    }
}

fn map_db_err(e: DbErr) -> RecipeQueryError {
    RecipeQueryError::DatabaseError(e.to_string())
}
