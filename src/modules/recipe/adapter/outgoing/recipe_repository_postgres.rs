use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::ingredient::adapter::outgoing::sea_orm_entity as ingredients;
use crate::modules::recipe::application::domain::entities::{CreatedRecipe, NewRecipe};
use crate::modules::recipe::application::ports::outgoing::{
    RecipeRepository, RecipeRepositoryError,
};
use crate::modules::tag::adapter::outgoing::sea_orm_entity as tags;

use super::sea_orm_entity::{recipe_ingredients, recipe_tags, recipes};

#[derive(Debug, Clone)]
pub struct RecipeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RecipeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Distinct ids in first-seen order.
fn distinct(ids: impl IntoIterator<Item = Uuid>) -> Vec<Uuid> {
    let mut out: Vec<Uuid> = Vec::new();
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

fn missing_from(wanted: &[Uuid], found: &[Uuid]) -> Vec<Uuid> {
    wanted
        .iter()
        .filter(|id| !found.contains(id))
        .copied()
        .collect()
}

async fn live_ingredient_ids(
    txn: &DatabaseTransaction,
    ids: &[Uuid],
) -> Result<Vec<Uuid>, DbErr> {
    let rows = ingredients::Entity::find()
        .filter(ingredients::Column::Id.is_in(ids.to_vec()))
        .filter(ingredients::Column::IsDeleted.eq(false))
        .all(txn)
        .await?;
    Ok(rows.into_iter().map(|m| m.id).collect())
}

async fn live_tag_ids(txn: &DatabaseTransaction, ids: &[Uuid]) -> Result<Vec<Uuid>, DbErr> {
    let rows = tags::Entity::find()
        .filter(tags::Column::Id.is_in(ids.to_vec()))
        .filter(tags::Column::IsDeleted.eq(false))
        .all(txn)
        .await?;
    Ok(rows.into_iter().map(|m| m.id).collect())
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryPostgres {
    async fn create_with_associations(
        &self,
        recipe: NewRecipe,
    ) -> Result<CreatedRecipe, RecipeRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let ingredient_ids = distinct(recipe.ingredients.iter().map(|l| l.ingredient_id));
        let found = live_ingredient_ids(&txn, &ingredient_ids)
            .await
            .map_err(map_db_err)?;
        let missing = missing_from(&ingredient_ids, &found);
        if !missing.is_empty() {
            return Err(RecipeRepositoryError::IngredientsNotFound(missing));
        }

        let tag_ids = distinct(recipe.tag_ids.iter().copied());
        let found = live_tag_ids(&txn, &tag_ids).await.map_err(map_db_err)?;
        let missing = missing_from(&tag_ids, &found);
        if !missing.is_empty() {
            return Err(RecipeRepositoryError::TagsNotFound(missing));
        }

        let now = Utc::now().fixed_offset();
        let saved = recipes::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(recipe.title),
            description: Set(recipe.description),
            instructions: Set(recipe.instructions),
            image_url: Set(recipe.image_url),
            video_url: Set(recipe.video_url),
            cooking_time: Set(recipe.cooking_time),
            difficulty: Set(recipe.difficulty.as_str().to_string()),
            created_by_id: Set(recipe.creator_id),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        let lines = recipe
            .ingredients
            .into_iter()
            .map(|line| recipe_ingredients::ActiveModel {
                id: Set(Uuid::new_v4()),
                recipe_id: Set(saved.id),
                ingredient_id: Set(Some(line.ingredient_id)),
                quantity: Set(Some(line.quantity)),
                unit: Set(line.unit),
                created_at: Set(now),
            });
        recipe_ingredients::Entity::insert_many(lines)
            .exec_without_returning(&txn)
            .await
            .map_err(map_db_err)?;

        let links = tag_ids.into_iter().map(|tag_id| recipe_tags::ActiveModel {
            recipe_id: Set(saved.id),
            tag_id: Set(tag_id),
            created_at: Set(now),
        });
        recipe_tags::Entity::insert_many(links)
            .exec_without_returning(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(CreatedRecipe {
            id: saved.id,
            title: saved.title,
        })
    }
}

fn map_db_err(e: DbErr) -> RecipeRepositoryError {
    RecipeRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::ingredient::adapter::outgoing::sea_orm_entity::test_models::ingredient_model;
    use crate::modules::recipe::adapter::outgoing::sea_orm_entity::recipes::test_models::recipe_model;
    use crate::modules::recipe::application::domain::entities::{Difficulty, IngredientLine};
    use crate::modules::tag::adapter::outgoing::sea_orm_entity::test_models::tag_model;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn new_recipe(ingredient_ids: &[Uuid], tag_ids: &[Uuid]) -> NewRecipe {
        NewRecipe {
            creator_id: Uuid::new_v4(),
            title: "Pancakes".to_string(),
            description: "Fluffy".to_string(),
            instructions: "Whisk and fry.".to_string(),
            image_url: "https://cdn.example.com/pancakes.jpg".to_string(),
            video_url: None,
            cooking_time: 15,
            difficulty: Difficulty::Easy,
            ingredients: ingredient_ids
                .iter()
                .map(|id| IngredientLine {
                    ingredient_id: *id,
                    quantity: 1.5,
                    unit: "cup".to_string(),
                })
                .collect(),
            tag_ids: tag_ids.to_vec(),
        }
    }

    fn exec_ok(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    #[tokio::test]
    async fn writes_recipe_and_links_when_everything_resolves() {
        let flour = ingredient_model("Flour", "Grain", false);
        let quick = tag_model("Quick", false);
        let saved = recipe_model("Pancakes", Uuid::new_v4());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![flour.clone()]])
            .append_query_results([vec![quick.clone()]])
            .append_query_results([vec![saved.clone()]])
            .append_exec_results([exec_ok(1), exec_ok(1)])
            .into_connection();

        let created = RecipeRepositoryPostgres::new(Arc::new(db))
            .create_with_associations(new_recipe(&[flour.id], &[quick.id]))
            .await
            .unwrap();

        assert_eq!(created.id, saved.id);
        assert_eq!(created.title, "Pancakes");
    }

    #[tokio::test]
    async fn deleted_or_unknown_ingredient_is_reported_and_nothing_is_written() {
        let flour = ingredient_model("Flour", "Grain", false);
        let unknown = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![flour.clone()]])
            .into_connection();

        let result = RecipeRepositoryPostgres::new(Arc::new(db))
            .create_with_associations(new_recipe(&[flour.id, unknown, unknown], &[Uuid::new_v4()]))
            .await;

        assert_eq!(
            result,
            Err(RecipeRepositoryError::IngredientsNotFound(vec![unknown]))
        );
    }

    #[tokio::test]
    async fn unknown_tag_is_reported() {
        let flour = ingredient_model("Flour", "Grain", false);
        let unknown = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![flour.clone()]])
            .append_query_results([Vec::<tags::Model>::new()])
            .into_connection();

        let result = RecipeRepositoryPostgres::new(Arc::new(db))
            .create_with_associations(new_recipe(&[flour.id], &[unknown]))
            .await;

        assert_eq!(result, Err(RecipeRepositoryError::TagsNotFound(vec![unknown])));
    }

    #[tokio::test]
    async fn link_insert_failure_surfaces_as_database_error() {
        let flour = ingredient_model("Flour", "Grain", false);
        let quick = tag_model("Quick", false);
        let saved = recipe_model("Pancakes", Uuid::new_v4());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![flour.clone()]])
            .append_query_results([vec![quick.clone()]])
            .append_query_results([vec![saved]])
            .append_exec_errors([DbErr::Custom("fk violation".to_string())])
            .into_connection();

        let result = RecipeRepositoryPostgres::new(Arc::new(db))
            .create_with_associations(new_recipe(&[flour.id], &[quick.id]))
            .await;

        assert!(matches!(result, Err(RecipeRepositoryError::DatabaseError(_))));
    }
}
