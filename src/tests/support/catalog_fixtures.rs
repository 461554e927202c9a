use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::ingredient::application::domain::entities::{Ingredient, IngredientInput};
use crate::modules::ingredient::application::ports::outgoing::{
    IngredientListFilter, IngredientQuery, IngredientQueryError, IngredientRepository,
    IngredientRepositoryError,
};
use crate::modules::tag::application::domain::entities::Tag;
use crate::modules::tag::application::ports::outgoing::{
    TagQuery, TagQueryError, TagRepository, TagRepositoryError,
};
use crate::shared::catalog::BulkSaved;
use crate::shared::pagination::PageRequest;

fn page_of<T: Clone>(mut rows: Vec<T>, page: PageRequest, name: impl Fn(&T) -> &str) -> (Vec<T>, u64) {
    rows.sort_by(|a, b| name(a).cmp(name(b)));
    let total = rows.len() as u64;
    let data = rows
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.page_size() as usize)
        .collect();
    (data, total)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/* --------------------------------------------------
 * Tags
 * -------------------------------------------------- */

pub fn tag(name: &str, is_deleted: bool) -> Tag {
    let now = Utc::now();
    Tag {
        id: Uuid::new_v4(),
        name: name.to_string(),
        is_deleted,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct InMemoryTagStore {
    tags: Arc<Mutex<Vec<Tag>>>,
    insert_conflict: bool,
}

impl InMemoryTagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(self, tag: Tag) -> Self {
        self.tags.lock().unwrap().push(tag);
        self
    }

    /// Every insert loses a race against a concurrent writer.
    pub fn with_insert_conflict(mut self) -> Self {
        self.insert_conflict = true;
        self
    }

    pub fn get(&self, id: Uuid) -> Option<Tag> {
        self.tags.lock().unwrap().iter().find(|t| t.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tags.lock().unwrap().len()
    }

    pub fn names(&self) -> Vec<String> {
        self.tags.lock().unwrap().iter().map(|t| t.name.clone()).collect()
    }
}

#[async_trait]
impl TagQuery for InMemoryTagStore {
    async fn find_by_names(&self, names: &[String]) -> Result<Vec<Tag>, TagQueryError> {
        let wanted: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
        Ok(self
            .tags
            .lock()
            .unwrap()
            .iter()
            .filter(|t| wanted.contains(&t.name.to_lowercase()))
            .cloned()
            .collect())
    }

    async fn find_live_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Tag>, TagQueryError> {
        Ok(self
            .tags
            .lock()
            .unwrap()
            .iter()
            .filter(|t| !t.is_deleted && ids.contains(&t.id))
            .cloned()
            .collect())
    }

    async fn list(
        &self,
        keyword: Option<&str>,
        page: PageRequest,
    ) -> Result<(Vec<Tag>, u64), TagQueryError> {
        let rows: Vec<Tag> = self
            .tags
            .lock()
            .unwrap()
            .iter()
            .filter(|t| !t.is_deleted)
            .filter(|t| keyword.map_or(true, |k| contains_ci(&t.name, k)))
            .cloned()
            .collect();
        Ok(page_of(rows, page, |t| t.name.as_str()))
    }
}

#[async_trait]
impl TagRepository for InMemoryTagStore {
    async fn create_and_restore(
        &self,
        names: Vec<String>,
        restore_ids: Vec<Uuid>,
    ) -> Result<BulkSaved<Tag>, TagRepositoryError> {
        if self.insert_conflict {
            return Err(TagRepositoryError::AlreadyExists);
        }

        let mut tags = self.tags.lock().unwrap();
        let created: Vec<Tag> = names.iter().map(|n| tag(n, false)).collect();
        tags.extend(created.iter().cloned());

        let mut restored = Vec::new();
        for t in tags.iter_mut().filter(|t| restore_ids.contains(&t.id)) {
            t.is_deleted = false;
            t.updated_at = Utc::now();
            restored.push(t.clone());
        }

        Ok(BulkSaved { created, restored })
    }

    async fn soft_delete_many(&self, ids: &[Uuid]) -> Result<u64, TagRepositoryError> {
        let mut removed = 0;
        for t in self
            .tags
            .lock()
            .unwrap()
            .iter_mut()
            .filter(|t| !t.is_deleted && ids.contains(&t.id))
        {
            t.is_deleted = true;
            removed += 1;
        }
        Ok(removed)
    }
}

/* --------------------------------------------------
 * Ingredients
 * -------------------------------------------------- */

pub fn ingredient(name: &str, ingredient_type: &str, is_deleted: bool) -> Ingredient {
    let now = Utc::now();
    Ingredient {
        id: Uuid::new_v4(),
        name: name.to_string(),
        ingredient_type: ingredient_type.to_string(),
        image_url: None,
        is_deleted,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct InMemoryIngredientStore {
    rows: Arc<Mutex<Vec<Ingredient>>>,
    should_fail: bool,
}

impl InMemoryIngredientStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_ingredient(self, ingredient: Ingredient) -> Self {
        self.rows.lock().unwrap().push(ingredient);
        self
    }

    pub fn get(&self, id: Uuid) -> Option<Ingredient> {
        self.rows.lock().unwrap().iter().find(|i| i.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn fail_query(&self) -> Result<(), IngredientQueryError> {
        if self.should_fail {
            return Err(IngredientQueryError::DatabaseError(
                "connection lost".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl IngredientQuery for InMemoryIngredientStore {
    async fn find_by_names(
        &self,
        names: &[String],
    ) -> Result<Vec<Ingredient>, IngredientQueryError> {
        self.fail_query()?;
        let wanted: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|i| wanted.contains(&i.name.to_lowercase()))
            .cloned()
            .collect())
    }

    async fn find_live_by_ids(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Ingredient>, IngredientQueryError> {
        self.fail_query()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|i| !i.is_deleted && ids.contains(&i.id))
            .cloned()
            .collect())
    }

    async fn list(
        &self,
        filter: &IngredientListFilter,
        page: PageRequest,
    ) -> Result<(Vec<Ingredient>, u64), IngredientQueryError> {
        self.fail_query()?;
        let rows: Vec<Ingredient> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|i| !i.is_deleted)
            .filter(|i| {
                filter
                    .keyword
                    .as_deref()
                    .map_or(true, |k| contains_ci(&i.name, k))
            })
            .filter(|i| {
                filter
                    .ingredient_type
                    .as_deref()
                    .map_or(true, |t| i.ingredient_type.eq_ignore_ascii_case(t))
            })
            .cloned()
            .collect();
        Ok(page_of(rows, page, |i| i.name.as_str()))
    }
}

#[async_trait]
impl IngredientRepository for InMemoryIngredientStore {
    async fn create_and_restore(
        &self,
        new: Vec<IngredientInput>,
        restore: Vec<(Uuid, IngredientInput)>,
    ) -> Result<BulkSaved<Ingredient>, IngredientRepositoryError> {
        if self.should_fail {
            return Err(IngredientRepositoryError::DatabaseError(
                "connection lost".to_string(),
            ));
        }

        let mut rows = self.rows.lock().unwrap();
        let created: Vec<Ingredient> = new
            .iter()
            .map(|input| Ingredient {
                image_url: input.image_url().map(str::to_string),
                ..ingredient(input.name(), input.ingredient_type(), false)
            })
            .collect();
        rows.extend(created.iter().cloned());

        let mut restored = Vec::new();
        for (id, input) in restore {
            if let Some(row) = rows.iter_mut().find(|r| r.id == id && r.is_deleted) {
                row.is_deleted = false;
                row.ingredient_type = input.ingredient_type().to_string();
                row.image_url = input.image_url().map(str::to_string);
                row.updated_at = Utc::now();
                restored.push(row.clone());
            }
        }

        Ok(BulkSaved { created, restored })
    }

    async fn soft_delete_many(&self, ids: &[Uuid]) -> Result<u64, IngredientRepositoryError> {
        let mut removed = 0;
        for row in self
            .rows
            .lock()
            .unwrap()
            .iter_mut()
            .filter(|r| !r.is_deleted && ids.contains(&r.id))
        {
            row.is_deleted = true;
            removed += 1;
        }
        Ok(removed)
    }
}
