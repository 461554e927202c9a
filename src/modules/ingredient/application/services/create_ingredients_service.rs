use async_trait::async_trait;

use crate::modules::ingredient::application::ports::{
    incoming::use_cases::{
        CreateIngredientsCommand, CreateIngredientsError, CreateIngredientsOutcome,
        CreateIngredientsUseCase,
    },
    outgoing::{IngredientQuery, IngredientRepository, IngredientRepositoryError},
};
use crate::shared::catalog::{dedupe_by_name, plan_bulk_upsert, CatalogRow, INGREDIENT_NOUN};

#[derive(Debug, Clone)]
pub struct CreateIngredientsService<Q, R>
where
    Q: IngredientQuery,
    R: IngredientRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateIngredientsService<Q, R>
where
    Q: IngredientQuery,
    R: IngredientRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateIngredientsUseCase for CreateIngredientsService<Q, R>
where
    Q: IngredientQuery,
    R: IngredientRepository,
{
    async fn execute(
        &self,
        command: CreateIngredientsCommand,
    ) -> Result<CreateIngredientsOutcome, CreateIngredientsError> {
        let inputs = dedupe_by_name(command.into_items());
        let names: Vec<String> = inputs.iter().map(|i| i.name().to_string()).collect();

        let existing = self
            .query
            .find_by_names(&names)
            .await
            .map_err(|e| CreateIngredientsError::RepositoryError(e.to_string()))?;

        let plan = plan_bulk_upsert(inputs, existing);
        let blocked = plan.blocked_names();

        if plan.to_create.is_empty() && plan.to_restore.is_empty() {
            return Err(CreateIngredientsError::NothingCreated {
                message: INGREDIENT_NOUN.nothing_created(&blocked),
                existing: plan.blocked,
            });
        }

        let restore = plan
            .to_restore
            .into_iter()
            .map(|(row, input)| (row.id(), input))
            .collect();

        let saved = self
            .repository
            .create_and_restore(plan.to_create, restore)
            .await
            .map_err(|e| match e {
                IngredientRepositoryError::AlreadyExists => CreateIngredientsError::Conflict,
                other => CreateIngredientsError::RepositoryError(other.to_string()),
            })?;

        let message =
            INGREDIENT_NOUN.created_summary(saved.created.len(), saved.restored.len(), &blocked);
        tracing::info!(
            created = saved.created.len(),
            restored = saved.restored.len(),
            blocked = blocked.len(),
            "Ingredients saved"
        );

        Ok(CreateIngredientsOutcome {
            message,
            ingredients: saved.into_rows(),
        })
    }
}
