use sea_orm::entity::prelude::*;

use crate::modules::ingredient::adapter::outgoing::sea_orm_entity as ingredients;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recipe_ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,
    pub recipe_id: Uuid,
    /// Nulled when the ingredient row is physically deleted.
    #[sea_orm(nullable)]
    pub ingredient_id: Option<Uuid>,
    #[sea_orm(nullable)]
    pub quantity: Option<f64>,
    pub unit: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::recipes::Entity",
        from = "Column::RecipeId",
        to = "super::recipes::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Recipe,
    #[sea_orm(
        belongs_to = "ingredients::Entity",
        from = "Column::IngredientId",
        to = "ingredients::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Ingredient,
}

impl Related<super::recipes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipe.def()
    }
}

impl Related<ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
