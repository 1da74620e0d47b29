use sea_orm::entity::prelude::*;

/// Physical or logical credential (card, licence plate) that can be handed to a user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "AccessKey")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "DisplayName")]
    pub display_name: String,
    #[sea_orm(column_name = "Type")]
    pub r#type: Option<String>,
    #[sea_orm(column_name = "IsActive")]
    pub is_active: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::access_key_assignment::Entity")]
    Assignments,
}

impl Related<super::access_key_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
