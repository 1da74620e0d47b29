use sea_orm::entity::prelude::*;

/// Provisioned user account, correlated to the HR source by `employee_id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "User")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "EmployeeId")]
    pub employee_id: String,
    #[sea_orm(column_name = "FirstName")]
    pub first_name: String,
    #[sea_orm(column_name = "LastName")]
    pub last_name: String,
    #[sea_orm(column_name = "Email")]
    pub email: String,
    #[sea_orm(column_name = "Active")]
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::authorization::Entity")]
    Authorizations,
    #[sea_orm(has_many = "super::access_key_assignment::Entity")]
    AccessKeyAssignments,
}

impl Related<super::authorization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Authorizations.def()
    }
}

impl Related<super::access_key_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessKeyAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
