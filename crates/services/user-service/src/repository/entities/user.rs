//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub full_name: String,
    pub date_of_birth: Date,
    #[sea_orm(unique)]
    pub email: String,
    pub phone_number: String,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            code: model.code,
            full_name: model.full_name,
            date_of_birth: model.date_of_birth,
            email: model.email,
            phone_number: model.phone_number,
            address: model.address,
        }
    }
}
