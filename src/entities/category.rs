use sea_orm::ActiveValue::Set;
use sea_orm::IntoActiveModel;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::Opaque;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "song_category_table")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "category_id")]
    pub id: i64,
    #[sea_orm(column_name = "category_name")]
    pub name: String,
    #[sea_orm(column_name = "category_description", column_type = "Json", nullable)]
    pub description: Option<Opaque>,
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CategoryInput {
    pub name: String,
    pub description: Option<Opaque>,
}

impl IntoActiveModel<ActiveModel> for CategoryInput {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            description: Set(self.description),
            ..Default::default()
        }
    }
}
