use sea_orm::ActiveValue::Set;
use sea_orm::IntoActiveModel;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::Opaque;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "singers_table")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "singer_id")]
    pub id: i64,
    #[sea_orm(column_name = "singer_name")]
    pub name: String,
    #[sea_orm(column_name = "singer_profile", column_type = "Json", nullable)]
    pub profile: Option<Opaque>,
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SingerInput {
    pub name: String,
    pub profile: Option<Opaque>,
}

impl IntoActiveModel<ActiveModel> for SingerInput {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            profile: Set(self.profile),
            ..Default::default()
        }
    }
}
