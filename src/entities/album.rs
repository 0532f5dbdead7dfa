use sea_orm::ActiveValue::Set;
use sea_orm::IntoActiveModel;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::Opaque;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "album_table")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "album_id")]
    pub id: i64,
    #[sea_orm(column_name = "album_title")]
    pub title: String,
    #[sea_orm(column_name = "album_image", column_type = "Json", nullable)]
    pub image: Option<Opaque>,
    #[sea_orm(column_name = "album_description", column_type = "Json", nullable)]
    pub description: Option<Opaque>,
}

impl ActiveModelBehavior for ActiveModel {}

/// Request body for creating or replacing an album.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AlbumInput {
    pub title: String,
    pub image: Option<Opaque>,
    pub description: Option<Opaque>,
}

impl IntoActiveModel<ActiveModel> for AlbumInput {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            title: Set(self.title),
            image: Set(self.image),
            description: Set(self.description),
            ..Default::default()
        }
    }
}
