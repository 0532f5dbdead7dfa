use sea_orm::ActiveValue::Set;
use sea_orm::IntoActiveModel;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::Opaque;

/// A song row. The album, singer and category ids are plain columns; nothing
/// checks that the referenced rows exist.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "songs_table")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "songs_id")]
    pub id: i64,
    #[sea_orm(column_name = "song_title")]
    pub title: String,
    pub album_id: Option<i64>,
    pub singer_id: Option<i64>,
    pub category_id: Option<i64>,
    #[sea_orm(column_name = "song_description", column_type = "Json", nullable)]
    pub description: Option<Opaque>,
    #[sea_orm(column_type = "Json", nullable)]
    pub is_favorite: Option<Opaque>,
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SongInput {
    pub title: String,
    pub album_id: Option<i64>,
    pub singer_id: Option<i64>,
    pub category_id: Option<i64>,
    // Older clients send `songs_description`
    #[serde(alias = "songs_description")]
    pub description: Option<Opaque>,
    pub is_favorite: Option<Opaque>,
}

impl IntoActiveModel<ActiveModel> for SongInput {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            title: Set(self.title),
            album_id: Set(self.album_id),
            singer_id: Set(self.singer_id),
            category_id: Set(self.category_id),
            description: Set(self.description),
            is_favorite: Set(self.is_favorite),
            ..Default::default()
        }
    }
}
