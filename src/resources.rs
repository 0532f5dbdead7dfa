use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, EntityTrait, FromQueryResult, IntoActiveModel,
    ModelTrait, PrimaryKeyTrait, TryIntoModel,
};
use serde::{Serialize, de::DeserializeOwned};

use crate::entities::{album, category, singer, song};

/// Describes one table exposed through the CRUD routes.
///
/// Handlers and the service layer are written once against this trait; each
/// table only supplies its entity, request body type, and route path.
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<
            Model = Self::Model,
            ActiveModel = Self::ActiveModel,
            PrimaryKey = Self::PrimaryKey,
        >;
    /// Every catalog table has a single auto-increment integer key.
    type PrimaryKey: PrimaryKeyTrait<ValueType = i64>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Serialize
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + TryIntoModel<Self::Model>
        + Send
        + 'static;
    /// Body accepted by create and update. Every mutable column is set from it.
    type Input: DeserializeOwned + IntoActiveModel<Self::ActiveModel> + Send + 'static;

    /// Singular name used in logs and error messages.
    const NAME: &'static str;
    /// Collection route, e.g. `/albums`.
    const PATH: &'static str;

    fn primary_key() -> <Self::Entity as EntityTrait>::Column;
}

pub struct Albums;
pub struct Singers;
pub struct Categories;
pub struct Songs;

impl Resource for Albums {
    type Entity = album::Entity;
    type PrimaryKey = album::PrimaryKey;
    type Model = album::Model;
    type ActiveModel = album::ActiveModel;
    type Input = album::AlbumInput;

    const NAME: &'static str = "album";
    const PATH: &'static str = "/albums";

    fn primary_key() -> album::Column {
        album::Column::Id
    }
}

impl Resource for Singers {
    type Entity = singer::Entity;
    type PrimaryKey = singer::PrimaryKey;
    type Model = singer::Model;
    type ActiveModel = singer::ActiveModel;
    type Input = singer::SingerInput;

    const NAME: &'static str = "singer";
    const PATH: &'static str = "/singers";

    fn primary_key() -> singer::Column {
        singer::Column::Id
    }
}

impl Resource for Categories {
    type Entity = category::Entity;
    type PrimaryKey = category::PrimaryKey;
    type Model = category::Model;
    type ActiveModel = category::ActiveModel;
    type Input = category::CategoryInput;

    const NAME: &'static str = "category";
    const PATH: &'static str = "/categories";

    fn primary_key() -> category::Column {
        category::Column::Id
    }
}

impl Resource for Songs {
    type Entity = song::Entity;
    type PrimaryKey = song::PrimaryKey;
    type Model = song::Model;
    type ActiveModel = song::ActiveModel;
    type Input = song::SongInput;

    const NAME: &'static str = "song";
    const PATH: &'static str = "/songs";

    fn primary_key() -> song::Column {
        song::Column::Id
    }
}
