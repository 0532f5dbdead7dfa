use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    TryIntoModel,
};
use tracing::instrument;

use crate::database::{Database, is_connection_error};
use crate::resources::Resource;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },
    #[error("Database unavailable: {0}")]
    Unavailable(#[source] DbErr),
    #[error("Database error: {0}")]
    Database(#[source] DbErr),
}

impl From<DbErr> for CatalogError {
    fn from(err: DbErr) -> Self {
        if is_connection_error(&err) {
            Self::Unavailable(err)
        } else {
            Self::Database(err)
        }
    }
}

/// Reads are idempotent, so a dropped connection gets a couple of quick retries.
fn read_backoff() -> ExponentialBuilder {
    ExponentialBuilder::default()
        .with_min_delay(Duration::from_millis(50))
        .with_max_delay(Duration::from_millis(500))
        .with_max_times(2)
}

/// Ids arrive as raw path text and are never rejected. Text that is not an
/// integer cannot name a row, so it simply matches nothing.
fn row_key(id: &str) -> Option<i64> {
    id.parse().ok()
}

/// CRUD over a single table. Every operation issues exactly one statement.
pub struct ResourceService<R> {
    db: Arc<Database>,
    resource: PhantomData<R>,
}

impl<R: Resource> ResourceService<R> {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            resource: PhantomData,
        }
    }

    /// All rows, in whatever order the database returns them.
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn list(&self) -> Result<Vec<R::Model>, CatalogError> {
        let rows = (|| async { R::Entity::find().all(&self.db.conn).await })
            .retry(read_backoff())
            .when(is_connection_error)
            .notify(|err, delay| tracing::warn!("Retrying list in {delay:?}: {err}"))
            .await?;
        Ok(rows)
    }

    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn get(&self, id: &str) -> Result<R::Model, CatalogError> {
        let not_found = || CatalogError::NotFound {
            resource: R::NAME,
            id: id.to_string(),
        };
        let Some(key) = row_key(id) else {
            return Err(not_found());
        };

        let row = (|| async {
            R::Entity::find()
                .filter(R::primary_key().eq(key))
                .one(&self.db.conn)
                .await
        })
        .retry(read_backoff())
        .when(is_connection_error)
        .notify(|err, delay| tracing::warn!("Retrying get in {delay:?}: {err}"))
        .await?;

        row.ok_or_else(not_found)
    }

    /// Insert a row and echo the input back with the id the database assigned.
    /// The row is not read back.
    #[instrument(skip_all, fields(resource = R::NAME))]
    pub async fn create(&self, input: R::Input) -> Result<R::Model, CatalogError> {
        let mut row = input.into_active_model();
        let result = R::Entity::insert(row.clone()).exec(&self.db.conn).await?;
        let id: i64 = result.last_insert_id;
        tracing::debug!("Created {} {id}", R::NAME);

        row.try_set(R::primary_key(), id.into())?;
        Ok(row.try_into_model()?)
    }

    /// Overwrite every mutable column of the row. Returns the number of rows
    /// touched; a missing id is not an error.
    #[instrument(skip(self, input), fields(resource = R::NAME))]
    pub async fn update(&self, id: &str, input: R::Input) -> Result<u64, CatalogError> {
        let Some(key) = row_key(id) else {
            return Ok(0);
        };
        let result = R::Entity::update_many()
            .set(input.into_active_model())
            .filter(R::primary_key().eq(key))
            .exec(&self.db.conn)
            .await?;
        tracing::debug!("Updated {} row(s)", result.rows_affected);
        Ok(result.rows_affected)
    }

    /// Hard delete. Returns the number of rows removed; a missing id is not an
    /// error.
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn delete(&self, id: &str) -> Result<u64, CatalogError> {
        let Some(key) = row_key(id) else {
            return Ok(0);
        };
        let result = R::Entity::delete_many()
            .filter(R::primary_key().eq(key))
            .exec(&self.db.conn)
            .await?;
        tracing::debug!("Deleted {} row(s)", result.rows_affected);
        Ok(result.rows_affected)
    }
}
