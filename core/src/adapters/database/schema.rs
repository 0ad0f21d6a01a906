//! Table bootstrap
//!
//! Creates the `boxers` table from its SeaORM entity when it is missing.
//! This is not a migration system: an existing table is left untouched.

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use crate::entity::boxers;
use crate::error::DomainError;

pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(boxers::Entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement))
        .await
        .map_err(DomainError::from_db)?;

    tracing::debug!(?backend, "Boxers table ready");
    Ok(())
}
