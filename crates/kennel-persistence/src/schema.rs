//! Schema bootstrap
//!
//! Creates the kennel tables from the entity definitions when they are missing.
//! There is no migration history; existing tables are left untouched.

use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Schema};
use tracing::info;

use crate::entity::{breed, dog};

/// Create the `breed` and `dog` tables if they do not exist.
///
/// `breed` is created first since `dog.breed_id` references it.
pub async fn create_tables(db: &DatabaseConnection) -> anyhow::Result<()> {
    create_table(db, breed::Entity).await?;
    create_table(db, dog::Entity).await?;
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> anyhow::Result<()>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let table_name = entity.table_name().to_string();
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(backend.build(&statement)).await?;

    info!("Ensured table {} exists", table_name);
    Ok(())
}
