//! SQL-based persistence backend (MySQL/PostgreSQL/SQLite via SeaORM)

use async_trait::async_trait;
use kennel_common::KennelError;
use sea_orm::*;
use tracing::debug;

use crate::entity::{breed, dog};
use crate::model::*;
use crate::traits::*;

/// External database persistence service
///
/// Wraps a SeaORM `DatabaseConnection` and implements all persistence traits
/// with direct database queries.
pub struct SqlPersistService {
    db: DatabaseConnection,
}

impl SqlPersistService {
    /// Create a new SqlPersistService with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn breed_active_model(data: &BreedData) -> breed::ActiveModel {
    breed::ActiveModel {
        name: Set(data.name.clone()),
        size: Set(data.size.code().to_string()),
        friendliness: Set(data.friendliness),
        trainability: Set(data.trainability),
        shedding_amount: Set(data.shedding_amount),
        exercise_needs: Set(data.exercise_needs),
        ..Default::default()
    }
}

fn dog_active_model(data: &DogData) -> dog::ActiveModel {
    dog::ActiveModel {
        name: Set(data.name.clone()),
        age: Set(data.age),
        gender: Set(data.gender.clone()),
        color: Set(data.color.clone()),
        favorite_food: Set(data.favorite_food.clone()),
        favorite_toy: Set(data.favorite_toy.clone()),
        breed_id: Set(data.breed_id),
        ..Default::default()
    }
}

/// Load the breed a dog write points at, failing with a `breed_id` error when it is gone
async fn require_breed<C>(conn: &C, breed_id: i32) -> anyhow::Result<breed::Model>
where
    C: ConnectionTrait,
{
    breed::Entity::find_by_id(breed_id)
        .one(conn)
        .await?
        .ok_or_else(|| KennelError::missing_breed(breed_id).into())
}

// ============================================================================
// PersistenceService implementation
// ============================================================================

#[async_trait]
impl PersistenceService for SqlPersistService {
    fn backend_name(&self) -> &'static str {
        match self.db.get_database_backend() {
            DbBackend::MySql => "mysql",
            DbBackend::Postgres => "postgres",
            DbBackend::Sqlite => "sqlite",
        }
    }

    async fn health_check(&self) -> anyhow::Result<()> {
        self.db.ping().await?;
        Ok(())
    }
}

// ============================================================================
// BreedPersistence implementation
// ============================================================================

#[async_trait]
impl BreedPersistence for SqlPersistService {
    async fn breed_find_all(&self) -> anyhow::Result<Vec<BreedInfo>> {
        let breeds = breed::Entity::find()
            .order_by_asc(breed::Column::Name)
            .order_by_asc(breed::Column::Id)
            .all(&self.db)
            .await?;

        breeds
            .into_iter()
            .map(|b| BreedInfo::try_from(b).map_err(anyhow::Error::from))
            .collect()
    }

    async fn breed_get_by_id(&self, id: i32) -> anyhow::Result<Option<BreedInfo>> {
        match breed::Entity::find_by_id(id).one(&self.db).await? {
            Some(b) => Ok(Some(BreedInfo::try_from(b)?)),
            None => Ok(None),
        }
    }

    async fn breed_exists(&self, id: i32) -> anyhow::Result<bool> {
        let count = breed::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn breed_create(&self, data: &BreedData) -> anyhow::Result<BreedInfo> {
        let model = breed_active_model(data).insert(&self.db).await?;
        Ok(BreedInfo::try_from(model)?)
    }

    async fn breed_update(&self, id: i32, data: &BreedData) -> anyhow::Result<Option<BreedInfo>> {
        let mut active = breed_active_model(data);
        active.id = Unchanged(id);

        match active.update(&self.db).await {
            Ok(model) => Ok(Some(BreedInfo::try_from(model)?)),
            Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn breed_delete(&self, id: i32) -> anyhow::Result<Option<u64>> {
        let tx = self.db.begin().await?;

        if breed::Entity::find_by_id(id).one(&tx).await?.is_none() {
            return Ok(None);
        }

        let dogs = dog::Entity::delete_many()
            .filter(dog::Column::BreedId.eq(id))
            .exec(&tx)
            .await?;

        breed::Entity::delete_by_id(id).exec(&tx).await?;

        tx.commit().await?;

        debug!(
            "Deleted breed {} together with {} dog(s)",
            id, dogs.rows_affected
        );
        Ok(Some(dogs.rows_affected))
    }
}

// ============================================================================
// DogPersistence implementation
// ============================================================================

#[async_trait]
impl DogPersistence for SqlPersistService {
    async fn dog_find_all(&self) -> anyhow::Result<Vec<DogInfo>> {
        let rows = dog::Entity::find()
            .find_also_related(breed::Entity)
            .order_by_asc(dog::Column::Id)
            .all(&self.db)
            .await?;

        rows.into_iter()
            .map(|(d, b)| DogInfo::from_models(d, b).map_err(anyhow::Error::from))
            .collect()
    }

    async fn dog_get_by_id(&self, id: i32) -> anyhow::Result<Option<DogInfo>> {
        let row = dog::Entity::find_by_id(id)
            .find_also_related(breed::Entity)
            .one(&self.db)
            .await?;

        match row {
            Some((d, b)) => Ok(Some(DogInfo::from_models(d, b)?)),
            None => Ok(None),
        }
    }

    async fn dog_exists(&self, id: i32) -> anyhow::Result<bool> {
        let count = dog::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn dog_create(&self, data: &DogData) -> anyhow::Result<DogInfo> {
        let tx = self.db.begin().await?;

        let breed = require_breed(&tx, data.breed_id).await?;
        let model = dog_active_model(data).insert(&tx).await?;

        tx.commit().await?;

        Ok(DogInfo::from_models(model, Some(breed))?)
    }

    async fn dog_update(&self, id: i32, data: &DogData) -> anyhow::Result<Option<DogInfo>> {
        let tx = self.db.begin().await?;

        if dog::Entity::find_by_id(id).one(&tx).await?.is_none() {
            return Ok(None);
        }

        let breed = require_breed(&tx, data.breed_id).await?;

        let mut active = dog_active_model(data);
        active.id = Unchanged(id);
        let model = active.update(&tx).await?;

        tx.commit().await?;

        Ok(Some(DogInfo::from_models(model, Some(breed))?))
    }

    async fn dog_delete(&self, id: i32) -> anyhow::Result<bool> {
        let result = dog::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
