//! SeaORM adapter for BoxerRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{Boxer, BoxerId, FightOutcome, NewBoxer};
use crate::domain::ports::BoxerRepository;
use crate::entity::boxers;
use crate::error::DomainError;

/// SQL implementation of BoxerRepository (SQLite or PostgreSQL)
pub struct SqlBoxerRepository {
    db: DatabaseConnection,
}

impl SqlBoxerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BoxerRepository for SqlBoxerRepository {
    async fn find_by_id(&self, id: &BoxerId) -> Result<Option<Boxer>, DomainError> {
        let result = boxers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(DomainError::from_db)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Boxer>, DomainError> {
        let result = boxers::Entity::find()
            .filter(boxers::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(DomainError::from_db)?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, boxer: &NewBoxer) -> Result<Boxer, DomainError> {
        let model = boxers::ActiveModel {
            id: NotSet,
            name: Set(boxer.name.clone()),
            weight: Set(boxer.weight),
            height: Set(boxer.height),
            reach: Set(boxer.reach),
            age: Set(boxer.age),
            fights: Set(0),
            wins: Set(0),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| match DomainError::from_db(e) {
                DomainError::DuplicateEntity(_) => DomainError::DuplicateEntity(format!(
                    "Boxer with name '{}' already exists",
                    boxer.name
                )),
                other => other,
            })?;

        Ok(result.into())
    }

    async fn delete(&self, id: &BoxerId) -> Result<bool, DomainError> {
        let result = boxers::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(DomainError::from_db)?;

        Ok(result.rows_affected > 0)
    }

    async fn find_ranked(&self) -> Result<Vec<Boxer>, DomainError> {
        let results = boxers::Entity::find()
            .filter(boxers::Column::Fights.gt(0))
            .order_by_asc(boxers::Column::Id)
            .all(&self.db)
            .await
            .map_err(DomainError::from_db)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn record_result(
        &self,
        id: &BoxerId,
        outcome: FightOutcome,
    ) -> Result<bool, DomainError> {
        // Single UPDATE with in-database increments: the existence check and the
        // write cannot interleave with another writer.
        let result = boxers::Entity::update_many()
            .col_expr(
                boxers::Column::Fights,
                Expr::col(boxers::Column::Fights).add(1),
            )
            .col_expr(
                boxers::Column::Wins,
                Expr::col(boxers::Column::Wins).add(outcome.wins()),
            )
            .filter(boxers::Column::Id.eq(id.0))
            .exec(&self.db)
            .await
            .map_err(DomainError::from_db)?;

        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        boxers::Entity::find()
            .count(&self.db)
            .await
            .map_err(DomainError::from_db)
    }
}

/// Convert SeaORM model to domain entity
impl From<boxers::Model> for Boxer {
    fn from(model: boxers::Model) -> Self {
        Boxer {
            id: BoxerId(model.id),
            name: model.name,
            weight: model.weight,
            height: model.height,
            reach: model.reach,
            age: model.age,
            fights: model.fights,
            wins: model.wins,
        }
    }
}
