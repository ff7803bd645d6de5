// Generic CRUD template over named stored procedures
//
// Every entity contributes a declarative binding table: procedure names
// per operation, parameter bindings, and a row mapping. The operations
// here are entity-independent; entities are data, not code.

use sqlx::postgres::PgRow;
use sqlx::PgConnection;
use std::marker::PhantomData;
use tracing::instrument;

use crate::db::pool::DbPool;
use crate::db::procedure::{ProcArg, ProcedureCall};
use crate::errors::StoreError;
use crate::outcome::Outcome;
use crate::validation::FieldError;

/// How an entity resolves its most recent record.
///
/// The shape mirrors each entity's remote procedure set, including its
/// call count: a procedure that returns only an identifier is not
/// widened to a row fetch, and the two-call form is not collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latest {
    /// No latest procedure.
    None,
    /// One call returning the full row.
    Row(&'static str),
    /// One call returning the full row, filtered by a foreign key.
    /// The second field is the key's parameter name.
    RowBy(&'static str, &'static str),
    /// One call returning only the latest identifier.
    IdOnly(&'static str),
    /// Two calls on one connection: the latest identifier, then the
    /// get-by-id procedure.
    IdThenFetch(&'static str),
}

/// Procedure names for one entity, one per operation.
#[derive(Debug, Clone, Copy)]
pub struct Procedures {
    pub list: &'static str,
    pub get_by_id: &'static str,
    pub insert: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
    pub latest: Latest,
}

/// Declarative binding of one entity to its remote procedure set.
pub trait Entity: Sized + Send + Sync + Unpin + 'static {
    /// Lowercase singular name used in caller-facing messages.
    const NAME: &'static str;
    /// Capitalized name used in mutation confirmations.
    const TITLE: &'static str;
    const PROCEDURES: Procedures;

    fn id(&self) -> i32;

    /// Check the payload against its declared field constraints.
    fn validate(&self) -> Result<(), Vec<FieldError>>;

    /// Parameters for the insert procedure, in declaration order.
    /// Absent optional fields bind SQL NULL.
    fn insert_params(&self) -> Vec<(&'static str, ProcArg)>;

    /// Parameters for the update procedure: identifier first, then the
    /// same fields as insert.
    fn update_params(&self) -> Vec<(&'static str, ProcArg)> {
        let mut params = vec![("id", ProcArg::int(self.id()))];
        params.extend(self.insert_params());
        params
    }

    /// Map one result row, applying the entity's declared nullability:
    /// a store-null column behind a non-nullable field yields that
    /// field's zero value, never a fault.
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error>;
}

/// Entity-independent CRUD operations.
///
/// Each operation acquires one pooled connection, runs its call
/// sequence, and releases the connection on every exit path when it
/// drops.
#[derive(Debug, Clone)]
pub struct Repository<E: Entity> {
    pool: DbPool,
    _entity: PhantomData<E>,
}

impl<E: Entity> Repository<E> {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// Fetch every record. Zero rows classify as not found, so callers
    /// can tell "nothing stored" apart from an empty success.
    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn list(&self) -> Result<Outcome<Vec<E>>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let rows = ProcedureCall::new(E::PROCEDURES.list)
            .fetch_all_rows(&mut conn)
            .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            records.push(Self::map_row(E::PROCEDURES.list, row)?);
        }

        if records.is_empty() {
            return Ok(Outcome::NotFound(format!(
                "No {} records found.",
                E::NAME
            )));
        }
        Ok(Outcome::Ok(records))
    }

    /// Fetch one record by identifier.
    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn get_by_id(&self, id: i32) -> Result<Outcome<E>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        self.fetch_by_id(&mut conn, id).await
    }

    /// Resolve the most recent record using the entity's declared
    /// strategy. `key` is the foreign-key filter for keyed strategies
    /// and ignored otherwise. Entities whose latest procedure yields
    /// only an identifier are served by [`Repository::latest_id`]; this
    /// method classifies them as not found.
    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn latest(&self, key: Option<i32>) -> Result<Outcome<E>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        match E::PROCEDURES.latest {
            Latest::Row(proc) => {
                let row = ProcedureCall::new(proc).fetch_optional_row(&mut conn).await?;
                self.classify_latest_row(proc, row)
            }
            Latest::RowBy(proc, key_name) => {
                let row = ProcedureCall::new(proc)
                    .param(key_name, ProcArg::opt_int(key))
                    .fetch_optional_row(&mut conn)
                    .await?;
                match row {
                    Some(row) => Ok(Outcome::Ok(Self::map_row(proc, &row)?)),
                    None => Ok(Outcome::NotFound(format!(
                        "No {} found for {}: {}",
                        E::NAME,
                        key_name,
                        key.map_or_else(|| "none".to_string(), |k| k.to_string())
                    ))),
                }
            }
            Latest::IdThenFetch(proc) => {
                // Two sequential calls on the same request-scoped connection
                let id = ProcedureCall::new(proc).fetch_scalar_id(&mut conn).await?;
                match id {
                    Some(id) => self.fetch_by_id(&mut conn, id).await,
                    None => Ok(Outcome::NotFound(format!(
                        "No {} records found.",
                        E::NAME
                    ))),
                }
            }
            Latest::None | Latest::IdOnly(_) => Ok(Outcome::NotFound(format!(
                "No {} records found.",
                E::NAME
            ))),
        }
    }

    /// Resolve only the most recent identifier, for entities whose
    /// latest procedure returns nothing else. One remote call; the row
    /// is deliberately not fetched.
    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn latest_id(&self) -> Result<Outcome<i32>, StoreError> {
        let Latest::IdOnly(proc) = E::PROCEDURES.latest else {
            return Ok(Outcome::NotFound(format!(
                "No {} records found.",
                E::NAME
            )));
        };

        let mut conn = self.pool.acquire().await?;
        match ProcedureCall::new(proc).fetch_scalar_id(&mut conn).await? {
            Some(id) => Ok(Outcome::Ok(id)),
            None => Ok(Outcome::NotFound(format!("No {}s found.", E::NAME))),
        }
    }

    /// Insert one record. The payload is validated before anything is
    /// bound; the store call is assumed to affect exactly one row, and
    /// the generated identifier is not read back.
    #[instrument(skip(self, payload), fields(entity = E::NAME))]
    pub async fn insert(&self, payload: &E) -> Result<Outcome<()>, StoreError> {
        if let Err(errors) = payload.validate() {
            return Ok(Outcome::Invalid(errors));
        }

        let mut conn = self.pool.acquire().await?;
        let mut call = ProcedureCall::new(E::PROCEDURES.insert);
        for (name, arg) in payload.insert_params() {
            call = call.param(name, arg);
        }
        call.execute(&mut conn).await?;

        tracing::info!(entity = E::NAME, "Record inserted");
        Ok(Outcome::Ok(()))
    }

    /// Update one record. The path identifier must equal the payload's
    /// embedded identifier; a mismatch short-circuits before any store
    /// access. Success is decided solely by the affected-row count.
    #[instrument(skip(self, payload), fields(entity = E::NAME))]
    pub async fn update(&self, id: i32, payload: &E) -> Result<Outcome<()>, StoreError> {
        if id != payload.id() {
            tracing::warn!(
                entity = E::NAME,
                path_id = id,
                payload_id = payload.id(),
                "Identifier mismatch"
            );
            return Ok(Outcome::IdMismatch {
                path: id,
                payload: payload.id(),
            });
        }

        if let Err(errors) = payload.validate() {
            return Ok(Outcome::Invalid(errors));
        }

        let mut conn = self.pool.acquire().await?;
        let mut call = ProcedureCall::new(E::PROCEDURES.update);
        for (name, arg) in payload.update_params() {
            call = call.param(name, arg);
        }
        let affected = call.execute(&mut conn).await?;

        if affected > 0 {
            tracing::info!(entity = E::NAME, id, "Record updated");
            Ok(Outcome::Ok(()))
        } else {
            Ok(Outcome::NotFound(format!("{} record not found.", E::TITLE)))
        }
    }

    /// Delete one record, classified by affected-row count exactly as
    /// update. There is no pre-check that the identifier exists.
    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn delete(&self, id: i32) -> Result<Outcome<()>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let affected = ProcedureCall::new(E::PROCEDURES.delete)
            .param("id", ProcArg::int(id))
            .execute(&mut conn)
            .await?;

        if affected > 0 {
            tracing::info!(entity = E::NAME, id, "Record deleted");
            Ok(Outcome::Ok(()))
        } else {
            Ok(Outcome::NotFound(format!(
                "No {} found for ID {}",
                E::NAME,
                id
            )))
        }
    }

    async fn fetch_by_id(
        &self,
        conn: &mut PgConnection,
        id: i32,
    ) -> Result<Outcome<E>, StoreError> {
        let row = ProcedureCall::new(E::PROCEDURES.get_by_id)
            .param("id", ProcArg::int(id))
            .fetch_optional_row(conn)
            .await?;

        match row {
            Some(row) => Ok(Outcome::Ok(Self::map_row(E::PROCEDURES.get_by_id, &row)?)),
            None => Ok(Outcome::NotFound(format!(
                "No {} found for ID: {}",
                E::NAME,
                id
            ))),
        }
    }

    fn classify_latest_row(
        &self,
        proc: &'static str,
        row: Option<PgRow>,
    ) -> Result<Outcome<E>, StoreError> {
        match row {
            Some(row) => Ok(Outcome::Ok(Self::map_row(proc, &row)?)),
            None => Ok(Outcome::NotFound(format!(
                "No {} records found.",
                E::NAME
            ))),
        }
    }

    fn map_row(proc: &'static str, row: &PgRow) -> Result<E, StoreError> {
        E::from_row(row).map_err(|e| StoreError::procedure(proc, e))
    }
}
