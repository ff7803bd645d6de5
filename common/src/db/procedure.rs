// Named stored-procedure invocation with bound parameters
//
// Row-returning procedures are set-returning functions, invoked as
// `SELECT * FROM proc($1, ...)`. Mutating procedures return the number
// of rows they touched as a single integer; that count is the sole
// success signal for update and delete.

use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgConnection, Postgres, Row};

use crate::errors::StoreError;

/// One bound procedure argument.
///
/// Every variant carries an `Option`; `None` binds an explicit SQL NULL,
/// never an empty string or a zero.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcArg {
    Int(Option<i32>),
    Text(Option<String>),
    Bool(Option<bool>),
    Decimal(Option<Decimal>),
    Timestamp(Option<DateTime<Utc>>),
    Time(Option<NaiveTime>),
}

impl ProcArg {
    pub fn int(value: i32) -> Self {
        Self::Int(Some(value))
    }

    pub fn opt_int(value: Option<i32>) -> Self {
        Self::Int(value)
    }

    pub fn text(value: &str) -> Self {
        Self::Text(Some(value.to_string()))
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        Self::Text(value.map(str::to_string))
    }

    pub fn boolean(value: bool) -> Self {
        Self::Bool(Some(value))
    }

    pub fn decimal(value: Decimal) -> Self {
        Self::Decimal(Some(value))
    }

    pub fn opt_decimal(value: Option<Decimal>) -> Self {
        Self::Decimal(value)
    }

    pub fn timestamp(value: DateTime<Utc>) -> Self {
        Self::Timestamp(Some(value))
    }

    pub fn opt_timestamp(value: Option<DateTime<Utc>>) -> Self {
        Self::Timestamp(value)
    }

    pub fn opt_time(value: Option<NaiveTime>) -> Self {
        Self::Time(value)
    }
}

/// One procedure call: a name plus ordered, named arguments.
///
/// Argument names are for logging; binding is positional, in the order
/// the arguments were added.
#[derive(Debug, Clone)]
pub struct ProcedureCall {
    name: &'static str,
    params: Vec<(&'static str, ProcArg)>,
}

impl ProcedureCall {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: &'static str, value: ProcArg) -> Self {
        self.params.push((name, value));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn placeholders(&self) -> String {
        (1..=self.params.len())
            .map(|i| format!("${}", i))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// SQL text for a row-returning call.
    pub fn row_sql(&self) -> String {
        format!("SELECT * FROM {}({})", self.name, self.placeholders())
    }

    /// SQL text for a scalar-returning (mutating or identifier) call.
    pub fn scalar_sql(&self) -> String {
        format!("SELECT {}({})", self.name, self.placeholders())
    }

    fn bind_all<'q>(&self, sql: &'q str) -> Query<'q, Postgres, PgArguments> {
        let mut query = sqlx::query(sql);
        for (_, value) in &self.params {
            query = match value {
                ProcArg::Int(v) => query.bind(*v),
                ProcArg::Text(v) => query.bind(v.clone()),
                ProcArg::Bool(v) => query.bind(*v),
                ProcArg::Decimal(v) => query.bind(*v),
                ProcArg::Timestamp(v) => query.bind(*v),
                ProcArg::Time(v) => query.bind(*v),
            };
        }
        query
    }

    /// Execute and materialize every result row.
    pub async fn fetch_all_rows(&self, conn: &mut PgConnection) -> Result<Vec<PgRow>, StoreError> {
        tracing::debug!(procedure = self.name, "Executing row-returning procedure");
        let sql = self.row_sql();
        self.bind_all(&sql)
            .fetch_all(conn)
            .await
            .map_err(|e| StoreError::procedure(self.name, e))
    }

    /// Execute and read at most one result row.
    pub async fn fetch_optional_row(
        &self,
        conn: &mut PgConnection,
    ) -> Result<Option<PgRow>, StoreError> {
        tracing::debug!(procedure = self.name, "Executing single-row procedure");
        let sql = self.row_sql();
        self.bind_all(&sql)
            .fetch_optional(conn)
            .await
            .map_err(|e| StoreError::procedure(self.name, e))
    }

    /// Execute an identifier-returning procedure and read the first
    /// column of the first row, if any.
    pub async fn fetch_scalar_id(&self, conn: &mut PgConnection) -> Result<Option<i32>, StoreError> {
        tracing::debug!(procedure = self.name, "Executing identifier procedure");
        let sql = self.row_sql();
        let row = self
            .bind_all(&sql)
            .fetch_optional(conn)
            .await
            .map_err(|e| StoreError::procedure(self.name, e))?;

        match row {
            Some(row) => {
                let id: Option<i32> = row
                    .try_get(0)
                    .map_err(|e| StoreError::procedure(self.name, e))?;
                Ok(id)
            }
            None => Ok(None),
        }
    }

    /// Execute a mutating procedure and return its affected-row count.
    pub async fn execute(&self, conn: &mut PgConnection) -> Result<u64, StoreError> {
        tracing::debug!(procedure = self.name, "Executing mutating procedure");
        let sql = self.scalar_sql();
        let row = self
            .bind_all(&sql)
            .fetch_one(conn)
            .await
            .map_err(|e| StoreError::procedure(self.name, e))?;

        let affected: Option<i32> = row
            .try_get(0)
            .map_err(|e| StoreError::procedure(self.name, e))?;
        Ok(affected.map_or(0, |n| n.max(0) as u64))
    }
}
