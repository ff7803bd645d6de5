// Order entity adapter

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::db::procedure::ProcArg;
use crate::db::{Entity, Latest, Procedures};
use crate::validation::{FieldError, Validator};

/// A dine-in order. `order_date` is assigned by the store on insert and
/// is never bound as a parameter; it only comes back on reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub table_id: i32,
    pub staff_id: i32,
    pub order_date: Option<DateTime<Utc>>,
    pub status: String,
}

impl Entity for Order {
    const NAME: &'static str = "order";
    const TITLE: &'static str = "Order";
    const PROCEDURES: Procedures = Procedures {
        list: "sp_get_all_orders",
        get_by_id: "sp_get_order_by_id",
        insert: "sp_insert_orders",
        update: "sp_update_order",
        delete: "sp_delete_order",
        latest: Latest::RowBy("sp_get_latest_order_by_customer_id", "customerId"),
    };

    fn id(&self) -> i32 {
        self.id
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.required("status", &self.status);
        v.finish()
    }

    fn insert_params(&self) -> Vec<(&'static str, ProcArg)> {
        vec![
            ("customer_id", ProcArg::int(self.customer_id)),
            ("table_id", ProcArg::int(self.table_id)),
            ("staff_id", ProcArg::int(self.staff_id)),
            ("status", ProcArg::text(&self.status)),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            customer_id: row.try_get::<Option<i32>, _>("customer_id")?.unwrap_or(0),
            table_id: row.try_get::<Option<i32>, _>("table_id")?.unwrap_or(0),
            staff_id: row.try_get::<Option<i32>, _>("staff_id")?.unwrap_or(0),
            order_date: row.try_get("order_date")?,
            status: row
                .try_get::<Option<String>, _>("status")?
                .unwrap_or_default(),
        })
    }
}
