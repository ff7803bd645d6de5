// Restaurant table entity adapter

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::db::procedure::ProcArg;
use crate::db::{Entity, Latest, Procedures};
use crate::validation::{FieldError, Validator};

/// A physical table; `status` tracks values like "Available",
/// "Occupied" or "Reserved".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RestaurantTable {
    pub id: i32,
    pub table_number: i32,
    pub capacity: i32,
    pub status: String,
}

impl Entity for RestaurantTable {
    const NAME: &'static str = "table";
    const TITLE: &'static str = "Table";
    const PROCEDURES: Procedures = Procedures {
        list: "sp_get_all_restaurant_tables",
        get_by_id: "sp_get_restaurant_table_by_id",
        insert: "sp_insert_restaurant_tables",
        update: "sp_update_restaurant_table",
        delete: "sp_delete_restaurant_table",
        latest: Latest::Row("sp_get_latest_restaurant_table_id"),
    };

    fn id(&self) -> i32 {
        self.id
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.range("capacity", self.capacity, 1, 100)
            .required("status", &self.status)
            .max_len("status", &self.status, 50);
        v.finish()
    }

    fn insert_params(&self) -> Vec<(&'static str, ProcArg)> {
        vec![
            ("table_number", ProcArg::int(self.table_number)),
            ("capacity", ProcArg::int(self.capacity)),
            ("status", ProcArg::text(&self.status)),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            table_number: row.try_get::<Option<i32>, _>("table_number")?.unwrap_or(0),
            capacity: row.try_get::<Option<i32>, _>("capacity")?.unwrap_or(0),
            status: row
                .try_get::<Option<String>, _>("status")?
                .unwrap_or_default(),
        })
    }
}
