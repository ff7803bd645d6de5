// Customer entity adapter

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::db::procedure::ProcArg;
use crate::db::{Entity, Latest, Procedures};
use crate::validation::{FieldError, Validator};

/// A loyalty-program customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub loyalty_points: i32,
    pub is_active: bool,
}

impl Entity for Customer {
    const NAME: &'static str = "customer";
    const TITLE: &'static str = "Customer";
    const PROCEDURES: Procedures = Procedures {
        list: "sp_get_all_customers",
        get_by_id: "sp_get_customer_by_id",
        insert: "sp_insert_customer",
        update: "sp_update_customer",
        delete: "sp_delete_customer",
        // The latest procedure yields only the identifier; the row is
        // never fetched.
        latest: Latest::IdOnly("sp_get_customer_latest_id"),
    };

    fn id(&self) -> i32 {
        self.id
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.required("firstName", &self.first_name)
            .max_len("firstName", &self.first_name, 50)
            .required("lastName", &self.last_name)
            .max_len("lastName", &self.last_name, 50)
            .required("phone", &self.phone)
            .phone("phone", &self.phone)
            .required("email", &self.email)
            .email("email", &self.email)
            .required("address", &self.address)
            .max_len("address", &self.address, 255);
        v.finish()
    }

    fn insert_params(&self) -> Vec<(&'static str, ProcArg)> {
        vec![
            ("first_name", ProcArg::text(&self.first_name)),
            ("last_name", ProcArg::text(&self.last_name)),
            ("phone", ProcArg::text(&self.phone)),
            ("email", ProcArg::text(&self.email)),
            ("address", ProcArg::text(&self.address)),
            ("loyalty_points", ProcArg::int(self.loyalty_points)),
            ("is_active", ProcArg::boolean(self.is_active)),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            first_name: row.try_get::<Option<String>, _>("first_name")?.unwrap_or_default(),
            last_name: row.try_get::<Option<String>, _>("last_name")?.unwrap_or_default(),
            phone: row.try_get::<Option<String>, _>("phone")?.unwrap_or_default(),
            email: row.try_get::<Option<String>, _>("email")?.unwrap_or_default(),
            address: row.try_get::<Option<String>, _>("address")?.unwrap_or_default(),
            loyalty_points: row.try_get::<Option<i32>, _>("loyalty_points")?.unwrap_or(0),
            is_active: row.try_get::<Option<bool>, _>("is_active")?.unwrap_or(false),
        })
    }
}
