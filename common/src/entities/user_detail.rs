// User detail entity adapter

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::db::procedure::ProcArg;
use crate::db::{Entity, Latest, Procedures};
use crate::validation::{FieldError, Validator};

/// Profile record joining a user to a user type and a restaurant.
/// `user_id` is a string here; the source schema stores it that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDetail {
    pub id: i32,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub phone: String,
    pub email: String,
    pub user_types_id: i32,
    pub restaurant_id: i32,
    pub is_active: bool,
}

impl Default for UserDetail {
    fn default() -> Self {
        Self {
            id: 0,
            user_id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            address1: String::new(),
            phone: String::new(),
            email: String::new(),
            user_types_id: 0,
            restaurant_id: 0,
            is_active: true,
        }
    }
}

impl Entity for UserDetail {
    const NAME: &'static str = "user detail";
    const TITLE: &'static str = "User detail";
    const PROCEDURES: Procedures = Procedures {
        list: "sp_get_all_user_details",
        get_by_id: "sp_get_user_detail_by_id",
        insert: "sp_insert_user_details",
        update: "sp_update_user_details",
        delete: "sp_delete_user_details",
        latest: Latest::None,
    };

    fn id(&self) -> i32 {
        self.id
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.required("userId", &self.user_id)
            .required("firstName", &self.first_name)
            .required("lastName", &self.last_name)
            .required("address1", &self.address1)
            .required("phone", &self.phone)
            .phone("phone", &self.phone)
            .required("email", &self.email)
            .email("email", &self.email);
        v.finish()
    }

    fn insert_params(&self) -> Vec<(&'static str, ProcArg)> {
        vec![
            ("user_id", ProcArg::text(&self.user_id)),
            ("first_name", ProcArg::text(&self.first_name)),
            ("last_name", ProcArg::text(&self.last_name)),
            ("address1", ProcArg::text(&self.address1)),
            ("phone", ProcArg::text(&self.phone)),
            ("email", ProcArg::text(&self.email)),
            ("user_types_id", ProcArg::int(self.user_types_id)),
            ("restaurant_id", ProcArg::int(self.restaurant_id)),
            ("is_active", ProcArg::boolean(self.is_active)),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row
                .try_get::<Option<String>, _>("user_id")?
                .unwrap_or_default(),
            first_name: row
                .try_get::<Option<String>, _>("first_name")?
                .unwrap_or_default(),
            last_name: row
                .try_get::<Option<String>, _>("last_name")?
                .unwrap_or_default(),
            address1: row
                .try_get::<Option<String>, _>("address1")?
                .unwrap_or_default(),
            phone: row
                .try_get::<Option<String>, _>("phone")?
                .unwrap_or_default(),
            email: row
                .try_get::<Option<String>, _>("email")?
                .unwrap_or_default(),
            user_types_id: row.try_get::<Option<i32>, _>("user_types_id")?.unwrap_or(0),
            restaurant_id: row.try_get::<Option<i32>, _>("restaurant_id")?.unwrap_or(0),
            is_active: row.try_get::<Option<bool>, _>("is_active")?.unwrap_or(false),
        })
    }
}
