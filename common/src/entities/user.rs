// User entity adapter

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::db::procedure::ProcArg;
use crate::db::{Entity, Latest, Procedures};
use crate::validation::{FieldError, Validator};

/// A login account. The password hash is stored exactly as supplied;
/// this layer never derives or verifies it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: i32,
    pub user_id: i32,
    pub phone: String,
    pub email: String,
    pub password_hash: String,
}

impl Entity for User {
    const NAME: &'static str = "user";
    const TITLE: &'static str = "User";
    const PROCEDURES: Procedures = Procedures {
        list: "sp_get_all_users",
        get_by_id: "sp_get_user_by_id",
        insert: "sp_insert_user",
        update: "sp_update_users",
        delete: "sp_delete_user",
        latest: Latest::RowBy("sp_get_latest_users_id", "userId"),
    };

    fn id(&self) -> i32 {
        self.id
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.required("phone", &self.phone)
            .phone("phone", &self.phone)
            .required("email", &self.email)
            .email("email", &self.email)
            .required("passwordHash", &self.password_hash);
        v.finish()
    }

    fn insert_params(&self) -> Vec<(&'static str, ProcArg)> {
        vec![
            ("user_id", ProcArg::int(self.user_id)),
            ("phone", ProcArg::text(&self.phone)),
            ("email", ProcArg::text(&self.email)),
            ("password_hash", ProcArg::text(&self.password_hash)),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get::<Option<i32>, _>("user_id")?.unwrap_or(0),
            phone: row
                .try_get::<Option<String>, _>("phone")?
                .unwrap_or_default(),
            email: row
                .try_get::<Option<String>, _>("email")?
                .unwrap_or_default(),
            password_hash: row
                .try_get::<Option<String>, _>("password_hash")?
                .unwrap_or_default(),
        })
    }
}
