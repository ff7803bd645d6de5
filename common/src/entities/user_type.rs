// User type entity adapter

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::db::procedure::ProcArg;
use crate::db::{Entity, Latest, Procedures};
use crate::validation::{FieldError, Validator};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserType {
    pub id: i32,
    pub types: String,
}

impl Entity for UserType {
    const NAME: &'static str = "user type";
    const TITLE: &'static str = "User type";
    const PROCEDURES: Procedures = Procedures {
        list: "sp_get_all_user_types",
        get_by_id: "sp_get_user_type_by_id",
        insert: "sp_insert_user_type",
        update: "sp_update_user_type",
        delete: "sp_delete_user_type",
        latest: Latest::Row("sp_get_latest_user_types"),
    };

    fn id(&self) -> i32 {
        self.id
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.required("types", &self.types)
            .max_len("types", &self.types, 50);
        v.finish()
    }

    fn insert_params(&self) -> Vec<(&'static str, ProcArg)> {
        vec![("types", ProcArg::text(&self.types))]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            types: row
                .try_get::<Option<String>, _>("types")?
                .unwrap_or_default(),
        })
    }
}
