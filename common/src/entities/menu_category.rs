// Menu category entity adapter

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::db::procedure::ProcArg;
use crate::db::{Entity, Latest, Procedures};
use crate::validation::{FieldError, Validator};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuCategory {
    pub id: i32,
    pub category_name: String,
}

impl Entity for MenuCategory {
    const NAME: &'static str = "menu category";
    const TITLE: &'static str = "Menu category";
    const PROCEDURES: Procedures = Procedures {
        list: "sp_get_all_menu_categories",
        get_by_id: "sp_get_menu_category_by_id",
        insert: "sp_insert_menu_category",
        update: "sp_update_menu_category",
        delete: "sp_delete_menu_category",
        latest: Latest::Row("sp_get_latest_menu_category_id"),
    };

    fn id(&self) -> i32 {
        self.id
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.required("categoryName", &self.category_name);
        v.finish()
    }

    fn insert_params(&self) -> Vec<(&'static str, ProcArg)> {
        vec![("category_name", ProcArg::text(&self.category_name))]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            category_name: row
                .try_get::<Option<String>, _>("category_name")?
                .unwrap_or_default(),
        })
    }
}
