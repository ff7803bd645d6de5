// Menu item entity adapter

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::db::procedure::ProcArg;
use crate::db::{Entity, Latest, Procedures};
use crate::validation::{FieldError, Validator};

/// One sellable item on the menu. `description` is the only nullable
/// column; a missing description binds SQL NULL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: i32,
    pub is_available: bool,
}

impl Default for MenuItem {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            description: None,
            price: Decimal::ZERO,
            category_id: 0,
            is_available: true,
        }
    }
}

impl Entity for MenuItem {
    const NAME: &'static str = "menu item";
    const TITLE: &'static str = "Menu item";
    const PROCEDURES: Procedures = Procedures {
        list: "sp_get_all_menu_items",
        get_by_id: "sp_get_menu_item_by_id",
        insert: "sp_insert_menu_item",
        update: "sp_update_menu_item",
        delete: "sp_delete_menu_item",
        latest: Latest::Row("sp_get_latest_menu_items"),
    };

    fn id(&self) -> i32 {
        self.id
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.required("name", &self.name).decimal_range(
            "price",
            self.price,
            Decimal::new(1, 2),
            Decimal::new(9_999_999, 2),
        );
        v.finish()
    }

    fn insert_params(&self) -> Vec<(&'static str, ProcArg)> {
        vec![
            ("name", ProcArg::text(&self.name)),
            ("description", ProcArg::opt_text(self.description.as_deref())),
            ("price", ProcArg::decimal(self.price)),
            ("category_id", ProcArg::int(self.category_id)),
            ("is_available", ProcArg::boolean(self.is_available)),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get::<Option<String>, _>("name")?.unwrap_or_default(),
            description: row.try_get("description")?,
            price: row
                .try_get::<Option<Decimal>, _>("price")?
                .unwrap_or(Decimal::ZERO),
            category_id: row.try_get::<Option<i32>, _>("category_id")?.unwrap_or(0),
            is_available: row
                .try_get::<Option<bool>, _>("is_available")?
                .unwrap_or(false),
        })
    }
}
