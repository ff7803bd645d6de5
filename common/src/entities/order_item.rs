// Order item entity adapter

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::db::procedure::ProcArg;
use crate::db::{Entity, Latest, Procedures};
use crate::validation::{FieldError, Validator};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    pub item_price: Decimal,
}

impl Entity for OrderItem {
    const NAME: &'static str = "order item";
    const TITLE: &'static str = "Order item";
    const PROCEDURES: Procedures = Procedures {
        list: "sp_get_all_order_items",
        get_by_id: "sp_get_order_item_by_id",
        insert: "sp_insert_order_item",
        update: "sp_update_order_item",
        delete: "sp_delete_order_item",
        latest: Latest::RowBy("sp_get_latest_order_item_id", "orderId"),
    };

    fn id(&self) -> i32 {
        self.id
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.at_least("quantity", self.quantity, 1)
            .positive_decimal("itemPrice", self.item_price);
        v.finish()
    }

    fn insert_params(&self) -> Vec<(&'static str, ProcArg)> {
        vec![
            ("order_id", ProcArg::int(self.order_id)),
            ("menu_item_id", ProcArg::int(self.menu_item_id)),
            ("quantity", ProcArg::int(self.quantity)),
            ("item_price", ProcArg::decimal(self.item_price)),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            order_id: row.try_get::<Option<i32>, _>("order_id")?.unwrap_or(0),
            menu_item_id: row.try_get::<Option<i32>, _>("menu_item_id")?.unwrap_or(0),
            quantity: row.try_get::<Option<i32>, _>("quantity")?.unwrap_or(0),
            item_price: row
                .try_get::<Option<Decimal>, _>("item_price")?
                .unwrap_or(Decimal::ZERO),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_item() -> OrderItem {
        OrderItem {
            id: 0,
            order_id: 1,
            menu_item_id: 9,
            quantity: 2,
            item_price: Decimal::new(1250, 2),
        }
    }

    #[test]
    fn test_valid_item_passes() {
        assert!(valid_item().validate().is_ok());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut item = valid_item();
        item.quantity = 0;
        let errors = item.validate().unwrap_err();
        assert_eq!(errors[0].field, "quantity");
    }

    #[test]
    fn test_zero_price_rejected() {
        let mut item = valid_item();
        item.item_price = Decimal::ZERO;
        let errors = item.validate().unwrap_err();
        assert_eq!(errors[0].field, "itemPrice");
    }

    #[test]
    fn test_both_violations_collected() {
        let item = OrderItem::default();
        assert_eq!(item.validate().unwrap_err().len(), 2);
    }
}
