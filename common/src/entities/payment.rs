// Payment entity adapter

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::db::procedure::ProcArg;
use crate::db::{Entity, Latest, Procedures};
use crate::validation::{FieldError, Validator};

/// A settled payment against an order.
///
/// The insert procedure stamps the payment date store-side, so it is
/// not an insert parameter; the update procedure does take it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    pub id: i32,
    pub order_id: i32,
    pub customer_id: i32,
    pub amount: Decimal,
    pub payment_type: String,
    pub payment_date: Option<DateTime<Utc>>,
}

impl Entity for Payment {
    const NAME: &'static str = "payment";
    const TITLE: &'static str = "Payment";
    const PROCEDURES: Procedures = Procedures {
        list: "sp_get_all_payments",
        get_by_id: "sp_get_payment_by_id",
        insert: "sp_insert_payment",
        update: "sp_update_payment",
        delete: "sp_delete_payment",
        latest: Latest::Row("sp_get_latest_payment_id"),
    };

    fn id(&self) -> i32 {
        self.id
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.positive_decimal("amount", self.amount)
            .required("paymentType", &self.payment_type)
            .max_len("paymentType", &self.payment_type, 50)
            .required_some("paymentDate", &self.payment_date);
        v.finish()
    }

    fn insert_params(&self) -> Vec<(&'static str, ProcArg)> {
        vec![
            ("order_id", ProcArg::int(self.order_id)),
            ("customer_id", ProcArg::int(self.customer_id)),
            ("amount", ProcArg::decimal(self.amount)),
            ("payment_type", ProcArg::text(&self.payment_type)),
        ]
    }

    fn update_params(&self) -> Vec<(&'static str, ProcArg)> {
        vec![
            ("id", ProcArg::int(self.id)),
            ("order_id", ProcArg::int(self.order_id)),
            ("customer_id", ProcArg::int(self.customer_id)),
            ("amount", ProcArg::decimal(self.amount)),
            ("payment_type", ProcArg::text(&self.payment_type)),
            ("payment_date", ProcArg::opt_timestamp(self.payment_date)),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            order_id: row.try_get::<Option<i32>, _>("order_id")?.unwrap_or(0),
            customer_id: row.try_get::<Option<i32>, _>("customer_id")?.unwrap_or(0),
            amount: row
                .try_get::<Option<Decimal>, _>("amount")?
                .unwrap_or(Decimal::ZERO),
            payment_type: row
                .try_get::<Option<String>, _>("payment_type")?
                .unwrap_or_default(),
            payment_date: row.try_get("payment_date")?,
        })
    }
}
