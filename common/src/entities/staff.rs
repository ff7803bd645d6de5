// Staff entity adapter

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::db::procedure::ProcArg;
use crate::db::{Entity, Latest, Procedures};
use crate::validation::FieldError;

/// A staff member, linked to a user-detail record. This entity declares
/// no field constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Staff {
    pub id: i32,
    pub user_details_id: i32,
    pub salary: Decimal,
    pub hire_date: Option<DateTime<Utc>>,
}

impl Entity for Staff {
    const NAME: &'static str = "staff";
    const TITLE: &'static str = "Staff";
    const PROCEDURES: Procedures = Procedures {
        list: "sp_get_all_staff",
        get_by_id: "sp_get_staff_by_id",
        insert: "sp_insert_staffs",
        update: "sp_update_staff",
        delete: "sp_delete_staff",
        // The latest record takes two calls: the identifier procedure,
        // then the get-by-id procedure.
        latest: Latest::IdThenFetch("sp_get_latest_staff_id"),
    };

    fn id(&self) -> i32 {
        self.id
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Ok(())
    }

    fn insert_params(&self) -> Vec<(&'static str, ProcArg)> {
        vec![
            ("user_details_id", ProcArg::int(self.user_details_id)),
            ("salary", ProcArg::decimal(self.salary)),
            ("hire_date", ProcArg::opt_timestamp(self.hire_date)),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_details_id: row
                .try_get::<Option<i32>, _>("user_details_id")?
                .unwrap_or(0),
            salary: row
                .try_get::<Option<Decimal>, _>("salary")?
                .unwrap_or(Decimal::ZERO),
            hire_date: row.try_get("hire_date")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_has_no_constraints() {
        assert!(Staff::default().validate().is_ok());
    }

    #[test]
    fn test_absent_hire_date_binds_null() {
        let staff = Staff::default();
        let params = staff.insert_params();
        assert_eq!(params[2], ("hire_date", ProcArg::Timestamp(None)));
    }

    #[test]
    fn test_latest_is_two_step() {
        assert_eq!(
            Staff::PROCEDURES.latest,
            Latest::IdThenFetch("sp_get_latest_staff_id")
        );
    }
}
