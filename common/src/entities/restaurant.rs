// Restaurant entity adapter

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::db::procedure::ProcArg;
use crate::db::{Entity, Latest, Procedures};
use crate::validation::{FieldError, Validator};

/// A restaurant location. Everything except the name is optional;
/// absent values bind SQL NULL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Restaurant {
    pub id: i32,
    pub restaurant_name: String,
    pub location: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub opening_time: Option<NaiveTime>,
    pub closing_time: Option<NaiveTime>,
    pub is_active: bool,
}

impl Default for Restaurant {
    fn default() -> Self {
        Self {
            id: 0,
            restaurant_name: String::new(),
            location: None,
            contact_number: None,
            email: None,
            opening_time: None,
            closing_time: None,
            is_active: true,
        }
    }
}

impl Entity for Restaurant {
    const NAME: &'static str = "restaurant";
    const TITLE: &'static str = "Restaurant";
    const PROCEDURES: Procedures = Procedures {
        list: "sp_get_all_restaurants",
        get_by_id: "sp_get_restaurant_by_id",
        insert: "sp_insert_restaurant",
        update: "sp_update_restaurant",
        delete: "sp_delete_restaurant",
        latest: Latest::Row("sp_get_latest_restaurant"),
    };

    fn id(&self) -> i32 {
        self.id
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.required("restaurantName", &self.restaurant_name)
            .phone_opt("contactNumber", self.contact_number.as_deref())
            .email_opt("email", self.email.as_deref());
        v.finish()
    }

    fn insert_params(&self) -> Vec<(&'static str, ProcArg)> {
        vec![
            ("restaurant_name", ProcArg::text(&self.restaurant_name)),
            ("location", ProcArg::opt_text(self.location.as_deref())),
            (
                "contact_number",
                ProcArg::opt_text(self.contact_number.as_deref()),
            ),
            ("email", ProcArg::opt_text(self.email.as_deref())),
            ("opening_time", ProcArg::opt_time(self.opening_time)),
            ("closing_time", ProcArg::opt_time(self.closing_time)),
            ("is_active", ProcArg::boolean(self.is_active)),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            restaurant_name: row
                .try_get::<Option<String>, _>("restaurant_name")?
                .unwrap_or_default(),
            location: row.try_get("location")?,
            contact_number: row.try_get("contact_number")?,
            email: row.try_get("email")?,
            opening_time: row.try_get("opening_time")?,
            closing_time: row.try_get("closing_time")?,
            is_active: row.try_get::<Option<bool>, _>("is_active")?.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_restaurant() -> Restaurant {
        Restaurant {
            restaurant_name: "Pho Corner".to_string(),
            location: Some("12 Tran Hung Dao".to_string()),
            contact_number: Some("+84123456789".to_string()),
            email: Some("hello@phocorner.vn".to_string()),
            opening_time: NaiveTime::from_hms_opt(8, 0, 0),
            closing_time: NaiveTime::from_hms_opt(22, 0, 0),
            ..Restaurant::default()
        }
    }

    #[test]
    fn test_valid_restaurant_passes() {
        assert!(valid_restaurant().validate().is_ok());
    }

    #[test]
    fn test_name_is_the_only_required_field() {
        let restaurant = Restaurant::default();
        let errors = restaurant.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "restaurantName");
    }

    #[test]
    fn test_optional_contact_validated_when_present() {
        let mut restaurant = valid_restaurant();
        restaurant.contact_number = Some("abc".to_string());
        let errors = restaurant.validate().unwrap_err();
        assert_eq!(errors[0].field, "contactNumber");
    }

    #[test]
    fn test_absent_times_bind_null() {
        let mut restaurant = valid_restaurant();
        restaurant.opening_time = None;
        restaurant.closing_time = None;
        let params = restaurant.insert_params();
        assert_eq!(params[4], ("opening_time", ProcArg::Time(None)));
        assert_eq!(params[5], ("closing_time", ProcArg::Time(None)));
    }

    #[test]
    fn test_active_defaults_to_true() {
        let restaurant: Restaurant =
            serde_json::from_str(r#"{"restaurantName":"Pho Corner"}"#).unwrap();
        assert!(restaurant.is_active);
    }
}
