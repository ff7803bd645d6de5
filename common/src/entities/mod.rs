// Entity adapters
//
// One module per resource type. Each adapter is a declarative binding
// table: procedure names, parameter bindings in procedure order, the
// column-to-field mapping with its nullability rules, and the field
// constraint list. The operations themselves live in `db::crud`.

pub mod customer;
pub mod menu_category;
pub mod menu_item;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod restaurant;
pub mod restaurant_table;
pub mod staff;
pub mod user;
pub mod user_detail;
pub mod user_type;

pub use customer::Customer;
pub use menu_category::MenuCategory;
pub use menu_item::MenuItem;
pub use order::Order;
pub use order_item::OrderItem;
pub use payment::Payment;
pub use restaurant::Restaurant;
pub use restaurant_table::RestaurantTable;
pub use staff::Staff;
pub use user::User;
pub use user_detail::UserDetail;
pub use user_type::UserType;
