use axum::{routing::get, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use common::db::Entity;
use common::entities::{
    Customer, MenuCategory, MenuItem, Order, OrderItem, Payment, Restaurant, RestaurantTable,
    Staff, User, UserDetail, UserType,
};

use crate::handlers::{self, crud};
use crate::middleware::auth_middleware;
use crate::state::AppState;

/// The uniform verb mapping shared by every entity. Latest routes vary
/// per entity and are added at the call site.
fn entity_routes<E>() -> Router<AppState>
where
    E: Entity + Serialize + DeserializeOwned,
{
    Router::new()
        .route("/", get(crud::list::<E>).post(crud::insert::<E>))
        .route(
            "/:id",
            get(crud::get_by_id::<E>)
                .put(crud::update::<E>)
                .delete(crud::delete::<E>),
        )
}

/// Create the main application router with all routes and middleware
#[tracing::instrument(skip(state))]
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no authentication required)
    let public_routes = Router::new().route("/health", get(handlers::health::health_check));

    // Protected routes (authentication required)
    let protected_routes = Router::new()
        .nest(
            "/api/customers",
            entity_routes::<Customer>().route("/latestid", get(crud::latest_id::<Customer>)),
        )
        .nest(
            "/api/menucategories",
            entity_routes::<MenuCategory>().route("/latestid", get(crud::latest::<MenuCategory>)),
        )
        .nest(
            "/api/menuitems",
            entity_routes::<MenuItem>().route("/latest", get(crud::latest::<MenuItem>)),
        )
        .nest(
            "/api/orders",
            entity_routes::<Order>().route("/latest/:customerId", get(crud::latest_by::<Order>)),
        )
        .nest(
            "/api/orderitems",
            entity_routes::<OrderItem>().route("/latest/:orderId", get(crud::latest_by::<OrderItem>)),
        )
        .nest(
            "/api/payments",
            entity_routes::<Payment>().route("/latest", get(crud::latest::<Payment>)),
        )
        .nest(
            "/api/restaurants",
            entity_routes::<Restaurant>().route("/latest", get(crud::latest::<Restaurant>)),
        )
        .nest(
            "/api/restauranttables",
            entity_routes::<RestaurantTable>()
                .route("/latest", get(crud::latest::<RestaurantTable>)),
        )
        .nest(
            "/api/staffs",
            entity_routes::<Staff>().route("/latest", get(crud::latest::<Staff>)),
        )
        .nest(
            "/api/users",
            entity_routes::<User>().route("/latestuser/:userId", get(crud::latest_by::<User>)),
        )
        .nest(
            "/api/usertypes",
            entity_routes::<UserType>().route("/latest", get(crud::latest::<UserType>)),
        )
        .nest("/api/userdetails", entity_routes::<UserDetail>())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
        .with_state(state)
}
