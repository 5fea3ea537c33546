use axum::Router;

use crate::{AppState, controllers::home_controller};

pub mod home_routes;
pub mod pickup_routes;

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = home_routes::add_routes(router);
    let router = pickup_routes::add_routes(router);

    router
        .fallback(home_controller::not_found)
        .with_state(state)
}
