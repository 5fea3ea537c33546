use axum::{Router, routing::post};
use crate::{AppState, controllers::pickup_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/pickup", post(pickup_controller::post_pickup))
}
