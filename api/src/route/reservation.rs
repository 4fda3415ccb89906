use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{
    cancel_reservation, checkout_reservation, register_reservation, show_active_reservation,
    show_reservation, show_reservation_details, show_reservation_list, update_reservation,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservation_routers = Router::new()
        .route("/", get(show_reservation_list).post(register_reservation))
        .route("/full", get(show_reservation_details))
        .route(
            "/:reservation_id",
            get(show_reservation)
                .put(update_reservation)
                .delete(cancel_reservation),
        )
        .route("/:reservation_id/checkout", put(checkout_reservation));

    let user_routers = Router::new().route(
        "/:user_id/reservations/active",
        get(show_active_reservation),
    );

    Router::new()
        .nest("/reservations", reservation_routers)
        .nest("/users", user_routers)
}
