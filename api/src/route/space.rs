use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::space::{reconcile_space, register_space, show_space, show_space_list};

pub fn build_space_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_space_list).post(register_space))
        .route("/:space_id", get(show_space))
        .route("/:space_id/reconcile", post(reconcile_space));

    Router::new().nest("/spaces", routers)
}
