use axum::Router;
use registry::AppRegistry;

use super::{reservation::build_reservation_routers, space::build_space_routers};

pub fn routes() -> Router<AppRegistry> {
    let routers = Router::new()
        .merge(build_space_routers())
        .merge(build_reservation_routers());

    Router::new().nest("/api/v1", routers)
}
