use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest("/hearings", hearing_routes())
}

fn hearing_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::hearing::create_hearing,
            handlers::hearing::list_hearings
        ))
        .routes(routes!(handlers::hearing::get_hearing))
        .nest("/{id}/alternatives", alternative_routes())
}

fn alternative_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::alternative::create_alternative,
            handlers::alternative::list_alternatives
        ))
        .routes(routes!(handlers::alternative::reorder_alternatives))
        .routes(routes!(handlers::alternative::delete_alternative))
}
