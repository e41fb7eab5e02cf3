use api_types::ErrorResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

pub use server::{router, run_with_listener, spawn_with_listener};

mod ledger;
mod middleware;
mod server;

/// Generic message for failures whose details stay in the server log.
const INTERNAL_ERROR: &str = "Something went wrong!";

pub enum ServerError {
    /// Engine failure; `context` is what the client sees if it is not a
    /// validation error.
    Engine {
        err: EngineError,
        context: &'static str,
    },
    Generic(String),
    NotFound,
}

impl ServerError {
    pub fn engine(err: EngineError, context: &'static str) -> Self {
        Self::Engine { err, context }
    }
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::InvalidAmount(_)
        | EngineError::InvalidMethod(_)
        | EngineError::MissingField => StatusCode::BAD_REQUEST,
        EngineError::Overflow(_) | EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError, context: &str) -> String {
    if err.is_validation() {
        return err.to_string();
    }
    tracing::error!("{context}: {err}");
    context.to_string()
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine { err, context } => (
                status_for_engine_error(&err),
                message_for_engine_error(err, context),
            ),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
            ServerError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::engine(value, INTERNAL_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    fn store_error(message: &str) -> EngineError {
        EngineError::Database(DbErr::Custom(message.to_string()))
    }

    #[test]
    fn validation_errors_map_to_400() {
        for err in [
            EngineError::InvalidAmount("x".to_string()),
            EngineError::InvalidMethod("x".to_string()),
            EngineError::MissingField,
        ] {
            let res = ServerError::from(err).into_response();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn store_errors_map_to_500() {
        let res = ServerError::engine(store_error("boom"), "Unable to fetch balance")
            .into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let res = ServerError::from(EngineError::Overflow("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn store_error_message_hides_the_cause() {
        let message =
            message_for_engine_error(store_error("secret dsn"), "Unable to add savings");
        assert_eq!(message, "Unable to add savings");
    }

    #[test]
    fn generic_maps_to_400_and_not_found_to_404() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let res = ServerError::NotFound.into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
