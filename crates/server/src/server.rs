use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, Error as AxumError, Header, authorization::Basic},
};

use std::sync::Arc;

use crate::{account, transfer, user};
use engine::Engine;

static ADMIN_KEY_HEADER: axum::http::HeaderName =
    axum::http::HeaderName::from_static("x-security-admin-key");

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    /// Value expected in the `X-SECURITY-ADMIN-KEY` header. An empty token
    /// disables the admin routes.
    pub admin_token: Arc<str>,
}

/// `TypedHeader` for the administrator key.
///
/// Admin requests must contain the "x-security-admin-key" entry in the header.
#[derive(Debug)]
struct AdminKeyHeader(String);

impl Header for AdminKeyHeader {
    fn name() -> &'static axum::http::HeaderName {
        &ADMIN_KEY_HEADER
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, AxumError>
    where
        Self: Sized,
        I: Iterator<Item = &'i axum::http::HeaderValue>,
    {
        let value = values.next().ok_or_else(AxumError::invalid)?;
        let Ok(value) = value.to_str() else {
            return Err(AxumError::invalid());
        };

        Ok(AdminKeyHeader(value.to_string()))
    }

    fn encode<E: Extend<axum::http::HeaderValue>>(&self, values: &mut E) {
        match axum::http::HeaderValue::from_str(&self.0) {
            Ok(value) => values.extend(std::iter::once(value)),
            Err(_) => tracing::error!("failed to encode x-security-admin-key header"),
        }
    }
}

/// Authenticate a banking user with HTTP Basic credentials.
///
/// The admin key identifies an operator, not an account holder, so it is
/// refused on these routes.
async fn auth(
    admin_header: Option<TypedHeader<AdminKeyHeader>>,
    auth_header: Option<TypedHeader<Authorization<Basic>>>,
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if admin_header.is_some() {
        return Err(StatusCode::FORBIDDEN);
    }
    let Some(TypedHeader(auth_header)) = auth_header else {
        return Err(StatusCode::UNAUTHORIZED);
    };
    if auth_header.username().is_empty() || auth_header.password().is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let user = state
        .engine
        .authenticate(auth_header.username(), auth_header.password())
        .await
        .map_err(|err| {
            tracing::error!("failed to authenticate user: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

async fn admin_auth(
    admin_header: Option<TypedHeader<AdminKeyHeader>>,
    State(state): State<ServerState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(TypedHeader(AdminKeyHeader(key))) = admin_header else {
        return Err(StatusCode::UNAUTHORIZED);
    };
    if state.admin_token.is_empty() || key != *state.admin_token {
        tracing::warn!("rejected admin request with a wrong key");
        return Err(StatusCode::FORBIDDEN);
    }

    Ok(next.run(request).await)
}

/// Build the API router.
pub fn router(state: ServerState) -> Router {
    let banking = Router::new()
        .route("/account/{id}", get(account::get))
        .route("/account/deposit/{id}", post(account::deposit))
        .route("/account/withdraw/{id}", post(account::withdraw))
        .route("/transfer", post(transfer::transfer))
        .route("/user/me", get(user::me))
        .route("/user/list", get(user::list))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth));

    let admin = Router::new()
        .route("/user/", post(user::user_new))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_auth));

    banking.merge(admin).with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    admin_token: String,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
        admin_token: admin_token.into(),
    };

    axum::serve(listener, router(state)).await
}
