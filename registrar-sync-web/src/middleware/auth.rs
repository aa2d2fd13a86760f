//! Bearer token 中间件
//!
//! Every route sits behind this check. CORS preflight (`OPTIONS`) is passed
//! through untouched; anything else without a valid token gets a 401.

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::error::ErrorInternalServerError;
use actix_web::http::Method;
use actix_web::http::header::AUTHORIZATION;
use actix_web::middleware::Next;
use actix_web::{Error, HttpMessage, ResponseError, web};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn require_bearer<B: MessageBody + 'static>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    if req.method() == Method::OPTIONS {
        return next.call(req).await.map(ServiceResponse::map_into_left_body);
    }

    let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
        tracing::error!("AppState missing from app data");
        return Err(ErrorInternalServerError("application state missing"));
    };

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match state.verifier.verify_header(header).await {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.call(req).await.map(ServiceResponse::map_into_left_body)
        }
        Err(e) => {
            let response = ApiError::from(e).error_response();
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}
