//! `POST /{name}` dispatch
//!
//! Unknown names are rejected before the body is looked at. The identity claim
//! comes from the `Authorization` header only.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::functions::{
    parse_request_body, CallableContext, CallableError, FunctionRegistry, IdentityClaim,
};
use crate::utils::logging::LoggingHelper;
use crate::utils::responses::ResponseBuilder;

/// Invoke the callable named in the path
pub async fn invoke_callable(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
    registry: web::Data<FunctionRegistry>,
) -> HttpResponse {
    let name = path.into_inner();

    if !registry.contains(&name) {
        let error = CallableError::NotFound(name);
        log::warn!("{error}");
        return ResponseBuilder::callable_error(&error);
    }

    let Ok(data) = parse_request_body(&body) else {
        LoggingHelper::log_bad_envelope(&name);
        return ResponseBuilder::bad_request();
    };

    let context = CallableContext::new(IdentityClaim::from_request(&req), data);
    LoggingHelper::log_invocation_start(&name, context.invocation_id, context.auth.as_ref());

    match registry.invoke(&name, &context).await {
        Ok(result) => {
            LoggingHelper::log_invocation_complete(&name, context.invocation_id, &result);
            ResponseBuilder::callable_result(&result)
        }
        Err(error) => {
            LoggingHelper::log_invocation_rejected(&name, context.invocation_id, &error);
            ResponseBuilder::callable_error(&error)
        }
    }
}
