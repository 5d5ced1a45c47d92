use crate::error::ApiError;
use crate::handlers;
use actix_web::web;

/// JSON extractor settings shared by every body-carrying route. A body with
/// no Content-Type is decoded as JSON; an explicit non-JSON type is refused.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .error_handler(|err, _req| {
            let api_err = ApiError::from_json_payload(&err);
            log::warn!("Rejected request body: {api_err}");
            api_err.into()
        })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/status").route(web::get().to(handlers::status)))
        .service(web::resource("/analyze").route(web::post().to(handlers::analyze)))
        .service(web::resource("/autocomplete").route(web::post().to(handlers::autocomplete)))
        .default_service(web::to(handlers::not_found));
}
