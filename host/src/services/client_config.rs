use actix_web::web::{get, resource, Data};
use actix_web::{HttpResponse, Resource, Responder};
use common::config::{ClientConfig, CLIENT_CONFIG_PATH};

/// Registers `GET /config.json`. The handler expects a `Data<ClientConfig>`
/// in the application state.
pub fn configure_routes() -> Resource {
    resource(CLIENT_CONFIG_PATH).route(get().to(process))
}

pub async fn process(config: Data<ClientConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn serves_injected_backend_origin() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(ClientConfig::new("http://backend:5000/")))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/config.json").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, serde_json::json!({ "backend_origin": "http://backend:5000" }));
    }

    #[actix_web::test]
    async fn rejects_other_methods() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(ClientConfig::default()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post().uri("/config.json").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::METHOD_NOT_ALLOWED);
    }
}
