use std::sync::Arc;

use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, Responder, middleware, web};
use log::info;

use shuttle::postgres_tools::make_async_pool;

mod route_api;

async fn index(_req: HttpRequest) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Content-Type", "text/plain"))
        .body("Campus shuttle route API")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let pool = Arc::new(
        make_async_pool()
            .await
            .expect("could not connect to postgres"),
    );

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("127.0.0.1:8080"));
    info!("listening on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*")))
            .wrap(middleware::Compress::default())
            .app_data(web::Data::new(Arc::clone(&pool)))
            .route("/", web::get().to(index))
            .service(route_api::all_routes)
            .service(route_api::all_route_names)
            .service(route_api::route_by_id)
    })
    .bind(bind_addr)?
    .run()
    .await
}
