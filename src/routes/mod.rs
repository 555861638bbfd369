use actix_web::web::{self, ServiceConfig};

use crate::handlers;

pub fn config(cfg: &mut ServiceConfig) {
    cfg.service(web::scope("/health").route("", web::get().to(handlers::health::ping)))
        .service(
            web::scope("/dishes")
                .route("", web::get().to(handlers::dishes::list_dishes))
                .route("", web::post().to(handlers::dishes::create_dish))
                .route("/{id}", web::get().to(handlers::dishes::get_dish))
                .route("/{id}", web::put().to(handlers::dishes::update_dish))
                .route("/{id}", web::delete().to(handlers::dishes::delete_dish)),
        )
        .service(
            web::scope("/orders")
                .route("", web::get().to(handlers::orders::list_orders))
                .route("", web::post().to(handlers::orders::create_order))
                .route("/{id}", web::get().to(handlers::orders::get_order))
                .route("/{id}", web::put().to(handlers::orders::update_order))
                .route("/{id}", web::delete().to(handlers::orders::delete_order)),
        );
}
