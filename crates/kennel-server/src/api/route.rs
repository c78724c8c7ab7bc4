use actix_web::{Scope, web};

use super::{breed, dog, health};

pub fn breed_routes() -> Scope {
    web::scope("/breeds")
        .service(
            web::resource("/")
                .route(web::get().to(breed::list))
                .route(web::post().to(breed::create)),
        )
        .service(
            web::resource("/{breed_id:[0-9]+}")
                .route(web::get().to(breed::retrieve))
                .route(web::put().to(breed::update))
                .route(web::delete().to(breed::destroy)),
        )
}

pub fn dog_routes() -> Scope {
    web::scope("/dogs")
        .service(
            web::resource("/")
                .route(web::get().to(dog::list))
                .route(web::post().to(dog::create)),
        )
        .service(
            web::resource("/{dog_id:[0-9]+}")
                .route(web::get().to(dog::retrieve))
                .route(web::put().to(dog::update))
                .route(web::delete().to(dog::destroy)),
        )
}

pub fn health_routes() -> Scope {
    web::scope("/health")
        .route("/liveness", web::get().to(health::liveness))
        .route("/readiness", web::get().to(health::readiness))
}

/// Breed and dog routes under the configured context path
pub fn routes(context_path: &str) -> Scope {
    web::scope(context_path)
        .service(breed_routes())
        .service(dog_routes())
}
