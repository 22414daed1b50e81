//! HTTP handlers and route configuration.

mod auth;
mod doctors;
mod health;
mod patients;
mod reservations;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/auth")
                // Public routes
                .route("/login", web::post().to(auth::login))
                .route("/doctor/login", web::post().to(auth::doctor_login))
                .route("/register", web::post().to(auth::register_patient))
                // Admin-gated registrations
                .route("/doctor/register", web::post().to(auth::register_doctor))
                .route("/admin/register", web::post().to(auth::register_admin))
                // Authenticated
                .route("/me", web::get().to(auth::me))
                .route("/allspecialties", web::get().to(auth::all_specialties)),
        )
        .service(
            web::scope("/reservations")
                .route("/create", web::post().to(reservations::create))
                .route("/get/{id}", web::get().to(reservations::get_by_id))
                .route("/getall", web::get().to(reservations::get_all))
                .route("/update/{id}", web::put().to(reservations::update))
                .route("/delete/{id}", web::delete().to(reservations::delete))
                .route(
                    "/getall/doctors/{id}",
                    web::get().to(reservations::doctors_by_specialty),
                )
                .route(
                    "/getall/speciality",
                    web::get().to(reservations::specialties),
                ),
        )
        .service(
            web::scope("/doctor")
                .route("/all", web::get().to(doctors::all))
                .route("/get/{id}", web::get().to(doctors::get))
                .route("/update/{id}", web::put().to(doctors::update))
                .route("/delete/{id}", web::delete().to(doctors::delete)),
        )
        .service(web::scope("/patient").route("/get/{id}", web::get().to(patients::get)));
}
