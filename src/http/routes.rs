use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};

use crate::{
    http::handlers::{
        create_admission_handler, create_review_handler, create_specialty_handler,
        create_university_application_handler, create_university_handler,
        delete_review_handler, delete_university_handler, get_reviews_handler,
        get_specialties_handler, get_university_handler, list_universities_handler,
        list_university_applications_handler, login_handler, logout_handler, me_handler,
        my_admissions_handler, process_university_application_handler, random_university_handler,
        register_handler, top_university_handler, university_admissions_handler,
        update_admission_status_handler, update_university_handler,
    },
    middleware::{create_auth_rate_limiter, rate_limit_middleware},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    let auth_rate_limiter = create_auth_rate_limiter();

    let auth_routes = Router::new()
        .route("/login", post(login_handler))
        .route("/register", post(register_handler))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(auth_rate_limiter.clone(), req, next)
        }));

    Router::new()
        .merge(auth_routes)
        .route("/me", get(me_handler))
        .route("/logout", post(logout_handler))
        .route(
            "/universities",
            get(list_universities_handler).post(create_university_handler),
        )
        .route("/universities/random", get(random_university_handler))
        .route(
            "/universities/{id}",
            get(get_university_handler)
                .put(update_university_handler)
                .delete(delete_university_handler),
        )
        .route(
            "/universities/{id}/reviews",
            get(get_reviews_handler).post(create_review_handler),
        )
        .route(
            "/universities/{id}/specialties",
            get(get_specialties_handler).post(create_specialty_handler),
        )
        .route("/reviews/{id}", delete(delete_review_handler))
        .route("/top-university", get(top_university_handler))
        .route("/admission-applications", post(create_admission_handler))
        .route("/admission-applications/my", get(my_admissions_handler))
        .route(
            "/admission-applications/university",
            get(university_admissions_handler),
        )
        .route(
            "/admission-applications/{id}/status",
            put(update_admission_status_handler),
        )
        .route(
            "/university-applications",
            get(list_university_applications_handler).post(create_university_application_handler),
        )
        .route(
            "/university-applications/{id}/process",
            put(process_university_application_handler),
        )
        .with_state(state)
}
