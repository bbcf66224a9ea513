use axum::http::{HeaderValue, Method, header};
use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use portfolio_core::health::{healthz, readyz};
use portfolio_core::middleware::{error_envelope, request_id_layer};

use crate::docs::{docs_page, openapi_json};
use crate::handlers::{
    analytics::{dashboard, page_stats, summary, track},
    auth::{login, resend_otp, verify_otp},
    awards::{create_award, delete_award, get_award, list_awards, update_award},
    blogs::{create_blog, delete_blog, get_blog, list_blogs, update_blog},
    educations::{
        create_education, delete_education, get_education, list_educations, update_education,
    },
    experiences::{
        create_experience, delete_experience, get_experience, list_experiences, update_experience,
    },
    faqs::{create_faq, delete_faq, get_faq, list_faqs, update_faq},
    hire::{
        attach_file, create_hire_request, delete_hire_request, get_hire_request,
        list_hire_requests, update_hire_request, update_hire_status,
    },
    messages::{
        create_message, delete_message, get_message, list_messages, update_message_status,
    },
    npm_packages::{
        create_npm_package, delete_npm_package, get_npm_package, list_npm_packages,
        update_npm_package,
    },
    profile::{get_profile, update_profile},
    projects::{create_project, delete_project, get_project, list_projects, update_project},
    reviews::{create_review, delete_review, get_review, list_reviews, update_review},
    services::{create_service, delete_service, get_service, list_services, update_service},
    skills::{create_skill, delete_skill, get_skill, list_skills, update_skill},
    socials::{create_social, delete_social, get_social, list_socials, update_social},
    uploads::{delete_upload, upload},
    users::{delete_user, get_user, list_users, register, update_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Auth
        .route("/auth/login", post(login))
        .route("/auth/verify-otp", post(verify_otp))
        .route("/auth/resend-otp", post(resend_otp))
        // Users
        .route("/users", post(register))
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}", patch(update_user))
        .route("/users/{id}", delete(delete_user))
        // Profile
        .route("/profile", get(get_profile))
        .route("/profile", patch(update_profile))
        // Projects
        .route("/projects", get(list_projects))
        .route("/projects", post(create_project))
        .route("/projects/{id}", get(get_project))
        .route("/projects/{id}", patch(update_project))
        .route("/projects/{id}", delete(delete_project))
        // Blogs
        .route("/blogs", get(list_blogs))
        .route("/blogs", post(create_blog))
        .route("/blogs/{id}", get(get_blog))
        .route("/blogs/{id}", patch(update_blog))
        .route("/blogs/{id}", delete(delete_blog))
        // Experiences
        .route("/experiences", get(list_experiences))
        .route("/experiences", post(create_experience))
        .route("/experiences/{id}", get(get_experience))
        .route("/experiences/{id}", patch(update_experience))
        .route("/experiences/{id}", delete(delete_experience))
        // Educations
        .route("/educations", get(list_educations))
        .route("/educations", post(create_education))
        .route("/educations/{id}", get(get_education))
        .route("/educations/{id}", patch(update_education))
        .route("/educations/{id}", delete(delete_education))
        // Awards
        .route("/awards", get(list_awards))
        .route("/awards", post(create_award))
        .route("/awards/{id}", get(get_award))
        .route("/awards/{id}", patch(update_award))
        .route("/awards/{id}", delete(delete_award))
        // Reviews
        .route("/reviews", get(list_reviews))
        .route("/reviews", post(create_review))
        .route("/reviews/{id}", get(get_review))
        .route("/reviews/{id}", patch(update_review))
        .route("/reviews/{id}", delete(delete_review))
        // FAQs
        .route("/faqs", get(list_faqs))
        .route("/faqs", post(create_faq))
        .route("/faqs/{id}", get(get_faq))
        .route("/faqs/{id}", patch(update_faq))
        .route("/faqs/{id}", delete(delete_faq))
        // Services
        .route("/services", get(list_services))
        .route("/services", post(create_service))
        .route("/services/{id}", get(get_service))
        .route("/services/{id}", patch(update_service))
        .route("/services/{id}", delete(delete_service))
        // Socials
        .route("/socials", get(list_socials))
        .route("/socials", post(create_social))
        .route("/socials/{id}", get(get_social))
        .route("/socials/{id}", patch(update_social))
        .route("/socials/{id}", delete(delete_social))
        // Npm packages
        .route("/npm-packages", get(list_npm_packages))
        .route("/npm-packages", post(create_npm_package))
        .route("/npm-packages/{id}", get(get_npm_package))
        .route("/npm-packages/{id}", patch(update_npm_package))
        .route("/npm-packages/{id}", delete(delete_npm_package))
        // Skills
        .route("/skills", get(list_skills))
        .route("/skills", post(create_skill))
        .route("/skills/{id}", get(get_skill))
        .route("/skills/{id}", patch(update_skill))
        .route("/skills/{id}", delete(delete_skill))
        // Messages
        .route("/messages", post(create_message))
        .route("/messages", get(list_messages))
        .route("/messages/{id}", get(get_message))
        .route("/messages/{id}/status", patch(update_message_status))
        .route("/messages/{id}", delete(delete_message))
        // Hire requests
        .route("/hire-requests", post(create_hire_request))
        .route("/hire-requests", get(list_hire_requests))
        .route("/hire-requests/{id}", get(get_hire_request))
        .route("/hire-requests/{id}", patch(update_hire_request))
        .route("/hire-requests/{id}/status", patch(update_hire_status))
        .route("/hire-requests/{id}/files", post(attach_file))
        .route("/hire-requests/{id}", delete(delete_hire_request))
        // Analytics
        .route("/analytics/track", post(track))
        .route("/analytics/summary", get(summary))
        .route("/analytics/pages", get(page_stats))
        .route("/analytics/dashboard", get(dashboard))
        // Uploads
        .route("/uploads", post(upload))
        .route("/uploads/{public_id}", delete(delete_upload))
        // Docs
        .route("/docs", get(docs_page))
        .route("/docs/openapi.json", get(openapi_json));

    let config = state.config.clone();
    let mut router = Router::new()
        // Health stays outside the API prefix for load balancers.
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest(&config.api_prefix, api)
        .with_state(state)
        .layer(middleware::from_fn(error_envelope))
        .layer(request_id_layer())
        .layer(TraceLayer::new_for_http());

    if config.cors_enabled {
        router = router.layer(cors_layer(&config.cors_origin));
    }
    router
}

fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }
    match origin.parse::<HeaderValue>() {
        // Credentials forbid wildcards, so methods and headers are explicit here.
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true),
        Err(_) => {
            warn!(origin, "invalid CORS origin, allowing any origin");
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}
