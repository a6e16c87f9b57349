//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::services::{AdminService, CurationService, OrderService, WishlistService};
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse, PaginationParams};
use crate::interfaces::http::middleware::{admin_middleware, auth_middleware, AuthState};
use crate::interfaces::http::modules::{
    admin, auth, curation, health, orders, products, wishlists,
};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Auth
        auth::handlers::register,
        auth::handlers::login,
        auth::handlers::get_current_member,
        auth::handlers::submit_survey,
        // Admin
        admin::handlers::list_members,
        admin::handlers::member_detail,
        admin::handlers::grant_admin,
        admin::handlers::revoke_admin,
        admin::handlers::delete_member,
        // Products
        products::handlers::list_products,
        products::handlers::get_product,
        products::handlers::create_product,
        products::handlers::update_product,
        products::handlers::hide_product,
        // Curation
        curation::handlers::curated_products,
        // Wishlists
        wishlists::handlers::add_wishlist,
        wishlists::handlers::list_wishlists,
        wishlists::handlers::remove_wishlist,
        // Orders
        orders::handlers::place_order,
        orders::handlers::my_orders,
        orders::handlers::cancel_order,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginationParams,
            PaginatedResponse<products::dto::ProductSummary>,
            PaginatedResponse<admin::dto::MemberSummary>,
            PaginatedResponse<wishlists::dto::WishlistItem>,
            PaginatedResponse<orders::dto::OrderResponse>,
            // Auth
            auth::dto::RegisterRequest,
            auth::dto::LoginRequest,
            auth::dto::LoginResponse,
            auth::dto::SurveyRequest,
            auth::dto::SurveyInfo,
            auth::dto::MemberInfo,
            // Admin
            admin::dto::MemberSummary,
            // Products
            products::dto::ProductSummary,
            products::dto::ProductDetail,
            products::dto::CreateProductRequest,
            products::dto::UpdateProductRequest,
            // Wishlists
            wishlists::dto::WishlistItem,
            // Orders
            orders::dto::PlaceOrderRequest,
            orders::dto::OrderResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "Member registration, login (JWT), survey submission"),
        (name = "Admin", description = "Member administration: listing, roles, soft deletion"),
        (name = "Products", description = "Travel product catalog"),
        (name = "Curation", description = "Survey-driven curated product listings"),
        (name = "Wishlists", description = "Per-member product bookmarks"),
        (name = "Orders", description = "Order placement, history and cancellation"),
    ),
    info(
        title = "Travel Booking API",
        version = "1.0.0",
        description = "REST API for the travel-booking backend",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig) -> Router {
    let middleware_state = AuthState {
        jwt_config: jwt_config.clone(),
    };

    let auth_state = auth::handlers::AuthHandlerState {
        repos: repos.clone(),
        jwt_config,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/register", post(auth::handlers::register))
        .route("/login", post(auth::handlers::login))
        .with_state(auth_state.clone());

    // Auth routes (protected)
    let auth_protected_routes = Router::new()
        .route("/me", get(auth::handlers::get_current_member))
        .route("/me/survey", put(auth::handlers::submit_survey))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_state);

    // Admin routes (protected, admin only)
    let admin_state = admin::handlers::AdminHandlerState {
        service: Arc::new(AdminService::new(repos.clone())),
    };
    let admin_routes = Router::new()
        .route("/members", get(admin::handlers::list_members))
        .route(
            "/members/{id}",
            get(admin::handlers::member_detail).delete(admin::handlers::delete_member),
        )
        .route(
            "/members/{id}/grant-admin",
            post(admin::handlers::grant_admin),
        )
        .route(
            "/members/{id}/revoke-admin",
            post(admin::handlers::revoke_admin),
        )
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(admin_state);

    // Product routes: public catalog + admin-only mutations
    let product_state = products::handlers::ProductHandlerState {
        repos: repos.clone(),
    };
    let product_public_routes = Router::new()
        .route("/", get(products::handlers::list_products))
        .route("/{id}", get(products::handlers::get_product))
        .with_state(product_state.clone());
    let product_admin_routes = Router::new()
        .route("/", post(products::handlers::create_product))
        .route("/{id}", put(products::handlers::update_product))
        .route("/{id}/hide", post(products::handlers::hide_product))
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(product_state);

    // Curation routes (protected)
    let curation_state = curation::handlers::CurationHandlerState {
        service: Arc::new(CurationService::new(repos.clone())),
    };
    let curation_routes = Router::new()
        .route("/{target}", get(curation::handlers::curated_products))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(curation_state);

    // Wishlist routes (protected)
    let wishlist_state = wishlists::handlers::WishlistHandlerState {
        service: Arc::new(WishlistService::new(repos.clone())),
    };
    let wishlist_routes = Router::new()
        .route("/", get(wishlists::handlers::list_wishlists))
        .route(
            "/{product_id}",
            post(wishlists::handlers::add_wishlist).delete(wishlists::handlers::remove_wishlist),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(wishlist_state);

    // Order routes (protected)
    let order_state = orders::handlers::OrderHandlerState {
        service: Arc::new(OrderService::new(repos)),
    };
    let order_routes = Router::new()
        .route(
            "/",
            get(orders::handlers::my_orders).post(orders::handlers::place_order),
        )
        .route("/{id}/cancel", post(orders::handlers::cancel_order))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(order_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::handlers::health_check))
        // Auth
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/auth", auth_protected_routes)
        // Admin
        .nest("/api/v1/admin", admin_routes)
        // Products
        .nest("/api/v1/products", product_public_routes)
        .nest("/api/v1/products", product_admin_routes)
        // Curation
        .nest("/api/v1/curation", curation_routes)
        // Wishlists
        .nest("/api/v1/wishlists", wishlist_routes)
        // Orders
        .nest("/api/v1/orders", order_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
