use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{auth, authors, books, categories};
use super::state::AppState;

/// Builds the full application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(auth::service_status))
        .route("/health", get(auth::health_check))
        // Users
        .route("/usuarios/login", post(auth::login))
        // Books
        .route("/libros", get(books::list_books).post(books::create_book))
        .route(
            "/libros/:isdn",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route(
            "/libros/categoria/:category_id",
            get(books::get_books_by_category),
        )
        // Authors
        .route(
            "/autores",
            get(authors::list_authors).post(authors::create_author),
        )
        .route(
            "/autores/:id",
            get(authors::get_author)
                .put(authors::update_author)
                .delete(authors::delete_author),
        )
        // Categories
        .route(
            "/categorias",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categorias/:id",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
