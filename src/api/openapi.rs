//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, catalog, clients, copies, health, loans, reports, reserves, reviews};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "0.3.0",
        description = "Library Management System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Catalog reference data
        catalog::create_author,
        catalog::list_authors,
        catalog::get_author,
        catalog::update_author,
        catalog::delete_author,
        catalog::create_publisher,
        catalog::list_publishers,
        catalog::get_publisher,
        catalog::update_publisher,
        catalog::delete_publisher,
        catalog::create_branch,
        catalog::list_branches,
        catalog::get_branch,
        catalog::update_branch,
        catalog::delete_branch,
        catalog::create_language,
        catalog::list_languages,
        catalog::create_collection,
        catalog::list_collections,
        // Books
        books::create_book,
        books::list_books,
        books::get_book,
        books::update_book,
        books::delete_book,
        // Physical books
        copies::create_physical_book,
        copies::list_physical_books,
        copies::get_physical_book,
        copies::update_physical_book,
        copies::toggle_repair,
        // Clients
        clients::create_client,
        clients::list_clients,
        clients::get_client,
        clients::update_client,
        clients::delete_client,
        // Loans
        loans::create_loan,
        loans::return_loan,
        loans::lost_loan,
        loans::get_client_loans,
        // Reserves
        reserves::create_reserve,
        reserves::delete_reserve,
        reserves::list_reserves,
        reserves::list_client_reserves,
        // Reviews
        reviews::create_review,
        reviews::get_book_reviews,
        // Reports
        reports::get_overdue_loans,
    ),
    components(
        schemas(
            // Catalog
            crate::models::catalog::Author,
            crate::models::catalog::CreateAuthor,
            crate::models::catalog::UpdateAuthor,
            crate::models::catalog::Publisher,
            crate::models::catalog::CreatePublisher,
            crate::models::catalog::UpdatePublisher,
            crate::models::catalog::Branch,
            crate::models::catalog::BranchDetails,
            crate::models::catalog::CreateBranch,
            crate::models::catalog::UpdateBranch,
            crate::models::catalog::Language,
            crate::models::catalog::CreateLanguage,
            crate::models::catalog::Collection,
            crate::models::catalog::CreateCollection,
            crate::models::address::Address,
            crate::models::address::CreateAddress,
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            // Physical books
            crate::models::copy::CopyStatus,
            crate::models::copy::PhysicalBook,
            crate::models::copy::PhysicalBookDetails,
            crate::models::copy::CreatePhysicalBook,
            crate::models::copy::UpdatePhysicalBook,
            copies::PhysicalBookListResponse,
            copies::RepairResponse,
            // Clients
            crate::models::client::ClientType,
            crate::models::client::Client,
            crate::models::client::ClientPf,
            crate::models::client::ClientPj,
            crate::models::client::ClientDetails,
            crate::models::client::CreateClient,
            crate::models::client::UpdateClient,
            // Loans
            crate::models::loan::LoanStatus,
            crate::models::loan::BookLoan,
            crate::models::loan::OverdueLoan,
            loans::CreateLoanRequest,
            loans::LoanResponse,
            loans::MessageResponse,
            // Reserves
            crate::models::reserve::Reserve,
            reserves::ReserveResponse,
            // Reviews
            crate::models::review::BookReview,
            crate::models::review::ReviewEntry,
            reviews::CreateReviewRequest,
            reviews::ReviewResponse,
            reviews::ReviewListResponse,
            // Reports
            reports::OverdueReport,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "catalog", description = "Authors, publishers, branches, languages, collections"),
        (name = "books", description = "Book catalog records"),
        (name = "physical_books", description = "Physical copies"),
        (name = "clients", description = "Client management"),
        (name = "loans", description = "Loan management"),
        (name = "reserves", description = "Reserves"),
        (name = "reviews", description = "Book reviews"),
        (name = "reports", description = "Reports")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
