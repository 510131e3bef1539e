//! Loan management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::loan::{BookLoan, CreateLoan},
};

/// Create loan request
#[derive(Deserialize, ToSchema)]
pub struct CreateLoanRequest {
    /// Copy to borrow
    #[serde(rename = "idPhysicalBook")]
    pub id_physical_book: i32,
    /// Borrowing client
    #[serde(rename = "idClient")]
    pub id_client: i32,
    /// Requested loan length in days; defaults to 14
    #[serde(rename = "BorrowTimeSolicited")]
    pub borrow_time_solicited: Option<i64>,
}

/// Loan creation response with the computed due date
#[derive(Serialize, ToSchema)]
pub struct LoanResponse {
    /// Status message
    pub message: String,
    /// Due date (ISO 8601)
    #[serde(rename = "DueDate")]
    pub due_date: NaiveDate,
}

/// Generic status message response
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Create a new loan (borrow a copy)
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = CreateLoanRequest,
    responses(
        (status = 201, description = "Loan created", body = LoanResponse),
        (status = 404, description = "Client or copy not found"),
        (status = 409, description = "Copy not available to loan")
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateLoanRequest>,
) -> AppResult<(StatusCode, Json<LoanResponse>)> {
    let loan = state
        .services
        .loans
        .create_loan(CreateLoan {
            physical_book_id: request.id_physical_book,
            client_id: request.id_client,
            days_solicited: request.borrow_time_solicited,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LoanResponse {
            message: "Loan created successfully".to_string(),
            due_date: loan.due_date,
        }),
    ))
}

/// Return a borrowed copy
#[utoipa::path(
    put,
    path = "/loans/{id}/return",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan returned", body = MessageResponse),
        (status = 404, description = "Loan not found"),
        (status = 409, description = "Loan already closed")
    )
)]
pub async fn return_loan(
    State(state): State<crate::AppState>,
    Path(loan_id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.loans.return_loan(loan_id).await?;

    Ok(Json(MessageResponse {
        message: "Loan returned successfully".to_string(),
    }))
}

/// Declare a loan lost
#[utoipa::path(
    put,
    path = "/loans/{id}/lost",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan declared lost", body = MessageResponse),
        (status = 404, description = "Loan not found"),
        (status = 409, description = "Loan already closed")
    )
)]
pub async fn lost_loan(
    State(state): State<crate::AppState>,
    Path(loan_id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.loans.mark_lost(loan_id).await?;

    Ok(Json(MessageResponse {
        message: "Loan set successfully".to_string(),
    }))
}

/// Get active loans for a client
#[utoipa::path(
    get,
    path = "/clients/{id}/loans",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client's active loans", body = Vec<BookLoan>),
        (status = 404, description = "Client not found")
    )
)]
pub async fn get_client_loans(
    State(state): State<crate::AppState>,
    Path(client_id): Path<i32>,
) -> AppResult<Json<Vec<BookLoan>>> {
    let loans = state.services.loans.get_client_loans(client_id).await?;
    Ok(Json(loans))
}
