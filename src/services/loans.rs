//! Loan management service
//!
//! Each state-changing operation is one unit of work: the loan write and
//! the copy status write commit together or not at all. Dropping the
//! transaction on an error path rolls everything back.

use chrono::Utc;

use crate::{
    config::LoansConfig,
    error::{AppError, AppResult},
    models::loan::{self, BookLoan, CreateLoan},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
    config: LoansConfig,
}

impl LoansService {
    pub fn new(repository: Repository, config: LoansConfig) -> Self {
        Self { repository, config }
    }

    /// Borrow a copy: claims the copy and inserts the loan atomically.
    pub async fn create_loan(&self, request: CreateLoan) -> AppResult<BookLoan> {
        // Bounded before any write or date arithmetic
        if !loan::validate_duration(request.days_solicited) {
            return Err(AppError::Validation(format!(
                "BorrowTimeSolicited must not exceed {} days",
                loan::MAX_LOAN_DAYS
            )));
        }

        let mut tx = self.repository.pool.begin().await?;

        if !self
            .repository
            .clients
            .exists(&mut tx, request.client_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Client with id {} not found",
                request.client_id
            )));
        }

        // Conditional claim: fails with 404/409 without touching the loan
        // table
        self.repository
            .copies
            .mark_borrowed(&mut tx, request.physical_book_id)
            .await?;

        let borrowed_date = Utc::now();
        let days = loan::effective_duration(
            request.days_solicited,
            self.config.default_duration_days,
        );
        let due_date = loan::due_date(borrowed_date.date_naive(), days);

        let loan = self
            .repository
            .loans
            .insert(
                &mut tx,
                request.physical_book_id,
                request.client_id,
                borrowed_date,
                due_date,
                days as i32,
            )
            .await?;

        tx.commit().await?;

        tracing::info!(
            loan_id = loan.id,
            copy_id = loan.physical_book_id,
            client_id = loan.client_id,
            due_date = %loan.due_date,
            "loan created"
        );

        Ok(loan)
    }

    /// Return a loan: closes the record and frees the copy atomically.
    pub async fn return_loan(&self, loan_id: i32) -> AppResult<BookLoan> {
        let mut tx = self.repository.pool.begin().await?;

        let loan = self
            .repository
            .loans
            .mark_returned(&mut tx, loan_id, Utc::now())
            .await?;
        self.repository
            .copies
            .mark_returned(&mut tx, loan.physical_book_id)
            .await?;

        tx.commit().await?;

        tracing::info!(loan_id, copy_id = loan.physical_book_id, "loan returned");

        Ok(loan)
    }

    /// Declare a loan lost: the loan and its copy both go to LOST.
    pub async fn mark_lost(&self, loan_id: i32) -> AppResult<BookLoan> {
        let mut tx = self.repository.pool.begin().await?;

        let loan = self.repository.loans.mark_lost(&mut tx, loan_id).await?;
        self.repository
            .copies
            .mark_lost(&mut tx, loan.physical_book_id)
            .await?;

        tx.commit().await?;

        tracing::warn!(loan_id, copy_id = loan.physical_book_id, "loan declared lost");

        Ok(loan)
    }

    /// Active loans for a client
    pub async fn get_client_loans(&self, client_id: i32) -> AppResult<Vec<BookLoan>> {
        self.repository.clients.get_details(client_id).await?;
        self.repository.loans.get_client_loans(client_id).await
    }
}
