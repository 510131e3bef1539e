//! Loans repository for database operations

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgConnection, Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        client::ClientName,
        loan::{self, BookLoan, LoanStatus, OverdueLoan},
    },
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<BookLoan> {
        sqlx::query_as::<_, BookLoan>("SELECT * FROM book_loans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))
    }

    /// Get active loans for a client
    pub async fn get_client_loans(&self, client_id: i32) -> AppResult<Vec<BookLoan>> {
        Ok(sqlx::query_as::<_, BookLoan>(
            "SELECT * FROM book_loans WHERE client_id = $1 AND status = 'ACTIVE' ORDER BY borrowed_date",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Insert a new active loan. Runs inside the loan-creation
    /// transaction, after the copy has been claimed.
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        physical_book_id: i32,
        client_id: i32,
        borrowed_date: DateTime<Utc>,
        due_date: NaiveDate,
        days_solicited: i32,
    ) -> AppResult<BookLoan> {
        Ok(sqlx::query_as::<_, BookLoan>(
            r#"
            INSERT INTO book_loans (physical_book_id, client_id, borrowed_date, due_date, days_solicited)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(physical_book_id)
        .bind(client_id)
        .bind(borrowed_date)
        .bind(due_date)
        .bind(days_solicited)
        .fetch_one(conn)
        .await?)
    }

    /// Close an active loan as RETURNED, recording the return time.
    /// Only ACTIVE loans can transition; anything else is a conflict.
    pub async fn mark_returned(
        &self,
        conn: &mut PgConnection,
        id: i32,
        return_date: DateTime<Utc>,
    ) -> AppResult<BookLoan> {
        let loan = sqlx::query_as::<_, BookLoan>(
            r#"
            UPDATE book_loans
            SET status = 'RETURNED', return_date = $2
            WHERE id = $1 AND status = 'ACTIVE'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(return_date)
        .fetch_optional(&mut *conn)
        .await?;

        match loan {
            Some(loan) => Ok(loan),
            None => Err(self.transition_error(&mut *conn, id, "return").await?),
        }
    }

    /// Close an active loan as LOST
    pub async fn mark_lost(&self, conn: &mut PgConnection, id: i32) -> AppResult<BookLoan> {
        let loan = sqlx::query_as::<_, BookLoan>(
            r#"
            UPDATE book_loans
            SET status = 'LOST'
            WHERE id = $1 AND status = 'ACTIVE'
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        match loan {
            Some(loan) => Ok(loan),
            None => Err(self.transition_error(&mut *conn, id, "mark lost").await?),
        }
    }

    /// A guarded transition matched no row: either the loan is missing
    /// (404) or it already left the ACTIVE state (409).
    async fn transition_error(
        &self,
        conn: &mut PgConnection,
        id: i32,
        action: &str,
    ) -> AppResult<AppError> {
        let status: Option<LoanStatus> =
            sqlx::query_scalar("SELECT status FROM book_loans WHERE id = $1")
                .bind(id)
                .fetch_optional(conn)
                .await?;

        Ok(match status {
            None => AppError::NotFound(format!("Loan with id {} not found", id)),
            Some(status) => AppError::Conflict(format!(
                "Cannot {} a {:?} loan",
                action, status
            )),
        })
    }

    /// Active loans past their due date as of the given day, with the
    /// borrower's display name and the book title resolved.
    pub async fn list_overdue(&self, as_of: NaiveDate) -> AppResult<Vec<OverdueLoan>> {
        let rows = sqlx::query(
            r#"
            SELECT bl.id, bl.due_date, b.title,
                   c.client_type, pf.first_name, pf.middle_name, pf.last_name,
                   pj.legal_name, pj.fantasy_name
            FROM book_loans bl
            JOIN clients c ON bl.client_id = c.id
            LEFT JOIN clients_pf pf ON c.id = pf.client_id
            LEFT JOIN clients_pj pj ON c.id = pj.client_id
            JOIN physical_books pb ON bl.physical_book_id = pb.id
            JOIN books b ON pb.isbn = b.isbn
            WHERE bl.status = 'ACTIVE' AND bl.due_date < $1
            ORDER BY bl.due_date
            "#,
        )
        .bind(as_of)
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            let name = ClientName {
                client_type: row.get("client_type"),
                first_name: row.get("first_name"),
                middle_name: row.get("middle_name"),
                last_name: row.get("last_name"),
                legal_name: row.get("legal_name"),
                fantasy_name: row.get("fantasy_name"),
            };
            let due_date: NaiveDate = row.get("due_date");

            result.push(OverdueLoan {
                id: row.get("id"),
                client_name: name.short(),
                book_title: row.get("title"),
                due_date,
                days_overdue: loan::days_overdue(due_date, as_of),
            });
        }

        Ok(result)
    }
}
