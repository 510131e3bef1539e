//! Reporting service. Reports are read-only views derived on demand.

use chrono::{NaiveDate, Utc};

use crate::{error::AppResult, models::loan::OverdueLoan, repository::Repository};

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Active loans past their due date. `as_of` defaults to today.
    pub async fn list_overdue_loans(&self, as_of: Option<NaiveDate>) -> AppResult<Vec<OverdueLoan>> {
        let as_of = as_of.unwrap_or_else(|| Utc::now().date_naive());
        self.repository.loans.list_overdue(as_of).await
    }
}
