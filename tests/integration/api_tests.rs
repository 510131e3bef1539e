//! API integration tests
//!
//! These run against a live server with a migrated database:
//! `cargo run` in one terminal, then `cargo test -- --ignored`.

use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api";

/// Unique numeric suffix so repeated runs don't trip unique constraints.
fn unique_suffix() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos() as u64
        % 10_000_000_000
}

fn address_payload() -> Value {
    json!({
        "road": "Rua das Flores",
        "neighbourhood": "Centro",
        "number": 100,
        "city": "Sao Paulo",
        "state": "SP",
        "zip_code": "01000-000",
        "complement": null
    })
}

/// Seed the reference-data chain needed by a loan: author, publisher,
/// branch, language, book, copy and a PF client. Returns
/// (isbn, copy_id, client_id, branch_id).
async fn seed_catalog(client: &Client) -> (i64, i64, i64, i64) {
    let suffix = unique_suffix();

    let response = client
        .post(format!("{}/authors", BASE_URL))
        .json(&json!({
            "first_name": "Machado",
            "middle_name": null,
            "last_name": "de Assis"
        }))
        .send()
        .await
        .expect("Failed to create author");
    assert_eq!(response.status(), 201);
    let author: Value = response.json().await.expect("Failed to parse author");
    let author_id = author["id"].as_i64().expect("No author ID");

    let response = client
        .post(format!("{}/publishers", BASE_URL))
        .json(&json!({
            "cnpj": format!("{:014}", suffix),
            "name": "Editora Teste",
            "address": address_payload()
        }))
        .send()
        .await
        .expect("Failed to create publisher");
    assert_eq!(response.status(), 201);
    let publisher: Value = response.json().await.expect("Failed to parse publisher");
    let publisher_id = publisher["id"].as_i64().expect("No publisher ID");

    let response = client
        .post(format!("{}/branches", BASE_URL))
        .json(&json!({
            "name": format!("Filial {}", suffix),
            "address": address_payload()
        }))
        .send()
        .await
        .expect("Failed to create branch");
    assert_eq!(response.status(), 201);
    let branch: Value = response.json().await.expect("Failed to parse branch");
    let branch_id = branch["id"].as_i64().expect("No branch ID");

    let response = client
        .post(format!("{}/languages", BASE_URL))
        .json(&json!({
            "code": format!("x{}", suffix % 100_000),
            "name": "Portuguese"
        }))
        .send()
        .await
        .expect("Failed to create language");
    assert_eq!(response.status(), 201);
    let language: Value = response.json().await.expect("Failed to parse language");
    let language_id = language["id"].as_i64().expect("No language ID");

    let isbn = 9_780_000_000_000_i64 + suffix as i64 % 1_000_000_000;
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "isbn": isbn,
            "title": "Dom Casmurro",
            "author_id": author_id,
            "publisher_id": publisher_id,
            "edition": "1st",
            "language_id": language_id,
            "collection_id": null,
            "age_range": null
        }))
        .send()
        .await
        .expect("Failed to create book");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/physicalBooks", BASE_URL))
        .json(&json!({
            "isbn": isbn,
            "branch_id": branch_id
        }))
        .send()
        .await
        .expect("Failed to create physical book");
    assert_eq!(response.status(), 201);
    let copy: Value = response.json().await.expect("Failed to parse physical book");
    let copy_id = copy["id"].as_i64().expect("No physical book ID");
    assert_eq!(copy["status"], "AVAILABLE");

    let response = client
        .post(format!("{}/clients", BASE_URL))
        .json(&json!({
            "client_type": "PF",
            "phone": "11999990000",
            "email": format!("client{}@example.com", suffix),
            "address": address_payload(),
            "cpf": format!("{:011}", suffix),
            "first_name": "Ana",
            "middle_name": "Maria",
            "last_name": "Silva",
            "birthdate": "1990-05-01"
        }))
        .send()
        .await
        .expect("Failed to create client");
    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.expect("Failed to parse client");
    let client_id = created["id"].as_i64().expect("No client ID");

    (isbn, copy_id, client_id, branch_id)
}

async fn copy_status(client: &Client, copy_id: i64) -> String {
    let response = client
        .get(format!("{}/physicalBooks/{}", BASE_URL, copy_id))
        .send()
        .await
        .expect("Failed to get physical book");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    body["status"].as_str().expect("No status").to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_loan_lifecycle() {
    let client = Client::new();
    let (_, copy_id, client_id, _) = seed_catalog(&client).await;

    // Borrow the copy for 7 days
    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({
            "idPhysicalBook": copy_id,
            "idClient": client_id,
            "BorrowTimeSolicited": 7
        }))
        .send()
        .await
        .expect("Failed to create loan");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let expected_due = (Utc::now().date_naive() + Duration::days(7)).to_string();
    assert_eq!(body["DueDate"], expected_due.as_str());
    assert_eq!(copy_status(&client, copy_id).await, "BORROWED");

    // A second borrow of the same copy must conflict
    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({
            "idPhysicalBook": copy_id,
            "idClient": client_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // The loan shows up among the client's active loans
    let response = client
        .get(format!("{}/clients/{}/loans", BASE_URL, client_id))
        .send()
        .await
        .expect("Failed to list loans");
    assert!(response.status().is_success());
    let loans: Value = response.json().await.expect("Failed to parse response");
    let loan_id = loans[0]["id"].as_i64().expect("No loan ID");
    assert_eq!(loans[0]["status"], "ACTIVE");

    // Return it
    let response = client
        .put(format!("{}/loans/{}/return", BASE_URL, loan_id))
        .send()
        .await
        .expect("Failed to return loan");
    assert!(response.status().is_success());
    assert_eq!(copy_status(&client, copy_id).await, "AVAILABLE");

    // Returning twice must conflict
    let response = client
        .put(format!("{}/loans/{}/return", BASE_URL, loan_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // The copy can be borrowed again after return
    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({
            "idPhysicalBook": copy_id,
            "idClient": client_id
        }))
        .send()
        .await
        .expect("Failed to create second loan");
    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_lost_loan_marks_copy_lost() {
    let client = Client::new();
    let (_, copy_id, client_id, _) = seed_catalog(&client).await;

    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({
            "idPhysicalBook": copy_id,
            "idClient": client_id
        }))
        .send()
        .await
        .expect("Failed to create loan");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/clients/{}/loans", BASE_URL, client_id))
        .send()
        .await
        .expect("Failed to list loans");
    let loans: Value = response.json().await.expect("Failed to parse response");
    let loan_id = loans[0]["id"].as_i64().expect("No loan ID");

    let response = client
        .put(format!("{}/loans/{}/lost", BASE_URL, loan_id))
        .send()
        .await
        .expect("Failed to mark loan lost");
    assert!(response.status().is_success());
    assert_eq!(copy_status(&client, copy_id).await, "LOST");

    // A lost copy cannot be borrowed
    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({
            "idPhysicalBook": copy_id,
            "idClient": client_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_loan_duration_too_long() {
    let client = Client::new();
    let (_, copy_id, client_id, _) = seed_catalog(&client).await;

    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({
            "idPhysicalBook": copy_id,
            "idClient": client_id,
            "BorrowTimeSolicited": i64::MAX
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // The copy was not claimed by the rejected request
    assert_eq!(copy_status(&client, copy_id).await, "AVAILABLE");
}

#[tokio::test]
#[ignore]
async fn test_loan_unknown_copy() {
    let client = Client::new();
    let (_, _, client_id, _) = seed_catalog(&client).await;

    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({
            "idPhysicalBook": 999_999_999,
            "idClient": client_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_repair_toggle() {
    let client = Client::new();
    let (_, copy_id, _, _) = seed_catalog(&client).await;

    let response = client
        .put(format!("{}/physicalBooks/{}/repair", BASE_URL, copy_id))
        .send()
        .await
        .expect("Failed to toggle repair");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "IN_REPAIR");

    let response = client
        .put(format!("{}/physicalBooks/{}/repair", BASE_URL, copy_id))
        .send()
        .await
        .expect("Failed to toggle repair back");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "AVAILABLE");
}

#[tokio::test]
#[ignore]
async fn test_review_supersedes_and_updates_mean() {
    let client = Client::new();
    let (isbn, _, client_id, _) = seed_catalog(&client).await;

    let response = client
        .post(format!("{}/reviews", BASE_URL))
        .json(&json!({
            "idClient": client_id,
            "ISBN": isbn,
            "Rating": 4,
            "Comment": "Great read"
        }))
        .send()
        .await
        .expect("Failed to post review");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["new_book_rating"], 4.0);

    // A second review by the same client archives the first; the mean
    // covers both rows.
    let response = client
        .post(format!("{}/reviews", BASE_URL))
        .json(&json!({
            "idClient": client_id,
            "ISBN": isbn,
            "Rating": 2,
            "Comment": null
        }))
        .send()
        .await
        .expect("Failed to post second review");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["new_book_rating"], 3.0);

    // The derived rating lands on the book as a number
    let response = client
        .get(format!("{}/books/{}", BASE_URL, isbn))
        .send()
        .await
        .expect("Failed to get book");
    let book: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(book["review"], 3.0);

    // Only the active review is listed
    let response = client
        .get(format!("{}/reviews/book/{}", BASE_URL, isbn))
        .send()
        .await
        .expect("Failed to list reviews");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let reviews = body["reviews"].as_array().expect("No reviews array");
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["Rating"], 2);
    assert_eq!(reviews[0]["Client"], "Ana Maria Silva");
}

#[tokio::test]
#[ignore]
async fn test_review_rating_out_of_range() {
    let client = Client::new();
    let (isbn, _, client_id, _) = seed_catalog(&client).await;

    for rating in [0, 6] {
        let response = client
            .post(format!("{}/reviews", BASE_URL))
            .json(&json!({
                "idClient": client_id,
                "ISBN": isbn,
                "Rating": rating
            }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 400);
    }
}

#[tokio::test]
#[ignore]
async fn test_reserve_create_and_cancel() {
    let client = Client::new();
    let (isbn, _, client_id, branch_id) = seed_catalog(&client).await;

    let response = client
        .post(format!(
            "{}/reserves/{}/{}/{}",
            BASE_URL, client_id, isbn, branch_id
        ))
        .send()
        .await
        .expect("Failed to create reserve");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let reserve_id = body["reserve"]["id"].as_i64().expect("No reserve ID");

    let response = client
        .get(format!("{}/clients/{}/reserves", BASE_URL, client_id))
        .send()
        .await
        .expect("Failed to list reserves");
    let reserves: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(reserves.as_array().expect("Not an array").len(), 1);

    let response = client
        .delete(format!("{}/reserves/{}", BASE_URL, reserve_id))
        .send()
        .await
        .expect("Failed to delete reserve");
    assert_eq!(response.status(), 204);

    // Deleting again is a 404
    let response = client
        .delete(format!("{}/reserves/{}", BASE_URL, reserve_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_reserve_unknown_client() {
    let client = Client::new();
    let (isbn, _, _, branch_id) = seed_catalog(&client).await;

    let response = client
        .post(format!(
            "{}/reserves/{}/{}/{}",
            BASE_URL, 999_999_999, isbn, branch_id
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_overdue_report() {
    let client = Client::new();
    let (_, copy_id, client_id, _) = seed_catalog(&client).await;

    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({
            "idPhysicalBook": copy_id,
            "idClient": client_id,
            "BorrowTimeSolicited": 7
        }))
        .send()
        .await
        .expect("Failed to create loan");
    assert_eq!(response.status(), 201);

    // Ten days past the due date the loan must be reported
    let as_of = Utc::now().date_naive() + Duration::days(17);
    let response = client
        .get(format!("{}/reports/overdue?as_of={}", BASE_URL, as_of))
        .send()
        .await
        .expect("Failed to get report");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["count"].as_u64().expect("No count") >= 1);
    let entry = body["overdue_loans"]
        .as_array()
        .expect("No overdue_loans array")
        .iter()
        .find(|e| e["ClientName"] == "Ana Silva")
        .expect("Seeded loan not reported");
    assert_eq!(entry["DaysOverdue"], 10);
}

#[tokio::test]
#[ignore]
async fn test_list_books_invalid_status() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books?status=bogus", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_soft_deleted_book_hidden_from_default_listing() {
    let client = Client::new();
    let (isbn, _, _, _) = seed_catalog(&client).await;

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, isbn))
        .send()
        .await
        .expect("Failed to delete book");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to list books");
    let books: Value = response.json().await.expect("Failed to parse response");
    assert!(!books
        .as_array()
        .expect("Not an array")
        .iter()
        .any(|b| b["isbn"].as_i64() == Some(isbn)));

    let response = client
        .get(format!("{}/books?status=inactive", BASE_URL))
        .send()
        .await
        .expect("Failed to list inactive books");
    let books: Value = response.json().await.expect("Failed to parse response");
    assert!(books
        .as_array()
        .expect("Not an array")
        .iter()
        .any(|b| b["isbn"].as_i64() == Some(isbn)));
}
