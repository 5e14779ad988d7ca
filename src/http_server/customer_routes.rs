//! Customer HTTP Routes
//!
//! Endpoints for creating and listing customer records. Each handler opens
//! its own database connection, runs exactly one statement, and closes the
//! connection before responding.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::Connection;
use validator::Validate;

use crate::customer::Customer;
use crate::db::{self, DbConfig, DbError};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// State shared across customer handlers.
///
/// Holds only the immutable connection configuration; there is no pool and
/// no per-request state survives the request.
pub struct CustomerState {
    pub db: DbConfig,
}

impl CustomerState {
    pub fn new(db: DbConfig) -> Self {
        Self { db }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize, Deserialize)]
pub struct CustomerCreatedResponse {
    pub message: String,
    pub name: String,
}

// ==================
// Customer Routes
// ==================

/// Create customer routes
pub fn customer_routes(state: Arc<CustomerState>) -> Router {
    Router::new()
        .route(
            "/customers/",
            post(create_customer_handler).get(list_customers_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_customer_handler(
    State(state): State<Arc<CustomerState>>,
    Json(customer): Json<Customer>,
) -> ApiResult<Json<CustomerCreatedResponse>> {
    // Content validation happens before any connection is opened.
    customer
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let mut conn = db::connect(&state.db).await?;
    sqlx::query("INSERT INTO customers (name, email) VALUES ($1, $2)")
        .bind(&customer.name)
        .bind(&customer.email)
        .execute(&mut conn)
        .await
        .map_err(DbError::Query)?;
    close_connection(conn).await;

    tracing::info!(name = %customer.name, "customer created");

    Ok(Json(CustomerCreatedResponse {
        message: "Customer created".to_string(),
        name: customer.name,
    }))
}

async fn list_customers_handler(
    State(state): State<Arc<CustomerState>>,
) -> ApiResult<Json<Vec<Customer>>> {
    let mut conn = db::connect(&state.db).await?;
    // No ORDER BY: rows come back in database-default order.
    let customers = sqlx::query_as::<_, Customer>("SELECT name, email FROM customers")
        .fetch_all(&mut conn)
        .await
        .map_err(DbError::Query)?;
    close_connection(conn).await;

    Ok(Json(customers))
}

/// Close a request-scoped connection once its statement has completed.
///
/// The response is already determined at this point, so a close failure is
/// logged rather than surfaced to the client.
async fn close_connection(conn: sqlx::PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "failed to close database connection");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_response_shape() {
        let response = CustomerCreatedResponse {
            message: "Customer created".to_string(),
            name: "Ada Lovelace".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "Customer created", "name": "Ada Lovelace"})
        );
    }
}
