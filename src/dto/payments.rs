use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::PaymentStatus;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub provider: Option<String>,
    pub method: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: Option<i64>,
    pub order_id: Option<i64>,
    pub method: Option<String>,
    pub status: Option<PaymentStatus>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub transaction_id: Option<String>,
    pub payment_date: Option<NaiveDateTime>,
    pub provider: Option<String>,
    /// Billing address rendered as a single line.
    pub address: Option<String>,
}
