use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::products::ProductResponse;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub user_id: Option<i64>,
    pub address_id: Option<i64>,
    /// Ids of the ordered products, in cart order.
    pub product_id: Option<Vec<i64>>,
    pub order_date: Option<NaiveDateTime>,
    pub total_price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub address_id: Option<i64>,
    pub products: Option<Vec<ProductResponse>>,
    pub order_date: Option<NaiveDateTime>,
    pub total_price: Option<f64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub order_id: Option<i64>,
    pub product_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub order_id: Option<i64>,
    pub product_id: Option<i64>,
}
