use std::sync::Arc;

use crate::{
    dto::orders::{OrderRequest, OrderResponse, OrderStatusRequest},
    entity::{Address, Order, OrderStatus, Product, User},
    error::MapperResult,
};

use super::products::ProductMapper;

#[derive(Debug, Clone)]
pub struct OrderMapper {
    products: Arc<ProductMapper>,
}

impl OrderMapper {
    pub fn new(products: Arc<ProductMapper>) -> Self {
        Self { products }
    }

    /// User, address and products are attached as id-only references; the
    /// persistence layer resolves them.
    pub fn order_from_request(&self, request: Option<&OrderRequest>) -> Option<Order> {
        let request = request?;

        Some(Order {
            user: request.user_id.map(User::with_id),
            address: request.address_id.map(Address::with_id),
            products: self.map_product_ids(request.product_id.as_deref()),
            order_date: request.order_date,
            total_price: request.total_price,
            ..Default::default()
        })
    }

    /// Full order view: owner and address ids plus the product list. The
    /// status is rendered by [`OrderMapper::to_response_dto`] instead.
    pub fn response_from_order(&self, order: Option<&Order>) -> Option<OrderResponse> {
        let order = order?;
        tracing::trace!(
            order_id = ?order.id,
            products = order.products.as_ref().map_or(0, Vec::len),
            "mapping order"
        );

        Some(OrderResponse {
            id: order.id,
            user_id: order.user.as_ref().and_then(|user| user.id),
            address_id: order.address.as_ref().and_then(|address| address.id),
            products: self
                .products
                .response_list_from_products(order.products.as_deref()),
            order_date: order.order_date,
            total_price: order.total_price,
            status: None,
        })
    }

    /// Status-change payload to a partial order carrying only the new status.
    pub fn to_entity(&self, request: Option<&OrderStatusRequest>) -> MapperResult<Option<Order>> {
        let Some(request) = request else {
            return Ok(None);
        };

        let order_status = request
            .status
            .as_deref()
            .map(str::parse::<OrderStatus>)
            .transpose()?;

        Ok(Some(Order {
            order_status,
            ..Default::default()
        }))
    }

    /// Status-centric view used by order listings; owner and address are
    /// not projected.
    pub fn to_response_dto(&self, order: Option<&Order>) -> Option<OrderResponse> {
        let order = order?;

        Some(OrderResponse {
            id: order.id,
            user_id: None,
            address_id: None,
            products: self
                .products
                .response_list_from_products(order.products.as_deref()),
            order_date: order.order_date,
            total_price: order.total_price,
            status: order.order_status.map(|status| status.as_str().to_string()),
        })
    }

    pub fn map_product(&self, product_id: Option<i64>) -> Option<Product> {
        product_id.map(Product::with_id)
    }

    fn map_product_ids(&self, product_ids: Option<&[i64]>) -> Option<Vec<Product>> {
        product_ids.map(|ids| ids.iter().copied().map(Product::with_id).collect())
    }
}
