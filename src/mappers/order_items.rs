use crate::{
    dto::orders::{OrderItemRequest, OrderItemResponse},
    entity::{Order, OrderItem, Product},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct OrderItemMapper;

impl OrderItemMapper {
    pub fn order_item_from_request(&self, request: Option<&OrderItemRequest>) -> Option<OrderItem> {
        let request = request?;

        Some(OrderItem {
            id: None,
            order: request.order_id.map(Order::with_id),
            product: request.product_id.map(Product::with_id),
        })
    }

    pub fn response_from_order_item(&self, item: Option<&OrderItem>) -> Option<OrderItemResponse> {
        let item = item?;

        Some(OrderItemResponse {
            order_id: item.order.as_ref().and_then(|order| order.id),
            product_id: item.product.as_ref().and_then(|product| product.id),
        })
    }
}
