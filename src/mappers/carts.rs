use std::sync::Arc;

use crate::{
    dto::cart::{CartItemResponse, CartResponse},
    entity::Cart,
};

use super::cart_items::CartItemMapper;

#[derive(Debug, Clone)]
pub struct CartMapper {
    items: Arc<CartItemMapper>,
}

impl CartMapper {
    pub fn new(items: Arc<CartItemMapper>) -> Self {
        Self { items }
    }

    pub fn to_response(&self, cart: Option<&Cart>) -> Option<CartResponse> {
        let cart = cart?;

        let items = self.items.to_response_list(cart.cart_items.as_deref());
        let total_price = items.as_deref().map_or(0.0, sum_line_totals);
        tracing::trace!(
            cart_id = ?cart.id,
            items = items.as_ref().map_or(0, Vec::len),
            total_price,
            "mapping cart"
        );

        Some(CartResponse {
            cart_id: cart.id,
            user_id: cart.user.as_ref().and_then(|user| user.id),
            items,
            total_price,
        })
    }
}

/// Sum of line totals; lines missing a price or quantity count as zero.
fn sum_line_totals(items: &[CartItemResponse]) -> f64 {
    items
        .iter()
        .filter_map(|item| Some(item.price? * f64::from(item.quantity?)))
        .sum()
}
