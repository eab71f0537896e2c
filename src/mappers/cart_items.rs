use crate::{dto::cart::CartItemResponse, entity::CartItem};

#[derive(Debug, Default, Clone, Copy)]
pub struct CartItemMapper;

impl CartItemMapper {
    pub fn to_response(&self, item: Option<&CartItem>) -> Option<CartItemResponse> {
        item.map(cart_item_response)
    }

    pub fn to_response_list(&self, items: Option<&[CartItem]>) -> Option<Vec<CartItemResponse>> {
        items.map(|items| items.iter().map(cart_item_response).collect())
    }
}

fn cart_item_response(item: &CartItem) -> CartItemResponse {
    let product = item.product.as_ref();
    CartItemResponse {
        id: item.id,
        product_id: product.and_then(|product| product.id),
        product_title: product.and_then(|product| product.title.clone()),
        price: product.and_then(|product| product.price),
        quantity: item.quantity,
    }
}
