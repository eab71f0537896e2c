use super::{orders::Order, products::Product};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderItem {
    pub id: Option<i64>,
    pub order: Option<Order>,
    pub product: Option<Product>,
}
