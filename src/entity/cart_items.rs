use super::products::Product;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartItem {
    pub id: Option<i64>,
    pub product: Option<Product>,
    pub quantity: Option<i32>,
}
