use super::{cart_items::CartItem, users::User};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    pub id: Option<i64>,
    pub user: Option<User>,
    pub cart_items: Option<Vec<CartItem>>,
}
