pub mod addresses;
pub mod cart_items;
pub mod carts;
pub mod categories;
pub mod dimensions;
pub mod meta;
pub mod order_items;
pub mod orders;
pub mod payments;
pub mod products;
pub mod reviews;
pub mod users;

pub use addresses::Address;
pub use cart_items::CartItem;
pub use carts::Cart;
pub use categories::Category;
pub use dimensions::Dimensions;
pub use meta::Meta;
pub use order_items::OrderItem;
pub use orders::{Order, OrderStatus};
pub use payments::{Payment, PaymentStatus};
pub use products::Product;
pub use reviews::Review;
pub use users::{Role, User};
