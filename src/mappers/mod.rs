//! Entity <-> transfer-object converters.
//!
//! Every converter takes its source as `Option<&T>`: a missing source maps to
//! `None` (or a no-op for in-place updates) before any field is read.
//! Converters that render nested entities hold `Arc` handles to the sibling
//! converter for that entity, so each shape has exactly one field list.

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::config::MapperConfig;

pub mod addresses;
pub mod auth;
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

pub use addresses::AddressMapper;
pub use auth::AuthMapper;
pub use cart_items::CartItemMapper;
pub use carts::CartMapper;
pub use categories::CategoryMapper;
pub use dimensions::DimensionsMapper;
pub use meta::MetaMapper;
pub use order_items::OrderItemMapper;
pub use orders::OrderMapper;
pub use payments::PaymentMapper;
pub use products::ProductMapper;
pub use reviews::ReviewMapper;
pub use users::UserMapper;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub(crate) fn render_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// All converters, wired once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Mappers {
    auth: Arc<AuthMapper>,
    users: Arc<UserMapper>,
    addresses: Arc<AddressMapper>,
    categories: Arc<CategoryMapper>,
    dimensions: Arc<DimensionsMapper>,
    meta: Arc<MetaMapper>,
    reviews: Arc<ReviewMapper>,
    products: Arc<ProductMapper>,
    orders: Arc<OrderMapper>,
    order_items: Arc<OrderItemMapper>,
    cart_items: Arc<CartItemMapper>,
    carts: Arc<CartMapper>,
    payments: Arc<PaymentMapper>,
}

impl Mappers {
    pub fn new(config: &MapperConfig) -> Self {
        tracing::debug!(
            category_url_prefix = %config.category_url_prefix,
            address_separator = ?config.address_separator,
            "wiring mappers"
        );

        let addresses = Arc::new(AddressMapper::new(config.address_separator.clone()));
        let dimensions = Arc::new(DimensionsMapper);
        let meta = Arc::new(MetaMapper);
        let reviews = Arc::new(ReviewMapper);
        let products = Arc::new(ProductMapper::new(
            dimensions.clone(),
            meta.clone(),
            reviews.clone(),
        ));
        let cart_items = Arc::new(CartItemMapper);

        Self {
            auth: Arc::new(AuthMapper),
            users: Arc::new(UserMapper),
            categories: Arc::new(CategoryMapper::new(config.category_url_prefix.clone())),
            orders: Arc::new(OrderMapper::new(products.clone())),
            order_items: Arc::new(OrderItemMapper),
            carts: Arc::new(CartMapper::new(cart_items.clone())),
            payments: Arc::new(PaymentMapper::new(addresses.clone())),
            addresses,
            dimensions,
            meta,
            reviews,
            products,
            cart_items,
        }
    }

    pub fn auth(&self) -> &AuthMapper {
        &self.auth
    }

    pub fn users(&self) -> &UserMapper {
        &self.users
    }

    pub fn addresses(&self) -> &AddressMapper {
        &self.addresses
    }

    pub fn categories(&self) -> &CategoryMapper {
        &self.categories
    }

    pub fn dimensions(&self) -> &DimensionsMapper {
        &self.dimensions
    }

    pub fn meta(&self) -> &MetaMapper {
        &self.meta
    }

    pub fn reviews(&self) -> &ReviewMapper {
        &self.reviews
    }

    pub fn products(&self) -> &ProductMapper {
        &self.products
    }

    pub fn orders(&self) -> &OrderMapper {
        &self.orders
    }

    pub fn order_items(&self) -> &OrderItemMapper {
        &self.order_items
    }

    pub fn cart_items(&self) -> &CartItemMapper {
        &self.cart_items
    }

    pub fn carts(&self) -> &CartMapper {
        &self.carts
    }

    pub fn payments(&self) -> &PaymentMapper {
        &self.payments
    }
}

impl Default for Mappers {
    fn default() -> Self {
        Self::new(&MapperConfig::default())
    }
}
