use chrono::NaiveDate;
use ecommerce_mappers::{
    MapperConfig, Mappers,
    dto::payments::PaymentRequest,
    entity::{Address, Cart, CartItem, Order, Payment, PaymentStatus, Product, User},
};

fn line(id: i64, product: Option<Product>, quantity: Option<i32>) -> CartItem {
    CartItem {
        id: Some(id),
        product,
        quantity,
    }
}

fn priced(id: i64, title: &str, price: f64) -> Product {
    Product {
        id: Some(id),
        title: Some(title.into()),
        price: Some(price),
        ..Default::default()
    }
}

fn billing_address() -> Address {
    Address {
        id: Some(3),
        street: Some("Atatürk Blv. 5".into()),
        city: Some("İzmir".into()),
        state: Some("Konak".into()),
        zip_code: Some("35250".into()),
        country: Some("Türkiye".into()),
        user: Some(User::with_id(7)),
    }
}

#[test]
fn null_sources_map_to_none() {
    let mappers = Mappers::default();
    assert_eq!(mappers.carts().to_response(None), None);
    assert_eq!(mappers.cart_items().to_response(None), None);
    assert_eq!(mappers.cart_items().to_response_list(None), None);
    assert_eq!(mappers.payments().to_response(None), None);
    assert_eq!(mappers.payments().to_entity(None, None, None), None);
}

#[test]
fn cart_items_project_product_fields() {
    let mappers = Mappers::default();
    let item = line(1, Some(priced(10, "Mug", 45.5)), Some(2));
    let response = mappers.cart_items().to_response(Some(&item)).unwrap();
    assert_eq!(response.id, Some(1));
    assert_eq!(response.product_id, Some(10));
    assert_eq!(response.product_title.as_deref(), Some("Mug"));
    assert_eq!(response.price, Some(45.5));
    assert_eq!(response.quantity, Some(2));

    let orphan = mappers
        .cart_items()
        .to_response(Some(&line(2, None, Some(1))))
        .unwrap();
    assert_eq!(orphan.product_id, None);
    assert_eq!(orphan.product_title, None);
    assert_eq!(orphan.price, None);
}

#[test]
fn cart_response_keeps_item_order_and_totals_lines() {
    let mappers = Mappers::default();
    let cart = Cart {
        id: Some(5),
        user: Some(User::with_id(7)),
        cart_items: Some(vec![
            line(3, Some(priced(30, "Lamp", 100.0)), Some(1)),
            line(1, Some(priced(10, "Mug", 20.0)), Some(3)),
            line(2, None, Some(4)),
        ]),
    };

    let response = mappers.carts().to_response(Some(&cart)).unwrap();
    assert_eq!(response.cart_id, Some(5));
    assert_eq!(response.user_id, Some(7));
    let ids: Vec<_> = response.items.as_ref().unwrap().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
    assert_eq!(response.total_price, 160.0);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["cartId"], 5);
    assert_eq!(json["items"][1]["productTitle"], "Mug");
}

#[test]
fn cart_without_owner_or_items() {
    let mappers = Mappers::default();
    let unloaded = mappers.carts().to_response(Some(&Cart::default())).unwrap();
    assert_eq!(unloaded.user_id, None);
    assert_eq!(unloaded.items, None);
    assert_eq!(unloaded.total_price, 0.0);

    let empty = Cart {
        cart_items: Some(Vec::new()),
        ..Default::default()
    };
    let response = mappers.carts().to_response(Some(&empty)).unwrap();
    assert_eq!(response.items, Some(Vec::new()));
}

#[test]
fn payment_entity_starts_pending() {
    let mappers = Mappers::default();
    let request = PaymentRequest {
        provider: Some("iyzico".into()),
        method: Some("CARD".into()),
        amount: Some(250.0),
        currency: Some("TRY".into()),
    };
    let order = Order::with_id(77);

    let payment = mappers
        .payments()
        .to_entity(Some(&request), Some(&order), Some(&billing_address()))
        .unwrap();
    assert_eq!(payment.status, Some(PaymentStatus::Pending));
    assert_eq!(payment.provider.as_deref(), Some("iyzico"));
    assert_eq!(payment.method.as_deref(), Some("CARD"));
    assert_eq!(payment.amount, Some(250.0));
    assert_eq!(payment.currency.as_deref(), Some("TRY"));
    assert_eq!(payment.order, Some(order));
    assert_eq!(payment.address, Some(billing_address()));
    assert_eq!(payment.transaction_id, None);

    let bare = mappers
        .payments()
        .to_entity(None, Some(&Order::with_id(1)), None)
        .unwrap();
    assert_eq!(bare.status, Some(PaymentStatus::Pending));
    assert_eq!(bare.provider, None);
    assert_eq!(bare.address, None);
}

#[test]
fn payment_response_flattens_order_and_address() {
    let mappers = Mappers::default();
    let paid_at = NaiveDate::from_ymd_opt(2025, 2, 1).and_then(|d| d.and_hms_opt(12, 0, 0));
    let payment = Payment {
        id: Some(9),
        order: Some(Order::with_id(77)),
        address: Some(billing_address()),
        method: Some("CARD".into()),
        provider: Some("iyzico".into()),
        status: Some(PaymentStatus::Success),
        amount: Some(250.0),
        currency: Some("TRY".into()),
        transaction_id: Some("tx-123".into()),
        payment_date: paid_at,
    };

    let response = mappers.payments().to_response(Some(&payment)).unwrap();
    assert_eq!(response.id, Some(9));
    assert_eq!(response.order_id, Some(77));
    assert_eq!(response.status, Some(PaymentStatus::Success));
    assert_eq!(response.transaction_id.as_deref(), Some("tx-123"));
    assert_eq!(response.payment_date, paid_at);
    assert_eq!(
        response.address.as_deref(),
        Some("Atatürk Blv. 5, İzmir, Konak, 35250, Türkiye")
    );

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["status"], "SUCCESS");
    assert_eq!(json["transactionId"], "tx-123");
}

#[test]
fn payment_without_relations() {
    let mappers = Mappers::default();
    let response = mappers.payments().to_response(Some(&Payment::default())).unwrap();
    assert_eq!(response.order_id, None);
    assert_eq!(response.address, None);
    assert_eq!(response.status, None);
}

#[test]
fn address_separator_follows_config() {
    let config = MapperConfig {
        address_separator: " / ".into(),
        ..Default::default()
    };
    let mappers = Mappers::new(&config);
    let payment = Payment {
        address: Some(Address {
            street: Some("A".into()),
            country: Some("B".into()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let response = mappers.payments().to_response(Some(&payment)).unwrap();
    assert_eq!(response.address.as_deref(), Some("A / B"));
}
