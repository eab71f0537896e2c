use chrono::{NaiveDate, NaiveDateTime};
use ecommerce_mappers::{
    MapperError, Mappers,
    dto::orders::{OrderItemRequest, OrderRequest, OrderStatusRequest},
    entity::{Address, Category, Order, OrderItem, OrderStatus, Product, User},
};

fn order_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .and_then(|d| d.and_hms_opt(10, 30, 0))
        .unwrap()
}

fn product(id: i64, slug: &str) -> Product {
    Product {
        id: Some(id),
        title: Some(format!("Product {id}")),
        price: Some(id as f64 * 10.0),
        stock: 3,
        category: Some(Category {
            id: Some(100 + id),
            slug: Some(slug.into()),
            name: None,
        }),
        ..Default::default()
    }
}

fn placed_order() -> Order {
    Order {
        id: Some(77),
        user: Some(User::with_id(7)),
        address: Some(Address::with_id(3)),
        products: Some(vec![product(2, "shoes"), product(1, "bags"), product(3, "hats")]),
        order_date: Some(order_date()),
        total_price: Some(60.0),
        order_status: Some(OrderStatus::Delivered),
    }
}

#[test]
fn null_sources_map_to_none() {
    let mappers = Mappers::default();
    assert_eq!(mappers.orders().order_from_request(None), None);
    assert_eq!(mappers.orders().response_from_order(None), None);
    assert_eq!(mappers.orders().to_response_dto(None), None);
    assert_eq!(mappers.orders().to_entity(None), Ok(None));
    assert_eq!(mappers.orders().map_product(None), None);
    assert_eq!(mappers.order_items().order_item_from_request(None), None);
    assert_eq!(mappers.order_items().response_from_order_item(None), None);
}

#[test]
fn order_request_builds_id_only_references() {
    let mappers = Mappers::default();
    let request = OrderRequest {
        user_id: Some(7),
        address_id: Some(3),
        product_id: Some(vec![4, 2, 9]),
        order_date: Some(order_date()),
        total_price: Some(149.5),
    };

    let order = mappers.orders().order_from_request(Some(&request)).unwrap();
    assert_eq!(order.id, None);
    assert_eq!(order.user, Some(User::with_id(7)));
    assert_eq!(order.address, Some(Address::with_id(3)));
    assert_eq!(
        order.products,
        Some(vec![Product::with_id(4), Product::with_id(2), Product::with_id(9)])
    );
    assert_eq!(order.order_status, None);

    let response = mappers.orders().response_from_order(Some(&order)).unwrap();
    assert_eq!(response.user_id, Some(7));
    assert_eq!(response.address_id, Some(3));
    assert_eq!(response.order_date, request.order_date);
    assert_eq!(response.total_price, request.total_price);
    let ids: Vec<_> = response.products.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![Some(4), Some(2), Some(9)]);
}

#[test]
fn order_request_without_ids_leaves_relations_unset() {
    let mappers = Mappers::default();
    let order = mappers
        .orders()
        .order_from_request(Some(&OrderRequest::default()))
        .unwrap();
    assert_eq!(order.user, None);
    assert_eq!(order.address, None);
    assert_eq!(order.products, None);

    let response = mappers.orders().response_from_order(Some(&order)).unwrap();
    assert_eq!(response.user_id, None);
    assert_eq!(response.address_id, None);
    assert_eq!(response.products, None);
}

#[test]
fn full_response_delegates_product_rendering() {
    let mappers = Mappers::default();
    let order = placed_order();
    let response = mappers.orders().response_from_order(Some(&order)).unwrap();

    assert_eq!(response.id, Some(77));
    assert_eq!(response.status, None);
    let products = response.products.unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(
        products,
        mappers
            .products()
            .response_list_from_products(order.products.as_deref())
            .unwrap()
    );
    let slugs: Vec<_> = products.iter().map(|p| p.category.as_deref()).collect();
    assert_eq!(slugs, vec![Some("shoes"), Some("bags"), Some("hats")]);
}

#[test]
fn status_response_renders_status_name() {
    let mappers = Mappers::default();
    let response = mappers.orders().to_response_dto(Some(&placed_order())).unwrap();
    assert_eq!(response.status.as_deref(), Some("DELIVERED"));
    assert_eq!(response.user_id, None);
    assert_eq!(response.address_id, None);
    assert_eq!(response.products.map(|p| p.len()), Some(3));

    let json = serde_json::to_value(
        mappers.orders().to_response_dto(Some(&placed_order())).unwrap(),
    )
    .unwrap();
    assert_eq!(json["status"], "DELIVERED");
    assert_eq!(json["totalPrice"], 60.0);
}

#[test]
fn empty_product_list_stays_empty() {
    let mappers = Mappers::default();
    let order = Order {
        products: Some(Vec::new()),
        ..placed_order()
    };
    let response = mappers.orders().to_response_dto(Some(&order)).unwrap();
    assert_eq!(response.products, Some(Vec::new()));
}

#[test]
fn status_request_is_parsed() {
    let mappers = Mappers::default();
    let request = OrderStatusRequest {
        status: Some("SHIPPED".into()),
    };
    let order = mappers.orders().to_entity(Some(&request)).unwrap().unwrap();
    assert_eq!(order.order_status, Some(OrderStatus::Shipped));
    assert_eq!(order.id, None);

    let blank = mappers
        .orders()
        .to_entity(Some(&OrderStatusRequest::default()))
        .unwrap()
        .unwrap();
    assert_eq!(blank.order_status, None);
}

#[test]
fn unknown_status_is_rejected() {
    let mappers = Mappers::default();
    let request = OrderStatusRequest {
        status: Some("FOO".into()),
    };
    let err = mappers.orders().to_entity(Some(&request)).unwrap_err();
    assert_eq!(
        err,
        MapperError::InvalidEnumValue {
            kind: "OrderStatus",
            value: "FOO".into(),
        }
    );
    assert_eq!(err.to_string(), "Invalid OrderStatus value: FOO");
}

#[test]
fn map_product_builds_stub() {
    let mappers = Mappers::default();
    assert_eq!(mappers.orders().map_product(Some(12)), Some(Product::with_id(12)));
}

#[test]
fn order_item_references_are_projected_to_ids() {
    let mappers = Mappers::default();
    let request = OrderItemRequest {
        order_id: Some(77),
        product_id: Some(2),
    };
    let item = mappers
        .order_items()
        .order_item_from_request(Some(&request))
        .unwrap();
    assert_eq!(item.order, Some(Order::with_id(77)));
    assert_eq!(item.product, Some(Product::with_id(2)));

    let response = mappers
        .order_items()
        .response_from_order_item(Some(&item))
        .unwrap();
    assert_eq!(response.order_id, Some(77));
    assert_eq!(response.product_id, Some(2));

    let dangling = OrderItem::default();
    let response = mappers
        .order_items()
        .response_from_order_item(Some(&dangling))
        .unwrap();
    assert_eq!(response.order_id, None);
    assert_eq!(response.product_id, None);
}
