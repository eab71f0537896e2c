use utoipa::OpenApi;

use crate::{
    dto::{
        addresses::{AddressRequest, AddressResponse},
        auth::{RegisterUserRequest, RegisterUserResponse},
        cart::{CartItemResponse, CartResponse},
        categories::{CategoryRequest, CategoryResponse},
        orders::{OrderItemRequest, OrderItemResponse, OrderRequest, OrderResponse, OrderStatusRequest},
        payments::{PaymentRequest, PaymentResponse},
        products::{
            DimensionsRequest, DimensionsResponse, MetaResponse, ProductRequest, ProductResponse,
            ReviewResponse,
        },
        users::{UserRequest, UserResponse},
    },
    entity::{OrderStatus, PaymentStatus, Role},
};

/// Component schemas of every transfer shape, for the HTTP layer to merge
/// into its own document.
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(
            RegisterUserRequest,
            RegisterUserResponse,
            UserRequest,
            UserResponse,
            Role,
            AddressRequest,
            AddressResponse,
            CategoryRequest,
            CategoryResponse,
            DimensionsRequest,
            DimensionsResponse,
            MetaResponse,
            ReviewResponse,
            ProductRequest,
            ProductResponse,
            CartItemResponse,
            CartResponse,
            OrderRequest,
            OrderStatusRequest,
            OrderResponse,
            OrderStatus,
            OrderItemRequest,
            OrderItemResponse,
            PaymentRequest,
            PaymentResponse,
            PaymentStatus
        )
    ),
    tags(
        (name = "Mapping", description = "Request and response shapes of the storefront API")
    )
)]
pub struct MappingDoc;
