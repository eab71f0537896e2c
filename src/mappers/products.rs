use std::sync::Arc;

use crate::{
    dto::products::{ProductRequest, ProductResponse},
    entity::{Category, Product},
};

use super::{dimensions::DimensionsMapper, meta::MetaMapper, reviews::ReviewMapper};

#[derive(Debug, Clone)]
pub struct ProductMapper {
    dimensions: Arc<DimensionsMapper>,
    meta: Arc<MetaMapper>,
    reviews: Arc<ReviewMapper>,
}

impl ProductMapper {
    pub fn new(
        dimensions: Arc<DimensionsMapper>,
        meta: Arc<MetaMapper>,
        reviews: Arc<ReviewMapper>,
    ) -> Self {
        Self {
            dimensions,
            meta,
            reviews,
        }
    }

    /// Build a new product from an admin payload and the category it was
    /// filed under. Either side may be missing; both missing yields `None`.
    pub fn product_from_request(
        &self,
        request: Option<&ProductRequest>,
        category: Option<&Category>,
    ) -> Option<Product> {
        if request.is_none() && category.is_none() {
            return None;
        }

        let mut product = Product::default();

        if let Some(request) = request {
            product.title = request.title.clone();
            product.description = request.description.clone();
            product.price = request.price;
            if let Some(stock) = request.stock {
                product.stock = stock;
            }
            product.brand = request.brand.clone();
            product.sku = request.sku.clone();
            product.discount_percentage = request.discount_percentage;
            product.weight = request.weight;
            product.size = request.size.clone();
            product.dimensions = self.dimensions.to_entity(request.dimensions.as_ref());
            product.images = request.images.clone();
        }
        product.category = category.cloned();

        Some(product)
    }

    pub fn response_from_product(&self, product: Option<&Product>) -> Option<ProductResponse> {
        product.map(|product| self.product_response(product))
    }

    pub fn response_list_from_products(
        &self,
        products: Option<&[Product]>,
    ) -> Option<Vec<ProductResponse>> {
        let products = products?;
        tracing::trace!(count = products.len(), "mapping product list");

        Some(
            products
                .iter()
                .map(|product| self.product_response(product))
                .collect(),
        )
    }

    fn product_response(&self, product: &Product) -> ProductResponse {
        ProductResponse {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            category: product
                .category
                .as_ref()
                .and_then(|category| category.slug.clone()),
            price: product.price,
            discount_percentage: product.discount_percentage,
            rating: product.rating,
            stock: product.stock,
            size: product.size.clone(),
            brand: product.brand.clone(),
            sku: product.sku.clone(),
            weight: product.weight,
            images: product.images.clone(),
            dimensions: self.dimensions.to_response(product.dimensions.as_ref()),
            meta: self.meta.to_response(product.meta.as_ref()),
            reviews: self.reviews.to_response_list(product.reviews.as_deref()),
        }
    }
}

impl Default for ProductMapper {
    fn default() -> Self {
        Self::new(
            Arc::new(DimensionsMapper),
            Arc::new(MetaMapper),
            Arc::new(ReviewMapper),
        )
    }
}
