use super::{categories::Category, dimensions::Dimensions, meta::Meta, reviews::Review};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Product {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub price: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub rating: Option<f64>,
    /// Not nullable in storage; a fresh product starts at zero.
    pub stock: i32,
    pub size: Option<String>,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub weight: Option<f64>,
    pub images: Option<Vec<String>>,
    pub dimensions: Option<Dimensions>,
    pub meta: Option<Meta>,
    /// `None` when the relation was not loaded.
    pub reviews: Option<Vec<Review>>,
}

impl Product {
    pub fn with_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}
