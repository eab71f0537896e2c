/// Physical size of a product, embedded in the product row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub depth: Option<f64>,
}
