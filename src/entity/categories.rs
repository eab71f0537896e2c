#[derive(Clone, Debug, Default, PartialEq)]
pub struct Category {
    pub id: Option<i64>,
    pub slug: Option<String>,
    pub name: Option<String>,
}
