use crate::{
    dto::addresses::{AddressRequest, AddressResponse},
    entity::Address,
};

#[derive(Debug, Clone)]
pub struct AddressMapper {
    separator: String,
}

impl AddressMapper {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn address_from_request(&self, request: Option<&AddressRequest>) -> Option<Address> {
        let request = request?;

        Some(Address {
            street: request.street.clone(),
            city: request.city.clone(),
            state: request.state.clone(),
            zip_code: request.zip_code.clone(),
            country: request.country.clone(),
            ..Default::default()
        })
    }

    pub fn response_from_address(&self, address: Option<&Address>) -> Option<AddressResponse> {
        let address = address?;

        Some(AddressResponse {
            id: address.id,
            user_id: address.user.as_ref().and_then(|user| user.id),
            street: address.street.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zip_code: address.zip_code.clone(),
            country: address.country.clone(),
        })
    }

    /// Single-line rendering: street, city, state, zip code and country,
    /// skipping blank parts. `None` when nothing is left to print.
    pub fn format_full_address(&self, address: Option<&Address>) -> Option<String> {
        let address = address?;

        let parts: Vec<&str> = [
            &address.street,
            &address.city,
            &address.state,
            &address.zip_code,
            &address.country,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref().map(str::trim))
        .filter(|part| !part.is_empty())
        .collect();

        if parts.is_empty() {
            return None;
        }
        Some(parts.join(self.separator.as_str()))
    }
}

impl Default for AddressMapper {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_ADDRESS_SEPARATOR)
    }
}
