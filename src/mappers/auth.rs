use crate::dto::{auth::RegisterUserRequest, users::UserRequest};

#[derive(Debug, Default, Clone, Copy)]
pub struct AuthMapper;

impl AuthMapper {
    /// Reshape a sign-up payload into the generic user payload. The last
    /// name is not part of sign-up and stays unset.
    pub fn add_request_from_register_request(
        &self,
        request: Option<&RegisterUserRequest>,
    ) -> Option<UserRequest> {
        let request = request?;

        Some(UserRequest {
            first_name: request.first_name.clone(),
            last_name: None,
            email: request.email.clone(),
            password: request.password.clone(),
            phone: request.phone.clone(),
        })
    }
}
