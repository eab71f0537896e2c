use crate::{
    dto::{
        auth::RegisterUserResponse,
        users::{UserRequest, UserResponse},
    },
    entity::User,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct UserMapper;

impl UserMapper {
    /// Copy the request's profile fields onto an existing user.
    ///
    /// Every field of [`UserRequest`] is written, including `None`s: a field
    /// left out of the payload clears the stored value. `id` and `role` are
    /// never touched. A `None` request leaves the user as it was.
    pub fn update_user_from_request(&self, request: Option<&UserRequest>, user: &mut User) {
        let Some(request) = request else {
            return;
        };

        user.first_name = request.first_name.clone();
        user.last_name = request.last_name.clone();
        user.email = request.email.clone();
        user.password = request.password.clone();
        user.phone = request.phone.clone();
    }

    pub fn user_from_request(&self, request: Option<&UserRequest>) -> Option<User> {
        let request = request?;

        Some(User {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            password: request.password.clone(),
            phone: request.phone.clone(),
            ..Default::default()
        })
    }

    pub fn register_response_from_user(&self, user: Option<&User>) -> Option<RegisterUserResponse> {
        let user = user?;

        Some(RegisterUserResponse {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
        })
    }

    pub fn response_from_user(&self, user: Option<&User>) -> Option<UserResponse> {
        let user = user?;

        Some(UserResponse {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role.map(|role| role.as_str().to_string()),
        })
    }
}
