use std::sync::Arc;

use crate::domain::ports::inbound::{AvatarService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub avatar_service: Arc<dyn AvatarService>,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserService>, avatar_service: Arc<dyn AvatarService>) -> Self {
        Self {
            user_service,
            avatar_service,
        }
    }
}
