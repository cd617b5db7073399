use std::sync::Arc;
use crate::domain::ports::{
    BookingRepository, FieldRepository, MembershipRepository, UserRepository, VenueRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub venue_repo: Arc<dyn VenueRepository>,
    pub field_repo: Arc<dyn FieldRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub membership_repo: Arc<dyn MembershipRepository>,
    pub auth_service: Arc<AuthService>,
}
