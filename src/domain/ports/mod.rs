use crate::domain::models::{
    booking::{Booking, BookingMember},
    field::Field,
    user::User,
    venue::{Venue, VenueWithFields},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait VenueRepository: Send + Sync {
    async fn create(&self, venue: &Venue) -> Result<Venue, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Venue>, AppError>;
    async fn list_with_fields(&self) -> Result<Vec<VenueWithFields>, AppError>;
    async fn update(&self, venue: &Venue) -> Result<Venue, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait FieldRepository: Send + Sync {
    async fn create(&self, field: &Field) -> Result<Field, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Field>, AppError>;
    async fn list_by_venue(&self, venue_id: &str) -> Result<Vec<Field>, AppError>;
    async fn update(&self, field: &Field) -> Result<Field, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list_by_field(&self, field_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn update(&self, booking: &Booking) -> Result<Booking, AppError>;
    /// Removes the booking and all of its membership rows in one transaction.
    async fn delete_with_members(&self, id: &str) -> Result<(), AppError>;
    async fn list_joined_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError>;
}

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    async fn create(&self, member: &BookingMember) -> Result<BookingMember, AppError>;
    async fn find(&self, booking_id: &str, user_id: &str) -> Result<Option<BookingMember>, AppError>;
    async fn delete(&self, booking_id: &str, user_id: &str) -> Result<(), AppError>;
    async fn list_users(&self, booking_id: &str) -> Result<Vec<User>, AppError>;
}
