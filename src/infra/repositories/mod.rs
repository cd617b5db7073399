pub mod sqlite_booking_repo;
pub mod sqlite_field_repo;
pub mod sqlite_membership_repo;
pub mod sqlite_user_repo;
pub mod sqlite_venue_repo;
