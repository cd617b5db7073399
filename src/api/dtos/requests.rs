use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub role: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateVenueRequest {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Deserialize)]
pub struct UpdateVenueRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateFieldRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Deserialize)]
pub struct UpdateFieldRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub play_start_time: String,
    pub play_end_time: String,
}

#[derive(Deserialize)]
pub struct UpdateBookingRequest {
    pub play_start_time: Option<String>,
    pub play_end_time: Option<String>,
}
