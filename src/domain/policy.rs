use axum::http::StatusCode;

use crate::domain::models::auth::Actor;
use crate::domain::models::booking::Booking;
use crate::domain::models::user::Role;
use crate::domain::models::venue::Venue;
use crate::error::AppError;

/// Outcome of a denied rule. The reason and status code are part of the
/// API contract, not just diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    pub reason: &'static str,
    pub status: StatusCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(Denial),
}

/// Authorization rules. Each rule is a pure predicate over the actor and,
/// where relevant, the targeted resource.
pub enum Rule<'a> {
    OwnerRole,
    VenueOwnership(&'a Venue),
    BookingOwnership(&'a Booking),
}

impl Rule<'_> {
    pub fn evaluate(&self, actor: &Actor) -> Decision {
        match self {
            // Denies with 404 rather than 403; the owner surface is hidden
            // from plain users entirely.
            Rule::OwnerRole => {
                if actor.role == Role::Owner {
                    Decision::Allow
                } else {
                    Decision::Deny(Denial {
                        reason: "Owner privilege only",
                        status: StatusCode::NOT_FOUND,
                    })
                }
            }
            Rule::VenueOwnership(venue) => {
                if actor.role == Role::Owner && actor.id == venue.owner_id {
                    Decision::Allow
                } else {
                    Decision::Deny(Denial {
                        reason: "While you are an owner, this venue is not yours",
                        status: StatusCode::FORBIDDEN,
                    })
                }
            }
            Rule::BookingOwnership(booking) => {
                if actor.id == booking.creator_id {
                    Decision::Allow
                } else {
                    Decision::Deny(Denial {
                        reason: "You cannot edit this booking since it is not yours",
                        status: StatusCode::FORBIDDEN,
                    })
                }
            }
        }
    }
}

/// Evaluate a rule and short-circuit into an `AppError` on denial.
pub fn authorize(actor: &Actor, rule: Rule<'_>) -> Result<(), AppError> {
    match rule.evaluate(actor) {
        Decision::Allow => Ok(()),
        Decision::Deny(denial) => Err(AppError::Denied(denial)),
    }
}
