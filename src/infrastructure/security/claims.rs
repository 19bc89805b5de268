// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Capability, Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Turn the authority facts of a verified token back into a caller.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut ctx = ClaimsContext::default();
    for fact in facts {
        ctx.apply(fact.predicate);
    }
    ctx.into_user()
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    username: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    capabilities: HashSet<Capability>,
}

impl ClaimsContext {
    fn apply(&mut self, predicate: Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.user_id = Some(*id);
                self.username = Some(name.clone());
            }
            ("role", [Term::Str(role)]) => {
                self.role = role.parse().ok();
            }
            ("issued_at", [Term::Date(secs)]) => {
                self.issued_at = Some(UNIX_EPOCH + Duration::from_secs(*secs));
            }
            ("expires_at", [Term::Date(secs)]) => {
                self.expires_at = Some(UNIX_EPOCH + Duration::from_secs(*secs));
            }
            ("right", [Term::Str(resource), Term::Str(action)]) => {
                self.capabilities
                    .insert(Capability::new(resource.clone(), action.clone()));
            }
            _ => {}
        }
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let user_id = self
            .user_id
            .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
        let username = self
            .username
            .ok_or_else(|| ApplicationError::unauthorized("missing username"))?;
        let role = self
            .role
            .ok_or_else(|| ApplicationError::unauthorized("missing role"))?;
        let issued_at = self
            .issued_at
            .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
        let expires_at = self
            .expires_at
            .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

        let id = UserId::new(user_id).map_err(|_| ApplicationError::unauthorized("invalid user id"))?;

        let mut capabilities = role.default_capabilities();
        capabilities.extend(self.capabilities);

        Ok(AuthenticatedUser {
            id,
            username,
            role,
            capabilities,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
        })
    }
}
