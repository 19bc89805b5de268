use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_USER_ROLE: &str = "users_role_chk";
const CNT_AUDIT_ACTION: &str = "audit_events_action_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_USER_EMAIL => DomainError::Conflict("email already registered".into()),
                    CNT_USER_ROLE => DomainError::Validation("unknown role".into()),
                    CNT_AUDIT_ACTION => {
                        DomainError::Validation("audit action must be LOGIN or LOGOUT".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
