use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, Role, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

impl UserCommandService {
    /// The very first account bootstraps the system as admin; after that only
    /// callers holding `users:create` may add accounts.
    pub async fn register(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: RegisterUserCommand,
    ) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        if self.user_repo.count().await? == 0 {
            let candidate = self
                .new_user(username.clone(), email.clone(), &command.password, Role::Admin)
                .await?;
            if let Some(user) = self.user_repo.insert_if_empty(candidate).await? {
                tracing::info!(user_id = i64::from(user.id), "bootstrap admin registered");
                return Ok(user.into());
            }
            tracing::debug!("bootstrap lost to a concurrent registration");
        }

        let role = authorized_role(actor, command.role)?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let new_user = self.new_user(username, email, &command.password, role).await?;
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = i64::from(user.id), role = %user.role, "user registered");

        Ok(user.into())
    }

    async fn new_user(
        &self,
        username: Username,
        email: Email,
        password: &str,
        role: Role,
    ) -> ApplicationResult<NewUser> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        Ok(NewUser::new(username, email, password_hash, role, self.clock.now()))
    }
}

fn authorized_role(actor: Option<&AuthenticatedUser>, role: Option<Role>) -> ApplicationResult<Role> {
    let requester =
        actor.ok_or_else(|| ApplicationError::forbidden("administrative privileges are required"))?;
    ensure_capability(requester, "users", "create")?;
    Ok(role.unwrap_or_default())
}
