use super::UserCommandService;
use crate::{
    application::{
        commands::audit::RequestContext,
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{User, Username},
};

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    /// Check credentials, issue a token and append a LOGIN event. The audit
    /// write cannot turn a successful login into a failed one.
    pub async fn login(
        &self,
        command: LoginUserCommand,
        context: &RequestContext,
    ) -> ApplicationResult<LoginResult> {
        let username = Username::new(command.username)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let user = self
            .find_and_authenticate_user(&username, &command.password)
            .await?;

        let token = self.issue_token(&user).await?;

        self.audit_recorder.record_login(user.id, context).await;

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    async fn issue_token(&self, user: &User) -> ApplicationResult<AuthTokenDto> {
        let subject = TokenSubject {
            user_id: user.id,
            username: user.username.to_string(),
            role: user.role,
            capabilities: user.role.default_capabilities(),
        };

        self.token_manager.issue(subject).await
    }

    async fn find_and_authenticate_user(
        &self,
        username: &Username,
        password: &str,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
