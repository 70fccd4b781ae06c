use crate::base::DirectAdminClient;
use crate::endpoints::Action;
use anyhow::bail;
use sealed::sealed;
use std::marker::PhantomData;

/// Message DirectAdmin embeds in the login page on a rejected attempt. The
/// panel answers HTTP 200 either way, so this substring is the login contract.
pub(crate) const INVALID_LOGIN_MESSAGE: &str =
    "Invalid login. Please verify your Username and Password";

#[derive(Debug, Clone)]
pub struct Authed;
#[derive(Debug, Clone)]
pub struct NotAuthed;

#[sealed]
pub trait AuthState {}
#[sealed]
impl AuthState for Authed {}
#[sealed]
impl AuthState for NotAuthed {}

impl DirectAdminClient<NotAuthed> {
    /// Log in with the configured credentials, storing the session cookie in
    /// the jar file. Domain-pointer operations exist only on the returned
    /// authenticated client.
    pub async fn login(self) -> anyhow::Result<DirectAdminClient<Authed>> {
        let fields = [
            ("referer".to_owned(), "/".to_owned()),
            ("username".to_owned(), self.config.username.clone()),
            ("password".to_owned(), self.config.password.clone()),
        ];
        let body = self.send_form(&Action::Login.to_string(), &fields).await?;

        if body.contains(INVALID_LOGIN_MESSAGE) {
            tracing::warn!(user = %self.config.username, "panel rejected login");
            bail!("Invalid login. Please verify your username and password");
        }

        Ok(DirectAdminClient {
            _phantom_state: PhantomData,
            client: self.client,
            jar: self.jar,
            config: self.config,
        })
    }
}
