use crate::auth::{AuthState, NotAuthed};
use crate::builder::DirectAdminClientBuilder;
use crate::cookies;
use anyhow::{anyhow, Result};
use reqwest::{Client, Url};
use reqwest_cookie_store::CookieStoreMutex;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 2222;
pub const DEFAULT_COOKIE_FILE: &str = ".directadmincookie";
pub const DEFAULT_USER_AGENT: &str = concat!("directadmin_api/", env!("CARGO_PKG_VERSION"));

/// Connection parameters for one panel account.
///
/// DirectAdmin listens on its own port (2222 by default), so the port lives
/// here as a transport option and never appears in the action URL string.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Current domain, for accounts with multiple (addon) domains.
    pub domain: String,
    pub https: bool,
    pub cookie_file: PathBuf,
    pub user_agent: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct DirectAdminClient<A: AuthState> {
    pub(crate) _phantom_state: PhantomData<A>,
    pub(crate) client: Client,
    pub(crate) jar: Arc<CookieStoreMutex>,
    pub(crate) config: SessionConfig,
}

impl DirectAdminClient<NotAuthed> {
    pub fn builder(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> DirectAdminClientBuilder {
        DirectAdminClientBuilder::new(host, username, password)
    }
}

impl<A: AuthState> DirectAdminClient<A> {
    /// Set the domain targeted by the domain-pointer operations.
    pub fn set_domain(&mut self, domain: impl Into<String>) {
        self.config.domain = domain.into();
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Absolute URL for a panel action. The port is deliberately absent here;
    /// `send_form` sets it on the parsed URL.
    pub(crate) fn action_url(&self, action: &str) -> String {
        let scheme = if self.config.https { "https" } else { "http" };
        format!("{}://{}/{}", scheme, self.config.host, action)
    }

    /// One form POST against the panel, cookies routed through the jar file.
    ///
    /// Only transport-level failures are errors; the panel reports its own
    /// rejections inside HTTP 200 bodies, which callers inspect themselves.
    pub(crate) async fn send_form(
        &self,
        action: &str,
        fields: &[(String, String)],
    ) -> Result<String> {
        let mut url = Url::parse(&self.action_url(action))?;
        url.set_port(Some(self.config.port))
            .map_err(|_| anyhow!("cannot set port on URL for host {}", self.config.host))?;

        cookies::reload(&self.jar, &self.config.cookie_file)?;

        tracing::debug!(%url, fields = fields.len(), "sending form request");
        let response = self.client.post(url).form(fields).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, bytes = body.len(), "panel responded");

        cookies::persist(&self.jar, &self.config.cookie_file)?;

        Ok(body)
    }
}
