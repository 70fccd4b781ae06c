use crate::auth::NotAuthed;
use crate::base::{
    DirectAdminClient, SessionConfig, DEFAULT_COOKIE_FILE, DEFAULT_PORT, DEFAULT_USER_AGENT,
};
use crate::cookies;
use anyhow::{Context, Result};
use reqwest::redirect::Policy;
use reqwest::ClientBuilder;
use reqwest_cookie_store::CookieStoreMutex;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Builds a [`DirectAdminClient`] in the unauthenticated state.
///
/// Host and credentials are mandatory; everything else defaults to the panel's
/// conventions (port 2222, plain HTTP, `.directadmincookie` jar next to the
/// working directory).
pub struct DirectAdminClientBuilder {
    config: SessionConfig,
}

impl DirectAdminClientBuilder {
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            config: SessionConfig {
                host: host.into(),
                port: DEFAULT_PORT,
                username: username.into(),
                password: password.into(),
                domain: String::new(),
                https: false,
                cookie_file: PathBuf::from(DEFAULT_COOKIE_FILE),
                user_agent: DEFAULT_USER_AGENT.to_owned(),
                timeout: Duration::from_secs(30),
            },
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Domain targeted by the domain-pointer operations.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.config.domain = domain.into();
        self
    }

    pub fn https(mut self, https: bool) -> Self {
        self.config.https = https;
        self
    }

    pub fn cookie_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.cookie_file = path.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Upper bound on one request. The original client had none; a bounded
    /// timeout is the one safety extension this crate adds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<DirectAdminClient<NotAuthed>> {
        let jar = Arc::new(CookieStoreMutex::new(cookies::load(
            &self.config.cookie_file,
        )?));

        let client = ClientBuilder::new()
            .cookie_provider(Arc::clone(&jar))
            .user_agent(self.config.user_agent.as_str())
            // Login bounces through a redirect before landing on the panel page.
            .redirect(Policy::limited(10))
            .timeout(self.config.timeout)
            .build()
            .context("failed to create HTTP client")?;

        Ok(DirectAdminClient {
            _phantom_state: PhantomData,
            client,
            jar,
            config: self.config,
        })
    }
}
