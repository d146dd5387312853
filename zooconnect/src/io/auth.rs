//! Simulated account and application round trips.
//!
//! There is no credential store. Each submission waits for the configured
//! delay and then succeeds, provided the required fields are filled in.

use std::time::Duration;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::info;

use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn heading(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome back",
            AuthMode::Register => "Create an account",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            AuthMode::Login => "Enter your credentials to access your account",
            AuthMode::Register => "Enter your information to create an account",
        }
    }
}

/// Submitted login or registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthForm {
    /// Only read in register mode.
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Toast shown after a stub round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    /// Where the page navigates afterwards, if anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

/// Validate required fields, wait `delay`, then report success.
pub async fn submit_auth(mode: AuthMode, form: &AuthForm, delay: Duration) -> Result<Notice> {
    if mode == AuthMode::Register && form.name.trim().is_empty() {
        bail!("name is required");
    }
    if form.email.trim().is_empty() {
        bail!("email is required");
    }
    if form.password.is_empty() {
        bail!("password is required");
    }

    sleep(delay).await;
    info!(mode = ?mode, email = %form.email.trim(), "stub authentication succeeded");

    let title = match mode {
        AuthMode::Login => "Welcome back!",
        AuthMode::Register => "Account created successfully!",
    };
    Ok(Notice {
        title: title.to_string(),
        description: "You are now logged in.".to_string(),
        redirect: Some("/".to_string()),
    })
}

/// Simulate applying to an experience. Unknown ids are rejected up front.
pub async fn submit_application(catalog: &Catalog, id: &str, delay: Duration) -> Result<Notice> {
    let Some(experience) = catalog.get(id) else {
        bail!("unknown experience '{}'", id);
    };

    sleep(delay).await;
    info!(id = %experience.id, "stub application submitted");

    Ok(Notice {
        title: "Application submitted!".to_string(),
        description: "The sanctuary will review your application and contact you soon."
            .to_string(),
        redirect: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Continent, WildlifeType};
    use crate::test_support::experience;
    use tokio::time::Instant;

    fn form(name: &str, email: &str, password: &str) -> AuthForm {
        AuthForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn login_succeeds_after_delay() {
        let start = Instant::now();
        let notice = submit_auth(
            AuthMode::Login,
            &form("", "a@example.com", "secret"),
            Duration::from_millis(1500),
        )
        .await
        .expect("login");
        assert_eq!(notice.title, "Welcome back!");
        assert_eq!(notice.redirect.as_deref(), Some("/"));
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn register_requires_name() {
        let err = submit_auth(
            AuthMode::Register,
            &form(" ", "a@example.com", "secret"),
            Duration::ZERO,
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("name"));

        let notice = submit_auth(
            AuthMode::Register,
            &form("Ada", "a@example.com", "secret"),
            Duration::ZERO,
        )
        .await
        .expect("register");
        assert_eq!(notice.title, "Account created successfully!");
    }

    #[tokio::test(start_paused = true)]
    async fn login_ignores_name_but_requires_credentials() {
        let err = submit_auth(AuthMode::Login, &form("", "", "secret"), Duration::ZERO)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[tokio::test(start_paused = true)]
    async fn application_requires_known_experience() {
        let catalog = Catalog::new(vec![experience(
            "known",
            Continent::Asia,
            &[WildlifeType::Elephants],
            1,
            None,
        )]);
        let notice = submit_application(&catalog, "known", Duration::from_millis(1500))
            .await
            .expect("apply");
        assert_eq!(notice.title, "Application submitted!");
        assert!(notice.redirect.is_none());

        assert!(
            submit_application(&catalog, "other", Duration::ZERO)
                .await
                .is_err()
        );
    }
}
