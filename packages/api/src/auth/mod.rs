//! # Two-step sign-in
//!
//! Signing in takes two calls that must both succeed:
//!
//! 1. `POST /auth/login` exchanges credentials for an access token,
//! 2. `GET /auth/me`, authenticated with *that* token, fetches the profile.
//!
//! [`sign_in`] runs them in order and returns both results together. Nothing
//! is written anywhere in between, so a failure at step 2 simply drops the
//! token from step 1: callers never observe a token without a user.

use store::UserProfile;

use crate::error::ApiError;
use crate::models::{Credentials, NewAccount};
use crate::AuthApi;

/// Result of a completed sign-in.
#[derive(Clone, Debug, PartialEq)]
pub struct SignedIn {
    pub token: String,
    pub user: UserProfile,
}

/// Exchange credentials for a token, then fetch the profile with it.
pub async fn sign_in<A: AuthApi>(api: &A, credentials: &Credentials) -> Result<SignedIn, ApiError> {
    let token = api.login(credentials).await?.access_token;

    match api.get_current_user_with(&token).await {
        Ok(user) => Ok(SignedIn { token, user }),
        Err(e) => {
            tracing::warn!("Profile fetch failed after login, discarding token: {}", e);
            Err(e)
        }
    }
}

/// Create an account. Does not sign in.
pub async fn sign_up<A: AuthApi>(api: &A, account: &NewAccount) -> Result<UserProfile, ApiError> {
    api.register(account).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TokenResponse;
    use std::cell::RefCell;

    /// Scripted AuthApi that records the calls it receives.
    #[derive(Default)]
    struct ScriptedAuth {
        reject_login: bool,
        reject_profile: bool,
        calls: RefCell<Vec<String>>,
    }

    impl AuthApi for ScriptedAuth {
        async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("login:{}", credentials.username));
            if self.reject_login {
                return Err(ApiError::Status {
                    status: 401,
                    detail: Some("Invalid credentials".to_string()),
                });
            }
            Ok(TokenResponse {
                access_token: "tok".to_string(),
                token_type: Some("bearer".to_string()),
            })
        }

        async fn register(&self, account: &NewAccount) -> Result<UserProfile, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("register:{}", account.username));
            Ok(UserProfile {
                id: Some(2),
                username: account.username.clone(),
                email: account.email.clone(),
                full_name: None,
                disabled: None,
            })
        }

        async fn get_current_user_with(&self, token: &str) -> Result<UserProfile, ApiError> {
            self.calls.borrow_mut().push(format!("me:{token}"));
            if self.reject_profile {
                return Err(ApiError::Status {
                    status: 404,
                    detail: Some("User not found".to_string()),
                });
            }
            Ok(UserProfile {
                id: Some(1),
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                full_name: None,
                disabled: Some(false),
            })
        }
    }

    #[tokio::test]
    async fn test_sign_in_fetches_profile_with_new_token() {
        let api = ScriptedAuth::default();
        let signed = sign_in(&api, &Credentials::new("ada", "pw")).await.unwrap();

        assert_eq!(signed.token, "tok");
        assert_eq!(signed.user.username, "ada");
        assert_eq!(*api.calls.borrow(), vec!["login:ada", "me:tok"]);
    }

    #[tokio::test]
    async fn test_rejected_login_skips_profile() {
        let api = ScriptedAuth {
            reject_login: true,
            ..Default::default()
        };
        let err = sign_in(&api, &Credentials::new("ada", "bad")).await.unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(*api.calls.borrow(), vec!["login:ada"]);
    }

    #[tokio::test]
    async fn test_profile_failure_fails_sign_in() {
        let api = ScriptedAuth {
            reject_profile: true,
            ..Default::default()
        };
        let err = sign_in(&api, &Credentials::new("ada", "pw")).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_sign_up_does_not_sign_in() {
        let api = ScriptedAuth::default();
        let user = sign_up(&api, &NewAccount::new("grace", "grace@example.com", "pw"))
            .await
            .unwrap();

        assert_eq!(user.username, "grace");
        assert_eq!(*api.calls.borrow(), vec!["register:grace"]);
    }
}
