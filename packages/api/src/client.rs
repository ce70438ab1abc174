//! # HTTP client wrapper
//!
//! [`ApiClient`] owns one `reqwest::Client` and builds two kinds of request:
//!
//! - REST requests against [`ApiConfig::rest_url`],
//! - GraphQL `POST`s against [`ApiConfig::graphql_url`].
//!
//! Both read the bearer token from the [`KeyValueStore`] at build time and
//! attach `Authorization: Bearer <token>` when one is stored. The only
//! exception is [`AuthApi::get_current_user_with`], which authenticates with an
//! explicit token so sign-in never depends on storage write order.
//!
//! Responses are unwrapped here and nowhere else: non-2xx statuses become
//! [`ApiError::Status`] carrying the FastAPI `detail`, GraphQL envelopes go
//! through [`GraphQlResponse::field`].

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use store::{KeyValueStore, UserProfile, TOKEN_KEY};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::graphql::{self, GraphQlRequest, GraphQlResponse};
use crate::models::{
    Credentials, DislikeCount, LikeCount, NewAccount, Recommendation, Snippet, SnippetDraft,
    TokenResponse,
};
use crate::{AuthApi, SnippetApi};

/// REST + GraphQL client that authenticates from durable storage.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    config: ApiConfig,
    store: S,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(config: ApiConfig, store: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            store,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// The storage the bearer token is read from.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn stored_token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Start a REST request, authenticated when a token is stored.
    pub fn rest(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.rest_url(path));
        match self.stored_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Start a GraphQL request, authenticated when a token is stored.
    pub fn graphql(&self, request: &GraphQlRequest) -> RequestBuilder {
        let builder = self.http.post(self.config.graphql_url()).json(request);
        match self.stored_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn login_request(&self, credentials: &Credentials) -> RequestBuilder {
        self.rest(Method::POST, "/auth/login").form(credentials)
    }

    fn register_request(&self, account: &NewAccount) -> RequestBuilder {
        self.rest(Method::POST, "/auth/register").json(account)
    }

    fn me_request(&self, token: &str) -> RequestBuilder {
        self.http
            .get(self.config.rest_url("/auth/me"))
            .bearer_auth(token)
    }

    /// `GET /auth/me` with whatever token is in storage.
    pub async fn get_current_user(&self) -> Result<UserProfile, ApiError> {
        send_json(self.rest(Method::GET, "/auth/me")).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: GraphQlRequest,
        field: &'static str,
    ) -> Result<T, ApiError> {
        let envelope: GraphQlResponse = send_json(self.graphql(&request)).await?;
        envelope.field(field)
    }
}

impl<S: KeyValueStore> AuthApi for ApiClient<S> {
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        send_json(self.login_request(credentials)).await
    }

    async fn register(&self, account: &NewAccount) -> Result<UserProfile, ApiError> {
        send_json(self.register_request(account)).await
    }

    async fn get_current_user_with(&self, token: &str) -> Result<UserProfile, ApiError> {
        send_json(self.me_request(token)).await
    }
}

impl<S: KeyValueStore> SnippetApi for ApiClient<S> {
    async fn get_all_snippets(&self) -> Result<Vec<Snippet>, ApiError> {
        self.execute(GraphQlRequest::new(graphql::GET_ALL_SNIPPETS), "getAllSnippets")
            .await
    }

    async fn get_snippet(&self, id: i32) -> Result<Snippet, ApiError> {
        let request = GraphQlRequest::new(graphql::GET_SNIPPET).with_variables(json!({ "id": id }));
        self.execute(request, "getSnippet").await
    }

    async fn create_snippet(&self, draft: &SnippetDraft) -> Result<Snippet, ApiError> {
        let request =
            GraphQlRequest::new(graphql::CREATE_SNIPPET).with_variables(serde_json::to_value(draft)?);
        self.execute(request, "createSnippet").await
    }

    async fn like_snippet(&self, snippet_id: i32) -> Result<LikeCount, ApiError> {
        let request = GraphQlRequest::new(graphql::LIKE_SNIPPET)
            .with_variables(json!({ "snippetId": snippet_id }));
        self.execute(request, "likeSnippet").await
    }

    async fn dislike_snippet(&self, snippet_id: i32) -> Result<DislikeCount, ApiError> {
        let request = GraphQlRequest::new(graphql::DISLIKE_SNIPPET)
            .with_variables(json!({ "snippetId": snippet_id }));
        self.execute(request, "dislikeSnippet").await
    }

    async fn get_recommendations_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<Recommendation>, ApiError> {
        let request = GraphQlRequest::new(graphql::GET_RECOMMENDATIONS_FOR_USER)
            .with_variables(json!({ "userId": user_id }));
        self.execute(request, "getRecommendationsForUser").await
    }
}

async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = builder.send().await?;
    let body = checked(response).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Read the body, turning a non-2xx status into [`ApiError::Status`].
async fn checked(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            detail: error_detail(&body),
        })
    }
}

/// FastAPI error detail: a string, or a validation array rendered as JSON.
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
    use store::MemoryStore;

    fn client() -> ApiClient<MemoryStore> {
        ApiClient::new(ApiConfig::new("http://api.test"), MemoryStore::new())
    }

    fn body_json(request: &reqwest::Request) -> Value {
        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_rest_request_without_token_has_no_auth_header() {
        let request = client().rest(Method::GET, "/auth/me").build().unwrap();
        assert_eq!(request.url().as_str(), "http://api.test/auth/me");
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_stored_token_is_injected() {
        let client = client();
        client.store().set(TOKEN_KEY, "tok-123").unwrap();

        let rest = client.rest(Method::GET, "/auth/me").build().unwrap();
        assert_eq!(rest.headers()[AUTHORIZATION], "Bearer tok-123");

        let gql = client
            .graphql(&GraphQlRequest::new(graphql::GET_ALL_SNIPPETS))
            .build()
            .unwrap();
        assert_eq!(gql.url().as_str(), "http://api.test/graphql");
        assert_eq!(gql.headers()[AUTHORIZATION], "Bearer tok-123");
    }

    #[test]
    fn test_token_is_read_per_request() {
        let client = client();
        client.store().set(TOKEN_KEY, "first").unwrap();
        let first = client.rest(Method::GET, "/auth/me").build().unwrap();

        client.store().remove(TOKEN_KEY);
        let second = client.rest(Method::GET, "/auth/me").build().unwrap();

        assert_eq!(first.headers()[AUTHORIZATION], "Bearer first");
        assert!(second.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_login_request_is_form_encoded() {
        let request = client()
            .login_request(&Credentials::new("ada@example.com", "p&ss"))
            .build()
            .unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(
            request.headers()[CONTENT_TYPE],
            "application/x-www-form-urlencoded"
        );
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, b"username=ada%40example.com&password=p%26ss");
    }

    #[test]
    fn test_register_request_is_json() {
        let request = client()
            .register_request(&NewAccount::new("ada", "ada@example.com", "pw"))
            .build()
            .unwrap();
        assert_eq!(request.url().path(), "/auth/register");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(
            body_json(&request),
            json!({ "username": "ada", "email": "ada@example.com", "hashed_password": "pw" })
        );
    }

    #[test]
    fn test_me_request_uses_explicit_token() {
        let client = client();
        client.store().set(TOKEN_KEY, "stale").unwrap();
        let request = client.me_request("fresh").build().unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer fresh");
    }

    #[test]
    fn test_graphql_body_carries_variables() {
        let request = client()
            .graphql(
                &GraphQlRequest::new(graphql::DISLIKE_SNIPPET)
                    .with_variables(json!({ "snippetId": 9 })),
            )
            .build()
            .unwrap();
        let body = body_json(&request);
        assert_eq!(body["variables"]["snippetId"], 9);
        assert!(body["query"].as_str().unwrap().contains("dislikeSnippet"));
    }

    #[test]
    fn test_error_detail_shapes() {
        assert_eq!(
            error_detail(r#"{"detail":"Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert_eq!(
            error_detail(r#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#)
                .unwrap(),
            r#"[{"loc":["body","email"],"msg":"field required"}]"#
        );
        assert!(error_detail("Internal Server Error").is_none());
        assert!(error_detail(r#"{"message":"x"}"#).is_none());
    }
}
