//! # GraphQL documents and response envelope
//!
//! The snippet service speaks GraphQL over a single `POST` endpoint. Each
//! operation the client uses is a fixed document below; variables are passed
//! separately as JSON.
//!
//! Responses use the standard envelope `{ "data": {...}, "errors": [...] }`.
//! [`GraphQlResponse::field`] turns it into a typed value:
//!
//! - any entry in `errors` -> [`ApiError::GraphQl`],
//! - a missing or `null` field under `data` -> [`ApiError::MissingData`],
//! - a field that does not match `T` -> [`ApiError::Decode`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

pub const GET_ALL_SNIPPETS: &str = r#"
query {
  getAllSnippets {
    id
    title
    content
    language
    likes
    dislikes
  }
}
"#;

pub const GET_SNIPPET: &str = r#"
query GetSnippet($id: Int!) {
  getSnippet(id: $id) {
    id
    title
    content
    language
    likes
    dislikes
  }
}
"#;

pub const CREATE_SNIPPET: &str = r#"
mutation CreateSnippet($title: String!, $content: String!, $language: String!, $userId: Int!) {
  createSnippet(title: $title, content: $content, language: $language, userId: $userId) {
    id
    title
    content
    language
    likes
    dislikes
  }
}
"#;

pub const LIKE_SNIPPET: &str = r#"
mutation LikeSnippet($snippetId: Int!) {
  likeSnippet(snippetId: $snippetId) {
    id
    likes
  }
}
"#;

pub const DISLIKE_SNIPPET: &str = r#"
mutation DislikeSnippet($snippetId: Int!) {
  dislikeSnippet(snippetId: $snippetId) {
    id
    dislikes
  }
}
"#;

pub const GET_RECOMMENDATIONS_FOR_USER: &str = r#"
query GetRecommendationsForUser($userId: Int!) {
  getRecommendationsForUser(userId: $userId) {
    snippetId
    score
  }
}
"#;

/// Request body sent to the GraphQL endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

impl GraphQlRequest {
    pub fn new(query: &'static str) -> Self {
        Self {
            query,
            variables: None,
        }
    }

    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = Some(variables);
        self
    }
}

/// One entry of the `errors` array.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Response envelope returned by the GraphQL endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl GraphQlResponse {
    /// Extract and decode the top-level field `name` of `data`.
    pub fn field<T: DeserializeOwned>(self, name: &'static str) -> Result<T, ApiError> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            return Err(ApiError::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        let value = self
            .data
            .and_then(|mut data| data.get_mut(name).map(Value::take))
            .filter(|v| !v.is_null())
            .ok_or(ApiError::MissingData(name))?;

        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LikeCount, Snippet};
    use serde_json::json;

    fn parse(body: &str) -> GraphQlResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_request_omits_missing_variables() {
        let body = serde_json::to_value(GraphQlRequest::new(GET_ALL_SNIPPETS)).unwrap();
        assert!(body.get("variables").is_none());
        assert!(body["query"].as_str().unwrap().contains("getAllSnippets"));

        let body = serde_json::to_value(
            GraphQlRequest::new(LIKE_SNIPPET).with_variables(json!({ "snippetId": 3 })),
        )
        .unwrap();
        assert_eq!(body["variables"]["snippetId"], 3);
    }

    #[test]
    fn test_field_decodes_list() {
        let response = parse(
            r#"{"data":{"getAllSnippets":[
                {"id":1,"title":"hello","content":"print(1)","language":"python","likes":3,"dislikes":0}
            ]}}"#,
        );
        let snippets: Vec<Snippet> = response.field("getAllSnippets").unwrap();
        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].likes, 3);
        assert_eq!(snippets[0].language, "python");
    }

    #[test]
    fn test_field_decodes_partial_object() {
        let response = parse(r#"{"data":{"likeSnippet":{"id":1,"likes":4}}}"#);
        let count: LikeCount = response.field("likeSnippet").unwrap();
        assert_eq!(count, LikeCount { id: 1, likes: 4 });
    }

    #[test]
    fn test_errors_take_precedence() {
        let response = parse(
            r#"{"data":null,"errors":[{"message":"Snippet not found"},{"message":"again"}]}"#,
        );
        match response.field::<Snippet>("getSnippet") {
            Err(ApiError::GraphQl(messages)) => {
                assert_eq!(messages, vec!["Snippet not found", "again"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_null_field_is_missing() {
        let response = parse(r#"{"data":{"getSnippet":null}}"#);
        assert!(matches!(
            response.field::<Snippet>("getSnippet"),
            Err(ApiError::MissingData("getSnippet"))
        ));

        let response = parse(r#"{}"#);
        assert!(matches!(
            response.field::<Snippet>("getSnippet"),
            Err(ApiError::MissingData("getSnippet"))
        ));
    }

    #[test]
    fn test_empty_errors_array_is_ignored() {
        let response = parse(r#"{"data":{"likeSnippet":{"id":2,"likes":1}},"errors":[]}"#);
        assert!(response.field::<LikeCount>("likeSnippet").is_ok());
    }

    #[test]
    fn test_shape_mismatch_is_decode_error() {
        let response = parse(r#"{"data":{"likeSnippet":{"id":"x"}}}"#);
        assert!(matches!(
            response.field::<LikeCount>("likeSnippet"),
            Err(ApiError::Decode(_))
        ));
    }
}
