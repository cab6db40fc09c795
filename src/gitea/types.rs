use serde::{Deserialize, Serialize};

/// The pull request a comment is posted to
#[derive(Debug, Clone, PartialEq)]
pub struct CommentTarget {
    pub owner: String,
    pub repo: String,
    /// Pull request number as exported by the CI runner
    pub pull_request: String,
}

impl CommentTarget {
    /// Issue comment endpoint on the given Gitea instance. Pull requests
    /// share the issue comment API.
    pub fn comments_url(&self, base_url: &str) -> String {
        format!(
            "{}/api/v1/repos/{}/{}/issues/{}/comments",
            base_url, self.owner, self.repo, self.pull_request
        )
    }
}

/// Request body for creating a comment
#[derive(Debug, Clone, Serialize)]
pub struct CommentPayload {
    pub body: String,
}

/// The part of Gitea's comment response we report back
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentResponse {
    #[serde(default)]
    pub html_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    mod comments_url {
        use super::*;

        #[test]
        fn formats_correctly() {
            let target = CommentTarget {
                owner: "octocat".to_string(),
                repo: "hello-world".to_string(),
                pull_request: "42".to_string(),
            };
            assert_eq!(
                target.comments_url("https://gitea.example.com"),
                "https://gitea.example.com/api/v1/repos/octocat/hello-world/issues/42/comments"
            );
        }

        #[test]
        fn handles_special_chars_in_names() {
            let target = CommentTarget {
                owner: "my-org".to_string(),
                repo: "my_repo.nvim".to_string(),
                pull_request: "1".to_string(),
            };
            assert_eq!(
                target.comments_url("http://localhost:3000"),
                "http://localhost:3000/api/v1/repos/my-org/my_repo.nvim/issues/1/comments"
            );
        }
    }

    mod payload {
        use super::*;

        #[test]
        fn serializes_body_only() {
            let payload = CommentPayload {
                body: "line one\nline \"two\"".to_string(),
            };
            assert_eq!(
                serde_json::to_string(&payload).unwrap(),
                r#"{"body":"line one\nline \"two\""}"#
            );
        }
    }

    mod response {
        use super::*;

        #[test]
        fn reads_html_url_and_ignores_the_rest() {
            let response: CommentResponse = serde_json::from_str(
                r#"{"id":7,"html_url":"http://x","body":"hi","user":{"login":"bot"}}"#,
            )
            .unwrap();
            assert_eq!(response.html_url, "http://x");
        }

        #[test]
        fn missing_html_url_is_empty() {
            let response: CommentResponse = serde_json::from_str(r#"{"id":7}"#).unwrap();
            assert_eq!(response.html_url, "");
        }
    }
}
