//! Test helper module for remedy-service integration tests.

#![allow(dead_code)]

use remedy_service::config::{AuthConfig, CommonConfig, OpenAiSettings, RemedyConfig};
use remedy_service::services::providers::CompletionProvider;
use remedy_service::startup::Application;
use std::sync::Arc;

pub const TEST_AUTH_KEY: &str = "test-auth-key-12345";

/// Test application with a running server and the given provider wired in.
pub struct TestApp {
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application on a random port.
    pub async fn spawn(provider: Arc<dyn CompletionProvider>) -> Self {
        let config = RemedyConfig {
            common: CommonConfig { port: 0 },
            auth: AuthConfig {
                key: TEST_AUTH_KEY.to_string(),
            },
            openai: OpenAiSettings {
                api_key: "sk-test".to_string(),
                model: "gpt-3.5-turbo".to_string(),
                base_url: "http://127.0.0.1:1/v1".to_string(),
                max_tokens: None,
            },
        };

        let app = Application::build_with_provider(config, provider)
            .await
            .expect("Failed to build application");
        let port = app.port();

        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        Self {
            port,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path_and_query)
    }

    /// GET with the valid auth header.
    pub async fn get_authed(&self, path_and_query: &str) -> reqwest::Response {
        self.client
            .get(self.url(path_and_query))
            .header("X-Custom-Auth", TEST_AUTH_KEY)
            .send()
            .await
            .expect("Failed to send request")
    }
}

/// The kind of JSON document the model is asked to produce, as the body of a
/// single completion choice.
pub fn fever_fixture() -> serde_json::Value {
    serde_json::json!({
        "overTheCounter": {
            "title": "Paracetamol",
            "description": "Paracetamol helps to reduce fever and relieve pain.",
            "sideEffects": "Nausea, rash."
        },
        "homeopathy": {
            "title": "Belladonna",
            "description": "Belladonna is used in homeopathy to treat fever with sudden onset.",
            "sideEffects": "Dry mouth, dilated pupils."
        },
        "home": {
            "title": "Cold Compress",
            "description": "A cold compress can help reduce fever.",
            "sideEffects": "Skin irritation."
        },
        "prescription": {
            "title": "Ibuprofen",
            "description": "Ibuprofen is a prescription medication used to reduce fever and pain.",
            "sideEffects": "Stomach pain, dizziness."
        },
        "diagnosis": {
            "description": "Fever is a temporary increase in body temperature.",
            "symptoms": "High temperature, sweating, chills."
        }
    })
}
