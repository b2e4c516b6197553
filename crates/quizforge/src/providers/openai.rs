//! OpenAI quiz client with forced structured output
//!
//! The model is never allowed to answer in free text: every request forces
//! a `create_quiz` tool call whose arguments must match the quiz schema.
//! A malformed payload is a decoding failure that propagates to the caller;
//! there is no retry or repair.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::config::LlmConfig;
use crate::error::{Error, Result};
use crate::generation::prompt::PromptBuilder;
use crate::types::quiz::Quiz;

use super::llm::QuizGenerator;

const CREATE_QUIZ_FUNCTION: &str = "create_quiz";

/// OpenAI chat-completions client
pub struct OpenAiQuizClient {
    client: Client,
    config: LlmConfig,
    api_key: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
    tools: Vec<serde_json::Value>,
    tool_choice: serde_json::Value,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    tool_calls: Vec<ToolCall>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    name: String,
    arguments: String,
}

impl OpenAiQuizClient {
    /// Create a new client
    pub fn new(config: &LlmConfig, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(5)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config: config.clone(),
            api_key,
        }
    }

    /// JSON schema of the forced `create_quiz` function: a list of
    /// questions, each with question text and answer objects carrying a
    /// correctness flag.
    fn create_quiz_tool() -> serde_json::Value {
        json!({
            "type": "function",
            "function": {
                "name": CREATE_QUIZ_FUNCTION,
                "description": "function that takes a list of questions and answers and returns a quiz",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "questions": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "question": {"type": "string"},
                                    "answers": {
                                        "type": "array",
                                        "items": {
                                            "type": "object",
                                            "properties": {
                                                "answer": {"type": "string"},
                                                "correct": {"type": "boolean"}
                                            },
                                            "required": ["answer", "correct"]
                                        }
                                    }
                                },
                                "required": ["question", "answers"]
                            }
                        }
                    },
                    "required": ["questions"]
                }
            }
        })
    }

    /// Pull the forced tool-call arguments out of a chat response
    fn extract_arguments(response: ChatResponse) -> Result<String> {
        let call = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::quiz_decode("response contains no choices"))?
            .message
            .tool_calls
            .into_iter()
            .next()
            .ok_or_else(|| Error::quiz_decode("model did not call create_quiz"))?;

        if call.function.name != CREATE_QUIZ_FUNCTION {
            return Err(Error::quiz_decode(format!(
                "model called unexpected function '{}'",
                call.function.name
            )));
        }

        Ok(call.function.arguments)
    }
}

#[async_trait]
impl QuizGenerator for OpenAiQuizClient {
    async fn generate_quiz(&self, context: &str) -> Result<Quiz> {
        let prompt = PromptBuilder::build_quiz_prompt(context);

        let request = ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            tools: vec![Self::create_quiz_tool()],
            tool_choice: json!({
                "type": "function",
                "function": {"name": CREATE_QUIZ_FUNCTION}
            }),
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!(
                "chat completion failed: HTTP {}: {}",
                status, body
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::llm(format!("failed to decode chat response: {}", e)))?;

        let arguments = Self::extract_arguments(parsed)?;
        serde_json::from_str(&arguments)
            .map_err(|e| Error::quiz_decode(format!("arguments did not match quiz schema: {}", e)))
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/models", self.config.base_url);

        match self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
        {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
