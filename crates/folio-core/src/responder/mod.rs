//! Assistant responder.
//!
//! Answers from the canned [`rules::RULES`] table when a keyword fits and
//! only otherwise asks the text-generation endpoint. Every path ends in a
//! string: endpoint failures turn into a fixed localized apology and the
//! cause goes to the log.

pub mod age;
pub mod replies;
pub mod rules;

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::ai::TextGenClient;
use crate::locale::Locale;

pub use age::{age_on, BirthDate, BIRTH_DATE};
pub use rules::{classify, Matcher, Reply, ReplyRule, Topic, RULES};

#[derive(Clone)]
pub struct Responder {
    client: TextGenClient,
}

impl Responder {
    pub fn new(client: TextGenClient) -> Self {
        Self { client }
    }

    pub async fn respond(&self, input: &str, locale: Locale) -> String {
        self.respond_on(input, locale, Local::now().date_naive()).await
    }

    /// Same as [`Responder::respond`] with the current date supplied.
    pub async fn respond_on(&self, input: &str, locale: Locale, today: NaiveDate) -> String {
        if let Some(rule) = classify(input) {
            debug!(topic = ?rule.topic, locale = locale.as_str(), "canned reply");
            return rule.reply.render(locale, today);
        }

        debug!(endpoint = self.client.endpoint(), "no canned reply, asking endpoint");
        match self.client.generate(input.trim()).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "text generation failed");
                failure_reply(locale).to_string()
            }
        }
    }
}

pub fn failure_reply(locale: Locale) -> &'static str {
    *replies::FAILURE.get(locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn responder_with(server: &MockServer) -> Responder {
        Responder::new(TextGenClient::new(&format!("{}/llm-api", server.uri())))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()
    }

    #[tokio::test]
    async fn test_skills_question_answers_without_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let responder = responder_with(&server);

        let reply = responder
            .respond_on("Tell me about his skills", Locale::En, today())
            .await;

        assert_eq!(reply, replies::SKILLS.en);
        server.verify().await;
    }

    #[tokio::test]
    async fn test_blood_group_reply() {
        let server = MockServer::start().await;
        let responder = responder_with(&server);

        let reply = responder.respond_on("blood group", Locale::En, today()).await;
        assert_eq!(reply, "Md Ridoan Mahmud Zisan's blood group is B+ (B positive).");
    }

    #[tokio::test]
    async fn test_canned_reply_follows_locale() {
        let server = MockServer::start().await;
        let responder = responder_with(&server);

        let reply = responder.respond_on("family", Locale::Bn, today()).await;
        assert_eq!(reply, replies::FAMILY.bn);
    }

    #[tokio::test]
    async fn test_age_uses_supplied_date() {
        let server = MockServer::start().await;
        let responder = responder_with(&server);

        let before = responder.respond_on("age", Locale::En, today()).await;
        let on = responder
            .respond_on("age", Locale::En, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
            .await;

        assert!(before.contains(" 16 years old"));
        assert!(on.contains(" 17 years old"));
    }

    #[tokio::test]
    async fn test_unmatched_input_asks_endpoint_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({ "prompt": "xyzzy random gibberish" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": "success", "text": "Nothing happens." })),
            )
            .expect(1)
            .mount(&server)
            .await;
        let responder = responder_with(&server);

        let reply = responder
            .respond_on("  xyzzy random gibberish  ", Locale::En, today())
            .await;

        assert_eq!(reply, "Nothing happens.");
        server.verify().await;
    }

    #[tokio::test]
    async fn test_error_status_becomes_localized_apology() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "error" })))
            .expect(2)
            .mount(&server)
            .await;
        let responder = responder_with(&server);

        let en = responder.respond_on("xyzzy random gibberish", Locale::En, today()).await;
        let bn = responder.respond_on("xyzzy random gibberish", Locale::Bn, today()).await;

        assert_eq!(en, "Sorry, I could not process your request.");
        assert_eq!(bn, failure_reply(Locale::Bn));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(1)
            .mount(&server)
            .await;
        let responder = responder_with(&server);

        let reply = responder.respond_on("xyzzy", Locale::En, today()).await;

        assert_eq!(reply, failure_reply(Locale::En));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_still_yields_text() {
        let responder = Responder::new(TextGenClient::new("http://127.0.0.1:9/llm-api"));
        let reply = responder.respond_on("xyzzy", Locale::Bn, today()).await;
        assert_eq!(reply, failure_reply(Locale::Bn));
    }
}
