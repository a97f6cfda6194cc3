use std::future::Future;

use reqwest::Client;
use trainer_core::evaluation::{parse_cloud_eval, EvaluationResult, Evaluator};
use trainer_core::TrainerError;

use crate::config::Config;

/// Client for the Lichess cloud-eval endpoint (or anything speaking its format).
pub struct LichessClient {
    client: Client,
    endpoint: String,
    multi_pv: u32,
}

impl LichessClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.cloud_eval_timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: config.cloud_eval_url.clone(),
            multi_pv: config.cloud_eval_multi_pv,
        })
    }

    /// Fetch the cached cloud evaluation for a position.
    /// Any transport failure or non-2xx status is reported as `EvaluationUnavailable`.
    pub async fn cloud_eval(&self, fen: &str, depth: u32) -> Result<EvaluationResult, TrainerError> {
        let params = [
            ("fen", fen.to_string()),
            ("depth", depth.to_string()),
            ("multiPv", self.multi_pv.to_string()),
        ];

        let resp = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TrainerError::EvaluationUnavailable(format!("Request error: {e}")))?;

        if !resp.status().is_success() {
            return Err(TrainerError::EvaluationUnavailable(format!("HTTP {}", resp.status())));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| TrainerError::EvaluationUnavailable(format!("Body read error: {e}")))?;

        let result = parse_cloud_eval(&text)?;
        tracing::debug!(fen, depth = result.depth, lines = result.lines.len(), "Cloud eval received");
        Ok(result)
    }
}

impl Evaluator for LichessClient {
    fn evaluate(
        &self,
        fen: &str,
        depth: u32,
    ) -> impl Future<Output = Result<EvaluationResult, TrainerError>> + Send {
        self.cloud_eval(fen, depth)
    }
}
