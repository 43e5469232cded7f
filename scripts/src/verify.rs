//! Best-effort source verification against the block explorer

use std::{
    fmt::{self, Display},
    sync::Arc,
};

use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::{errors::ScriptError, types::Network};

/// A verification request as submitted to the explorer's verification service
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    /// Address of the deployed contract
    pub contract_address: Address,
    /// Fully-qualified source path of the contract
    pub contract_name: String,
    /// The ABI-encoded constructor argument blob
    pub constructor_arguments: Bytes,
}

/// The ticket identifier assigned to a verification request by the explorer
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VerificationId(
    /// The numeric ticket value
    pub u64,
);

impl Display for VerificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The state of a verification request as reported by the explorer.
///
/// The explorer's view is eventually consistent: a freshly-submitted request
/// may report as pending long after it has in fact completed, so a submission
/// response must never be taken as a completion signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationStatus {
    /// The request is waiting to be picked up
    Queued,
    /// The request is being processed
    InProgress,
    /// The contract source was verified
    Successful,
    /// Verification failed, with the reason reported by the explorer
    Failed(Option<String>),
}

/// The verification side of the explorer service
#[async_trait]
pub trait VerifyBackend: Send + Sync {
    /// Submit a verification request, returning the service's ticket ID.
    ///
    /// A returned ticket only means the request was accepted; completion
    /// must be confirmed separately via [`VerifyBackend::status`].
    async fn submit(&self, request: &VerificationRequest) -> Result<VerificationId, ScriptError>;

    /// Fetch the current status of a previously-submitted request
    async fn status(&self, id: VerificationId) -> Result<VerificationStatus, ScriptError>;
}

/// Wire format of the explorer's status endpoint
#[derive(Debug, Deserialize)]
struct StatusResponse {
    /// The raw status string
    status: String,
    /// The failure reason, populated for failed requests
    error: Option<String>,
}

/// A [`VerifyBackend`] speaking the zkSync block explorer's HTTP API
#[derive(Clone, Debug)]
pub struct ExplorerClient {
    /// The underlying HTTP client
    http: reqwest::Client,
    /// Base URL of the verification API
    base_url: String,
    /// API key appended to requests, if the network requires one
    api_key: Option<String>,
}

impl ExplorerClient {
    /// Create a client for the given network
    pub fn new(network: Network, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: network.explorer_api_url().to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl VerifyBackend for ExplorerClient {
    async fn submit(&self, request: &VerificationRequest) -> Result<VerificationId, ScriptError> {
        let mut req = self.http.post(&self.base_url).json(request);
        if let Some(key) = &self.api_key {
            req = req.query(&[("apikey", key)]);
        }

        let id: u64 = req
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| ScriptError::VerificationSubmission(e.to_string()))?
            .json()
            .await
            .map_err(|e| ScriptError::VerificationSubmission(e.to_string()))?;

        Ok(VerificationId(id))
    }

    async fn status(&self, id: VerificationId) -> Result<VerificationStatus, ScriptError> {
        let url = format!("{}/{}", self.base_url, id);
        let resp: StatusResponse = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| ScriptError::VerificationStatus(e.to_string()))?
            .json()
            .await
            .map_err(|e| ScriptError::VerificationStatus(e.to_string()))?;

        match resp.status.as_str() {
            "queued" => Ok(VerificationStatus::Queued),
            "in_progress" => Ok(VerificationStatus::InProgress),
            "successful" => Ok(VerificationStatus::Successful),
            "failed" => Ok(VerificationStatus::Failed(resp.error)),
            other => Err(ScriptError::VerificationStatus(format!(
                "unrecognized verification status: {other}"
            ))),
        }
    }
}

/// An in-flight verification submission.
///
/// The submission runs detached from the deployment that fired it; its
/// outcome is reported through the log and never fails the deploy run.
#[derive(Debug)]
pub struct PendingVerification {
    /// Source path of the contract being verified, for log context
    contract: String,
    /// Handle to the detached submission task
    handle: JoinHandle<Result<VerificationId, ScriptError>>,
}

impl PendingVerification {
    /// Fire a verification submission for the given request
    pub(crate) fn spawn<V: VerifyBackend + 'static>(
        verifier: Arc<V>,
        request: VerificationRequest,
    ) -> Self {
        let contract = request.contract_name.clone();
        let handle = tokio::spawn(async move {
            info!("Requesting contract verification...");
            let id = verifier.submit(&request).await?;
            info!("Your verification ID is: {id}");
            info!("The submission response is provisional; confirm completion with `verify-status`");
            Ok(id)
        });

        Self { contract, handle }
    }

    /// Wait for the submission to complete, downgrading any failure to a
    /// warning. Verification failure never masks the successful deployment.
    pub async fn submitted(self) -> Option<VerificationId> {
        match self.handle.await {
            Ok(Ok(id)) => Some(id),
            Ok(Err(e)) => {
                warn!(
                    "Verification of {} could not be submitted: {e}. \
                     The deployment itself is unaffected; run the verification again later.",
                    self.contract
                );
                None
            }
            Err(e) => {
                warn!("Verification task for {} did not complete: {e}", self.contract);
                None
            }
        }
    }
}
