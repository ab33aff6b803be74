use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::raw_msg::RawMsg,
    core::state::{InsightSection, PanelKind},
    domain::requests::{CreateRequest, MutationKind, PatchRequest},
    infrastructure::api::RestClient,
};

/// Backend operations dispatched by the runner. Each carries everything
/// the request needs so the service holds no per-panel state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiOperation {
    FetchList {
        panel: PanelKind,
        token: u64,
    },
    FetchInsight {
        section: InsightSection,
        arg: Option<String>,
        token: u64,
    },
    Create {
        panel: PanelKind,
        request: CreateRequest,
    },
    Patch {
        panel: PanelKind,
        request: PatchRequest,
    },
}

/// ApiService executes backend requests off the UI task and reports
/// settlements back as raw messages. Requests run concurrently; ordering
/// is resolved by generation tokens in the update function.
pub struct ApiService {
    client: RestClient,
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<ApiOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewApiService = (
    mpsc::UnboundedSender<ApiOperation>, // op_tx - operations to send
    CancellationToken,                   // shutdown signal
    ApiService,
);

impl ApiService {
    pub fn new(client: RestClient, raw_tx: mpsc::UnboundedSender<RawMsg>) -> Result<NewApiService> {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        Ok((
            op_tx,
            cancel_token.clone(),
            Self {
                client,
                op_rx,
                cancel_token,
                raw_tx,
            },
        ))
    }

    /// Run the ApiService in a background task
    pub fn run(mut self) {
        tokio::spawn(async move {
            self.run_service().await;
        });
    }

    /// Main service loop
    async fn run_service(&mut self) {
        loop {
            tokio::select! {
                result = self.op_rx.recv() => {
                    match result {
                        Some(op) => self.handle_operation(op),
                        None => {
                            log::info!("ApiService operation channel closed");
                            break;
                        }
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    log::info!("ApiService received cancellation signal");
                    break;
                }
            }
        }
    }

    /// Spawn the request so a slow response never blocks the loop.
    fn handle_operation(&self, op: ApiOperation) {
        log::debug!("Handling ApiOperation: {op:?}");
        let client = self.client.clone();
        let raw_tx = self.raw_tx.clone();

        tokio::spawn(async move {
            let raw = execute(&client, op).await;
            if raw_tx.send(raw).is_err() {
                log::warn!("Raw message channel closed, dropping settlement");
            }
        });
    }
}

/// Execute one operation and build its settlement message.
async fn execute(client: &RestClient, op: ApiOperation) -> RawMsg {
    match op {
        ApiOperation::FetchList { panel, token } => match client.fetch_list(panel).await {
            Ok(payload) => RawMsg::ListLoaded {
                panel,
                token,
                payload,
            },
            Err(e) => RawMsg::ListFailed {
                panel,
                token,
                message: e.to_string(),
            },
        },

        ApiOperation::FetchInsight {
            section,
            arg,
            token,
        } => match client.fetch_insight(section, arg.as_deref()).await {
            Ok(payload) => RawMsg::InsightLoaded {
                section,
                token,
                payload,
            },
            Err(e) => RawMsg::InsightFailed {
                section,
                token,
                message: e.to_string(),
            },
        },

        ApiOperation::Create { panel, request } => match client.create(panel, &request).await {
            Ok(()) => RawMsg::MutationDone {
                panel,
                kind: MutationKind::Create,
                note: request.status_note(),
            },
            Err(e) => {
                log::error!("{panel} create failed: {e}");
                RawMsg::MutationFailed {
                    panel,
                    kind: MutationKind::Create,
                    message: create_failure_message(panel),
                }
            }
        },

        ApiOperation::Patch { panel, request } => match client.patch(panel, &request).await {
            Ok(()) => RawMsg::MutationDone {
                panel,
                kind: MutationKind::Patch,
                note: request.status_note(),
            },
            Err(e) => {
                log::error!("{panel} patch failed: {e}");
                RawMsg::MutationFailed {
                    panel,
                    kind: MutationKind::Patch,
                    message: patch_failure_message(&request),
                }
            }
        },
    }
}

/// Human-facing message for a failed create, per panel.
fn create_failure_message(panel: PanelKind) -> String {
    let noun = match panel {
        PanelKind::Items => "item",
        PanelKind::Stock => "stock item",
        PanelKind::Taxes => "tax rate",
        PanelKind::Waiters => "waiter",
        PanelKind::Inventory => "product",
        _ => "record",
    };
    format!("Failed to add {noun}. Please try again.")
}

/// Human-facing message for a failed patch, per field.
fn patch_failure_message(request: &PatchRequest) -> String {
    let noun = match request {
        PatchRequest::ItemPrice { .. } => "item price",
        PatchRequest::MenuAvailability { .. } => "menu availability",
        PatchRequest::StockQuantity { .. } => "stock quantity",
        PatchRequest::TableStatus { .. } => "table status",
        PatchRequest::TaxRateValue { .. } => "tax rate",
        PatchRequest::WaiterStatus { .. } => "waiter status",
    };
    format!("Failed to update {noun}. Please try again.")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_create_failure_messages() {
        assert_eq!(
            create_failure_message(PanelKind::Waiters),
            "Failed to add waiter. Please try again."
        );
        assert_eq!(
            create_failure_message(PanelKind::Inventory),
            "Failed to add product. Please try again."
        );
    }

    #[test]
    fn test_patch_failure_messages() {
        let request = PatchRequest::TableStatus {
            id: 1,
            status: crate::domain::entities::TableStatus::Occupied,
        };
        assert_eq!(
            patch_failure_message(&request),
            "Failed to update table status. Please try again."
        );
    }

    #[test]
    fn test_api_operation_serialization() {
        let op = ApiOperation::FetchList {
            panel: PanelKind::Menu,
            token: 3,
        };
        let serialized = serde_json::to_string(&op).unwrap();
        let deserialized: ApiOperation = serde_json::from_str(&serialized).unwrap();
        assert_eq!(op, deserialized);
    }
}
