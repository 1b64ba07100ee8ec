//! Line-oriented bridge to the launcher host
//!
//! The host writes one JSON event per line on stdin and reads one
//! `RenderInstruction` per line from stdout.

use application::{LauncherService, ResultItemBuilder};
use domain::RenderInstruction;
use serde::Deserialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// Event sent by the launcher host
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// The user typed after the keyword
    Query {
        #[serde(default)]
        argument: Option<String>,
        #[serde(default)]
        keyword: Option<String>,
    },
    /// An item carrying a custom action was activated
    ItemEnter { data: String },
    /// Initial preference values
    Preferences { keyword: String, api_base: String },
    /// A single preference changed
    PreferencesUpdate { id: String, value: String },
}

/// Feeds host events into a [`LauncherService`]
#[derive(Debug)]
pub struct HostBridge {
    launcher: LauncherService,
}

impl HostBridge {
    pub const fn new(launcher: LauncherService) -> Self {
        Self { launcher }
    }

    /// Handle one decoded event
    pub async fn handle_event(&self, event: HostEvent) -> RenderInstruction {
        match event {
            HostEvent::Query { argument, keyword } => {
                let keyword = keyword.unwrap_or_else(|| self.launcher.keyword());
                self.launcher.on_query(argument.as_deref(), &keyword).await
            },
            HostEvent::ItemEnter { data } => self.launcher.on_item_selected(&data).await,
            HostEvent::Preferences { keyword, api_base } => {
                Self::acknowledge(self.launcher.on_preferences(&keyword, &api_base))
            },
            HostEvent::PreferencesUpdate { id, value } => {
                Self::acknowledge(self.launcher.on_preference_changed(&id, &value))
            },
        }
    }

    /// Handle one raw input line; blank lines produce nothing
    pub async fn handle_line(&self, line: &str) -> Option<RenderInstruction> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        match serde_json::from_str::<HostEvent>(line) {
            Ok(event) => {
                debug!(?event, "Host event");
                Some(self.handle_event(event).await)
            },
            Err(e) => {
                warn!(error = %e, "Malformed host event");
                Some(error_instruction(&format!("Malformed event: {e}")))
            },
        }
    }

    /// Serve events until the reader is exhausted
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let Some(instruction) = self.handle_line(&line).await else {
                continue;
            };
            let mut encoded = serde_json::to_string(&instruction)?;
            encoded.push('\n');
            writer.write_all(encoded.as_bytes()).await?;
            writer.flush().await?;
        }
        Ok(())
    }

    fn acknowledge(result: Result<(), application::ApplicationError>) -> RenderInstruction {
        match result {
            Ok(()) => RenderInstruction::NoOp,
            Err(e) => error_instruction(&e),
        }
    }
}

fn error_instruction(error: &dyn std::fmt::Display) -> RenderInstruction {
    RenderInstruction::ItemList(vec![ResultItemBuilder::error_item(error)])
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use application::{ApplicationError, TransitPort};
    use async_trait::async_trait;
    use domain::{Departure, DomainError, ItemAction, Stop, StopId};

    use super::*;

    /// Transit source with one known stop
    struct FakeTransit;

    fn known_stop() -> Stop {
        Stop::new(StopId::from(2045_u64), "Queen St", 43.9, -78.9)
    }

    #[async_trait]
    impl TransitPort for FakeTransit {
        async fn stops(&self, _term: &str) -> Result<Vec<Stop>, ApplicationError> {
            Ok(vec![known_stop()])
        }

        async fn stop(&self, id: &StopId) -> Result<Stop, ApplicationError> {
            if *id == known_stop().id {
                Ok(known_stop())
            } else {
                Err(DomainError::not_found("Stop", id.as_str()).into())
            }
        }

        async fn departures(&self, _id: &StopId) -> Result<Vec<Departure>, ApplicationError> {
            Ok(vec![])
        }

        fn set_endpoint(&self, base_url: &str) -> Result<(), ApplicationError> {
            if base_url.starts_with("http") {
                Ok(())
            } else {
                Err(ApplicationError::Configuration(format!(
                    "invalid base_url: {base_url}"
                )))
            }
        }
    }

    fn bridge() -> HostBridge {
        HostBridge::new(LauncherService::new(Arc::new(FakeTransit), "drt"))
    }

    #[test]
    fn decodes_query_event() {
        let event: HostEvent =
            serde_json::from_str(r#"{"event":"query","argument":"queen","keyword":"drt"}"#)
                .unwrap();
        assert_eq!(
            event,
            HostEvent::Query {
                argument: Some("queen".to_string()),
                keyword: Some("drt".to_string()),
            }
        );
    }

    #[test]
    fn decodes_query_without_argument() {
        let event: HostEvent = serde_json::from_str(r#"{"event":"query"}"#).unwrap();
        assert_eq!(
            event,
            HostEvent::Query {
                argument: None,
                keyword: None,
            }
        );
    }

    #[test]
    fn decodes_preferences_update() {
        let event: HostEvent =
            serde_json::from_str(r#"{"event":"preferences_update","id":"kw","value":"bus"}"#)
                .unwrap();
        assert!(matches!(event, HostEvent::PreferencesUpdate { ref id, .. } if id == "kw"));
    }

    #[tokio::test]
    async fn blank_line_is_skipped() {
        assert!(bridge().handle_line("   ").await.is_none());
    }

    #[tokio::test]
    async fn malformed_line_yields_error_item() {
        let instruction = bridge().handle_line("{not json").await.unwrap();
        let items = instruction.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Error");
    }

    #[tokio::test]
    async fn unknown_event_yields_error_item() {
        let instruction = bridge()
            .handle_line(r#"{"event":"shutdown"}"#)
            .await
            .unwrap();
        assert_eq!(instruction.items()[0].label, "Error");
    }

    #[tokio::test]
    async fn query_uses_stored_keyword_when_missing() {
        let instruction = bridge()
            .handle_line(r#"{"event":"query","argument":"queen"}"#)
            .await
            .unwrap();
        assert_eq!(
            instruction.items()[0].primary_action,
            ItemAction::SetQuery("drt departures 2045".to_string())
        );
    }

    #[tokio::test]
    async fn keyword_preference_changes_rewrite_target() {
        let bridge = bridge();
        let ack = bridge
            .handle_line(r#"{"event":"preferences_update","id":"kw","value":"bus"}"#)
            .await
            .unwrap();
        assert_eq!(ack, RenderInstruction::NoOp);

        let result = bridge
            .handle_line(r#"{"event":"item_enter","data":"add 2045"}"#)
            .await
            .unwrap();
        assert_eq!(result, RenderInstruction::RewriteQuery("bus".to_string()));
    }

    #[tokio::test]
    async fn invalid_preferences_yield_error_item() {
        let result = bridge()
            .handle_line(r#"{"event":"preferences","keyword":"drt","api_base":"nope"}"#)
            .await
            .unwrap();
        assert_eq!(result.items()[0].label, "Error");
    }

    #[tokio::test]
    async fn run_writes_one_line_per_event() {
        let input = concat!(
            r#"{"event":"query"}"#,
            "\n\n",
            r#"{"event":"item_enter","data":"add 2045"}"#,
            "\n",
            r#"{"event":"query","keyword":"drt"}"#,
            "\n",
        );
        let mut output = Vec::new();

        bridge().run(input.as_bytes(), &mut output).await.unwrap();

        let lines: Vec<RenderInstruction> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], RenderInstruction::ItemList(vec![]));
        assert_eq!(lines[1], RenderInstruction::RewriteQuery("drt".to_string()));
        assert_eq!(lines[2].items()[0].label, "#2045 Queen St");
    }
}
