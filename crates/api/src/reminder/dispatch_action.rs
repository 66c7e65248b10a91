use crate::error::AlarmError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use alarmhosting_api_structs::dispatch_action::{APIResponse, RequestBody};
use alarmhosting_api_structs::dtos::to_iso;
use alarmhosting_domain::{AlertChannel, AlertEntry, DeliveryStatus, ReminderAction, ID};
use alarmhosting_infra::Context;
use std::str::FromStr;

/// Target recorded for dispatches when no outbound transport is configured
const MOCK_TARGET: &str = "mock-chat";

pub async fn dispatch_action_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AlarmError> {
    let body = body.into_inner();
    let usecase = DispatchActionUseCase {
        reminder_id: body.reminder_id,
        action: body.action,
        metadata: body.metadata,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(res))
        .map_err(AlarmError::from)
}

#[derive(Debug)]
pub struct DispatchActionUseCase {
    /// Raw request fields, validated inside the usecase so that invalid
    /// input is rejected before anything touches the alert history.
    pub reminder_id: String,
    pub action: String,
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    MissingReminderId,
    InvalidAction(String),
    DeliveryFailed(String),
}

impl From<UseCaseErrors> for AlarmError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::MissingReminderId => {
                Self::BadClientData("reminderId is required".into())
            }
            UseCaseErrors::InvalidAction(action) => Self::BadClientData(format!(
                "Unknown action: {}. Valid actions are preview, snooze and mark_done",
                action
            )),
            UseCaseErrors::DeliveryFailed(e) => Self::DispatchFailed(e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DispatchActionUseCase {
    type Response = APIResponse;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "DispatchAction";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        // Validation happens before any side effect. A rejected request
        // must leave the alert history untouched.
        if self.reminder_id.trim().is_empty() {
            return Err(UseCaseErrors::MissingReminderId);
        }
        let action = ReminderAction::from_str(&self.action)
            .map_err(|_| UseCaseErrors::InvalidAction(self.action.clone()))?;

        let reminder_id = ID::from(self.reminder_id.as_str());
        let reminder = ctx.repos.reminders.find(&reminder_id).await;
        let label = match &reminder {
            Some(reminder) => ctx
                .repos
                .resources
                .find(&reminder.resource_id)
                .await
                .map(|resource| resource.label)
                .unwrap_or_else(|| "unknown resource".to_string()),
            None => "unknown resource".to_string(),
        };

        let text = format!(
            "[AlarmHosting] {} for reminder {} ({})",
            action.as_str(),
            reminder_id,
            label
        );
        let dispatched_at = ctx.sys.get_timestamp_millis();

        // Exactly one history entry per invocation, whatever the outcome of
        // the delivery attempt.
        let (status, target, error) = match &ctx.messenger {
            None => (DeliveryStatus::Queued, MOCK_TARGET.to_string(), None),
            Some(messenger) => match messenger.send(&text).await {
                Ok(()) => (DeliveryStatus::Sent, messenger.target(), None),
                Err(e) => (DeliveryStatus::Failed, messenger.target(), Some(e.to_string())),
            },
        };

        let mut entry = AlertEntry::new(
            AlertChannel::Telegram,
            target,
            status,
            dispatched_at,
        );
        entry.error = error.clone();
        entry.payload = Some(serde_json::json!({
            "status": status.as_str(),
            "action": action.as_str(),
            "reminderId": reminder_id.as_str(),
            "metadata": self.metadata.clone(),
            "dispatchedAt": to_iso(dispatched_at),
        }));

        if let Err(e) = ctx.repos.alert_logs.insert(&entry).await {
            tracing::warn!("Could not record alert history entry: {:?}", e);
        }

        if let Some(error) = error {
            return Err(UseCaseErrors::DeliveryFailed(error));
        }

        Ok(APIResponse {
            status: status.as_str().to_string(),
            action: action.as_str().to_string(),
            reminder_id,
            metadata: self.metadata.take(),
            dispatched_at: to_iso(dispatched_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;
    use alarmhosting_infra::{setup_context, FixedSys, IMessenger};
    use std::sync::Arc;

    struct FailingMessenger;

    #[async_trait::async_trait]
    impl IMessenger for FailingMessenger {
        fn target(&self) -> String {
            "chat-42".into()
        }

        async fn send(&self, _text: &str) -> anyhow::Result<()> {
            anyhow::bail!("telegram responded with status 502")
        }
    }

    struct OkMessenger;

    #[async_trait::async_trait]
    impl IMessenger for OkMessenger {
        fn target(&self) -> String {
            "chat-42".into()
        }

        async fn send(&self, _text: &str) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_action_without_history_write() {
        let ctx = setup_context().await;
        let usecase = DispatchActionUseCase {
            reminder_id: "m1".into(),
            action: "escalate".into(),
            metadata: None,
        };

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::InvalidAction(_))));
        assert!(ctx.repos.alert_logs.list(200).await.unwrap().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_missing_reminder_id_without_history_write() {
        let ctx = setup_context().await;
        let usecase = DispatchActionUseCase {
            reminder_id: "  ".into(),
            action: "preview".into(),
            metadata: None,
        };

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::MissingReminderId)));
        assert!(ctx.repos.alert_logs.list(200).await.unwrap().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn unconfigured_transport_queues_the_dispatch() {
        let mut ctx = setup_context().await;
        ctx.sys = Arc::new(FixedSys(1_700_000_000_000));
        let usecase = DispatchActionUseCase {
            reminder_id: "m1".into(),
            action: "preview".into(),
            metadata: None,
        };

        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.status, "queued");
        assert_eq!(res.dispatched_at, to_iso(1_700_000_000_000));

        let entries = ctx.repos.alert_logs.list(200).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, DeliveryStatus::Queued);
        assert_eq!(entries[0].target, "mock-chat");
        assert_eq!(entries[0].sent_at, 1_700_000_000_000);
    }

    #[actix_web::main]
    #[test]
    async fn delivery_success_records_a_sent_entry() {
        let mut ctx = setup_context().await;
        ctx.messenger = Some(Arc::new(OkMessenger));
        let usecase = DispatchActionUseCase {
            reminder_id: "m1".into(),
            action: "mark_done".into(),
            metadata: Some(serde_json::json!({ "source": "dashboard" })),
        };

        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.status, "sent");
        assert_eq!(res.action, "mark_done");

        let entries = ctx.repos.alert_logs.list(200).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, DeliveryStatus::Sent);
        assert_eq!(entries[0].target, "chat-42");
    }

    #[actix_web::main]
    #[test]
    async fn delivery_failure_records_exactly_one_failed_entry() {
        let mut ctx = setup_context().await;
        ctx.messenger = Some(Arc::new(FailingMessenger));
        let usecase = DispatchActionUseCase {
            reminder_id: "m1".into(),
            action: "snooze".into(),
            metadata: None,
        };

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::DeliveryFailed(_))));

        let entries = ctx.repos.alert_logs.list(200).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, DeliveryStatus::Failed);
        assert!(entries[0].error.as_deref().unwrap().contains("502"));
    }
}
