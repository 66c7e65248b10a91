use crate::error::AlarmError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use alarmhosting_api_structs::dtos::AlertEntryDTO;
use alarmhosting_api_structs::{test_email_integration, test_slack_integration};
use alarmhosting_domain::{AlertChannel, AlertEntry, DeliveryStatus};
use alarmhosting_infra::Context;

pub async fn test_email_controller(
    body: web::Json<test_email_integration::RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AlarmError> {
    let usecase = TestIntegrationUseCase {
        channel: AlertChannel::Email,
        target: body.into_inner().email,
    };

    execute(usecase, &ctx)
        .await
        .map(|entry| HttpResponse::Ok().json(AlertEntryDTO::new(entry)))
        .map_err(AlarmError::from)
}

pub async fn test_slack_controller(
    body: web::Json<test_slack_integration::RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AlarmError> {
    let usecase = TestIntegrationUseCase {
        channel: AlertChannel::Slack,
        target: body.into_inner().channel,
    };

    execute(usecase, &ctx)
        .await
        .map(|entry| HttpResponse::Ok().json(AlertEntryDTO::new(entry)))
        .map_err(AlarmError::from)
}

/// Records a simulated delivery on the given channel. No real email or
/// Slack call is made, the point is exercising the alert history path.
#[derive(Debug)]
pub struct TestIntegrationUseCase {
    pub channel: AlertChannel,
    pub target: String,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    MissingTarget(AlertChannel),
    StorageError,
}

impl From<UseCaseErrors> for AlarmError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::MissingTarget(channel) => Self::BadClientData(format!(
                "A target is required to test the {} integration",
                channel.as_str()
            )),
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for TestIntegrationUseCase {
    type Response = AlertEntry;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "TestIntegration";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let target = self.target.trim();
        if target.is_empty() {
            return Err(UseCaseErrors::MissingTarget(self.channel));
        }

        let mut entry = AlertEntry::new(
            self.channel,
            target.to_string(),
            DeliveryStatus::Sent,
            ctx.sys.get_timestamp_millis(),
        );
        entry.payload = Some(serde_json::json!({
            "test": true,
            "channel": self.channel.as_str(),
        }));

        ctx.repos
            .alert_logs
            .insert(&entry)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alarmhosting_infra::setup_context;

    #[actix_web::main]
    #[test]
    async fn empty_target_is_rejected_before_logging() {
        let ctx = setup_context().await;
        let usecase = TestIntegrationUseCase {
            channel: AlertChannel::Email,
            target: "   ".into(),
        };

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::MissingTarget(_))));
        assert!(ctx.repos.alert_logs.list(200).await.unwrap().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn records_a_sent_entry_for_the_channel() {
        let ctx = setup_context().await;
        let usecase = TestIntegrationUseCase {
            channel: AlertChannel::Slack,
            target: "#ops-renewals".into(),
        };

        let entry = execute(usecase, &ctx).await.unwrap();
        assert_eq!(entry.channel, AlertChannel::Slack);
        assert_eq!(entry.status, DeliveryStatus::Sent);

        let entries = ctx.repos.alert_logs.list(200).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].target, "#ops-renewals");
    }
}
