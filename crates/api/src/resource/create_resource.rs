use crate::error::AlarmError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use alarmhosting_api_structs::create_resource::RequestBody;
use alarmhosting_api_structs::dtos::ResourceDTO;
use alarmhosting_domain::{Resource, ResourceStatus, ResourceType, ID};
use alarmhosting_infra::Context;
use std::str::FromStr;

pub async fn create_resource_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AlarmError> {
    let body = body.into_inner();
    let usecase = CreateResourceUseCase { body };

    execute(usecase, &ctx)
        .await
        .map(|resource| {
            let status = resource.status;
            HttpResponse::Created().json(ResourceDTO::new(resource, status))
        })
        .map_err(AlarmError::from)
}

#[derive(Debug)]
struct CreateResourceUseCase {
    body: RequestBody,
}

#[derive(Debug)]
enum UseCaseErrors {
    MissingField(&'static str),
    InvalidResourceType(String),
    StorageError,
}

impl From<UseCaseErrors> for AlarmError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::MissingField(field) => {
                Self::BadClientData(format!("The field {} is required", field))
            }
            UseCaseErrors::InvalidResourceType(given) => Self::BadClientData(format!(
                "Unknown resource type: {}. Valid types are domain, hosting, ssl and email",
                given
            )),
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

fn required(value: &Option<String>, field: &'static str) -> Result<String, UseCaseErrors> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(UseCaseErrors::MissingField(field)),
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateResourceUseCase {
    type Response = Resource;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateResource";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let raw_type = required(&self.body.resource_type, "type")?;
        let label = required(&self.body.label, "label")?;
        let provider = required(&self.body.provider, "provider")?;
        let expiry_date = required(&self.body.expiry_date, "expiryDate")?;

        let resource_type = ResourceType::from_str(&raw_type)
            .map_err(|_| UseCaseErrors::InvalidResourceType(raw_type))?;

        let now_ms = ctx.sys.get_timestamp_millis();
        let hostname = self
            .body
            .hostname
            .take()
            .filter(|hostname| !hostname.trim().is_empty())
            .unwrap_or_else(|| Resource::hostname_from_label(&label));

        let mut resource = Resource {
            id: ID::from(format!("res-{}", ID::new()).as_str()),
            resource_type,
            label,
            hostname,
            provider,
            expiry_date,
            status: ResourceStatus::Healthy,
            renewal_url: self.body.renewal_url.take().unwrap_or_default(),
            notes: self.body.notes.take().unwrap_or_default(),
            last_checked: now_ms,
            tags: vec![],
        };
        resource.status = resource.current_status(now_ms);

        ctx.repos
            .resources
            .insert(&resource)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alarmhosting_infra::setup_context;

    fn body() -> RequestBody {
        RequestBody {
            resource_type: Some("domain".into()),
            label: Some("Acme Studio".into()),
            provider: Some("Namecheap".into()),
            expiry_date: Some("2031-01-15".into()),
            hostname: None,
            renewal_url: None,
            notes: None,
        }
    }

    #[actix_web::main]
    #[test]
    async fn creates_a_resource_with_derived_hostname_and_status() {
        let ctx = setup_context().await;
        let usecase = CreateResourceUseCase { body: body() };

        let resource = execute(usecase, &ctx).await.unwrap();
        assert_eq!(resource.hostname, "acme-studio.local");
        assert!(resource.id.as_str().starts_with("res-"));
        assert_eq!(resource.status, ResourceStatus::Healthy);

        let stored = ctx.repos.resources.find(&resource.id).await;
        assert!(stored.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_a_missing_required_field() {
        let ctx = setup_context().await;
        let mut invalid = body();
        invalid.expiry_date = None;
        let usecase = CreateResourceUseCase { body: invalid };

        let res = execute(usecase, &ctx).await;
        assert!(matches!(
            res,
            Err(UseCaseErrors::MissingField("expiryDate"))
        ));
        assert!(ctx.repos.resources.find_all().await.unwrap().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_an_unknown_resource_type() {
        let ctx = setup_context().await;
        let mut invalid = body();
        invalid.resource_type = Some("vps".into());
        let usecase = CreateResourceUseCase { body: invalid };

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::InvalidResourceType(_))));
    }
}
