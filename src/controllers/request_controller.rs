//! Service request lifecycle controller
//!
//! Owns the business rules of the request state machine: who may invoke
//! which transition, what each transition requires, and which error kind a
//! refused transition reports. The repository's conditional writes make the
//! rules hold under concurrency; this layer turns a zero-row outcome into
//! the right error for the caller.

use crate::dto::request_dto::{
    CreateRequestRequest, QuickCreateRequest, RequestResponse, UpdateRequestRequest,
};
use crate::middleware::auth::AuthenticatedAccount;
use crate::models::account::{Account, AccountRole};
use crate::models::service_request::{RequestStatus, ServiceRequest};
use crate::repositories::account_repository::AccountRepository;
use crate::repositories::mechanic_service_repository::MechanicServiceRepository;
use crate::repositories::request_repository::{NewServiceRequest, RequestRepository};
use crate::services::chat_service::ChatService;
use crate::services::request_directory::{self, StateCounts};
use crate::utils::errors::{not_found_error, AppError, AppResult};
use sqlx::PgPool;
use uuid::Uuid;

/// Required fields for opening a request
fn validate_new_fields(service_type: &str, issue_desc: &str) -> AppResult<()> {
    if service_type.trim().is_empty() {
        return Err(AppError::Validation("service_type is required".to_string()));
    }
    if issue_desc.trim().is_empty() {
        return Err(AppError::Validation("issue_desc is required".to_string()));
    }
    Ok(())
}

/// Rules for Complete, checked against the current entity before the
/// guarded write: the request must be accepted, and only its assigned
/// mechanic may close it.
fn complete_guard(current: &ServiceRequest, mechanic_id: Uuid) -> AppResult<()> {
    if current.status != RequestStatus::Accepted {
        return Err(AppError::InvalidTransition(format!(
            "Request is {}, only accepted requests can be completed",
            current.status.as_str()
        )));
    }
    if current.mechanic_id != Some(mechanic_id) {
        return Err(AppError::Authorization(
            "Only the assigned mechanic may complete this request".to_string(),
        ));
    }
    Ok(())
}

/// A guarded transition matched zero rows: not-found for unknown ids,
/// invalid transition otherwise (e.g. the losing side of an accept race).
fn refusal(status: Option<RequestStatus>, request_id: Uuid, wanted: &str) -> AppError {
    match status {
        None => not_found_error("ServiceRequest", &request_id.to_string()),
        Some(status) => AppError::InvalidTransition(format!(
            "Request is {}, it cannot be {}",
            status.as_str(),
            wanted
        )),
    }
}

/// Why a guarded cancel matched nothing, given the surviving entity
fn cancel_refusal(current: &ServiceRequest, customer_id: Uuid) -> AppError {
    if current.owner_id != customer_id {
        AppError::Authorization("Only the owning customer may cancel this request".to_string())
    } else {
        AppError::InvalidTransition(format!(
            "Request is {}, cancellation is only possible while pending",
            current.status.as_str()
        ))
    }
}

pub struct RequestController {
    repository: RequestRepository,
    accounts: AccountRepository,
    listings: MechanicServiceRepository,
    chats: ChatService,
}

impl RequestController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RequestRepository::new(pool.clone()),
            accounts: AccountRepository::new(pool.clone()),
            listings: MechanicServiceRepository::new(pool.clone()),
            chats: ChatService::new(pool),
        }
    }

    fn require_role(actor: &AuthenticatedAccount, role: AccountRole, action: &str) -> AppResult<()> {
        if actor.role != role {
            return Err(AppError::Authorization(format!(
                "Only a {} may {}",
                role.as_str(),
                action
            )));
        }
        Ok(())
    }

    async fn resolve_customer(&self, customer_id: Uuid) -> AppResult<Account> {
        self.accounts
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| not_found_error("Account", &customer_id.to_string()))
    }

    /// Create a new request in the pending pool
    pub async fn create(
        &self,
        actor: AuthenticatedAccount,
        request: CreateRequestRequest,
    ) -> AppResult<RequestResponse> {
        Self::require_role(&actor, AccountRole::Customer, "create a service request")?;
        validate_new_fields(&request.service_type, &request.issue_desc)?;

        let customer = self.resolve_customer(actor.account_id).await?;

        let created = self
            .repository
            .create(NewServiceRequest {
                owner_id: customer.id,
                customer_name: customer.name,
                customer_email: customer.email,
                requested_mechanic_id: None,
                vehicle_id: request.vehicle_id,
                service_type: request.service_type,
                issue_desc: request.issue_desc,
                notes: request.notes,
                pickup_address: request.pickup_address,
                dropoff_address: request.dropoff_address,
                image_uri: request.image_uri,
                location: request.location,
                price: None,
            })
            .await?;

        tracing::info!("✅ Service request {} created by {}", created.id, created.owner_id);
        Ok(RequestResponse::from(created))
    }

    /// Create a request against a published listing. The listing's mechanic
    /// is recorded as the requested target, but the request still enters the
    /// pending pool and must be explicitly accepted.
    pub async fn quick_create(
        &self,
        actor: AuthenticatedAccount,
        request: QuickCreateRequest,
    ) -> AppResult<RequestResponse> {
        Self::require_role(&actor, AccountRole::Customer, "create a service request")?;

        let listing = self
            .listings
            .find_by_id(request.mechanic_service_id)
            .await?
            .ok_or_else(|| {
                not_found_error("MechanicService", &request.mechanic_service_id.to_string())
            })?;

        let issue_desc = request
            .issue_desc
            .filter(|desc| !desc.trim().is_empty())
            .unwrap_or_else(|| listing.description.clone());
        if issue_desc.trim().is_empty() {
            return Err(AppError::Validation("issue_desc is required".to_string()));
        }

        let customer = self.resolve_customer(actor.account_id).await?;

        let created = self
            .repository
            .create(NewServiceRequest {
                owner_id: customer.id,
                customer_name: customer.name,
                customer_email: customer.email,
                requested_mechanic_id: Some(listing.mechanic_id),
                vehicle_id: request.vehicle_id,
                service_type: listing.service_name,
                issue_desc,
                notes: request.notes,
                pickup_address: request.pickup_address,
                dropoff_address: request.dropoff_address,
                image_uri: None,
                location: request.location,
                price: Some(listing.price),
            })
            .await?;

        tracing::info!(
            "✅ Quick request {} created against listing {}",
            created.id,
            request.mechanic_service_id
        );
        Ok(RequestResponse::from(created))
    }

    /// Accept a pending request. First acceptance wins: the conditional
    /// write leaves concurrent losers with a zero-row update, reported as
    /// an invalid transition.
    pub async fn accept(
        &self,
        actor: AuthenticatedAccount,
        request_id: Uuid,
    ) -> AppResult<RequestResponse> {
        Self::require_role(&actor, AccountRole::Mechanic, "accept a request")?;

        let accepted = self
            .repository
            .accept_if_pending(request_id, actor.account_id)
            .await?;

        let accepted = match accepted {
            Some(request) => request,
            None => return Err(self.transition_refusal(request_id, "accepted").await?),
        };

        // Open the chat between customer and mechanic; a chat failure is
        // logged but never undoes the transition
        match self.accounts.find_by_id(actor.account_id).await {
            Ok(Some(mechanic)) => {
                if let Err(e) = self
                    .chats
                    .ensure_chat(
                        accepted.owner_id,
                        mechanic.id,
                        &accepted.customer_name,
                        &mechanic.name,
                    )
                    .await
                {
                    tracing::warn!("⚠️ Could not ensure chat for request {}: {}", request_id, e);
                }
            }
            Ok(None) => {
                tracing::warn!("⚠️ Accepting mechanic {} not found for chat", actor.account_id)
            }
            Err(e) => tracing::warn!("⚠️ Could not load mechanic for chat: {}", e),
        }

        tracing::info!("✅ Request {} accepted by mechanic {}", request_id, actor.account_id);
        Ok(RequestResponse::from(accepted))
    }

    /// Reject a pending request. No ownership is recorded.
    pub async fn reject(
        &self,
        actor: AuthenticatedAccount,
        request_id: Uuid,
    ) -> AppResult<RequestResponse> {
        Self::require_role(&actor, AccountRole::Mechanic, "reject a request")?;

        match self.repository.reject_if_pending(request_id).await? {
            Some(request) => {
                tracing::info!("✅ Request {} rejected", request_id);
                Ok(RequestResponse::from(request))
            }
            None => Err(self.transition_refusal(request_id, "rejected").await?),
        }
    }

    /// Complete an accepted request; only the assigned mechanic may do this
    pub async fn complete(
        &self,
        actor: AuthenticatedAccount,
        request_id: Uuid,
    ) -> AppResult<RequestResponse> {
        Self::require_role(&actor, AccountRole::Mechanic, "complete a request")?;

        let current = self
            .repository
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| not_found_error("ServiceRequest", &request_id.to_string()))?;

        complete_guard(&current, actor.account_id)?;

        match self
            .repository
            .complete_if_assigned(request_id, actor.account_id)
            .await?
        {
            Some(request) => {
                tracing::info!("✅ Request {} completed", request_id);
                Ok(RequestResponse::from(request))
            }
            // The request changed between the read and the guarded write
            None => Err(AppError::InvalidTransition(
                "Request is no longer in an acceptable state".to_string(),
            )),
        }
    }

    /// Cancel a pending request; owner only, hard delete
    pub async fn cancel(&self, actor: AuthenticatedAccount, request_id: Uuid) -> AppResult<()> {
        Self::require_role(&actor, AccountRole::Customer, "cancel a request")?;

        if self
            .repository
            .delete_if_pending(request_id, actor.account_id)
            .await?
        {
            tracing::info!("🗑️ Request {} cancelled by {}", request_id, actor.account_id);
            return Ok(());
        }

        // Figure out why the guarded delete matched nothing
        let current = self
            .repository
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| not_found_error("ServiceRequest", &request_id.to_string()))?;

        Err(cancel_refusal(&current, actor.account_id))
    }

    /// Pre-acceptance edit by the owning customer
    pub async fn update(
        &self,
        actor: AuthenticatedAccount,
        request_id: Uuid,
        update: UpdateRequestRequest,
    ) -> AppResult<RequestResponse> {
        Self::require_role(&actor, AccountRole::Customer, "edit a request")?;

        if matches!(&update.service_type, Some(s) if s.trim().is_empty()) {
            return Err(AppError::Validation("service_type cannot be empty".to_string()));
        }
        if matches!(&update.issue_desc, Some(s) if s.trim().is_empty()) {
            return Err(AppError::Validation("issue_desc cannot be empty".to_string()));
        }

        let updated = self
            .repository
            .update_if_pending(
                request_id,
                actor.account_id,
                update.service_type,
                update.issue_desc,
                update.notes,
                update.pickup_address,
                update.dropoff_address,
            )
            .await?;

        match updated {
            Some(request) => Ok(RequestResponse::from(request)),
            None => {
                let current = self
                    .repository
                    .find_by_id(request_id)
                    .await?
                    .ok_or_else(|| not_found_error("ServiceRequest", &request_id.to_string()))?;

                if current.owner_id != actor.account_id {
                    return Err(AppError::Authorization(
                        "Only the owning customer may edit this request".to_string(),
                    ));
                }

                Err(AppError::InvalidTransition(format!(
                    "Request is {}, edits are only possible while pending",
                    current.status.as_str()
                )))
            }
        }
    }

    /// Fetch a single request, visibility-checked for the actor
    pub async fn get(
        &self,
        actor: AuthenticatedAccount,
        request_id: Uuid,
    ) -> AppResult<RequestResponse> {
        let request = self
            .repository
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| not_found_error("ServiceRequest", &request_id.to_string()))?;

        let visible = match actor.role {
            AccountRole::Customer => request.owner_id == actor.account_id,
            // Mechanics see the pending pool plus their own jobs
            AccountRole::Mechanic => {
                request.status == RequestStatus::Pending
                    || request.mechanic_id == Some(actor.account_id)
            }
        };

        if !visible {
            return Err(AppError::Authorization(
                "You do not have access to this request".to_string(),
            ));
        }

        Ok(RequestResponse::from(request))
    }

    /// The customer's own history, any state
    pub async fn list_mine(&self, actor: AuthenticatedAccount) -> AppResult<Vec<RequestResponse>> {
        let snapshot = self.repository.find_all().await?;
        Ok(into_responses(request_directory::by_owner(
            &snapshot,
            actor.account_id,
        )))
    }

    /// The global pending pool, oldest first, for mechanic triage
    pub async fn pending_pool(
        &self,
        actor: AuthenticatedAccount,
    ) -> AppResult<Vec<RequestResponse>> {
        Self::require_role(&actor, AccountRole::Mechanic, "view the pending pool")?;

        let snapshot = self.repository.find_all().await?;
        Ok(into_responses(request_directory::pending_pool(&snapshot)))
    }

    /// A mechanic's assigned jobs, optionally narrowed by state
    pub async fn mechanic_jobs(
        &self,
        actor: AuthenticatedAccount,
        status: Option<RequestStatus>,
    ) -> AppResult<Vec<RequestResponse>> {
        Self::require_role(&actor, AccountRole::Mechanic, "view assigned jobs")?;

        let snapshot = self.repository.find_all().await?;
        Ok(into_responses(request_directory::by_mechanic(
            &snapshot,
            actor.account_id,
            status,
        )))
    }

    /// Per-state counts for the admin dashboard tiles
    pub async fn counts(&self) -> AppResult<StateCounts> {
        let snapshot = self.repository.find_all().await?;
        Ok(request_directory::counts_by_state(&snapshot))
    }

    /// Global request list for the admin panel
    pub async fn list_all(&self) -> AppResult<Vec<RequestResponse>> {
        let snapshot = self.repository.find_all().await?;
        Ok(into_responses(snapshot))
    }

    /// Fetch the current status and turn a zero-row transition into the
    /// error to raise
    async fn transition_refusal(&self, request_id: Uuid, wanted: &str) -> AppResult<AppError> {
        Ok(refusal(
            self.repository.status_of(request_id).await?,
            request_id,
            wanted,
        ))
    }
}

fn into_responses(requests: Vec<ServiceRequest>) -> Vec<RequestResponse> {
    requests.into_iter().map(RequestResponse::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn request(
        owner_id: Uuid,
        mechanic_id: Option<Uuid>,
        status: RequestStatus,
    ) -> ServiceRequest {
        let now = Utc::now();
        ServiceRequest {
            id: Uuid::new_v4(),
            owner_id,
            customer_name: "Sara".to_string(),
            customer_email: "sara@example.com".to_string(),
            mechanic_id,
            requested_mechanic_id: None,
            vehicle_id: None,
            service_type: "towing".to_string(),
            issue_desc: "won't start".to_string(),
            notes: String::new(),
            pickup_address: "12 Canal Rd".to_string(),
            dropoff_address: String::new(),
            image_uri: None,
            location: None,
            price: None,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_create_fields_must_be_nonempty() {
        assert!(matches!(
            validate_new_fields("", "won't start"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_new_fields("towing", "   "),
            Err(AppError::Validation(_))
        ));
        assert!(validate_new_fields("towing", "won't start").is_ok());
    }

    #[test]
    fn test_accept_is_mechanic_only() {
        let actor = AuthenticatedAccount {
            account_id: Uuid::new_v4(),
            role: AccountRole::Customer,
        };
        assert!(matches!(
            RequestController::require_role(&actor, AccountRole::Mechanic, "accept a request"),
            Err(AppError::Authorization(_))
        ));
    }

    #[test]
    fn test_complete_by_unassigned_mechanic_is_forbidden() {
        let assigned = Uuid::new_v4();
        let current = request(Uuid::new_v4(), Some(assigned), RequestStatus::Accepted);

        assert!(matches!(
            complete_guard(&current, Uuid::new_v4()),
            Err(AppError::Authorization(_))
        ));
        assert!(complete_guard(&current, assigned).is_ok());
    }

    #[test]
    fn test_complete_requires_accepted_state() {
        let mechanic = Uuid::new_v4();
        let pending = request(Uuid::new_v4(), None, RequestStatus::Pending);

        assert!(matches!(
            complete_guard(&pending, mechanic),
            Err(AppError::InvalidTransition(_))
        ));
    }

    #[test]
    fn test_losing_accept_reports_invalid_transition() {
        let id = Uuid::new_v4();
        assert!(matches!(
            refusal(Some(RequestStatus::Accepted), id, "accepted"),
            AppError::InvalidTransition(_)
        ));
        assert!(matches!(refusal(None, id, "accepted"), AppError::NotFound(_)));
    }

    #[test]
    fn test_cancel_after_acceptance_is_refused() {
        let owner = Uuid::new_v4();
        let current = request(owner, Some(Uuid::new_v4()), RequestStatus::Accepted);

        assert!(matches!(
            cancel_refusal(&current, owner),
            AppError::InvalidTransition(_)
        ));
        assert!(matches!(
            cancel_refusal(&current, Uuid::new_v4()),
            AppError::Authorization(_)
        ));
    }
}
