//! Request directory projections
//!
//! Role-scoped read models derived from a snapshot of service requests.
//! Pure filters and aggregates: the caller decides when to refetch the
//! snapshot (on demand, on a timer, on a push), these functions only define
//! what a projection must return for a given snapshot.

use crate::models::service_request::{RequestStatus, ServiceRequest};
use serde::Serialize;
use uuid::Uuid;

/// Per-state cardinalities for dashboard summary tiles
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct StateCounts {
    pub pending: usize,
    pub accepted: usize,
    pub completed: usize,
    pub rejected: usize,
    pub total: usize,
}

impl StateCounts {
    pub fn get(&self, status: RequestStatus) -> usize {
        match status {
            RequestStatus::Pending => self.pending,
            RequestStatus::Accepted => self.accepted,
            RequestStatus::Completed => self.completed,
            RequestStatus::Rejected => self.rejected,
        }
    }
}

/// All pending requests, oldest first, for mechanic triage
pub fn pending_pool(requests: &[ServiceRequest]) -> Vec<ServiceRequest> {
    let mut pool: Vec<ServiceRequest> = requests
        .iter()
        .filter(|r| r.status == RequestStatus::Pending)
        .cloned()
        .collect();
    pool.sort_by_key(|r| r.created_at);
    pool
}

/// A customer's personal history, any state
pub fn by_owner(requests: &[ServiceRequest], owner_id: Uuid) -> Vec<ServiceRequest> {
    requests
        .iter()
        .filter(|r| r.owner_id == owner_id)
        .cloned()
        .collect()
}

/// A mechanic's assigned jobs, optionally narrowed to one state
pub fn by_mechanic(
    requests: &[ServiceRequest],
    mechanic_id: Uuid,
    status: Option<RequestStatus>,
) -> Vec<ServiceRequest> {
    requests
        .iter()
        .filter(|r| r.mechanic_id == Some(mechanic_id))
        .filter(|r| status.map_or(true, |s| r.status == s))
        .cloned()
        .collect()
}

/// Cardinality of every state in the snapshot
pub fn counts_by_state(requests: &[ServiceRequest]) -> StateCounts {
    let mut counts = StateCounts::default();
    for request in requests {
        match request.status {
            RequestStatus::Pending => counts.pending += 1,
            RequestStatus::Accepted => counts.accepted += 1,
            RequestStatus::Completed => counts.completed += 1,
            RequestStatus::Rejected => counts.rejected += 1,
        }
        counts.total += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn request(
        owner_id: Uuid,
        mechanic_id: Option<Uuid>,
        status: RequestStatus,
        age_minutes: i64,
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
            service_type: "oil_change".to_string(),
            issue_desc: "leak".to_string(),
            notes: String::new(),
            pickup_address: "12 Canal Rd".to_string(),
            dropoff_address: String::new(),
            image_uri: None,
            location: None,
            price: None,
            status,
            created_at: now - Duration::minutes(age_minutes),
            updated_at: now,
        }
    }

    #[test]
    fn test_pending_pool_contains_only_pending_oldest_first() {
        let owner = Uuid::new_v4();
        let mechanic = Uuid::new_v4();
        let newer = request(owner, None, RequestStatus::Pending, 5);
        let older = request(owner, None, RequestStatus::Pending, 60);
        let accepted = request(owner, Some(mechanic), RequestStatus::Accepted, 90);

        let pool = pending_pool(&[newer.clone(), accepted, older.clone()]);

        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0].id, older.id);
        assert_eq!(pool[1].id, newer.id);
        assert!(pool.iter().all(|r| r.status == RequestStatus::Pending));
    }

    #[test]
    fn test_by_owner_returns_all_states_for_that_owner() {
        let mine = Uuid::new_v4();
        let theirs = Uuid::new_v4();
        let snapshot = [
            request(mine, None, RequestStatus::Pending, 1),
            request(mine, Some(Uuid::new_v4()), RequestStatus::Completed, 2),
            request(theirs, None, RequestStatus::Pending, 3),
        ];

        let history = by_owner(&snapshot, mine);
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|r| r.owner_id == mine));
    }

    #[test]
    fn test_by_mechanic_with_and_without_state_filter() {
        let owner = Uuid::new_v4();
        let mechanic = Uuid::new_v4();
        let snapshot = [
            request(owner, Some(mechanic), RequestStatus::Accepted, 1),
            request(owner, Some(mechanic), RequestStatus::Completed, 2),
            request(owner, Some(Uuid::new_v4()), RequestStatus::Completed, 3),
            request(owner, None, RequestStatus::Pending, 4),
        ];

        assert_eq!(by_mechanic(&snapshot, mechanic, None).len(), 2);

        let completed = by_mechanic(&snapshot, mechanic, Some(RequestStatus::Completed));
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].status, RequestStatus::Completed);
    }

    #[test]
    fn test_counts_by_state_covers_every_state() {
        let owner = Uuid::new_v4();
        let mechanic = Uuid::new_v4();
        let snapshot = [
            request(owner, None, RequestStatus::Pending, 1),
            request(owner, None, RequestStatus::Pending, 2),
            request(owner, Some(mechanic), RequestStatus::Accepted, 3),
            request(owner, Some(mechanic), RequestStatus::Completed, 4),
            request(owner, None, RequestStatus::Rejected, 5),
        ];

        let counts = counts_by_state(&snapshot);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.accepted, 1);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.rejected, 1);
        assert_eq!(counts.total, 5);
        assert_eq!(counts.get(RequestStatus::Pending), 2);
    }

    #[test]
    fn test_counts_on_empty_snapshot_are_zero() {
        assert_eq!(counts_by_state(&[]), StateCounts::default());
    }
}
