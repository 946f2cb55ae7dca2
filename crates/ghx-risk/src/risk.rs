//! The risk entity.

use crate::error::RiskError;
use crate::rating::{RiskCategory, RiskRating};
use crate::score::{classify, score, RiskBand};
use crate::status::{RiskStatus, StatusTransition};
use chrono::{DateTime, Utc};
use ghx_types::{ActorId, OrganizationId, ProjectId, ResourceId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Probability/impact pair supplied by a caller when creating or
/// reassessing a risk.
///
/// Deliberately carries no score field: the score is always derived at
/// write time, never accepted from a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub probability: RiskRating,
    pub impact: RiskRating,
}

impl RiskAssessment {
    pub fn new(probability: RiskRating, impact: RiskRating) -> Self {
        Self {
            probability,
            impact,
        }
    }

    /// Derived priority score for this assessment.
    pub fn score(&self) -> u8 {
        score(self.probability, self.impact)
    }

    /// Derived qualitative band for this assessment.
    pub fn band(&self) -> RiskBand {
        classify(self.score())
    }
}

/// A risk identified on a project.
///
/// Belongs to exactly one project within one organization and has no
/// lifecycle beyond it. `score` and `band` are derived fields, recomputed
/// on every write that touches the ratings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Risk {
    /// Unique risk id.
    pub id: ResourceId,
    /// Tenant boundary.
    pub organization_id: OrganizationId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Business category.
    pub category: RiskCategory,
    /// Short description of the risk.
    pub description: String,
    /// Assessed probability.
    pub probability: RiskRating,
    /// Assessed impact.
    pub impact: RiskRating,
    /// Derived priority score, weight(probability) x weight(impact).
    pub score: u8,
    /// Derived qualitative band.
    pub band: RiskBand,
    /// Lifecycle stage.
    pub status: RiskStatus,
    /// Actor responsible for mitigation.
    pub owner: Option<ActorId>,
    /// History of lifecycle transitions.
    pub history: Vec<StatusTransition>,
    /// Additional metadata.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Risk {
    /// Register a new risk in the identified stage.
    pub fn new(
        organization_id: OrganizationId,
        project_id: ProjectId,
        category: RiskCategory,
        description: impl Into<String>,
        assessment: RiskAssessment,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ResourceId::new(),
            organization_id,
            project_id,
            category,
            description: description.into(),
            probability: assessment.probability,
            impact: assessment.impact,
            score: assessment.score(),
            band: assessment.band(),
            status: RiskStatus::Identified,
            owner: None,
            history: Vec::new(),
            metadata: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a risk from stored parts, re-deriving score and band.
    ///
    /// Stored score values are never trusted; a row written by an older
    /// banding table comes out re-derived under the current one.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: ResourceId,
        organization_id: OrganizationId,
        project_id: ProjectId,
        category: RiskCategory,
        description: String,
        assessment: RiskAssessment,
        status: RiskStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            organization_id,
            project_id,
            category,
            description,
            probability: assessment.probability,
            impact: assessment.impact,
            score: assessment.score(),
            band: assessment.band(),
            status,
            owner: None,
            history: Vec::new(),
            metadata: HashMap::new(),
            created_at,
            updated_at,
        }
    }

    /// Assign a mitigation owner.
    pub fn with_owner(mut self, owner: ActorId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Add a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Re-rate the risk, recomputing score and band.
    ///
    /// Returns the new score.
    pub fn reassess(&mut self, assessment: RiskAssessment) -> u8 {
        self.probability = assessment.probability;
        self.impact = assessment.impact;
        self.score = assessment.score();
        self.band = assessment.band();
        self.updated_at = Utc::now();

        tracing::debug!(
            risk = %self.id,
            score = self.score,
            band = %self.band,
            "risk reassessed"
        );

        self.score
    }

    /// Advance the lifecycle, recording the transition.
    ///
    /// Rejects any move that is not strictly forward.
    pub fn advance(
        &mut self,
        to: RiskStatus,
        by: Option<ActorId>,
        reason: Option<String>,
    ) -> Result<(), RiskError> {
        if !self.status.can_transition_to(to) {
            return Err(RiskError::InvalidTransition {
                from: self.status,
                to,
            });
        }

        let now = Utc::now();
        let from = std::mem::replace(&mut self.status, to);
        self.history.push(StatusTransition {
            from,
            to,
            at: now,
            by,
            reason,
        });
        self.updated_at = now;

        tracing::debug!(risk = %self.id, from = %from, to = %to, "risk advanced");

        Ok(())
    }

    /// Whether the risk has reached its terminal stage.
    pub fn is_closed(&self) -> bool {
        self.status.is_terminal()
    }
}
