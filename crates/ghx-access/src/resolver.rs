//! Permission resolution.
//!
//! Evaluation order, first match wins:
//!
//! 1. Admin-tier role → allow (admin override)
//! 2. Missing coarse entitlement → deny
//! 3. Resource-specific refinement (expenses, budgets, invoices)
//! 4. Fail closed
//!
//! The resolver holds no state and performs no I/O; everything it needs
//! arrives in the context, the entitlement set, and the optional facts.

use crate::context::{Action, PermissionContext};
use crate::decision::{AllowReason, Decision, DenyReason};
use crate::entitlement::EntitlementSet;
use crate::error::AccessError;
use crate::facts::{FactSource, ResourceFacts};
use ghx_types::ResourceKind;

/// Stateless decision engine. Construct once and share freely, or build
/// per request; both are safe.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionResolver;

impl PermissionResolver {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate one permission check.
    ///
    /// `facts` carries ownership/state data about the targeted resource
    /// instance; pass `None` when the action does not target an instance.
    /// Fine-grained rules that need facts and do not get them fail closed.
    pub fn resolve(
        &self,
        ctx: &PermissionContext,
        entitlements: &EntitlementSet,
        facts: Option<&ResourceFacts>,
    ) -> Result<Decision, AccessError> {
        ctx.validate()?;

        let decision = Self::evaluate(ctx, entitlements, facts);

        tracing::debug!(
            actor = %ctx.actor_id,
            organization = %ctx.organization_id,
            resource = %ctx.resource,
            action = %ctx.action,
            allow = decision.is_allow(),
            "permission resolved"
        );

        Ok(decision)
    }

    /// Evaluate only the coarse tiers: admin override and the
    /// organization-wide entitlement gate.
    ///
    /// This is the kind-level view used for matrix building and UI
    /// affordances, where no resource instance is in play yet.
    pub fn resolve_coarse(
        &self,
        ctx: &PermissionContext,
        entitlements: &EntitlementSet,
    ) -> Result<Decision, AccessError> {
        ctx.validate()?;

        if ctx.role.is_admin_tier() {
            return Ok(Decision::allow(AllowReason::AdminOverride));
        }
        if !entitlements.contains(&ctx.resource, &ctx.action) {
            return Ok(Decision::deny(DenyReason::MissingEntitlement));
        }
        Ok(Decision::allow(AllowReason::Entitled))
    }

    /// All-or-nothing bulk guard: allow only if every pair allows.
    ///
    /// Returns the first deny immediately without evaluating the
    /// remaining pairs. Facts for each pair are fetched from
    /// `fact_source` using the context's resource id, when present.
    /// An empty pair list allows vacuously.
    pub fn resolve_all<S: FactSource>(
        &self,
        ctx: &PermissionContext,
        pairs: &[(ResourceKind, Action)],
        entitlements: &EntitlementSet,
        fact_source: &S,
    ) -> Result<Decision, AccessError> {
        ctx.validate()?;

        for (resource, action) in pairs {
            let mut pair_ctx = ctx.clone();
            pair_ctx.resource = resource.clone();
            pair_ctx.action = action.clone();

            let facts = pair_ctx
                .resource_id
                .and_then(|id| fact_source.facts(resource, id));

            let decision = self.resolve(&pair_ctx, entitlements, facts.as_ref())?;
            if !decision.is_allow() {
                return Ok(decision);
            }
        }

        let reason = if ctx.role.is_admin_tier() {
            AllowReason::AdminOverride
        } else {
            AllowReason::Entitled
        };
        Ok(Decision::allow(reason))
    }

    fn evaluate(
        ctx: &PermissionContext,
        entitlements: &EntitlementSet,
        facts: Option<&ResourceFacts>,
    ) -> Decision {
        // Tier 1: admin override
        if ctx.role.is_admin_tier() {
            return Decision::allow(AllowReason::AdminOverride);
        }

        // Tier 2: organization-wide entitlement gate
        if !entitlements.contains(&ctx.resource, &ctx.action) {
            return Decision::deny(DenyReason::MissingEntitlement);
        }

        // Tier 3: resource-specific refinement
        match ctx.resource {
            ResourceKind::Expenses => Self::refine_expense(ctx, facts),
            ResourceKind::Budgets => Self::refine_budget(ctx, facts),
            ResourceKind::Invoices => Self::refine_invoice(ctx, facts),
            _ => Decision::allow(AllowReason::Entitled),
        }
    }

    /// Expenses: no self-approval; only the submitter may rework a
    /// still-editable document.
    fn refine_expense(ctx: &PermissionContext, facts: Option<&ResourceFacts>) -> Decision {
        match ctx.action.as_str() {
            "approve" | "reject" => match facts {
                Some(f) if f.submitted_by == Some(ctx.actor_id) => {
                    Decision::deny(DenyReason::SelfApproval)
                }
                Some(_) => Decision::allow(AllowReason::Entitled),
                None => Decision::deny(DenyReason::DefaultDeny),
            },
            "update" | "delete" => match facts {
                Some(f) => {
                    if f.submitted_by != Some(ctx.actor_id) {
                        Decision::deny(DenyReason::NotSubmitter)
                    } else if f.state.is_some_and(|s| s.is_draft_editable()) {
                        Decision::allow(AllowReason::Entitled)
                    } else {
                        Decision::deny(DenyReason::ResourceLocked)
                    }
                }
                None => Decision::deny(DenyReason::DefaultDeny),
            },
            _ => Decision::allow(AllowReason::Entitled),
        }
    }

    /// Budgets: modification requires membership in the owning project.
    fn refine_budget(ctx: &PermissionContext, facts: Option<&ResourceFacts>) -> Decision {
        match ctx.action.as_str() {
            "update" | "delete" => match facts {
                Some(f) if f.is_project_member(ctx.actor_id) => {
                    Decision::allow(AllowReason::Entitled)
                }
                // Absent association denies, even with the entitlement
                _ => Decision::deny(DenyReason::NotProjectMember),
            },
            _ => Decision::allow(AllowReason::Entitled),
        }
    }

    /// Invoices: once issued, only the creator may modify.
    fn refine_invoice(ctx: &PermissionContext, facts: Option<&ResourceFacts>) -> Decision {
        match ctx.action.as_str() {
            "update" | "delete" => match facts.and_then(|f| f.state) {
                Some(state) if state.is_issued() => {
                    if facts.and_then(|f| f.created_by) == Some(ctx.actor_id) {
                        Decision::allow(AllowReason::Entitled)
                    } else {
                        Decision::deny(DenyReason::CreatorOnly)
                    }
                }
                Some(_) => Decision::allow(AllowReason::Entitled),
                None => Decision::deny(DenyReason::DefaultDeny),
            },
            _ => Decision::allow(AllowReason::Entitled),
        }
    }
}
