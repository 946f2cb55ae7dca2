//! Property tests for the resolver's structural guarantees.

use ghx_access::{
    Action, AllowReason, Decision, DenyReason, EntitlementSet, PermissionContext,
    PermissionResolver,
};
use ghx_types::{ActorId, OrganizationId, ResourceKind, Role};
use proptest::prelude::*;

fn non_admin_role() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::Viewer),
        Just(Role::Member),
        Just(Role::Manager),
    ]
}

fn admin_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Admin), Just(Role::Owner)]
}

fn token() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

proptest! {
    // Admin-tier roles allow any resource/action with no entitlements.
    #[test]
    fn admin_always_allows(role in admin_role(), resource in token(), action in token()) {
        let resolver = PermissionResolver::new();
        let ctx = PermissionContext::new(
            ActorId::new(),
            OrganizationId::new(),
            role,
            ResourceKind::from(resource.as_str()),
            Action::new(&action).unwrap(),
        );

        let decision = resolver.resolve(&ctx, &EntitlementSet::new(), None).unwrap();
        prop_assert_eq!(decision, Decision::allow(AllowReason::AdminOverride));
    }

    // Non-admin roles with no entitlements deny every resource/action.
    #[test]
    fn empty_entitlements_deny(role in non_admin_role(), resource in token(), action in token()) {
        let resolver = PermissionResolver::new();
        let ctx = PermissionContext::new(
            ActorId::new(),
            OrganizationId::new(),
            role,
            ResourceKind::from(resource.as_str()),
            Action::new(&action).unwrap(),
        );

        let decision = resolver.resolve(&ctx, &EntitlementSet::new(), None).unwrap();
        prop_assert_eq!(decision.deny_reason(), Some(DenyReason::MissingEntitlement));
    }

    // Resolution is deterministic: same inputs, same decision.
    #[test]
    fn resolution_deterministic(role in non_admin_role(), resource in token(), action in token()) {
        let resolver = PermissionResolver::new();
        let entitlements =
            EntitlementSet::parse_all([format!("{resource}:{action}")]).unwrap();
        let ctx = PermissionContext::new(
            ActorId::new(),
            OrganizationId::new(),
            role,
            ResourceKind::from(resource.as_str()),
            Action::new(&action).unwrap(),
        );

        let first = resolver.resolve(&ctx, &entitlements, None).unwrap();
        let second = resolver.resolve(&ctx, &entitlements, None).unwrap();
        prop_assert_eq!(first, second);
    }

    // Entitlement tokens round-trip through parse and display.
    #[test]
    fn entitlement_round_trip(resource in token(), action in token()) {
        let raw = format!("{resource}:{action}");
        let parsed: ghx_access::Entitlement = raw.parse().unwrap();
        prop_assert_eq!(parsed.token(), raw);
    }
}
