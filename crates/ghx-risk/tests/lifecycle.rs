//! Risk lifecycle flows across the crate's public surface.

use ghx_risk::{
    classify, Risk, RiskAssessment, RiskBand, RiskCategory, RiskError, RiskRating, RiskStatus,
};
use ghx_types::{ActorId, OrganizationId, ProjectId};

#[test]
fn full_lifecycle() {
    let owner = ActorId::new();
    let mut risk = Risk::new(
        OrganizationId::new(),
        ProjectId::new(),
        RiskCategory::Technical,
        "led wall controller firmware unproven at this scale",
        RiskAssessment::new(RiskRating::High, RiskRating::High),
    )
    .with_owner(owner);

    assert_eq!(risk.score, 16);
    assert_eq!(risk.band, RiskBand::High);

    risk.advance(RiskStatus::Assessed, Some(owner), None).unwrap();

    // Mitigation work lowers the assessed probability.
    risk.reassess(RiskAssessment::new(RiskRating::Low, RiskRating::High));
    assert_eq!(risk.score, 8);
    assert_eq!(risk.band, RiskBand::Medium);

    risk.advance(
        RiskStatus::Mitigated,
        Some(owner),
        Some("fallback controller on site".to_string()),
    )
    .unwrap();
    risk.advance(RiskStatus::Closed, Some(owner), None).unwrap();

    assert!(risk.is_closed());
    assert_eq!(risk.history.len(), 3);
    assert!(risk
        .history
        .windows(2)
        .all(|pair| pair[0].to == pair[1].from));
}

#[test]
fn closed_risk_rejects_any_move() {
    let mut risk = Risk::new(
        OrganizationId::new(),
        ProjectId::new(),
        RiskCategory::Legal,
        "venue license renewal pending",
        RiskAssessment::new(RiskRating::Low, RiskRating::VeryHigh),
    );
    risk.advance(RiskStatus::Closed, None, None).unwrap();

    for status in RiskStatus::ALL {
        let result = risk.advance(status, None, None);
        assert!(matches!(
            result,
            Err(RiskError::InvalidTransition { from: RiskStatus::Closed, .. })
        ));
    }
}

#[test]
fn every_rating_pair_bands_consistently() {
    for p in RiskRating::ALL {
        for i in RiskRating::ALL {
            let risk = Risk::new(
                OrganizationId::new(),
                ProjectId::new(),
                RiskCategory::Operational,
                "matrix sweep",
                RiskAssessment::new(p, i),
            );
            assert_eq!(risk.score, p.weight() * i.weight());
            assert_eq!(risk.band, classify(risk.score));
        }
    }
}

#[test]
fn serde_round_trip_preserves_derived_fields() {
    let risk = Risk::new(
        OrganizationId::new(),
        ProjectId::new(),
        RiskCategory::Environmental,
        "outdoor stage exposed to storm season",
        RiskAssessment::new(RiskRating::Medium, RiskRating::VeryHigh),
    );

    let json = serde_json::to_string(&risk).unwrap();
    let back: Risk = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, risk.id);
    assert_eq!(back.score, 15);
    assert_eq!(back.band, RiskBand::High);
    assert_eq!(back.status, RiskStatus::Identified);
}
