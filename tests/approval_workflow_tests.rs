// tests/approval_workflow_tests.rs
use serde_json::json;
use uuid::Uuid;

mod support;

use support::builders::{
    bidgar, jamaah, seed_approval, seed_tanah, tanah_draft_value, workflow_harness,
};
use wakaf_core::application::commands::sertifikat::CreateSertifikatCommand;
use wakaf_core::application::commands::tanah::CreateTanahCommand;
use wakaf_core::application::dto::WriteOutcome;
use wakaf_core::application::error::ApplicationError;
use wakaf_core::application::ports::notify::NotificationEvent;
use wakaf_core::domain::approval::{ApprovalId, ApprovalType};
use wakaf_core::domain::errors::DomainError;
use wakaf_core::domain::status::{ApprovalStatus, RecordStatus};
use wakaf_core::domain::tanah::TanahId;

fn create_tanah_command() -> CreateTanahCommand {
    CreateTanahCommand {
        nama_pimpinan_jamaah: "Ahmad".into(),
        nama_wakif: "H. Salim".into(),
        lokasi: "Sidoarjo".into(),
        luas_tanah: 1200.0,
        latitude: None,
        longitude: None,
    }
}

#[tokio::test]
async fn approving_a_tanah_creation_materialises_the_row_and_notifies_the_proposer() {
    let harness = workflow_harness();
    let proposer = jamaah();
    let reviewer = bidgar();

    let outcome = harness
        .tanah
        .create_tanah(&proposer, create_tanah_command())
        .await
        .unwrap();
    let WriteOutcome::PendingApproval { approval } = outcome else {
        panic!("proposer create must be parked for approval");
    };
    assert!(harness.db.tanah.lock().unwrap().is_empty());

    let resolved = harness
        .approvals
        .approve(&reviewer, ApprovalId::new(approval.id))
        .await
        .unwrap();

    assert_eq!(resolved.status, ApprovalStatus::Disetujui);
    assert_eq!(resolved.approver_id, Some(reviewer.id.into()));

    let tanah_map = harness.db.tanah.lock().unwrap();
    let tanah = tanah_map.get(&approval.data_id).expect("tanah row created");
    assert_eq!(tanah.status, RecordStatus::Disetujui);
    assert_eq!(tanah.user_id, proposer.id);
    drop(tanah_map);

    let user_events = harness.notifier.user_events();
    assert_eq!(user_events.len(), 1);
    let (recipient, event) = &user_events[0];
    assert_eq!(*recipient, proposer.id);
    assert!(matches!(event, NotificationEvent::ApprovalApproved { .. }));
}

#[tokio::test]
async fn non_bidgar_roles_are_forbidden_regardless_of_approval_existence() {
    let harness = workflow_harness();
    let ghost = ApprovalId::new(Uuid::new_v4());

    for actor in [jamaah(), support::builders::cabang()] {
        let results = [
            harness.approvals.approve(&actor, ghost).await,
            harness.approvals.reject(&actor, ghost).await,
            harness.approvals.approve_update(&actor, ghost).await,
            harness.approvals.reject_update(&actor, ghost).await,
        ];
        for result in results {
            assert!(matches!(
                result.unwrap_err(),
                ApplicationError::Forbidden(_)
            ));
        }
    }
}

#[tokio::test]
async fn approving_a_missing_approval_is_not_found() {
    let harness = workflow_harness();
    let err = harness
        .approvals
        .approve(&bidgar(), ApprovalId::new(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn update_payload_without_previous_data_is_rejected_without_side_effects() {
    let harness = workflow_harness();
    let proposer = jamaah();
    let tanah = seed_tanah(
        &harness.db,
        proposer.id,
        "Sidoarjo",
        1200.0,
        RecordStatus::Disetujui,
    );

    let approval = seed_approval(
        &harness.db,
        proposer.id,
        ApprovalType::TanahUpdate,
        tanah.id_tanah.into(),
        json!({ "updated_data": { "lokasi": "Gresik" } }),
    );

    let err = harness
        .approvals
        .approve_update(&bidgar(), approval.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));

    let tanah_map = harness.db.tanah.lock().unwrap();
    assert_eq!(tanah_map[&Uuid::from(tanah.id_tanah)].lokasi, "Sidoarjo");
    let approvals = harness.db.approvals.lock().unwrap();
    assert_eq!(
        approvals[&Uuid::from(approval.id)].status,
        ApprovalStatus::Ditinjau
    );
}

#[tokio::test]
async fn rejecting_a_sertifikat_creation_still_materialises_a_ditolak_row() {
    let harness = workflow_harness();
    let proposer = jamaah();
    let reviewer = bidgar();
    let tanah = seed_tanah(
        &harness.db,
        proposer.id,
        "Sidoarjo",
        1200.0,
        RecordStatus::Disetujui,
    );

    let outcome = harness
        .sertifikat
        .create_sertifikat(
            &proposer,
            CreateSertifikatCommand {
                id_tanah: tanah.id_tanah.into(),
                no_dokumen: Some("W.5/011/2024".into()),
                jenis_sertifikat: "AIW".into(),
                dokumen: None,
            },
        )
        .await
        .unwrap();
    let WriteOutcome::PendingApproval { approval } = outcome else {
        panic!("proposer sertifikat create must be parked for approval");
    };

    harness
        .approvals
        .reject(&reviewer, ApprovalId::new(approval.id))
        .await
        .unwrap();

    let sertifikat_map = harness.db.sertifikat.lock().unwrap();
    let sertifikat = sertifikat_map
        .get(&approval.data_id)
        .expect("rejected sertifikat stays on record");
    assert_eq!(sertifikat.status, RecordStatus::Ditolak);
    drop(sertifikat_map);

    let user_events = harness.notifier.user_events();
    assert_eq!(user_events.len(), 1);
    assert!(matches!(
        user_events[0].1,
        NotificationEvent::ApprovalRejected { .. }
    ));
}

#[tokio::test]
async fn a_second_resolution_of_the_same_approval_conflicts() {
    let harness = workflow_harness();
    let proposer = jamaah();
    let reviewer = bidgar();

    let draft_id = TanahId::generate();
    let approval = seed_approval(
        &harness.db,
        proposer.id,
        ApprovalType::Tanah,
        draft_id.into(),
        tanah_draft_value(draft_id, proposer.id),
    );

    harness.approvals.approve(&reviewer, approval.id).await.unwrap();

    let err = harness
        .approvals
        .approve(&reviewer, approval.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));

    let err = harness
        .approvals
        .reject(&reviewer, approval.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));

    let approvals = harness.db.approvals.lock().unwrap();
    assert_eq!(
        approvals[&Uuid::from(approval.id)].status,
        ApprovalStatus::Disetujui
    );
}

#[tokio::test]
async fn racing_resolvers_land_exactly_one_terminal_state() {
    let harness = workflow_harness();
    let proposer = jamaah();

    let draft_id = TanahId::generate();
    let approval = seed_approval(
        &harness.db,
        proposer.id,
        ApprovalType::Tanah,
        draft_id.into(),
        tanah_draft_value(draft_id, proposer.id),
    );

    let service = std::sync::Arc::new(harness.approvals);
    let first = tokio::spawn({
        let service = std::sync::Arc::clone(&service);
        let reviewer = bidgar();
        async move { service.approve(&reviewer, approval.id).await }
    });
    let second = tokio::spawn({
        let service = std::sync::Arc::clone(&service);
        let reviewer = bidgar();
        async move { service.approve(&reviewer, approval.id).await }
    });

    let results = [first.await.unwrap(), second.await.unwrap()];
    let winners = results.iter().filter(|result| result.is_ok()).count();
    assert_eq!(winners, 1);
    for result in results {
        if let Err(err) = result {
            assert!(matches!(
                err,
                ApplicationError::Conflict(_)
                    | ApplicationError::Domain(DomainError::Conflict(_))
            ));
        }
    }

    let approvals = harness.db.approvals.lock().unwrap();
    assert_eq!(
        approvals[&Uuid::from(approval.id)].status,
        ApprovalStatus::Disetujui
    );
    drop(approvals);

    // The winning transaction applied the draft exactly once.
    let tanah_map = harness.db.tanah.lock().unwrap();
    assert_eq!(tanah_map.len(), 1);
    assert_eq!(
        tanah_map[&Uuid::from(draft_id)].status,
        RecordStatus::Disetujui
    );
}

#[tokio::test]
async fn approving_an_update_applies_updated_data_with_forced_disetujui() {
    let harness = workflow_harness();
    let proposer = jamaah();
    let tanah = seed_tanah(
        &harness.db,
        proposer.id,
        "Sidoarjo",
        1200.0,
        RecordStatus::Disetujui,
    );

    let approval = seed_approval(
        &harness.db,
        proposer.id,
        ApprovalType::TanahUpdate,
        tanah.id_tanah.into(),
        json!({
            "previous_data": { "id_tanah": tanah.id_tanah, "lokasi": "Sidoarjo", "status": "disetujui" },
            "updated_data": { "lokasi": "Gresik" },
        }),
    );

    harness
        .approvals
        .approve_update(&bidgar(), approval.id)
        .await
        .unwrap();

    let tanah_map = harness.db.tanah.lock().unwrap();
    let row = &tanah_map[&Uuid::from(tanah.id_tanah)];
    assert_eq!(row.lokasi, "Gresik");
    assert_eq!(row.status, RecordStatus::Disetujui);
}

#[tokio::test]
async fn rejecting_an_update_reapplies_previous_data_and_stamps_disetujui() {
    let harness = workflow_harness();
    let proposer = jamaah();
    let tanah = seed_tanah(
        &harness.db,
        proposer.id,
        "Gresik",
        1200.0,
        RecordStatus::Ditinjau,
    );

    // previous_data carries no status of its own, so the forced stamp is
    // what lands on the row.
    let approval = seed_approval(
        &harness.db,
        proposer.id,
        ApprovalType::TanahUpdate,
        tanah.id_tanah.into(),
        json!({
            "previous_data": { "id_tanah": tanah.id_tanah, "lokasi": "Sidoarjo" },
            "updated_data": { "lokasi": "Lamongan" },
        }),
    );

    harness
        .approvals
        .reject_update(&bidgar(), approval.id)
        .await
        .unwrap();

    let tanah_map = harness.db.tanah.lock().unwrap();
    let row = &tanah_map[&Uuid::from(tanah.id_tanah)];
    assert_eq!(row.lokasi, "Sidoarjo");
    assert_eq!(row.status, RecordStatus::Disetujui);
    drop(tanah_map);

    let approvals = harness.db.approvals.lock().unwrap();
    assert_eq!(
        approvals[&Uuid::from(approval.id)].status,
        ApprovalStatus::Ditolak
    );
}

#[tokio::test]
async fn creation_endpoints_refuse_update_type_approvals() {
    let harness = workflow_harness();
    let proposer = jamaah();
    let tanah = seed_tanah(
        &harness.db,
        proposer.id,
        "Sidoarjo",
        1200.0,
        RecordStatus::Disetujui,
    );

    let approval = seed_approval(
        &harness.db,
        proposer.id,
        ApprovalType::TanahUpdate,
        tanah.id_tanah.into(),
        json!({
            "previous_data": { "id_tanah": tanah.id_tanah },
            "updated_data": { "lokasi": "Gresik" },
        }),
    );

    let err = harness
        .approvals
        .approve(&bidgar(), approval.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let creation = seed_approval(
        &harness.db,
        proposer.id,
        ApprovalType::Tanah,
        Uuid::new_v4(),
        tanah_draft_value(TanahId::generate(), proposer.id),
    );
    let err = harness
        .approvals
        .approve_update(&bidgar(), creation.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn update_approval_for_a_vanished_row_is_not_found_and_stays_pending() {
    let harness = workflow_harness();
    let proposer = jamaah();
    let ghost = TanahId::generate();

    let approval = seed_approval(
        &harness.db,
        proposer.id,
        ApprovalType::TanahUpdate,
        ghost.into(),
        json!({
            "previous_data": { "id_tanah": ghost },
            "updated_data": { "lokasi": "Gresik" },
        }),
    );

    let err = harness
        .approvals
        .approve_update(&bidgar(), approval.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::NotFound(_))
    ));

    // The failed entity write must roll the status flip back.
    let approvals = harness.db.approvals.lock().unwrap();
    assert_eq!(
        approvals[&Uuid::from(approval.id)].status,
        ApprovalStatus::Ditinjau
    );
}
