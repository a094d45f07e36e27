// tests/support/builders.rs
use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use wakaf_core::application::audit::ActivityRecorder;
use wakaf_core::application::commands::approvals::ApprovalCommandService;
use wakaf_core::application::commands::pemetaan::PemetaanCommandService;
use wakaf_core::application::commands::sertifikat::SertifikatCommandService;
use wakaf_core::application::commands::tanah::TanahCommandService;
use wakaf_core::application::dto::AuthenticatedUser;
use wakaf_core::application::ports::{notify::Notifier, time::Clock};
use wakaf_core::domain::approval::{Approval, ApprovalId, ApprovalRepository, ApprovalType};
use wakaf_core::domain::audit::ActivityLogRepository;
use wakaf_core::domain::pemetaan::{PemetaanFasilitasRepository, PemetaanTanahRepository};
use wakaf_core::domain::sertifikat::SertifikatRepository;
use wakaf_core::domain::status::{ApprovalStatus, RecordStatus};
use wakaf_core::domain::tanah::{Tanah, TanahId, TanahRepository};
use wakaf_core::domain::user::{Role, UserId};

use super::mocks::{
    CapturingAuditRepo, CapturingNotifier, FixedClock, InMemoryApprovalRepo,
    InMemoryPemetaanFasilitasRepo, InMemoryPemetaanTanahRepo, InMemorySertifikatRepo,
    InMemoryTanahRepo, SharedDb, fixed_now,
};

pub fn bidgar() -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::generate(),
        role: Role::BidgarWakaf,
    }
}

pub fn cabang() -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::generate(),
        role: Role::PimpinanCabang,
    }
}

pub fn jamaah() -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::generate(),
        role: Role::PimpinanJamaah,
    }
}

pub struct WorkflowHarness {
    pub db: Arc<SharedDb>,
    pub audit: Arc<CapturingAuditRepo>,
    pub notifier: Arc<CapturingNotifier>,
    pub approvals: ApprovalCommandService,
    pub tanah: TanahCommandService,
    pub sertifikat: SertifikatCommandService,
}

pub fn workflow_harness() -> WorkflowHarness {
    let db = Arc::new(SharedDb::default());
    let audit = Arc::new(CapturingAuditRepo::default());
    let notifier = Arc::new(CapturingNotifier::default());

    let audit_repo: Arc<dyn ActivityLogRepository> = audit.clone();
    let notifier_port: Arc<dyn Notifier> = notifier.clone();
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let recorder = Arc::new(ActivityRecorder::new(audit_repo, Arc::clone(&clock)));

    let tanah_repo: Arc<dyn TanahRepository> = Arc::new(InMemoryTanahRepo(Arc::clone(&db)));
    let sertifikat_repo: Arc<dyn SertifikatRepository> =
        Arc::new(InMemorySertifikatRepo(Arc::clone(&db)));
    let approval_repo: Arc<dyn ApprovalRepository> =
        Arc::new(InMemoryApprovalRepo(Arc::clone(&db)));

    let approvals = ApprovalCommandService::new(
        Arc::clone(&approval_repo),
        Arc::clone(&notifier_port),
        Arc::clone(&recorder),
        Arc::clone(&clock),
    );
    let tanah = TanahCommandService::new(
        Arc::clone(&tanah_repo),
        Arc::clone(&approval_repo),
        Arc::clone(&notifier_port),
        Arc::clone(&recorder),
        Arc::clone(&clock),
    );
    let sertifikat = SertifikatCommandService::new(
        Arc::clone(&sertifikat_repo),
        Arc::clone(&tanah_repo),
        Arc::clone(&approval_repo),
        Arc::clone(&notifier_port),
        Arc::clone(&recorder),
        Arc::clone(&clock),
    );

    WorkflowHarness {
        db,
        audit,
        notifier,
        approvals,
        tanah,
        sertifikat,
    }
}

pub struct PemetaanHarness {
    pub db: Arc<SharedDb>,
    pub pemetaan_tanah: Arc<InMemoryPemetaanTanahRepo>,
    pub pemetaan_fasilitas: Arc<InMemoryPemetaanFasilitasRepo>,
    pub audit: Arc<CapturingAuditRepo>,
    pub service: PemetaanCommandService,
}

pub fn pemetaan_harness() -> PemetaanHarness {
    let db = Arc::new(SharedDb::default());
    let audit = Arc::new(CapturingAuditRepo::default());
    let pemetaan_tanah = Arc::new(InMemoryPemetaanTanahRepo::default());
    let pemetaan_fasilitas = Arc::new(InMemoryPemetaanFasilitasRepo::default());

    let audit_repo: Arc<dyn ActivityLogRepository> = audit.clone();
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let recorder = Arc::new(ActivityRecorder::new(audit_repo, Arc::clone(&clock)));

    let pemetaan_tanah_repo: Arc<dyn PemetaanTanahRepository> = pemetaan_tanah.clone();
    let pemetaan_fasilitas_repo: Arc<dyn PemetaanFasilitasRepository> =
        pemetaan_fasilitas.clone();
    let tanah_repo: Arc<dyn TanahRepository> = Arc::new(InMemoryTanahRepo(Arc::clone(&db)));

    let service = PemetaanCommandService::new(
        pemetaan_tanah_repo,
        pemetaan_fasilitas_repo,
        tanah_repo,
        recorder,
        clock,
    );

    PemetaanHarness {
        db,
        pemetaan_tanah,
        pemetaan_fasilitas,
        audit,
        service,
    }
}

pub fn seed_tanah(
    db: &SharedDb,
    owner: UserId,
    lokasi: &str,
    luas_tanah: f64,
    status: RecordStatus,
) -> Tanah {
    let tanah = Tanah {
        id_tanah: TanahId::generate(),
        nama_pimpinan_jamaah: "Ahmad".into(),
        nama_wakif: "H. Salim".into(),
        lokasi: lokasi.into(),
        luas_tanah,
        status,
        latitude: None,
        longitude: None,
        user_id: owner,
        created_at: fixed_now(),
        updated_at: fixed_now(),
    };
    db.tanah
        .lock()
        .unwrap()
        .insert(tanah.id_tanah.into(), tanah.clone());
    tanah
}

pub fn seed_approval(
    db: &SharedDb,
    proposer: UserId,
    approval_type: ApprovalType,
    data_id: Uuid,
    data: serde_json::Value,
) -> Approval {
    let approval = Approval {
        id: ApprovalId::new(Uuid::new_v4()),
        user_id: proposer,
        approver_id: None,
        approval_type,
        data_id,
        data,
        status: ApprovalStatus::Ditinjau,
        created_at: fixed_now(),
        updated_at: fixed_now(),
    };
    db.approvals
        .lock()
        .unwrap()
        .insert(approval.id.into(), approval.clone());
    approval
}

pub fn tanah_draft_value(id_tanah: TanahId, owner: UserId) -> serde_json::Value {
    json!({
        "id_tanah": id_tanah,
        "nama_pimpinan_jamaah": "Ahmad",
        "nama_wakif": "H. Salim",
        "lokasi": "Sidoarjo",
        "luas_tanah": 1200.0,
        "user_id": owner,
    })
}

pub fn rectangle_polygon() -> serde_json::Value {
    json!({
        "type": "Polygon",
        "coordinates": [[[0.0, 0.0], [4.0, 0.0], [4.0, 3.0], [0.0, 3.0], [0.0, 0.0]]]
    })
}
