// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        audit::ActivityRecorder,
        commands::{
            approvals::ApprovalCommandService, fasilitas::FasilitasCommandService,
            inventaris::InventarisCommandService, pemetaan::PemetaanCommandService,
            sertifikat::SertifikatCommandService, tanah::TanahCommandService,
        },
        ports::{notify::Notifier, time::Clock},
        queries::{
            approvals::ApprovalQueryService, audit::ActivityQueryService,
            fasilitas::FasilitasQueryService, pemetaan::PemetaanQueryService,
            sertifikat::SertifikatQueryService, tanah::TanahQueryService,
        },
    },
    domain::{
        approval::ApprovalRepository, audit::ActivityLogRepository,
        fasilitas::FasilitasRepository, inventaris::InventarisRepository,
        pemetaan::{PemetaanFasilitasRepository, PemetaanTanahRepository},
        sertifikat::SertifikatRepository, tanah::TanahRepository,
    },
};

/// Every repository the application layer needs, bundled so the wiring
/// below stays readable.
pub struct Repositories {
    pub tanah: Arc<dyn TanahRepository>,
    pub sertifikat: Arc<dyn SertifikatRepository>,
    pub approvals: Arc<dyn ApprovalRepository>,
    pub pemetaan_tanah: Arc<dyn PemetaanTanahRepository>,
    pub pemetaan_fasilitas: Arc<dyn PemetaanFasilitasRepository>,
    pub fasilitas: Arc<dyn FasilitasRepository>,
    pub inventaris: Arc<dyn InventarisRepository>,
    pub activity_logs: Arc<dyn ActivityLogRepository>,
}

pub struct ApplicationServices {
    pub approval_commands: Arc<ApprovalCommandService>,
    pub tanah_commands: Arc<TanahCommandService>,
    pub sertifikat_commands: Arc<SertifikatCommandService>,
    pub pemetaan_commands: Arc<PemetaanCommandService>,
    pub fasilitas_commands: Arc<FasilitasCommandService>,
    pub inventaris_commands: Arc<InventarisCommandService>,
    pub approval_queries: Arc<ApprovalQueryService>,
    pub tanah_queries: Arc<TanahQueryService>,
    pub sertifikat_queries: Arc<SertifikatQueryService>,
    pub pemetaan_queries: Arc<PemetaanQueryService>,
    pub fasilitas_queries: Arc<FasilitasQueryService>,
    pub activity_queries: Arc<ActivityQueryService>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, notifier: Arc<dyn Notifier>, clock: Arc<dyn Clock>) -> Self {
        let recorder = Arc::new(ActivityRecorder::new(
            Arc::clone(&repos.activity_logs),
            Arc::clone(&clock),
        ));

        let approval_commands = Arc::new(ApprovalCommandService::new(
            Arc::clone(&repos.approvals),
            Arc::clone(&notifier),
            Arc::clone(&recorder),
            Arc::clone(&clock),
        ));

        let tanah_commands = Arc::new(TanahCommandService::new(
            Arc::clone(&repos.tanah),
            Arc::clone(&repos.approvals),
            Arc::clone(&notifier),
            Arc::clone(&recorder),
            Arc::clone(&clock),
        ));

        let sertifikat_commands = Arc::new(SertifikatCommandService::new(
            Arc::clone(&repos.sertifikat),
            Arc::clone(&repos.tanah),
            Arc::clone(&repos.approvals),
            Arc::clone(&notifier),
            Arc::clone(&recorder),
            Arc::clone(&clock),
        ));

        let pemetaan_commands = Arc::new(PemetaanCommandService::new(
            Arc::clone(&repos.pemetaan_tanah),
            Arc::clone(&repos.pemetaan_fasilitas),
            Arc::clone(&repos.tanah),
            Arc::clone(&recorder),
            Arc::clone(&clock),
        ));

        let fasilitas_commands = Arc::new(FasilitasCommandService::new(
            Arc::clone(&repos.fasilitas),
            Arc::clone(&repos.pemetaan_fasilitas),
            Arc::clone(&recorder),
            Arc::clone(&clock),
        ));

        let inventaris_commands = Arc::new(InventarisCommandService::new(
            Arc::clone(&repos.inventaris),
            Arc::clone(&repos.fasilitas),
            Arc::clone(&recorder),
            Arc::clone(&clock),
        ));

        let approval_queries = Arc::new(ApprovalQueryService::new(Arc::clone(&repos.approvals)));
        let tanah_queries = Arc::new(TanahQueryService::new(Arc::clone(&repos.tanah)));
        let sertifikat_queries =
            Arc::new(SertifikatQueryService::new(Arc::clone(&repos.sertifikat)));
        let pemetaan_queries = Arc::new(PemetaanQueryService::new(
            Arc::clone(&repos.pemetaan_tanah),
            Arc::clone(&repos.pemetaan_fasilitas),
        ));
        let fasilitas_queries = Arc::new(FasilitasQueryService::new(
            Arc::clone(&repos.fasilitas),
            Arc::clone(&repos.inventaris),
        ));
        let activity_queries =
            Arc::new(ActivityQueryService::new(Arc::clone(&repos.activity_logs)));

        Self {
            approval_commands,
            tanah_commands,
            sertifikat_commands,
            pemetaan_commands,
            fasilitas_commands,
            inventaris_commands,
            approval_queries,
            tanah_queries,
            sertifikat_queries,
            pemetaan_queries,
            fasilitas_queries,
            activity_queries,
        }
    }
}
