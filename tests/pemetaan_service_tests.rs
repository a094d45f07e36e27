// tests/pemetaan_service_tests.rs
use serde_json::json;
use uuid::Uuid;

mod support;

use support::builders::{bidgar, jamaah, pemetaan_harness, rectangle_polygon, seed_tanah};
use wakaf_core::application::commands::pemetaan::{
    CreateFasilitasMappingCommand, CreateTanahMappingCommand, UpdateFasilitasMappingCommand,
    UpdateTanahMappingCommand,
};
use wakaf_core::application::error::ApplicationError;
use wakaf_core::domain::audit::AuditAction;
use wakaf_core::domain::errors::DomainError;
use wakaf_core::domain::geo::{GeometryKind, METERS_PER_DEGREE};
use wakaf_core::domain::status::RecordStatus;

fn create_mapping_command(id_tanah: Uuid) -> CreateTanahMappingCommand {
    CreateTanahMappingCommand {
        id_tanah,
        nama_pemetaan: "Blok A".into(),
        jenis_geometri: "POLYGON".into(),
        geometri: rectangle_polygon(),
        keterangan: None,
    }
}

#[tokio::test]
async fn create_measures_the_area_and_reports_the_delta_against_the_parent() {
    let harness = pemetaan_harness();
    let actor = bidgar();
    let declared = 1000.0;
    let tanah = seed_tanah(
        &harness.db,
        actor.id,
        "Sidoarjo",
        declared,
        RecordStatus::Disetujui,
    );

    let created = harness
        .service
        .create_tanah_mapping(&actor, create_mapping_command(tanah.id_tanah.into()))
        .await
        .unwrap();

    let expected_area = 12.0 * METERS_PER_DEGREE * METERS_PER_DEGREE;
    assert!((created.luas_hasil_pemetaan - expected_area).abs() < 1e-3);
    assert!((created.pemetaan.luas_tanah - expected_area).abs() < 1e-3);
    assert_eq!(created.luas_tanah_tercatat, declared);
    assert!((created.selisih_luas - (expected_area - declared)).abs() < 1e-3);
    assert!(
        (created.persentase_selisih - ((expected_area - declared).abs() / declared * 100.0)).abs()
            < 1e-6
    );

    // The raw GeoJSON is what gets stored; WKT only appears on updates.
    assert_eq!(created.pemetaan.geometri_wkt, None);
    assert_eq!(
        serde_json::to_value(&created.pemetaan.geometri).unwrap(),
        rectangle_polygon()
    );

    let entries = harness.audit.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, AuditAction::Create);
    assert_eq!(entries[0].model_type, "pemetaan_tanah");
}

#[tokio::test]
async fn tag_and_geometry_type_must_agree() {
    let harness = pemetaan_harness();
    let actor = bidgar();
    let tanah = seed_tanah(
        &harness.db,
        actor.id,
        "Sidoarjo",
        1000.0,
        RecordStatus::Disetujui,
    );

    let mut command = create_mapping_command(tanah.id_tanah.into());
    command.geometri = json!({ "type": "Point", "coordinates": [112.5, -7.25] });

    let err = harness
        .service
        .create_tanah_mapping(&actor, command)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
    assert!(harness.pemetaan_tanah.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn parcel_mappings_only_accept_polygonal_tags() {
    let harness = pemetaan_harness();
    let actor = bidgar();
    let tanah = seed_tanah(
        &harness.db,
        actor.id,
        "Sidoarjo",
        1000.0,
        RecordStatus::Disetujui,
    );

    let mut command = create_mapping_command(tanah.id_tanah.into());
    command.jenis_geometri = "POINT".into();
    command.geometri = json!({ "type": "Point", "coordinates": [112.5, -7.25] });

    let err = harness
        .service
        .create_tanah_mapping(&actor, command)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn unknown_tags_and_missing_parents_fail_fast() {
    let harness = pemetaan_harness();
    let actor = bidgar();

    let mut command = create_mapping_command(Uuid::new_v4());
    command.jenis_geometri = "TRIANGLE".into();
    let err = harness
        .service
        .create_tanah_mapping(&actor, command)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));

    let err = harness
        .service
        .create_tanah_mapping(&actor, create_mapping_command(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn multipolygon_mappings_store_with_zero_area() {
    let harness = pemetaan_harness();
    let actor = bidgar();
    let tanah = seed_tanah(
        &harness.db,
        actor.id,
        "Sidoarjo",
        1000.0,
        RecordStatus::Disetujui,
    );

    let mut command = create_mapping_command(tanah.id_tanah.into());
    command.jenis_geometri = "MULTIPOLYGON".into();
    command.geometri = json!({
        "type": "MultiPolygon",
        "coordinates": [[[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]]
    });

    let created = harness
        .service
        .create_tanah_mapping(&actor, command)
        .await
        .unwrap();
    assert_eq!(created.luas_hasil_pemetaan, 0.0);
    assert_eq!(created.pemetaan.jenis_geometri, GeometryKind::MultiPolygon);
}

#[tokio::test]
async fn geometry_update_takes_the_wkt_fast_path_without_remeasuring() {
    let harness = pemetaan_harness();
    let actor = bidgar();
    let tanah = seed_tanah(
        &harness.db,
        actor.id,
        "Sidoarjo",
        1000.0,
        RecordStatus::Disetujui,
    );

    let created = harness
        .service
        .create_tanah_mapping(&actor, create_mapping_command(tanah.id_tanah.into()))
        .await
        .unwrap();
    let original_area = created.pemetaan.luas_tanah;

    let updated = harness
        .service
        .update_tanah_mapping(
            &actor,
            UpdateTanahMappingCommand {
                id: created.pemetaan.id_pemetaan_tanah,
                nama_pemetaan: None,
                jenis_geometri: Some("POLYGON".into()),
                geometri: Some(json!({
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [8.0, 0.0], [8.0, 6.0], [0.0, 6.0], [0.0, 0.0]]]
                })),
                keterangan: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(
        updated.geometri_wkt.as_deref(),
        Some("POLYGON((0 0, 8 0, 8 6, 0 6, 0 0))")
    );
    // Twice the footprint, same stored area: update never remeasures.
    assert_eq!(updated.luas_tanah, original_area);

    let entries = harness.audit.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].action, AuditAction::Update);
}

#[tokio::test]
async fn geometry_fields_must_be_supplied_together() {
    let harness = pemetaan_harness();
    let actor = bidgar();
    let tanah = seed_tanah(
        &harness.db,
        actor.id,
        "Sidoarjo",
        1000.0,
        RecordStatus::Disetujui,
    );

    let created = harness
        .service
        .create_tanah_mapping(&actor, create_mapping_command(tanah.id_tanah.into()))
        .await
        .unwrap();

    let err = harness
        .service
        .update_tanah_mapping(
            &actor,
            UpdateTanahMappingCommand {
                id: created.pemetaan.id_pemetaan_tanah,
                nama_pemetaan: None,
                jenis_geometri: None,
                geometri: Some(rectangle_polygon()),
                keterangan: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn multipolygon_updates_are_unsupported_by_the_wkt_path() {
    let harness = pemetaan_harness();
    let actor = bidgar();
    let tanah = seed_tanah(
        &harness.db,
        actor.id,
        "Sidoarjo",
        1000.0,
        RecordStatus::Disetujui,
    );

    let created = harness
        .service
        .create_tanah_mapping(&actor, create_mapping_command(tanah.id_tanah.into()))
        .await
        .unwrap();

    let err = harness
        .service
        .update_tanah_mapping(
            &actor,
            UpdateTanahMappingCommand {
                id: created.pemetaan.id_pemetaan_tanah,
                nama_pemetaan: None,
                jenis_geometri: Some("MULTIPOLYGON".into()),
                geometri: Some(json!({
                    "type": "MultiPolygon",
                    "coordinates": [[[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]]
                })),
                keterangan: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn facility_mappings_accept_points_but_not_multipolygons() {
    let harness = pemetaan_harness();
    let actor = jamaah();
    let tanah = seed_tanah(
        &harness.db,
        actor.id,
        "Sidoarjo",
        1000.0,
        RecordStatus::Disetujui,
    );

    let parent = harness
        .service
        .create_tanah_mapping(&actor, create_mapping_command(tanah.id_tanah.into()))
        .await
        .unwrap();

    let created = harness
        .service
        .create_fasilitas_mapping(
            &actor,
            CreateFasilitasMappingCommand {
                id_pemetaan_tanah: parent.pemetaan.id_pemetaan_tanah,
                nama_fasilitas: "Musholla".into(),
                kategori_fasilitas: Some("Bangunan".into()),
                jenis_geometri: "POINT".into(),
                geometri: json!({ "type": "Point", "coordinates": [112.5, -7.25] }),
                keterangan: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(created.jenis_geometri, GeometryKind::Point);

    let err = harness
        .service
        .create_fasilitas_mapping(
            &actor,
            CreateFasilitasMappingCommand {
                id_pemetaan_tanah: parent.pemetaan.id_pemetaan_tanah,
                nama_fasilitas: "Halaman".into(),
                kategori_fasilitas: None,
                jenis_geometri: "MULTIPOLYGON".into(),
                geometri: json!({
                    "type": "MultiPolygon",
                    "coordinates": [[[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]]
                }),
                keterangan: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn facility_geometry_update_writes_wkt() {
    let harness = pemetaan_harness();
    let actor = bidgar();
    let tanah = seed_tanah(
        &harness.db,
        actor.id,
        "Sidoarjo",
        1000.0,
        RecordStatus::Disetujui,
    );

    let parent = harness
        .service
        .create_tanah_mapping(&actor, create_mapping_command(tanah.id_tanah.into()))
        .await
        .unwrap();
    let fasilitas = harness
        .service
        .create_fasilitas_mapping(
            &actor,
            CreateFasilitasMappingCommand {
                id_pemetaan_tanah: parent.pemetaan.id_pemetaan_tanah,
                nama_fasilitas: "Musholla".into(),
                kategori_fasilitas: None,
                jenis_geometri: "POINT".into(),
                geometri: json!({ "type": "Point", "coordinates": [112.5, -7.25] }),
                keterangan: None,
            },
        )
        .await
        .unwrap();

    let updated = harness
        .service
        .update_fasilitas_mapping(
            &actor,
            UpdateFasilitasMappingCommand {
                id: fasilitas.id_pemetaan_fasilitas,
                nama_fasilitas: None,
                kategori_fasilitas: None,
                jenis_geometri: Some("POINT".into()),
                geometri: Some(json!({ "type": "Point", "coordinates": [112.6, -7.3] })),
                keterangan: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.geometri_wkt.as_deref(), Some("POINT(112.6 -7.3)"));
}
