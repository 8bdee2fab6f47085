use jiff::Timestamp;
use prothex_core::models::labels::{GaitLabel, RiskTier, SkinRisk};
use prothex_core::models::metrics::MetricSet;
use prothex_core::models::profile::ClinicalProfile;
use prothex_core::models::record::MetricRecord;
use prothex_core::models::weekly::WeeklySummary;
use prothex_core::window::TimeWindow;
use prothex_engine::weekly::aggregate;
use uuid::Uuid;

const END: &str = "2025-06-09T00:00:00Z";

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

fn window() -> TimeWindow {
    TimeWindow::trailing_week(ts(END)).unwrap()
}

fn record(
    patient_id: Uuid,
    created_at: &str,
    metrics: MetricSet,
    gait: GaitLabel,
    skin: SkinRisk,
    score: f64,
) -> MetricRecord {
    let created_at = ts(created_at);
    MetricRecord {
        id: Uuid::new_v4(),
        patient_id,
        date: created_at.to_zoned(jiff::tz::TimeZone::UTC).date(),
        metrics,
        gait_abnormality: gait,
        skin_risk: skin,
        prosthetic_health_score: score,
        created_at,
    }
}

fn metrics(symmetry: f64, speed: f64, pressure: f64) -> MetricSet {
    MetricSet::complete(55.0, 95.0, speed, symmetry, 32.0, 55.0, pressure, 9.0)
}

fn previous_summary(patient_id: Uuid, avg_score: f64) -> WeeklySummary {
    let prior = window().previous().unwrap();
    let mut summary = aggregate(
        patient_id,
        &[record(
            patient_id,
            "2025-05-28T10:00:00Z",
            metrics(0.9, 1.0, 0.9),
            GaitLabel::Normal,
            SkinRisk::Low,
            avg_score,
        )],
        &prior,
        None,
        &ClinicalProfile::new(patient_id),
    );
    summary.avg_prosthetic_health_score = avg_score;
    summary
}

#[test]
fn empty_window_yields_no_data_summary() {
    let patient = Uuid::new_v4();
    let summary = aggregate(patient, &[], &window(), None, &ClinicalProfile::new(patient));

    assert_eq!(summary.record_count, 0);
    assert_eq!(summary.averages.avg_gait_symmetry_index, 0.0);
    assert_eq!(summary.averages.avg_walking_speed_mps, 0.0);
    assert_eq!(summary.averages.avg_pressure_distribution_index, 0.0);
    assert_eq!(summary.avg_prosthetic_health_score, 0.0);
    assert_eq!(summary.gait_abnormality, None);
    assert_eq!(summary.skin_risk, None);
    assert_eq!(summary.abnormal_count, 0);
    assert_eq!(summary.high_skin_risk_count, 0);
    assert_eq!(summary.health_score_delta, 0.0);
    assert!(summary.alerts.is_empty());

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["gait_abnormality"], "No Data");
    assert_eq!(json["skin_risk"], "No Data");
}

#[test]
fn empty_window_ignores_previous_summary() {
    let patient = Uuid::new_v4();
    let previous = previous_summary(patient, 70.0);
    let summary = aggregate(
        patient,
        &[],
        &window(),
        Some(&previous),
        &ClinicalProfile::new(patient),
    );
    assert_eq!(summary.health_score_delta, 0.0);
}

#[test]
fn empty_window_risk_comes_from_profile_alone() {
    let patient = Uuid::new_v4();
    let profile = ClinicalProfile {
        bmi: Some(34.0),
        blood_pressure_systolic: Some(150.0),
        ..ClinicalProfile::new(patient)
    };
    let summary = aggregate(patient, &[], &window(), None, &profile);
    assert_eq!(summary.overall_clinical_risk, RiskTier::Moderate);
}

#[test]
fn means_counts_and_latest_labels() {
    let patient = Uuid::new_v4();
    let records = vec![
        record(
            patient,
            "2025-06-02T08:00:00Z",
            metrics(0.6, 0.8, 0.9),
            GaitLabel::Abnormal,
            SkinRisk::High,
            60.0,
        ),
        record(
            patient,
            "2025-06-04T08:00:00Z",
            metrics(0.9, 1.0, 0.9),
            GaitLabel::Normal,
            SkinRisk::Medium,
            80.0,
        ),
        record(
            patient,
            "2025-06-06T08:00:00Z",
            metrics(0.9, 1.2, 0.9),
            GaitLabel::Normal,
            SkinRisk::Low,
            100.0,
        ),
    ];

    let summary = aggregate(patient, &records, &window(), None, &ClinicalProfile::new(patient));

    assert_eq!(summary.record_count, 3);
    assert_eq!(summary.averages.avg_gait_symmetry_index, 0.8);
    assert_eq!(summary.averages.avg_walking_speed_mps, 1.0);
    assert_eq!(summary.avg_prosthetic_health_score, 80.0);
    assert_eq!(summary.abnormal_count, 1);
    assert_eq!(summary.high_skin_risk_count, 1);
    assert_eq!(summary.gait_abnormality, Some(GaitLabel::Normal));
    assert_eq!(summary.skin_risk, Some(SkinRisk::Low));
    assert_eq!(summary.health_score_delta, 0.0);
    assert_eq!(summary.start_date, window().start);
    assert_eq!(summary.end_date, window().end);
}

#[test]
fn means_ignore_input_order_but_labels_follow_the_clock() {
    let patient = Uuid::new_v4();
    let early = record(
        patient,
        "2025-06-03T08:00:00Z",
        metrics(0.7, 0.9, 0.8),
        GaitLabel::Abnormal,
        SkinRisk::Medium,
        64.0,
    );
    let middle = record(
        patient,
        "2025-06-05T08:00:00Z",
        metrics(0.8, 1.1, 0.9),
        GaitLabel::Normal,
        SkinRisk::Low,
        82.0,
    );
    let last = record(
        patient,
        "2025-06-08T08:00:00Z",
        metrics(0.95, 1.3, 0.7),
        GaitLabel::Normal,
        SkinRisk::High,
        90.0,
    );

    let profile = ClinicalProfile::new(patient);
    let forward = aggregate(
        patient,
        &[early.clone(), middle.clone(), last.clone()],
        &window(),
        None,
        &profile,
    );
    let shuffled = aggregate(patient, &[last, early, middle], &window(), None, &profile);

    assert_eq!(forward.averages, shuffled.averages);
    assert_eq!(
        forward.avg_prosthetic_health_score,
        shuffled.avg_prosthetic_health_score
    );
    assert_eq!(forward.skin_risk, Some(SkinRisk::High));
    assert_eq!(shuffled.skin_risk, Some(SkinRisk::High));
    assert_eq!(shuffled.gait_abnormality, Some(GaitLabel::Normal));
}

#[test]
fn delta_against_immediately_preceding_week() {
    let patient = Uuid::new_v4();
    let previous = previous_summary(patient, 70.0);
    let records = vec![
        record(
            patient,
            "2025-06-03T08:00:00Z",
            metrics(0.9, 1.0, 0.9),
            GaitLabel::Normal,
            SkinRisk::Low,
            50.0,
        ),
        record(
            patient,
            "2025-06-05T08:00:00Z",
            metrics(0.9, 1.0, 0.9),
            GaitLabel::Normal,
            SkinRisk::Low,
            60.0,
        ),
    ];

    let summary = aggregate(
        patient,
        &records,
        &window(),
        Some(&previous),
        &ClinicalProfile::new(patient),
    );
    assert_eq!(summary.avg_prosthetic_health_score, 55.0);
    assert_eq!(summary.health_score_delta, -15.0);
}

#[test]
fn delta_ignores_a_non_adjacent_summary() {
    let patient = Uuid::new_v4();
    let two_weeks_back = window().previous().unwrap().previous().unwrap();
    let stale = aggregate(
        patient,
        &[record(
            patient,
            "2025-05-20T08:00:00Z",
            metrics(0.9, 1.0, 0.9),
            GaitLabel::Normal,
            SkinRisk::Low,
            90.0,
        )],
        &two_weeks_back,
        None,
        &ClinicalProfile::new(patient),
    );
    assert_eq!(stale.record_count, 1);

    let summary = aggregate(
        patient,
        &[record(
            patient,
            "2025-06-03T08:00:00Z",
            metrics(0.9, 1.0, 0.9),
            GaitLabel::Normal,
            SkinRisk::Low,
            60.0,
        )],
        &window(),
        Some(&stale),
        &ClinicalProfile::new(patient),
    );
    assert_eq!(summary.health_score_delta, 0.0);
}

#[test]
fn records_outside_window_or_patient_are_ignored() {
    let patient = Uuid::new_v4();
    let other = Uuid::new_v4();
    let records = vec![
        record(
            patient,
            "2025-06-01T00:00:00Z",
            metrics(0.5, 0.5, 0.5),
            GaitLabel::Abnormal,
            SkinRisk::High,
            20.0,
        ),
        record(
            patient,
            END,
            metrics(0.5, 0.5, 0.5),
            GaitLabel::Abnormal,
            SkinRisk::High,
            20.0,
        ),
        record(
            other,
            "2025-06-04T00:00:00Z",
            metrics(0.5, 0.5, 0.5),
            GaitLabel::Abnormal,
            SkinRisk::High,
            20.0,
        ),
        record(
            patient,
            "2025-06-04T00:00:00Z",
            metrics(0.9, 1.0, 0.9),
            GaitLabel::Normal,
            SkinRisk::Low,
            90.0,
        ),
    ];

    let summary = aggregate(patient, &records, &window(), None, &ClinicalProfile::new(patient));
    assert_eq!(summary.record_count, 1);
    assert_eq!(summary.avg_prosthetic_health_score, 90.0);
    assert_eq!(summary.abnormal_count, 0);
}

#[test]
fn risk_uses_averaged_metrics() {
    let patient = Uuid::new_v4();
    // One bad day in an otherwise good week: the single record is abnormal
    // but the weekly average is not.
    let records = vec![
        record(
            patient,
            "2025-06-02T08:00:00Z",
            metrics(0.7, 1.0, 0.55),
            GaitLabel::Abnormal,
            SkinRisk::Low,
            70.0,
        ),
        record(
            patient,
            "2025-06-03T08:00:00Z",
            metrics(0.95, 1.0, 0.95),
            GaitLabel::Normal,
            SkinRisk::Low,
            98.0,
        ),
        record(
            patient,
            "2025-06-04T08:00:00Z",
            metrics(0.95, 1.0, 0.95),
            GaitLabel::Normal,
            SkinRisk::Low,
            98.0,
        ),
    ];

    let summary = aggregate(patient, &records, &window(), None, &ClinicalProfile::new(patient));
    assert_eq!(summary.overall_clinical_risk, RiskTier::Low);
    assert!(summary.alerts.is_empty());
}

#[test]
fn low_average_pressure_raises_weekly_alert() {
    let patient = Uuid::new_v4();
    let records = vec![
        record(
            patient,
            "2025-06-02T08:00:00Z",
            metrics(0.9, 1.0, 0.5),
            GaitLabel::Abnormal,
            SkinRisk::Low,
            80.0,
        ),
        record(
            patient,
            "2025-06-03T08:00:00Z",
            metrics(0.9, 1.0, 0.55),
            GaitLabel::Abnormal,
            SkinRisk::Low,
            82.0,
        ),
    ];

    let summary = aggregate(patient, &records, &window(), None, &ClinicalProfile::new(patient));
    assert_eq!(summary.alerts, vec!["Load Imbalance Detected".to_string()]);
    assert_eq!(summary.overall_clinical_risk, RiskTier::High);
}

#[test]
fn partially_reported_metric_averages_over_reporters() {
    let patient = Uuid::new_v4();
    let with_temperature = MetricSet {
        skin_temperature_c: Some(33.0),
        ..MetricSet::default()
    };
    let records = vec![
        record(
            patient,
            "2025-06-02T08:00:00Z",
            with_temperature,
            GaitLabel::Normal,
            SkinRisk::Low,
            100.0,
        ),
        record(
            patient,
            "2025-06-03T08:00:00Z",
            MetricSet::default(),
            GaitLabel::Normal,
            SkinRisk::Low,
            100.0,
        ),
    ];

    let summary = aggregate(patient, &records, &window(), None, &ClinicalProfile::new(patient));
    assert_eq!(summary.averages.avg_skin_temperature_c, 33.0);
    assert_eq!(summary.averages.avg_gait_symmetry_index, 0.0);
    // Unreported metrics stay missing for the risk rules instead of reading as zero.
    assert_eq!(summary.overall_clinical_risk, RiskTier::Low);
}
