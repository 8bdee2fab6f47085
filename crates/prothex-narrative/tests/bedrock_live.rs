//! Live narrative generation against Bedrock.
//!
//! Requires valid AWS credentials with Bedrock model access in the
//! environment.
//!
//! Run with: `cargo test -p prothex-narrative --test bedrock_live -- --ignored`

use prothex_core::models::profile::ClinicalProfile;
use prothex_core::models::weekly::WeeklyAverages;
use prothex_narrative::bedrock::{BedrockNarrator, DEFAULT_MODEL_ID};
use prothex_narrative::prompt::build_clinical_prompt;
use prothex_narrative::summarize::try_summarize;
use uuid::Uuid;

async fn build_config() -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .load()
        .await
}

#[tokio::test]
#[ignore]
async fn narrates_a_week_of_metrics() {
    let config = build_config().await;
    let narrator = BedrockNarrator::new(&config, DEFAULT_MODEL_ID);

    let averages = WeeklyAverages {
        avg_step_length_cm: 41.0,
        avg_cadence_spm: 82.0,
        avg_walking_speed_mps: 0.62,
        avg_gait_symmetry_index: 0.71,
        avg_pressure_distribution_index: 0.55,
        avg_skin_temperature_c: 34.6,
        avg_skin_moisture: 72.0,
        avg_daily_wear_hours: 13.0,
    };
    let prompt = build_clinical_prompt(&ClinicalProfile::new(Uuid::new_v4()), &averages);

    let text = try_summarize(&narrator, &prompt)
        .await
        .expect("narrative generation failed");
    println!("{text}");
    assert!(!text.is_empty());
}
