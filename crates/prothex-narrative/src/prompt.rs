//! Clinical prompt for weekly narrative generation.

use prothex_core::models::profile::ClinicalProfile;
use prothex_core::models::weekly::WeeklyAverages;

/// System prompt establishing the model's clinical role.
pub const SYSTEM_PROMPT: &str = "You are a prosthetic biomechanics specialist.";

const INSTRUCTION: &str = "\
Analyze the patient's prosthetic health based on the above metrics. \
Write strictly 2-3 lines of paragraph summarizing the key gait issues, \
stability, and clinical risks. Do not use bullet points.";

/// Build the user prompt from a profile and a week's averages.
///
/// Missing profile values print as `Unknown` (gender) or `0` (numbers) so the
/// prompt shape never changes.
pub fn build_clinical_prompt(profile: &ClinicalProfile, averages: &WeeklyAverages) -> String {
    let gender = profile.gender.as_deref().unwrap_or("Unknown");
    let bmi = profile.bmi().unwrap_or(0.0);
    let sugar = profile.blood_sugar_mg_dl.unwrap_or(0.0);

    let mut prompt = String::from("Patient Clinical Profile:\n");
    prompt.push_str(&format!("Gender: {gender}\n"));
    prompt.push_str(&format!("BMI: {bmi}\n"));
    prompt.push_str(&format!(
        "Blood Pressure: {}\n",
        profile.blood_pressure_display()
    ));
    prompt.push_str(&format!("Blood Sugar: {sugar} mg/dL\n"));
    if !profile.medical_conditions.is_empty() {
        prompt.push_str(&format!(
            "Medical Conditions: {}\n",
            profile.medical_conditions.join(", ")
        ));
    }

    prompt.push_str("\nBiomechanical Metrics (Weekly Averages):\n");
    prompt.push_str(&format!("Step Length: {:.1} cm\n", averages.avg_step_length_cm));
    prompt.push_str(&format!("Cadence: {:.1} spm\n", averages.avg_cadence_spm));
    prompt.push_str(&format!(
        "Walking Speed: {:.2} m/s\n",
        averages.avg_walking_speed_mps
    ));
    prompt.push_str(&format!(
        "Gait Symmetry: {:.2}\n",
        averages.avg_gait_symmetry_index
    ));
    prompt.push_str(&format!(
        "Pressure Distribution: {:.2}\n",
        averages.avg_pressure_distribution_index
    ));
    prompt.push_str(&format!(
        "Skin Temperature: {:.1} °C\n",
        averages.avg_skin_temperature_c
    ));
    prompt.push_str(&format!("Skin Moisture: {:.1} %\n", averages.avg_skin_moisture));

    prompt.push('\n');
    prompt.push_str(INSTRUCTION);
    prompt
}
