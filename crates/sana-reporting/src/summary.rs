use sana_core::models::appointment::AppointmentStatus;
use sana_scales::get_scale;

use crate::bundle::{MoodStats, ScaleOutcome, SummaryBundle};

/// Render the clinical summary narrative.
///
/// Deterministic: the same bundle always yields the same text. Each section
/// appears only when its source data is present; the closing
/// recommendations and the disclaimer always do.
pub fn compose_summary(bundle: &SummaryBundle) -> String {
    let mut out = String::new();

    out.push_str(&format!("Resumen clínico de {}.", bundle.patient_name));
    if let Some(therapist) = &bundle.therapist_name {
        out.push_str(&format!(" Terapeuta responsable: {therapist}."));
    }

    let outcomes: Vec<&ScaleOutcome> = [bundle.phq9.as_ref(), bundle.gad7.as_ref()]
        .into_iter()
        .flatten()
        .collect();
    if !outcomes.is_empty() {
        out.push_str("\n\nResultados de escalas:\n");
        for outcome in outcomes {
            out.push_str(&format!(
                "- {}: puntuación total {}, severidad {}.\n",
                scale_display_name(&outcome.scale_id),
                outcome.total,
                severity_label(outcome),
            ));
        }
    }

    if let Some(mood) = &bundle.mood {
        out.push_str(&format!(
            "\n\nEstado de ánimo: {} registros, valencia media {:.1} ({}).",
            mood.count,
            mood.mean_valence,
            mood_tag(mood),
        ));
    }

    if !bundle.sessions.is_empty() {
        let total = bundle.sessions.len();
        let completed = count_status(bundle, AppointmentStatus::Completed);
        let cancelled = count_status(bundle, AppointmentStatus::Cancelled);
        let judgment = if completed == 0 {
            "muy baja"
        } else if cancelled > completed {
            "irregular"
        } else {
            "aceptable"
        };
        out.push_str(&format!(
            "\n\nAsistencia a sesiones: {total} programadas, {completed} completadas, \
             {cancelled} canceladas. Adherencia {judgment}.",
        ));
    }

    if !bundle.incidents.is_empty() {
        let total = bundle.incidents.len();
        let open = bundle.incidents.iter().filter(|i| i.open).count();
        out.push_str(&format!(
            "\n\nIncidencias clínicas: {total} en total, {open} abiertas."
        ));
        if bundle.incidents.iter().any(|i| i.severity.is_high_risk()) {
            out.push_str(" Se registra al menos una incidencia de alto riesgo.");
        }
    }

    out.push_str(
        "\n\nRecomendaciones: mantener la pauta terapéutica acordada y revisar este \
         resumen con el paciente en la próxima sesión.",
    );
    out.push_str(
        "\n\nEste resumen se genera automáticamente a partir de los datos registrados \
         y no sustituye el juicio clínico profesional.",
    );

    out
}

fn scale_display_name(scale_id: &str) -> String {
    match get_scale(scale_id) {
        Some(scale) => scale.name().to_string(),
        None => scale_id.to_string(),
    }
}

/// The persisted label when one was supplied; otherwise the scale's own
/// breakpoint classification, so persisted and recomputed labels can never
/// diverge within one summary.
fn severity_label(outcome: &ScaleOutcome) -> String {
    if let Some(label) = &outcome.severity_label {
        return label.clone();
    }
    match get_scale(&outcome.scale_id) {
        Some(scale) => scale.classify(outcome.total).label().to_string(),
        None => "no clasificada".to_string(),
    }
}

fn mood_tag(mood: &MoodStats) -> &'static str {
    if mood.mean_valence >= 4.0 {
        "positivo y estable"
    } else if mood.mean_valence <= 2.0 {
        "bajo y desfavorable"
    } else {
        "neutro y moderado"
    }
}

fn count_status(bundle: &SummaryBundle, status: AppointmentStatus) -> usize {
    bundle
        .sessions
        .iter()
        .filter(|s| s.status == status)
        .count()
}
