use crate::Scale;
use crate::scoring::{ScaleItem, Severity};

/// PHQ-9: Patient Health Questionnaire, 9 items rated 0–3. Total 0–27.
pub struct Phq9;

impl Scale for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn items(&self) -> &[ScaleItem] {
        static ITEMS: std::sync::LazyLock<Vec<ScaleItem>> = std::sync::LazyLock::new(|| {
            let prompts = [
                ("interes", "Poco interés o placer en hacer las cosas"),
                ("animo", "Sentirse decaído/a, deprimido/a o sin esperanzas"),
                ("sueno", "Problemas para dormir, o dormir demasiado"),
                ("cansancio", "Sentirse cansado/a o con poca energía"),
                ("apetito", "Poco apetito o comer en exceso"),
                (
                    "autoestima",
                    "Sentirse mal consigo mismo/a o sentir que es un fracaso",
                ),
                (
                    "concentracion",
                    "Dificultad para concentrarse en actividades cotidianas",
                ),
                (
                    "agitacion",
                    "Moverse o hablar tan despacio que otros lo notan, o lo contrario: agitación",
                ),
                (
                    "ideacion",
                    "Pensamientos de que estaría mejor muerto/a o de hacerse daño",
                ),
            ];

            prompts
                .iter()
                .map(|(id, prompt)| ScaleItem {
                    id: id.to_string(),
                    prompt: prompt.to_string(),
                    min: 0,
                    max: 3,
                })
                .collect()
        });
        &ITEMS
    }

    fn classify(&self, total: i64) -> Severity {
        match total {
            ..=4 => Severity::Minimal,
            5..=9 => Severity::Mild,
            10..=14 => Severity::Moderate,
            15..=19 => Severity::ModeratelySevere,
            _ => Severity::Severe,
        }
    }
}
