use crate::Scale;
use crate::scoring::{ScaleItem, Severity};

/// GAD-7: Generalized Anxiety Disorder scale, 7 items rated 0–3. Total 0–21.
pub struct Gad7;

impl Scale for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn items(&self) -> &[ScaleItem] {
        static ITEMS: std::sync::LazyLock<Vec<ScaleItem>> = std::sync::LazyLock::new(|| {
            let prompts = [
                ("nerviosismo", "Sentirse nervioso/a, ansioso/a o al límite"),
                (
                    "control",
                    "No poder dejar de preocuparse o controlar la preocupación",
                ),
                (
                    "preocupacion",
                    "Preocuparse demasiado por cosas diferentes",
                ),
                ("relajacion", "Dificultad para relajarse"),
                (
                    "inquietud",
                    "Estar tan inquieto/a que es difícil permanecer sentado/a",
                ),
                ("irritabilidad", "Molestarse o irritarse con facilidad"),
                (
                    "miedo",
                    "Sentir miedo como si algo terrible fuera a pasar",
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
            _ => Severity::Severe,
        }
    }
}
