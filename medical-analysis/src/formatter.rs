//! Rendering of the final localized answer.
//!
//! Pure function over `(language, kind, input, results)`; all fixed strings
//! come from [`crate::templates`]. Same paragraph structure in every
//! language: header, echoed input, results or advice, closing disclaimer
//! (plus next steps for the symptoms branch).

use wiki_lookup::{Language, LookupResult};

use crate::templates::{self, ResponseTemplates};
use crate::types::QueryKind;

/// Render the full disclaimer-bearing answer text.
pub fn format_response(
    language: Language,
    kind: QueryKind,
    input: &str,
    results: &[LookupResult],
) -> String {
    let t = templates::for_language(language);

    let mut out = String::new();

    match kind {
        QueryKind::Symptoms => {
            out.push_str(t.symptom_header);
            out.push_str("\n\n");
            out.push_str(t.symptom_input_label);
            out.push(' ');
            out.push_str(input);
            out.push_str("\n\n");
        }
        QueryKind::Question => {
            out.push_str(t.question_header);
            out.push_str("\n\n");
            out.push_str(t.question_input_label);
            out.push(' ');
            out.push_str(input);
            out.push_str("\n\n");
        }
    }

    if results.is_empty() {
        push_advice(&mut out, t, kind, input);
    } else {
        push_results(&mut out, t, kind, results);
    }

    match kind {
        QueryKind::Symptoms => {
            out.push_str(t.symptom_disclaimer);
            out.push_str("\n\n");
            out.push_str(t.next_steps_heading);
            out.push('\n');
            for (i, step) in t.next_steps.iter().enumerate() {
                out.push_str(&format!("{}. {step}", i + 1));
                if i + 1 < t.next_steps.len() {
                    out.push('\n');
                }
            }
        }
        QueryKind::Question => {
            out.push_str(t.question_disclaimer);
        }
    }

    out
}

/// Numbered list of lookup results with optional source lines.
fn push_results(
    out: &mut String,
    t: &ResponseTemplates,
    kind: QueryKind,
    results: &[LookupResult],
) {
    let heading = match kind {
        QueryKind::Symptoms => t.symptom_results_heading,
        QueryKind::Question => t.question_results_heading,
    };
    out.push_str(heading);
    out.push_str("\n\n");

    let url_label = match kind {
        QueryKind::Symptoms => t.learn_more_label,
        QueryKind::Question => t.source_label,
    };

    for (i, result) in results.iter().enumerate() {
        out.push_str(&format!("**{}. {}**\n", i + 1, result.title));
        out.push_str(&result.extract);
        out.push('\n');
        if !result.source_url.is_empty() {
            out.push_str(&format!("{url_label}: {}\n", result.source_url));
        }
        out.push('\n');
    }
}

/// General advice plus topic paragraphs keyed on substrings of the input.
/// The general-advice paragraph doubles as the generic "consult a
/// professional" fallback when no topic matches.
fn push_advice(out: &mut String, t: &ResponseTemplates, kind: QueryKind, input: &str) {
    let lower = input.to_lowercase();

    match kind {
        QueryKind::Symptoms => {
            out.push_str(t.symptom_general_advice);
            out.push_str("\n\n");

            if lower.contains("memory") || lower.contains("forget") {
                out.push_str(t.memory_guidance);
                out.push_str("\n\n");
            }
            if lower.contains("tremor") || lower.contains("shake") {
                out.push_str(t.tremor_guidance);
                out.push_str("\n\n");
            }
            if lower.contains("balance") || lower.contains("walk") {
                out.push_str(t.balance_guidance);
                out.push_str("\n\n");
            }
        }
        QueryKind::Question => {
            out.push_str(t.question_general_advice);
            out.push_str("\n\n");

            if lower.contains("treatment") || lower.contains("cure") {
                out.push_str(t.treatment_guidance);
                out.push_str("\n\n");
            }
            if lower.contains("diagnosis") || lower.contains("diagnose") {
                out.push_str(t.diagnosis_guidance);
                out.push_str("\n\n");
            }
            if lower.contains("prevent") || lower.contains("prevention") {
                out.push_str(t.prevention_guidance);
                out.push_str("\n\n");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str, extract: &str, url: &str) -> LookupResult {
        LookupResult {
            title: title.into(),
            extract: extract.into(),
            source_url: url.into(),
            term: title.to_lowercase(),
        }
    }

    #[test]
    fn symptom_response_with_results_has_numbered_list() {
        let results = vec![
            result(
                "Essential tremor",
                "A movement disorder.",
                "https://en.wikipedia.org/wiki/Essential_tremor",
            ),
            result("Dementia", "A group of brain disorders.", ""),
        ];
        let text = format_response(
            Language::En,
            QueryKind::Symptoms,
            "I have a tremor and memory loss",
            &results,
        );

        assert!(text.contains("**Symptoms Described:** I have a tremor and memory loss"));
        assert!(text.contains("**1. Essential tremor**"));
        assert!(text.contains("**2. Dementia**"));
        assert!(text.contains("Learn more: https://en.wikipedia.org/wiki/Essential_tremor"));
        assert!(text.contains("**Important Medical Disclaimer:**"));
        assert!(text.contains("1. Schedule an appointment"));
    }

    #[test]
    fn entry_without_url_gets_no_source_line() {
        let results = vec![result("Dementia", "A group of brain disorders.", "")];
        let text = format_response(Language::En, QueryKind::Question, "what is dementia", &results);
        assert!(!text.contains("Source:"));
    }

    #[test]
    fn empty_results_keep_disclaimer_and_skip_list() {
        let text = format_response(Language::En, QueryKind::Symptoms, "feeling odd", &[]);
        assert!(text.contains("**General Medical Advice:**"));
        assert!(text.contains("**Important Medical Disclaimer:**"));
        assert!(!text.contains("**Related Medical Conditions Found:**"));
        assert!(!text.contains("**1."));
    }

    #[test]
    fn symptom_topic_guidance_follows_input_phrases() {
        let text = format_response(
            Language::En,
            QueryKind::Symptoms,
            "my hands shake and I forget names",
            &[],
        );
        assert!(text.contains("**Tremors**"));
        assert!(text.contains("**Memory-related symptoms**"));
        assert!(!text.contains("**Balance and walking difficulties**"));
    }

    #[test]
    fn question_topic_guidance_follows_input_phrases() {
        let text = format_response(
            Language::En,
            QueryKind::Question,
            "how is this condition diagnosed and what is the treatment",
            &[],
        );
        assert!(text.contains("**Treatment Information:**"));
        // "diagnosed" contains "diagnose".
        assert!(text.contains("**Diagnosis Information:**"));
        assert!(!text.contains("**Prevention Information:**"));
    }

    #[test]
    fn spanish_templates_apply_regardless_of_results() {
        let empty = format_response(
            Language::Es,
            QueryKind::Question,
            "¿Cuál es el tratamiento para el Parkinson?",
            &[],
        );
        assert!(empty.contains("**Respuesta de Información Médica**"));
        assert!(empty.contains("**Descargo Médico:**"));

        let with = format_response(
            Language::Es,
            QueryKind::Question,
            "¿Cuál es el tratamiento para el Parkinson?",
            &[result("Parkinson", "Enfermedad neurodegenerativa.", "u")],
        );
        assert!(with.contains("**Información Médica Relacionada:**"));
        assert!(with.contains("Fuente: u"));
    }

    #[test]
    fn formatting_is_idempotent() {
        let results = vec![result("Ataxia", "Lack of coordination.", "")];
        let a = format_response(Language::Pt, QueryKind::Symptoms, "ataxia", &results);
        let b = format_response(Language::Pt, QueryKind::Symptoms, "ataxia", &results);
        assert_eq!(a, b);
    }

    #[test]
    fn all_languages_share_structure() {
        for lang in [Language::En, Language::Es, Language::Pt, Language::Fr] {
            let t = crate::templates::for_language(lang);
            let text = format_response(lang, QueryKind::Symptoms, "tremor", &[]);
            assert!(text.contains(t.symptom_header));
            assert!(text.contains(t.symptom_disclaimer));
            assert!(text.contains(t.next_steps_heading));
        }
    }
}
