//! Fixed keyword tables driving term extraction.
//!
//! All tables are process-wide read-only constants; the extractor is the only
//! consumer. Terms are stored lowercase because matching happens against the
//! lowercased input.

/// Neurological condition names matched against symptom descriptions.
pub const NEUROLOGICAL_TERMS: &[&str] = &[
    "memory loss",
    "tremor",
    "alzheimer",
    "parkinson",
    "multiple sclerosis",
    "als",
    "huntington",
    "dementia",
    "seizure",
    "stroke",
    "migraine",
    "neuropathy",
    "dystonia",
    "ataxia",
    "aphasia",
    "dysarthria",
];

/// Secondary symptom heuristics: when no condition name matched, any trigger
/// word on the left adds the condition pair on the right.
pub const SYMPTOM_HINTS: &[(&[&str], &[&str])] = &[
    (&["memory", "forget"], &["dementia", "alzheimer disease"]),
    (&["shake", "tremor"], &["parkinson disease", "essential tremor"]),
    (&["walk", "balance"], &["gait disorder", "ataxia"]),
    (&["speech", "talk"], &["aphasia", "dysarthria"]),
];

/// Last-resort symptom terms.
pub const SYMPTOM_FALLBACK: &[&str] = &["neurodegenerative disease", "neurological disorder"];

/// General medical condition names matched against questions.
pub const MEDICAL_CONDITIONS: &[&str] = &[
    "diabetes",
    "hypertension",
    "cancer",
    "heart disease",
    "stroke",
    "alzheimer",
    "parkinson",
    "multiple sclerosis",
    "arthritis",
    "asthma",
    "copd",
    "depression",
    "anxiety",
    "migraine",
    "epilepsy",
    "obesity",
    "osteoporosis",
    "thyroid",
    "kidney disease",
    "liver disease",
    "pneumonia",
    "tuberculosis",
    "hepatitis",
    "hiv",
    "aids",
    "lupus",
    "fibromyalgia",
    "crohn",
    "ulcerative colitis",
    "celiac",
    "autism",
    "adhd",
    "schizophrenia",
    "bipolar",
    "dementia",
    "als",
    "huntington",
    "muscular dystrophy",
    "cerebral palsy",
];

/// Trigger words marking a treatment-oriented question.
pub const TREATMENT_TRIGGERS: &[&str] = &[
    "treatment",
    "treat",
    "cure",
    "therapy",
    "medication",
    "medicine",
    "drug",
    "surgery",
    "operation",
];

/// Trigger words marking a prevention-oriented question.
pub const PREVENTION_TRIGGERS: &[&str] = &["prevent", "prevention", "avoid", "reduce risk"];

/// Trigger phrases marking a symptoms-oriented question.
pub const SYMPTOM_QUESTION_TRIGGERS: &[&str] =
    &["symptom", "sign", "what are the", "how do you know"];

/// General medical keyword phrases, tried when no condition name matched.
pub const MEDICAL_KEYWORDS: &[&str] = &[
    "blood pressure",
    "blood sugar",
    "cholesterol",
    "heart rate",
    "blood test",
    "vaccination",
    "immunization",
    "antibiotic",
    "virus",
    "bacteria",
    "infection",
    "inflammation",
    "immune system",
    "metabolism",
    "hormone",
    "insulin",
    "thyroid",
    "vitamin",
    "mineral",
    "nutrition",
    "diet",
    "exercise",
    "sleep",
    "stress",
    "mental health",
    "physical therapy",
    "rehabilitation",
    "diagnosis",
    "prognosis",
];

/// Filler words excluded from the free-word fallback split.
pub const QUESTION_STOP_WORDS: &[&str] = &[
    "what",
    "when",
    "where",
    "which",
    "should",
    "could",
    "would",
    "about",
    "treatment",
    "symptom",
    "condition",
    "disease",
];

/// Last-resort question terms.
pub const QUESTION_FALLBACK: &[&str] = &["general medicine", "health information"];
