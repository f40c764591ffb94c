//! Per-language response template tables.
//!
//! One [`ResponseTemplates`] instance per supported language, all sharing the
//! exact same structure so the formatter stays a single data-driven function.
//! Wording follows the product's original copy; the structure is what the
//! formatter guarantees.

use wiki_lookup::Language;

/// Fixed strings for one language.
///
/// Guidance paragraphs end without trailing newlines; the formatter owns all
/// paragraph separators.
pub struct ResponseTemplates {
    // Headers and input echo labels.
    pub symptom_header: &'static str,
    pub symptom_input_label: &'static str,
    pub question_header: &'static str,
    pub question_input_label: &'static str,

    // Results section.
    pub symptom_results_heading: &'static str,
    pub question_results_heading: &'static str,
    pub learn_more_label: &'static str,
    pub source_label: &'static str,

    // Empty-results advice.
    pub symptom_general_advice: &'static str,
    pub question_general_advice: &'static str,
    pub memory_guidance: &'static str,
    pub tremor_guidance: &'static str,
    pub balance_guidance: &'static str,
    pub treatment_guidance: &'static str,
    pub diagnosis_guidance: &'static str,
    pub prevention_guidance: &'static str,

    // Closing blocks.
    pub symptom_disclaimer: &'static str,
    pub next_steps_heading: &'static str,
    pub next_steps: [&'static str; 4],
    pub question_disclaimer: &'static str,

    // Handler-level static messages.
    pub invalid_input: &'static str,
    pub technical_difficulties: &'static str,
}

/// Template table for a language.
pub fn for_language(language: Language) -> &'static ResponseTemplates {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
        Language::Pt => &PT,
        Language::Fr => &FR,
    }
}

static EN: ResponseTemplates = ResponseTemplates {
    symptom_header: "**Medical Information Based on Your Symptoms**",
    symptom_input_label: "**Symptoms Described:**",
    question_header: "**Medical Information Response**",
    question_input_label: "**Your Question:**",

    symptom_results_heading: "**Related Medical Conditions Found:**",
    question_results_heading: "**Related Medical Information:**",
    learn_more_label: "Learn more",
    source_label: "Source",

    symptom_general_advice: "**General Medical Advice:**\nBased on your symptoms, it's important to consult with a healthcare professional for proper evaluation. Neurological symptoms can have various causes and require professional assessment.",
    question_general_advice: "**General Medical Information:**\nFor accurate medical information, I recommend consulting with healthcare professionals or reliable medical sources. Medical questions often require personalized assessment by qualified practitioners.",
    memory_guidance: "**Memory-related symptoms** may be associated with various conditions including stress, depression, medication effects, or neurological conditions. A comprehensive evaluation by a healthcare provider is essential.",
    tremor_guidance: "**Tremors** can have many causes including essential tremor, Parkinson's disease, medication effects, or other conditions. A neurologist can help determine the cause.",
    balance_guidance: "**Balance and walking difficulties** should be evaluated promptly, especially if they developed suddenly. These may require immediate medical attention.",
    treatment_guidance: "**Treatment Information:** Medical treatments vary greatly depending on the specific condition, severity, and individual patient factors. Only qualified healthcare providers can prescribe appropriate treatments.",
    diagnosis_guidance: "**Diagnosis Information:** Medical diagnosis requires professional evaluation, often including physical examination, medical history, and appropriate tests. Self-diagnosis can be dangerous.",
    prevention_guidance: "**Prevention Information:** Many conditions can be prevented or their risk reduced through healthy lifestyle choices, regular check-ups, and following medical advice.",

    symptom_disclaimer: "**Important Medical Disclaimer:**\nThis information is for educational purposes only and should NOT replace professional medical diagnosis. Please consult with healthcare professionals, especially neurologists or specialists, for accurate diagnosis and treatment.",
    next_steps_heading: "**Recommended Next Steps:**",
    next_steps: [
        "Schedule an appointment with your primary care physician",
        "Consider consulting a neurologist if symptoms persist",
        "Keep a symptom diary to track changes",
        "Discuss any concerns with qualified medical professionals",
    ],
    question_disclaimer: "**Medical Disclaimer:**\nThis information is educational only. Always consult healthcare professionals for medical advice, diagnosis, or treatment decisions.",

    invalid_input: "Please enter a symptom description or a medical question to analyze.",
    technical_difficulties: "**Medical Information**\n\nI'm currently experiencing technical difficulties accessing external medical databases. However, I can still provide general guidance:\n\n**Important:** For any health concerns, please consult with healthcare professionals immediately. They can provide proper diagnosis and treatment.\n\n**General Medical Advice:**\n- Contact your primary care physician for evaluation\n- If symptoms are severe or sudden, seek immediate medical attention\n- Keep track of your symptoms to discuss with healthcare providers\n- Don't delay seeking professional medical care\n\n**Medical Disclaimer:** This tool is for educational purposes only and should never replace professional medical advice, diagnosis, or treatment.",
};

static ES: ResponseTemplates = ResponseTemplates {
    symptom_header: "**Información Médica Basada en Sus Síntomas**",
    symptom_input_label: "**Síntomas Descritos:**",
    question_header: "**Respuesta de Información Médica**",
    question_input_label: "**Su Pregunta:**",

    symptom_results_heading: "**Condiciones Médicas Relacionadas Encontradas:**",
    question_results_heading: "**Información Médica Relacionada:**",
    learn_more_label: "Más información",
    source_label: "Fuente",

    symptom_general_advice: "**Consejo Médico General:**\nBasado en sus síntomas, es importante consultar con un profesional de la salud para una evaluación adecuada. Los síntomas neurológicos pueden tener varias causas y requieren evaluación profesional.",
    question_general_advice: "**Información Médica General:**\nPara información médica precisa, recomiendo consultar con profesionales de la salud o fuentes médicas confiables. Las preguntas médicas a menudo requieren evaluación personalizada por profesionales calificados.",
    memory_guidance: "**Los síntomas relacionados con la memoria** pueden asociarse a diversas condiciones, incluyendo estrés, depresión, efectos de medicamentos o condiciones neurológicas. Es esencial una evaluación integral por un profesional de la salud.",
    tremor_guidance: "**Los temblores** pueden tener muchas causas, incluyendo temblor esencial, enfermedad de Parkinson, efectos de medicamentos u otras condiciones. Un neurólogo puede ayudar a determinar la causa.",
    balance_guidance: "**Las dificultades de equilibrio y marcha** deben evaluarse con prontitud, especialmente si aparecieron de forma repentina. Pueden requerir atención médica inmediata.",
    treatment_guidance: "**Información sobre Tratamientos:** Los tratamientos médicos varían mucho según la condición específica, su gravedad y los factores individuales del paciente. Solo los profesionales de la salud calificados pueden prescribir tratamientos apropiados.",
    diagnosis_guidance: "**Información sobre Diagnóstico:** El diagnóstico médico requiere evaluación profesional, a menudo incluyendo examen físico, historia clínica y pruebas apropiadas. El autodiagnóstico puede ser peligroso.",
    prevention_guidance: "**Información sobre Prevención:** Muchas condiciones pueden prevenirse o reducir su riesgo mediante hábitos de vida saludables, controles regulares y el seguimiento de las indicaciones médicas.",

    symptom_disclaimer: "**Descargo Médico Importante:**\nEsta información es solo para fines educativos y NO debe reemplazar el diagnóstico médico profesional. Consulte con profesionales de la salud, especialmente neurólogos o especialistas, para un diagnóstico y tratamiento precisos.",
    next_steps_heading: "**Próximos Pasos Recomendados:**",
    next_steps: [
        "Programe una cita con su médico de atención primaria",
        "Considere consultar a un neurólogo si los síntomas persisten",
        "Mantenga un diario de síntomas para hacer seguimiento",
        "Discuta cualquier preocupación con profesionales médicos calificados",
    ],
    question_disclaimer: "**Descargo Médico:**\nEsta información es solo educativa. Siempre consulte a profesionales de la salud para consejos médicos, diagnóstico o decisiones de tratamiento.",

    invalid_input: "Por favor ingrese una descripción de síntomas o una pregunta médica para analizar.",
    technical_difficulties: "**Información Médica**\n\nActualmente tengo dificultades técnicas para acceder a las bases de datos médicas externas. Sin embargo, aún puedo ofrecer orientación general:\n\n**Importante:** Para cualquier problema de salud, consulte de inmediato con profesionales de la salud. Ellos pueden proporcionar un diagnóstico y tratamiento adecuados.\n\n**Consejo Médico General:**\n- Contacte a su médico de atención primaria para una evaluación\n- Si los síntomas son graves o repentinos, busque atención médica inmediata\n- Registre sus síntomas para discutirlos con los profesionales de la salud\n- No retrase la búsqueda de atención médica profesional\n\n**Descargo Médico:** Esta herramienta es solo para fines educativos y nunca debe reemplazar el consejo, diagnóstico o tratamiento médico profesional.",
};

static PT: ResponseTemplates = ResponseTemplates {
    symptom_header: "**Informações Médicas Baseadas em Seus Sintomas**",
    symptom_input_label: "**Sintomas Descritos:**",
    question_header: "**Resposta de Informações Médicas**",
    question_input_label: "**Sua Pergunta:**",

    symptom_results_heading: "**Condições Médicas Relacionadas Encontradas:**",
    question_results_heading: "**Informações Médicas Relacionadas:**",
    learn_more_label: "Saiba mais",
    source_label: "Fonte",

    symptom_general_advice: "**Conselho Médico Geral:**\nCom base em seus sintomas, é importante consultar um profissional de saúde para avaliação adequada. Sintomas neurológicos podem ter várias causas e requerem avaliação profissional.",
    question_general_advice: "**Informações Médicas Gerais:**\nPara informações médicas precisas, recomendo consultar profissionais de saúde ou fontes médicas confiáveis. Perguntas médicas frequentemente requerem avaliação personalizada por profissionais qualificados.",
    memory_guidance: "**Sintomas relacionados à memória** podem estar associados a várias condições, incluindo estresse, depressão, efeitos de medicamentos ou condições neurológicas. Uma avaliação abrangente por um profissional de saúde é essencial.",
    tremor_guidance: "**Tremores** podem ter muitas causas, incluindo tremor essencial, doença de Parkinson, efeitos de medicamentos ou outras condições. Um neurologista pode ajudar a determinar a causa.",
    balance_guidance: "**Dificuldades de equilíbrio e marcha** devem ser avaliadas prontamente, especialmente se surgiram de repente. Podem exigir atenção médica imediata.",
    treatment_guidance: "**Informações sobre Tratamento:** Os tratamentos médicos variam muito dependendo da condição específica, gravidade e fatores individuais do paciente. Apenas profissionais de saúde qualificados podem prescrever tratamentos apropriados.",
    diagnosis_guidance: "**Informações sobre Diagnóstico:** O diagnóstico médico requer avaliação profissional, frequentemente incluindo exame físico, histórico médico e testes apropriados. O autodiagnóstico pode ser perigoso.",
    prevention_guidance: "**Informações sobre Prevenção:** Muitas condições podem ser prevenidas ou ter seu risco reduzido por meio de hábitos de vida saudáveis, exames regulares e seguindo as orientações médicas.",

    symptom_disclaimer: "**Aviso Médico Importante:**\nEsta informação é apenas para fins educacionais e NÃO deve substituir o diagnóstico médico profissional. Consulte profissionais de saúde, especialmente neurologistas ou especialistas, para diagnóstico e tratamento precisos.",
    next_steps_heading: "**Próximos Passos Recomendados:**",
    next_steps: [
        "Agende uma consulta com seu médico de cuidados primários",
        "Considere consultar um neurologista se os sintomas persistirem",
        "Mantenha um diário de sintomas para acompanhar mudanças",
        "Discuta quaisquer preocupações com profissionais médicos qualificados",
    ],
    question_disclaimer: "**Aviso Médico:**\nEsta informação é apenas educacional. Sempre consulte profissionais de saúde para conselhos médicos, diagnóstico ou decisões de tratamento.",

    invalid_input: "Por favor, insira uma descrição de sintomas ou uma pergunta médica para análise.",
    technical_difficulties: "**Informações Médicas**\n\nNo momento estou com dificuldades técnicas para acessar as bases de dados médicas externas. No entanto, ainda posso fornecer orientação geral:\n\n**Importante:** Para qualquer problema de saúde, consulte profissionais de saúde imediatamente. Eles podem fornecer diagnóstico e tratamento adequados.\n\n**Conselho Médico Geral:**\n- Contate seu médico de cuidados primários para avaliação\n- Se os sintomas forem graves ou repentinos, procure atendimento médico imediato\n- Registre seus sintomas para discutir com os profissionais de saúde\n- Não adie a busca por cuidados médicos profissionais\n\n**Aviso Médico:** Esta ferramenta é apenas para fins educacionais e nunca deve substituir aconselhamento, diagnóstico ou tratamento médico profissional.",
};

static FR: ResponseTemplates = ResponseTemplates {
    symptom_header: "**Informations Médicales Basées sur Vos Symptômes**",
    symptom_input_label: "**Symptômes Décrits:**",
    question_header: "**Réponse d'Informations Médicales**",
    question_input_label: "**Votre Question:**",

    symptom_results_heading: "**Conditions Médicales Connexes Trouvées:**",
    question_results_heading: "**Informations Médicales Connexes:**",
    learn_more_label: "En savoir plus",
    source_label: "Source",

    symptom_general_advice: "**Conseil Médical Général:**\nBasé sur vos symptômes, il est important de consulter un professionnel de la santé pour une évaluation appropriée. Les symptômes neurologiques peuvent avoir diverses causes et nécessitent une évaluation professionnelle.",
    question_general_advice: "**Informations Médicales Générales:**\nPour des informations médicales précises, je recommande de consulter des professionnels de la santé ou des sources médicales fiables. Les questions médicales nécessitent souvent une évaluation personnalisée par des praticiens qualifiés.",
    memory_guidance: "**Les symptômes liés à la mémoire** peuvent être associés à diverses conditions, notamment le stress, la dépression, les effets de médicaments ou des conditions neurologiques. Une évaluation complète par un professionnel de la santé est essentielle.",
    tremor_guidance: "**Les tremblements** peuvent avoir de nombreuses causes, notamment le tremblement essentiel, la maladie de Parkinson, les effets de médicaments ou d'autres conditions. Un neurologue peut aider à en déterminer la cause.",
    balance_guidance: "**Les difficultés d'équilibre et de marche** doivent être évaluées rapidement, surtout si elles sont apparues soudainement. Elles peuvent nécessiter une attention médicale immédiate.",
    treatment_guidance: "**Informations sur les Traitements:** Les traitements médicaux varient considérablement selon la condition spécifique, sa gravité et les facteurs individuels du patient. Seuls des professionnels de la santé qualifiés peuvent prescrire des traitements appropriés.",
    diagnosis_guidance: "**Informations sur le Diagnostic:** Le diagnostic médical nécessite une évaluation professionnelle, comprenant souvent un examen physique, les antécédents médicaux et des tests appropriés. L'autodiagnostic peut être dangereux.",
    prevention_guidance: "**Informations sur la Prévention:** De nombreuses conditions peuvent être prévenues ou leur risque réduit grâce à de bonnes habitudes de vie, des contrôles réguliers et le respect des conseils médicaux.",

    symptom_disclaimer: "**Avertissement Médical Important:**\nCette information est à des fins éducatives uniquement et ne doit PAS remplacer le diagnostic médical professionnel. Consultez des professionnels de la santé, en particulier des neurologues ou spécialistes, pour un diagnostic et traitement précis.",
    next_steps_heading: "**Prochaines Étapes Recommandées:**",
    next_steps: [
        "Programmez un rendez-vous avec votre médecin de soins primaires",
        "Considérez consulter un neurologue si les symptômes persistent",
        "Tenez un journal des symptômes pour suivre les changements",
        "Discutez de toute préoccupation avec des professionnels médicaux qualifiés",
    ],
    question_disclaimer: "**Avertissement Médical:**\nCette information est éducative uniquement. Consultez toujours des professionnels de la santé pour des conseils médicaux, diagnostic ou décisions de traitement.",

    invalid_input: "Veuillez saisir une description de symptômes ou une question médicale à analyser.",
    technical_difficulties: "**Informations Médicales**\n\nJe rencontre actuellement des difficultés techniques pour accéder aux bases de données médicales externes. Je peux cependant fournir des conseils généraux:\n\n**Important:** Pour tout problème de santé, consultez immédiatement des professionnels de la santé. Ils peuvent fournir un diagnostic et un traitement appropriés.\n\n**Conseil Médical Général:**\n- Contactez votre médecin de soins primaires pour une évaluation\n- Si les symptômes sont graves ou soudains, consultez immédiatement un médecin\n- Notez vos symptômes pour en discuter avec les professionnels de la santé\n- Ne retardez pas la recherche de soins médicaux professionnels\n\n**Avertissement Médical:** Cet outil est à des fins éducatives uniquement et ne doit jamais remplacer un avis, diagnostic ou traitement médical professionnel.",
};
