//! Context builder — turns raw question/answer pairs into the narrative
//! block embedded in the analysis prompt.

use complyx_common::{AssessmentResponses, QuestionSection};
use std::collections::HashMap;

struct QuestionMeta<'a> {
    text: &'a str,
    question_type: &'a str,
    section: &'a str,
}

/// Render the user's answers as a human-readable narrative grouped by the
/// question metadata supplied by the caller.
///
/// Entries follow the iteration order of `responses`; answers whose
/// question id is not in the bank are silently skipped. Empty responses
/// produce the header alone. Never fails, whatever the input shape.
pub fn build_context(responses: &AssessmentResponses, sections: &[QuestionSection]) -> String {
    let mut lookup: HashMap<&str, QuestionMeta<'_>> = HashMap::new();
    for section in sections {
        for q in &section.questions {
            lookup.insert(
                q.id.as_str(),
                QuestionMeta {
                    text: &q.text,
                    question_type: &q.question_type,
                    section: &section.section,
                },
            );
        }
    }

    let mut out = String::from("Responses from the compliance self-assessment:\n");
    for (id, answer) in responses {
        let Some(meta) = lookup.get(id.as_str()) else { continue };
        out.push_str(&format!(
            "\nSection: {}\nQuestion: {}\nAnswer: {}\nType: {}\n",
            meta.section, meta.text, answer.value, meta.question_type,
        ));
    }
    out
}
