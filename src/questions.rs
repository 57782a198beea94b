//! Question generation from a fixed, categorized template table.
//!
//! Templates only interpolate the product name, so every question stays
//! grounded in data the product record actually supplies.

use std::collections::HashMap;

use crate::error::{ForgeError, Result};
use crate::model::{Product, Question, QuestionCategory};

/// Minimum size of a generated question set.
pub const MIN_QUESTIONS: usize = 15;

const NAME_PLACEHOLDER: &str = "{name}";

/// Question templates in output order.
const QUESTION_TEMPLATES: &[(QuestionCategory, &str)] = &[
    (QuestionCategory::Informational, "What does {name} do?"),
    (QuestionCategory::Informational, "What are the key ingredients in {name}?"),
    (QuestionCategory::Informational, "Which skin types is {name} suitable for?"),
    (QuestionCategory::Informational, "What is the Vitamin C concentration in {name}?"),
    (QuestionCategory::Usage, "How should I use {name} in my routine?"),
    (QuestionCategory::Usage, "Can I use {name} in the morning?"),
    (QuestionCategory::Usage, "How many drops of {name} should I apply?"),
    (QuestionCategory::Usage, "Do I need to use sunscreen after applying {name}?"),
    (QuestionCategory::Safety, "Are there any side effects of using {name}?"),
    (QuestionCategory::Safety, "Is {name} suitable for sensitive skin?"),
    (QuestionCategory::Safety, "What should I do if I feel tingling after applying {name}?"),
    (QuestionCategory::Purchase, "What is the price of {name}?"),
    (QuestionCategory::Purchase, "Is {name} affordable for daily use?"),
    (QuestionCategory::Comparison, "How does {name} compare to other Vitamin C serums?"),
    (QuestionCategory::Comparison, "Does {name} offer the same benefits as other brightening serums?"),
];

/// Minimum number of questions each category must contribute.
pub fn min_coverage(category: QuestionCategory) -> usize {
    match category {
        QuestionCategory::Informational => 4,
        QuestionCategory::Usage => 4,
        QuestionCategory::Safety => 3,
        QuestionCategory::Purchase => 2,
        QuestionCategory::Comparison => 2,
    }
}

/// Generate the question set for `product` and validate it.
pub fn generate_questions(product: &Product) -> Result<Vec<Question>> {
    let questions: Vec<Question> = QUESTION_TEMPLATES
        .iter()
        .map(|(category, template)| Question {
            text: template.replace(NAME_PLACEHOLDER, &product.name),
            category: *category,
        })
        .collect();

    validate_questions(&questions)?;
    log::debug!("Generated {} questions for '{}'", questions.len(), product.name);
    Ok(questions)
}

/// Check overall size and per-category coverage.
///
/// Both are fixed by the template table, so a failure here means the table
/// regressed rather than the product data being bad.
pub fn validate_questions(questions: &[Question]) -> Result<()> {
    if questions.len() < MIN_QUESTIONS {
        return Err(ForgeError::TooFewQuestions {
            found: questions.len(),
            required: MIN_QUESTIONS,
        });
    }

    let mut counts: HashMap<QuestionCategory, usize> = HashMap::new();
    for q in questions {
        *counts.entry(q.category).or_default() += 1;
    }

    for category in QuestionCategory::ALL {
        let found = counts.get(&category).copied().unwrap_or(0);
        let required = min_coverage(category);
        if found < required {
            return Err(ForgeError::CategoryCoverage {
                category,
                found,
                required,
            });
        }
    }
    Ok(())
}
