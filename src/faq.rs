//! FAQ answer matching.
//!
//! Each question is answered by the first entry of an ordered prefix table
//! whose prefix starts the question text. Declaration order matters: the
//! bare `"Is"` prefix answers every question starting with "Is", whatever its
//! category.

use crate::blocks;
use crate::model::{FaqItem, Product, Question, QuestionCategory};

/// What to do with a question no prefix matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackMode {
    /// Only comparison and purchase questions get a fallback answer; other
    /// unmatched questions are dropped.
    #[default]
    Compatible,
    /// Every category has a fallback, so every question yields an item.
    Exhaustive,
}

/// Ordered (prefix, answer) pairs for `product`.
pub fn answer_table(product: &Product) -> Vec<(&'static str, String)> {
    vec![
        ("What does", blocks::summary(product)),
        (
            "What are the key ingredients",
            format!("The key ingredients are {}.", product.key_ingredients.join(", ")),
        ),
        (
            "Which skin types",
            format!("It is suitable for {} skin.", product.skin_types.join(", ")),
        ),
        (
            "What is the Vitamin C concentration",
            format!("It contains {}.", product.concentration),
        ),
        ("How should I use", product.how_to_use.clone()),
        (
            "How many drops",
            "Use 2–3 drops per application, as suggested.".to_string(),
        ),
        (
            "Do I need to use sunscreen",
            "Yes, it is suggested to use it in the morning before sunscreen, \
             so you should apply sunscreen after using the serum."
                .to_string(),
        ),
        ("Are there any side effects", product.side_effects.clone()),
        (
            "Is",
            format!("{} may cause mild tingling for sensitive skin.", product.name),
        ),
        (
            "What should I do if I feel tingling",
            "Mild tingling can occur on sensitive skin. If the sensation is strong or persists, \
             consider reducing usage frequency or stopping use."
                .to_string(),
        ),
        ("What is the price", format!("The price is {}.", product.price)),
    ]
}

/// Category-level answer for a question no prefix matched.
pub fn fallback_answer(product: &Product, category: QuestionCategory, mode: FallbackMode) -> Option<String> {
    match category {
        QuestionCategory::Comparison => Some(format!(
            "{} is a {} serum with {} that focuses on {}. \
             Specific comparisons depend on the other product.",
            product.name,
            product.concentration,
            product.key_ingredients.join(", "),
            product.benefits.join(", ").to_lowercase(),
        )),
        QuestionCategory::Purchase => Some(format!("{} is priced at {}.", product.name, product.price)),
        _ if mode == FallbackMode::Compatible => None,
        QuestionCategory::Informational => Some(blocks::summary(product)),
        QuestionCategory::Usage => Some(blocks::usage(product)),
        QuestionCategory::Safety => Some(blocks::safety(product)),
    }
}

/// Answer `questions` in order. Unanswerable questions are skipped.
pub fn match_answers(product: &Product, questions: &[Question], mode: FallbackMode) -> Vec<FaqItem> {
    let table = answer_table(product);
    let mut items = Vec::with_capacity(questions.len());

    for q in questions {
        let matched = table
            .iter()
            .find(|(prefix, _)| q.text.starts_with(*prefix))
            .map(|(_, answer)| answer.clone());

        match matched.or_else(|| fallback_answer(product, q.category, mode)) {
            Some(answer) => items.push(FaqItem {
                question: q.text.clone(),
                answer,
                category: q.category,
            }),
            None => log::warn!("No answer for {} question: {}", q.category, q.text),
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_record;
    use crate::questions::generate_questions;
    use crate::sample;

    fn product() -> Product {
        parse_record(&sample::glowboost_record()).unwrap()
    }

    fn question(text: &str, category: QuestionCategory) -> Question {
        Question {
            text: text.to_string(),
            category,
        }
    }

    #[test]
    fn canonical_questions_drop_only_the_morning_question() {
        let p = product();
        let qs = generate_questions(&p).unwrap();
        let items = match_answers(&p, &qs, FallbackMode::Compatible);
        assert_eq!(items.len(), 14);
        assert!(items.iter().all(|i| !i.question.starts_with("Can I use")));
    }

    #[test]
    fn exhaustive_mode_answers_everything() {
        let p = product();
        let qs = generate_questions(&p).unwrap();
        let items = match_answers(&p, &qs, FallbackMode::Exhaustive);
        assert_eq!(items.len(), qs.len());
        let morning = items.iter().find(|i| i.question.starts_with("Can I use")).unwrap();
        assert_eq!(morning.answer, p.how_to_use);
        assert_eq!(morning.category, QuestionCategory::Usage);
    }

    #[test]
    fn earliest_prefix_wins() {
        let p = product();
        let q = question("What is the price of it?", QuestionCategory::Purchase);
        let items = match_answers(&p, &[q], FallbackMode::Compatible);
        assert_eq!(items[0].answer, "The price is ₹699.");

        // The bare "Is" prefix captures purchase questions too.
        let q = question("Is it affordable for daily use?", QuestionCategory::Purchase);
        let items = match_answers(&p, &[q], FallbackMode::Compatible);
        assert_eq!(
            items[0].answer,
            "GlowBoost Vitamin C Serum may cause mild tingling for sensitive skin."
        );
    }

    #[test]
    fn unmatched_comparison_and_purchase_fall_back() {
        let p = product();
        let qs = [
            question("How does it compare?", QuestionCategory::Comparison),
            question("Where can I buy it?", QuestionCategory::Purchase),
            question("Where is it made?", QuestionCategory::Informational),
        ];
        let items = match_answers(&p, &qs, FallbackMode::Compatible);
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0].answer,
            "GlowBoost Vitamin C Serum is a 10% Vitamin C serum with Vitamin C, Hyaluronic Acid \
             that focuses on brightening, hydration. Specific comparisons depend on the other product."
        );
        assert_eq!(items[1].answer, "GlowBoost Vitamin C Serum is priced at ₹699.");
    }

    #[test]
    fn items_keep_question_order_and_category() {
        let p = product();
        let qs = generate_questions(&p).unwrap();
        let items = match_answers(&p, &qs, FallbackMode::Compatible);
        let mut cursor = qs.iter();
        for item in &items {
            let source = cursor.find(|q| q.text == item.question).unwrap();
            assert_eq!(source.category, item.category);
        }
    }

    #[test]
    fn matching_is_deterministic() {
        let p = product();
        let qs = generate_questions(&p).unwrap();
        let first = match_answers(&p, &qs, FallbackMode::Compatible);
        let second = match_answers(&p, &qs, FallbackMode::Compatible);
        assert_eq!(first, second);
    }
}
