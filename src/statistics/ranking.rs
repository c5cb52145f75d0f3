use std::cmp::Ordering;
use std::collections::HashMap;
use uuid::Uuid;

use super::models::ProblematicQuestion;
use crate::configuration::Question;
use crate::game_result::GameResult;

/// Ranks questions by their share of wrong answers, worst first
///
/// Rounds that point at a question outside `questions` are skipped. Ties keep
/// the order of `questions`, and questions nobody answered go last.
pub fn rank_problematic_questions(
    questions: &[Question],
    game_results: &[GameResult],
    limit: usize,
) -> Vec<ProblematicQuestion> {
    let mut ranked: Vec<ProblematicQuestion> = questions
        .iter()
        .cloned()
        .map(ProblematicQuestion::new)
        .collect();

    let index: HashMap<Uuid, usize> = ranked
        .iter()
        .enumerate()
        .map(|(position, entry)| (entry.question.id, position))
        .collect();

    for game_result in game_results {
        for round in &game_result.wrong_answered_questions {
            if let Some(&position) = index.get(&round.question_id) {
                ranked[position].add_wrong_answer();
            }
        }
        for round in &game_result.correct_answered_questions {
            if let Some(&position) = index.get(&round.question_id) {
                ranked[position].add_correct_answer();
            }
        }
    }

    // sort_by is stable
    ranked.sort_by(compare_wrong_ratio);
    ranked.truncate(limit);
    ranked
}

/// Descending wrong ratio, compared exactly by cross-multiplying
fn compare_wrong_ratio(a: &ProblematicQuestion, b: &ProblematicQuestion) -> Ordering {
    match (a.attempts, b.attempts) {
        (0, 0) => Ordering::Equal,
        (0, _) => Ordering::Greater,
        (_, 0) => Ordering::Less,
        _ => (b.wrong_answers * a.attempts).cmp(&(a.wrong_answers * b.attempts)),
    }
}
