use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{
    models::{GameResult, RoundResult},
    repository::GameResultRepository,
    scoring::{compute_score, RewardCalculator},
    types::{GameResultRequest, RoundResultRequest},
};
use crate::{configuration::QuestionRepository, shared::AppError};

/// Records finished games
pub struct GameResultService {
    results: Arc<dyn GameResultRepository>,
    questions: Arc<dyn QuestionRepository>,
    rewards: RewardCalculator,
}

impl GameResultService {
    pub fn new(
        results: Arc<dyn GameResultRepository>,
        questions: Arc<dyn QuestionRepository>,
        rewards: RewardCalculator,
    ) -> Self {
        Self {
            results,
            questions,
            rewards,
        }
    }

    /// Scores, rewards and stores a submitted game
    ///
    /// Every check runs before the reward is computed, since computing a
    /// perfect-score reward advances the shared counter.
    #[instrument(skip(self, request), fields(configuration_id = %request.configuration_id))]
    pub async fn submit_game_result(
        &self,
        request: GameResultRequest,
        player_id: &str,
    ) -> Result<GameResult, AppError> {
        if player_id.trim().is_empty() {
            return Err(AppError::InvalidArgument("player id is blank".to_string()));
        }
        if request.answered_count() > request.question_count as usize {
            return Err(AppError::InvalidArgument(format!(
                "{} answered rounds exceed question count {}",
                request.answered_count(),
                request.question_count
            )));
        }

        let score = compute_score(
            request.correct_answered_questions.len() as i64,
            i64::from(request.question_count),
        )?;

        let correct = self.resolve_rounds(request.correct_answered_questions).await?;
        let wrong = self.resolve_rounds(request.wrong_answered_questions).await?;

        let rewards = self.rewards.compute_reward(i64::from(score))?;

        let game_result = GameResult {
            id: Uuid::new_v4(),
            configuration_id: request.configuration_id,
            player_id: player_id.to_string(),
            correct_answered_questions: correct,
            wrong_answered_questions: wrong,
            question_count: request.question_count,
            score,
            time_spent: request.time_spent,
            rewards,
            played_at: chrono::Utc::now(),
        };
        self.results.save(&game_result).await?;

        info!(
            game_result_id = %game_result.id,
            player_id = %player_id,
            score,
            rewards,
            "Game result saved"
        );
        Ok(game_result)
    }

    #[instrument(skip(self))]
    pub async fn get_game_results(
        &self,
        configuration_id: Uuid,
    ) -> Result<Vec<GameResult>, AppError> {
        self.results.find_by_configuration_id(&configuration_id).await
    }

    /// Every round has to point at a stored question
    async fn resolve_rounds(
        &self,
        rounds: Vec<RoundResultRequest>,
    ) -> Result<Vec<RoundResult>, AppError> {
        let mut resolved = Vec::with_capacity(rounds.len());
        for round in rounds {
            if self.questions.find_by_id(&round.question_id).await?.is_none() {
                warn!(question_id = %round.question_id, "Round references unknown question");
                return Err(AppError::NotFound(format!(
                    "There is no question with uuid {}.",
                    round.question_id
                )));
            }
            resolved.push(RoundResult::new(round.question_id, round.answer));
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::{InMemoryQuestionRepository, Question};
    use crate::game_result::InMemoryGameResultRepository;

    struct Fixture {
        service: GameResultService,
        results: Arc<InMemoryGameResultRepository>,
        rewards: RewardCalculator,
        question_ids: Vec<Uuid>,
    }

    async fn fixture(question_count: usize) -> Fixture {
        let questions = Arc::new(InMemoryQuestionRepository::new());
        let mut question_ids = Vec::new();
        for i in 0..question_count {
            let question = Question::new(format!("question{i}"), [format!("answer{i}")], vec![]);
            questions.save(&question).await.unwrap();
            question_ids.push(question.id);
        }

        let results = Arc::new(InMemoryGameResultRepository::new());
        let rewards = RewardCalculator::default();
        Fixture {
            service: GameResultService::new(results.clone(), questions, rewards.clone()),
            results,
            rewards,
            question_ids,
        }
    }

    fn rounds(ids: &[Uuid]) -> Vec<RoundResultRequest> {
        ids.iter()
            .map(|id| RoundResultRequest {
                question_id: *id,
                answer: "answer".to_string(),
            })
            .collect()
    }

    fn request(
        configuration_id: Uuid,
        correct: &[Uuid],
        wrong: &[Uuid],
        total: u32,
    ) -> GameResultRequest {
        GameResultRequest {
            configuration_id,
            question_count: total,
            time_spent: 120,
            correct_answered_questions: rounds(correct),
            wrong_answered_questions: rounds(wrong),
        }
    }

    #[tokio::test]
    async fn stores_scored_and_rewarded_result() {
        let f = fixture(4).await;
        let configuration_id = Uuid::new_v4();

        let saved = f
            .service
            .submit_game_result(
                request(configuration_id, &f.question_ids[..3], &f.question_ids[3..], 4),
                "player-1",
            )
            .await
            .unwrap();

        assert_eq!(saved.score, 75);
        assert_eq!(saved.rewards, 7);
        assert_eq!(saved.correct_answered_questions.len(), 3);
        assert_eq!(saved.wrong_answered_questions.len(), 1);

        let stored = f.service.get_game_results(configuration_id).await.unwrap();
        assert_eq!(stored, vec![saved]);
    }

    #[tokio::test]
    async fn perfect_scores_advance_shared_counter() {
        let f = fixture(2).await;
        let configuration_id = Uuid::new_v4();

        let mut rewards = Vec::new();
        for _ in 0..4 {
            let saved = f
                .service
                .submit_game_result(request(configuration_id, &f.question_ids, &[], 2), "player")
                .await
                .unwrap();
            rewards.push(saved.rewards);
        }

        assert_eq!(rewards, vec![10, 10, 10, 5]);
        assert_eq!(f.rewards.perfect_scores().count(), 4);
    }

    #[tokio::test]
    async fn unknown_question_is_not_found_and_leaves_counter_alone() {
        let f = fixture(1).await;
        let configuration_id = Uuid::new_v4();
        let mut correct = f.question_ids.clone();
        correct.push(Uuid::new_v4());

        let result = f
            .service
            .submit_game_result(request(configuration_id, &correct, &[], 2), "player")
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(f.rewards.perfect_scores().count(), 0);
        assert!(f
            .results
            .find_by_configuration_id(&configuration_id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn more_rounds_than_questions_is_invalid() {
        let f = fixture(3).await;

        let result = f
            .service
            .submit_game_result(
                request(Uuid::new_v4(), &f.question_ids[..2], &f.question_ids[2..], 2),
                "player",
            )
            .await;

        assert!(matches!(result, Err(AppError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn zero_question_game_is_invalid() {
        let f = fixture(0).await;

        let result = f
            .service
            .submit_game_result(request(Uuid::new_v4(), &[], &[], 0), "player")
            .await;

        assert!(matches!(result, Err(AppError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn blank_player_is_invalid() {
        let f = fixture(1).await;

        let result = f
            .service
            .submit_game_result(request(Uuid::new_v4(), &f.question_ids, &[], 1), " ")
            .await;

        assert!(matches!(result, Err(AppError::InvalidArgument(_))));
    }
}
