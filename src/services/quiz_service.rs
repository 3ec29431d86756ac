use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::{
    constants::quiz_prompt::{alternate_quiz_prompt, quiz_prompt},
    errors::AppResult,
    models::{
        domain::{Difficulty, QuizQuestion},
        dto::response::QuizSource,
    },
    services::{
        fallback_service::FallbackBank,
        mcq_parser::{dedup::Deduplicator, parse_questions},
        model_service::{fetch_or_cancel, AnswerFetcher},
        orchestrator_steps::quiz_steps::{next_stage, QuizProgress, QuizStage},
    },
};

pub const FALLBACK_NOTICE: &str = "Failed to generate quiz questions. Using fallback questions.";

#[derive(Debug, Clone)]
pub struct QuizOutcome {
    pub questions: Vec<QuizQuestion>,
    pub source: QuizSource,
    pub notice: Option<String>,
}

pub struct QuizService {
    fetcher: Arc<dyn AnswerFetcher>,
    fallback: Arc<FallbackBank>,
}

/// Mutable state of one run of the stage machine.
struct QuizRun<'a> {
    topic: &'a str,
    target: usize,
    difficulty: Difficulty,
    prompt: String,
    response: Option<String>,
    questions: Vec<QuizQuestion>,
    failed_fetches: u8,
    generated: usize,
    retried: bool,
}

impl QuizRun<'_> {
    fn progress(&self) -> QuizProgress {
        QuizProgress {
            collected: self.questions.len(),
            target: self.target,
            retried: self.retried,
        }
    }
}

impl QuizService {
    pub fn new(fetcher: Arc<dyn AnswerFetcher>, fallback: Arc<FallbackBank>) -> Self {
        Self { fetcher, fallback }
    }

    /// Always yields exactly `target` questions. The only error is
    /// [`crate::errors::AppError::Cancelled`]; every other failure degrades to fallback content.
    pub async fn get_questions(
        &self,
        topic: &str,
        target: usize,
        difficulty: Difficulty,
        cancel: &CancellationToken,
    ) -> AppResult<QuizOutcome> {
        let topic = topic.trim();
        let mut run = QuizRun {
            topic,
            target,
            difficulty,
            prompt: String::new(),
            response: None,
            questions: Vec::new(),
            failed_fetches: 0,
            generated: 0,
            retried: false,
        };

        log::info!(
            "Generating {} {} questions for topic '{}'",
            target,
            difficulty,
            topic
        );

        let mut stage = QuizStage::BuildPrompt;
        while stage != QuizStage::Done {
            log::debug!("Quiz stage {}: {}", stage.name(), stage.description());
            self.run_stage(stage, &mut run, cancel).await?;
            stage = next_stage(stage, run.progress());
        }

        Ok(self.outcome(run))
    }

    async fn run_stage(
        &self,
        stage: QuizStage,
        run: &mut QuizRun<'_>,
        cancel: &CancellationToken,
    ) -> AppResult<()> {
        match stage {
            QuizStage::BuildPrompt => {
                run.prompt = quiz_prompt(run.topic, run.target, run.difficulty);
            }
            QuizStage::Fetch => {
                run.response = fetch_or_cancel(self.fetcher.as_ref(), &run.prompt, cancel).await?;
                if run.response.is_none() {
                    run.failed_fetches += 1;
                }
            }
            QuizStage::Extract => {
                if let Some(raw) = run.response.take() {
                    run.questions = parse_questions(&raw, run.topic);
                }
                if run.questions.len() < run.target {
                    log::warn!(
                        "Only parsed {} of {} questions for '{}'",
                        run.questions.len(),
                        run.target,
                        run.topic
                    );
                }
            }
            QuizStage::RetryWithAltPrompt => {
                run.retried = true;
                run.prompt = alternate_quiz_prompt(run.topic, run.target, run.difficulty);
                run.response = fetch_or_cancel(self.fetcher.as_ref(), &run.prompt, cancel).await?;
                if run.response.is_none() {
                    run.failed_fetches += 1;
                }
            }
            QuizStage::ExtractMore => {
                if let Some(raw) = run.response.take() {
                    let added = merge_new(&mut run.questions, parse_questions(&raw, run.topic));
                    log::info!("Retry added {} new question(s)", added);
                }
            }
            QuizStage::PadWithFallback => {
                run.generated = run.questions.len().min(run.target);
                if run.failed_fetches == 2 {
                    log::warn!(
                        "Both fetches failed for '{}'; substituting fallback questions",
                        run.topic
                    );
                    run.questions = self.fallback.pad(Vec::new(), run.topic, run.target);
                } else {
                    let questions = std::mem::take(&mut run.questions);
                    run.questions = self.fallback.pad(questions, run.topic, run.target);
                }
            }
            QuizStage::TruncateToTarget => run.questions.truncate(run.target),
            QuizStage::AssignIds => {
                for (i, question) in run.questions.iter_mut().enumerate() {
                    question.id = format!("question-{}", i + 1);
                }
            }
            QuizStage::Done => {}
        }

        Ok(())
    }

    fn outcome(&self, run: QuizRun<'_>) -> QuizOutcome {
        let padded = run.questions.len().saturating_sub(run.generated);
        let (source, notice) = if run.failed_fetches == 2 {
            (QuizSource::Fallback, Some(FALLBACK_NOTICE.to_string()))
        } else if run.generated == 0 {
            (
                QuizSource::Fallback,
                Some("No questions could be extracted from the generated quiz. Using fallback questions.".to_string()),
            )
        } else if padded > 0 {
            (
                QuizSource::Mixed,
                Some(format!(
                    "{} of {} questions come from the built-in question bank.",
                    padded,
                    run.questions.len()
                )),
            )
        } else {
            (QuizSource::Generated, None)
        };

        log::info!(
            "Quiz for '{}' ready: {} questions ({:?})",
            run.topic,
            run.questions.len(),
            source
        );

        QuizOutcome {
            questions: run.questions,
            source,
            notice,
        }
    }
}

/// Appends questions that are not near-duplicates of ones already held.
fn merge_new(questions: &mut Vec<QuizQuestion>, additional: Vec<QuizQuestion>) -> usize {
    let mut dedup = Deduplicator::new();
    for question in questions.iter() {
        dedup.accept(&question.question_text);
    }

    let before = questions.len();
    questions.extend(
        additional
            .into_iter()
            .filter(|q| dedup.accept(&q.question_text)),
    );
    questions.len() - before
}
