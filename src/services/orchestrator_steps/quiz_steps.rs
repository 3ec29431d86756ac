/// Stages of one quiz generation run, in the order they can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStage {
    BuildPrompt,
    Fetch,
    Extract,
    RetryWithAltPrompt,
    ExtractMore,
    PadWithFallback,
    TruncateToTarget,
    AssignIds,
    Done,
}

impl QuizStage {
    pub fn name(&self) -> &'static str {
        match self {
            QuizStage::BuildPrompt => "build_prompt",
            QuizStage::Fetch => "fetch",
            QuizStage::Extract => "extract",
            QuizStage::RetryWithAltPrompt => "retry_with_alt_prompt",
            QuizStage::ExtractMore => "extract_more",
            QuizStage::PadWithFallback => "pad_with_fallback",
            QuizStage::TruncateToTarget => "truncate_to_target",
            QuizStage::AssignIds => "assign_ids",
            QuizStage::Done => "done",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QuizStage::BuildPrompt => "Format the primary quiz prompt for the topic",
            QuizStage::Fetch => "Send the prompt to the model service",
            QuizStage::Extract => "Parse questions out of the first response",
            QuizStage::RetryWithAltPrompt => "Ask again with the alternate prompt",
            QuizStage::ExtractMore => "Parse the second response and merge new questions",
            QuizStage::PadWithFallback => "Fill missing slots from the fallback bank",
            QuizStage::TruncateToTarget => "Cut the list down to the requested count",
            QuizStage::AssignIds => "Renumber questions in final order",
            QuizStage::Done => "Generation finished",
        }
    }
}

/// Counters the transition function looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizProgress {
    pub collected: usize,
    pub target: usize,
    pub retried: bool,
}

/// Pure transition function: retry once when the first pass under-yields,
/// then always pad, truncate and renumber.
pub fn next_stage(stage: QuizStage, progress: QuizProgress) -> QuizStage {
    match stage {
        QuizStage::BuildPrompt => QuizStage::Fetch,
        QuizStage::Fetch => QuizStage::Extract,
        QuizStage::Extract if progress.collected < progress.target && !progress.retried => {
            QuizStage::RetryWithAltPrompt
        }
        QuizStage::Extract => QuizStage::PadWithFallback,
        QuizStage::RetryWithAltPrompt => QuizStage::ExtractMore,
        QuizStage::ExtractMore => QuizStage::PadWithFallback,
        QuizStage::PadWithFallback => QuizStage::TruncateToTarget,
        QuizStage::TruncateToTarget => QuizStage::AssignIds,
        QuizStage::AssignIds | QuizStage::Done => QuizStage::Done,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walks the machine from `BuildPrompt` to `Done` with fixed counters.
    fn planned_stages(progress: QuizProgress) -> Vec<QuizStage> {
        let mut stages = vec![QuizStage::BuildPrompt];
        let mut stage = QuizStage::BuildPrompt;
        let mut progress = progress;

        while stage != QuizStage::Done {
            stage = next_stage(stage, progress);
            if stage == QuizStage::RetryWithAltPrompt {
                progress.retried = true;
            }
            stages.push(stage);
        }

        stages
    }

    #[test]
    fn full_first_pass_skips_retry() {
        let stages = planned_stages(QuizProgress {
            collected: 10,
            target: 10,
            retried: false,
        });

        assert_eq!(
            stages,
            vec![
                QuizStage::BuildPrompt,
                QuizStage::Fetch,
                QuizStage::Extract,
                QuizStage::PadWithFallback,
                QuizStage::TruncateToTarget,
                QuizStage::AssignIds,
                QuizStage::Done,
            ]
        );
    }

    #[test]
    fn short_first_pass_retries_once() {
        let stages = planned_stages(QuizProgress {
            collected: 3,
            target: 10,
            retried: false,
        });

        let names: Vec<&str> = stages.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "build_prompt",
                "fetch",
                "extract",
                "retry_with_alt_prompt",
                "extract_more",
                "pad_with_fallback",
                "truncate_to_target",
                "assign_ids",
                "done"
            ]
        );
    }

    #[test]
    fn extract_after_retry_goes_to_padding() {
        let progress = QuizProgress {
            collected: 0,
            target: 10,
            retried: true,
        };
        assert_eq!(next_stage(QuizStage::Extract, progress), QuizStage::PadWithFallback);
    }

    #[test]
    fn done_is_terminal() {
        assert_eq!(next_stage(QuizStage::Done, QuizProgress::default()), QuizStage::Done);
    }

    #[test]
    fn every_stage_has_a_description() {
        let stages = planned_stages(QuizProgress {
            collected: 0,
            target: 1,
            retried: false,
        });
        assert!(stages.iter().all(|s| !s.description().is_empty()));
    }
}
