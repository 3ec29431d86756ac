use crate::models::domain::Difficulty;

pub fn quiz_prompt(topic: &str, count: usize, difficulty: Difficulty) -> String {
    format!(
        r#"You are a learning assistant specialized in creating educational content for students.

## TASK
Create a multiple-choice quiz about "{topic}" that contains exactly {count} well-crafted questions. The quiz should be at a {difficulty} difficulty level.

## TOPIC OVERVIEW
First, provide a brief overview of "{topic}" to contextualize the questions.

## QUIZ FORMAT
For each question:
1. Create a clear, concise question about an important aspect of "{topic}"
2. Provide exactly 4 answer options (A, B, C, D)
3. Indicate the correct answer
4. Include a brief explanation for why the correct answer is right

## DIFFICULTY LEVEL
This quiz should be at a {upper} difficulty level, which means:
{guidelines}

## QUESTION VARIETY
Include a mix of:
- Factual recall questions
- Conceptual understanding questions
- Application questions
- Analysis questions

## REQUIRED FORMAT
Use this exact format for each question:

### Question 1
[Question text]

**A.** [Option A]
**B.** [Option B]
**C.** [Option C]
**D.** [Option D]

**Correct Answer:** [A/B/C/D]

**Explanation:** [Brief explanation of why the correct answer is right]

### Question 2
[Continue with the same format for all {count} questions]
"#,
        upper = difficulty.as_str().to_uppercase(),
        guidelines = difficulty_guidelines(difficulty),
    )
}

/// Second-pass prompt used when the first response under-yields.
pub fn alternate_quiz_prompt(topic: &str, count: usize, difficulty: Difficulty) -> String {
    format!(
        r#"You are an expert teacher creating a comprehensive quiz about "{topic}".

Create EXACTLY {count} well-formatted multiple-choice questions about "{topic}" at a {difficulty} difficulty level.

For each question:
1. Include question text that specifically addresses "{topic}"
2. Provide 4 answer options labeled A, B, C, D
3. Clearly indicate which answer is correct
4. Include a brief explanation for the correct answer

Format each question exactly like this:

### Question 1: [question text about {topic}]
**A.** [option 1]
**B.** [option 2]
**C.** [option 3]
**D.** [option 4]
**Correct Answer:** [A/B/C/D]
**Explanation:** [brief explanation]

### Question 2: [question text]
[and so on...]
"#
    )
}

pub fn difficulty_guidelines(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => {
            "- Questions should focus on basic concepts and definitions
- Options should be clearly distinguishable from each other
- Explanations should be straightforward and educational
- Focus on fundamental knowledge and obvious distinctions"
        }
        Difficulty::Medium => {
            "- Balance between basic recall and deeper understanding
- Include some questions with moderate complexity
- Answer options should include plausible distractors
- Test both knowledge and application of concepts"
        }
        Difficulty::Hard => {
            "- Questions should require deeper understanding of the topic
- Include nuanced distinctions between answer choices
- Test application of concepts in complex scenarios
- Include some questions that require synthesis of multiple concepts
- Challenge the student with questions that require careful analysis"
        }
    }
}
