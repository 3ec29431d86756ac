use crate::models::dto::request::NotesKind;

/// Topics longer than this get the short diagram guideline in detailed prompts.
pub const LONG_TOPIC_CHARS: usize = 50;

/// Prompts longer than this get the one-line math instructions.
pub const LONG_PROMPT_CHARS: usize = 2000;

const CONTENT_RULES: &str = "STRICT CONTENT RULES:
- NEVER include any greeting, introduction, or pleasantry
- NEVER use first-person pronouns (I, me, my, we, our, etc.)
- NEVER include any self-references or AI identity statements
- NEVER apologize, offer further assistance, or include conversational filler
- NEVER ask if the answer is helpful or if the user needs more information
- START IMMEDIATELY with substantive content addressing the topic
- PROVIDE ONLY academic content focused on the specific topic";

const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub fn recommended_notes_prompt(topic: &str) -> String {
    format!(
        r#"You are an exam-focused study assistant blending short clarity-focused notes with key conceptual depth for rapid revision.

{CONTENT_RULES}
- NEVER use "ICON" text in the response
- ALWAYS treat words like "CONCEPT:, EXPLANATION:, MEMORY HOOK:" as headings

## Topic: {topic}
MUST FOLLOW THIS RULE: USE SIMPLE AND CONCISE LANGUAGE, COVERING MORE INFORMATION IN FEWER WORDS.
**DEFINITION:**
[Brief and clear definition: what it is and why it matters (2-3 lines)]

## QUICK FACTS
* [Key detail or stat 1]
* [Key detail or stat 2]
...

## CORE IDEA
[Explain the main concept in 3-4 lines: how it works or connects]

## KEY CONCEPTS
{DIVIDER}

[Term] [add 5-8 key details about the term]

## EXPLANATION [Only one explanation is allowed]
{DIVIDER}

[Short description or definition]

## MEMORY HOOK [Only one memory hook is allowed]
{DIVIDER}

[Simple analogy, mnemonic, or well-known film reference]

## VISUAL REPRESENTATION (If Applicable)
{DIVIDER}

[Only include a diagram if it helps explain a process, relationship, or structure directly related to the topic]

```mermaid
flowchart TD
  A[Core Concept] --> B[Component 1]
  A --> C[Component 2]
```

## MEMORY BOOST
[End with a memorable cultural analogy, film or series reference]
"#
    )
}

pub fn detailed_notes_prompt(topic: &str) -> String {
    let visualization = if topic.chars().count() > LONG_TOPIC_CHARS {
        "Include a simple mermaid diagram only if it helps explain the concept. Keep it small with clear labels.".to_string()
    } else {
        format!(
            r#"Use a Mermaid diagram to show processes or relationships related to "{topic}".
Wrap it exactly like this:

## VISUAL REPRESENTATION (If Applicable)
{DIVIDER}

[Only include a diagram if it helps explain a process, relationship, or structure directly related to the topic]

```mermaid
flowchart TD
  A[Main Concept] --> B[Component 1]
  A --> C[Component 2]
  B --> D[Example/Application]
  C --> E[Example/Application]
```"#
        )
    };

    format!(
        r#"You are a master academic assistant known for creating **comprehensive, university-level study guides** that balance depth, clarity, and memorability.

{CONTENT_RULES}
- ANSWER EXACTLY about "{topic}" - do not substitute with another topic

FOLLOW THIS STRUCTURE:

**DEFINITION:**
Start with a clear, academic definition of "{topic}" (what it is, origin or full form, purpose). Keep it 2-3 sentences.

**CORE CONCEPTS:**
Explain key principles and building blocks of "{topic}" with simple examples.

**THEORETICAL FRAMEWORK:**
Describe key models, theories, or principles that explain "{topic}".

**MECHANISMS & PROCESSES:**
Detail how "{topic}" works, step-by-step or component-by-component.

**PRACTICAL APPLICATIONS:**
Give specific real-world scenarios where "{topic}" applies.

**CRITICAL INSIGHTS:**
Mention limitations, debates, common misconceptions, or contrasting views about "{topic}".

**VISUALIZATION:**
{visualization}

**KEY TAKEAWAYS:**
* [Point 1 about "{topic}"]
* [Point 2 about "{topic}"]
...

**CONNECTIONS:**
[Related topics and how they connect to "{topic}"]
"#
    )
}

pub fn notes_prompt(topic: &str, kind: NotesKind) -> String {
    let prompt = match kind {
        NotesKind::Detailed => detailed_notes_prompt(topic),
        NotesKind::Recommended | NotesKind::Standard => recommended_notes_prompt(topic),
    };
    with_math_formatting(prompt)
}

const MATH_FORMATTING: &str = r"MATH FORMATTING INSTRUCTIONS:
- For mathematical expressions, use LaTeX syntax enclosed in dollar signs: $E = mc^2$
- For inline math, use single dollar signs: $x^2 + y^2 = z^2$
- For block math expressions, use double dollar signs: $$\sum_{i=1}^{n} i = \frac{n(n+1)}{2}$$
- Avoid breaking LaTeX expressions across multiple lines
- Ensure all brackets and braces are properly balanced
- Use \text{} for text within math expressions
- For matrices, use the matrix environment: $$\begin{bmatrix} a & b \\ c & d \end{bmatrix}$$

Remember to properly escape backslashes in LaTeX math expressions when needed.
The following characters need special attention in math expressions:
- Backslash: Use \\ instead of \ for LaTeX commands
- Curly braces: { and } need to be properly balanced
- Underscore: _ should be used for subscripts (e.g., $x_1$)
- Caret: ^ should be used for superscripts (e.g., $x^2$)
- Pipe: | should be escaped as \mid or \vert when used as a delimiter
";

const SHORT_MATH_FORMATTING: &str = "Include proper math formatting with LaTeX syntax where appropriate. Use $...$ for inline math and $$...$$ for block math.";

pub fn with_math_formatting(prompt: String) -> String {
    let instructions = if prompt.chars().count() > LONG_PROMPT_CHARS {
        SHORT_MATH_FORMATTING
    } else {
        MATH_FORMATTING
    };
    format!("{prompt}\n\n{instructions}")
}
