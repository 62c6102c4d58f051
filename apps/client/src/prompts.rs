//! Prompt builders for the tool surfaces.
//!
//! Each tool assembles a markdown-formatted instruction block and sends it
//! through `ContentClient::generate`. The texts are product copy; optional
//! sections are included only when the caller supplied them.

/// Code generator: purpose plus target language.
pub fn code_generation(purpose: &str, language: &str) -> String {
    format!(
        r#"Generate code for the following purpose: "{purpose}" using the programming language: {language}.
Format your response using Markdown.
Provide:
1. A brief explanation of the code.
2. The complete, functional code inside a ```{fence} code block.
3. Comments explaining key parts within the code.
4. Any setup instructions if needed.
5. Example usage if applicable.
Make sure the code is production-ready and follows best practices."#,
        fence = language.to_lowercase()
    )
}

/// Code explainer: `level` is the requested depth, e.g. "Step-by-step guide"
/// or "High-level overview"; `focus` narrows the explanation when given.
pub fn explanation(code: &str, level: &str, focus: Option<&str>) -> String {
    let focus_line = optional_line(focus, "Additionally, please address this specific question: ");
    format!(
        r#"Please explain the following code in a clear, {level}.

Code to explain:
```
{code}
```
{focus_line}
Format your response using Markdown. Make the explanation easy to understand for developers of all levels."#,
        level = level.to_lowercase()
    )
}

/// Bug detector: code plus the observed error, with optional extra context.
pub fn bug_detection(code: &str, error_message: &str, details: Option<&str>) -> String {
    let details_line = optional_line(details, "Additional details/expected outcome: ");
    format!(
        r#"Please analyze and help debug the following code.

Code:
```
{code}
```
Error message:
{error_message}
{details_line}
- Identify the most likely cause of the error, suggest a fix, and briefly explain your reasoning.
- Format your answer in Markdown, using clear section headings ("Diagnosis", "Solution", "Explanation", etc.).
- Use code blocks for any corrected code. Bullet lists are encouraged when needed."#
    )
}

/// Code converter: source code plus the target language.
pub fn conversion(code: &str, target_language: &str) -> String {
    format!(
        r#"Convert the following code to {target_language} and explain any important changes.
- Output first the converted code as a code block.
- Then provide a sectioned Markdown explanation of significant transformations, language-specific differences, and usage notes.
- Use headings for "Converted Code" and "Explanation".

Source code:
```
{code}
```"#
    )
}

/// Documentation generator: `doc_type` names the flavour (API reference,
/// README, inline comments); goal and notes are optional context.
pub fn documentation(code: &str, doc_type: &str, goal: Option<&str>, notes: Option<&str>) -> String {
    let goal_line = optional_line(goal, "Project goal: ");
    let notes_line = optional_line(notes, "Additional details: ");
    format!(
        r#"Generate clear, well-structured documentation for the following code.

Documentation type: {doc_type}
{goal_line}{notes_line}
Code to document:
```
{code}
```

- Output the documentation in Markdown, with relevant section headings as needed.
- Include tables, bullet points, and code blocks where it makes the documentation clearer.
- Structure your answer to be easy to read both for beginners and experienced developers."#
    )
}

/// Refactoring tool: code plus the stated improvement goal.
pub fn refactoring(code: &str, goal: &str, details: Option<&str>) -> String {
    let details_line = optional_line(details, "Additional information/guidelines: ");
    format!(
        r#"Please refactor the following code to achieve the stated improvements.

Goal: {goal}
{details_line}
Code to refactor:
```
{code}
```

- Refactor and optimize the code as needed to achieve the goal.
- Output the refactored code first in a code block.
- Then provide a clear, sectioned Markdown explanation for changes made, their impact, and any best practices followed.
- Use section headings like "Refactored Code", "Key Improvements", and "Explanation"."#
    )
}

/// Code completion: partial code, its language, and what the user is after.
pub fn completion(code: &str, language: &str, goal: &str) -> String {
    format!(
        r#"Given the following code (in {language}), please offer a smart, context-aware completion to help the user achieve:
"{goal}".

Current code:
```
{code}
```

- If useful, include additional explanation, comments, and suggestions.
- Output your answer in clear Markdown, using:
  - **Section headings** for "Completed Code", "Explanation", etc.
  - Code blocks where relevant.
  - Bullet points or tables if that will help understanding.
- Your answer should be readable and visually clear, ready for direct use or learning."#
    )
}

/// Renders `prefix` + value + newline, or nothing when the value is absent
/// or blank.
fn optional_line(value: Option<&str>, prefix: &str) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => format!("{prefix}{value}\n"),
        _ => String::new(),
    }
}
