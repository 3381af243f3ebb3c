// src/services.rs

use super::config::PromptTemplate;

const INTERACTIVE_DIRECTIVES: &str = "\
PRIMARY DIRECTIVE: ANALYZE AND EXECUTE.
First, analyze the request.
- If it asks for a simple informational page (e.g. \"a portfolio\"), create a beautiful, minimal site with NO JAVASCRIPT.
- If it asks for a game or an interactive application (e.g. \"a playable tic-tac-toe game\", \"a todo list app\"), you MUST build a COMPLETE AND FULLY FUNCTIONAL application.

REQUIREMENTS FOR INTERACTIVE APPLICATIONS AND GAMES (HIGHEST PRIORITY):
It is not enough for the result to look correct. It MUST work.
- Functionality is paramount: the application must be fully playable or usable from start to finish. Every button, input, and game mechanic must work. Do not omit any logic.
- Write all necessary vanilla JavaScript inside a single <script> tag: state management (scores, turns, list items, game-over state), event listeners for every user action, and clear win/loss/draw conditions where a game has them.
- The UI must give feedback in real time, such as whose turn it is or that the game is over.
- The code must not require any external files besides Tailwind CSS.

FINAL CHECK: before answering, ask yourself whether a user could open this code in a browser and immediately use it without errors or missing features. The answer must be YES.

";

const MINIMAL_DIRECTIVES: &str = "\
Produce a beautiful, minimal informational page: clear typography, generous spacing, a sensible content structure for the subject. Use NO JAVASCRIPT at all.

";

const COMMON_RULES: &str = "\
CRUCIAL TECHNICAL RULES:
1. The entire response MUST be a single, self-contained <div> element.
2. Use ONLY Tailwind CSS classes for styling.
3. Do NOT include <html>, <head>, or <body> tags, and do NOT wrap the output in markdown formatting such as ```html fences.";

/// Interpolates the phrase verbatim into the active instruction template.
pub fn build_prompt(template: PromptTemplate, phrase: &str) -> String {
    let mut prompt = String::new();

    match template {
        PromptTemplate::Interactive => {
            prompt.push_str(
                "ROLE: You are an expert front-end developer specializing in fully interactive, \
                 self-contained web applications and games built with HTML, Tailwind CSS, and \
                 vanilla JavaScript.\n\n",
            );
            prompt.push_str(&format!(
                "TASK: Generate the complete, functional code for a web experience based on the \
                 user's request: \"{phrase}\".\n\n"
            ));
            prompt.push_str(INTERACTIVE_DIRECTIVES);
        }
        PromptTemplate::Minimal => {
            prompt.push_str(
                "ROLE: You are an expert front-end developer specializing in elegant static \
                 pages built with HTML and Tailwind CSS.\n\n",
            );
            prompt.push_str(&format!(
                "TASK: Generate a single static page about: \"{phrase}\".\n\n"
            ));
            prompt.push_str(MINIMAL_DIRECTIVES);
        }
    }

    prompt.push_str(COMMON_RULES);
    prompt
}

/// Best-effort cleanup of a completion the model wrapped in markdown fences
/// despite being told not to. Strips one leading ```html marker and one
/// trailing ``` marker, then trims surrounding whitespace. Interior content
/// is left untouched.
pub fn strip_fences(text: &str) -> String {
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_prefix("```html")
        .map(|rest| rest.strip_prefix('\n').unwrap_or(rest))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim().to_string()
}
