//! Prompt construction
//!
//! Each mode gets a natural-language task statement plus the exact target
//! JSON shape and an explicit JSON-only instruction. Topic and message are
//! untrusted free text and are interpolated as-is; the provider reads them
//! as natural language, not code.

use crate::models::Mode;

/// Build the prompt for one generation request. Deterministic: same inputs
/// produce the same prompt.
pub fn build_prompt(mode: Mode, topic: &str, qcount: usize, message: Option<&str>) -> String {
    match mode {
        Mode::Roadmap => format!(
            r#"Create a detailed learning roadmap for "{topic}".

Respond in JSON ONLY in this exact format:
{{
  "roadmap": [
    {{
      "step": "Topic name",
      "subtopics": ["Subtopic 1", "Subtopic 2"]
    }}
  ]
}}

IMPORTANT:
- JSON only
- No explanation
- No markdown
"#
        ),
        Mode::Notes => format!(
            r#"Create short, clear study notes for "{topic}".

Respond in JSON ONLY:
{{
  "notes": "your notes text here"
}}

IMPORTANT:
- JSON only
- No explanation
- No markdown
"#
        ),
        Mode::Quiz => format!(
            r#"Create {qcount} MCQ questions for "{topic}".

Respond in JSON ONLY:
{{
  "quiz": [
    {{
      "q": "Question text",
      "options": ["A", "B", "C", "D"],
      "answer": 0,
      "explanation": "Why this answer is correct"
    }}
  ]
}}

IMPORTANT:
- JSON only
- No explanation
- No markdown
"#
        ),
        Mode::Resources => format!(
            r#"Recommend {qcount} high-quality learning resources for "{topic}".

Respond in JSON ONLY:
{{
  "resources": [
    {{
      "title": "Resource title",
      "url": "https://example.com",
      "type": "article|video|book|course",
      "short_desc": "One-line description"
    }}
  ]
}}

IMPORTANT:
- JSON only
- No explanation
- No markdown
"#
        ),
        Mode::Chat => {
            let message = message.unwrap_or("");
            format!(
                r#"You are a study tutor helping with "{topic}".

Student message: {message}

Respond in JSON ONLY:
{{
  "reply": "your reply text here"
}}

IMPORTANT:
- JSON only
- No explanation
- No markdown
"#
            )
        }
        Mode::Combined => format!(
            r#"Create a roadmap, notes, a quiz, and learning resources for "{topic}".

Respond in JSON ONLY:
{{
  "roadmap": [],
  "notes": "",
  "quiz": [],
  "resources": []
}}

IMPORTANT:
- JSON only
- No explanation
- No markdown
"#
        ),
    }
}
