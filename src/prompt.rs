/// Instructions sent to every provider: one daily note, fixed format.
pub const NOTE_INSTRUCTIONS: &str = "You are a tutor generating a short daily learning digest for a full-stack engineer.

Requirements:
- Pick exactly 1 topic for today from these categories:
  - JavaScript / TypeScript fundamentals
  - React / Next.js features
  - Node.js backend techniques
  - API design and integration
  - DevOps (CI/CD, GitHub Actions, Docker, Kubernetes)
  - Cloud services (AWS, Azure, GCP)
  - Software architecture (monolith vs microservices, event-driven, serverless)
  - Design patterns (Factory, Observer, Singleton, etc.)
  - Modern front-end architecture (atomic design, state management, hooks)
  - New or emerging web platform features (edge functions, Bun, Vite, server components)

Format:
- **TL;DR (1-2 sentences)**: the big idea in plain English, simple and memorable
- **Explanation (3-6 sentences)**: how it works and why it is useful
- **Code Example**: a short, clear snippet

Use Markdown formatting (**bold**, `code`, ```fences```).
Keep it practical: something that helps in real projects and on the path to senior engineer.

Output only ONE daily note. Do not include multiple days.
Keep the explanation to no more than 6 sentences and the code example to about 20 lines.";

/// System turn for chat-style providers.
pub const CHAT_SYSTEM_PERSONA: &str = "You are a concise tutor for modern web development.";

/// The request every provider receives, in provider-neutral form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePrompt {
    pub instructions: String,
    pub system_persona: String,
}

impl NotePrompt {
    pub fn new(instructions: impl Into<String>, system_persona: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
            system_persona: system_persona.into(),
        }
    }

    pub fn daily() -> Self {
        Self::new(NOTE_INSTRUCTIONS, CHAT_SYSTEM_PERSONA)
    }
}

impl Default for NotePrompt {
    fn default() -> Self {
        Self::daily()
    }
}
