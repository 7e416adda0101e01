//! Prompt formatter.
//!
//! Renders a story context into the natural-language instruction shared by
//! the chat-style providers. The output is a pure function of the context:
//! identical contexts render byte-identical prompts, which is what the
//! determinism tests diff against.
//!
//! Section order is fixed: protagonist, story universe, recent continuity
//! (or the beginning-of-adventure sentinel), today's performance, then the
//! generation constraints. Chapters are written in Brazilian Portuguese;
//! the scaffolding around them is English, matching what the original
//! service sent its providers.

use std::fmt::Write;

use crate::domain::models::StoryContext;

/// Sentinel used when the user has no prior chapters.
pub const BEGINNING_OF_ADVENTURE: &str = "This is the beginning of the adventure.";

/// Render the generation instruction for the given context.
pub fn render(context: &StoryContext) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Create the next chapter in {}'s epic adventure story.",
        context.protagonist
    );

    let _ = writeln!(out, "\nSTORY UNIVERSE: Blend elements from these favorite stories:");
    for story in &context.favorite_stories {
        match &story.narrative_tag {
            Some(tag) => {
                let _ = writeln!(out, "- {} ({}, {})", story.title, story.kind.as_str(), tag);
            }
            None => {
                let _ = writeln!(out, "- {} ({})", story.title, story.kind.as_str());
            }
        }
    }

    let _ = writeln!(out, "\nRECENT STORY CONTEXT:");
    if context.recent_chapters.is_empty() {
        let _ = writeln!(out, "{BEGINNING_OF_ADVENTURE}");
    } else {
        for chapter in &context.recent_chapters {
            let _ = writeln!(
                out,
                "{}: {} [Impact: {}]",
                chapter.date.format("%Y-%m-%d"),
                chapter.summary,
                chapter.impact.as_str()
            );
        }
    }

    let today = &context.today;
    let _ = writeln!(out, "\nTODAY'S PERFORMANCE:");
    let _ = writeln!(out, "- Impact Type: {}", today.impact.as_str());
    let _ = writeln!(out, "- Goals Set: {}", today.total_goals);
    let _ = writeln!(out, "- Goals Completed: {}", today.completed_goals);
    if !today.goals.is_empty() {
        let goals = today
            .goals
            .iter()
            .map(|g| {
                format!(
                    "\"{}\" ({})",
                    g.text,
                    if g.completed { "completed" } else { "not completed" }
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "- Specific Goals: {goals}");
    }

    let _ = writeln!(out, "\nREQUIREMENTS:");
    let _ = writeln!(out, "1. Continue seamlessly from the recent story context");
    let _ = writeln!(
        out,
        "2. Incorporate consequences based on today's performance ({})",
        today.impact.as_str()
    );
    let _ = writeln!(out, "3. Blend themes from the favorite stories naturally");
    let _ = writeln!(out, "4. Keep it engaging and around 150-200 words");
    let _ = writeln!(out, "5. End with intrigue for tomorrow");
    let _ = writeln!(
        out,
        "6. Make {} feel heroic and central to the story",
        context.protagonist
    );
    let _ = writeln!(out, "7. Write in Portuguese (Brazilian)");
    let _ = write!(out, "\nWrite the next chapter:");

    out
}
