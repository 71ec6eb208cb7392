//! Cosmetic chapter decorations keyed by block position. Pure lookups.

const TITLES: [&str; 10] = [
    "The Beginning",
    "Your Special Day",
    "Dreams & Reality",
    "My Mistakes",
    "Trust & Understanding",
    "A Little Cheesiness",
    "Gratitude",
    "Our Forever",
    "My Conditional Promise",
    "The Truth That Never Changes",
];

const EMOJIS: [&str; 10] = [
    "🌸", "🎂🎉", "🎓✨", "💔🙏", "🤝❤️", "😘💕", "🌹", "🕰️❤️", "🌈🤞", "💖",
];

// Shown once a chapter finishes typing.
const FLOURISHES: [&str; 10] = [
    "💫🌸", "🎂👑", "🎓🏡", "🙏💗", "💍👩‍❤️‍👨", "✨⏸️", "🤗🌍", "🥂📖", "🤝✍️", "❤️✨",
];

pub const FALLBACK_TITLE: &str = "Our Story";
pub const FALLBACK_EMOJI: &str = "💕";

pub fn title(order: usize) -> &'static str {
    TITLES.get(order).copied().unwrap_or(FALLBACK_TITLE)
}

pub fn emoji(order: usize) -> &'static str {
    EMOJIS.get(order).copied().unwrap_or(FALLBACK_EMOJI)
}

pub fn flourish(order: usize) -> Option<&'static str> {
    FLOURISHES.get(order).copied()
}

/// "Chapter N" (one-based), or "Final Chapter" for the last block.
pub fn heading(order: usize, total: usize) -> String {
    if is_last(order, total) {
        "Final Chapter".to_string()
    } else {
        format!("Chapter {}", order + 1)
    }
}

pub fn is_first(order: usize) -> bool {
    order == 0
}

pub fn is_last(order: usize, total: usize) -> bool {
    total > 0 && order + 1 == total
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/chapter.rs"]
mod tests;
