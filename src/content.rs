use rand::seq::IndexedRandom;

pub const FORTUNES: &[&str] = &[
    "You will debug it in 5 minutes... after 55 minutes of panic.",
    "Your next commit will be clean and meaningful.",
    "A bug will disappear when you add one console.log().",
    "You passed the vibe check today. 😎",
];

pub const JOKES: &[&str] = &[
    "Why did the developer go broke? Because they used up all their cache.",
    "My code has two moods: works or why-is-this-happening.",
    "I told my program a joke... it just threw an exception.",
];

// mood -> (emoji, message)
const VIBES: &[(&str, &str, &str)] = &[
    ("happy", "😄", "Keep going - you're shipping greatness!"),
    ("tired", "🥱", "Hydrate. Stretch. Then commit."),
    ("stressed", "😵‍💫", "Breathe. One bug at a time."),
];

const UNKNOWN_MOOD: &str = "unknown";
const UNKNOWN_EMOJI: &str = "🤔";
const UNKNOWN_MESSAGE: &str = "Try mood=happy, tired, or stressed.";

pub const SECRET_CODE: &str = "411L";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vibe {
    pub mood: String,
    pub emoji: &'static str,
    pub message: &'static str,
}

// Uniformly random pick, empty string only for an empty pool
pub fn pick_random(pool: &[&'static str]) -> &'static str {
    pool.choose(&mut rand::rng()).copied().unwrap_or_default()
}

/// Case-insensitive mood lookup. Never fails: anything unrecognised,
/// including a missing or empty mood, gets the "unknown" vibe.
pub fn lookup_vibe(mood: Option<&str>) -> Vibe {
    let mood = mood.unwrap_or_default().to_lowercase();

    match VIBES.iter().find(|(name, _, _)| *name == mood) {
        Some(&(_, emoji, message)) => Vibe {
            mood,
            emoji,
            message,
        },
        None => Vibe {
            mood: if mood.is_empty() {
                UNKNOWN_MOOD.to_string()
            } else {
                mood
            },
            emoji: UNKNOWN_EMOJI,
            message: UNKNOWN_MESSAGE,
        },
    }
}

// Exact, case-sensitive match
pub fn check_secret(code: Option<&str>) -> bool {
    code == Some(SECRET_CODE)
}
