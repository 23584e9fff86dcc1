pub const MAX_STARS: u8 = 5;

/// Moves that cost one star once the first two grace bands are used up.
const MOVES_PER_STAR: u32 = 8;

/// `ceil(min(5, max(0, 7 - moves / 8)))`, computed exactly in integers.
pub fn star_rating(moves: u32) -> u8 {
    let raw = 7u32.saturating_sub(moves / MOVES_PER_STAR);
    raw.min(MAX_STARS as u32) as u8
}

/// Filled stars followed by empty ones, always five glyphs long.
pub fn star_string(rating: u8) -> String {
    let filled = rating.min(MAX_STARS) as usize;
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(MAX_STARS as usize - filled));
    stars
}
