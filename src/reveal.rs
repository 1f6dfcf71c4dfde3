//! Text splitting and stagger timing for the vertical cut reveal.

use rand::Rng;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitBy {
    Words,
    Characters,
    Lines,
    Separator(String),
}

impl Default for SplitBy {
    fn default() -> Self {
        SplitBy::Words
    }
}

/// One clipped word. Outside of `Characters` mode it holds a single element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealWord {
    pub elements: Vec<String>,
    pub needs_space: bool,
}

pub fn split_text(text: &str, split_by: &SplitBy) -> Vec<RevealWord> {
    let parts: Vec<&str> = match split_by {
        SplitBy::Words | SplitBy::Characters => text.split(' ').collect(),
        SplitBy::Lines => text.split('\n').collect(),
        SplitBy::Separator(sep) if sep.is_empty() => text.graphemes(true).collect(),
        SplitBy::Separator(sep) => text.split(sep.as_str()).collect(),
    };
    let last = parts.len().saturating_sub(1);

    parts
        .into_iter()
        .enumerate()
        .map(|(i, part)| RevealWord {
            elements: match split_by {
                SplitBy::Characters => part.graphemes(true).map(str::to_string).collect(),
                _ => vec![part.to_string()],
            },
            needs_space: i != last,
        })
        .collect()
}

/// Element count the stagger is spread over. Character mode also counts the
/// spaces between words.
pub fn total_elements(words: &[RevealWord], split_by: &SplitBy) -> usize {
    match split_by {
        SplitBy::Characters => words
            .iter()
            .map(|w| w.elements.len() + usize::from(w.needs_space))
            .sum(),
        _ => words.len(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaggerFrom {
    First,
    Last,
    Center,
    Random,
    Index(usize),
}

impl Default for StaggerFrom {
    fn default() -> Self {
        StaggerFrom::First
    }
}

/// Delay in seconds before element `index` starts moving.
pub fn stagger_delay<R: Rng + ?Sized>(
    index: usize,
    total: usize,
    from: StaggerFrom,
    step: f64,
    rng: &mut R,
) -> f64 {
    let distance = |origin: usize| origin.abs_diff(index) as f64 * step;
    match from {
        StaggerFrom::First => index as f64 * step,
        StaggerFrom::Last => total.saturating_sub(1).saturating_sub(index) as f64 * step,
        StaggerFrom::Center => distance(total / 2),
        StaggerFrom::Random => distance(if total == 0 { 0 } else { rng.gen_range(0..total) }),
        StaggerFrom::Index(origin) => distance(origin),
    }
}

/// Strips punctuation so "Talent-Share," still matches a highlight entry.
pub fn highlight_token(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || ('\u{C0}'..='\u{24F}').contains(c))
        .collect()
}

/// Spring parameters mapped onto a CSS animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringTransition {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Seconds before the first element moves.
    pub delay: f64,
}

impl Default for SpringTransition {
    fn default() -> Self {
        Self {
            stiffness: 190.0,
            damping: 22.0,
            mass: 1.0,
            delay: 0.0,
        }
    }
}

impl SpringTransition {
    pub fn new(stiffness: f64, damping: f64, delay: f64) -> Self {
        Self {
            stiffness,
            damping,
            delay,
            ..Self::default()
        }
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Approximate time (seconds) for the spring to settle within 2%.
    pub fn duration(&self) -> f64 {
        if self.damping <= 0.0 {
            return 1.0;
        }
        (8.0 * self.mass / self.damping).max(0.1)
    }

    pub fn css_easing(&self) -> &'static str {
        if self.damping_ratio() < 0.7 {
            "cubic-bezier(0.34, 1.56, 0.64, 1)"
        } else {
            "cubic-bezier(0.22, 1, 0.36, 1)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn splits_words_with_spacing() {
        let words = split_text("Where live sessions", &SplitBy::Words);
        let elements: Vec<&str> = words.iter().map(|w| w.elements[0].as_str()).collect();
        assert_eq!(elements, ["Where", "live", "sessions"]);
        assert_eq!(
            words.iter().map(|w| w.needs_space).collect::<Vec<_>>(),
            [true, true, false]
        );
        assert_eq!(total_elements(&words, &SplitBy::Words), 3);
    }

    #[test]
    fn splits_characters_by_grapheme() {
        let words = split_text("né 👍🏽", &SplitBy::Characters);
        assert_eq!(words[0].elements, ["n", "é"]);
        assert_eq!(words[1].elements, ["👍🏽"]);
        // two glyphs, one space, one glyph
        assert_eq!(total_elements(&words, &SplitBy::Characters), 4);
    }

    #[test]
    fn splits_lines_and_separators() {
        assert_eq!(split_text("a\nb", &SplitBy::Lines).len(), 2);
        let parts = split_text("a|b|c", &SplitBy::Separator("|".into()));
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].elements, ["c"]);
    }

    #[test]
    fn stagger_orders() {
        let mut rng = StdRng::seed_from_u64(7);
        let d = |i, from, rng: &mut StdRng| stagger_delay(i, 5, from, 0.5, rng);
        assert_eq!(d(3, StaggerFrom::First, &mut rng), 1.5);
        assert_eq!(d(3, StaggerFrom::Last, &mut rng), 0.5);
        assert_eq!(d(0, StaggerFrom::Center, &mut rng), 1.0);
        assert_eq!(d(2, StaggerFrom::Center, &mut rng), 0.0);
        assert_eq!(d(1, StaggerFrom::Index(4), &mut rng), 1.5);

        for i in 0..5 {
            let delay = d(i, StaggerFrom::Random, &mut rng);
            assert!((0.0..=2.0).contains(&delay));
        }
        assert_eq!(stagger_delay(0, 0, StaggerFrom::Random, 0.5, &mut rng), 0.0);
    }

    #[test]
    fn highlight_tokens_drop_punctuation() {
        assert_eq!(highlight_token("Talent-Share,"), "Talent-Share");
        assert_eq!(highlight_token("orbit."), "orbit");
        assert_eq!(highlight_token("Café!"), "Café");
    }

    #[test]
    fn spring_maps_to_css() {
        let tagline = SpringTransition::new(200.0, 28.0, 0.2);
        assert!((tagline.duration() - 8.0 / 28.0).abs() < 1e-9);
        assert_eq!(tagline.css_easing(), "cubic-bezier(0.22, 1, 0.36, 1)");

        let bouncy = SpringTransition::new(400.0, 10.0, 0.0);
        assert!(bouncy.damping_ratio() < 0.7);
        assert_eq!(bouncy.css_easing(), "cubic-bezier(0.34, 1.56, 0.64, 1)");
    }
}
