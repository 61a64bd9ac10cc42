/// Delay between consecutive words, in seconds.
pub const WORD_STAGGER: f32 = 0.1;
/// Time for one word to fully appear, in seconds.
pub const WORD_DURATION: f32 = 0.8;
/// Distance a word rises while appearing, in pixels.
pub const RISE: f32 = 50.0;

/// One word of a [`TextReveal`] and when it starts appearing.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealWord {
    pub text: String,
    pub start: f32,
}

/// Headline that fades words in one after another while they rise.
#[derive(Clone, Debug, PartialEq)]
pub struct TextReveal {
    words: Vec<RevealWord>,
}

impl TextReveal {
    /// Split `text` on whitespace; word `i` starts at `delay + i * WORD_STAGGER`.
    pub fn new(text: &str, delay: f32) -> Self {
        let words = text
            .split_whitespace()
            .enumerate()
            .map(|(i, w)| RevealWord {
                text: w.to_string(),
                start: delay + i as f32 * WORD_STAGGER,
            })
            .collect();
        Self { words }
    }

    pub fn words(&self) -> &[RevealWord] {
        &self.words
    }

    /// Eased progress of word `index` at time `t` seconds, in `[0, 1]`.
    pub fn progress(&self, index: usize, t: f32) -> f32 {
        let Some(word) = self.words.get(index) else {
            return 0.0;
        };
        let linear = ((t - word.start) / WORD_DURATION).clamp(0.0, 1.0);
        ease_out_cubic(linear)
    }

    /// Opacity of word `index` at time `t`.
    pub fn opacity(&self, index: usize, t: f32) -> f32 {
        self.progress(index, t)
    }

    /// Vertical offset of word `index` at time `t`; `RISE` before it starts,
    /// zero once settled.
    pub fn offset(&self, index: usize, t: f32) -> f32 {
        RISE * (1.0 - self.progress(index, t))
    }

    /// Time at which the last word has settled.
    pub fn finish_time(&self) -> f32 {
        self.words.last().map(|w| w.start + WORD_DURATION).unwrap_or(0.0)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
