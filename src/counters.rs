//! Count-up animation logic for the hero statistics.
//!
//! Everything here is plain data, no DOM. The `StatCounter` component feeds
//! `CounterAnimation::tick` from a repeating timer and writes the returned
//! text into its display state.

/// Total animation length in milliseconds.
pub const DURATION_MS: u32 = 2000;
/// Interval between display updates in milliseconds.
pub const TICK_MS: u32 = 50;

/// How a counter renders its running value, decided once when the target
/// text is parsed and never re-evaluated per tick.
#[derive(Debug, Clone, PartialEq)]
pub enum SuffixFormat {
    /// Suffix contained a `B`: one decimal place plus a literal `B`.
    /// Any other suffix characters are dropped ("2.5B+" renders as "2.5B").
    Billions,
    /// Suffix contained a `%`: nearest integer plus a literal `%`.
    Percent,
    /// Anything else: nearest integer plus the original suffix verbatim,
    /// whitespace included.
    Verbatim(String),
}

impl SuffixFormat {
    pub fn render(&self, value: f64) -> String {
        match self {
            SuffixFormat::Billions => format!("{:.1}B", round_to_tenth(value)),
            SuffixFormat::Percent => format!("{}%", value.round() as i64),
            SuffixFormat::Verbatim(suffix) => format!("{}{}", value.round() as i64, suffix),
        }
    }
}

// Rounding is pinned to half away from zero so the halfway frame of "2.5B"
// shows "1.3B", matching what the site always displayed.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Target value and display format parsed from a statistic's markup text.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSpec {
    pub target: f64,
    pub format: SuffixFormat,
}

impl CounterSpec {
    /// Parses display text like `"2.5B"`, `"85%"` or `"120 users"`.
    ///
    /// Returns `None` when the text holds no parseable number; the caller
    /// leaves such a counter untouched rather than failing loudly, so one
    /// malformed statistic never breaks its siblings.
    pub fn parse(text: &str) -> Option<Self> {
        let numeric: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let target: f64 = numeric.parse().ok()?;

        let suffix: String = text
            .chars()
            .filter(|c| !c.is_ascii_digit() && *c != '.')
            .collect();
        let format = if suffix.contains('B') {
            SuffixFormat::Billions
        } else if suffix.contains('%') {
            SuffixFormat::Percent
        } else {
            SuffixFormat::Verbatim(suffix)
        };

        Some(CounterSpec { target, format })
    }
}

/// Running state of one count-up. Each counter owns its own record and its
/// own timer; nothing is shared between counters.
#[derive(Debug)]
pub struct CounterAnimation {
    spec: CounterSpec,
    current: f64,
    step: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(spec: CounterSpec) -> Self {
        let step = spec.target / (DURATION_MS as f64 / TICK_MS as f64);
        CounterAnimation {
            spec,
            current: 0.0,
            step,
            done: false,
        }
    }

    /// Advances one tick and returns the text to display for it.
    ///
    /// The running value never overshoots: once it reaches the target it is
    /// clamped to exactly the parsed value and `is_done` turns true, at
    /// which point the owning timer drops itself.
    pub fn tick(&mut self) -> String {
        self.current += self.step;
        if self.current >= self.spec.target {
            self.current = self.spec.target;
            self.done = true;
        }
        self.spec.format.render(self.current)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(animation: &mut CounterAnimation) -> Vec<String> {
        let mut frames = Vec::new();
        while !animation.is_done() {
            frames.push(animation.tick());
            assert!(frames.len() <= 100, "animation failed to converge");
        }
        frames
    }

    #[test]
    fn parses_billions_suffix() {
        let spec = CounterSpec::parse("2.5B").unwrap();
        assert_eq!(spec.target, 2.5);
        assert_eq!(spec.format, SuffixFormat::Billions);
    }

    #[test]
    fn parses_percent_suffix() {
        let spec = CounterSpec::parse("85%").unwrap();
        assert_eq!(spec.target, 85.0);
        assert_eq!(spec.format, SuffixFormat::Percent);
    }

    #[test]
    fn parses_verbatim_suffix_with_whitespace() {
        let spec = CounterSpec::parse("120 users").unwrap();
        assert_eq!(spec.target, 120.0);
        assert_eq!(spec.format, SuffixFormat::Verbatim(" users".to_string()));
    }

    #[test]
    fn unparseable_text_is_skipped() {
        assert_eq!(CounterSpec::parse("N/A"), None);
        assert_eq!(CounterSpec::parse(""), None);
        assert_eq!(CounterSpec::parse("coming soon"), None);
    }

    #[test]
    fn billions_animation_step_and_halfway_frame() {
        let spec = CounterSpec::parse("2.5B").unwrap();
        let mut animation = CounterAnimation::new(spec);
        assert_eq!(animation.step, 0.0625);

        for _ in 0..19 {
            animation.tick();
        }
        // 20 * 0.0625 = 1.25 exactly; half away from zero gives 1.3
        assert_eq!(animation.tick(), "1.3B");
    }

    #[test]
    fn billions_animation_lands_exactly_on_target() {
        let spec = CounterSpec::parse("2.5B").unwrap();
        let mut animation = CounterAnimation::new(spec);
        let frames = run_to_completion(&mut animation);
        assert_eq!(frames.last().unwrap(), "2.5B");
        assert_eq!(frames.len(), 40);
    }

    #[test]
    fn percent_animation_first_tick_and_final_frame() {
        let spec = CounterSpec::parse("85%").unwrap();
        let mut animation = CounterAnimation::new(spec);
        assert_eq!(animation.step, 2.125);
        assert_eq!(animation.tick(), "2%");

        let mut frames = run_to_completion(&mut animation);
        assert_eq!(frames.pop().unwrap(), "85%");
    }

    #[test]
    fn rendered_values_are_monotonic() {
        let spec = CounterSpec::parse("85%").unwrap();
        let mut animation = CounterAnimation::new(spec);
        let mut previous = -1i64;
        while !animation.is_done() {
            let frame = animation.tick();
            let value: i64 = frame.trim_end_matches('%').parse().unwrap();
            assert!(value >= previous, "display went backwards: {} after {}", value, previous);
            previous = value;
        }
        assert_eq!(previous, 85);
    }

    #[test]
    fn verbatim_suffix_survives_to_final_frame() {
        let spec = CounterSpec::parse("120 users").unwrap();
        let mut animation = CounterAnimation::new(spec);
        let frames = run_to_completion(&mut animation);
        assert_eq!(frames.last().unwrap(), "120 users");
    }

    #[test]
    fn zero_target_completes_on_first_tick() {
        let spec = CounterSpec::parse("0%").unwrap();
        let mut animation = CounterAnimation::new(spec);
        assert_eq!(animation.tick(), "0%");
        assert!(animation.is_done());
    }

    #[test]
    fn billions_branch_discards_extra_suffix_characters() {
        // Longstanding behavior: only the literal B is re-appended, so the
        // "+" from the markup is dropped on every frame.
        let spec = CounterSpec::parse("2.5B+").unwrap();
        assert_eq!(spec.format, SuffixFormat::Billions);
        let mut animation = CounterAnimation::new(spec);
        let frames = run_to_completion(&mut animation);
        assert_eq!(frames.last().unwrap(), "2.5B");
    }
}
