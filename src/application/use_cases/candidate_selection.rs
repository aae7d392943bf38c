//! Choosing one downloadable reference from scraped image results.
//!
//! A result is first picked at random from the leading `random_window`
//! candidates. When its primary reference cannot be downloaded directly,
//! [`FALLBACK_STRATEGIES`] are tried in order over the leading
//! `fallback_window` candidates; the first reference any strategy yields wins.

use rand::Rng;

use crate::domain::image_candidate::ImageCandidate;

/// Chooses an index in `0..len`. `len` is always > 0.
pub trait IndexPicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Uniform random pick
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl IndexPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

impl<F> IndexPicker for F
where
    F: Fn(usize) -> usize + Send + Sync,
{
    fn pick(&self, len: usize) -> usize {
        self(len)
    }
}

/// One way of reading a downloadable reference off a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// `src`, when not inline data
    Primary,
    /// `data-src`, when not inline data
    LazyLoad,
}

pub const FALLBACK_STRATEGIES: [ExtractionStrategy; 2] =
    [ExtractionStrategy::Primary, ExtractionStrategy::LazyLoad];

impl ExtractionStrategy {
    pub fn extract<'a>(&self, candidate: &'a ImageCandidate) -> Option<&'a str> {
        match self {
            ExtractionStrategy::Primary => candidate.usable_primary(),
            ExtractionStrategy::LazyLoad => candidate.usable_secondary(),
        }
    }

    /// First reference this strategy yields, scanning in page order
    pub fn scan<'a>(&self, candidates: &'a [ImageCandidate]) -> Option<&'a str> {
        candidates.iter().find_map(|c| self.extract(c))
    }
}

/// Window sizes for [`select_reference`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionWindows {
    pub random: usize,
    pub fallback: usize,
}

impl Default for SelectionWindows {
    fn default() -> Self {
        Self {
            random: 5,
            fallback: 10,
        }
    }
}

pub fn select_reference(
    candidates: &[ImageCandidate],
    picker: &dyn IndexPicker,
    windows: SelectionWindows,
) -> Option<String> {
    if candidates.is_empty() {
        return None;
    }

    let window = windows.random.max(1).min(candidates.len());
    let index = picker.pick(window).min(window - 1);
    if let Some(reference) = candidates[index].usable_primary() {
        return Some(reference.to_string());
    }

    let fallback = &candidates[..windows.fallback.min(candidates.len())];
    FALLBACK_STRATEGIES
        .iter()
        .find_map(|strategy| strategy.scan(fallback))
        .map(str::to_string)
}
