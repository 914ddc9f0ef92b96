//! Random quote selection for the display area

use crate::types::quote::Quote;

/// Shown when the current filter matches nothing
pub const EMPTY_DISPLAY: &str = "No quotes to display.";

/// Random index in `0..len` (`len` must be non-zero)
///
/// Draws from a v4 uuid, which is OS-random and already a dependency. The
/// modulo bias over 128 bits is negligible for picking a quote.
fn random_index(len: usize) -> usize {
    (uuid::Uuid::new_v4().as_u128() % len as u128) as usize
}

/// Pick a random quote from `candidates`
pub fn random_quote<'a>(candidates: &[&'a Quote]) -> Option<&'a Quote> {
    pick_with(candidates, random_index)
}

/// Pick a quote using the given index source
pub fn pick_with<'a>(
    candidates: &[&'a Quote],
    index: impl FnOnce(usize) -> usize,
) -> Option<&'a Quote> {
    if candidates.is_empty() {
        return None;
    }
    candidates.get(index(candidates.len())).copied()
}

/// Text for the display area
pub fn render(quote: Option<&Quote>) -> String {
    match quote {
        Some(quote) => quote.to_string(),
        None => EMPTY_DISPLAY.to_string(),
    }
}
