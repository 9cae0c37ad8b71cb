//! Identifier seed derivation and collision-free name resolution.
//!
//! Resolution is a pure function over two predicates so it can be tested
//! without a context class or registry behind it. The registry supplies the
//! predicates and owns the surrounding critical section.

/// Seed used when the canonical step text cannot serve as an identifier.
pub const FALLBACK_SEED: &str = "step_definition1";

/// Derive the identifier seed for a pattern's canonical text.
///
/// The transformer is trusted to emit identifier-safe canonical text, so
/// the only normalisation applied is case-folding the first character.
/// Text that is empty or not a valid identifier (for example, purely
/// numeric) falls back to [`FALLBACK_SEED`].
///
/// # Examples
///
/// ```
/// use stepsmith::derive_seed;
///
/// assert_eq!(derive_seed("IHaveABasket"), "iHaveABasket");
/// assert_eq!(derive_seed("i_have_a_basket"), "i_have_a_basket");
/// assert_eq!(derive_seed(""), "step_definition1");
/// assert_eq!(derive_seed("12345"), "step_definition1");
/// ```
#[must_use]
pub fn derive_seed(canonical_text: &str) -> String {
    if is_identifier(canonical_text) {
        lowercase_first(canonical_text)
    } else {
        FALLBACK_SEED.to_string()
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(|first| {
        (first == '_' || first.is_ascii_alphabetic())
            && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
    })
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut lowered = String::with_capacity(text.len());
        lowered.extend(first.to_lowercase());
        lowered.push_str(chars.as_str());
        lowered
    })
}

/// Resolve `seed` into a name neither predicate objects to.
///
/// Candidates are filtered in two stages sharing one suffix counter: first
/// past `is_declared` (methods the target context already has), then past
/// `is_taken_by_other` (names the current run assigned to *different*
/// patterns). Each rejection strips the candidate's trailing digit run and
/// appends the next counter value. The second predicate is re-evaluated in
/// full after every bump, so a candidate is only accepted once the entire
/// current entry set clears it, not merely the entry that first collided.
///
/// The counter starts at 2 unless the seed itself ends in digits, in which
/// case counting continues from that value. The loop carries no upper
/// bound; both blocking sets are finite, so it terminates.
///
/// # Examples
///
/// ```
/// use stepsmith::resolve_unique_name;
///
/// let taken = ["i_have_a_basket"];
/// let name = resolve_unique_name(
///     "i_have_a_basket",
///     |candidate| taken.contains(&candidate),
///     |_| false,
/// );
/// assert_eq!(name, "i_have_a_basket2");
/// ```
#[must_use]
pub fn resolve_unique_name(
    seed: &str,
    is_declared: impl Fn(&str) -> bool,
    is_taken_by_other: impl Fn(&str) -> bool,
) -> String {
    let mut counter = first_free_suffix(seed);
    let mut candidate = seed.to_string();
    while is_declared(&candidate) {
        candidate = bump(&candidate, &mut counter);
    }
    while is_taken_by_other(&candidate) {
        candidate = bump(&candidate, &mut counter);
    }
    candidate
}

/// First suffix value to try once the seed itself is rejected.
fn first_free_suffix(seed: &str) -> u64 {
    trailing_digits(seed)
        .and_then(|digits| digits.parse::<u64>().ok())
        .map_or(2, |value| value.saturating_add(1))
}

fn trailing_digits(text: &str) -> Option<&str> {
    let base = text.trim_end_matches(|c: char| c.is_ascii_digit());
    text.strip_prefix(base).filter(|digits| !digits.is_empty())
}

fn bump(candidate: &str, counter: &mut u64) -> String {
    let base = candidate.trim_end_matches(|c: char| c.is_ascii_digit());
    let next = format!("{base}{counter}");
    *counter = counter.saturating_add(1);
    next
}
