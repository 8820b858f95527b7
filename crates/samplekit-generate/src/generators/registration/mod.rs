use std::collections::HashSet;

use rand::{Rng, RngCore};
use serde_json::Value;
use tracing::{debug, warn};

use samplekit_core::SWEDISH_REGISTRATION_ALPHABET;

use crate::errors::GenerationError;
use crate::generators::primitives::{batch_with_capacity, count_too_large, pick_index};
use crate::generators::{GeneratedValue, Generator, GeneratorContext, GeneratorRegistry};
use crate::model::RegistrationBatch;
use crate::params::validate_params;

const SWEDISH_LETTERS: u32 = 3;
const SWEDISH_DIGIT_RANGE: u32 = 1000;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(SwedishRegistrationGenerator));
}

/// Template for registration numbers: `letters` symbols from `alphabet`
/// followed by a zero-padded number in `[0, digit_range)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationFormat {
    alphabet: Vec<char>,
    letters: u32,
    digit_range: u32,
}

impl RegistrationFormat {
    /// Swedish plates: three letters without I, Q, V and three digits.
    pub fn swedish() -> Self {
        Self {
            alphabet: SWEDISH_REGISTRATION_ALPHABET.chars().collect(),
            letters: SWEDISH_LETTERS,
            digit_range: SWEDISH_DIGIT_RANGE,
        }
    }

    pub fn new(alphabet: &str, letters: u32, digit_range: u32) -> Result<Self, GenerationError> {
        let symbols: Vec<char> = alphabet.chars().collect();
        if symbols.is_empty() {
            return Err(GenerationError::InvalidInput(
                "registration alphabet must not be empty".to_string(),
            ));
        }
        let distinct: HashSet<char> = symbols.iter().copied().collect();
        if distinct.len() != symbols.len() {
            return Err(GenerationError::InvalidInput(
                "registration alphabet must not repeat symbols".to_string(),
            ));
        }
        if letters == 0 {
            return Err(GenerationError::InvalidInput(
                "registration format needs at least one letter".to_string(),
            ));
        }
        if digit_range == 0 {
            return Err(GenerationError::InvalidInput(
                "registration digit range must be > 0".to_string(),
            ));
        }
        let format = Self {
            alphabet: symbols,
            letters,
            digit_range,
        };
        if format.code_space().is_none() {
            return Err(GenerationError::InvalidInput(
                "registration format has more than u64::MAX distinct values".to_string(),
            ));
        }
        Ok(format)
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn letters(&self) -> u32 {
        self.letters
    }

    pub fn digit_range(&self) -> u32 {
        self.digit_range
    }

    /// Number of distinct values the format can produce (saturating).
    pub fn domain_size(&self) -> usize {
        self.code_space()
            .and_then(|size| usize::try_from(size).ok())
            .unwrap_or(usize::MAX)
    }

    /// Distinct values as a `u64`; `None` when the format overflows it.
    fn code_space(&self) -> Option<u64> {
        (self.alphabet.len() as u64)
            .checked_pow(self.letters)?
            .checked_mul(u64::from(self.digit_range))
    }

    /// Decimal digits needed for the largest number, at least one.
    pub fn digit_width(&self) -> usize {
        let mut largest = self.digit_range.saturating_sub(1);
        let mut width = 1;
        while largest >= 10 {
            largest /= 10;
            width += 1;
        }
        width
    }

    /// Whether `value` is something this format could have produced.
    pub fn matches(&self, value: &str) -> bool {
        let chars: Vec<char> = value.chars().collect();
        let letters = self.letters as usize;
        if chars.len() != letters + self.digit_width() {
            return false;
        }
        let (prefix, digits) = chars.split_at(letters);
        if !prefix.iter().all(|symbol| self.alphabet.contains(symbol)) {
            return false;
        }
        if !digits.iter().all(char::is_ascii_digit) {
            return false;
        }
        digits
            .iter()
            .collect::<String>()
            .parse::<u32>()
            .is_ok_and(|number| number < self.digit_range)
    }

    /// Draw a candidate as its position in `[0, code_space)`: letter indices
    /// in base `alphabet.len()`, then the number in base `digit_range`.
    fn draw_code<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<u64, GenerationError> {
        let base = self.alphabet.len() as u64;
        let mut code = 0_u64;
        for _ in 0..self.letters {
            code = code * base + pick_index(rng, self.alphabet.len())? as u64;
        }
        let number = rng.random_range(0..self.digit_range);
        Ok(code * u64::from(self.digit_range) + u64::from(number))
    }

    /// Text form of a code from [`Self::draw_code`].
    fn render(&self, code: u64) -> String {
        let base = self.alphabet.len() as u64;
        let digit_range = u64::from(self.digit_range);
        let number = code % digit_range;
        let mut rest = code / digit_range;

        let mut letters = vec![' '; self.letters as usize];
        for slot in letters.iter_mut().rev() {
            *slot = self.alphabet[(rest % base) as usize];
            rest /= base;
        }

        let width = self.digit_width();
        let mut value: String = letters.into_iter().collect();
        value.push_str(&format!("{number:0width$}"));
        value
    }
}

impl Default for RegistrationFormat {
    fn default() -> Self {
        Self::swedish()
    }
}

/// Draw candidates until `count` distinct numbers exist.
///
/// Counts above the domain size are clamped to it. Retries grow sharply as
/// the set approaches the domain size. Seen candidates are tracked by code,
/// so each accepted number is stored once.
pub fn registration_numbers<R: Rng + ?Sized>(
    rng: &mut R,
    format: &RegistrationFormat,
    count: usize,
) -> Result<RegistrationBatch, GenerationError> {
    let domain_size = format.domain_size();
    let target = count.min(domain_size);
    let clamped_to = (count > domain_size).then_some(domain_size);
    if clamped_to.is_some() {
        warn!(
            event = "capacity_clamped",
            requested = count,
            domain_size,
            "registration count exceeds domain size"
        );
    }

    let mut seen: HashSet<u64> = HashSet::new();
    seen.try_reserve(target).map_err(|_| count_too_large(target))?;
    let mut numbers = batch_with_capacity(target)?;
    let mut attempts: u64 = 0;
    while numbers.len() < target {
        attempts += 1;
        let code = format.draw_code(rng)?;
        if seen.insert(code) {
            numbers.push(format.render(code));
        }
    }

    debug!(
        event = "registration_numbers_generated",
        count = numbers.len(),
        attempts,
        domain_size
    );

    Ok(RegistrationBatch {
        numbers,
        requested: count,
        clamped_to,
    })
}

struct SwedishRegistrationGenerator;

impl Generator for SwedishRegistrationGenerator {
    fn id(&self) -> &'static str {
        "registration.se"
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        validate_params(params, &[], "registration.se")?;
        let batch = registration_numbers(rng, &RegistrationFormat::swedish(), ctx.count)?;
        Ok(batch
            .into_numbers()
            .into_iter()
            .map(GeneratedValue::Text)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_width_follows_digit_range() {
        let width = |range| {
            RegistrationFormat::new("AB", 1, range)
                .map(|format| format.digit_width())
                .ok()
        };
        assert_eq!(width(1), Some(1));
        assert_eq!(width(10), Some(1));
        assert_eq!(width(11), Some(2));
        assert_eq!(width(1000), Some(3));
        assert_eq!(width(1001), Some(4));
    }

    #[test]
    fn codes_render_to_distinct_matching_numbers() {
        let format = RegistrationFormat::new("AB", 2, 3).expect("format");
        let rendered: HashSet<String> = (0..12).map(|code| format.render(code)).collect();
        assert_eq!(rendered.len(), 12);
        assert!(rendered.iter().all(|value| format.matches(value)));
        assert_eq!(format.render(0), "AA0");
        assert_eq!(format.render(11), "BB2");
    }

    #[test]
    fn swedish_codes_cover_first_and_last_numbers() {
        let format = RegistrationFormat::swedish();
        assert_eq!(format.render(0), "AAA000");
        assert_eq!(format.render(12_166_999), "ZZZ999");
    }

    #[test]
    fn formats_beyond_u64_are_rejected() {
        let result = RegistrationFormat::new(SWEDISH_REGISTRATION_ALPHABET, 20, 1000);
        assert!(matches!(result, Err(GenerationError::InvalidInput(_))));
    }

    #[test]
    fn swedish_domain_size() {
        assert_eq!(RegistrationFormat::swedish().domain_size(), 12_167_000);
    }

    #[test]
    fn matches_checks_alphabet_and_digits() {
        let format = RegistrationFormat::swedish();
        assert!(format.matches("ABC123"));
        assert!(format.matches("ZZZ007"));
        assert!(!format.matches("ABI123"));
        assert!(!format.matches("ABC12"));
        assert!(!format.matches("ABC12X"));
        assert!(!format.matches("abc123"));
    }
}
