use feedcal_core::constants::FEED_ID_PREFIX;

/// Number of random characters appended to synthesized identifiers.
const RANDOM_SUFFIX_LEN: usize = 6;

/// Produces identifiers for events whose feed entry carries no `UID`.
pub trait IdGenerator {
    fn generate(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String,
{
    fn generate(&self) -> String {
        self()
    }
}

/// Wall-clock plus random identifiers: `ical-<unix millis>-<6 hex chars>`.
///
/// Not stable across runs: parsing the same feed twice yields different ids
/// for `UID`-less events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIdGenerator;

impl IdGenerator for TimestampIdGenerator {
    fn generate(&self) -> String {
        let millis = chrono::Utc::now().timestamp_millis();
        let random = uuid::Uuid::new_v4().simple().to_string();
        let suffix: String = random.chars().take(RANDOM_SUFFIX_LEN).collect();
        format!("{FEED_ID_PREFIX}{millis}-{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_synthesized_shape(id: &str) {
        let rest = id.strip_prefix(FEED_ID_PREFIX).unwrap();
        let (digits, suffix) = rest.split_once('-').unwrap();
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()), "{id}");
        assert_eq!(suffix.len(), RANDOM_SUFFIX_LEN, "{id}");
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()), "{id}");
    }

    #[test]
    fn timestamp_ids_have_expected_shape() {
        assert_synthesized_shape(&TimestampIdGenerator.generate());
    }

    #[test]
    fn timestamp_ids_differ_between_calls() {
        let first = TimestampIdGenerator.generate();
        let second = TimestampIdGenerator.generate();
        assert_ne!(first, second);
    }

    #[test]
    fn closures_are_generators() {
        let stub = || "stub-id".to_string();
        assert_eq!(stub.generate(), "stub-id");
    }
}
