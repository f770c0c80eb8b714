//! Session configuration accepted by `SystemController::start`

use crate::controller::error::{ControlError, ControlResult};
use crate::core::validation::validate_positive;

/// Worker counts and buffer sizing for one session.
///
/// Out-of-range values are a configuration error rejected by
/// [`SessionConfig::validate`]; they are never silently clamped.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub num_producers: usize,
    pub num_consumers: usize,
    pub items_per_producer: u64,
    pub buffer_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            num_producers: 2,
            num_consumers: 3,
            items_per_producer: 20,
            buffer_size: 10,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ControlResult<()> {
        validate_positive(self.num_producers as u64, "num_producers")
            .and_then(|_| validate_positive(self.num_consumers as u64, "num_consumers"))
            .and_then(|_| validate_positive(self.items_per_producer, "items_per_producer"))
            .and_then(|_| validate_positive(self.buffer_size as u64, "buffer_size"))
            .map(|_| ())
            .map_err(|message| ControlError::InvalidConfiguration { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.num_producers, 2);
        assert_eq!(config.num_consumers, 3);
        assert_eq!(config.items_per_producer, 20);
        assert_eq!(config.buffer_size, 10);
    }

    #[test]
    fn test_zero_values_are_rejected() {
        for (field, config) in [
            (
                "num_producers",
                SessionConfig {
                    num_producers: 0,
                    ..Default::default()
                },
            ),
            (
                "num_consumers",
                SessionConfig {
                    num_consumers: 0,
                    ..Default::default()
                },
            ),
            (
                "items_per_producer",
                SessionConfig {
                    items_per_producer: 0,
                    ..Default::default()
                },
            ),
            (
                "buffer_size",
                SessionConfig {
                    buffer_size: 0,
                    ..Default::default()
                },
            ),
        ] {
            match config.validate() {
                Err(ControlError::InvalidConfiguration { message }) => {
                    assert!(message.contains(field), "message {message:?} for {field}");
                }
                other => panic!("expected InvalidConfiguration for {field}, got {other:?}"),
            }
        }
    }
}
