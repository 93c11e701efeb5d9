use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("{store} does not make '{kind}' pizza")]
    UnsupportedPizza { store: String, kind: String },

    #[error("Remote control has no slot {slot} (slots: {slots})")]
    SlotOutOfRange { slot: usize, slots: usize },

    #[error("Observer is already registered")]
    ObserverAlreadyRegistered,

    #[error("Observer is not registered")]
    ObserverNotRegistered,

    #[error("Observer is borrowed elsewhere and cannot take an update")]
    ObserverBusy,

    #[error("Unknown pattern '{0}' (expected one of: abstract_factory, command, decorator, factory_method, observer, singleton)")]
    UnknownPattern(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PatternError {
    pub fn unsupported_pizza(store: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnsupportedPizza {
            store: store.into(),
            kind: kind.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_pizza_message() {
        let err = PatternError::unsupported_pizza("Chicago Pizza Store", "hawaiian");
        assert_eq!(
            err.to_string(),
            "Chicago Pizza Store does not make 'hawaiian' pizza"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err::<(), _>(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))?;
            Ok(())
        }

        assert!(matches!(fails(), Err(PatternError::Io(_))));
    }
}
