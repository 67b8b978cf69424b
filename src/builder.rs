use crate::error::FlagError;
use crate::types::FlagStruct;
use crate::walk;

/// Entry point for building a flag binder.
pub struct Flagbind;

impl Flagbind {
    pub fn builder() -> Binder {
        Binder::new()
    }
}

/// Collects argument sources, then binds them into one or more targets.
///
/// Sources are appended in call order. Lookup is first-match-wins, so
/// arguments added earlier take precedence over later ones with the same
/// flag.
///
/// ```ignore
/// let config: AppConfig = Flagbind::builder()
///     .env_args()
///     .arg("-log-level=info")
///     .load()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Binder {
    args: Vec<String>,
}

impl Binder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append every argument from `args`.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append the process arguments, skipping the program name.
    pub fn env_args(self) -> Self {
        self.args(std::env::args().skip(1))
    }

    /// The arguments collected so far, in lookup order.
    pub fn collected(&self) -> &[String] {
        &self.args
    }

    /// Bind the collected arguments into an existing value.
    pub fn decode<T: FlagStruct>(&self, target: &mut T) -> Result<(), FlagError> {
        tracing::debug!(args = self.args.len(), "binding flags");
        walk::decode_from(target, &self.args)
    }

    /// Start from `T::default()` and bind the collected arguments into it.
    pub fn load<T: FlagStruct + Default>(&self) -> Result<T, FlagError> {
        let mut target = T::default();
        self.decode(&mut target)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{AppConfig, Service};

    #[test]
    fn load_from_explicit_args() {
        let svc: Service = Flagbind::builder().arg("-port=80").load().unwrap();
        assert_eq!(svc.port, 80);
        assert_eq!(svc.host, "localhost");
    }

    #[test]
    fn earlier_sources_win() {
        let svc: Service = Flagbind::builder()
            .args(["-host=first"])
            .args(vec![String::from("-host=second")])
            .load()
            .unwrap();
        assert_eq!(svc.host, "first");
    }

    #[test]
    fn decode_into_existing_value() {
        let binder = Binder::new().args(["-db-user=root", "-db-port=6000"]);
        let mut cfg = AppConfig::default();
        cfg.db.host = "keep".into();
        binder.decode(&mut cfg).unwrap();
        assert_eq!(cfg.db.port, 6000);
        // Defaults overwrite whatever was there.
        assert_eq!(cfg.db.host, "127.0.0.1");
    }

    #[test]
    fn load_propagates_errors() {
        let result: Result<AppConfig, _> = Binder::new().load();
        assert!(matches!(result, Err(FlagError::MissingRequiredFlag { .. })));
    }

    #[test]
    fn collected_preserves_order() {
        let binder = Binder::new().arg("-a=1").args(["-b=2", "-c=3"]);
        assert_eq!(binder.collected(), &["-a=1", "-b=2", "-c=3"]);
    }

    #[test]
    fn env_args_skips_program_name() {
        let binder = Binder::new().env_args();
        let expected: Vec<String> = std::env::args().skip(1).collect();
        assert_eq!(binder.collected(), expected.as_slice());
    }
}
