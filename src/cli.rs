//! Clap adapter for flagbind.
//!
//! Compiled only with the `clap` Cargo feature (on by default). It lets a
//! clap-based application hand its trailing `name=value` arguments to the
//! binding engine:
//!
//! ```ignore
//! #[derive(Parser)]
//! struct Cli {
//!     #[arg(long)]
//!     verbose: bool,
//!
//!     #[command(flatten)]
//!     flags: FlagArgs,
//! }
//!
//! // app --verbose -- -db-host=10.0.0.5 -db-port=6432
//! let cli = Cli::parse();
//! let db: DbConfig = cli.flags.load()?;
//! ```
//!
//! Everything after `--` (or any bare `name=value` positional) is collected
//! verbatim; clap does not interpret it.

use clap::Args;

use crate::builder::Binder;
use crate::error::FlagError;
use crate::types::FlagStruct;

/// Clap-derived args that capture raw `name=value` flags for binding.
#[derive(Debug, Clone, Default, Args)]
pub struct FlagArgs {
    /// Settings in `-name=value` form, bound into the application config.
    #[arg(
        value_name = "NAME=VALUE",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub flags: Vec<String>,
}

impl FlagArgs {
    /// Convert the captured flags into a [`Binder`], for combining with other
    /// sources.
    pub fn into_binder(self) -> Binder {
        Binder::new().args(self.flags)
    }

    /// Bind the captured flags into `target`.
    pub fn decode<T: FlagStruct>(&self, target: &mut T) -> Result<(), FlagError> {
        crate::walk::decode_from(target, &self.flags)
    }

    /// Bind the captured flags into `T::default()`.
    pub fn load<T: FlagStruct + Default>(&self) -> Result<T, FlagError> {
        let mut target = T::default();
        self.decode(&mut target)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::Service;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[arg(long)]
        verbose: bool,

        #[command(flatten)]
        flags: FlagArgs,
    }

    fn parse(args: &[&str]) -> TestCli {
        TestCli::try_parse_from(args).unwrap()
    }

    #[test]
    fn no_flags() {
        let cli = parse(&["app"]);
        assert!(cli.flags.flags.is_empty());
        let svc: Service = cli.flags.load().unwrap();
        assert_eq!(svc.host, "localhost");
    }

    #[test]
    fn bare_positional_flags() {
        let cli = parse(&["app", "--verbose", "port=443", "host=example.com"]);
        assert!(cli.verbose);
        assert_eq!(cli.flags.flags, vec!["port=443", "host=example.com"]);
        let svc: Service = cli.flags.load().unwrap();
        assert_eq!(svc.port, 443);
        assert_eq!(svc.host, "example.com");
    }

    #[test]
    fn dashed_flags_after_separator() {
        let cli = parse(&["app", "--", "-port=80", "--host=a.b"]);
        assert!(!cli.verbose);
        let mut svc = Service::default();
        cli.flags.decode(&mut svc).unwrap();
        assert_eq!(svc.port, 80);
        assert_eq!(svc.host, "a.b");
    }

    #[test]
    fn binding_errors_surface() {
        let cli = parse(&["app", "--", "-port=8080"]);
        let result: Result<Service, _> = cli.flags.load();
        assert!(matches!(result, Err(FlagError::ValueNotAllowed { .. })));
    }

    #[test]
    fn into_binder_keeps_order() {
        let cli = parse(&["app", "--", "-host=one", "-host=two"]);
        let binder = cli.flags.into_binder().arg("-port=80");
        let svc: Service = binder.load().unwrap();
        assert_eq!(svc.host, "one");
        assert_eq!(svc.port, 80);
    }
}
