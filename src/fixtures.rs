#[cfg(test)]
pub mod test {
    use std::time::Duration;

    use crate::{BoxError, Decode, FlagStruct};

    #[derive(FlagStruct, Debug, Default)]
    pub struct AppConfig {
        /// Verbose output.
        #[flag("verbose")]
        pub verbose: bool,

        /// Database settings.
        #[flag(nested)]
        pub db: DbConfig,

        #[flag("mode,default=slow,allowed=fast;slow")]
        pub mode: String,

        #[flag("endpoint")]
        pub endpoint: Endpoint,

        #[flag("retries")]
        pub retries: Option<u32>,

        #[flag("no-value")]
        pub no_value: i32,

        /// Only bound when the caller allocates it first.
        #[flag(nested)]
        pub pool: Option<Box<PoolConfig>>,

        #[flag("ignored,default=foo")]
        ignored: String,

        pub untagged: String,
    }

    impl AppConfig {
        pub fn ignored_value(&self) -> &str {
            &self.ignored
        }
    }

    #[derive(FlagStruct, Debug, Default)]
    pub struct DbConfig {
        #[flag("db-host,default=127.0.0.1")]
        pub host: String,

        #[flag("db-port,default=5672")]
        pub port: i32,

        #[flag("db-user,required")]
        pub user: String,

        #[flag("db-password")]
        pub password: String,

        #[flag("db-timeout,default=5s")]
        pub timeout: Duration,

        #[flag("db-sequence")]
        pub sequence: Vec<i32>,
    }

    #[derive(FlagStruct, Debug, Default)]
    pub struct PoolConfig {
        #[flag("pool-size,default=4")]
        pub size: usize,
    }

    /// A `host:port` pair, bound as one leaf value.
    #[derive(Debug, Default, PartialEq)]
    pub struct Endpoint {
        pub host: String,
        pub port: u16,
    }

    impl Decode for Endpoint {
        fn decode(&mut self, value: &str) -> Result<(), BoxError> {
            let (host, port) = value
                .rsplit_once(':')
                .ok_or_else(|| format!("expected host:port, got '{value}'"))?;
            self.port = port.parse()?;
            self.host = host.to_string();
            Ok(())
        }
    }

    #[derive(FlagStruct, Debug, Default)]
    pub struct Service {
        #[flag("host,default=localhost")]
        pub host: String,

        #[flag("port,allowed=80;443")]
        pub port: i32,
    }

    #[derive(FlagStruct, Debug, Default)]
    pub struct Tagged {
        #[flag("tags")]
        pub tags: Vec<String>,
    }

    #[derive(FlagStruct, Debug, Default)]
    pub struct Labelled {
        #[flag("label")]
        pub label: String,

        #[flag("wrong,default=a")]
        pub ratio: f32,
    }

    #[derive(FlagStruct, Debug, Default)]
    pub struct Malformed {
        #[flag("first")]
        pub first: String,

        #[flag(",default=x")]
        pub nameless: String,

        #[flag("last")]
        pub last: String,
    }

    #[derive(FlagStruct, Debug, Default)]
    pub struct Conflicting {
        #[flag("level,required,default=3")]
        pub level: u8,
    }

    #[derive(FlagStruct, Debug, Default)]
    pub struct Probe {
        #[flag(",required,default=x")]
        secret: String,

        #[flag(not a valid annotation)]
        pub(crate) internal: u8,

        #[flag("name")]
        pub name: String,
    }

    impl Probe {
        pub fn secret(&self) -> &str {
            &self.secret
        }

        pub fn internal(&self) -> u8 {
            self.internal
        }
    }

    #[test]
    fn endpoint_decodes_host_and_port() {
        let mut e = Endpoint::default();
        e.decode("db.local:5432").unwrap();
        assert_eq!(
            e,
            Endpoint {
                host: "db.local".into(),
                port: 5432
            }
        );
        assert!(e.decode("db.local").is_err());
        assert!(e.decode("db.local:http").is_err());
    }

    #[test]
    fn defaults_are_plain_rust_defaults() {
        let cfg = AppConfig::default();
        assert!(!cfg.verbose);
        assert_eq!(cfg.mode, "");
        assert!(cfg.pool.is_none());
        assert_eq!(cfg.untagged, "");
    }

    #[test]
    fn probe_private_fields_start_empty() {
        let p = Probe::default();
        assert_eq!(p.secret(), "");
        assert_eq!(p.internal(), 0);
    }
}
