//! Process-wide tuning knobs read from environment variables.
//!
//! A parameter is declared as a `static` holding the name of an environment variable and the
//! textual form of its default value. It is resolved on first access and cached afterwards,
//! so changes to the environment after the first read are silently ignored.
//!
//! ```
//! use foliation::params::EnvParam;
//! static DEPTH: EnvParam<u32> = EnvParam::new("FOLIATION_DOC_DEPTH", "3");
//!
//! // not set in the environment: the default is parsed
//! assert_eq!(DEPTH.get(), 3);
//! ```
//!
//! These knobs only provide defaults. Anything that is set explicitly on a query takes precedence.

use once_cell::sync::OnceCell;
use std::str::FromStr;

/// Default upper bound on the number of subsets stored by an enumeration query.
pub static MAX_WITNESSES: EnvParam<usize> = EnvParam::new("FOLIATION_MAX_WITNESSES", "1000000");

/// If true, the statistics of each query are logged at the `INFO` level once it completes.
pub static PRINT_STATS: EnvParam<bool> = EnvParam::new("FOLIATION_PRINT_STATS", "false");

pub struct EnvParam<T> {
    value: OnceCell<T>,
    env: &'static str,
    default: &'static str,
}

impl<T> EnvParam<T> {
    pub const fn new(env: &'static str, default: &'static str) -> EnvParam<T> {
        EnvParam {
            value: OnceCell::new(),
            env,
            default,
        }
    }

    /// Name of the environment variable backing this parameter.
    pub fn name(&self) -> &'static str {
        self.env
    }
}

impl<T: FromStr> EnvParam<T> {
    fn parse_default(&self) -> T {
        match T::from_str(self.default) {
            Ok(v) => v,
            // the default is a compile time literal, failing to parse it is a programming error
            Err(_) => panic!("[{}] invalid default value \"{}\"", self.env, self.default),
        }
    }

    fn resolve(&self) -> T {
        match std::env::var(self.env) {
            Ok(raw) => match T::from_str(raw.trim()) {
                Ok(value) => value,
                Err(_) => {
                    tracing::warn!(
                        "could not parse \"{}\" for {}, using default \"{}\"",
                        raw,
                        self.env,
                        self.default
                    );
                    self.parse_default()
                }
            },
            Err(std::env::VarError::NotPresent) => self.parse_default(),
            Err(err) => {
                tracing::warn!("{}: {}, using default \"{}\"", self.env, err, self.default);
                self.parse_default()
            }
        }
    }

    /// Returns the value of the parameter, reading the environment on the first call.
    ///
    /// # Panic
    /// Panics if the environment variable is unset or invalid and the default cannot be parsed.
    pub fn get(&self) -> T
    where
        T: Copy,
    {
        *self.get_ref()
    }

    pub fn get_ref(&self) -> &T {
        self.value.get_or_init(|| self.resolve())
    }

    /// Forces the value of the parameter.
    ///
    /// # Panic
    /// Panics if the parameter was already initialized, which typically means it was already read.
    pub fn set(&self, value: T) {
        if self.value.set(value).is_err() {
            panic!("parameter {} is already initialized", self.env);
        }
    }
}
