//! Property-test run profile for CI and local overrides.
//!
//! Every proptest suite in the workspace reads its case count and fork mode
//! through [`ProptestRunProfile`] so one pair of environment variables tunes
//! them all.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable toggling forked proptest execution.
pub const JUNCTION_PBT_FORK_ENV_KEY: &str = "JUNCTION_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the process environment, falling back to the
    /// supplied defaults for unset or malformed variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use junction_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::load_from(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Loads a profile using `lookup` in place of the process environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use junction_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load_from(64, false, |key| {
    ///     (key == "PROPTEST_CASES").then(|| "8".to_owned())
    /// });
    /// assert_eq!(profile.cases(), 8);
    /// assert!(!profile.fork());
    /// ```
    #[must_use]
    pub fn load_from<F>(default_cases: u32, default_fork: bool, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            cases: read_override(&lookup, PROPTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: read_override(&lookup, JUNCTION_PBT_FORK_ENV_KEY, default_fork, parse_bool),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether proptest cases run in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn read_override<T, L, P>(lookup: &L, key: &'static str, default: T, parse: P) -> T
where
    L: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T, String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring malformed property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("case count must be positive".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("not a case count: {error}")),
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("not a boolean: {other:?}")),
    }
}
