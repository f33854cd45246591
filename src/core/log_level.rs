//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a record.
///
/// The eight syslog-style severities are totally ordered from `Debug` to
/// `Emergency`. `All` is the unleveled tier used by the print methods: it
/// is never part of a [`LevelSet`] and every terminal accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Notice = 2,
    Warning = 3,
    Error = 4,
    Critical = 5,
    Alert = 6,
    Emergency = 7,
    All = 8,
}

impl LogLevel {
    /// Every leveled severity, lowest first. `All` is not included.
    pub const LEVELED: [LogLevel; 8] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Notice,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
        LogLevel::Alert,
        LogLevel::Emergency,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Notice => "NOTICE",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
            LogLevel::Alert => "ALERT",
            LogLevel::Emergency => "EMERGENCY",
            LogLevel::All => "ALL",
        }
    }

    /// Whether this is one of the eight named severities rather than the print tier.
    #[inline]
    pub fn is_leveled(&self) -> bool {
        !matches!(self, LogLevel::All)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => BrightBlack,
            LogLevel::Info => Green,
            LogLevel::Notice => Cyan,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Critical => BrightRed,
            LogLevel::Alert => Magenta,
            LogLevel::Emergency => BrightMagenta,
            LogLevel::All => White,
        }
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "NOTICE" => Ok(LogLevel::Notice),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" | "ERR" => Ok(LogLevel::Error),
            "CRITICAL" | "CRIT" => Ok(LogLevel::Critical),
            "ALERT" => Ok(LogLevel::Alert),
            "EMERGENCY" | "EMERG" => Ok(LogLevel::Emergency),
            "ALL" => Ok(LogLevel::All),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

/// The set of severities a terminal handler accepts.
///
/// Membership, not a threshold: `{Error, Critical}` rejects `Alert`.
/// Use [`LevelSet::at_least`] when a threshold is what you want.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LevelSet {
    bits: u16,
}

impl LevelSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub fn all() -> Self {
        LogLevel::LEVELED.into_iter().collect()
    }

    /// Every severity from `level` up to `Emergency`.
    #[must_use]
    pub fn at_least(level: LogLevel) -> Self {
        LogLevel::LEVELED
            .into_iter()
            .filter(|l| *l >= level)
            .collect()
    }

    /// Parse level names. `all` expands to every severity; an empty list
    /// also means every severity.
    pub fn from_names<I, S>(names: I) -> Result<Self, LoggerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = LevelSet::empty();
        let mut seen_any = false;
        for name in names {
            seen_any = true;
            match name.as_ref().parse::<LogLevel>()? {
                LogLevel::All => set = LevelSet::all(),
                level => set.insert(level),
            }
        }
        Ok(if seen_any { set } else { LevelSet::all() })
    }

    /// Adding `All` is a no-op; it is accepted regardless of membership.
    pub fn insert(&mut self, level: LogLevel) {
        if level.is_leveled() {
            self.bits |= level.bit();
        }
    }

    #[must_use]
    pub fn with(mut self, level: LogLevel) -> Self {
        self.insert(level);
        self
    }

    #[inline]
    pub fn contains(&self, level: LogLevel) -> bool {
        level.is_leveled() && self.bits & level.bit() != 0
    }

    /// Filter decision for a terminal: members and the print tier pass.
    #[inline]
    pub fn accepts(&self, level: LogLevel) -> bool {
        level == LogLevel::All || self.contains(level)
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = LogLevel> + '_ {
        LogLevel::LEVELED.into_iter().filter(|l| self.contains(*l))
    }
}

impl FromIterator<LogLevel> for LevelSet {
    fn from_iter<T: IntoIterator<Item = LogLevel>>(iter: T) -> Self {
        let mut set = LevelSet::empty();
        for level in iter {
            set.insert(level);
        }
        set
    }
}

impl fmt::Display for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|l| l.to_str()).collect();
        write!(f, "{{{}}}", names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Alert < LogLevel::Emergency);
    }

    #[test]
    fn test_level_parse_aliases() {
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("Crit".parse::<LogLevel>().unwrap(), LogLevel::Critical);
        assert_eq!(" emergency ".parse::<LogLevel>().unwrap(), LogLevel::Emergency);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_set_is_membership_not_threshold() {
        let set = LevelSet::from_names(["error", "critical"]).unwrap();
        assert!(set.accepts(LogLevel::Error));
        assert!(set.accepts(LogLevel::Critical));
        assert!(!set.accepts(LogLevel::Alert));
        assert!(!set.accepts(LogLevel::Info));
        assert!(set.accepts(LogLevel::All));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_set_still_accepts_print_tier() {
        let set = LevelSet::empty();
        assert!(set.accepts(LogLevel::All));
        assert!(!set.accepts(LogLevel::Emergency));
    }

    #[test]
    fn test_from_names_expansion() {
        assert_eq!(LevelSet::from_names(Vec::<String>::new()).unwrap(), LevelSet::all());
        assert_eq!(LevelSet::from_names(["all"]).unwrap(), LevelSet::all());
        assert!(LevelSet::from_names(["info", "bogus"]).is_err());
    }

    #[test]
    fn test_at_least() {
        let set = LevelSet::at_least(LogLevel::Error);
        assert_eq!(set.len(), 4);
        assert!(!set.contains(LogLevel::Warning));
        assert!(set.contains(LogLevel::Emergency));
        assert_eq!(set.to_string(), "{ERROR,CRITICAL,ALERT,EMERGENCY}");
    }

    #[test]
    fn test_insert_all_is_noop() {
        let set = LevelSet::empty().with(LogLevel::All);
        assert!(set.is_empty());
    }
}
