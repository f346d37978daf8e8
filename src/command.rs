use clap::ValueEnum;
use std::fmt;

/// Operation the service under test is asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Record a sample and wait for it to land
    Add,
    /// Record a sample without waiting
    AddAsync,
    /// Query the average without waiting
    GetAsync,
    /// Assert the current average
    Get,
    /// Wait for every outstanding async operation
    Sync,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Add => "add",
            Verb::AddAsync => "addasync",
            Verb::GetAsync => "getasync",
            Verb::Get => "get",
            Verb::Sync => "sync",
        }
    }

    pub fn is_add(&self) -> bool {
        matches!(self, Verb::Add | Verb::AddAsync)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How reads and writes are mixed in the body of a generated test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Balance {
    /// Async adds only; reads happen through the final assertions
    Write,
    /// Sync adds, followed by a block of async reads
    Read,
    /// Async adds with an async read after each one
    #[default]
    Balanced,
}

impl Balance {
    /// Adds are synchronous only when reads are deferred to a trailing block.
    pub fn add_verb(&self) -> Verb {
        match self {
            Balance::Read => Verb::Add,
            Balance::Write | Balance::Balanced => Verb::AddAsync,
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Balance::Write => "write",
            Balance::Read => "read",
            Balance::Balanced => "balanced",
        };
        f.write_str(name)
    }
}

/// A single row of a generated test.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCommand {
    pub verb: Verb,
    pub action: String,
    pub value: f64,
}

impl TestCommand {
    pub fn new(verb: Verb, action: impl Into<String>, value: f64) -> Self {
        Self {
            verb,
            action: action.into(),
            value,
        }
    }

    pub fn sync() -> Self {
        Self::new(Verb::Sync, "", 0.0)
    }

    /// Fields as they appear in the CSV row.
    pub fn to_record(&self) -> [String; 3] {
        [
            self.verb.as_str().to_string(),
            self.action.clone(),
            self.value.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_verb_per_balance() {
        assert_eq!(Balance::Read.add_verb(), Verb::Add);
        assert_eq!(Balance::Write.add_verb(), Verb::AddAsync);
        assert_eq!(Balance::Balanced.add_verb(), Verb::AddAsync);
    }

    #[test]
    fn test_default_balance_is_balanced() {
        assert_eq!(Balance::default(), Balance::Balanced);
    }

    #[test]
    fn test_sync_record_uses_zero_placeholder() {
        let record = TestCommand::sync().to_record();
        assert_eq!(record, ["sync".to_string(), String::new(), "0".to_string()]);
    }

    #[test]
    fn test_record_keeps_fractional_value() {
        let cmd = TestCommand::new(Verb::AddAsync, "jump", 12.5);
        assert_eq!(cmd.to_record()[0], "addasync");
        assert_eq!(cmd.to_record()[1], "jump");
        assert_eq!(cmd.to_record()[2], "12.5");
    }

    #[test]
    fn test_is_add() {
        assert!(Verb::Add.is_add());
        assert!(Verb::AddAsync.is_add());
        assert!(!Verb::GetAsync.is_add());
        assert!(!Verb::Sync.is_add());
    }
}
