//! Begrenztes Protokoll ausgeführter Commands.

use super::AppCommand;
use std::collections::VecDeque;

/// Speichert ausgeführte Commands in Reihenfolge (älteste zuerst).
#[derive(Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
}

impl CommandLog {
    /// Obergrenze; ältere Einträge fallen heraus.
    pub const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Iteriert über alle Einträge (älteste zuerst).
    pub fn entries(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_bounded() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES + 5 {
            log.record(&AppCommand::ResetCamera);
        }
        log.record(&AppCommand::RequestExit);

        assert_eq!(log.len(), CommandLog::MAX_ENTRIES);
        assert!(matches!(log.last(), Some(AppCommand::RequestExit)));
    }
}
