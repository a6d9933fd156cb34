use crate::{AutoAction, AutoplayError};
use blackjack_core::{Deck, EventBus, Table, TableConfig, TableSnapshot};

#[derive(Debug)]
pub struct Simulator {
    pub table: Table,
    pub events: EventBus,
}

impl Simulator {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            events: EventBus::default(),
        }
    }

    /// Fresh table whose shoe is shuffled from `seed`, whatever the config says.
    pub fn seeded(config: TableConfig, seed: u64) -> Self {
        let config = TableConfig {
            seed: Some(seed),
            ..config
        };
        Self::new(Table::new(config))
    }

    pub fn with_deck(config: TableConfig, deck: Deck) -> Self {
        Self::new(Table::with_deck(config, deck))
    }

    pub fn snapshot(&self) -> TableSnapshot {
        self.table.snapshot()
    }

    pub fn phase_name(&self) -> String {
        format!("{:?}", self.table.phase())
    }

    pub fn apply(&mut self, action: AutoAction) -> Result<TableSnapshot, AutoplayError> {
        log::debug!(
            "round {} {}: {}",
            self.table.round(),
            self.phase_name(),
            action.short_label()
        );
        let snapshot = self.table.submit(action.to_input(), &mut self.events)?;
        Ok(snapshot)
    }

    /// Events produced since the last call.
    pub fn take_event_count(&mut self) -> usize {
        let count = self.events.len();
        self.events.drain().for_each(drop);
        count
    }
}
