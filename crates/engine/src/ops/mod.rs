mod ledger;

pub use ledger::LedgerSnapshot;
