use vvchain_ledger::LedgerState;

/// Per-transaction context handed to every contract operation.
///
/// The platform constructs one of these for each transaction it runs, wiring
/// in the ledger adapter and the already-verified caller identity, and passes
/// it by reference into the operation. The contract never holds one across
/// invocations, so no state can go stale between transactions.
pub struct TransactionContext<'a, L: LedgerState> {
    ledger: &'a L,
    client_id: String,
}

impl<'a, L: LedgerState> TransactionContext<'a, L> {
    pub fn new(ledger: &'a L, client_id: impl Into<String>) -> Self {
        Self {
            ledger,
            client_id: client_id.into(),
        }
    }

    /// The ledger adapter for this transaction.
    pub fn ledger(&self) -> &L {
        self.ledger
    }

    /// Identity of the submitting client, as verified by the platform before
    /// the contract runs.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}
