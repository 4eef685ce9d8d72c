//! Arrival-ordered buffering of icon records

use crate::config::DuplicatePolicy;
use crate::error::TransformError;
use crate::record::IconRecord;
use std::collections::HashMap;

/// What happened to a record handed to the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// Appended after the existing records
    Appended,
    /// Replaced an earlier record with the same identifier, keeping its position
    Replaced {
        /// File the replaced record came from
        previous_source: String,
    },
}

/// Buffers records in arrival order until the end of input.
#[derive(Debug, Default)]
pub struct Aggregator {
    policy: DuplicatePolicy,
    records: Vec<IconRecord>,
    positions: HashMap<String, usize>,
}

impl Aggregator {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self { policy, records: Vec::new(), positions: HashMap::new() }
    }

    /// Add a record, applying the collision policy.
    pub fn push(&mut self, record: IconRecord) -> Result<PushOutcome, TransformError> {
        let Some(&index) = self.positions.get(&record.identifier) else {
            self.positions.insert(record.identifier.clone(), self.records.len());
            self.records.push(record);
            return Ok(PushOutcome::Appended);
        };

        match self.policy {
            DuplicatePolicy::Reject => Err(TransformError::DuplicateIdentifier {
                identifier: record.identifier,
                first: self.records[index].source.clone(),
                second: record.source,
            }),
            DuplicatePolicy::LastWins => {
                let previous = std::mem::replace(&mut self.records[index], record);
                Ok(PushOutcome::Replaced { previous_source: previous.source })
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Hand over the buffered records, in arrival order.
    pub fn finish(self) -> Vec<IconRecord> {
        self.records
    }
}
