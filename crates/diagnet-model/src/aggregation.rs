//! Co-occurrence aggregation: raw facts → frequency tables.
//!
//! Self-loops and facts with an empty name are dropped silently; they are
//! expected noise in the feed, not errors.

use diagnet_core::types::{CauseId, EffectId, FxHashMap, NameRegistry};
use diagnet_core::Fact;

/// Frequency tables over the retained facts.
///
/// Causes and effects get dense indices in first-seen order. Per-effect
/// cause counts keep the order in which each cause was first seen with
/// that effect, which is the tie-break order for parent selection.
#[derive(Debug, Default)]
pub struct Cooccurrence {
    causes: NameRegistry,
    effects: NameRegistry,
    effect_cause_counts: Vec<Vec<(CauseId, u64)>>,
    cause_marginal_counts: Vec<u64>,
    retained: usize,
    dropped: usize,
}

/// Aggregate facts into effect→cause counts and marginal cause counts.
pub fn aggregate<'a, I>(facts: I) -> Cooccurrence
where
    I: IntoIterator<Item = &'a Fact>,
{
    let mut table = Cooccurrence::default();
    // (effect, cause) → position in effect_cause_counts[effect]
    let mut slots: FxHashMap<(EffectId, CauseId), usize> = FxHashMap::default();

    for fact in facts {
        if !fact.is_retainable() {
            table.dropped += 1;
            continue;
        }
        table.retained += 1;

        let cause = CauseId::new(table.causes.intern(&fact.cause));
        if cause.index() == table.cause_marginal_counts.len() {
            table.cause_marginal_counts.push(0);
        }
        table.cause_marginal_counts[cause.index()] += 1;

        let effect = EffectId::new(table.effects.intern(&fact.effect));
        if effect.index() == table.effect_cause_counts.len() {
            table.effect_cause_counts.push(Vec::new());
        }
        let counts = &mut table.effect_cause_counts[effect.index()];
        let slot = *slots.entry((effect, cause)).or_insert_with(|| {
            counts.push((cause, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    table
}

impl Cooccurrence {
    /// Facts that survived filtering.
    pub fn retained(&self) -> usize {
        self.retained
    }

    /// Self-loops and incomplete facts that were discarded.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn cause_count(&self) -> usize {
        self.causes.len()
    }

    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    pub fn cause_name(&self, cause: CauseId) -> &str {
        self.causes.resolve(cause.index()).unwrap_or_default()
    }

    pub fn effect_name(&self, effect: EffectId) -> &str {
        self.effects.resolve(effect.index()).unwrap_or_default()
    }

    pub fn cause_id(&self, name: &str) -> Option<CauseId> {
        self.causes.get(name).map(CauseId::new)
    }

    pub fn effect_id(&self, name: &str) -> Option<EffectId> {
        self.effects.get(name).map(EffectId::new)
    }

    /// Total occurrences of `cause` across all retained facts.
    pub fn marginal_count(&self, cause: CauseId) -> u64 {
        self.cause_marginal_counts
            .get(cause.index())
            .copied()
            .unwrap_or(0)
    }

    /// Causes recorded with `effect` and their counts, in first-seen order.
    pub fn cause_counts(&self, effect: EffectId) -> &[(CauseId, u64)] {
        self.effect_cause_counts
            .get(effect.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Occurrences of the (cause, effect) pair.
    pub fn pair_count(&self, cause: CauseId, effect: EffectId) -> u64 {
        self.cause_counts(effect)
            .iter()
            .find(|(c, _)| *c == cause)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Effect ids in first-seen order.
    pub fn effect_ids(&self) -> impl Iterator<Item = EffectId> {
        (0..self.effects.len()).map(EffectId::new)
    }

    /// Cause ids in first-seen order.
    pub fn cause_ids(&self) -> impl Iterator<Item = CauseId> {
        (0..self.causes.len()).map(CauseId::new)
    }
}
