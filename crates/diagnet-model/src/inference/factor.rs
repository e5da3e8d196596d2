//! Dense factors over binary variables.
//!
//! A factor over scope `[v0, v1, ..., vk]` stores `2^(k+1)` values; bit `i`
//! of a value's index is the state of `scope[i]`.

use diagnet_core::types::{CauseId, EffectId};

use crate::cpd::Cpd;

/// A network variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Var {
    Cause(CauseId),
    Effect(EffectId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Factor {
    scope: Vec<Var>,
    values: Vec<f64>,
}

impl Factor {
    /// The empty-scope factor with value 1.
    pub fn unit() -> Self {
        Self {
            scope: Vec::new(),
            values: vec![1.0],
        }
    }

    /// Build from raw parts. Returns `None` if `values.len() != 2^scope.len()`
    /// or the scope repeats a variable.
    pub fn new(scope: Vec<Var>, values: Vec<f64>) -> Option<Self> {
        let distinct = scope
            .iter()
            .enumerate()
            .all(|(i, v)| !scope[..i].contains(v));
        (distinct && values.len() == 1usize << scope.len()).then_some(Self { scope, values })
    }

    /// Single-variable factor `[P(absent), P(present)]`.
    pub fn prior(cause: CauseId, prior: [f64; 2]) -> Self {
        Self {
            scope: vec![Var::Cause(cause)],
            values: prior.to_vec(),
        }
    }

    /// Factor for `P(effect | parents)`.
    ///
    /// Scope is `[effect, p_{n-1}, ..., p_0]` so that the CPD row index
    /// (first parent most significant) sits directly above the effect bit.
    pub fn from_cpd(effect: EffectId, cpd: &Cpd) -> Self {
        let mut scope = Vec::with_capacity(cpd.parents.len() + 1);
        scope.push(Var::Effect(effect));
        scope.extend(cpd.parents.iter().rev().map(|&p| Var::Cause(p)));
        let values = cpd.rows.iter().flat_map(|row| row.iter().copied()).collect();
        Self { scope, values }
    }

    pub fn scope(&self) -> &[Var] {
        &self.scope
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn contains(&self, var: Var) -> bool {
        self.scope.contains(&var)
    }

    fn position(&self, var: Var) -> Option<usize> {
        self.scope.iter().position(|&v| v == var)
    }

    /// Value at an assignment; variables missing from `assignment` are
    /// taken as absent.
    pub fn value(&self, assignment: &[(Var, bool)]) -> f64 {
        let index = self
            .scope
            .iter()
            .enumerate()
            .filter(|(_, v)| assignment.iter().any(|(a, on)| a == *v && *on))
            .fold(0usize, |acc, (i, _)| acc | 1 << i);
        self.values[index]
    }

    /// Sum of all values.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Pointwise product over the union of both scopes.
    pub fn product(&self, other: &Factor) -> Factor {
        let mut scope = self.scope.clone();
        scope.extend(other.scope.iter().filter(|v| !self.scope.contains(v)));

        // For each result bit, where it lands in `other`'s index.
        let other_bits: Vec<Option<usize>> = scope.iter().map(|&v| other.position(v)).collect();
        let self_mask = (1usize << self.scope.len()) - 1;

        let values = (0..1usize << scope.len())
            .map(|index| {
                let other_index = other_bits
                    .iter()
                    .enumerate()
                    .filter_map(|(bit, slot)| slot.map(|s| (bit, s)))
                    .fold(0usize, |acc, (bit, s)| acc | ((index >> bit) & 1) << s);
                self.values[index & self_mask] * other.values[other_index]
            })
            .collect();

        Factor { scope, values }
    }

    /// Marginalize `var` out. A factor without `var` is returned unchanged.
    pub fn sum_out(&self, var: Var) -> Factor {
        let Some(pos) = self.position(var) else {
            return self.clone();
        };
        let mut scope = self.scope.clone();
        scope.remove(pos);
        let low = (1usize << pos) - 1;
        let values = (0..1usize << scope.len())
            .map(|index| {
                let base = (index & low) | ((index & !low) << 1);
                self.values[base] + self.values[base | 1 << pos]
            })
            .collect();
        Factor { scope, values }
    }

    /// Fix `var` to `state` and drop it from the scope.
    pub fn reduce(&self, var: Var, state: bool) -> Factor {
        let Some(pos) = self.position(var) else {
            return self.clone();
        };
        let mut scope = self.scope.clone();
        scope.remove(pos);
        let low = (1usize << pos) - 1;
        let fixed = usize::from(state) << pos;
        let values = (0..1usize << scope.len())
            .map(|index| self.values[(index & low) | ((index & !low) << 1) | fixed])
            .collect();
        Factor { scope, values }
    }

    /// Scale so the values sum to 1. Returns the normalizing constant.
    pub fn normalize(&mut self) -> f64 {
        let z = self.total();
        if z > 0.0 {
            for v in &mut self.values {
                *v /= z;
            }
        }
        z
    }
}
