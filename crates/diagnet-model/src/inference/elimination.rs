//! Greedy variable elimination.

use std::collections::BTreeSet;

use super::factor::{Factor, Var};

/// Eliminate every variable except `keep` from the factor pool and return
/// the (unnormalized) factor over `keep`.
///
/// At each step the variable whose elimination produces the smallest
/// intermediate factor is chosen; ties go to the lowest variable.
pub fn eliminate(factors: Vec<Factor>, keep: Var) -> Factor {
    let mut pool = factors;
    let mut pending: BTreeSet<Var> = pool
        .iter()
        .flat_map(|f| f.scope().iter().copied())
        .filter(|&v| v != keep)
        .collect();

    loop {
        let Some(var) = pending
            .iter()
            .copied()
            .min_by_key(|&v| induced_width(&pool, v))
        else {
            break;
        };
        pending.remove(&var);
        let (touching, rest): (Vec<Factor>, Vec<Factor>) =
            pool.into_iter().partition(|f| f.contains(var));
        pool = rest;
        let merged = touching
            .iter()
            .fold(Factor::unit(), |acc, f| acc.product(f));
        pool.push(merged.sum_out(var));
    }

    pool.iter().fold(Factor::unit(), |acc, f| acc.product(f))
}

/// Scope size of the product of every factor mentioning `var`.
fn induced_width(pool: &[Factor], var: Var) -> usize {
    let scope: BTreeSet<Var> = pool
        .iter()
        .filter(|f| f.contains(var))
        .flat_map(|f| f.scope().iter().copied())
        .collect();
    scope.len()
}
