//! Business logic: overwrite calculation and the reconciliation engine.

pub mod overwrite;
pub mod reconcile;

#[cfg(test)]
mod test;
