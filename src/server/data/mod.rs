//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every query is built through SeaORM, so request values only ever reach the store as
//! bound parameters.

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{
    sea_query::{Expr, IntoColumnRef},
    ColumnTrait, Condition,
};

/// `votes + inc_votes`, evaluated by the database.
fn votes_plus<C>(votes: C, inc_votes: i32) -> Expr
where
    C: ColumnTrait + IntoColumnRef,
{
    use sea_orm::sea_query::ExprTrait;

    Expr::col(votes).add(inc_votes)
}

/// Matches only rows whose `votes + inc_votes` stays within `i32`.
///
/// The bound is computed in Rust, so the SQL only compares the stored count and never
/// evaluates the sum.
fn votes_stay_in_range<C>(votes: C, inc_votes: i32) -> Condition
where
    C: ColumnTrait,
{
    let bound = if inc_votes >= 0 {
        votes.lte(i32::MAX - inc_votes)
    } else {
        votes.gte(i32::MIN - inc_votes)
    };

    Condition::all().add(bound)
}
