//! The aggregation and allocation engine
//!
//! Pure computations over record snapshots. Nothing in this module performs
//! I/O or mutates its input: each function takes slices of records and
//! returns freshly built view rows, so callers can invoke it repeatedly from
//! any scheduling model without locks.
//!
//! The error surface is deliberately empty. Division is guarded, grouping
//! and sorting are defined on empty input, and unknown join keys (an
//! unbudgeted category, an un-policied investment kind) degrade to absence
//! or a zero-valued field instead of faulting. Input-shape validation
//! happens at the shell boundary via the model `validate` methods.

pub mod aggregate;
pub mod allocation;
pub mod breakdown;
pub mod budget_status;
pub mod summary;

pub use aggregate::{group_sum, most_recent, net_worth, percent_of, total_of};
pub use allocation::{compute_allocation_suggestion, AllocationPlan, AllocationRow};
pub use breakdown::{
    compute_category_breakdown, compute_investment_breakdown, CategoryRow, InvestmentBreakdown,
    InvestmentKindRow,
};
pub use budget_status::{compute_budget_status, BudgetStatusRow};
pub use summary::{build_summary, SummaryReport};
