// forecourt-core: vehicle catalogue query engine + finance quote calculator.
// two independent pure components composed by the host UI layer: the query
// engine narrows and orders the stock list, the finance calculator turns a
// price/deposit/term triple into a loan quote. all computation is
// deterministic with no external I/O.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x  types.rs: primitives: VehicleId, Money, SortDirection
//   2.x  vehicle.rs: VehicleRecord, SortField, SortSpec
//   3.x  query.rs: free-text filter + multi-field stable sort
//   4.x  catalogue.rs: materialized stock collection, id lookup, demo seed
//   5.x  finance.rs: quote calculation, validation predicates, quote slot
//   6.x  input.rs: keystroke clamping into closed numeric ranges

pub mod catalogue;
pub mod finance;
pub mod input;
pub mod query;
pub mod types;
pub mod vehicle;

// re exports for convenience
pub use catalogue::*;
pub use finance::*;
pub use input::*;
pub use query::*;
pub use types::*;
pub use vehicle::*;
