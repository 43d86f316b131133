/*!
# Input / Output

- [`json`] writes generated instances in the flat document shape
  `{ "vertices": [...], "edges": [[u, v, w], ...] }` and reads such documents back,
- [`table`] renders the engine's distance and next-hop matrices as labelled text tables.

Nothing in here is used during a computation; both are optional surfaces around the generators
and the engine.
*/

pub mod json;
pub mod table;

pub use json::*;
pub use table::*;
