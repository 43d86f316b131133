/*!
# Graph Algorithms

This module provides the **all-pairs shortest path** engine and the traversal routines the
generators rely on. All algorithms are re-exported at the top level of this module, so you can
simply do:
```rust
use fwgraphs::algo::*;
```
and gain access to [`FloydWarshall`], [`ShortestPaths`], [`reconstruct_path`], [`BFS`], ...
*/

mod distance;
mod floyd_warshall;
mod ordering;
mod path;
mod traversal;

use crate::{diagnostics::*, error::*, ops::*, prelude::*, utils::*};

pub use distance::*;
pub use floyd_warshall::*;
pub use ordering::*;
pub use path::*;
pub use traversal::*;
