//! Combinators for crossbeam channels: fan-in, fan-out, worker
//! pools and an order-preserving parallel map.
//!
//! Every combinator spawns the threads it needs, wires them together
//! with unbuffered channels, and hands back the receiving end (or,
//! for [`apply()`], the finished collection). A channel closes when its
//! sending side is dropped; the combinators all run until they
//! observe that closure, so shutdown is driven entirely by the data
//! flow. There is no cancellation: a caller that holds a receiver
//! without draining it leaves the threads feeding it blocked on their
//! next send, and one that drops the receiver makes that send panic,
//! by the same rules as any other crossbeam sender whose receiver is
//! gone.
//!
//! # Examples
//!
//! Merge a few producers and count what comes out:
//! ```
//! use chanmux::{count, fan_in, send_iter};
//!
//! let evens = send_iter([2, 4, 6]);
//! let odds = send_iter([1, 3, 5]);
//! assert_eq!(count(fan_in([evens, odds])), 6);
//! ```
//!
//! Run a worker pool that transforms and filters:
//! ```
//! use chanmux::{collect, send_iter, worker_pool};
//!
//! let out = worker_pool(4, send_iter(0..10), |x: i32| {
//!     let y = x * 2;
//!     (y % 4 == 0).then_some(y)
//! });
//! let mut kept = collect(out);
//! kept.sort_unstable();
//! assert_eq!(kept, vec![0, 4, 8, 12, 16]);
//! ```
//!
//! Map a collection in parallel without losing its order:
//! ```
//! use chanmux::apply;
//!
//! let squares = apply(3, (1..=5).collect(), |x: i32| x * x);
//! assert_eq!(squares, vec![1, 4, 9, 16, 25]);
//! ```

mod apply;
mod fan_in;
mod fan_out;
mod mapper;
mod pool;
mod scoped;
mod sink;
mod source;

pub use apply::*;
pub use fan_in::*;
pub use fan_out::*;
pub use mapper::*;
pub use pool::*;
pub use scoped::*;
pub use sink::*;
pub use source::*;
