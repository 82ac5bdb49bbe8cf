//! `mc-actor` — scoring hooks attached to geometry volumes.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`attribute`]  | `Attribute` (closed set of recordable columns), `AttributeValue` |
//! | [`record`]     | `EventRecord`: one transported step as attribute → value  |
//! | [`filter`]     | `Filter`, `FilterKind`                                     |
//! | [`actor`]      | `Actor`, `ActorKind`                                       |
//! | [`pipeline`]   | `ActorPipeline`: name-keyed registries and validation     |
//!
//! # Filter chains
//!
//! An actor's filters are combined with logical AND.  The chain is kept in
//! attach order, but that order only changes which rejecting filter shows up
//! in `trace`-level logs; the accept/reject outcome is the same for every
//! permutation.
//!
//! # Column order
//!
//! The attribute list given to [`ActorPipeline::add_actor`] is the column
//! order of that actor's output rows ([`Actor::project`]).

pub mod actor;
pub mod attribute;
pub mod filter;
pub mod pipeline;
pub mod record;


pub use actor::{Actor, ActorKind};
pub use attribute::{Attribute, AttributeValue};
pub use filter::{Filter, FilterKind};
pub use pipeline::ActorPipeline;
pub use record::EventRecord;
