//! Name-keyed registries of filters and actors.

use std::collections::HashMap;

use tracing::{debug, trace};

use mc_core::{ActorId, ConfigError, ConfigResult, FilterId, Namespace};
use mc_geometry::GeometryTree;

use crate::{Actor, ActorKind, Attribute, EventRecord, Filter, FilterKind};

/// All filters and actors of one simulation, in registration order.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActorPipeline {
    filters:      Vec<Filter>,
    #[cfg_attr(feature = "serde", serde(skip))]
    filter_index: HashMap<String, FilterId>,
    actors:       Vec<Actor>,
    #[cfg_attr(feature = "serde", serde(skip))]
    actor_index:  HashMap<String, ActorId>,
}

impl ActorPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Filters ───────────────────────────────────────────────────────────

    /// Register a uniquely named filter.
    pub fn add_filter(&mut self, name: &str, kind: FilterKind) -> ConfigResult<FilterId> {
        if self.filter_index.contains_key(name) {
            return Err(ConfigError::DuplicateName {
                namespace: Namespace::Filter,
                name:      name.to_owned(),
            });
        }
        let id = FilterId(self.filters.len() as u32);
        let filter = Filter::new(id, name, kind)?;
        debug!(filter = name, %kind, "registered filter");
        self.filters.push(filter);
        self.filter_index.insert(name.to_owned(), id);
        Ok(id)
    }

    pub fn filter(&self, name: &str) -> Option<&Filter> {
        self.filter_index.get(name).map(|id| &self.filters[id.index()])
    }

    pub fn filter_by_id(&self, id: FilterId) -> Option<&Filter> {
        self.filters.get(id.index())
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    // ── Actors ────────────────────────────────────────────────────────────

    /// Register an actor on volume `mother`.
    ///
    /// `attributes` fixes the actor's output column order.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DuplicateName`] if an actor called `name` exists.
    /// - [`ConfigError::UnknownReference`] if `mother` is not in `geometry`.
    /// - [`ConfigError::InvalidActor`] for a repeated attribute, a recording
    ///   actor without attributes, or a statistics actor with some.
    pub fn add_actor(
        &mut self,
        geometry:   &GeometryTree,
        kind:       ActorKind,
        name:       &str,
        mother:     &str,
        attributes: Vec<Attribute>,
    ) -> ConfigResult<&mut Actor> {
        if self.actor_index.contains_key(name) {
            return Err(ConfigError::DuplicateName {
                namespace: Namespace::Actor,
                name:      name.to_owned(),
            });
        }
        let mother_id = geometry.id_of(mother).ok_or_else(|| ConfigError::UnknownReference {
            namespace: Namespace::Volume,
            name:      mother.to_owned(),
            referrer:  name.to_owned(),
        })?;

        let id = ActorId(self.actors.len() as u32);
        let actor = Actor {
            id,
            name: name.to_owned(),
            kind,
            mother: mother.to_owned(),
            mother_id,
            attributes,
            filters: Vec::new(),
            output: None,
        };
        check_attributes(&actor)?;

        debug!(actor = name, %kind, mother, columns = actor.attributes.len(), "registered actor");
        self.actors.push(actor);
        self.actor_index.insert(name.to_owned(), id);
        Ok(&mut self.actors[id.index()])
    }

    /// Append filter `filter` to the chain of actor `actor`.
    ///
    /// Both must already be registered.
    pub fn attach_filter(&mut self, actor: &str, filter: &str) -> ConfigResult<()> {
        let filter_id = self.filter_index.get(filter).copied().ok_or_else(|| {
            ConfigError::UnknownReference {
                namespace: Namespace::Filter,
                name:      filter.to_owned(),
                referrer:  actor.to_owned(),
            }
        })?;
        let actor_ref = self.actor_mut(actor).ok_or_else(|| ConfigError::UnknownReference {
            namespace: Namespace::Actor,
            name:      actor.to_owned(),
            referrer:  filter.to_owned(),
        })?;
        actor_ref.filters.push(filter_id);
        debug!(actor, filter, chain_len = actor_ref.filters.len(), "attached filter");
        Ok(())
    }

    pub fn actor(&self, name: &str) -> Option<&Actor> {
        self.actor_index.get(name).map(|id| &self.actors[id.index()])
    }

    pub fn actor_mut(&mut self, name: &str) -> Option<&mut Actor> {
        let id = *self.actor_index.get(name)?;
        self.actors.get_mut(id.index())
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Filters attached to `actor`, in attach order.
    pub fn chain<'a>(&'a self, actor: &'a Actor) -> impl Iterator<Item = &'a Filter> + 'a {
        actor.filters.iter().filter_map(|&id| self.filter_by_id(id))
    }

    // ── Evaluation ────────────────────────────────────────────────────────

    /// Logical AND of `actor`'s filter chain over `record`.  An empty chain
    /// accepts everything.
    pub fn accepts(&self, actor: &Actor, record: &EventRecord) -> bool {
        for filter in self.chain(actor) {
            if !filter.accepts(record) {
                trace!(actor = actor.name(), filter = filter.name(), "step rejected");
                return false;
            }
        }
        true
    }

    // ── Validation ────────────────────────────────────────────────────────

    /// Re-check every filter and actor against `geometry`.
    pub fn validate(&self, geometry: &GeometryTree) -> ConfigResult<()> {
        for filter in &self.filters {
            filter.validate()?;
        }
        for actor in &self.actors {
            if geometry.id_of(&actor.mother) != Some(actor.mother_id) {
                return Err(ConfigError::UnknownReference {
                    namespace: Namespace::Volume,
                    name:      actor.mother.clone(),
                    referrer:  actor.name.clone(),
                });
            }
            if let Some(bad) = actor.filters.iter().find(|id| id.index() >= self.filters.len()) {
                return Err(invalid(actor, format!("attached filter {bad} does not exist")));
            }
            check_attributes(actor)?;
            if actor.kind.records_steps() && actor.output.is_none() {
                return Err(invalid(actor, "output path is not set".into()));
            }
        }
        Ok(())
    }
}

fn check_attributes(actor: &Actor) -> ConfigResult<()> {
    let attrs = &actor.attributes;
    if let Some((i, a)) = attrs.iter().enumerate().find(|(i, a)| attrs[..*i].contains(*a)) {
        return Err(invalid(actor, format!("attribute {a} repeated at column {i}")));
    }
    match (actor.kind.records_steps(), attrs.is_empty()) {
        (true, true) => Err(invalid(actor, format!("{} needs at least one attribute", actor.kind))),
        (false, false) => Err(invalid(actor, format!("{} records no attributes", actor.kind))),
        _ => Ok(()),
    }
}

fn invalid(actor: &Actor, reason: String) -> ConfigError {
    ConfigError::InvalidActor { name: actor.name.clone(), reason }
}
