//! Similarity-guided best-first expansion.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use tessera_core::{EntityRef, TesseraResult, Window};
use tracing::trace;

use crate::graph::Snapshot;
use crate::similarity::cosine_similarity;
use crate::target::SearchTarget;
use crate::window_filter::WindowFilter;

/// Frontier entry. Higher score first; equal scores in discovery order.
#[derive(Debug)]
struct Candidate {
    score: f32,
    seq: usize,
    entity: EntityRef,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

struct Frontier<'a> {
    snapshot: &'a Snapshot,
    selected: &'a HashSet<EntityRef>,
    filter: WindowFilter<'a>,
    query: &'a [f32],
    target: SearchTarget,
    heap: BinaryHeap<Candidate>,
    seen: HashSet<EntityRef>,
    next_seq: usize,
}

impl<'a> Frontier<'a> {
    /// Push the unselected, window-eligible neighbours of `origin`.
    ///
    /// Neighbours the target cannot admit, or that have no eligible document
    /// to score, never enter the heap. They are walked through immediately so
    /// whatever lies behind them is still discovered.
    fn discover_neighbors(&mut self, origin: &EntityRef) -> TesseraResult<()> {
        let snapshot = self.snapshot;
        let filter = self.filter;
        let mut queue: VecDeque<EntityRef> = snapshot.graph.neighbors(origin)?.into();

        while let Some(entity) = queue.pop_front() {
            if self.selected.contains(&entity) || !self.seen.insert(entity.clone()) {
                continue;
            }
            if !filter.admits_entity(&entity)? {
                continue;
            }
            if !self.target.admits(&entity) {
                queue.extend(snapshot.graph.neighbors(&entity)?);
                continue;
            }
            match snapshot
                .store
                .get(&entity)
                .filter(|document| filter.admits_lifespan(document))
            {
                Some(document) => {
                    let score = cosine_similarity(self.query, &document.embedding) as f32;
                    self.heap.push(Candidate {
                        score,
                        seq: self.next_seq,
                        entity,
                    });
                    self.next_seq += 1;
                }
                None => queue.extend(snapshot.graph.neighbors(&entity)?),
            }
        }
        Ok(())
    }
}

/// Entities to add with their scores, in admission order.
///
/// The frontier starts as every neighbour of the selection. Popping a
/// candidate admits it, then pushes its own neighbours. Only kinds `target`
/// accepts are ever ranked; the other kind is a pass-through.
pub(crate) fn expand(
    snapshot: &Snapshot,
    selected: &HashSet<EntityRef>,
    seeds: &[EntityRef],
    query: &[f32],
    limit: usize,
    window: Option<Window>,
    target: SearchTarget,
) -> TesseraResult<Vec<(EntityRef, f32)>> {
    let mut frontier = Frontier {
        snapshot,
        selected,
        filter: snapshot.filter(window),
        query,
        target,
        heap: BinaryHeap::new(),
        seen: HashSet::new(),
        next_seq: 0,
    };
    for seed in seeds {
        frontier.discover_neighbors(seed)?;
    }

    let mut added = Vec::new();
    while added.len() < limit {
        let Some(candidate) = frontier.heap.pop() else {
            break;
        };
        trace!(entity = %candidate.entity, score = candidate.score, "frontier pop");
        added.push((candidate.entity.clone(), candidate.score));
        if added.len() == limit {
            break;
        }
        frontier.discover_neighbors(&candidate.entity)?;
    }

    Ok(added)
}
