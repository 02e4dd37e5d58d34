// ============================================================
// Layer 4 — Usage Policy / Aggregator
// ============================================================
// Accumulates triplets across the whole document while capping
// how many times any single transition phrase may be reused.
//
// Why cap reuse?
//   Stock phrases ("Par ailleurs,", "En revanche,") recur in
//   almost every article. Without a cap the training set would
//   be dominated by a handful of transitions and the fine-tuned
//   model would parrot them. Three examples per phrase is
//   plenty.
//
// Policy, applied per triplet in pipeline order:
//   - increment the usage counter for the triplet's transition
//   - count ≤ cap → keep the triplet
//   - count > cap → discard it, record the excess occurrence,
//     and mark the transition as rejected
//
// A rejected transition never leaves the rejected set, but the
// triplets accepted before it crossed the cap stay accepted.
// This makes the whole run order-sensitive: articles must be
// processed in document order and triplets in match order.
//
// All collections are ordered (BTreeMap/BTreeSet) so iteration
// — and therefore every serialised report — is deterministic.
//
// Reference: Rust Book §8 (HashMaps and friends)

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::triplet::Triplet;

/// Everything the aggregator knows once the run is over.
/// Handed to the export layer as a single value.
#[derive(Debug, Clone)]
pub struct ExtractionResults {
    /// Accepted triplets, in acceptance order
    pub triplets: Vec<Triplet>,

    /// Distinct matched transitions never rejected, sorted
    pub accepted_transitions: Vec<String>,

    /// Distinct rejected transitions, sorted
    pub rejected_transitions: Vec<String>,

    /// Rejected transition → number of excess occurrences
    /// beyond the cap
    pub repetitions: BTreeMap<String, usize>,
}

/// Tracks per-transition usage and applies the reuse cap.
pub struct UsagePolicy {
    /// Maximum accepted triplets per transition text
    cap: usize,

    /// Transition text → total triplets produced for it
    /// (counts both accepted and discarded ones)
    usage: BTreeMap<String, usize>,

    /// Transition text → occurrences beyond the cap
    repetitions: BTreeMap<String, usize>,

    /// Transitions that crossed the cap at least once
    rejected: BTreeSet<String>,

    /// The accepted triplets, in acceptance order
    accepted: Vec<Triplet>,
}

impl UsagePolicy {
    /// Create a new UsagePolicy with the given reuse cap
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            usage:       BTreeMap::new(),
            repetitions: BTreeMap::new(),
            rejected:    BTreeSet::new(),
            accepted:    Vec::new(),
        }
    }

    /// Offer one triplet to the policy. Returns true if it was
    /// kept, false if the transition's cap was already reached.
    pub fn offer(&mut self, triplet: Triplet) -> bool {
        let count = self.usage.entry(triplet.transition.clone()).or_insert(0);
        *count += 1;

        if *count <= self.cap {
            self.accepted.push(triplet);
            true
        } else {
            *self.repetitions.entry(triplet.transition.clone()).or_insert(0) += 1;
            self.rejected.insert(triplet.transition);
            false
        }
    }

    /// Number of accepted triplets so far
    pub fn accepted_len(&self) -> usize {
        self.accepted.len()
    }

    /// Consume the policy and produce the final reports.
    ///
    /// Accepted transitions = every transition that produced at
    /// least one triplet, minus the rejected set. Both report
    /// lists come out lexicographically sorted (BTree order).
    pub fn into_results(self) -> ExtractionResults {
        let accepted_transitions = self
            .usage
            .keys()
            .filter(|t| !self.rejected.contains(*t))
            .cloned()
            .collect();

        ExtractionResults {
            triplets:             self.accepted,
            accepted_transitions,
            rejected_transitions: self.rejected.into_iter().collect(),
            repetitions:          self.repetitions,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn triplet(transition: &str) -> Triplet {
        Triplet::new("avant", transition, "après")
    }

    #[test]
    fn test_keeps_up_to_cap() {
        let mut policy = UsagePolicy::new(3);
        assert!(policy.offer(triplet("Par ailleurs,")));
        assert!(policy.offer(triplet("Par ailleurs,")));
        assert!(policy.offer(triplet("Par ailleurs,")));
        assert_eq!(policy.accepted_len(), 3);
    }

    #[test]
    fn test_rejects_beyond_cap_but_keeps_earlier() {
        let mut policy = UsagePolicy::new(3);
        for _ in 0..3 {
            assert!(policy.offer(triplet("En revanche,")));
        }
        // Fourth and fifth occurrences are discarded
        assert!(!policy.offer(triplet("En revanche,")));
        assert!(!policy.offer(triplet("En revanche,")));

        let results = policy.into_results();
        // The first three accepted triplets stay accepted
        assert_eq!(results.triplets.len(), 3);
        assert_eq!(results.rejected_transitions, vec!["En revanche,"]);
        // Two excess occurrences were recorded
        assert_eq!(results.repetitions["En revanche,"], 2);
    }

    #[test]
    fn test_cap_is_per_transition() {
        let mut policy = UsagePolicy::new(2);
        assert!(policy.offer(triplet("A longer one")));
        assert!(policy.offer(triplet("A longer one")));
        assert!(!policy.offer(triplet("A longer one")));
        // A different transition has its own counter
        assert!(policy.offer(triplet("B other one")));

        let results = policy.into_results();
        assert_eq!(results.triplets.len(), 3);
        assert_eq!(results.accepted_transitions, vec!["B other one"]);
        assert_eq!(results.rejected_transitions, vec!["A longer one"]);
    }

    #[test]
    fn test_transition_text_is_case_sensitive() {
        let mut policy = UsagePolicy::new(1);
        assert!(policy.offer(triplet("Ensuite,")));
        // Different casing is a different counter
        assert!(policy.offer(triplet("ensuite,")));
        assert_eq!(policy.accepted_len(), 2);
    }

    #[test]
    fn test_accepted_and_rejected_partition_all_counted() {
        let mut policy = UsagePolicy::new(1);
        policy.offer(triplet("gardée"));
        policy.offer(triplet("rejetée"));
        policy.offer(triplet("rejetée"));

        let results = policy.into_results();
        let mut all: Vec<String> = results.accepted_transitions.clone();
        all.extend(results.rejected_transitions.clone());
        all.sort();
        // Accepted ∪ Rejected = every transition ever counted
        assert_eq!(all, vec!["gardée", "rejetée"]);
        // And the two sets are disjoint
        assert!(!results
            .accepted_transitions
            .iter()
            .any(|t| results.rejected_transitions.contains(t)));
    }

    #[test]
    fn test_reports_are_sorted() {
        let mut policy = UsagePolicy::new(3);
        policy.offer(triplet("zeta"));
        policy.offer(triplet("alpha"));
        policy.offer(triplet("mike"));

        let results = policy.into_results();
        assert_eq!(results.accepted_transitions, vec!["alpha", "mike", "zeta"]);
    }

    #[test]
    fn test_empty_run() {
        let results = UsagePolicy::new(3).into_results();
        assert!(results.triplets.is_empty());
        assert!(results.accepted_transitions.is_empty());
        assert!(results.rejected_transitions.is_empty());
        assert!(results.repetitions.is_empty());
    }
}
