use crate::traits::{DedupPolicy, Symbol};
use crate::LcsEngine;

pub struct LcsEngineBuilder<'a, T> {
    a: &'a [T],
    b: &'a [T],
    policy: Option<DedupPolicy>,
    eager_graph: bool,
}

impl<'a, T: Symbol> LcsEngineBuilder<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self {
            a,
            b,
            policy: None,
            eager_graph: false,
        }
    }
    pub fn with_policy(mut self, policy: DedupPolicy) -> Self {
        self.policy = Some(policy);
        self
    }
    /// Build the match graph inside [`build`](Self::build) instead of on first use.
    pub fn with_eager_graph(mut self, eager: bool) -> Self {
        self.eager_graph = eager;
        self
    }
    pub fn build(self) -> LcsEngine<'a, T> {
        let engine = match self.policy {
            Some(p) => LcsEngine::with_policy(self.a, self.b, p),
            None => LcsEngine::new(self.a, self.b),
        };
        if self.eager_graph {
            engine.graph();
        }
        engine
    }
}
