use std::sync::Arc;

use predarena::adapter::store::MemoryStore;
use predarena::application::{
    AgentService, MarketService, ResolutionService, StandingsService, SubmissionService,
};
use predarena::config::Config;

/// Every service wired to one shared in-memory store.
pub struct Arena {
    pub store: Arc<MemoryStore>,
    pub markets: MarketService<MemoryStore>,
    pub agents: AgentService<MemoryStore>,
    pub submissions: SubmissionService<MemoryStore>,
    pub resolutions: ResolutionService<MemoryStore>,
    pub standings: StandingsService<MemoryStore>,
}

impl Arena {
    pub fn new(config: &Config) -> Self {
        Self::with_store(Arc::new(MemoryStore::new()), config)
    }

    pub fn with_store(store: Arc<MemoryStore>, config: &Config) -> Self {
        Self {
            markets: MarketService::new(Arc::clone(&store)),
            agents: AgentService::new(Arc::clone(&store)),
            submissions: SubmissionService::new(Arc::clone(&store)),
            resolutions: ResolutionService::new(Arc::clone(&store), config.scoring_params()),
            standings: StandingsService::new(
                Arc::clone(&store),
                config.decay_params(),
                config.standings.top_n,
            ),
            store,
        }
    }
}
