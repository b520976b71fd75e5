use crate::modules::service_desk::adapters::outbound::entity_store_in_memory::InMemoryEntityStore;
use crate::modules::service_desk::core::seed::seed_data;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryEntityStore::seeded(seed_data())))
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryEntityStore::seeded(seed_data());
    store.toggle_offline();
    AppState::new(Arc::new(store))
}
