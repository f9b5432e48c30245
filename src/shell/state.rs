use crate::modules::shifts::use_cases::get_current_shift::handler::GetCurrentShiftHandler;
use crate::modules::shifts::use_cases::list_shift_history::handler::ListShiftHistoryHandler;
use crate::modules::shifts::use_cases::start_event::handler::StartEventHandler;
use crate::modules::shifts::use_cases::start_shift::handler::StartShiftHandler;
use crate::modules::shifts::use_cases::stop_event::handler::StopEventHandler;
use crate::modules::shifts::use_cases::stop_shift::handler::StopShiftHandler;
use crate::shared::infrastructure::document_store::DocumentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_current_shift: Arc<GetCurrentShiftHandler<dyn DocumentStore>>,
    pub start_shift: Arc<StartShiftHandler<dyn DocumentStore>>,
    pub stop_shift: Arc<StopShiftHandler<dyn DocumentStore>>,
    pub start_event: Arc<StartEventHandler<dyn DocumentStore>>,
    pub stop_event: Arc<StopEventHandler<dyn DocumentStore>>,
    pub list_shift_history: Arc<ListShiftHistoryHandler<dyn DocumentStore>>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            get_current_shift: Arc::new(GetCurrentShiftHandler::new(store.clone())),
            start_shift: Arc::new(StartShiftHandler::new(store.clone())),
            stop_shift: Arc::new(StopShiftHandler::new(store.clone())),
            start_event: Arc::new(StartEventHandler::new(store.clone())),
            stop_event: Arc::new(StopEventHandler::new(store.clone())),
            list_shift_history: Arc::new(ListShiftHistoryHandler::new(store)),
        }
    }
}
