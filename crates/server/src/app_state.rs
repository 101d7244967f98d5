use crate::dispatcher::Dispatcher;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) dispatcher: Dispatcher,
}
