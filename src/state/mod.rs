// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod selection;
pub mod app_state;

pub use reactivity::*;
pub use selection::*;
pub use app_state::*;
